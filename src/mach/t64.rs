//! Minimal single entry tape image.
//!
//! Layout: 64 byte header, one 32 byte directory entry holding only the
//! name, then the loadable file including its load address. The directory
//! entry leaves the entry type, start and end address fields empty, so
//! loaders that depend on them will not accept the image.

use super::Prg;
use crate::lang::token::petscii;

pub const SIGNATURE: &[u8; 12] = b"C64-TAPE-RAW";
pub const HEADER_LEN: usize = 64;
pub const ENTRY_LEN: usize = 32;
pub const VERSION: u8 = 0x01;
pub const DEFAULT_NAME: &str = "PROGRAM";

const VERSION_OFFSET: usize = 0x10;
const ENTRIES_OFFSET: usize = 0x1E;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tape {
    name: [u8; ENTRY_LEN],
    prg: Vec<u8>,
}

impl Tape {
    /// Names longer than the directory entry are cut, shorter ones zero padded.
    pub fn new(name: &str, prg: &Prg) -> Tape {
        let mut entry = [0u8; ENTRY_LEN];
        for (slot, ch) in entry.iter_mut().zip(name.chars()) {
            *slot = petscii(ch);
        }
        Tape {
            name: entry,
            prg: prg.to_bytes(),
        }
    }

    pub fn header(&self) -> [u8; HEADER_LEN] {
        let mut header = [0u8; HEADER_LEN];
        header[..SIGNATURE.len()].copy_from_slice(SIGNATURE);
        header[VERSION_OFFSET] = VERSION;
        header[ENTRIES_OFFSET] = 1;
        header
    }

    pub fn entry(&self) -> [u8; ENTRY_LEN] {
        self.name
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(HEADER_LEN + ENTRY_LEN + self.prg.len());
        bytes.extend_from_slice(&self.header());
        bytes.extend_from_slice(&self.entry());
        bytes.extend_from_slice(&self.prg);
        bytes
    }
}

impl From<&Prg> for Tape {
    fn from(prg: &Prg) -> Self {
        Tape::new(DEFAULT_NAME, prg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout() {
        let prg = Prg::new(0x0801, vec![0, 0]);
        let bytes = Tape::new("hello", &prg).to_bytes();
        assert_eq!(bytes.len(), 64 + 32 + 4);
        assert_eq!(&bytes[..12], b"C64-TAPE-RAW");
        assert_eq!(bytes[0x10], 1);
        assert_eq!(bytes[0x1E], 1);
        assert_eq!(&bytes[64..69], b"HELLO");
        assert!(bytes[69..96].iter().all(|b| *b == 0));
        assert_eq!(&bytes[96..], &[0x01, 0x08, 0, 0]);
    }

    #[test]
    fn test_long_name() {
        let prg = Prg::new(0x0801, vec![0, 0]);
        let name = "A".repeat(40);
        let tape = Tape::new(&name, &prg);
        assert_eq!(tape.entry(), [b'A'; 32]);
        assert_eq!(Tape::from(&prg).entry()[..7], *b"PROGRAM");
    }
}
