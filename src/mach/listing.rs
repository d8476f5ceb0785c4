use super::{Memory, MemoryMap};
use crate::error;
use crate::lang::{Error, Line};

type Result<T> = std::result::Result<T, Error>;

/// Lines read back out of a memory image.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Listing {
    lines: Vec<Line>,
}

impl Listing {
    pub fn extract<M: Memory + ?Sized>(memory: &M) -> Result<Listing> {
        Listing::extract_with(memory, &MemoryMap::default())
    }

    /// Follows the line links from the start of BASIC until the zero link.
    ///
    /// The store may hold anything, so every link must move forward, each
    /// record must fit in front of the record it links to, and each body
    /// must be terminated before that point. Anything else is reported as
    /// a corrupt program instead of being followed.
    pub fn extract_with<M: Memory + ?Sized>(memory: &M, map: &MemoryMap) -> Result<Listing> {
        let mut lines: Vec<Line> = vec![];
        let mut addr = map.basic_start as usize;
        loop {
            let next = memory.read_word(addr as u16) as usize;
            if next == 0 {
                break;
            }
            let previous = lines.last().map(Line::number);
            if next < addr + 5 {
                return Err(error!(CorruptProgram, previous; "LINK DOES NOT ADVANCE"));
            }
            let number = memory.read_word((addr + 2) as u16);
            let mut body: Vec<u8> = vec![];
            let mut pos = addr + 4;
            loop {
                if pos >= next {
                    return Err(error!(CorruptProgram, Some(number); "MISSING END OF LINE"));
                }
                match memory.read(pos as u16) {
                    0 => break,
                    byte => body.push(byte),
                }
                pos += 1;
            }
            lines.push(Line::from_bytes(number, body)?);
            addr = next;
        }
        Ok(Listing { lines })
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<Line> {
        self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl std::fmt::Display for Listing {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        if !self.lines.is_empty() {
            writeln!(f)?;
        }
        writeln!(f, "READY.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;
    use crate::mach::Ram;

    fn poke(ram: &mut Ram, addr: u16, bytes: &[u8]) {
        for (i, b) in bytes.iter().enumerate() {
            ram.write(addr + i as u16, *b);
        }
    }

    #[test]
    fn test_empty() {
        let ram = Ram::new();
        let listing = Listing::extract(&ram).unwrap();
        assert!(listing.is_empty());
        assert_eq!(listing.to_string(), "READY.\n");
    }

    #[test]
    fn test_link_to_self() {
        let mut ram = Ram::new();
        poke(&mut ram, 0x0801, &[0x01, 0x08, 10, 0, b'A', 0]);
        let e = Listing::extract(&ram).unwrap_err();
        assert!(e.is(ErrorCode::CorruptProgram));
    }

    #[test]
    fn test_link_backwards() {
        let mut ram = Ram::new();
        poke(&mut ram, 0x0801, &[0x07, 0x08, 10, 0, b'A', 0]);
        poke(&mut ram, 0x0807, &[0x01, 0x08, 20, 0, b'B', 0]);
        let e = Listing::extract(&ram).unwrap_err();
        assert!(e.is(ErrorCode::CorruptProgram));
        assert_eq!(e.line_number(), Some(10));
    }

    #[test]
    fn test_missing_terminator() {
        let mut ram = Ram::new();
        poke(&mut ram, 0x0801, &[0x07, 0x08, 10, 0, b'A', b'B', b'C', 0]);
        let e = Listing::extract(&ram).unwrap_err();
        assert!(e.is(ErrorCode::CorruptProgram));
        assert_eq!(e.line_number(), Some(10));
    }

    #[test]
    fn test_link_past_top() {
        let mut ram = Ram::new();
        let map = MemoryMap {
            basic_start: 0xFFFC,
            ..MemoryMap::C64
        };
        poke(&mut ram, 0xFFFC, &[0xFE, 0xFF, 1, 0]);
        assert!(Listing::extract_with(&ram, &map).is_err());
    }

    #[test]
    fn test_display() {
        let listing = Listing {
            lines: vec![Line::new(10, "PRINT \"HELLO\""), Line::new(20, "GOTO 10")],
        };
        assert_eq!(
            listing.to_string(),
            "10 PRINT \"HELLO\"\n20 GOTO 10\n\nREADY.\n"
        );
    }
}
