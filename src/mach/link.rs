use super::Address;
use crate::error;
use crate::lang::{Error, Line};

type Result<T> = std::result::Result<T, Error>;

/// Highest address a linked program may reach, end pointer included.
const TOP: usize = 0xFFFF;

/// Where one line landed in memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record {
    pub addr: Address,
    pub next: Address,
    pub number: u16,
}

/// ## Linked memory image
///
/// Each line becomes `next:u16le number:u16le body 0x00` with `next`
/// holding the address of the following record. A zero word closes the
/// program. Lines keep the order they were given in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    base: Address,
    records: Vec<Record>,
    bytes: Vec<u8>,
}

impl Link {
    pub fn new<'a, T: IntoIterator<Item = &'a Line>>(base: Address, lines: T) -> Result<Link> {
        let mut records: Vec<Record> = vec![];
        let mut bytes: Vec<u8> = vec![];
        let mut addr = base as usize;
        for line in lines {
            let next = addr + record_len(line);
            if next + 2 > TOP {
                return Err(error!(OutOfMemory, Some(line.number()); "PROGRAM PAST END OF MEMORY"));
            }
            log::debug!(
                "line {}: addr=${:04X} len={} next=${:04X}",
                line.number(),
                addr,
                next - addr,
                next
            );
            bytes.extend_from_slice(&(next as u16).to_le_bytes());
            bytes.extend_from_slice(&line.number().to_le_bytes());
            bytes.extend_from_slice(line.body());
            bytes.push(0);
            records.push(Record {
                addr: addr as Address,
                next: next as Address,
                number: line.number(),
            });
            addr = next;
        }
        if addr + 2 > TOP {
            return Err(error!(OutOfMemory; "PROGRAM PAST END OF MEMORY"));
        }
        bytes.extend_from_slice(&[0, 0]);
        Ok(Link {
            base,
            records,
            bytes,
        })
    }

    pub fn base(&self) -> Address {
        self.base
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// The image including the closing zero word.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// First address past the image.
    pub fn end(&self) -> Address {
        (self.base as usize + self.bytes.len()) as Address
    }
}

/// Bytes one line occupies: link, line number, body, terminator.
fn record_len(line: &Line) -> usize {
    2 + 2 + line.body().len() + 1
}
