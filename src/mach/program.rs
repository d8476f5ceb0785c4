use super::{AllRam, Link, Listing, Memory, MemoryMap};
use crate::lang::{Error, Line};
use std::iter::FromIterator;

type Result<T> = std::result::Result<T, Error>;

/// Program lines in the order they were given, ready to be linked into memory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    lines: Vec<Line>,
    errors: Vec<Error>,
}

impl Program {
    pub fn new() -> Program {
        Program::default()
    }

    /// Tokenizes program text, one numbered statement line per physical line.
    ///
    /// Lines without a usable line number are skipped and kept in
    /// [`Program::errors`]. Line numbers are not sorted or merged.
    pub fn parse(text: &str) -> Program {
        let mut program = Program::new();
        for s in text.lines().filter(|s| !s.trim().is_empty()) {
            match Line::parse(s) {
                Ok(Some(line)) => program.push(line),
                Ok(None) => log::debug!("skipping empty line {:?}", s.trim()),
                Err(error) => {
                    log::warn!("skipping {:?}: {}", s.trim(), error);
                    program.errors.push(error);
                }
            }
        }
        program
    }

    pub fn push(&mut self, line: Line) {
        self.lines.push(line)
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Physical lines that were skipped while parsing.
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Lays the program out starting at `base`.
    pub fn link(&self, base: u16) -> Result<Link> {
        Link::new(base, &self.lines)
    }

    pub fn commit<M: Memory + ?Sized>(&self, memory: &mut M) -> Result<Link> {
        self.commit_with(memory, &MemoryMap::default())
    }

    /// Replaces the resident program.
    ///
    /// Zeroes the program window, writes the linked image and points the
    /// variable and array pointers just past it. The store is switched to
    /// all RAM for the duration and switched back on every exit.
    pub fn commit_with<M: Memory + ?Sized>(&self, memory: &mut M, map: &MemoryMap) -> Result<Link> {
        let link = self.link(map.basic_start)?;
        let mut memory = AllRam::new(memory);
        for offset in 0..map.clear_len {
            match map.basic_start.checked_add(offset) {
                Some(addr) => memory.write(addr, 0),
                None => break,
            }
        }
        for (offset, byte) in link.bytes().iter().enumerate() {
            memory.write(map.basic_start + offset as u16, *byte);
        }
        let end = link.end();
        for pointer in map.pointers().iter() {
            memory.write_word(*pointer, end);
        }
        log::debug!(
            "committed {} lines, {} bytes, ${:04X}-${:04X}",
            self.lines.len(),
            link.bytes().len(),
            map.basic_start,
            end
        );
        Ok(link)
    }
}

impl From<Vec<Line>> for Program {
    fn from(lines: Vec<Line>) -> Self {
        Program {
            lines,
            errors: vec![],
        }
    }
}

impl From<Listing> for Program {
    fn from(listing: Listing) -> Self {
        Program::from(listing.into_lines())
    }
}

impl FromIterator<Line> for Program {
    fn from_iter<T: IntoIterator<Item = Line>>(iter: T) -> Self {
        Program::from(iter.into_iter().collect::<Vec<Line>>())
    }
}
