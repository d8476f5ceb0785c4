use super::{Address, AllRam, Memory, MemoryMap};
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// A loadable program file: little endian load address, then the bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prg {
    load_address: Address,
    payload: Vec<u8>,
}

impl Prg {
    pub fn new(load_address: Address, payload: Vec<u8>) -> Prg {
        Prg {
            load_address,
            payload,
        }
    }

    pub fn from_memory<M: Memory + ?Sized>(memory: &M) -> Result<Prg> {
        Prg::from_memory_with(memory, &MemoryMap::default())
    }

    /// Copies the resident program, start of BASIC up to the start of
    /// variables, byte for byte.
    pub fn from_memory_with<M: Memory + ?Sized>(memory: &M, map: &MemoryMap) -> Result<Prg> {
        let end = memory.read_word(map.vartab);
        if end <= map.basic_start {
            return Err(error!(NoProgram; "START OF VARIABLES AT OR BELOW START OF BASIC"));
        }
        let length = end - map.basic_start;
        if length < 2 {
            return Err(error!(InvalidLength; "PROGRAM SHORTER THAN END MARKER"));
        }
        let payload = (map.basic_start..end).map(|addr| memory.read(addr)).collect();
        Ok(Prg::new(map.basic_start, payload))
    }

    /// Splits a file into load address and payload.
    pub fn from_bytes(bytes: &[u8]) -> Result<Prg> {
        if bytes.len() < 3 {
            return Err(error!(InvalidLength; "FILE TOO SHORT"));
        }
        let load_address = u16::from_le_bytes([bytes[0], bytes[1]]);
        Ok(Prg::new(load_address, bytes[2..].to_vec()))
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(2 + self.payload.len());
        bytes.extend_from_slice(&self.load_address.to_le_bytes());
        bytes.extend_from_slice(&self.payload);
        bytes
    }

    pub fn load_address(&self) -> Address {
        self.load_address
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// First address past the payload once loaded.
    pub fn end(&self) -> Result<Address> {
        let end = self.load_address as usize + self.payload.len();
        if end > 0xFFFF {
            return Err(error!(OutOfMemory; "FILE PAST END OF MEMORY"));
        }
        Ok(end as Address)
    }

    pub fn load<M: Memory + ?Sized>(&self, memory: &mut M) -> Result<Address> {
        self.load_with(memory, &MemoryMap::default())
    }

    /// Writes the payload at its load address and moves the variable and
    /// array pointers past it, as LOAD does.
    pub fn load_with<M: Memory + ?Sized>(&self, memory: &mut M, map: &MemoryMap) -> Result<Address> {
        let end = self.end()?;
        let mut memory = AllRam::new(memory);
        for (offset, byte) in self.payload.iter().enumerate() {
            memory.write(self.load_address + offset as u16, *byte);
        }
        for pointer in map.pointers().iter() {
            memory.write_word(*pointer, end);
        }
        log::debug!(
            "loaded {} bytes, ${:04X}-${:04X}",
            self.payload.len(),
            self.load_address,
            end
        );
        Ok(end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;
    use crate::mach::Ram;

    #[test]
    fn test_no_program() {
        let mut ram = Ram::new();
        ram.write_word(0x2D, 0x0801);
        let e = Prg::from_memory(&ram).unwrap_err();
        assert!(e.is(ErrorCode::NoProgram));
        ram.write_word(0x2D, 0);
        assert!(Prg::from_memory(&ram).unwrap_err().is(ErrorCode::NoProgram));
    }

    #[test]
    fn test_invalid_length() {
        let mut ram = Ram::new();
        ram.write_word(0x2D, 0x0802);
        let e = Prg::from_memory(&ram).unwrap_err();
        assert!(e.is(ErrorCode::InvalidLength));
    }

    #[test]
    fn test_bytes() {
        let prg = Prg::new(0x0801, vec![0, 0]);
        assert_eq!(prg.to_bytes(), vec![0x01, 0x08, 0, 0]);
        assert_eq!(Prg::from_bytes(&prg.to_bytes()).unwrap(), prg);
        assert!(Prg::from_bytes(&[0x01, 0x08]).is_err());
    }

    #[test]
    fn test_load_past_top() {
        let mut ram = Ram::new();
        let prg = Prg::new(0xFFF0, vec![1; 0x10]);
        assert!(prg.load(&mut ram).unwrap_err().is(ErrorCode::OutOfMemory));
        assert_eq!(ram.read(0xFFF0), 0);
    }
}
