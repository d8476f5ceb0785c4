use super::Address;
use std::ops::{Deref, DerefMut};

/// The 6510 processor port: data direction register at `$00`, port at `$01`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bank {
    pub direction: u8,
    pub port: u8,
}

impl Bank {
    /// Every address decodes to RAM.
    pub const ALL_RAM: Bank = Bank {
        direction: 0b111,
        port: 0,
    };

    /// Power-on configuration with BASIC, KERNAL and I/O mapped in.
    pub const POWER_ON: Bank = Bank {
        direction: 0x2F,
        port: 0x37,
    };
}

/// Byte addressable store the program lives in.
pub trait Memory {
    fn read(&self, addr: Address) -> u8;
    fn write(&mut self, addr: Address, value: u8);
    fn bank(&self) -> Bank;
    fn set_bank(&mut self, bank: Bank);

    fn read_word(&self, addr: Address) -> u16 {
        u16::from_le_bytes([self.read(addr), self.read(addr.wrapping_add(1))])
    }

    fn write_word(&mut self, addr: Address, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.write(addr, lo);
        self.write(addr.wrapping_add(1), hi);
    }
}

/// Flat 64K of RAM. The processor port lives in the first two bytes.
#[derive(Clone)]
pub struct Ram {
    bytes: Vec<u8>,
}

impl Ram {
    pub fn new() -> Ram {
        let mut ram = Ram {
            bytes: vec![0; 0x10000],
        };
        ram.set_bank(Bank::POWER_ON);
        ram
    }
}

impl Default for Ram {
    fn default() -> Self {
        Ram::new()
    }
}

impl std::fmt::Debug for Ram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Ram {{ {:?} }}", self.bank())
    }
}

impl Memory for Ram {
    fn read(&self, addr: Address) -> u8 {
        self.bytes[addr as usize]
    }

    fn write(&mut self, addr: Address, value: u8) {
        self.bytes[addr as usize] = value;
    }

    fn bank(&self) -> Bank {
        Bank {
            direction: self.bytes[0],
            port: self.bytes[1],
        }
    }

    fn set_bank(&mut self, bank: Bank) {
        self.bytes[0] = bank.direction;
        self.bytes[1] = bank.port;
    }
}

/// Holds the store in [`Bank::ALL_RAM`] and puts the saved bank back on drop.
pub struct AllRam<'a, M: Memory + ?Sized> {
    memory: &'a mut M,
    saved: Bank,
}

impl<'a, M: Memory + ?Sized> AllRam<'a, M> {
    pub fn new(memory: &'a mut M) -> AllRam<'a, M> {
        let saved = memory.bank();
        memory.set_bank(Bank::ALL_RAM);
        AllRam { memory, saved }
    }
}

impl<'a, M: Memory + ?Sized> Deref for AllRam<'a, M> {
    type Target = M;
    fn deref(&self) -> &M {
        &*self.memory
    }
}

impl<'a, M: Memory + ?Sized> DerefMut for AllRam<'a, M> {
    fn deref_mut(&mut self) -> &mut M {
        &mut *self.memory
    }
}

impl<'a, M: Memory + ?Sized> Drop for AllRam<'a, M> {
    fn drop(&mut self) {
        self.memory.set_bank(self.saved);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words() {
        let mut ram = Ram::new();
        ram.write_word(0x2D, 0x080F);
        assert_eq!(ram.read(0x2D), 0x0F);
        assert_eq!(ram.read(0x2E), 0x08);
        assert_eq!(ram.read_word(0x2D), 0x080F);
    }

    #[test]
    fn test_all_ram_restores() {
        let mut ram = Ram::new();
        {
            let mut all = AllRam::new(&mut ram);
            assert_eq!(all.bank(), Bank::ALL_RAM);
            all.write(0x0801, 0xAA);
        }
        assert_eq!(ram.bank(), Bank::POWER_ON);
        assert_eq!(ram.read(0x0801), 0xAA);
    }

    #[test]
    fn test_all_ram_restores_on_panic() {
        let mut ram = Ram::new();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let mut all = AllRam::new(&mut ram);
            all.write(0x0801, 1);
            panic!("write failed");
        }));
        assert!(result.is_err());
        assert_eq!(ram.bank(), Bank::POWER_ON);
    }
}
