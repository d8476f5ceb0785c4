#![allow(dead_code)]

use basic::mach::{Address, Bank, Listing, Memory, Program, Ram};

pub const BASE: Address = 0x0801;

pub fn commit(text: &str) -> Ram {
    let mut ram = Ram::new();
    Program::parse(text).commit(&mut ram).unwrap();
    ram
}

pub fn list(ram: &Ram) -> String {
    Listing::extract(ram).unwrap().to_string()
}

/// Program bytes from the start of BASIC up to the start of variables.
pub fn image(ram: &Ram) -> Vec<u8> {
    let end = ram.read_word(0x2D);
    (BASE..end).map(|addr| ram.read(addr)).collect()
}

pub fn poke(ram: &mut Ram, addr: Address, bytes: &[u8]) {
    for (i, b) in bytes.iter().enumerate() {
        ram.write(addr + i as u16, *b);
    }
}

/// Counts program area writes made while the store is not all RAM.
#[derive(Debug, Default)]
pub struct Probe {
    pub ram: Ram,
    pub writes: usize,
    pub banked_writes: usize,
}

impl Memory for Probe {
    fn read(&self, addr: Address) -> u8 {
        self.ram.read(addr)
    }

    fn write(&mut self, addr: Address, value: u8) {
        self.writes += 1;
        if self.ram.bank() != Bank::ALL_RAM {
            self.banked_writes += 1;
        }
        self.ram.write(addr, value)
    }

    fn bank(&self) -> Bank {
        self.ram.bank()
    }

    fn set_bank(&mut self, bank: Bank) {
        self.ram.set_bank(bank)
    }
}
