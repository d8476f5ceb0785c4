use super::Address;

/// Fixed addresses the BASIC interpreter uses for its program area.
///
/// | Field             | C64     | Meaning                                 |
/// |-------------------|---------|-----------------------------------------|
/// | `basic_start`     | `$0801` | first byte of the first program line    |
/// | `vartab`          | `$2D`   | start of variables (lo/hi pair)         |
/// | `arytab`          | `$2F`   | start of arrays (lo/hi pair)            |
/// | `strend`          | `$31`   | end of arrays (lo/hi pair)              |
/// | `clear_len`       | 10000   | bytes zeroed before a new program lands |
/// | `keyboard_buffer` | `$0277` | KERNAL keyboard queue                   |
/// | `keyboard_count`  | `$C6`   | characters waiting in the queue         |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryMap {
    pub basic_start: Address,
    pub vartab: Address,
    pub arytab: Address,
    pub strend: Address,
    pub clear_len: u16,
    pub keyboard_buffer: Address,
    pub keyboard_count: Address,
}

impl MemoryMap {
    pub const C64: MemoryMap = MemoryMap {
        basic_start: 0x0801,
        vartab: 0x2D,
        arytab: 0x2F,
        strend: 0x31,
        clear_len: 10000,
        keyboard_buffer: 0x0277,
        keyboard_count: 0xC6,
    };

    /// The three pointers that must follow the end of the program.
    pub fn pointers(&self) -> [Address; 3] {
        [self.vartab, self.arytab, self.strend]
    }
}

impl Default for MemoryMap {
    fn default() -> Self {
        MemoryMap::C64
    }
}
