/*!
## Rust Machine Module

This Rust module puts tokenized BASIC into a machine's memory and takes it
back out, and writes the program files that carry it elsewhere.

*/

pub type Address = u16;

pub mod keyboard;
mod link;
mod listing;
mod map;
mod memory;
mod prg;
mod program;
pub mod t64;

pub use link::Link;
pub use link::Record;
pub use listing::Listing;
pub use map::MemoryMap;
pub use memory::AllRam;
pub use memory::Bank;
pub use memory::Memory;
pub use memory::Ram;
pub use prg::Prg;
pub use program::Program;
pub use t64::Tape;
