//! # Commodore BASIC V2 programs
//!
//! BASIC as the 8-bit machines kept it: every keyword squeezed into a single
//! byte, every line linked to the next by its address.
//!
//! The [`lang`] module turns program text into tokenized lines and back.
//! The [`mach`] module links those lines into a memory image starting at
//! `$0801`, reads an image back into a listing, and writes the program as a
//! `.prg` file or wrapped in a `.t64` tape image.
//!
//! ```
//! use basic::mach::{Listing, Prg, Program, Ram, Tape};
//!
//! let mut ram = Ram::new();
//! Program::parse("10 PRINT \"HELLO\"\n20 GOTO 10").commit(&mut ram).unwrap();
//!
//! let listing = Listing::extract(&ram).unwrap();
//! assert_eq!(listing.to_string(), "10 PRINT \"HELLO\"\n20 GOTO 10\n\nREADY.\n");
//!
//! let prg = Prg::from_memory(&ram).unwrap();
//! assert_eq!(&prg.to_bytes()[..4], &[0x01, 0x08, 0x0F, 0x08]);
//! let t64 = Tape::new("HELLO", &prg).to_bytes();
//! assert_eq!(t64.len(), 64 + 32 + prg.to_bytes().len());
//! ```

pub mod lang;
pub mod mach;
