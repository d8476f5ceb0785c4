/*!
# Rust Language Module

This Rust module converts between BASIC program text and tokenized lines.

*/

#[macro_use]
mod error;
mod lex;
mod line;
pub mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use lex::lex;
pub use line::Line;
