//! bitsy_parse: decoder for Bitsy game data files.
//!
//! A `.bitsy` file is a line-oriented, hand-editable description of a whole
//! game: the first line is the title, and every following block is one
//! record introduced by a tag (`PAL`, `ROOM`, `TIL`, `SPR`, `ITM`, `DLG`,
//! `TUNE`, `BLIP`, `VAR`, or a `!` settings line). This crate reads such a
//! file in a single forward pass and produces a [`bitsy_data::World`].
//!
//! Game data is often edited by hand, so the parser is deliberately
//! forgiving: a record whose grammar does not hold is skipped with a
//! recorded [`Warning`] and parsing continues; only unreadable input is
//! fatal.

mod parser;

pub use parser::{DecodeError, ParseOptions, Parsed, Warning, parse_file, parse_str, parse_str_with};

use thiserror::Error;

/// Fatal failures. Everything recoverable is reported as a [`Warning`].
#[derive(Debug, Error)]
pub enum ParseError {
    /// The game data file could not be read.
    #[error("unable to read game data: {0}")]
    Io(#[from] std::io::Error),
}
