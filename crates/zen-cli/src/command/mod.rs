//! Sentence-style command grammar.
//!
//! Turns the raw argument vector (`zen move 999 to in progress`) into a
//! validated [`Command`] and hands it to an [`Actions`] implementation.

pub(crate) mod actions;
pub(crate) mod cursor;
pub(crate) mod error;
pub(crate) mod keyword;
pub(crate) mod parsed_command;
pub(crate) mod parser;

pub use actions::Actions;
pub use cursor::Cursor;
pub use error::ParseError;
pub use keyword::Keyword;
pub use parsed_command::Command;
pub use parser::Parser;
