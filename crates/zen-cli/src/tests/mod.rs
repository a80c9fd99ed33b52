mod app;

use crate::command::{Command, ParseError, Parser};

/// Parse `words` as if typed after `zen`.
pub(crate) fn parse(words: &[&str]) -> Result<Command, ParseError> {
    let mut args = vec!["zen"];
    args.extend_from_slice(words);
    Parser::new(&args).parse()
}
