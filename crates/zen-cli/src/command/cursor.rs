use crate::command::{Keyword, ParseError, error::Result as ParseResult};

/// Position within an argument vector.
///
/// The cursor never indexes out of bounds: moving past the last token parks
/// it one slot beyond the end, where [`Cursor::current`] yields `None`.
#[derive(Debug)]
pub struct Cursor<'a, S> {
    args: &'a [S],
    position: usize,
}

impl<'a, S: AsRef<str>> Cursor<'a, S> {
    /// Cursor resting on the first token (the program name).
    pub fn new(args: &'a [S]) -> Self {
        Self { args, position: 0 }
    }

    /// Token under the cursor, `None` once input is exhausted.
    pub fn current(&self) -> Option<&'a str> {
        self.args.get(self.position).map(AsRef::as_ref)
    }

    /// Step right; `false` when there is no token at the new position.
    pub fn advance_forward(&mut self) -> bool {
        if self.position < self.args.len() {
            self.position += 1;
        }
        self.position < self.args.len()
    }

    /// Step left; `false` (and no movement) at the start of input.
    pub fn advance_backward(&mut self) -> bool {
        if self.position == 0 {
            return false;
        }
        self.position -= 1;
        true
    }

    /// Whether the current token is exactly `keyword`.
    pub fn at_keyword(&self, keyword: Keyword) -> bool {
        self.current() == Some(keyword.as_str())
    }

    pub fn expect_keyword(&self, keyword: Keyword) -> ParseResult<()> {
        if self.at_keyword(keyword) {
            Ok(())
        } else {
            Err(ParseError)
        }
    }

    /// Current token as a base-10 issue number.
    pub fn expect_int(&self) -> ParseResult<u64> {
        self.current()
            .and_then(|token| token.parse().ok())
            .ok_or(ParseError)
    }

    /// Current token, provided it is not a keyword.
    pub fn expect_free(&self) -> ParseResult<&'a str> {
        match self.current() {
            Some(token) if !Keyword::is_keyword(token) => Ok(token),
            _ => Err(ParseError),
        }
    }

    /// Current token as one word of a pipeline name.
    ///
    /// Free-form tokens qualify, and so does `backlog`: it is both a `list`
    /// modifier and the name of a real pipeline.
    pub fn expect_pipeline_word(&self) -> ParseResult<&'a str> {
        if self.at_keyword(Keyword::Backlog) {
            return Ok(Keyword::Backlog.as_str());
        }
        self.expect_free()
    }
}
