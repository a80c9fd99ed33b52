use crate::command::{
    Actions, Command, Cursor, Keyword, ParseError, error::Result as ParseResult,
};

/// Recursive-descent parser over one argument vector.
///
/// The vector is expected to look like `std::env::args()`: the program
/// name first, then the command words.
pub struct Parser<'a, S> {
    args: &'a [S],
}

impl<'a, S: AsRef<str>> Parser<'a, S> {
    /// # Panics
    /// If `args` is empty; there is always at least a program name.
    pub fn new(args: &'a [S]) -> Self {
        assert!(!args.is_empty(), "args cannot be empty");
        Self { args }
    }

    /// Recognise exactly one command.
    ///
    /// `help` anywhere in the input wins outright. Otherwise the first word
    /// selects the production, and a production that fails part way fails
    /// the whole parse.
    pub fn parse(&self) -> ParseResult<Command> {
        if self
            .args
            .iter()
            .any(|arg| arg.as_ref() == Keyword::Help.as_str())
        {
            return Ok(Command::Help);
        }

        let mut cursor = Cursor::new(self.args);
        if !cursor.advance_forward() {
            return Err(ParseError);
        }

        match cursor.current().and_then(Keyword::lookup) {
            Some(Keyword::Close) => close(&mut cursor),
            Some(Keyword::Open) => open(&mut cursor),
            Some(Keyword::Drop) => drop_issue(&mut cursor),
            Some(Keyword::Create) => create(&mut cursor),
            Some(Keyword::List) => list(&mut cursor),
            Some(Keyword::Move) => move_issue(&mut cursor),
            Some(Keyword::Pick) => pick_up(&mut cursor),
            _ => Err(ParseError),
        }
    }

    /// Parse, then run the single matching action.
    pub async fn execute<A>(&self, actions: &A) -> Result<(), A::Error>
    where
        A: Actions + ?Sized,
    {
        let command = self.parse()?;
        command.dispatch(actions).await
    }
}

// =========================================================================
// Productions
//
// Each one is entered with the cursor on its leading keyword.
// =========================================================================

/// Advance and read an issue number.
fn next_issue<S: AsRef<str>>(cursor: &mut Cursor<'_, S>) -> ParseResult<u64> {
    if !cursor.advance_forward() {
        return Err(ParseError);
    }
    cursor.expect_int()
}

/// `close INT`
pub(crate) fn close<S: AsRef<str>>(cursor: &mut Cursor<'_, S>) -> ParseResult<Command> {
    cursor.expect_keyword(Keyword::Close)?;
    let issue = next_issue(cursor)?;
    Ok(Command::Close { issue })
}

/// `open INT`
pub(crate) fn open<S: AsRef<str>>(cursor: &mut Cursor<'_, S>) -> ParseResult<Command> {
    cursor.expect_keyword(Keyword::Open)?;
    let issue = next_issue(cursor)?;
    Ok(Command::Open { issue })
}

/// `drop INT`
pub(crate) fn drop_issue<S: AsRef<str>>(cursor: &mut Cursor<'_, S>) -> ParseResult<Command> {
    cursor.expect_keyword(Keyword::Drop)?;
    let issue = next_issue(cursor)?;
    Ok(Command::Drop { issue })
}

/// `create STR as PIPELINE`
pub(crate) fn create<S: AsRef<str>>(cursor: &mut Cursor<'_, S>) -> ParseResult<Command> {
    cursor.expect_keyword(Keyword::Create)?;

    if !cursor.advance_forward() {
        return Err(ParseError);
    }
    let title = cursor.expect_free()?;

    if !cursor.advance_forward() {
        return Err(ParseError);
    }
    cursor.expect_keyword(Keyword::As)?;

    if !cursor.advance_forward() {
        return Err(ParseError);
    }
    let pipeline = cursor.expect_pipeline_word()?;

    Ok(Command::Create {
        title: title.to_string(),
        pipeline: pipeline.to_string(),
    })
}

/// `list { only STR | backlog }*`
pub(crate) fn list<S: AsRef<str>>(cursor: &mut Cursor<'_, S>) -> ParseResult<Command> {
    cursor.expect_keyword(Keyword::List)?;

    let mut backlog = false;
    let mut login = None;

    while cursor.advance_forward() {
        if cursor.at_keyword(Keyword::Only) {
            if !cursor.advance_forward() {
                return Err(ParseError);
            }
            login = Some(cursor.expect_free()?.to_string());
        } else if cursor.at_keyword(Keyword::Backlog) {
            backlog = true;
        } else {
            return Err(ParseError);
        }
    }

    Ok(Command::List { backlog, login })
}

/// `move INT [to] PIPELINE+`
///
/// Everything after the optional `to` is the pipeline name, rejoined with
/// single spaces so `move 9 to in progress` needs no quoting.
pub(crate) fn move_issue<S: AsRef<str>>(cursor: &mut Cursor<'_, S>) -> ParseResult<Command> {
    cursor.expect_keyword(Keyword::Move)?;
    let issue = next_issue(cursor)?;

    // Optional filler: step back if the next token is not `to`.
    if cursor.advance_forward() && !cursor.at_keyword(Keyword::To) {
        cursor.advance_backward();
    }

    let mut words = Vec::new();
    while cursor.advance_forward() {
        words.push(cursor.expect_pipeline_word()?);
    }

    if words.is_empty() {
        return Err(ParseError);
    }

    Ok(Command::Move {
        issue,
        pipeline: words.join(" "),
    })
}

/// `pick up INT`
pub(crate) fn pick_up<S: AsRef<str>>(cursor: &mut Cursor<'_, S>) -> ParseResult<Command> {
    cursor.expect_keyword(Keyword::Pick)?;

    if !cursor.advance_forward() {
        return Err(ParseError);
    }
    cursor.expect_keyword(Keyword::Up)?;

    let issue = next_issue(cursor)?;
    Ok(Command::PickUp { issue })
}
