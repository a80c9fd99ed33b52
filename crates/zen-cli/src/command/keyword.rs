/// Reserved words of the command grammar.
///
/// Matching is case-sensitive: `Move` is a free-form token, `move` is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Help,
    Close,
    Open,
    Drop,
    Create,
    As,
    List,
    Backlog,
    Only,
    Move,
    To,
    Pick,
    Up,
}

impl Keyword {
    #[cfg(test)]
    pub(crate) const ALL: [Keyword; 13] = [
        Keyword::Help,
        Keyword::Close,
        Keyword::Open,
        Keyword::Drop,
        Keyword::Create,
        Keyword::As,
        Keyword::List,
        Keyword::Backlog,
        Keyword::Only,
        Keyword::Move,
        Keyword::To,
        Keyword::Pick,
        Keyword::Up,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Keyword::Help => "help",
            Keyword::Close => "close",
            Keyword::Open => "open",
            Keyword::Drop => "drop",
            Keyword::Create => "create",
            Keyword::As => "as",
            Keyword::List => "list",
            Keyword::Backlog => "backlog",
            Keyword::Only => "only",
            Keyword::Move => "move",
            Keyword::To => "to",
            Keyword::Pick => "pick",
            Keyword::Up => "up",
        }
    }

    /// The keyword spelled by `token`, if any.
    pub fn lookup(token: &str) -> Option<Keyword> {
        match token {
            "help" => Some(Keyword::Help),
            "close" => Some(Keyword::Close),
            "open" => Some(Keyword::Open),
            "drop" => Some(Keyword::Drop),
            "create" => Some(Keyword::Create),
            "as" => Some(Keyword::As),
            "list" => Some(Keyword::List),
            "backlog" => Some(Keyword::Backlog),
            "only" => Some(Keyword::Only),
            "move" => Some(Keyword::Move),
            "to" => Some(Keyword::To),
            "pick" => Some(Keyword::Pick),
            "up" => Some(Keyword::Up),
            _ => None,
        }
    }

    pub fn is_keyword(token: &str) -> bool {
        Self::lookup(token).is_some()
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
