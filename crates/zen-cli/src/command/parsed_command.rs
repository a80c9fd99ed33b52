use crate::command::Actions;

/// A fully validated invocation, ready to be dispatched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Close {
        issue: u64,
    },
    Open {
        issue: u64,
    },
    Drop {
        issue: u64,
    },
    Create {
        title: String,
        pipeline: String,
    },
    List {
        backlog: bool,
        /// Login filter; `"me"` is passed through untouched.
        login: Option<String>,
    },
    Move {
        issue: u64,
        pipeline: String,
    },
    PickUp {
        issue: u64,
    },
}

impl Command {
    /// Whether running this command talks to GitHub or ZenHub.
    pub fn requires_remote(&self) -> bool {
        !matches!(self, Command::Help)
    }

    /// Invoke the matching action. Action errors are returned unchanged.
    pub async fn dispatch<A>(self, actions: &A) -> Result<(), A::Error>
    where
        A: Actions + ?Sized,
    {
        match self {
            Command::Help => {
                actions.help();
                Ok(())
            }
            Command::Close { issue } => actions.close(issue).await,
            Command::Open { issue } => actions.open(issue).await,
            Command::Drop { issue } => actions.drop_issue(issue).await,
            Command::Create { title, pipeline } => actions.create(&title, &pipeline).await,
            Command::List { backlog, login } => actions.list(backlog, login.as_deref()).await,
            Command::Move { issue, pipeline } => actions.move_issue(issue, &pipeline).await,
            Command::PickUp { issue } => actions.pick_up(issue).await,
        }
    }
}
