use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct Repository {
    pub id: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Issue {
    pub number: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub assignee: Option<User>,
}

impl Issue {
    pub fn assignee_login(&self) -> Option<&str> {
        self.assignee
            .as_ref()
            .map(|user| user.login.as_str())
            .filter(|login| !login.is_empty())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub login: String,
}

/// Body for the add/remove assignees endpoints and for replacing the
/// assignee list through an issue edit.
#[derive(Debug, Serialize)]
pub struct Assignees<'a> {
    pub assignees: Vec<&'a str>,
}

#[derive(Debug, Serialize)]
pub struct NewIssue<'a> {
    pub title: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueState {
    Open,
    Closed,
}

#[derive(Debug, Serialize)]
pub struct IssueStateChange {
    pub state: IssueState,
}
