use crate::command::ParseError;

use async_trait::async_trait;

/// Everything a parsed command can ask for.
///
/// The parser only ever calls one of these per run and passes the error
/// back untouched, so `Error` is whatever the implementation wants to
/// surface at the process boundary. It must be able to carry a
/// [`ParseError`] as well.
#[async_trait]
pub trait Actions: Send + Sync {
    type Error: From<ParseError> + Send;

    /// Print usage information.
    fn help(&self);

    async fn close(&self, issue: u64) -> Result<(), Self::Error>;

    async fn open(&self, issue: u64) -> Result<(), Self::Error>;

    /// Remove the authenticated user from the issue's assignees.
    async fn drop_issue(&self, issue: u64) -> Result<(), Self::Error>;

    /// Create an issue and place it in the named pipeline.
    async fn create(&self, title: &str, pipeline: &str) -> Result<(), Self::Error>;

    /// List the board. `login` of `"me"` means the authenticated user.
    async fn list(&self, backlog: bool, login: Option<&str>) -> Result<(), Self::Error>;

    /// Move the issue to the pipeline whose name matches `pipeline`.
    async fn move_issue(&self, issue: u64, pipeline: &str) -> Result<(), Self::Error>;

    async fn pick_up(&self, issue: u64) -> Result<(), Self::Error>;
}
