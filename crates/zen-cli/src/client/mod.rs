pub(crate) mod error;
pub(crate) mod github;
pub mod github_models;
pub(crate) mod zenhub;
pub mod zenhub_models;

pub use error::{ClientError, Result as CliClientResult};
pub use github::GithubClient;
pub use zenhub::ZenHubClient;
