use crate::{
    board,
    client::{GithubClient, ZenHubClient, zenhub_models::Pipeline},
    command::Actions,
    error::{Result as ZenResult, ZenError},
    usage::USAGE,
};

use std::io::Write;

use async_trait::async_trait;
use log::info;
use zen_config::Config;

/// Login placeholder for the authenticated user.
const ME: &str = "me";

/// [`Actions`] backed by the GitHub and ZenHub REST APIs.
///
/// Progress goes to stdout as the commands run; failures are returned.
pub struct ZenActions {
    github: GithubClient,
    zenhub: ZenHubClient,
}

impl ZenActions {
    pub fn new(github: GithubClient, zenhub: ZenHubClient) -> Self {
        Self { github, zenhub }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            GithubClient::new(
                &config.github.api_url,
                &config.github.token,
                &config.github.owner,
                &config.github.repo,
            ),
            ZenHubClient::new(&config.zenhub.api_url, &config.zenhub.token),
        )
    }

    /// Resolve a pipeline by (case-insensitive) name on the repo's board.
    async fn find_pipeline(&self, repo_id: u64, name: &str) -> ZenResult<Pipeline> {
        let board = self.zenhub.get_board(repo_id).await?;
        board
            .find_pipeline(name)
            .cloned()
            .ok_or_else(|| ZenError::PipelineNotFound {
                name: name.to_string(),
            })
    }
}

#[async_trait]
impl Actions for ZenActions {
    type Error = ZenError;

    fn help(&self) {
        println!("{}", USAGE);
    }

    async fn close(&self, issue: u64) -> ZenResult<()> {
        println!("Closing issue {}...", issue);
        self.github.close_issue(issue).await?;
        println!("Issue {} has been closed.", issue);
        Ok(())
    }

    async fn open(&self, issue: u64) -> ZenResult<()> {
        println!("Reopening issue {}...", issue);
        self.github.open_issue(issue).await?;
        println!("Issue {} has been opened.", issue);
        Ok(())
    }

    async fn drop_issue(&self, issue: u64) -> ZenResult<()> {
        println!("Removing you from issue {}...", issue);
        self.github
            .remove_authenticated_user_from_issue(issue)
            .await?;
        println!("You have been removed from issue {}.", issue);
        Ok(())
    }

    async fn create(&self, title: &str, pipeline: &str) -> ZenResult<()> {
        println!("Creating issue '{}' in {}...", title, pipeline);
        let repo_id = self.github.get_repo_id().await?;
        let target = self.find_pipeline(repo_id, pipeline).await?;

        let created = self.github.create_issue(title).await?;
        info!("Created issue {}", created.number);

        self.zenhub
            .move_issue(repo_id, created.number, &target.id)
            .await?;
        println!("Issue {} has been created in {}.", created.number, target.name);
        Ok(())
    }

    async fn list(&self, backlog: bool, login: Option<&str>) -> ZenResult<()> {
        print!("Fetching issues from {}", self.github.repo);
        std::io::stdout().flush().ok();

        let issues = self.github.get_issues_for_repo().await?;
        let repo_id = self.github.get_repo_id().await?;
        let board = self.zenhub.get_board(repo_id).await?;

        let login = match login {
            Some(ME) => Some(self.github.get_authenticated_user().await?.login),
            other => other.map(String::from),
        };

        print!(
            "\r{}",
            board::render_board(&self.github.repo, &board, &issues, backlog, login.as_deref())
        );
        Ok(())
    }

    async fn move_issue(&self, issue: u64, pipeline: &str) -> ZenResult<()> {
        println!("Moving issue {} to {}...", issue, pipeline);
        let repo_id = self.github.get_repo_id().await?;
        let target = self.find_pipeline(repo_id, pipeline).await?;

        self.zenhub.move_issue(repo_id, issue, &target.id).await?;
        println!("Issue {} has been moved to {}.", issue, pipeline);
        Ok(())
    }

    async fn pick_up(&self, issue: u64) -> ZenResult<()> {
        println!("Assigning you to issue {}...", issue);
        self.github.assign_authenticated_user_to_issue(issue).await?;
        println!("You have been assigned to issue {}.", issue);
        Ok(())
    }
}
