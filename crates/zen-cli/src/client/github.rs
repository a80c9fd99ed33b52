use crate::client::{
    CliClientResult, ClientError,
    github_models::{Assignees, Issue, IssueState, IssueStateChange, NewIssue, Repository, User},
};

use log::debug;
use reqwest::{Client as ReqwestClient, Method, StatusCode};
use serde::de::DeserializeOwned;

const GITHUB_V3_ACCEPT_HEADER: &str = "application/vnd.github.v3+json";
const USER_AGENT: &str = concat!("zen-cli/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the GitHub REST API (v3), scoped to one repository
pub struct GithubClient {
    pub base_url: String,
    pub owner: String,
    pub repo: String,
    token: String,
    client: ReqwestClient,
}

impl GithubClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - API root (e.g., "https://api.github.com")
    /// * `token` - Personal access token sent as `Authorization: token ...`
    /// * `owner` / `repo` - The repository the board belongs to
    pub fn new(base_url: &str, token: &str, owner: &str, repo: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            owner: owner.to_string(),
            repo: repo.to_string(),
            token: token.to_string(),
            client: ReqwestClient::new(),
        }
    }

    /// Build a request with the v3 media type and credentials
    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!("GitHub {} {}", method, url);

        self.client
            .request(method, &url)
            .header(reqwest::header::ACCEPT, GITHUB_V3_ACCEPT_HEADER)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .header(reqwest::header::AUTHORIZATION, format!("token {}", self.token))
    }

    fn repo_path(&self, suffix: &str) -> String {
        format!("/repos/{}/{}{}", self.owner, self.repo, suffix)
    }

    /// Execute request and decode a JSON body
    async fn fetch<T: DeserializeOwned>(
        &self,
        req: reqwest::RequestBuilder,
        endpoint: &'static str,
    ) -> CliClientResult<T> {
        let response = req.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::status(endpoint, status));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Execute request, ignoring any body
    async fn submit(
        &self,
        req: reqwest::RequestBuilder,
        endpoint: &'static str,
        expected: StatusCode,
    ) -> CliClientResult<()> {
        let response = req.send().await?;
        let status = response.status();
        if status != expected {
            return Err(ClientError::status(endpoint, status));
        }
        Ok(())
    }

    // =========================================================================
    // Repository
    // =========================================================================

    /// Numeric id of the target repository (ZenHub keys boards by it)
    pub async fn get_repo_id(&self) -> CliClientResult<u64> {
        let req = self.request(Method::GET, &self.repo_path(""));
        let repository: Repository = self.fetch(req, "repo").await?;
        Ok(repository.id)
    }

    /// Open issues of the target repository
    pub async fn get_issues_for_repo(&self) -> CliClientResult<Vec<Issue>> {
        let req = self.request(Method::GET, &self.repo_path("/issues"));
        self.fetch(req, "issues").await
    }

    /// The user the token belongs to
    pub async fn get_authenticated_user(&self) -> CliClientResult<User> {
        let req = self.request(Method::GET, "/user");
        self.fetch(req, "user").await
    }

    // =========================================================================
    // Issues
    // =========================================================================

    pub async fn create_issue(&self, title: &str) -> CliClientResult<Issue> {
        let req = self
            .request(Method::POST, &self.repo_path("/issues"))
            .json(&NewIssue { title });
        self.fetch(req, "create issue").await
    }

    pub async fn close_issue(&self, issue: u64) -> CliClientResult<()> {
        self.set_issue_state(issue, IssueState::Closed, "close issue")
            .await
    }

    pub async fn open_issue(&self, issue: u64) -> CliClientResult<()> {
        self.set_issue_state(issue, IssueState::Open, "open issue")
            .await
    }

    async fn set_issue_state(
        &self,
        issue: u64,
        state: IssueState,
        endpoint: &'static str,
    ) -> CliClientResult<()> {
        let req = self
            .request(Method::PATCH, &self.repo_path(&format!("/issues/{}", issue)))
            .json(&IssueStateChange { state });
        self.submit(req, endpoint, StatusCode::OK).await
    }

    // =========================================================================
    // Assignees
    // =========================================================================

    /// Remove the authenticated user from the issue's assignees
    pub async fn remove_authenticated_user_from_issue(&self, issue: u64) -> CliClientResult<()> {
        let user = self.get_authenticated_user().await?;
        let req = self
            .request(
                Method::DELETE,
                &self.repo_path(&format!("/issues/{}/assignees", issue)),
            )
            .json(&Assignees {
                assignees: vec![user.login.as_str()],
            });
        self.submit(req, "remove assignee", StatusCode::OK).await
    }

    /// Make the authenticated user the issue's only assignee
    pub async fn assign_authenticated_user_to_issue(&self, issue: u64) -> CliClientResult<()> {
        let user = self.get_authenticated_user().await?;
        let req = self
            .request(Method::PATCH, &self.repo_path(&format!("/issues/{}", issue)))
            .json(&Assignees {
                assignees: vec![user.login.as_str()],
            });
        self.submit(req, "assign issue", StatusCode::OK).await
    }
}
