use crate::client::{
    CliClientResult, ClientError,
    zenhub_models::{Board, PipelineMove},
};

use log::debug;
use reqwest::{Client as ReqwestClient, Method};

const AUTH_HEADER: &str = "X-Authentication-Token";

/// Issues land at the top of their new pipeline.
const MOVE_POSITION: &str = "top";

/// HTTP client for the ZenHub REST API
pub struct ZenHubClient {
    pub base_url: String,
    token: String,
    client: ReqwestClient,
}

impl ZenHubClient {
    pub fn new(base_url: &str, token: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
            client: ReqwestClient::new(),
        }
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!("ZenHub {} {}", method, url);

        self.client
            .request(method, &url)
            .header(AUTH_HEADER, &self.token)
    }

    /// Pipelines (with their issues) for the repository's board
    pub async fn get_board(&self, repo_id: u64) -> CliClientResult<Board> {
        let req = self.request(
            Method::GET,
            &format!("/p1/repositories/{}/board", repo_id),
        );

        let response = req.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::status("get pipelines", status));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Move an issue to the top of another pipeline
    pub async fn move_issue(
        &self,
        repo_id: u64,
        issue: u64,
        pipeline_id: &str,
    ) -> CliClientResult<()> {
        let body = PipelineMove {
            pipeline_id,
            position: MOVE_POSITION,
        };
        debug!("Pipeline move: {}", serde_json::to_string(&body)?);

        let req = self
            .request(
                Method::POST,
                &format!("/p1/repositories/{}/issues/{}/moves", repo_id, issue),
            )
            .json(&body);

        let response = req.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::status("move issue", status));
        }

        Ok(())
    }
}
