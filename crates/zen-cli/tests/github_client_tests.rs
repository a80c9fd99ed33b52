//! Integration tests for the GitHub client using wiremock mock server

use zen_cli::GithubClient;

use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, method, path},
};

fn client(server: &MockServer) -> GithubClient {
    GithubClient::new(&server.uri(), "gh-token", "eltorocorp", "zencli")
}

#[test]
fn test_base_url_trailing_slash_trimmed() {
    let client = GithubClient::new("https://api.github.com/", "t", "o", "r");
    assert_eq!(client.base_url, "https://api.github.com");
}

#[tokio::test]
async fn test_get_repo_id_sends_credentials_and_v3_accept() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/eltorocorp/zencli"))
        .and(header("Authorization", "token gh-token"))
        .and(header("Accept", "application/vnd.github.v3+json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 4242, "name": "zencli" })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let repo_id = client(&mock_server).get_repo_id().await.unwrap();

    assert_eq!(repo_id, 4242);
}

#[tokio::test]
async fn test_get_issues_for_repo_decodes_assignees() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/eltorocorp/zencli/issues"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "number": 1, "state": "open", "title": "First", "assignee": null, "assignees": [] },
            {
                "number": 2,
                "state": "open",
                "title": "Second",
                "assignee": { "login": "alice", "id": 7 },
                "assignees": [{ "login": "alice", "id": 7 }]
            }
        ])))
        .mount(&mock_server)
        .await;

    let issues = client(&mock_server).get_issues_for_repo().await.unwrap();

    assert_eq!(issues.len(), 2);
    assert_eq!(issues[0].assignee_login(), None);
    assert_eq!(issues[1].assignee_login(), Some("alice"));
    assert_eq!(issues[1].title, "Second");
}

#[tokio::test]
async fn test_non_success_status_names_endpoint() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&mock_server)
        .await;

    let err = client(&mock_server)
        .get_authenticated_user()
        .await
        .unwrap_err();

    assert!(err.to_string().contains("the user endpoint returned 401"));
}

#[tokio::test]
async fn test_malformed_body_is_json_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/eltorocorp/zencli"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let err = client(&mock_server).get_repo_id().await.unwrap_err();

    assert!(err.to_string().contains("JSON parse error"));
}

#[tokio::test]
async fn test_close_issue_patches_state() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/repos/eltorocorp/zencli/issues/42"))
        .and(body_json(json!({ "state": "closed" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "number": 42 })))
        .expect(1)
        .mount(&mock_server)
        .await;

    client(&mock_server).close_issue(42).await.unwrap();
}

#[tokio::test]
async fn test_open_issue_patches_state() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/repos/eltorocorp/zencli/issues/42"))
        .and(body_json(json!({ "state": "open" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "number": 42 })))
        .expect(1)
        .mount(&mock_server)
        .await;

    client(&mock_server).open_issue(42).await.unwrap();
}

#[tokio::test]
async fn test_create_issue_returns_number() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/repos/eltorocorp/zencli/issues"))
        .and(body_json(json!({ "title": "Fix bug" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "number": 77,
            "state": "open",
            "title": "Fix bug",
            "assignee": null,
            "assignees": []
        })))
        .mount(&mock_server)
        .await;

    let issue = client(&mock_server).create_issue("Fix bug").await.unwrap();

    assert_eq!(issue.number, 77);
}

#[tokio::test]
async fn test_remove_authenticated_user_deletes_own_login() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "login": "alice", "id": 7 })))
        .mount(&mock_server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/repos/eltorocorp/zencli/issues/9/assignees"))
        .and(body_json(json!({ "assignees": ["alice"] })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "number": 9 })))
        .expect(1)
        .mount(&mock_server)
        .await;

    client(&mock_server)
        .remove_authenticated_user_from_issue(9)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_assign_authenticated_user_replaces_assignees() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "login": "alice", "id": 7 })))
        .mount(&mock_server)
        .await;

    Mock::given(method("PATCH"))
        .and(path("/repos/eltorocorp/zencli/issues/9"))
        .and(body_json(json!({ "assignees": ["alice"] })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "number": 9 })))
        .expect(1)
        .mount(&mock_server)
        .await;

    client(&mock_server)
        .assign_authenticated_user_to_issue(9)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_unexpected_status_on_mutation_is_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/repos/eltorocorp/zencli/issues/5"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let err = client(&mock_server).close_issue(5).await.unwrap_err();

    assert!(err.to_string().contains("the close issue endpoint returned 404"));
}
