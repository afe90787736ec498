//! Tests for review service payloads and client setup.

use super::client::{error_message, next_page};
use super::{Comparison, GithubClient, ReviewComment, ReviewRequest, StatusRequest, StatusState};
use crate::config::{Config, ReviewEvent};
use crate::error::ScopeError;
use serde_json::json;

fn repo_config() -> Config {
    Config {
        api_url: "https://github.example.com/api/v3/".to_string(),
        repo_owner: "acme".to_string(),
        repo_name: "crm".to_string(),
        ..Default::default()
    }
}

#[test]
fn test_client_requires_token() {
    let err = GithubClient::new(&repo_config(), "  ").err().unwrap();
    assert!(matches!(err, ScopeError::UserError(_)));
    assert!(err.to_string().contains("token"));
}

#[test]
fn test_client_requires_repository() {
    let err = GithubClient::new(&Config::default(), "t0ken").err().unwrap();
    assert!(matches!(err, ScopeError::ConfigError(_)));
}

#[test]
fn test_repo_url() {
    let client = GithubClient::new(&repo_config(), "t0ken").unwrap();
    assert_eq!(
        client.repo_url("pulls/7/reviews"),
        "https://github.example.com/api/v3/repos/acme/crm/pulls/7/reviews"
    );
}

#[test]
fn test_review_request_payload() {
    let review = ReviewRequest {
        event: ReviewEvent::RequestChanges,
        comments: vec![ReviewComment {
            file: "src/Help.js".to_string(),
            position: 3,
            body: "[ERROR]: Line 10 Missing semicolon.".to_string(),
        }],
    };

    assert_eq!(
        serde_json::to_value(&review).unwrap(),
        json!({
            "event": "REQUEST_CHANGES",
            "comments": [
                {"path": "src/Help.js", "position": 3, "body": "[ERROR]: Line 10 Missing semicolon."}
            ]
        })
    );
}

#[test]
fn test_status_request_payload() {
    let status = StatusRequest {
        state: StatusState::Failure,
        target_url: "https://ci.example.com/job/1".to_string(),
        description: "2 findings".to_string(),
        context: "code-style".to_string(),
    };
    let value = serde_json::to_value(&status).unwrap();
    assert_eq!(value["state"], "failure");
    assert_eq!(value["context"], "code-style");
}

#[test]
fn test_comparison_parsing_tolerates_missing_patch() {
    let body = json!({
        "status": "ahead",
        "files": [
            {"filename": "a.js", "status": "modified", "patch": "@@ -1 +1 @@\n-a\n+b"},
            {"filename": "logo.png", "status": "added"},
            {"filename": "old.php", "status": "removed", "patch": "@@ -1 +0,0 @@\n-x"}
        ]
    });
    let comparison: Comparison = serde_json::from_value(body).unwrap();

    assert_eq!(comparison.files.len(), 3);
    assert!(comparison.files[0].patch.is_some());
    assert!(comparison.files[1].patch.is_none());
    assert!(comparison.files[2].is_removed());
    assert!(!comparison.files[0].is_removed());
}

#[test]
fn test_error_message_extraction() {
    assert_eq!(
        error_message(r#"{"message":"Bad credentials","documentation_url":"x"}"#),
        Some("Bad credentials".to_string())
    );
    assert_eq!(error_message("<html>502</html>"), None);
}

#[test]
fn test_next_page_from_link_header() {
    let link = "<https://api.github.com/repositories/1/pulls/7/comments?per_page=100&page=2>; rel=\"next\", \
                <https://api.github.com/repositories/1/pulls/7/comments?per_page=100&page=5>; rel=\"last\"";
    assert_eq!(
        next_page(link).as_deref(),
        Some("https://api.github.com/repositories/1/pulls/7/comments?per_page=100&page=2")
    );
}

#[test]
fn test_next_page_absent_on_last_page() {
    let link = "<https://api.github.com/x?page=1>; rel=\"prev\", <https://api.github.com/x?page=1>; rel=\"first\"";
    assert_eq!(next_page(link), None);
    assert_eq!(next_page(""), None);
}
