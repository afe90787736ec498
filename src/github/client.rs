//! GitHub REST implementation of `ReviewApi`.

use super::ReviewApi;
use super::types::{Comparison, ReviewCommentRecord, ReviewRequest, StatusRequest, User};
use crate::config::Config;
use crate::error::{Result, ScopeError};
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::{ACCEPT, AUTHORIZATION, LINK};
use serde::de::DeserializeOwned;

const MEDIA_TYPE: &str = "application/vnd.github+json";

/// Blocking GitHub client bound to one repository and token.
pub struct GithubClient {
    http: Client,
    base: String,
    owner: String,
    repo: String,
    token: String,
}

impl GithubClient {
    /// Build a client from config; the token is required.
    pub fn new(config: &Config, token: &str) -> Result<Self> {
        if token.trim().is_empty() {
            return Err(ScopeError::UserError(
                "GitHub token can not be empty".to_string(),
            ));
        }

        let (owner, repo) = config.repository()?;
        let http = Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| transport_error(&e))?;

        Ok(Self {
            http,
            base: config.api_base().to_string(),
            owner: owner.to_string(),
            repo: repo.to_string(),
            token: token.trim().to_string(),
        })
    }

    /// `{base}/repos/{owner}/{repo}/{tail}`
    pub fn repo_url(&self, tail: &str) -> String {
        format!("{}/repos/{}/{}/{}", self.base, self.owner, self.repo, tail)
    }

    fn send(&self, request: RequestBuilder) -> Result<Response> {
        let response = request
            .header(AUTHORIZATION, format!("token {}", self.token))
            .header(ACCEPT, MEDIA_TYPE)
            .send()
            .map_err(|e| transport_error(&e))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().unwrap_or_default();
        let message = error_message(&body)
            .or_else(|| status.canonical_reason().map(str::to_string))
            .unwrap_or_else(|| "request failed".to_string());

        Err(ScopeError::HttpError {
            status: status.as_u16(),
            message,
        })
    }

    fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        log::debug!("GET {}", url);
        self.send(self.http.get(url))?
            .json()
            .map_err(|e| transport_error(&e))
    }
}

impl GithubClient {
    /// GET a list endpoint, following `Link: <...>; rel="next"` to the end.
    fn get_all_pages<T: DeserializeOwned>(&self, url: &str) -> Result<Vec<T>> {
        let mut items = Vec::new();
        let mut next = Some(url.to_string());

        while let Some(url) = next {
            log::debug!("GET {}", url);
            let response = self.send(self.http.get(&url))?;
            next = response
                .headers()
                .get(LINK)
                .and_then(|value| value.to_str().ok())
                .and_then(next_page);

            let page: Vec<T> = response.json().map_err(|e| transport_error(&e))?;
            items.extend(page);
        }

        Ok(items)
    }
}

impl ReviewApi for GithubClient {
    fn current_user(&self) -> Result<User> {
        self.get_json(&format!("{}/user", self.base))
    }

    fn pull_request_raw(&self, number: u64) -> Result<String> {
        let url = self.repo_url(&format!("pulls/{}", number));
        log::debug!("GET {}", url);
        self.send(self.http.get(&url))?
            .text()
            .map_err(|e| transport_error(&e))
    }

    fn compare(&self, base: &str, head: &str) -> Result<Comparison> {
        self.get_json(&self.repo_url(&format!("compare/{}...{}", base, head)))
    }

    fn review_comments(&self, number: u64) -> Result<Vec<ReviewCommentRecord>> {
        self.get_all_pages(&self.repo_url(&format!("pulls/{}/comments?per_page=100", number)))
    }

    fn delete_comment(&self, url: &str) -> Result<()> {
        log::debug!("DELETE {}", url);
        self.send(self.http.delete(url))?;
        Ok(())
    }

    fn create_review(&self, number: u64, review: &ReviewRequest) -> Result<()> {
        let url = self.repo_url(&format!("pulls/{}/reviews", number));
        log::debug!("POST {} ({} comments)", url, review.comments.len());
        self.send(self.http.post(&url).json(review))?;
        Ok(())
    }

    fn create_status(&self, url: &str, status: &StatusRequest) -> Result<()> {
        log::debug!("POST {}", url);
        self.send(self.http.post(url).json(status))?;
        Ok(())
    }
}

fn transport_error(err: &reqwest::Error) -> ScopeError {
    ScopeError::HttpError {
        status: err.status().map_or(0, |s| s.as_u16()),
        message: err.to_string(),
    }
}

/// Pull the `message` field out of a GitHub error body.
pub(super) fn error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .and_then(|m| m.as_str())
        .map(str::to_string)
}

/// Target of the `rel="next"` entry of a `Link` header, if any.
pub(super) fn next_page(link: &str) -> Option<String> {
    link.split(',').find_map(|entry| {
        let mut parts = entry.split(';');
        let target = parts.next()?.trim();
        parts
            .any(|param| param.trim() == "rel=\"next\"")
            .then(|| target.trim_start_matches('<').trim_end_matches('>').to_string())
    })
}
