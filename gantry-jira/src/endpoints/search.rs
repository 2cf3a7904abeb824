//! # Jira Search Endpoint
//!
//! JQL search over the configured instance. The query is validated locally
//! before any network call, and results come back in remote order with the
//! fixed field selection from [`crate::consts::SEARCH_FIELDS`].

use reqwest::{Method, StatusCode};
use tracing::debug;

use crate::client::JiraClient;
use crate::consts::SEARCH_FIELDS;
use crate::error::JiraError;
use crate::models::{SearchRequest, SearchResult};

impl JiraClient {
  /// Search issues with a JQL query.
  ///
  /// # Errors
  ///
  /// Returns [`JiraError::Validation`] for an empty query without touching
  /// the network; otherwise the usual transport/status/decode errors.
  pub async fn search_issues(&self, query: &str, start_index: u32, max_results: u32) -> Result<SearchResult, JiraError> {
    if query.is_empty() {
      return Err(JiraError::Validation("empty query string".to_string()));
    }

    let body = serde_json::to_string(&SearchRequest {
      jql: query,
      start_at: start_index,
      max_results,
      fields: &SEARCH_FIELDS,
    })
    .map_err(JiraError::Encode)?;

    let request = self.build_request(Method::POST, "rest/api/2/search", Some(body))?;
    let response = self.send_raw(request).await?;
    debug!("search '{}' -> {}", query, response.status);

    match response.status {
      StatusCode::OK => Self::decode(&response.body),
      StatusCode::BAD_REQUEST => Err(JiraError::remote(response.status, format!("invalid query '{query}'"))),
      StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(JiraError::remote(
        response.status,
        "authentication failed, check your Jira credentials",
      )),
      StatusCode::NOT_FOUND => Err(JiraError::remote(response.status, "search resource not found")),
      other => Err(JiraError::UnsupportedStatus(other.as_u16())),
    }
  }
}
