//! # Jira HTTP Client
//!
//! Holds the validated configuration and the injected transport, and builds
//! every outbound request: URL joining, JSON content headers, and optional
//! basic authentication. Request building is deterministic and performs no
//! I/O; the single network round trip happens in the [`Transport`].

use std::sync::Arc;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use reqwest::header::{self, HeaderValue};
use reqwest::{Body, Method, Request, StatusCode};
use url::Url;
use serde::de::DeserializeOwned;

use crate::consts::USER_AGENT;
use crate::error::JiraError;
use crate::models::JiraAuth;
use crate::transport::{HttpTransport, Transport, TransportConfig, TransportResponse};

/// Connection settings for a Jira instance, supplied once at startup
#[derive(Debug, Clone)]
pub struct JiraConfig {
  /// Base URL of the Jira instance, e.g. `https://jira.example.com`
  pub host: String,
  /// Basic-auth username; leave empty for anonymous access
  pub username: String,
  /// Basic-auth password or API token
  pub password: String,
}

/// Represents a Jira API client
pub struct JiraClient {
  pub(crate) transport: Arc<dyn Transport>,
  pub(crate) base_url: String,
  pub(crate) auth: JiraAuth,
}

impl JiraClient {
  /// Create a new Jira client with an injected transport
  pub fn new(config: JiraConfig, transport: Arc<dyn Transport>) -> Self {
    Self {
      transport,
      base_url: config.host.trim_end_matches('/').to_string(),
      auth: JiraAuth {
        username: config.username,
        password: config.password,
      },
    }
  }

  /// The browse URL for an issue key, e.g. `https://jira.example.com/browse/DEV-1`
  pub fn browse_url(&self, issue_key: &str) -> String {
    format!("{}/browse/{}", self.base_url, issue_key)
  }

  /// Build a request for a path relative to the configured host.
  ///
  /// Sets `Accept: application/json` on every request and
  /// `Content-Type: application/json` on POST/PUT; attaches basic auth only
  /// when a username is configured.
  pub(crate) fn build_request(&self, method: Method, path: &str, body: Option<String>) -> Result<Request, JiraError> {
    let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
    let url = Url::parse(&url).map_err(|e| JiraError::MalformedRequest(format!("{url}: {e}")))?;

    let mut request = Request::new(method.clone(), url);
    let headers = request.headers_mut();
    headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(header::USER_AGENT, HeaderValue::from_static(USER_AGENT));
    if matches!(method, Method::POST | Method::PUT) {
      headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
    }
    if !self.auth.username.is_empty() {
      let credentials = BASE64.encode(format!("{}:{}", self.auth.username, self.auth.password));
      let value = HeaderValue::from_str(&format!("Basic {credentials}"))
        .map_err(|e| JiraError::MalformedRequest(e.to_string()))?;
      headers.insert(header::AUTHORIZATION, value);
    }
    if let Some(body) = body {
      *request.body_mut() = Some(Body::from(body));
    }

    Ok(request)
  }

  /// Send a request and return the status code plus the raw body.
  pub(crate) async fn send_raw(&self, request: Request) -> Result<TransportResponse, JiraError> {
    Ok(self.transport.send(request).await?)
  }

  /// Send a request where only the status code matters; the body is still
  /// consumed by the transport so the connection is released.
  pub(crate) async fn send_status(&self, request: Request) -> Result<StatusCode, JiraError> {
    let response = self.transport.send(request).await?;
    Ok(response.status)
  }

  /// Decode a response body into the expected shape.
  pub(crate) fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, JiraError> {
    serde_json::from_slice(body).map_err(JiraError::Decode)
  }
}

/// Create a Jira client over the production HTTP transport
pub fn create_jira_client(config: JiraConfig) -> Result<JiraClient, JiraError> {
  let transport = HttpTransport::new(&TransportConfig::default())?;
  Ok(JiraClient::new(config, Arc::new(transport)))
}

#[cfg(test)]
mod tests {
  use super::*;

  fn test_client(host: &str, username: &str, password: &str) -> JiraClient {
    let transport = HttpTransport::new(&TransportConfig::default()).unwrap();
    JiraClient::new(
      JiraConfig {
        host: host.to_string(),
        username: username.to_string(),
        password: password.to_string(),
      },
      Arc::new(transport),
    )
  }

  #[test]
  fn test_client_strips_trailing_slashes_from_host() {
    let client = test_client("https://jira.example.com///", "user", "token");
    assert_eq!(client.base_url, "https://jira.example.com");
    assert_eq!(client.browse_url("DEV-1"), "https://jira.example.com/browse/DEV-1");
  }

  #[test]
  fn test_build_request_joins_host_and_path() {
    let client = test_client("https://jira.example.com/", "user", "token");
    let request = client
      .build_request(Method::GET, "/rest/api/2/issue/DEV-1", None)
      .unwrap();
    assert_eq!(
      request.url().as_str(),
      "https://jira.example.com/rest/api/2/issue/DEV-1"
    );
  }

  #[test]
  fn test_build_request_sets_json_headers() {
    let client = test_client("https://jira.example.com", "user", "token");

    let get = client.build_request(Method::GET, "rest/api/2/issue/DEV-1", None).unwrap();
    assert_eq!(get.headers()[header::ACCEPT.as_str()], "application/json");
    assert!(!get.headers().contains_key(header::CONTENT_TYPE));

    let post = client
      .build_request(Method::POST, "rest/api/2/issue/", Some("{}".to_string()))
      .unwrap();
    assert_eq!(post.headers()[header::CONTENT_TYPE.as_str()], "application/json");

    let put = client
      .build_request(Method::PUT, "rest/api/2/issue/DEV-1/assignee", Some("{}".to_string()))
      .unwrap();
    assert_eq!(put.headers()[header::CONTENT_TYPE.as_str()], "application/json");
  }

  #[test]
  fn test_build_request_attaches_basic_auth_when_username_configured() {
    let client = test_client("https://jira.example.com", "test_user", "test_token");
    let request = client.build_request(Method::GET, "rest/api/2/issue/DEV-1", None).unwrap();
    // test_user:test_token in base64
    assert_eq!(
      request.headers()[header::AUTHORIZATION.as_str()],
      "Basic dGVzdF91c2VyOnRlc3RfdG9rZW4="
    );
  }

  #[test]
  fn test_build_request_skips_auth_for_empty_username() {
    let client = test_client("https://jira.example.com", "", "ignored");
    let request = client.build_request(Method::GET, "rest/api/2/issue/DEV-1", None).unwrap();
    assert!(!request.headers().contains_key(header::AUTHORIZATION));
  }

  #[test]
  fn test_build_request_rejects_unparseable_host() {
    let client = test_client("not a url", "user", "token");
    let result = client.build_request(Method::GET, "rest/api/2/issue/DEV-1", None);
    assert!(matches!(result, Err(JiraError::MalformedRequest(_))));
  }

  #[test]
  fn test_create_jira_client_uses_the_default_transport() {
    let client = create_jira_client(JiraConfig {
      host: "https://jira.example.com/".to_string(),
      username: "user".to_string(),
      password: "token".to_string(),
    })
    .unwrap();
    assert_eq!(client.base_url, "https://jira.example.com");
  }

  #[test]
  fn test_build_request_is_deterministic() {
    let client = test_client("https://jira.example.com", "user", "token");
    let a = client.build_request(Method::GET, "rest/api/2/search", None).unwrap();
    let b = client.build_request(Method::GET, "rest/api/2/search", None).unwrap();
    assert_eq!(a.url(), b.url());
    assert_eq!(a.headers(), b.headers());
  }
}
