//! # HTTP Transport
//!
//! The seam between the operation set and the network. Operations build a
//! full [`reqwest::Request`] and hand it to a [`Transport`]; tests inject a
//! fake implementation instead of standing up a real server when they only
//! need to script a status code and body.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Request, StatusCode};
use tracing::debug;

use crate::error::TransportError;

/// A fully consumed HTTP response: status plus the complete body bytes.
///
/// The body is read to the end before this is returned, so the underlying
/// connection has been released by the time a caller sees it.
#[derive(Debug, Clone)]
pub struct TransportResponse {
  pub status: StatusCode,
  pub body: Vec<u8>,
}

/// Issues a single HTTP round trip per call.
#[async_trait]
pub trait Transport: Send + Sync {
  /// Send the request and return the status code plus the full response
  /// body, or a [`TransportError`] when no status was received.
  async fn send(&self, request: Request) -> Result<TransportResponse, TransportError>;
}

/// Configuration for the production [`HttpTransport`].
#[derive(Debug, Clone)]
pub struct TransportConfig {
  /// Skip TLS certificate verification.
  ///
  /// Defaults to `true` to stay compatible with self-signed Jira
  /// installations behind corporate proxies. This is an operational trust
  /// decision: traffic is exposed to man-in-the-middle interception, so set
  /// this to `false` wherever the server presents a verifiable certificate.
  pub accept_invalid_certs: bool,

  /// Fixed per-call deadline. `None` leaves the client's default behavior
  /// (no deadline beyond OS-level connection timeouts).
  pub timeout: Option<Duration>,
}

impl Default for TransportConfig {
  fn default() -> Self {
    Self {
      accept_invalid_certs: true,
      timeout: None,
    }
  }
}

/// Production transport backed by a [`reqwest::Client`].
pub struct HttpTransport {
  client: Client,
}

impl HttpTransport {
  /// Build a transport from the given configuration.
  pub fn new(config: &TransportConfig) -> Result<Self, TransportError> {
    let mut builder = Client::builder().danger_accept_invalid_certs(config.accept_invalid_certs);
    if let Some(timeout) = config.timeout {
      builder = builder.timeout(timeout);
    }
    let client = builder.build()?;
    Ok(Self { client })
  }
}

#[async_trait]
impl Transport for HttpTransport {
  async fn send(&self, request: Request) -> Result<TransportResponse, TransportError> {
    let method = request.method().clone();
    let url = request.url().clone();

    let response = self.client.execute(request).await?;
    let status = response.status();
    debug!("{} {} -> {}", method, url, status);

    // Consume the body on every path so the connection is released even for
    // error statuses.
    let body = response.bytes().await?.to_vec();

    Ok(TransportResponse { status, body })
  }
}
