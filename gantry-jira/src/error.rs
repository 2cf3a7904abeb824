//! Error taxonomy for the Jira client.
//!
//! Every operation returns one of these variants instead of panicking or
//! bubbling an opaque error; the command layer converts them into failure
//! events with a human-readable message.

use thiserror::Error;

/// A connection-level failure: DNS, timeout, refused connection, TLS.
///
/// Carries no HTTP status because none was received. Callers must treat this
/// as "no interpretable status" rather than inventing one.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct TransportError {
  message: String,
}

impl TransportError {
  /// Create a transport error from any displayable cause.
  pub fn new(message: impl Into<String>) -> Self {
    Self {
      message: message.into(),
    }
  }
}

impl From<reqwest::Error> for TransportError {
  fn from(err: reqwest::Error) -> Self {
    Self::new(err.to_string())
  }
}

/// Errors that can occur during a Jira operation
#[derive(Debug, Error)]
pub enum JiraError {
  /// The request URL could not be assembled from the configured host and the
  /// operation path. Should not occur with a validated configuration.
  #[error("malformed request: {0}")]
  MalformedRequest(String),
  /// The request never produced a status code.
  #[error(transparent)]
  Transport(#[from] TransportError),
  /// A request body failed to serialize. Should not occur for the fixed
  /// request shapes.
  #[error("failed to encode request body: {0}")]
  Encode(#[source] serde_json::Error),
  /// The response body was not valid JSON for the expected shape.
  #[error("failed to decode response body: {0}")]
  Decode(#[source] serde_json::Error),
  /// A recognized non-success status code with a domain-specific message.
  #[error("{message}")]
  Remote { status: u16, message: String },
  /// A locally detected bad input; no network call was made.
  #[error("{0}")]
  Validation(String),
  /// A status code outside the operation's documented set.
  #[error("unsupported status code {0}")]
  UnsupportedStatus(u16),
}

impl JiraError {
  /// Shorthand for a recognized remote failure.
  pub(crate) fn remote(status: reqwest::StatusCode, message: impl Into<String>) -> Self {
    Self::Remote {
      status: status.as_u16(),
      message: message.into(),
    }
  }
}
