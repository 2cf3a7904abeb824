//! # Status Code Translation
//!
//! Per-operation decision tables mapping remote status codes to domain
//! outcomes. Any status in an operation's accepted band is success;
//! documented 4xx/5xx codes map to specific messages; everything else is an
//! unsupported status.

use reqwest::StatusCode;

use crate::error::JiraError;

/// Accepted success band for all issue-link operations (create, get,
/// delete), matching the remote's documented 200–208 range.
pub(crate) fn link_band(status: StatusCode) -> bool {
  (200..=208).contains(&status.as_u16())
}

/// Outcome table for the assignee endpoint (success = 204).
pub(crate) fn assign_outcome(status: StatusCode) -> Result<(), JiraError> {
  match status {
    StatusCode::NO_CONTENT => Ok(()),
    StatusCode::BAD_REQUEST => Err(JiraError::remote(status, "invalid user representation")),
    StatusCode::UNAUTHORIZED => Err(JiraError::remote(status, "invalid permission to assign to issue")),
    StatusCode::NOT_FOUND => Err(JiraError::remote(status, "issue or user does not exist")),
    other => Err(JiraError::UnsupportedStatus(other.as_u16())),
  }
}

/// Outcome table for executing a transition (success = 204).
pub(crate) fn transition_outcome(status: StatusCode) -> Result<(), JiraError> {
  match status {
    StatusCode::NO_CONTENT => Ok(()),
    StatusCode::BAD_REQUEST => Err(JiraError::remote(status, "no transition specified")),
    StatusCode::UNAUTHORIZED => Err(JiraError::remote(status, "invalid permission to transition an issue")),
    StatusCode::NOT_FOUND => Err(JiraError::remote(status, "issue or user does not exist")),
    other => Err(JiraError::UnsupportedStatus(other.as_u16())),
  }
}

/// Shared outcome table for the link endpoints (success = 200–208).
pub(crate) fn link_outcome(status: StatusCode) -> Result<(), JiraError> {
  if link_band(status) {
    return Ok(());
  }

  match status {
    StatusCode::BAD_REQUEST => Err(JiraError::remote(status, "invalid link or comment specified")),
    StatusCode::UNAUTHORIZED => Err(JiraError::remote(status, "invalid permission to link issues")),
    StatusCode::NOT_FOUND => Err(JiraError::remote(
      status,
      "could not find issue or invalid link type specified",
    )),
    StatusCode::INTERNAL_SERVER_ERROR => Err(JiraError::remote(status, "error occurred when creating link or comment")),
    other => Err(JiraError::UnsupportedStatus(other.as_u16())),
  }
}
