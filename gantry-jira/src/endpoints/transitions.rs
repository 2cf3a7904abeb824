//! # Jira Transition Endpoints
//!
//! Listing the transitions available to an issue and executing one. Listing
//! is strict: any non-200 status is a failure, never an empty list, so a
//! missing issue cannot masquerade as "no transitions available".

use reqwest::{Method, StatusCode};
use tracing::debug;

use crate::client::JiraClient;
use crate::error::JiraError;
use crate::models::{Transition, TransitionId, TransitionRequest, Transitions};
use crate::outcome;

impl JiraClient {
  /// Get available transitions for an issue, in remote order.
  pub async fn get_transitions(&self, issue_key: &str) -> Result<Vec<Transition>, JiraError> {
    let path = format!("rest/api/2/issue/{issue_key}/transitions");
    let request = self.build_request(Method::GET, &path, None)?;
    let response = self.send_raw(request).await?;
    debug!("transitions for {} -> {}", issue_key, response.status);

    match response.status {
      StatusCode::OK => {
        let transitions: Transitions = Self::decode(&response.body)?;
        Ok(transitions.transitions)
      }
      StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(JiraError::remote(
        response.status,
        "authentication failed, check your Jira credentials",
      )),
      StatusCode::NOT_FOUND => Err(JiraError::remote(
        response.status,
        format!("issue {issue_key} not found"),
      )),
      other => Err(JiraError::UnsupportedStatus(other.as_u16())),
    }
  }

  /// Execute a transition on an issue (success = 204 No Content).
  pub async fn transition_issue(&self, issue_key: &str, transition_id: &str) -> Result<(), JiraError> {
    let body = serde_json::to_string(&TransitionRequest {
      transition: TransitionId {
        id: transition_id.to_string(),
      },
    })
    .map_err(JiraError::Encode)?;

    let path = format!("rest/api/2/issue/{issue_key}/transitions");
    let request = self.build_request(Method::POST, &path, Some(body))?;
    let status = self.send_status(request).await?;
    debug!("transition {} via {} -> {}", issue_key, transition_id, status);

    outcome::transition_outcome(status)
  }
}
