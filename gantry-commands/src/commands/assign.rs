//! Assign-issue command.

use gantry_jira::JiraClient;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::warn;

use crate::event::Event;

/// Success event name
pub const ASSIGN: &str = "Assign";
/// Failure event name
pub const ASSIGN_FAILURE: &str = "AssignFailure";

#[derive(Debug, Default, Deserialize)]
struct AssignInput {
  #[serde(default, rename = "issueId")]
  issue_id: String,
  #[serde(default)]
  username: String,
}

/// Assign an issue to a user (or unassign it with an empty username) and
/// report the result as an event.
pub async fn assign_issue(client: &JiraClient, input: Value) -> Event {
  let input: AssignInput = match serde_json::from_value(input) {
    Ok(input) => input,
    Err(err) => {
      warn!("could not decode assign input: {err}");
      return failure_event(&AssignInput::default(), &err.to_string());
    }
  };

  match client.assign_issue(&input.issue_id, &input.username).await {
    Ok(()) => Event::new(
      ASSIGN,
      json!({
          "issueId": input.issue_id,
          "username": input.username,
      }),
    ),
    Err(err) => {
      warn!("could not assign issue {} to {}: {err}", input.issue_id, input.username);
      failure_event(&input, &err.to_string())
    }
  }
}

fn failure_event(input: &AssignInput, error: &str) -> Event {
  Event::new(
    ASSIGN_FAILURE,
    json!({
        "issueId": input.issue_id,
        "username": input.username,
        "error": error,
    }),
  )
}

#[cfg(test)]
mod tests {
  use std::sync::Arc;

  use gantry_jira::{HttpTransport, JiraClient, TransportConfig};
  use wiremock::matchers::{body_json, method, path};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  use super::*;

  fn test_client(base_url: &str) -> JiraClient {
    let transport = HttpTransport::new(&TransportConfig::default()).unwrap();
    JiraClient::new(
      gantry_jira::JiraConfig {
        host: base_url.to_string(),
        username: "test_user".to_string(),
        password: "test_token".to_string(),
      },
      Arc::new(transport),
    )
  }

  #[tokio::test]
  async fn test_assign_issue_success_event() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = test_client(&mock_server.uri());

    Mock::given(method("PUT"))
      .and(path("/rest/api/2/issue/DEVEX-1/assignee"))
      .and(body_json(json!({ "name": "bob" })))
      .respond_with(ResponseTemplate::new(204))
      .mount(&mock_server)
      .await;

    let event = assign_issue(&client, json!({ "issueId": "DEVEX-1", "username": "bob" })).await;

    assert_eq!(event.name, ASSIGN);
    assert_eq!(event.payload, json!({ "issueId": "DEVEX-1", "username": "bob" }));

    Ok(())
  }

  #[tokio::test]
  async fn test_assign_issue_not_found_failure_event() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = test_client(&mock_server.uri());

    Mock::given(method("PUT"))
      .and(path("/rest/api/2/issue/DEVEX-1/assignee"))
      .respond_with(ResponseTemplate::new(404))
      .mount(&mock_server)
      .await;

    let event = assign_issue(&client, json!({ "issueId": "DEVEX-1", "username": "bob" })).await;

    assert_eq!(event.name, ASSIGN_FAILURE);
    assert_eq!(event.payload["error"], "issue or user does not exist");
    assert_eq!(event.payload["issueId"], "DEVEX-1");
    assert_eq!(event.payload["username"], "bob");

    Ok(())
  }

  #[tokio::test]
  async fn test_assign_issue_unassigns_with_empty_username() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = test_client(&mock_server.uri());

    Mock::given(method("PUT"))
      .and(path("/rest/api/2/issue/DEVEX-1/assignee"))
      .and(body_json(json!({})))
      .respond_with(ResponseTemplate::new(204))
      .mount(&mock_server)
      .await;

    let event = assign_issue(&client, json!({ "issueId": "DEVEX-1" })).await;

    assert_eq!(event.name, ASSIGN);
    assert_eq!(event.payload["username"], "");

    Ok(())
  }
}
