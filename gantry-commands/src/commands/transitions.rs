//! Transition commands: listing the transitions available to an issue and
//! executing one.

use gantry_jira::JiraClient;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::warn;

use crate::event::Event;

/// Success event name for listing transitions
pub const GET_TRANSITIONS: &str = "GetTransitions";
/// Failure event name for listing transitions
pub const GET_TRANSITIONS_FAILURE: &str = "GetTransitionsFailure";
/// Success event name for executing a transition
pub const DO_TRANSITION: &str = "DoTransition";
/// Failure event name for executing a transition
pub const DO_TRANSITION_FAILURE: &str = "DoTransitionFailure";

#[derive(Debug, Default, Deserialize)]
struct IssueIdInput {
  #[serde(default, rename = "issueId")]
  issue_id: String,
}

#[derive(Debug, Default, Deserialize)]
struct DoTransitionInput {
  #[serde(default, rename = "issueId")]
  issue_id: String,
  #[serde(default, rename = "transitionId")]
  transition_id: String,
}

/// List the transitions currently available to an issue.
pub async fn get_transitions(client: &JiraClient, input: Value) -> Event {
  let input: IssueIdInput = match serde_json::from_value(input) {
    Ok(input) => input,
    Err(err) => {
      warn!("could not decode get transitions input: {err}");
      return transitions_failure_event("", &err.to_string());
    }
  };

  match client.get_transitions(&input.issue_id).await {
    Ok(transitions) => Event::new(
      GET_TRANSITIONS,
      json!({
          "id": input.issue_id,
          "transitions": transitions,
      }),
    ),
    Err(err) => {
      warn!("could not get transitions for {}: {err}", input.issue_id);
      transitions_failure_event(&input.issue_id, &err.to_string())
    }
  }
}

/// Execute a transition on an issue.
pub async fn do_transition(client: &JiraClient, input: Value) -> Event {
  let input: DoTransitionInput = match serde_json::from_value(input) {
    Ok(input) => input,
    Err(err) => {
      warn!("could not decode transition input: {err}");
      return do_transition_failure_event(&DoTransitionInput::default(), &err.to_string());
    }
  };

  match client.transition_issue(&input.issue_id, &input.transition_id).await {
    Ok(()) => Event::new(
      DO_TRANSITION,
      json!({
          "issueId": input.issue_id,
          "transitionId": input.transition_id,
      }),
    ),
    Err(err) => {
      warn!("could not transition {}: {err}", input.issue_id);
      do_transition_failure_event(&input, &err.to_string())
    }
  }
}

fn transitions_failure_event(id: &str, error: &str) -> Event {
  Event::new(
    GET_TRANSITIONS_FAILURE,
    json!({
        "id": id,
        "error": error,
    }),
  )
}

fn do_transition_failure_event(input: &DoTransitionInput, error: &str) -> Event {
  Event::new(
    DO_TRANSITION_FAILURE,
    json!({
        "id": input.issue_id,
        "transitionId": input.transition_id,
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
  async fn test_get_transitions_success_event() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = test_client(&mock_server.uri());

    Mock::given(method("GET"))
      .and(path("/rest/api/2/issue/DEV-1/transitions"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({
          "transitions": [
              { "id": "11", "name": "To Do" },
              { "id": "21", "name": "In Progress" }
          ]
      })))
      .mount(&mock_server)
      .await;

    let event = get_transitions(&client, json!({ "issueId": "DEV-1" })).await;

    assert_eq!(event.name, GET_TRANSITIONS);
    assert_eq!(event.payload["id"], "DEV-1");
    assert_eq!(
      event.payload["transitions"],
      json!([
          { "id": "11", "name": "To Do" },
          { "id": "21", "name": "In Progress" }
      ])
    );

    Ok(())
  }

  #[tokio::test]
  async fn test_get_transitions_missing_issue_is_a_failure_event() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = test_client(&mock_server.uri());

    Mock::given(method("GET"))
      .and(path("/rest/api/2/issue/NOPE-1/transitions"))
      .respond_with(ResponseTemplate::new(404))
      .mount(&mock_server)
      .await;

    let event = get_transitions(&client, json!({ "issueId": "NOPE-1" })).await;

    // Never a success event with an empty transition list.
    assert_eq!(event.name, GET_TRANSITIONS_FAILURE);
    assert!(event.payload["error"].as_str().unwrap().contains("not found"));

    Ok(())
  }

  #[tokio::test]
  async fn test_do_transition_success_event() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = test_client(&mock_server.uri());

    Mock::given(method("POST"))
      .and(path("/rest/api/2/issue/DEV-1/transitions"))
      .and(body_json(json!({ "transition": { "id": "21" } })))
      .respond_with(ResponseTemplate::new(204))
      .mount(&mock_server)
      .await;

    let event = do_transition(&client, json!({ "issueId": "DEV-1", "transitionId": "21" })).await;

    assert_eq!(event.name, DO_TRANSITION);
    assert_eq!(event.payload, json!({ "issueId": "DEV-1", "transitionId": "21" }));

    Ok(())
  }

  #[tokio::test]
  async fn test_do_transition_failure_event() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = test_client(&mock_server.uri());

    Mock::given(method("POST"))
      .and(path("/rest/api/2/issue/DEV-1/transitions"))
      .respond_with(ResponseTemplate::new(400))
      .mount(&mock_server)
      .await;

    let event = do_transition(&client, json!({ "issueId": "DEV-1", "transitionId": "" })).await;

    assert_eq!(event.name, DO_TRANSITION_FAILURE);
    assert_eq!(event.payload["error"], "no transition specified");

    Ok(())
  }
}
