//! Create-issue command.

use gantry_jira::{CreateIssueRequest, JiraClient};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::warn;

use crate::event::Event;

/// Success event name
pub const CREATE_ISSUE: &str = "CreateIssue";
/// Failure event name
pub const CREATE_ISSUE_FAILURE: &str = "CreateIssueFailure";

// Support-queue project policy: tickets without both a title and a
// description bounce back to the requester, so reject them before the
// remote call.
const STRICT_PROJECT: &str = "RCPSUP";

#[derive(Debug, Default, Deserialize)]
struct CreateInput {
  #[serde(default)]
  project: String,
  #[serde(default, rename = "issuetype")]
  issue_type: String,
  #[serde(default)]
  summary: String,
  #[serde(default)]
  description: String,
  #[serde(default)]
  labels: Vec<String>,
  #[serde(default)]
  priority: String,
  #[serde(default)]
  reporter: String,
}

/// Create an issue from the given input and report the result as an event.
pub async fn create_issue(client: &JiraClient, input: Value) -> Event {
  let input: CreateInput = match serde_json::from_value(input) {
    Ok(input) => input,
    Err(err) => {
      let error = format!("could not decode create issue input: {err}");
      warn!("{error}");
      return failure_event(&CreateInput::default(), &error);
    }
  };

  if input.project == STRICT_PROJECT && (input.summary.is_empty() || input.description.is_empty()) {
    let error = "please provide both issue title and description, mandatory fields missing".to_string();
    warn!("{error}");
    return failure_event(&input, &error);
  }

  let request = CreateIssueRequest {
    project: input.project.clone(),
    issue_type: input.issue_type.clone(),
    summary: input.summary.clone(),
    description: (!input.description.is_empty()).then(|| input.description.clone()),
    labels: input.labels.clone(),
    priority: (!input.priority.is_empty()).then(|| input.priority.clone()),
    reporter: (!input.reporter.is_empty()).then(|| input.reporter.clone()),
  };

  match client.create_issue(&request).await {
    Ok(created) => Event::new(
      CREATE_ISSUE,
      json!({
          "id": created.key,
          "url": client.browse_url(&created.key),
          "project": input.project,
          "issuetype": input.issue_type,
          "summary": input.summary,
          "description": input.description,
          "priority": input.priority,
          "reporter": input.reporter,
      }),
    ),
    Err(err) => {
      let error = format!("could not create issue: {err}");
      warn!("{error}");
      failure_event(&input, &error)
    }
  }
}

fn failure_event(input: &CreateInput, error: &str) -> Event {
  Event::new(
    CREATE_ISSUE_FAILURE,
    json!({
        "error": error,
        "project": input.project,
        "issuetype": input.issue_type,
        "summary": input.summary,
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
  async fn test_create_issue_success_event() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = test_client(&mock_server.uri());

    Mock::given(method("POST"))
      .and(path("/rest/api/2/issue/"))
      .and(body_json(json!({
          "fields": {
              "project": { "key": "FLYTE" },
              "issuetype": { "name": "Story" },
              "summary": "test story"
          }
      })))
      .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "key": "FLYTE-1" })))
      .mount(&mock_server)
      .await;

    let event = create_issue(
      &client,
      json!({ "project": "FLYTE", "issuetype": "Story", "summary": "test story" }),
    )
    .await;

    assert_eq!(event.name, CREATE_ISSUE);
    assert_eq!(event.payload["id"], "FLYTE-1");
    assert_eq!(
      event.payload["url"],
      format!("{}/browse/FLYTE-1", mock_server.uri())
    );
    assert_eq!(event.payload["project"], "FLYTE");
    assert_eq!(event.payload["issuetype"], "Story");
    assert_eq!(event.payload["summary"], "test story");

    Ok(())
  }

  #[tokio::test]
  async fn test_create_issue_remote_failure_event() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = test_client(&mock_server.uri());

    Mock::given(method("POST"))
      .and(path("/rest/api/2/issue/"))
      .respond_with(ResponseTemplate::new(500))
      .mount(&mock_server)
      .await;

    let event = create_issue(
      &client,
      json!({ "project": "FLYTE", "issuetype": "Story", "summary": "test story" }),
    )
    .await;

    assert_eq!(event.name, CREATE_ISSUE_FAILURE);
    assert_eq!(event.payload["project"], "FLYTE");
    assert!(
      event.payload["error"]
        .as_str()
        .unwrap()
        .contains("could not create issue")
    );

    Ok(())
  }

  #[tokio::test]
  async fn test_create_issue_strict_project_requires_description() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = test_client(&mock_server.uri());

    // No mock mounted: the policy check must fire before any remote call.
    let event = create_issue(
      &client,
      json!({ "project": "RCPSUP", "issuetype": "Task", "summary": "broken printer" }),
    )
    .await;

    assert_eq!(event.name, CREATE_ISSUE_FAILURE);
    assert!(event.payload["error"].as_str().unwrap().contains("mandatory fields"));
    assert!(mock_server.received_requests().await.unwrap().is_empty());

    Ok(())
  }

  #[tokio::test]
  async fn test_create_issue_undecodable_input() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = test_client(&mock_server.uri());

    let event = create_issue(&client, json!({ "labels": "not-an-array" })).await;

    assert_eq!(event.name, CREATE_ISSUE_FAILURE);
    assert!(
      event.payload["error"]
        .as_str()
        .unwrap()
        .contains("could not decode create issue input")
    );

    Ok(())
  }
}
