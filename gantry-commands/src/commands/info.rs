//! Issue-info command.
//!
//! The input is a bare JSON string carrying the issue key. The success
//! payload exposes the superset of issue fields; the calling framework
//! selects what it surfaces.

use gantry_jira::JiraClient;
use serde_json::{Value, json};
use tracing::warn;

use crate::event::Event;

/// Success event name
pub const INFO: &str = "Info";
/// Failure event name
pub const INFO_FAILURE: &str = "InfoFailure";

/// Fetch an issue by key and report its fields as an event.
pub async fn issue_info(client: &JiraClient, input: Value) -> Event {
  let id: String = match serde_json::from_value(input) {
    Ok(id) => id,
    Err(err) => {
      let error = format!("could not decode issue id: {err}");
      warn!("{error}");
      return failure_event("unknown", &error);
    }
  };

  match client.get_issue(&id).await {
    Ok(issue) => {
      let fields = issue.fields;
      Event::new(
        INFO,
        json!({
            "id": issue.key,
            "summary": fields.summary,
            "status": fields.status.name,
            "description": fields.description.unwrap_or_default(),
            "assignee": fields.assignee.as_ref().map(|a| a.identity().to_string()).unwrap_or_default(),
            "assigneeEmail": fields.assignee.as_ref().and_then(|a| a.email_address.clone()).unwrap_or_default(),
            "reporter": fields.reporter.as_ref().map(|r| r.identity().to_string()).unwrap_or_default(),
            "labels": fields.labels,
            "components": fields.components.iter().map(|c| c.name.clone()).collect::<Vec<_>>(),
            "priority": fields.priority.map(|p| p.name).unwrap_or_default(),
            "issuetype": fields.issue_type.map(|t| t.name).unwrap_or_default(),
        }),
      )
    }
    Err(err) => {
      let error = format!("could not get info: {err}");
      warn!("{error}");
      failure_event(&id, &error)
    }
  }
}

fn failure_event(id: &str, error: &str) -> Event {
  Event::new(
    INFO_FAILURE,
    json!({
        "id": id,
        "error": error,
    }),
  )
}
