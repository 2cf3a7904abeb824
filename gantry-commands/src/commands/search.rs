//! Search-issues command.

use gantry_jira::{JiraClient, JiraError};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::warn;

use crate::event::Event;

/// Success event name
pub const SEARCH_SUCCESS: &str = "SearchSuccess";
/// Failure event name
pub const SEARCH_FAILURE: &str = "SearchFailure";

fn default_max_results() -> u32 {
  10
}

#[derive(Debug, Deserialize)]
struct SearchInput {
  #[serde(default)]
  query: String,
  #[serde(default, rename = "startIndex")]
  start_index: u32,
  #[serde(default = "default_max_results", rename = "maxResults")]
  max_results: u32,
}

impl Default for SearchInput {
  fn default() -> Self {
    Self {
      query: String::new(),
      start_index: 0,
      max_results: default_max_results(),
    }
  }
}

/// Run a JQL search and report the matched issues as an event.
pub async fn search_issues(client: &JiraClient, input: Value) -> Event {
  let input: SearchInput = match serde_json::from_value(input) {
    Ok(input) => input,
    Err(err) => {
      let error = format!("could not decode search input: {err}");
      warn!("{error}");
      return failure_event(&SearchInput::default(), &error);
    }
  };

  match client
    .search_issues(&input.query, input.start_index, input.max_results)
    .await
  {
    Ok(result) => {
      let issues: Vec<Value> = result
        .issues
        .iter()
        .map(|issue| {
          json!({
              "id": issue.key,
              "summary": issue.fields.summary,
              "status": issue.fields.status.name,
              "description": issue.fields.description.clone().unwrap_or_default(),
              "assignee": issue.fields.assignee.as_ref().map(|a| a.identity().to_string()).unwrap_or_default(),
          })
        })
        .collect();

      Event::new(
        SEARCH_SUCCESS,
        json!({
            "query": input.query,
            "startIndex": input.start_index,
            "maxResults": input.max_results,
            "total": result.total,
            "issues": issues,
        }),
      )
    }
    // The fixed empty-query failure keeps its message as-is; remote errors
    // get the operation prefix.
    Err(err @ JiraError::Validation(_)) => {
      warn!("{err}");
      failure_event(&input, &err.to_string())
    }
    Err(err) => {
      let error = format!("could not search for issues: {err}");
      warn!("{error}");
      failure_event(&input, &error)
    }
  }
}

fn failure_event(input: &SearchInput, error: &str) -> Event {
  Event::new(
    SEARCH_FAILURE,
    json!({
        "query": input.query,
        "startIndex": input.start_index,
        "maxResults": input.max_results,
        "error": error,
    }),
  )
}
