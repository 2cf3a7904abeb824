//! Issue-link commands: create, fetch, and delete a link between issues.
//! All three share one pair of event names.

use gantry_jira::JiraClient;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::warn;

use crate::event::Event;

/// Success event name
pub const LINK: &str = "Link";
/// Failure event name
pub const LINK_FAILURE: &str = "LinkFailure";

#[derive(Debug, Default, Deserialize)]
struct LinkInput {
  #[serde(default, rename = "linkId")]
  link_id: String,
  #[serde(default, rename = "inwardIssue")]
  inward_issue: String,
  #[serde(default, rename = "outwardIssue")]
  outward_issue: String,
  #[serde(default, rename = "linkType")]
  link_type: String,
}

impl LinkInput {
  /// Echo of the request fields, omitting the ones that were not supplied.
  fn echo(&self) -> Value {
    let mut payload = serde_json::Map::new();
    if !self.link_id.is_empty() {
      payload.insert("linkId".to_string(), self.link_id.clone().into());
    }
    if !self.inward_issue.is_empty() {
      payload.insert("inwardIssue".to_string(), self.inward_issue.clone().into());
    }
    if !self.outward_issue.is_empty() {
      payload.insert("outwardIssue".to_string(), self.outward_issue.clone().into());
    }
    if !self.link_type.is_empty() {
      payload.insert("linkType".to_string(), self.link_type.clone().into());
    }
    Value::Object(payload)
  }
}

/// Link two issues and report the result as an event.
pub async fn create_link(client: &JiraClient, input: Value) -> Event {
  let input: LinkInput = match serde_json::from_value(input) {
    Ok(input) => input,
    Err(err) => {
      warn!("could not decode link input: {err}");
      return failure_event(&LinkInput::default(), &err.to_string());
    }
  };

  match client
    .link_issues(&input.inward_issue, &input.outward_issue, &input.link_type)
    .await
  {
    Ok(()) => Event::new(LINK, input.echo()),
    Err(err) => {
      warn!(
        "could not link {} to {} as {}: {err}",
        input.inward_issue, input.outward_issue, input.link_type
      );
      failure_event(&input, &err.to_string())
    }
  }
}

/// Fetch a link by id and report it as an event.
pub async fn get_link(client: &JiraClient, input: Value) -> Event {
  let input: LinkInput = match serde_json::from_value(input) {
    Ok(input) => input,
    Err(err) => {
      warn!("could not decode link input: {err}");
      return failure_event(&LinkInput::default(), &err.to_string());
    }
  };

  match client.get_link(&input.link_id).await {
    Ok(link) => match serde_json::to_value(&link) {
      Ok(payload) => Event::new(LINK, payload),
      Err(err) => failure_event(&input, &err.to_string()),
    },
    Err(err) => {
      warn!("could not fetch link {}: {err}", input.link_id);
      failure_event(&input, &err.to_string())
    }
  }
}

/// Delete a link by id and report the result as an event.
pub async fn delete_link(client: &JiraClient, input: Value) -> Event {
  let input: LinkInput = match serde_json::from_value(input) {
    Ok(input) => input,
    Err(err) => {
      warn!("could not decode link input: {err}");
      return failure_event(&LinkInput::default(), &err.to_string());
    }
  };

  match client.delete_link(&input.link_id).await {
    Ok(()) => Event::new(LINK, input.echo()),
    Err(err) => {
      warn!("could not remove link {}: {err}", input.link_id);
      failure_event(&input, &err.to_string())
    }
  }
}

fn failure_event(input: &LinkInput, error: &str) -> Event {
  let mut payload = input.echo();
  if let Value::Object(map) = &mut payload {
    map.insert("error".to_string(), json!(error));
  }
  Event::new(LINK_FAILURE, payload)
}
