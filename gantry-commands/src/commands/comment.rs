//! Comment-issue command.

use gantry_jira::JiraClient;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::warn;

use crate::event::Event;

/// Success event name
pub const COMMENT: &str = "Comment";
/// Failure event name
pub const COMMENT_FAILURE: &str = "CommentFailure";

#[derive(Debug, Default, Deserialize)]
struct CommentInput {
  #[serde(default)]
  id: String,
  #[serde(default)]
  comment: String,
}

/// Leave a comment on an issue and report the result as an event.
pub async fn comment_issue(client: &JiraClient, input: Value) -> Event {
  let input: CommentInput = match serde_json::from_value(input) {
    Ok(input) => input,
    Err(err) => {
      let error = format!("could not decode comment input: {err}");
      warn!("{error}");
      return failure_event(&CommentInput::default(), &error);
    }
  };

  match client.comment_issue(&input.id, &input.comment).await {
    Ok(()) => Event::new(
      COMMENT,
      json!({
          "id": input.id,
          "comment": input.comment,
      }),
    ),
    Err(err) => {
      let error = format!("could not leave comment: {err}");
      warn!("{error}");
      failure_event(&input, &error)
    }
  }
}

fn failure_event(input: &CommentInput, error: &str) -> Event {
  Event::new(
    COMMENT_FAILURE,
    json!({
        "id": input.id,
        "comment": input.comment,
        "error": error,
    }),
  )
}
