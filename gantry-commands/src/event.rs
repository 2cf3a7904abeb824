//! External event shape consumed by the calling framework.

use serde::Serialize;
use serde_json::Value;

/// A named event with a structured payload.
///
/// Every command produces exactly one of these: the operation's success
/// event or its failure event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Event {
  #[serde(rename = "event")]
  pub name: &'static str,
  pub payload: Value,
}

impl Event {
  /// Create an event with the given name and payload.
  pub fn new(name: &'static str, payload: Value) -> Self {
    Self { name, payload }
  }
}
