//! Wire and domain models for the Jira REST API.
//!
//! Response models are deliberately lenient: Jira omits fields freely
//! depending on project scheme and field selection, so everything beyond the
//! issue key decodes to a default when absent.

use serde::{Deserialize, Serialize};

/// Represents Jira authentication credentials
#[derive(Clone)]
pub struct JiraAuth {
  pub username: String,
  pub password: String,
}

/// Represents a Jira issue
#[derive(Debug, Default, Deserialize)]
pub struct Issue {
  pub key: String,
  #[serde(default)]
  pub fields: IssueFields,
}

/// Represents Jira issue fields
#[derive(Debug, Default, Deserialize)]
pub struct IssueFields {
  #[serde(default)]
  pub summary: String,
  pub description: Option<String>,
  #[serde(default)]
  pub status: IssueStatus,
  pub assignee: Option<Assignee>,
  pub reporter: Option<Assignee>,
  #[serde(default)]
  pub labels: Vec<String>,
  #[serde(default)]
  pub components: Vec<Component>,
  pub priority: Option<Priority>,
  #[serde(rename = "issuetype")]
  pub issue_type: Option<IssueType>,
  #[serde(rename = "issuelinks", default)]
  pub links: Vec<LinkRef>,
}

/// Represents a Jira issue status
#[derive(Debug, Default, Deserialize)]
pub struct IssueStatus {
  pub id: Option<String>,
  #[serde(default)]
  pub name: String,
}

/// A user reference on an issue (assignee or reporter).
///
/// Jira instances differ on which identity fields they populate, so both the
/// short name and the email address are exposed.
#[derive(Debug, Default, Deserialize)]
pub struct Assignee {
  pub name: Option<String>,
  #[serde(rename = "emailAddress")]
  pub email_address: Option<String>,
  #[serde(rename = "displayName")]
  pub display_name: Option<String>,
}

impl Assignee {
  /// The best human-readable identity available: short name first, then
  /// display name, then email address.
  pub fn identity(&self) -> &str {
    self
      .name
      .as_deref()
      .or(self.display_name.as_deref())
      .or(self.email_address.as_deref())
      .unwrap_or_default()
  }
}

/// Represents a Jira issue priority
#[derive(Debug, Deserialize)]
pub struct Priority {
  pub id: Option<String>,
  #[serde(default)]
  pub name: String,
}

/// Represents a Jira project component
#[derive(Debug, Deserialize)]
pub struct Component {
  pub name: String,
}

/// Represents a Jira issue type
#[derive(Debug, Deserialize)]
pub struct IssueType {
  pub name: String,
}

/// A link identifier attached to an issue's `issuelinks` field
#[derive(Debug, Deserialize)]
pub struct LinkRef {
  pub id: String,
}

/// The remote's echo of a freshly created issue
#[derive(Debug, Deserialize)]
pub struct CreatedIssue {
  pub id: Option<String>,
  pub key: String,
  #[serde(rename = "self")]
  pub self_url: Option<String>,
}

/// Typed input for issue creation
#[derive(Debug, Clone, Default)]
pub struct CreateIssueRequest {
  pub project: String,
  pub issue_type: String,
  pub summary: String,
  pub description: Option<String>,
  pub labels: Vec<String>,
  pub priority: Option<String>,
  pub reporter: Option<String>,
}

/// Wire shape for issue creation: `{"fields": {...}}`
#[derive(Debug, Serialize)]
pub(crate) struct IssueCreateBody<'a> {
  pub fields: IssueCreateFields<'a>,
}

#[derive(Debug, Serialize)]
pub(crate) struct IssueCreateFields<'a> {
  pub project: KeyRef<'a>,
  #[serde(rename = "issuetype")]
  pub issue_type: NameRef<'a>,
  pub summary: &'a str,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<&'a str>,
  #[serde(skip_serializing_if = "<[String]>::is_empty")]
  pub labels: &'a [String],
  #[serde(skip_serializing_if = "Option::is_none")]
  pub priority: Option<NameRef<'a>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub reporter: Option<NameRef<'a>>,
}

#[derive(Debug, Serialize)]
pub(crate) struct KeyRef<'a> {
  pub key: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct NameRef<'a> {
  pub name: &'a str,
}

/// Represents a comment body
#[derive(Debug, Serialize, Deserialize)]
pub struct Comment {
  pub body: String,
}

/// Wire shape for the search endpoint request body
#[derive(Debug, Serialize)]
pub(crate) struct SearchRequest<'a> {
  pub jql: &'a str,
  #[serde(rename = "startAt")]
  pub start_at: u32,
  #[serde(rename = "maxResults")]
  pub max_results: u32,
  pub fields: &'a [&'a str],
}

/// Represents a page of search results, in remote order
#[derive(Debug, Default, Deserialize)]
pub struct SearchResult {
  #[serde(rename = "startAt", default)]
  pub start_at: u32,
  #[serde(rename = "maxResults", default)]
  pub max_results: u32,
  #[serde(rename = "total", default)]
  pub total: u32,
  #[serde(default)]
  pub issues: Vec<Issue>,
}

/// Wire shape for the assignee endpoint: an empty name serializes to `{}`,
/// which the remote treats as "unassign"
#[derive(Debug, Serialize)]
pub(crate) struct AssignRequest<'a> {
  #[serde(skip_serializing_if = "str::is_empty")]
  pub name: &'a str,
}

/// A directed link between two issues, used both when creating a link and
/// when decoding a fetched one
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Link {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub id: Option<String>,
  #[serde(rename = "type", default)]
  pub link_type: LinkType,
  #[serde(rename = "inwardIssue", default)]
  pub inward_issue: LinkedIssue,
  #[serde(rename = "outwardIssue", default)]
  pub outward_issue: LinkedIssue,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub comment: Option<Comment>,
}

/// The named semantic type of a link (e.g. "Blocks")
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LinkType {
  #[serde(default)]
  pub name: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub inward: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub outward: Option<String>,
}

/// One endpoint of a link
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LinkedIssue {
  #[serde(default)]
  pub key: String,
}

/// Represents a Jira transition
#[derive(Debug, Serialize, Deserialize)]
pub struct Transition {
  pub id: String,
  pub name: String,
}

/// Represents a list of Jira transitions
#[derive(Debug, Deserialize)]
pub struct Transitions {
  pub transitions: Vec<Transition>,
}

/// Represents a transition request payload
#[derive(Debug, Serialize)]
pub struct TransitionRequest {
  pub transition: TransitionId,
}

/// Represents a transition ID for the request
#[derive(Debug, Serialize)]
pub struct TransitionId {
  pub id: String,
}
