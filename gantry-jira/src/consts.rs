//! Constants for the gantry-jira client.

/// User-Agent header value for the Jira API client
pub const USER_AGENT: &str = concat!("gantry/", env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Field list requested from the search endpoint. The remote only returns
/// these fields on matched issues, keeping search payloads small.
pub const SEARCH_FIELDS: [&str; 6] = ["summary", "assignee", "labels", "status", "description", "priority"];

/// Comment body attached to every link created between two issues.
pub const LINK_COMMENT: &str = "Link related issues!";
