//! # Jira API Client
//!
//! Provides Jira REST API integration for issue management, search,
//! assignment, linking, and workflow transitions. Every operation performs a
//! single remote call and reports its result as a typed success value or a
//! [`JiraError`], ready to be wrapped into an external event by the
//! `gantry-commands` crate.

mod client;
pub mod consts;
mod endpoints;
mod error;
pub mod models;
mod outcome;
pub mod transport;

// Re-export the client
pub use client::{JiraClient, JiraConfig, create_jira_client};
// Re-export the error taxonomy
pub use error::{JiraError, TransportError};
// Re-export models
pub use models::{
  Assignee, CreateIssueRequest, CreatedIssue, Issue, IssueFields, IssueStatus, Link, SearchResult, Transition,
};
pub use transport::{HttpTransport, Transport, TransportConfig, TransportResponse};
