//! # Jira Issue Endpoints
//!
//! Endpoint implementations for single-issue operations: creating an issue,
//! fetching it by key, commenting, and assigning a user.

use reqwest::{Method, StatusCode};
use tracing::{debug, warn};

use crate::client::JiraClient;
use crate::error::JiraError;
use crate::models::{
  AssignRequest, Comment, CreateIssueRequest, CreatedIssue, Issue, IssueCreateBody, IssueCreateFields, KeyRef, NameRef,
};
use crate::outcome;

impl JiraClient {
  /// Create a new issue and return the remote's echo (key, self link).
  pub async fn create_issue(&self, request: &CreateIssueRequest) -> Result<CreatedIssue, JiraError> {
    let body = IssueCreateBody {
      fields: IssueCreateFields {
        project: KeyRef { key: &request.project },
        issue_type: NameRef {
          name: &request.issue_type,
        },
        summary: &request.summary,
        description: request.description.as_deref(),
        labels: &request.labels,
        priority: request.priority.as_deref().map(|name| NameRef { name }),
        reporter: request.reporter.as_deref().map(|name| NameRef { name }),
      },
    };
    let body = serde_json::to_string(&body).map_err(JiraError::Encode)?;

    let http_request = self.build_request(Method::POST, "rest/api/2/issue/", Some(body))?;
    let response = self.send_raw(http_request).await?;
    debug!("create issue in {} -> {}", request.project, response.status);

    match response.status {
      StatusCode::CREATED => Self::decode(&response.body),
      StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(authentication_failed(response.status)),
      StatusCode::NOT_FOUND => Err(JiraError::remote(
        response.status,
        format!("project {} does not exist", request.project),
      )),
      other => {
        warn!("unexpected status {} creating issue in {}", other, request.project);
        Err(JiraError::UnsupportedStatus(other.as_u16()))
      }
    }
  }

  /// Get a Jira issue by key
  pub async fn get_issue(&self, issue_key: &str) -> Result<Issue, JiraError> {
    let path = format!("rest/api/2/issue/{issue_key}");
    let request = self.build_request(Method::GET, &path, None)?;
    let response = self.send_raw(request).await?;
    debug!("get issue {} -> {}", issue_key, response.status);

    match response.status {
      StatusCode::OK => Self::decode(&response.body),
      StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(authentication_failed(response.status)),
      StatusCode::NOT_FOUND => Err(JiraError::remote(
        response.status,
        format!("issue {issue_key} not found"),
      )),
      other => Err(JiraError::UnsupportedStatus(other.as_u16())),
    }
  }

  /// Add a comment to an issue (success = 201 Created).
  pub async fn comment_issue(&self, issue_key: &str, comment: &str) -> Result<(), JiraError> {
    let body = serde_json::to_string(&Comment {
      body: comment.to_string(),
    })
    .map_err(JiraError::Encode)?;

    let path = format!("rest/api/2/issue/{issue_key}/comment");
    let request = self.build_request(Method::POST, &path, Some(body))?;
    let status = self.send_status(request).await?;
    debug!("comment on {} -> {}", issue_key, status);

    match status {
      StatusCode::CREATED => Ok(()),
      StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(authentication_failed(status)),
      StatusCode::NOT_FOUND => Err(JiraError::remote(status, format!("issue {issue_key} not found"))),
      other => Err(JiraError::UnsupportedStatus(other.as_u16())),
    }
  }

  /// Assign an issue to a user. An empty username unassigns the issue
  /// (remote-documented behavior, preserved as-is).
  pub async fn assign_issue(&self, issue_key: &str, username: &str) -> Result<(), JiraError> {
    let body = serde_json::to_string(&AssignRequest { name: username }).map_err(JiraError::Encode)?;

    let path = format!("rest/api/2/issue/{issue_key}/assignee");
    let request = self.build_request(Method::PUT, &path, Some(body))?;
    let status = self.send_status(request).await?;
    debug!("assign {} to '{}' -> {}", issue_key, username, status);

    outcome::assign_outcome(status)
  }
}

fn authentication_failed(status: StatusCode) -> JiraError {
  JiraError::remote(status, "authentication failed, check your Jira credentials")
}
