//! # Jira Issue Link Endpoints
//!
//! Creating, fetching, and deleting directed links between issues. All three
//! share the 200–208 success band and the same error table.

use reqwest::Method;
use tracing::debug;

use crate::client::JiraClient;
use crate::consts::LINK_COMMENT;
use crate::error::JiraError;
use crate::models::{Comment, Link, LinkType, LinkedIssue};
use crate::outcome;

impl JiraClient {
  /// Link two issues with the named link type. Every created link carries
  /// the fixed comment body.
  pub async fn link_issues(&self, inward_key: &str, outward_key: &str, link_type: &str) -> Result<(), JiraError> {
    let link = Link {
      id: None,
      link_type: LinkType {
        name: link_type.to_string(),
        inward: None,
        outward: None,
      },
      inward_issue: LinkedIssue {
        key: inward_key.to_string(),
      },
      outward_issue: LinkedIssue {
        key: outward_key.to_string(),
      },
      comment: Some(Comment {
        body: LINK_COMMENT.to_string(),
      }),
    };
    let body = serde_json::to_string(&link).map_err(JiraError::Encode)?;

    let request = self.build_request(Method::POST, "rest/api/2/issueLink", Some(body))?;
    let status = self.send_status(request).await?;
    debug!("link {} -> {} ({}) -> {}", inward_key, outward_key, link_type, status);

    outcome::link_outcome(status)
  }

  /// Fetch a link by its identifier.
  pub async fn get_link(&self, link_id: &str) -> Result<Link, JiraError> {
    let path = format!("rest/api/2/issueLink/{link_id}");
    let request = self.build_request(Method::GET, &path, None)?;
    let response = self.send_raw(request).await?;
    debug!("get link {} -> {}", link_id, response.status);

    outcome::link_outcome(response.status)?;
    Self::decode(&response.body)
  }

  /// Delete a link by its identifier.
  pub async fn delete_link(&self, link_id: &str) -> Result<(), JiraError> {
    let path = format!("rest/api/2/issueLink/{link_id}");
    let request = self.build_request(Method::DELETE, &path, None)?;
    let status = self.send_status(request).await?;
    debug!("delete link {} -> {}", link_id, status);

    outcome::link_outcome(status)
  }
}
