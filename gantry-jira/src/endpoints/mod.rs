//! # Jira API Endpoints
//!
//! Organized endpoint implementations for the Jira API operations exposed by
//! this crate: issue CRUD-style actions, search, links, and transitions.
//! Each method validates its input, performs exactly one remote call, and
//! translates the status code through the operation's outcome table.

pub mod issues;
pub mod links;
pub mod search;
pub mod transitions;
