//! # Gantry Command Handlers
//!
//! The boundary between the Jira client and the calling command-dispatch
//! framework. Each handler takes the raw JSON input the framework received,
//! runs exactly one Jira operation, and returns exactly one [`Event`]:
//! either the operation's success shape or its failure shape carrying the
//! echoed input fields plus a human-readable error. Handlers never panic and
//! never return an error to the caller; failures are also logged through
//! `tracing` for operational visibility.

pub mod commands;
pub mod event;

pub use event::Event;
