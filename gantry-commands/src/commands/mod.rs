//! # Command Modules
//!
//! One module per remote capability. Each exposes an async handler with the
//! signature `(client, raw JSON input) -> Event` plus the names of its two
//! output events.

pub mod assign;
pub mod comment;
pub mod create;
pub mod info;
pub mod link;
pub mod search;
pub mod transitions;

pub use assign::assign_issue;
pub use comment::comment_issue;
pub use create::create_issue;
pub use info::issue_info;
pub use link::{create_link, delete_link, get_link};
pub use search::search_issues;
pub use transitions::{do_transition, get_transitions};
