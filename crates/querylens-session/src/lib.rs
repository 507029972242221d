//! Session plumbing — page-context snapshot, credential resolution, and the
//! authenticated conversation fetch.
//!
//! The popup snapshots the page's session context (cookies, embedded page
//! data, web storage) and posts it here; nothing in this crate holds state
//! beyond a single request.

pub mod fetch;
pub mod resolver;
pub mod types;

pub use fetch::fetch_conversation;
pub use resolver::resolve_access_token;
pub use types::*;
