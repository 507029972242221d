//! Query extraction — conversation identity and the recursive document walk.
//!
//! Pure, synchronous core of the pipeline: no I/O, no shared state. The
//! session crate feeds it the fetched conversation document and the server
//! crate renders its output.

pub mod conversation;
pub mod queries;

pub use conversation::ConversationId;
pub use queries::{extract_queries, QUERY_RECORD_TYPE};
