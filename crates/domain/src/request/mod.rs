//! Resolved request types

mod header;
mod query;
mod spec;

pub use header::{CONTENT_TYPE, JSON_CONTENT_TYPE, merge_headers};
pub use query::{build_url, query_string};
pub use spec::HookRequest;
