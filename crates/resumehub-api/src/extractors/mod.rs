//! Custom Axum extractors.

pub mod client;
pub mod json;
pub mod path;
pub mod query;

pub use client::ClientContext;
pub use json::JsonBody;
pub use path::parse_resume_id;
pub use query::QueryParams;
