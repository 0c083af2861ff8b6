//! Public share links: creation, viewing, editing and statistics.

pub mod link;
pub mod service;

pub use link::ShareIdGenerator;
pub use service::{CreateShareRequest, ShareService, UpdateShareRequest};
