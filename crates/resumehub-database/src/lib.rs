//! # resumehub-database
//!
//! Store access for ResumeHub: the lazily established, shared
//! PostgreSQL connection, the repository traits the services depend on,
//! their PostgreSQL and in-memory implementations, migrations, and the
//! background sweep that purges expired share links.

pub mod connection;
pub mod error;
pub mod manager;
pub mod memory;
pub mod migration;
pub mod repositories;
pub mod stores;
pub mod sweeper;

pub use manager::{ConnectionManager, ConnectionState};
pub use repositories::{ResumeRepository, ShareRepository};
pub use stores::Stores;
