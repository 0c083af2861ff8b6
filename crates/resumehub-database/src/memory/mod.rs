//! In-process repositories backed by `DashMap`.
//!
//! Used when `store.provider = "memory"` and by the test suites. Each
//! write happens under the map's per-entry lock, which gives the same
//! single-statement atomicity the PostgreSQL repositories rely on.

pub mod resume;
pub mod share;

pub use resume::MemoryResumeRepository;
pub use share::MemoryShareRepository;
