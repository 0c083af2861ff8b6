//! Core type definitions used across the ResumeHub workspace.

pub mod id;

pub use id::*;
