//! Shared resume links.

pub mod model;
pub mod snapshot;
pub mod view;

pub use model::{NewSharedResume, SharedResume, SharedResumeChanges};
pub use snapshot::ResumeSnapshot;
pub use view::{CreatedShare, PublicShare, ShareDebugEntry, ShareMetadata, ShareStats};
