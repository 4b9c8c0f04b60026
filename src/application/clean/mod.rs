//! Clean Use Case
//!
//! Removes an artifact's staged (`dist/<artifact>`) and deployed
//! (`<resource root>/<artifact>`) directories.

mod options;
mod result;
mod use_case;

pub use options::CleanOptions;
pub use result::{CleanResult, SkipReason, SkippedDir};
pub use use_case::CleanUseCase;
