//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local disk implementation of `FileSystem`
//! - `build/` - Subprocess implementation of `BuildRunner`
//! - `events/` - NDJSON `DeployEventSink`

pub mod build;
pub mod events;
pub mod fs;

pub use build::CommandBuildRunner;
pub use events::JsonEventSink;
pub use fs::LocalFs;
