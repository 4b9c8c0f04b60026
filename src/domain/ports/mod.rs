//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod build_runner;
pub mod deploy_events;
pub mod file_system;

pub use build_runner::{BuildOutcome, BuildRequest, BuildRunner};
pub use deploy_events::{DeployEvent, DeployEventSink, NoopEventSink};
pub use file_system::FileSystem;
