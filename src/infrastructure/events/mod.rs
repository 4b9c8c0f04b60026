//! `DeployEventSink` implementations for machine-readable output.

mod json;

pub use json::JsonEventSink;
