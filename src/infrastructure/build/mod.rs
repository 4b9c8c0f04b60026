//! Build Tool Implementations
//!
//! Concrete implementations of the BuildRunner port.

mod command;

pub use command::CommandBuildRunner;
