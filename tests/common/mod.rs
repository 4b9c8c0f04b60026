//! Common test utilities for livecity-deploy CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated repository + alt:V server root, plus helpers to run the CLI
//! - Assertion macros: `assert_output_contains!`, `assert_tree_eq!`
//! - `tree_files`: relative file listing used by the assertions

#![allow(dead_code)]

pub mod assertions;
pub mod env;

pub use assertions::*;
pub use env::*;
