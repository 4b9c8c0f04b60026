//! Configuration module
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (`LIVECITY_*`, plus the resource root variable)
//! 3. Repository config (`livecity-deploy.toml`)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod suggest;
mod types;

pub use loader::{with_env_overrides, ConfigWarning};
pub use types::{BuildConfig, ColorMode, Config, DeployConfig, OutputConfig};
