//! Deploy Module
//!
//! Builds an artifact and synchronizes it into the dist and resource
//! directories.
//!
//! ## Structure
//!
//! - `options` - Configuration types (`DeployOptions`)
//! - `replace` - Atomic / in-place directory replacement
//! - `result` - Result types (`DeployReport`)
//! - `use_case` - Core use case logic (`DeployUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use livecity_deploy::application::deploy::{DeployOptions, DeployUseCase};
//!
//! let use_case = DeployUseCase::new(LocalFs::new(), CommandBuildRunner::new());
//! let report = use_case.execute(&Artifact::client(), &DeployOptions::new(repo, resources))?;
//! ```

mod options;
mod replace;
mod result;
mod use_case;

pub use options::DeployOptions;
pub use replace::replace_dir;
pub use result::DeployReport;
pub use use_case::DeployUseCase;
