//! livecity-deploy - build and deploy LiveCity resources to a local alt:V server
//!
//! Publishes the client and server projects with the .NET toolchain, stages
//! each artifact in `dist/<artifact>` together with its `resource.toml`, and
//! mirrors the staged tree into `$ALTV_SERVER_ROOT/resources/<artifact>`.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{DeployOptions, DeployReport, DeployUseCase};
pub use config::Config;
pub use domain::entities::Artifact;
pub use error::{DeployError, DeployResult};
pub use infrastructure::{CommandBuildRunner, JsonEventSink, LocalFs};
