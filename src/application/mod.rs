//! Application Layer
//!
//! Use cases that orchestrate the deploy flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `DeployUseCase` - Build, stage into `dist/`, mirror into the resource root
//! - `VerifyUseCase` - Compare deployed and staged trees
//! - `CleanUseCase` - Remove staged and deployed directories

pub mod clean;
pub mod deploy;
pub mod verify;

pub use clean::{CleanOptions, CleanResult, CleanUseCase, SkipReason, SkippedDir};
pub use deploy::{replace_dir, DeployOptions, DeployReport, DeployUseCase};
pub use verify::{VerifyReport, VerifyUseCase};
