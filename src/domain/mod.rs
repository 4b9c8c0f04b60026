//! Domain Layer
//!
//! Deploy concepts without I/O dependencies.
//!
//! - `entities/` - `Artifact`
//! - `value_objects/` - `DeployLayout`, `ContentHash`, `ExcludePatterns`, `ReplaceStrategy`
//! - `services/` - `TreeManifest` comparison
//! - `ports/` - `FileSystem`, `BuildRunner`, `DeployEventSink`

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
