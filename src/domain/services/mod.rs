//! Domain Services

mod manifest;

pub use manifest::{ManifestDiff, TreeManifest};
