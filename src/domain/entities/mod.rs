//! Domain Entities

mod artifact;

pub use artifact::{select as select_artifacts, Artifact};
