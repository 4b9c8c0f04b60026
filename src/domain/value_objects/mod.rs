//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod exclude_patterns;
mod hash;
mod layout;
mod replace_strategy;

pub use exclude_patterns::ExcludePatterns;
pub use hash::ContentHash;
pub use layout::DeployLayout;
pub use replace_strategy::ReplaceStrategy;
