//! Property tests for livecity-deploy.
//!
//! Properties use randomized trees to protect the mirroring invariants:
//! deployed == build output + metadata, idempotence and stale removal.
//!
//! Run with: `cargo test --test properties`

#[path = "properties/tree_mirror.rs"]
mod tree_mirror;
