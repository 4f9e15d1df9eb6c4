// src/assets/mod.rs
// =============================================================================
// Asset retrieval: turning the README's local references into files on disk.
//
// Submodules:
// - retrieve: per-asset download with failure isolation
// =============================================================================

mod retrieve;

pub use retrieve::{retrieve_assets, AssetOutcome, AssetStatus};
