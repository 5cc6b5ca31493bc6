// snapguard-core/src/application/mod.rs

pub mod maintainer;
pub mod prune;

#[cfg(test)]
pub(crate) mod test_support;

// --- RE-EXPORTS (FACADE PATTERN) ---
// Lets the CLI do:
// `use snapguard_core::application::{run_maintenance, prune_snapshots};`
// without knowing the internal file layout.

pub use maintainer::{MaintenanceReport, run_maintenance};
pub use prune::{PruneReport, prune_snapshots};
