//! Error taxonomy for the sync pipeline.
//!
//! Core operations fail with a typed [`SyncError`]; plain I/O and JSON
//! failures propagate as `anyhow` errors at the orchestrator boundary.

use thiserror::Error;

/// Errors produced by the rendering and patching pipeline.
///
/// Every variant is fatal to the run: there is no partial success and
/// the target file is only written after all patches succeed in memory.
#[derive(Debug, Error)]
pub enum SyncError {
    /// No candidate rake executable was found on the system.
    #[error("unable to find a rake executable to regenerate keymap.dtsi")]
    ToolNotFound,

    /// The external build command ran but exited with a failure status.
    #[error("failed to regenerate keymap.dtsi: {output}")]
    Execution {
        /// Captured diagnostic output (stderr, falling back to stdout).
        output: String,
    },

    /// A layer's key count does not match the physical layout.
    #[error("expected {expected} keys, found {found}")]
    Shape {
        /// Total key positions of the physical layout.
        expected: usize,
        /// Key count actually present in the layer.
        found: usize,
    },

    /// A required region was not found exactly once in the target document.
    #[error("expected exactly one match for {region} in the build keymap, found {count}")]
    Structure {
        /// Human-readable description of the region being located.
        region: String,
        /// Number of matches actually observed.
        count: usize,
    },
}
