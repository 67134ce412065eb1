//! Sync orchestration.
//!
//! Threads the build keymap text through the patch pipeline: the fixed
//! behaviors region first, then every layer's bindings block in
//! canonical source order. The file on storage is rewritten at most
//! once, and only when running in write mode with actual changes.

use crate::config::SyncPaths;
use crate::parser;
use crate::patch::{self, PatchOutcome};
use crate::regen::FragmentSource;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// What a sync run found and did.
#[derive(Debug, Clone)]
pub struct SyncReport {
    /// Whether the patched document differs from the file on storage.
    pub changed: bool,
    /// Names of layers whose bindings content actually changed.
    pub changed_layers: Vec<String>,
    /// Whether the target file was rewritten.
    pub written: bool,
}

/// Runs a full sync against the given repository.
///
/// The fragment source is consulted first, so a failed regeneration
/// aborts the run before any text patching. Every error is fatal; the
/// target file is only written after all patches have succeeded in
/// memory.
pub fn run_sync(paths: &SyncPaths, source: &dyn FragmentSource, write: bool) -> Result<SyncReport> {
    let fragment = source.fragment()?;
    let layer_set = parser::load_layer_set(&paths.keymap_json)?;

    let original = fs::read_to_string(&paths.build_keymap).context(format!(
        "Failed to read build keymap: {}",
        paths.build_keymap.display()
    ))?;

    let mut document = patch::sync_custom_behaviors(&original, &fragment)?;

    let mut changed_layers = Vec::new();
    for layer in &layer_set {
        let (patched, outcome) = patch::sync_layer_bindings(&document, &layer.name, &layer.keys)?;
        document = patched;
        if outcome == PatchOutcome::Changed {
            changed_layers.push(layer.name.clone());
        }
    }

    let changed = document != original;
    let written = write && changed;
    if written {
        atomic_write(&paths.build_keymap, &document)?;
    }

    Ok(SyncReport {
        changed,
        changed_layers,
        written,
    })
}

/// Writes via a temp file + rename so the keymap is never left partial.
fn atomic_write(path: &Path, content: &str) -> Result<()> {
    let temp_path = path.with_extension("keymap.tmp");

    fs::write(&temp_path, content)
        .with_context(|| format!("Failed to write to temporary file: {}", temp_path.display()))?;

    fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to rename temporary file to: {}", path.display()))?;

    Ok(())
}
