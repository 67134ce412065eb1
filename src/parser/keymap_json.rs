//! Canonical keymap.json parser.
//!
//! The layout editor exports two positionally paired sequences:
//! `layer_names` and `layers`. Both are read once per run and treated
//! as immutable input.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::models::{KeyBinding, LayerSet};

/// Canonical keymap.json structure (the fields this tool consumes).
#[derive(Debug, Clone, Deserialize)]
pub struct KeymapJson {
    /// Ordered layer names.
    pub layer_names: Vec<String>,
    /// Ordered per-layer key lists, positionally paired with the names.
    pub layers: Vec<Vec<KeyBinding>>,
}

/// Parses a keymap.json file.
pub fn parse_keymap_json(path: &Path) -> Result<KeymapJson> {
    let content = fs::read_to_string(path)
        .context(format!("Failed to read keymap JSON: {}", path.display()))?;

    let keymap: KeymapJson = serde_json::from_str(&content)
        .context(format!("Failed to parse keymap JSON: {}", path.display()))?;

    Ok(keymap)
}

/// Loads a keymap.json file into a validated layer set.
pub fn load_layer_set(path: &Path) -> Result<LayerSet> {
    let keymap = parse_keymap_json(path)?;
    LayerSet::from_parts(keymap.layer_names, keymap.layers)
        .context(format!("Invalid keymap JSON: {}", path.display()))
}
