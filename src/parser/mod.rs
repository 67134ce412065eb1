//! Parsing of the canonical keymap source.

pub mod keymap_json;

// Re-export parser entry points
pub use keymap_json::{load_layer_set, parse_keymap_json, KeymapJson};
