//! File locations within a keymap repository.
//!
//! All paths are derived once from an explicit repository root and passed
//! into the orchestrator, keeping the renderer and patcher testable
//! without filesystem access.

use std::path::PathBuf;

/// Resolved locations of the three files a sync run touches.
#[derive(Debug, Clone)]
pub struct SyncPaths {
    /// Repository root; rake runs here.
    pub root: PathBuf,
    /// Canonical layer description exported by the layout editor.
    pub keymap_json: PathBuf,
    /// Generated behavior-definitions fragment.
    pub keymap_dtsi: PathBuf,
    /// Build-facing keymap patched in place.
    pub build_keymap: PathBuf,
}

impl SyncPaths {
    /// Resolves the standard file layout under the given repository root.
    #[must_use]
    pub fn for_root(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            keymap_json: root.join("keymap.json"),
            keymap_dtsi: root.join("keymap.dtsi"),
            build_keymap: root.join("config").join("glove80.keymap"),
            root,
        }
    }

    /// The build keymap path relative to the root, for user-facing messages.
    #[must_use]
    pub fn build_keymap_display(&self) -> String {
        self.build_keymap
            .strip_prefix(&self.root)
            .unwrap_or(&self.build_keymap)
            .display()
            .to_string()
    }
}
