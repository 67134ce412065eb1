//! Shared test fixtures for end-to-end sync tests.
#![allow(dead_code)] // Not every test crate uses every fixture

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use zmksync::config::SyncPaths;
use zmksync::models::KeyBinding;
use zmksync::render::render_bindings;

/// A `&kp <code>` binding as the layout editor exports it.
pub fn kp(code: &str) -> KeyBinding {
    KeyBinding::behavior("&kp", vec![KeyBinding::behavior(code, vec![])])
}

/// 80 identical `&kp <code>` bindings, one full layer.
pub fn layer_keys(code: &str) -> Vec<KeyBinding> {
    (0..80).map(|_| kp(code)).collect()
}

/// A full layer with one binding substituted at position 0.
pub fn layer_keys_with_first(code: &str, first: KeyBinding) -> Vec<KeyBinding> {
    let mut keys = layer_keys(code);
    keys[0] = first;
    keys
}

/// Canonical keymap.json text for the given named layers.
pub fn keymap_json_text(layers: &[(&str, Vec<KeyBinding>)]) -> String {
    let names: Vec<&str> = layers.iter().map(|(name, _)| *name).collect();
    let key_lists: Vec<&Vec<KeyBinding>> = layers.iter().map(|(_, keys)| keys).collect();

    serde_json::json!({
        "keyboard": "glove80",
        "layer_names": names,
        "layers": key_lists,
    })
    .to_string()
}

/// The bindings body a layer renders to, for building in-sync documents.
pub fn rendered_body(keys: &[KeyBinding]) -> String {
    render_bindings(keys).expect("fixture layers must have 80 keys")
}

/// The Custom Defined Behaviors region in its canonical patched form.
pub fn behaviors_region(fragment: &str) -> String {
    format!(
        "/* Custom Defined Behaviors */\n/ {{\n{}\n\n}};\n\n/* Generated input processors */",
        fragment.trim_end()
    )
}

/// A realistic build keymap containing the behaviors region and one
/// bindings block per `(name, body)` pair.
pub fn build_keymap_text(fragment: &str, layers: &[(&str, &str)]) -> String {
    let mut out = String::new();
    out.push_str("/* Glove80 build keymap (generated) */\n\n");
    out.push_str("#include <behaviors.dtsi>\n#include <dt-bindings/zmk/keys.h>\n\n");
    out.push_str(&behaviors_region(fragment));
    out.push_str("\n\n/ {\n    keymap {\n        compatible = \"zmk,keymap\";\n\n");

    for (name, body) in layers {
        out.push_str(&format!(
            "        layer_{name} {{\n            bindings = <\n{body}\n            >;\n        }};\n\n"
        ));
    }

    out.push_str("    };\n};\n");
    out
}

/// A temporary keymap repository with the three sync files in place.
pub struct TestRepo {
    /// Resolved file locations inside the temp directory.
    pub paths: SyncPaths,
    /// Held so the directory outlives the test body.
    pub dir: TempDir,
}

/// Creates a temp repository from the given file contents.
pub fn test_repo(keymap_json: &str, dtsi: &str, build_keymap: &str) -> TestRepo {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let paths = SyncPaths::for_root(dir.path());

    let config_dir: PathBuf = paths.build_keymap.parent().unwrap().to_path_buf();
    fs::create_dir_all(config_dir).expect("Failed to create config dir");

    fs::write(&paths.keymap_json, keymap_json).expect("Failed to write keymap.json");
    fs::write(&paths.keymap_dtsi, dtsi).expect("Failed to write keymap.dtsi");
    fs::write(&paths.build_keymap, build_keymap).expect("Failed to write build keymap");

    TestRepo { paths, dir }
}
