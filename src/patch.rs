//! Structural patching of the build keymap.
//!
//! Both entry points share one shape: locate a marker-delimited region
//! in the document, compare, and splice a replacement over exactly the
//! matched span. Everything outside the matched span is left untouched.

use crate::error::SyncError;
use crate::models::KeyBinding;
use crate::render::render_bindings;
use regex::Regex;

/// Whether a located region's content actually changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOutcome {
    /// Region found, content already equivalent.
    Unchanged,
    /// Region found and replaced.
    Changed,
}

/// Replaces the Custom Defined Behaviors region with a fresh fragment.
///
/// The region spans from the `/* Custom Defined Behaviors */` marker
/// through the `/* Generated input processors */` marker. The fragment
/// is spliced in verbatim (trailing whitespace stripped); no change
/// detection is attempted because the fragment is regenerated on every
/// run.
///
/// # Errors
///
/// Returns [`SyncError::Structure`] unless the region matches exactly
/// once.
pub fn sync_custom_behaviors(document: &str, fragment: &str) -> Result<String, SyncError> {
    let pattern = Regex::new(
        r"(?s)/\* Custom Defined Behaviors \*/\n/ \{\n.*?\n/\* Generated input processors \*/",
    )
    .unwrap();

    let matches: Vec<_> = pattern.find_iter(document).collect();
    if matches.len() != 1 {
        return Err(SyncError::Structure {
            region: "the Custom Defined Behaviors section".to_string(),
            count: matches.len(),
        });
    }

    // The fragment opens a `/ {` devicetree node it never closes; the
    // build keymap keeps the balancing `};` just before the close marker.
    let replacement = format!(
        "/* Custom Defined Behaviors */\n/ {{\n{}\n\n}};\n\n/* Generated input processors */",
        fragment.trim_end()
    );

    let span = matches[0];
    Ok(format!(
        "{}{}{}",
        &document[..span.start()],
        replacement,
        &document[span.end()..]
    ))
}

/// Patches one layer's bindings block if its content differs.
///
/// The block is anchored by the layer name:
/// `layer_<name> { bindings = <` ... `>; };`. The existing body and the
/// freshly rendered block are compared with all whitespace runs
/// collapsed, so indentation or line-wrapping differences alone do not
/// count as a change. On change, only the body span between the opening
/// and closing sequences is replaced.
///
/// # Errors
///
/// Returns [`SyncError::Structure`] unless the layer's block matches
/// exactly once, and propagates rendering failures.
pub fn sync_layer_bindings(
    document: &str,
    layer_name: &str,
    keys: &[KeyBinding],
) -> Result<(String, PatchOutcome), SyncError> {
    let block = render_bindings(keys)?;

    let pattern = Regex::new(&format!(
        r"(?s)(layer_{}\s*\{{\s*bindings\s*=\s*<\n)(.*?)(\n\s*>;\n\s*\}};)",
        regex::escape(layer_name)
    ))
    .unwrap();

    let matches: Vec<_> = pattern.captures_iter(document).collect();
    if matches.len() != 1 {
        return Err(SyncError::Structure {
            region: format!("the bindings block of layer '{layer_name}'"),
            count: matches.len(),
        });
    }

    let body = matches[0].get(2).unwrap();
    if normalize_whitespace(body.as_str()) == normalize_whitespace(&block) {
        return Ok((document.to_string(), PatchOutcome::Unchanged));
    }

    let patched = format!(
        "{}{}{}",
        &document[..body.start()],
        block,
        &document[body.end()..]
    );
    Ok((patched, PatchOutcome::Changed))
}

/// Collapses every whitespace run to a single space for comparison.
fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
