//! Layer binding block rendering.

use crate::error::SyncError;
use crate::models::KeyBinding;
use crate::render::key_to_token;

/// Physical layout row widths, in editor JSON key ordering.
pub const ROW_WIDTHS: [usize; 6] = [10, 12, 12, 12, 18, 16];

/// Indentation of each rendered row, matching the nesting depth of a
/// bindings block in the build keymap.
const ROW_INDENT: &str = "            ";

/// Renders a layer's keys as the multi-row text of a bindings block.
///
/// Tokens are partitioned into six consecutive rows per [`ROW_WIDTHS`],
/// joined by single spaces within a row and newlines between rows, with
/// no trailing newline. Identical input yields byte-identical output.
///
/// # Errors
///
/// Returns [`SyncError::Shape`] when the key count does not match the
/// physical layout; a mismatch is never truncated or padded.
pub fn render_bindings(keys: &[KeyBinding]) -> Result<String, SyncError> {
    let expected: usize = ROW_WIDTHS.iter().sum();
    if keys.len() != expected {
        return Err(SyncError::Shape {
            expected,
            found: keys.len(),
        });
    }

    let tokens: Vec<String> = keys.iter().map(key_to_token).collect();

    let mut rows = Vec::with_capacity(ROW_WIDTHS.len());
    let mut start = 0;
    for width in ROW_WIDTHS {
        let row = tokens[start..start + width].join(" ");
        rows.push(format!("{ROW_INDENT}{row}"));
        start += width;
    }

    Ok(rows.join("\n"))
}
