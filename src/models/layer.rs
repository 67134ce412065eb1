//! Layer and layer-set data structures.

use crate::models::KeyBinding;
use anyhow::Result;

/// One named layer of the keyboard: an ordered list of key bindings.
///
/// The key sequence is never permuted or resized by this crate; row
/// boundaries are a rendering concern, not part of the stored model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layer {
    /// Layer name as it appears in `layer_names` and in the build keymap.
    pub name: String,
    /// Key bindings in editor JSON ordering.
    pub keys: Vec<KeyBinding>,
}

/// All layers of a keymap, in canonical source order.
#[derive(Debug, Clone, Default)]
pub struct LayerSet {
    layers: Vec<Layer>,
}

impl LayerSet {
    /// Builds a layer set by pairing the two positional sequences of the
    /// canonical source.
    ///
    /// # Errors
    ///
    /// Returns an error when the sequences differ in length or a layer
    /// name appears twice; each layer is patched by name, so both would
    /// silently drop data.
    pub fn from_parts(names: Vec<String>, key_lists: Vec<Vec<KeyBinding>>) -> Result<Self> {
        if names.len() != key_lists.len() {
            anyhow::bail!(
                "keymap lists {} layer names but {} layers",
                names.len(),
                key_lists.len()
            );
        }

        for (index, name) in names.iter().enumerate() {
            if names[..index].contains(name) {
                anyhow::bail!("duplicate layer name '{name}' in keymap");
            }
        }

        let layers = names
            .into_iter()
            .zip(key_lists)
            .map(|(name, keys)| Layer { name, keys })
            .collect();

        Ok(Self { layers })
    }

    /// Iterates layers in canonical source order.
    pub fn iter(&self) -> impl Iterator<Item = &Layer> {
        self.layers.iter()
    }

    /// Number of layers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Whether the set contains no layers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

impl<'a> IntoIterator for &'a LayerSet {
    type Item = &'a Layer;
    type IntoIter = std::slice::Iter<'a, Layer>;

    fn into_iter(self) -> Self::IntoIter {
        self.layers.iter()
    }
}
