//! Key binding data structures.
//!
//! A binding is a small recursive tree: a behavior name with ordered
//! nested parameters, bottoming out in bare scalars. The layout editor
//! JSON mixes object nodes and bare scalars freely in parameter
//! position, so deserialization is untagged.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Scalar payload of a binding node.
///
/// The editor JSON uses both strings (`"&kp"`, `"LEFT"`) and bare
/// integers (layer indexes, timeouts) in the same positions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    /// Textual value such as a behavior or keycode name.
    Text(String),
    /// Numeric value such as a layer index.
    Int(i64),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Text(text) => f.write_str(text),
            Scalar::Int(number) => write!(f, "{number}"),
        }
    }
}

impl PartialEq<&str> for Scalar {
    fn eq(&self, other: &&str) -> bool {
        matches!(self, Scalar::Text(text) if text == other)
    }
}

impl From<&str> for Scalar {
    fn from(text: &str) -> Self {
        Scalar::Text(text.to_string())
    }
}

/// One key's behavior, optionally parameterized by nested behaviors.
///
/// Exactly two shapes exist: a named node with ordered children, and a
/// bare leaf scalar. Parameters are read-only input; nothing in this
/// crate mutates a binding after deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KeyBinding {
    /// Named behavior with ordered nested parameters.
    Behavior {
        /// Behavior name (e.g. `"&kp"`, `"&magic"`, `"Custom"`).
        value: Scalar,
        /// Nested parameters, possibly empty.
        #[serde(default)]
        params: Vec<KeyBinding>,
    },
    /// Bare scalar parameter (keycode name, macro identifier, layer index).
    Leaf(Scalar),
}

impl KeyBinding {
    /// Creates a behavior node with the given name and parameters.
    #[must_use]
    pub fn behavior(value: impl Into<Scalar>, params: Vec<KeyBinding>) -> Self {
        Self::Behavior {
            value: value.into(),
            params,
        }
    }

    /// Creates a bare leaf binding.
    #[must_use]
    pub fn leaf(value: impl Into<Scalar>) -> Self {
        Self::Leaf(value.into())
    }

    /// The string form of this node's own value.
    #[must_use]
    pub fn value(&self) -> String {
        match self {
            Self::Behavior { value, .. } | Self::Leaf(value) => value.to_string(),
        }
    }

    /// The first nested parameter, if any.
    #[must_use]
    pub fn first_param(&self) -> Option<&KeyBinding> {
        match self {
            Self::Behavior { params, .. } => params.first(),
            Self::Leaf(_) => None,
        }
    }
}

impl From<&str> for KeyBinding {
    fn from(value: &str) -> Self {
        Self::Leaf(Scalar::from(value))
    }
}
