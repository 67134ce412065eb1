//! Flattening of nested key bindings into behavior tokens.

use crate::models::KeyBinding;

/// Keycode behavior marker. Appears both as an outer behavior and as an
/// inner wrapper around plain keycodes.
const KP: &str = "&kp";

/// Behavior literal for user-defined macros; the macro identifier alone
/// is the rendered token.
const CUSTOM: &str = "Custom";

/// Resolves a nested parameter into its flat text form.
///
/// An inner `&kp` node contributes only its resolved child, so a keycode
/// wrapped inside another behavior never doubles the `&kp` marker.
fn resolve_nested(node: Option<&KeyBinding>) -> Option<String> {
    let node = node?;
    let (value, params) = match node {
        KeyBinding::Leaf(scalar) => return Some(scalar.to_string()),
        KeyBinding::Behavior { value, params } => (value, params),
    };

    let child = resolve_nested(params.first());
    if *value == KP {
        return child;
    }

    let value = value.to_string();
    match child {
        Some(child) if !child.is_empty() => Some(format!("{value}({child})")),
        _ => Some(value),
    }
}

/// Renders one key binding as the flat token used in a bindings block.
#[must_use]
pub fn key_to_token(key: &KeyBinding) -> String {
    let behavior = key.value();
    let Some(first) = key.first_param() else {
        return behavior;
    };

    if behavior == CUSTOM {
        return first.value();
    }

    match resolve_nested(Some(first)) {
        Some(nested) if !nested.is_empty() => format!("{behavior} {nested}"),
        _ => behavior,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kp(code: &str) -> KeyBinding {
        KeyBinding::behavior("&kp", vec![KeyBinding::behavior(code, vec![])])
    }

    #[test]
    fn test_plain_keycode() {
        assert_eq!(key_to_token(&kp("A")), "&kp A");
    }

    #[test]
    fn test_bare_behavior_without_params() {
        let key = KeyBinding::behavior("&trans", vec![]);
        assert_eq!(key_to_token(&key), "&trans");
    }

    #[test]
    fn test_modifier_wrapping_keycode() {
        // &kp LC(A): the inner &kp must not be duplicated.
        let key = KeyBinding::behavior(
            "&kp",
            vec![KeyBinding::behavior(
                "LC",
                vec![KeyBinding::behavior("A", vec![])],
            )],
        );
        assert_eq!(key_to_token(&key), "&kp LC(A)");
    }

    #[test]
    fn test_inner_kp_wrapper_is_elided() {
        let key = KeyBinding::behavior("&kp", vec![kp("LEFT")]);
        assert_eq!(key_to_token(&key), "&kp LEFT");
    }

    #[test]
    fn test_nested_modifiers() {
        let key = KeyBinding::behavior(
            "&kp",
            vec![KeyBinding::behavior(
                "LC",
                vec![KeyBinding::behavior(
                    "LS",
                    vec![KeyBinding::behavior("TAB", vec![])],
                )],
            )],
        );
        assert_eq!(key_to_token(&key), "&kp LC(LS(TAB))");
    }

    #[test]
    fn test_custom_macro_renders_identifier_alone() {
        let key = KeyBinding::behavior(
            "Custom",
            vec![KeyBinding::behavior("&my_macro", vec![])],
        );
        assert_eq!(key_to_token(&key), "&my_macro");
    }

    #[test]
    fn test_custom_macro_with_leaf_param() {
        let key = KeyBinding::behavior("Custom", vec![KeyBinding::from("&email_macro")]);
        assert_eq!(key_to_token(&key), "&email_macro");
    }

    #[test]
    fn test_layer_switch_with_numeric_param() {
        let key: KeyBinding =
            serde_json::from_str(r#"{"value": "&mo", "params": [{"value": 2, "params": []}]}"#)
                .unwrap();
        assert_eq!(key_to_token(&key), "&mo 2");
    }

    #[test]
    fn test_behavior_with_two_params_uses_first() {
        // Hold-tap style entries resolve only their first parameter here;
        // the editor emits one node per rendered token.
        let key = KeyBinding::behavior(
            "&magic",
            vec![
                KeyBinding::behavior("LAYER_Magic", vec![]),
                KeyBinding::Leaf(crate::models::Scalar::Int(0)),
            ],
        );
        assert_eq!(key_to_token(&key), "&magic LAYER_Magic");
    }

    #[test]
    fn test_leaf_key_renders_verbatim() {
        assert_eq!(key_to_token(&KeyBinding::from("&none")), "&none");
    }

    #[test]
    fn test_kp_without_params_stays_bare() {
        let key = KeyBinding::behavior("&kp", vec![]);
        assert_eq!(key_to_token(&key), "&kp");
    }

    #[test]
    fn test_kp_with_empty_nested_value() {
        // An empty nested value collapses to the bare behavior name.
        let key = KeyBinding::behavior("&kp", vec![KeyBinding::from("")]);
        assert_eq!(key_to_token(&key), "&kp");
    }
}
