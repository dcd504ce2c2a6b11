// mousey/src/input.rs
use educe_core::input::InputState;

/// Game actions a host maps physical keys onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Left,
    Right,
    Up,
    Down,
    Jump,
    Action,
}

/// Default key-name bindings, WASD plus arrows.
pub const KEY_BINDINGS: &[(&str, Button)] = &[
    ("KeyA", Button::Left),
    ("ArrowLeft", Button::Left),
    ("KeyD", Button::Right),
    ("ArrowRight", Button::Right),
    ("KeyW", Button::Up),
    ("ArrowUp", Button::Up),
    ("KeyS", Button::Down),
    ("ArrowDown", Button::Down),
    ("Space", Button::Jump),
    ("KeyE", Button::Action),
];

/// Resolve a key name through the binding table.
pub fn button_for_key(key: &str) -> Option<Button> {
    KEY_BINDINGS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, button)| *button)
}

/// Apply a button edge to the engine's input state.
pub fn apply_button(input: &mut InputState, button: Button, down: bool) {
    match button {
        Button::Left => input.left = down,
        Button::Right => input.right = down,
        Button::Up => input.up = down,
        Button::Down => input.down = down,
        Button::Jump => input.jump = down,
        Button::Action => input.action = down,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_key_clusters_reach_the_same_buttons() {
        assert_eq!(button_for_key("KeyA"), Some(Button::Left));
        assert_eq!(button_for_key("ArrowLeft"), Some(Button::Left));
        assert_eq!(button_for_key("Escape"), None);
    }

    #[test]
    fn buttons_drive_the_input_state() {
        let mut input = InputState::default();
        apply_button(&mut input, Button::Jump, true);
        assert!(input.jump);
        apply_button(&mut input, Button::Jump, false);
        assert!(!input.jump);
    }
}
