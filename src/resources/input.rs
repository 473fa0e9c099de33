//! Per-frame input resource.
//!
//! Captures the boolean action state the game cares about and exposes it to
//! scenes and entities through the shared context. Arrow keys steer, space
//! fires, escape backs out. The input shim refreshes the state once per
//! frame; entities read it as plain sampled flags (the ship additionally
//! clears `fire.active` when it launches a volley, and the shim re-asserts
//! it while the key is physically held).

use raylib::prelude::*;

#[derive(Debug, Clone, Copy)]
/// Boolean action state with an associated keyboard binding.
pub struct BoolState {
    /// Whether the action is currently active this frame.
    pub active: bool,
    /// Whether the key was just pressed this frame.
    pub just_pressed: bool,
    /// Whether the key was just released this frame.
    pub just_released: bool,

    /// The key bound to this action.
    pub key_binding: KeyboardKey,
}

impl Default for BoolState {
    fn default() -> Self {
        Self {
            active: false,
            just_pressed: false,
            just_released: false,
            key_binding: KeyboardKey::KEY_NULL,
        }
    }
}

impl BoolState {
    fn bound_to(key: KeyboardKey) -> Self {
        Self {
            key_binding: key,
            ..Self::default()
        }
    }
}

/// Resource capturing the per-frame action state relevant to gameplay.
#[derive(Debug, Clone)]
pub struct InputState {
    pub left: BoolState,
    pub right: BoolState,
    pub up: BoolState,
    pub down: BoolState,
    pub fire: BoolState,
    pub back: BoolState,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            left: BoolState::bound_to(KeyboardKey::KEY_LEFT),
            right: BoolState::bound_to(KeyboardKey::KEY_RIGHT),
            up: BoolState::bound_to(KeyboardKey::KEY_UP),
            down: BoolState::bound_to(KeyboardKey::KEY_DOWN),
            fire: BoolState::bound_to(KeyboardKey::KEY_SPACE),
            back: BoolState::bound_to(KeyboardKey::KEY_ESCAPE),
        }
    }
}
