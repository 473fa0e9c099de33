//! Input sampling.
//!
//! [`update_input_state`] reads hardware input from Raylib once per frame and
//! writes the results into [`InputState`](crate::resources::input::InputState).
//! Keyboard state maps straight through the per-action key bindings; pointer
//! contact maps through the same screen zones the on-screen controls draw
//! (left fifth = left, second fifth = right, last fifth = fire), so the
//! overlay works with a mouse or a touch screen exposing itself as one.

use raylib::prelude::*;

use crate::resources::input::{BoolState, InputState};

/// Poll Raylib and refresh the shared input state.
///
/// `width` is the playfield width the pointer zones are laid out on.
pub fn update_input_state(rl: &RaylibHandle, input: &mut InputState, width: f32) {
    let sample = |state: &mut BoolState| {
        state.active = rl.is_key_down(state.key_binding);
        state.just_pressed = rl.is_key_pressed(state.key_binding);
        state.just_released = rl.is_key_released(state.key_binding);
    };

    sample(&mut input.left);
    sample(&mut input.right);
    sample(&mut input.up);
    sample(&mut input.down);
    sample(&mut input.fire);
    sample(&mut input.back);

    // Pointer zones. Steering follows the pointer while held; fire only
    // triggers on the initial press so the ship's consume-and-recharge
    // logic behaves the same as with the keyboard.
    let unit = width / 5.0;
    if rl.is_mouse_button_down(MouseButton::MOUSE_BUTTON_LEFT) {
        let pos = rl.get_mouse_position();
        if pos.x < unit {
            input.left.active = true;
        } else if pos.x < 2.0 * unit {
            input.right.active = true;
        }
    }
    if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
        let pos = rl.get_mouse_position();
        if pos.x > 4.0 * unit {
            input.fire.active = true;
            input.fire.just_pressed = true;
        }
    }
}
