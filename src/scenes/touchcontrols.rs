//! On-screen control overlay.
//!
//! Draws translucent left/right/fire buttons along the bottom edge and
//! highlights the ones whose action is currently active. The overlay only
//! renders; mapping pointer contact inside the button zones onto the input
//! state is the input shim's job, so the same zones work for mouse and
//! touch alike.

use crate::game::{GameCtx, Scene};
use crate::surface::{Rgba, Surface};

const GUTTER: f32 = 10.0;
const BUTTON_GRAY: Rgba = Rgba::new(204, 204, 204, 255);
const ALPHA_IDLE: u8 = 153;
const ALPHA_HELD: u8 = 230;

pub struct TouchControls {
    ctx: GameCtx,
    /// One fifth of the playfield width; buttons are laid out on this grid.
    unit: f32,
}

impl TouchControls {
    pub fn new(ctx: &GameCtx) -> Self {
        Self {
            ctx: ctx.clone(),
            unit: ctx.width / 5.0,
        }
    }

    fn draw_button(&self, surface: &mut dyn Surface, x: f32, y: f32, label: &str, held: bool) {
        let block = self.unit - GUTTER;
        let alpha = if held { ALPHA_HELD } else { ALPHA_IDLE };
        surface.fill_rect(x, y, block, block, BUTTON_GRAY.with_alpha(alpha));
        surface.text_centered(
            label,
            x + block / 2.0,
            y + block / 4.0,
            block / 2.0,
            Rgba::WHITE,
        );
    }
}

impl Scene for TouchControls {
    fn step(&mut self, _dt: f32) {}

    fn draw(&self, surface: &mut dyn Surface) {
        let y = self.ctx.height - self.unit;
        let (left, right, fire) = {
            let input = self.ctx.input.borrow();
            (input.left.active, input.right.active, input.fire.active)
        };
        self.draw_button(surface, GUTTER, y, "<", left);
        self.draw_button(surface, self.unit + GUTTER, y, ">", right);
        self.draw_button(surface, 4.0 * self.unit, y, "*", fire);
    }
}
