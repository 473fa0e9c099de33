//! Title screen.

use crate::game::{GameCtx, Scene};
use crate::surface::{Rgba, Surface};

const TITLE_SIZE: f32 = 40.0;
const SUBTITLE_SIZE: f32 = 20.0;

/// Centered title/subtitle text; firing on it invokes the callback (which
/// typically posts a game-flow event that replaces this scene).
pub struct TitleScreen {
    ctx: GameCtx,
    title: String,
    subtitle: String,
    on_fire: Box<dyn FnMut()>,
}

impl TitleScreen {
    pub fn new(
        ctx: &GameCtx,
        title: impl Into<String>,
        subtitle: impl Into<String>,
        on_fire: Box<dyn FnMut()>,
    ) -> Self {
        Self {
            ctx: ctx.clone(),
            title: title.into(),
            subtitle: subtitle.into(),
            on_fire,
        }
    }
}

impl Scene for TitleScreen {
    fn step(&mut self, _dt: f32) {
        let fire = self.ctx.input.borrow().fire.active;
        if fire {
            (self.on_fire)();
        }
    }

    fn draw(&self, surface: &mut dyn Surface) {
        let cx = self.ctx.width / 2.0;
        let cy = self.ctx.height / 2.0;
        surface.text_centered(&self.title, cx, cy - TITLE_SIZE, TITLE_SIZE, Rgba::WHITE);
        surface.text_centered(&self.subtitle, cx, cy + SUBTITLE_SIZE, SUBTITLE_SIZE, Rgba::WHITE);
    }
}
