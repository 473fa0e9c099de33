//! Explosion animation.
//!
//! Pure animation entity: no type tag, no collision participation. The
//! sub-frame counter advances once per step and maps to the sprite frame at
//! three steps per frame, covering the 12 atlas frames over a 36-step life.

use crate::board::Board;
use crate::entity::{Entity, EntityId, Rect};
use crate::game::GameCtx;
use crate::resources::spritesheet::SpriteFrame;
use crate::surface::Surface;

const STEPS_PER_FRAME: u32 = 3;
const LIFETIME_STEPS: u32 = 36;

pub struct Explosion {
    sprite: SpriteFrame,
    pub x: f32,
    pub y: f32,
    pub frame: u32,
    subframe: u32,
}

impl Explosion {
    /// Spawn an explosion centered on the given point.
    pub fn new(ctx: &GameCtx, cx: f32, cy: f32) -> Self {
        let sprite = ctx.atlas.frame("explosion");
        Self {
            sprite,
            x: cx - sprite.w / 2.0,
            y: cy - sprite.h / 2.0,
            frame: 0,
            subframe: 0,
        }
    }
}

impl Entity for Explosion {
    fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.sprite.w, self.sprite.h)
    }

    fn step(&mut self, _dt: f32, board: &mut Board, me: EntityId) {
        self.frame = self.subframe / STEPS_PER_FRAME;
        self.subframe += 1;
        if self.subframe >= LIFETIME_STEPS {
            board.remove(me);
        }
    }

    fn draw(&self, surface: &mut dyn Surface) {
        surface.sprite(&self.sprite, self.x, self.y, self.frame);
    }
}
