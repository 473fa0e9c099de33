//! Player missile.

use crate::board::Board;
use crate::entity::{Entity, EntityId, EntityKind, Rect};
use crate::game::GameCtx;
use crate::resources::spritesheet::SpriteFrame;
use crate::surface::Surface;

const MISSILE_VY: f32 = -700.0;
const MISSILE_DAMAGE: i32 = 10;

pub struct PlayerMissile {
    sprite: SpriteFrame,
    pub x: f32,
    pub y: f32,
    pub vy: f32,
    pub damage: i32,
}

impl PlayerMissile {
    /// Spawn a missile centered on `x` with its bottom edge at `y`.
    pub fn new(ctx: &GameCtx, x: f32, y: f32) -> Self {
        let sprite = ctx.atlas.frame("missile");
        Self {
            sprite,
            x: x - sprite.w / 2.0,
            y: y - sprite.h,
            vy: MISSILE_VY,
            damage: MISSILE_DAMAGE,
        }
    }
}

impl Entity for PlayerMissile {
    fn kind(&self) -> Option<EntityKind> {
        Some(EntityKind::PlayerMissile)
    }

    fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.sprite.w, self.sprite.h)
    }

    fn step(&mut self, dt: f32, board: &mut Board, me: EntityId) {
        self.y += self.vy * dt;
        // at most one collision resolved per step, first match wins
        if let Some(target) = board.collide(me, &self.rect(), Some(EntityKind::Enemy)) {
            target.cell.borrow_mut().hit(self.damage, board, target.id);
            board.remove(me);
        } else if self.y < -self.sprite.h {
            board.remove(me);
        }
    }

    fn draw(&self, surface: &mut dyn Surface) {
        surface.sprite(&self.sprite, self.x, self.y, 0);
    }
}
