//! Blueprint-driven enemy.
//!
//! Velocity on each axis is `base + amp * sin(freq * t + phase)` with `t`
//! accumulating simulation time, which is what bends the flight paths into
//! arcs, waves, and circles depending on the blueprint's coefficients.

use crate::board::Board;
use crate::entities::explosion::Explosion;
use crate::entity::{Entity, EntityId, EntityKind, Rect};
use crate::game::GameCtx;
use crate::resources::blueprints::{EnemyBlueprint, SpawnPos};
use crate::resources::spritesheet::SpriteFrame;
use crate::surface::Surface;

pub struct Enemy {
    sprite: SpriteFrame,
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub health: i32,
    pub damage: i32,
    t: f32,
    a: f32,
    b: f32,
    c: f32,
    d: f32,
    e: f32,
    f: f32,
    g: f32,
    h: f32,
}

impl Enemy {
    /// Build an enemy from its blueprint, applying the spawn record's
    /// position override on top of the blueprint's starting position.
    pub fn from_blueprint(ctx: &GameCtx, blueprint: &EnemyBlueprint, pos: Option<&SpawnPos>) -> Self {
        let sprite = ctx.atlas.frame(&blueprint.sprite);
        let mut x = blueprint.x;
        let mut y = blueprint.y;
        if let Some(pos) = pos {
            if let Some(ox) = pos.x {
                x = ox;
            }
            if let Some(oy) = pos.y {
                y = oy;
            }
        }
        Self {
            sprite,
            x,
            y,
            vx: 0.0,
            vy: 0.0,
            health: blueprint.health,
            damage: blueprint.damage,
            t: 0.0,
            a: blueprint.a,
            b: blueprint.b,
            c: blueprint.c,
            d: blueprint.d,
            e: blueprint.e,
            f: blueprint.f,
            g: blueprint.g,
            h: blueprint.h,
        }
    }
}

impl Entity for Enemy {
    fn kind(&self) -> Option<EntityKind> {
        Some(EntityKind::Enemy)
    }

    fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.sprite.w, self.sprite.h)
    }

    fn step(&mut self, dt: f32, board: &mut Board, me: EntityId) {
        self.t += dt;

        // ramming the player costs the enemy its own life too
        if let Some(player) = board.collide(me, &self.rect(), Some(EntityKind::Player)) {
            player.cell.borrow_mut().hit(self.damage, board, player.id);
            board.remove(me);
        }

        self.vx = self.a + self.b * (self.c * self.t + self.d).sin();
        self.vy = self.e + self.f * (self.g * self.t + self.h).sin();
        self.x += self.vx * dt;
        self.y += self.vy * dt;

        if self.y > board.height || self.x < -self.sprite.w || self.x > board.width {
            board.remove(me);
        }
    }

    fn draw(&self, surface: &mut dyn Surface) {
        surface.sprite(&self.sprite, self.x, self.y, 0);
    }

    fn hit(&mut self, damage: i32, board: &mut Board, me: EntityId) {
        self.health -= damage;
        if self.health <= 0 && !board.remove(me) {
            // first death only: one explosion, centered on the wreck
            let boom = Explosion::new(
                board.ctx(),
                self.x + self.sprite.w / 2.0,
                self.y + self.sprite.h / 2.0,
            );
            board.add(boom);
        }
    }
}
