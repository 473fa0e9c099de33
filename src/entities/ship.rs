//! The player ship.
//!
//! Moves along exactly one axis per tick from held directional input
//! (priority left, right, up, down), clamped to the playfield. Holding fire
//! launches a two-missile volley once the reload timer has run down; the
//! fire flag is consumed so one press is one volley, and the input shim
//! re-asserts the flag while the key stays held.

use crate::board::Board;
use crate::entities::missile::PlayerMissile;
use crate::entity::{Entity, EntityId, EntityKind, Rect};
use crate::events::GameEvent;
use crate::game::GameCtx;
use crate::resources::spritesheet::SpriteFrame;
use crate::surface::Surface;

const MAX_VEL: f32 = 100.0;
const RELOAD_TIME: f32 = 0.25;

pub struct PlayerShip {
    sprite: SpriteFrame,
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub max_vel: f32,
    pub reload_time: f32,
    /// Time left before the next volley. Starts charged so the fire press
    /// that left the title screen does not also launch missiles.
    pub reload: f32,
}

impl PlayerShip {
    pub fn new(ctx: &GameCtx) -> Self {
        let sprite = ctx.atlas.frame("ship");
        Self {
            sprite,
            x: ctx.width / 2.0 - sprite.w / 2.0,
            y: ctx.height - 10.0 - sprite.h,
            vx: 0.0,
            vy: 0.0,
            max_vel: MAX_VEL,
            reload_time: RELOAD_TIME,
            reload: RELOAD_TIME,
        }
    }
}

impl Entity for PlayerShip {
    fn kind(&self) -> Option<EntityKind> {
        Some(EntityKind::Player)
    }

    fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.sprite.w, self.sprite.h)
    }

    fn step(&mut self, dt: f32, board: &mut Board, _me: EntityId) {
        let fire_held = {
            let input = board.ctx().input.borrow();
            self.vx = 0.0;
            self.vy = 0.0;
            if input.left.active {
                self.vx = -self.max_vel;
            } else if input.right.active {
                self.vx = self.max_vel;
            } else if input.up.active {
                self.vy = -self.max_vel;
            } else if input.down.active {
                self.vy = self.max_vel;
            }
            input.fire.active
        };

        // clamp position only; the velocity stays as reported
        self.x += self.vx * dt;
        self.x = self.x.clamp(0.0, board.width - self.sprite.w);
        self.y += self.vy * dt;
        self.y = self.y.clamp(0.0, board.height - self.sprite.h);

        self.reload -= dt;
        if fire_held && self.reload < 0.0 {
            board.ctx().input.borrow_mut().fire.active = false;
            self.reload = self.reload_time;
            let mid = self.y + self.sprite.h / 2.0;
            let left = PlayerMissile::new(board.ctx(), self.x, mid);
            let right = PlayerMissile::new(board.ctx(), self.x + self.sprite.w, mid);
            board.add(left);
            board.add(right);
        }
    }

    fn draw(&self, surface: &mut dyn Surface) {
        surface.sprite(&self.sprite, self.x, self.y, 0);
    }

    /// The ship has no health pool: any hit is fatal. The first removal
    /// posts the lose-game event.
    fn hit(&mut self, _damage: i32, board: &mut Board, me: EntityId) {
        if !board.remove(me) {
            let _ = board.ctx().events.send(GameEvent::Lose);
        }
    }
}
