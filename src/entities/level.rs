//! Level director.
//!
//! An invisible board member that walks a spawn timeline and drops enemies
//! onto the board as their windows open. The timeline is cloned at
//! construction so the source level data is never mutated. Once every record
//! has been consumed and no enemies remain alive, the completion callback
//! fires exactly once.

use std::rc::Rc;

use log::debug;

use crate::board::Board;
use crate::entities::enemy::Enemy;
use crate::entity::{Entity, EntityId, EntityKind, Rect};
use crate::resources::blueprints::{Blueprints, SpawnRecord};
use crate::surface::Surface;

/// How far ahead of the clock the scan looks, in milliseconds. Lets
/// near-simultaneous tracks fire together without walking the whole
/// timeline every tick.
const LOOKAHEAD_MS: f32 = 2000.0;

pub struct Level {
    timeline: Vec<SpawnRecord>,
    blueprints: Rc<Blueprints>,
    /// Timeline clock in milliseconds; the simulation itself runs in seconds.
    t_ms: f32,
    done: bool,
    on_complete: Box<dyn FnMut()>,
}

impl Level {
    /// Build a director over a private copy of `records`.
    pub fn new(
        records: &[SpawnRecord],
        blueprints: Rc<Blueprints>,
        on_complete: Box<dyn FnMut()>,
    ) -> Self {
        Self {
            timeline: records.to_vec(),
            blueprints,
            t_ms: 0.0,
            done: false,
            on_complete,
        }
    }

    /// Spawn records not yet consumed.
    pub fn remaining(&self) -> usize {
        self.timeline.len()
    }
}

impl Entity for Level {
    /// Zero-area box keeps the director out of collision queries.
    fn rect(&self) -> Rect {
        Rect::default()
    }

    fn step(&mut self, dt: f32, board: &mut Board, _me: EntityId) {
        self.t_ms += dt * 1000.0;

        let mut expired: Vec<usize> = Vec::new();
        let mut idx = 0;
        while idx < self.timeline.len() {
            if self.timeline[idx].start >= self.t_ms + LOOKAHEAD_MS {
                break;
            }
            if self.t_ms > self.timeline[idx].end {
                expired.push(idx);
            } else if self.timeline[idx].start < self.t_ms {
                // one spawn per record per tick; the gap advances the window
                let record = &self.timeline[idx];
                debug!("spawning '{}' at t={}ms", record.kind, self.t_ms);
                let blueprint = self.blueprints.blueprint(&record.kind);
                let enemy = Enemy::from_blueprint(board.ctx(), blueprint, record.pos.as_ref());
                board.add(enemy);
                let record = &mut self.timeline[idx];
                record.start += record.gap;
            }
            idx += 1;
        }

        for idx in expired.iter().rev() {
            self.timeline.remove(*idx);
        }

        if !self.done && self.timeline.is_empty() && board.count(EntityKind::Enemy) == 0 {
            self.done = true;
            (self.on_complete)();
        }
    }

    fn draw(&self, _surface: &mut dyn Surface) {}
}
