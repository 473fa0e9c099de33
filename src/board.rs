//! The board: authoritative container for one simulation context.
//!
//! A board owns its entities, preserves insertion order for deterministic
//! iteration, keeps per-kind live counts, and resolves collision queries.
//! Removal is two-phase: `remove` only marks an id during the current step,
//! and marked entities are deleted after every entity has had its turn. This
//! is what keeps the live sequence stable while it is being iterated.

use std::cell::RefCell;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::entity::{Entity, EntityId, EntityKind, Rect};
use crate::game::{GameCtx, Scene};
use crate::surface::Surface;

/// Shared cell holding a live entity. Cells are reference-counted so a
/// collision query can hand out a sibling while that sibling's board slot
/// stays in place.
pub type EntityCell = Rc<RefCell<dyn Entity>>;

/// A live entity together with the id the board assigned to it.
#[derive(Clone)]
pub struct EntityHandle {
    pub id: EntityId,
    pub cell: EntityCell,
}

pub struct Board {
    pub width: f32,
    pub height: f32,
    ctx: GameCtx,
    entities: Vec<EntityHandle>,
    counts: FxHashMap<EntityKind, u32>,
    pending: Vec<EntityId>,
    next_id: u64,
}

impl Board {
    /// Create an empty board spanning the context's playfield.
    pub fn new(ctx: GameCtx) -> Self {
        Self {
            width: ctx.width,
            height: ctx.height,
            ctx,
            entities: Vec::new(),
            counts: FxHashMap::default(),
            pending: Vec::new(),
            next_id: 0,
        }
    }

    /// Shared game context (input, atlas, playfield, event bus).
    pub fn ctx(&self) -> &GameCtx {
        &self.ctx
    }

    /// Insert an entity, assigning its id and bumping the per-kind count.
    /// Returns the id and a typed handle to the inserted entity.
    pub fn add<E: Entity + 'static>(&mut self, entity: E) -> (EntityId, Rc<RefCell<E>>) {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        if let Some(kind) = entity.kind() {
            *self.counts.entry(kind).or_insert(0) += 1;
        }
        let cell = Rc::new(RefCell::new(entity));
        self.entities.push(EntityHandle {
            id,
            cell: cell.clone(),
        });
        (id, cell)
    }

    /// Request deletion of `id` at the end of the current step.
    ///
    /// Returns `true` when the entity was already marked this step or is no
    /// longer live on the board (it was being re-hit after dying), `false`
    /// for the first removal request. Call sites key first-death side effects
    /// off the `false` result.
    pub fn remove(&mut self, id: EntityId) -> bool {
        if self.pending.contains(&id) {
            return true;
        }
        if !self.entities.iter().any(|handle| handle.id == id) {
            return true;
        }
        self.pending.push(id);
        false
    }

    /// Number of live entities tagged with `kind`.
    pub fn count(&self, kind: EntityKind) -> u32 {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    /// Live entities in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &EntityHandle> {
        self.entities.iter()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Advance every entity by `dt` seconds, then apply pending removals.
    ///
    /// The loop is indexed on purpose: entities appended mid-step (missiles,
    /// explosions, spawned enemies) are stepped in the same tick once the
    /// index reaches them.
    pub fn step(&mut self, dt: f32) {
        self.pending.clear();
        let mut idx = 0;
        while idx < self.entities.len() {
            let handle = self.entities[idx].clone();
            handle.cell.borrow_mut().step(dt, self, handle.id);
            idx += 1;
        }
        self.finalize_removed();
    }

    /// Draw every live entity in insertion order.
    pub fn draw(&self, surface: &mut dyn Surface) {
        for handle in &self.entities {
            handle.cell.borrow().draw(surface);
        }
    }

    /// First other live entity whose kind matches `filter` (any kind when
    /// `None`) and whose box overlaps `rect`. Insertion order, first match
    /// wins; zero-area boxes never participate.
    pub fn collide(
        &self,
        me: EntityId,
        rect: &Rect,
        filter: Option<EntityKind>,
    ) -> Option<EntityHandle> {
        for handle in &self.entities {
            if handle.id == me {
                continue;
            }
            let other = handle.cell.borrow();
            let other_rect = other.rect();
            if other_rect.w <= 0.0 || other_rect.h <= 0.0 {
                continue;
            }
            if let Some(kind) = filter {
                if other.kind() != Some(kind) {
                    continue;
                }
            }
            if rect.overlaps(&other_rect) {
                drop(other);
                return Some(handle.clone());
            }
        }
        None
    }

    fn finalize_removed(&mut self) {
        for id in &self.pending {
            let Some(idx) = self.entities.iter().position(|handle| handle.id == *id) else {
                continue;
            };
            let handle = self.entities.remove(idx);
            if let Some(kind) = handle.cell.borrow().kind() {
                if let Some(count) = self.counts.get_mut(&kind) {
                    *count -= 1;
                }
            }
        }
    }
}

impl Scene for Board {
    fn step(&mut self, dt: f32) {
        Board::step(self, dt);
    }

    fn draw(&self, surface: &mut dyn Surface) {
        Board::draw(self, surface);
    }
}
