//! High-level game flow: the scene scheduler, the shared context handed to
//! boards and entities, and the transitions between the title screens and a
//! play session.
//!
//! The scheduler holds a fixed set of numbered slots, stepped and drawn in
//! slot order each tick. Slots 0-2 carry the parallax starfields, slot 3 the
//! action (title screen or gameplay board), slot 4 the touch-control overlay.
//! Registering a scene into an occupied slot replaces it; that is the whole
//! scene-transition mechanism.

use std::cell::RefCell;
use std::rc::Rc;

use crossbeam_channel::Sender;
use log::info;

use crate::board::Board;
use crate::entities::level::Level;
use crate::entities::ship::PlayerShip;
use crate::events::GameEvent;
use crate::resources::blueprints::{Blueprints, SpawnRecord};
use crate::resources::input::InputState;
use crate::resources::spritesheet::SpriteAtlas;
use crate::scenes::starfield::Starfield;
use crate::scenes::titlescreen::TitleScreen;
use crate::scenes::touchcontrols::TouchControls;
use crate::surface::Surface;

pub const SLOT_STARS_FAR: usize = 0;
pub const SLOT_STARS_MID: usize = 1;
pub const SLOT_STARS_NEAR: usize = 2;
pub const SLOT_ACTION: usize = 3;
pub const SLOT_CONTROLS: usize = 4;
pub const SCENE_SLOTS: usize = 5;

/// Shared context injected into scenes and boards at construction.
///
/// Cheap to clone: shared pieces are reference-counted, the event side is a
/// channel sender. Created once at startup, torn down with the main loop.
#[derive(Clone)]
pub struct GameCtx {
    /// Playfield width in pixels.
    pub width: f32,
    /// Playfield height in pixels.
    pub height: f32,
    /// Sprite-sheet records, keyed by sprite name.
    pub atlas: Rc<SpriteAtlas>,
    /// Sampled action state, refreshed once per frame by the input shim.
    pub input: Rc<RefCell<InputState>>,
    /// Game-flow bus for scene-transition events.
    pub events: Sender<GameEvent>,
}

/// Anything steppable/drawable that can occupy a scheduler slot: starfields,
/// title screens, gameplay boards, control overlays.
pub trait Scene {
    fn step(&mut self, dt: f32);
    fn draw(&self, surface: &mut dyn Surface);
}

/// Slot scheduler driving every registered scene at a fixed cadence.
pub struct Game {
    slots: Vec<Option<Box<dyn Scene>>>,
}

impl Game {
    pub fn new(slots: usize) -> Self {
        Self {
            slots: (0..slots).map(|_| None).collect(),
        }
    }

    /// Register `scene` into `slot`, replacing whatever was there.
    pub fn set_scene(&mut self, slot: usize, scene: Box<dyn Scene>) {
        self.slots[slot] = Some(scene);
    }

    /// Unregister `slot`. In-flight state of the removed scene is discarded.
    pub fn clear_scene(&mut self, slot: usize) {
        self.slots[slot] = None;
    }

    /// Step every registered scene by `dt` seconds, slot order.
    pub fn step(&mut self, dt: f32) {
        for scene in self.slots.iter_mut().flatten() {
            scene.step(dt);
        }
    }

    /// Draw every registered scene, slot order (lowest slot at the back).
    pub fn draw(&self, surface: &mut dyn Surface) {
        for scene in self.slots.iter().flatten() {
            scene.draw(surface);
        }
    }
}

/// Static game data loaded at startup: the enemy library and the level
/// timeline it feeds from.
pub struct GameData {
    pub blueprints: Rc<Blueprints>,
    pub level: Vec<SpawnRecord>,
}

/// Install the persistent backdrop and overlay scenes.
pub fn setup_screens(game: &mut Game, ctx: &GameCtx) {
    game.set_scene(
        SLOT_STARS_FAR,
        Box::new(Starfield::new(ctx, 20.0, 0.4, 100, true)),
    );
    game.set_scene(
        SLOT_STARS_MID,
        Box::new(Starfield::new(ctx, 50.0, 0.6, 100, false)),
    );
    game.set_scene(
        SLOT_STARS_NEAR,
        Box::new(Starfield::new(ctx, 100.0, 1.0, 50, false)),
    );
    game.set_scene(SLOT_CONTROLS, Box::new(TouchControls::new(ctx)));
    show_title(game, ctx, "STAR BLITZ", "press fire to begin");
}

/// Put a title screen into the action slot; firing on it starts a play
/// session.
pub fn show_title(game: &mut Game, ctx: &GameCtx, title: &str, subtitle: &str) {
    let events = ctx.events.clone();
    let screen = TitleScreen::new(
        ctx,
        title,
        subtitle,
        Box::new(move || {
            let _ = events.send(GameEvent::Play);
        }),
    );
    game.set_scene(SLOT_ACTION, Box::new(screen));
}

/// Build a fresh gameplay board (level director + player ship) and register
/// it into the action slot.
pub fn start_play(game: &mut Game, ctx: &GameCtx, data: &GameData) {
    let mut board = Board::new(ctx.clone());
    let events = ctx.events.clone();
    board.add(Level::new(
        &data.level,
        data.blueprints.clone(),
        Box::new(move || {
            let _ = events.send(GameEvent::Win);
        }),
    ));
    board.add(PlayerShip::new(ctx));
    game.set_scene(SLOT_ACTION, Box::new(board));
}

/// React to one game-flow event. Returns `false` when the main loop should
/// exit.
pub fn apply_event(game: &mut Game, ctx: &GameCtx, data: &GameData, event: GameEvent) -> bool {
    info!("game event: {:?}", event);
    match event {
        GameEvent::Play => {
            start_play(game, ctx, data);
            true
        }
        GameEvent::Win => {
            show_title(game, ctx, "YOU WIN", "press fire to play again");
            true
        }
        GameEvent::Lose => {
            show_title(game, ctx, "GAME OVER", "press fire to try again");
            true
        }
        GameEvent::Quit => false,
    }
}
