//! Star Blitz main entry point.
//!
//! A 2D arcade shooter built on:
//! - **raylib** for windowing, graphics, and input
//! - a fixed-timestep board/entity simulation core (see the library modules)
//!
//! # Main Loop
//!
//! 1. Initialize logging, CLI, and configuration
//! 2. Load the sprite atlas, enemy blueprints, and level timeline
//! 3. Open the raylib window and load the sprite sheet
//! 4. Run the loop: sample input, advance the fixed-step accumulator,
//!    drain game-flow events, draw all registered scenes
//!
//! # Running
//!
//! ```sh
//! cargo run --release
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use clap::Parser;
use raylib::prelude::*;

use starblitz::events::{GameEvent, game_bus};
use starblitz::game::{Game, GameCtx, GameData, SCENE_SLOTS, apply_event, setup_screens};
use starblitz::resources::blueprints::{Blueprints, load_level};
use starblitz::resources::gameconfig::GameConfig;
use starblitz::resources::input::InputState;
use starblitz::resources::spritesheet::SpriteAtlas;
use starblitz::systems::input::update_input_state;
use starblitz::systems::render::RaylibSurface;

/// Largest frame delta fed into the accumulator; a stalled host resumes
/// instead of spiraling through catch-up ticks.
const MAX_FRAME_SECONDS: f32 = 0.25;

/// Star Blitz 2D
#[derive(Parser)]
#[command(version, about = "Star Blitz, a 2D arcade shooter")]
struct Cli {
    /// Path to the configuration file (default: ./config.ini).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Path to a level timeline JSON, overriding the configured one.
    #[arg(long, value_name = "PATH")]
    level: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(path) => GameConfig::with_path(path),
        None => GameConfig::new(),
    };
    config.load_from_file().ok(); // ignore errors, use defaults
    if let Some(path) = cli.level {
        config.level = path.display().to_string();
    }

    let atlas = SpriteAtlas::load_from_file(&config.sprites_data).expect("load sprite atlas");
    let blueprints = Blueprints::load_from_file(&config.enemies).expect("load enemy blueprints");
    let level = load_level(&config.level).expect("load level timeline");
    log::info!(
        "Loaded {} spawn records from {}",
        level.len(),
        config.level
    );

    let (window_width, window_height) = config.window_size();
    let (mut rl, thread) = raylib::init()
        .size(window_width as i32, window_height as i32)
        .title("Star Blitz")
        .build();
    rl.set_target_fps(config.target_fps);
    // Escape is handled as a game-flow event, not a hard window close
    rl.set_exit_key(None);

    let sheet = rl
        .load_texture(&thread, &config.sprites_image)
        .expect("load sprite sheet");

    let input = Rc::new(RefCell::new(InputState::default()));
    let (events, event_rx) = game_bus();
    let ctx = GameCtx {
        width: window_width as f32,
        height: window_height as f32,
        atlas: Rc::new(atlas),
        input: input.clone(),
        events: events.clone(),
    };
    let data = GameData {
        blueprints: Rc::new(blueprints),
        level,
    };

    let mut game = Game::new(SCENE_SLOTS);
    setup_screens(&mut game, &ctx);

    let tick = config.tick_seconds();
    let mut accumulator = 0.0f32;
    let mut running = true;

    while running && !rl.window_should_close() {
        {
            let mut input = input.borrow_mut();
            update_input_state(&rl, &mut input, ctx.width);
            if input.back.just_pressed {
                let _ = events.send(GameEvent::Quit);
            }
        }

        accumulator += rl.get_frame_time().min(MAX_FRAME_SECONDS);
        while accumulator >= tick {
            game.step(tick);
            accumulator -= tick;
        }

        for event in event_rx.try_iter() {
            if !apply_event(&mut game, &ctx, &data, event) {
                running = false;
            }
        }

        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);
        let mut surface = RaylibSurface::new(&mut d, &sheet);
        game.draw(&mut surface);
    }

    log::info!("Shutting down");
}
