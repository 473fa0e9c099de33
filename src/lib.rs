//! Star Blitz library.
//!
//! A 2D fixed-timestep arcade shooter runtime. The simulation core (boards,
//! entities, the collision engine, the level director, and the scenes) runs
//! headless and is exercised directly by the integration tests; the
//! `systems` shims bind it to a Raylib window.
//!
//! Module overview:
//! - [`entity`] – the `Entity` trait, type tags, ids, and the AABB type
//! - [`board`] – the entity container with two-phase removal and collision queries
//! - [`game`] – scene scheduler, shared context, and game-flow transitions
//! - [`events`] – the game-flow event bus
//! - [`entities`] – ship, missile, enemy, explosion, and the level director
//! - [`scenes`] – starfields, title screens, and the touch-control overlay
//! - [`resources`] – config, input state, sprite atlas, and blueprint data
//! - [`surface`] – the raster surface contract scenes draw through
//! - [`systems`] – Raylib-facing input and render shims

pub mod board;
pub mod entities;
pub mod entity;
pub mod events;
pub mod game;
pub mod resources;
pub mod scenes;
pub mod surface;
pub mod systems;
