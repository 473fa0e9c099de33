//! Board entities.
//!
//! Submodules overview:
//! - [`ship`] – the player ship: movement, clamping, missile volleys
//! - [`missile`] – the player missile: upward motion, enemy collision
//! - [`enemy`] – blueprint-driven sine-motion enemies
//! - [`explosion`] – frame-animated explosion with a fixed lifetime
//! - [`level`] – the timeline director that feeds enemies onto the board
pub mod enemy;
pub mod explosion;
pub mod level;
pub mod missile;
pub mod ship;
