//! Top-level scenes driven by the slot scheduler.
//!
//! Submodules overview:
//! - [`starfield`] – parallax scrolling star layers
//! - [`titlescreen`] – centered title/subtitle with a fire callback
//! - [`touchcontrols`] – on-screen button overlay for pointer play
pub mod starfield;
pub mod titlescreen;
pub mod touchcontrols;
