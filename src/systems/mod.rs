//! Host-facing shims.
//!
//! Submodules overview
//! - [`input`] – read hardware input and update [`crate::resources::input::InputState`]
//! - [`render`] – draw the registered scenes using Raylib
pub mod input;
pub mod render;
