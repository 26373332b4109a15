//! Snake engine crate.
//!
//! This crate owns the platform + GPU runtime pieces used by the game layer:
//! window and event loop, wgpu device/surface, input translation, tick timing
//! and the instanced tile renderer.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod render;
pub mod paint;
