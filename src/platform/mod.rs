//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Input events (normalized to one activation intent)
//! - HUD text overlay (DOM on web)

pub mod input;

#[cfg(target_arch = "wasm32")]
pub mod hud;

pub use input::{InputAdapter, InputDecision, InputEvent};
