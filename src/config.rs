//! World configuration
//!
//! Every tunable constant of the simulation lives in [`GameConfig`]. Values
//! default to [`crate::consts`] and can be overridden from JSON; missing
//! fields keep their defaults.

use serde::{Deserialize, Serialize};

use crate::consts::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub world_width: f32,
    pub world_height: f32,

    pub avatar_x: f32,
    pub avatar_start_y: f32,
    pub avatar_size: f32,
    pub gravity: f32,
    pub jump_impulse: f32,

    pub obstacle_width: f32,
    pub gap_height: f32,
    pub gap_margin_top: f32,
    pub gap_margin_bottom: f32,
    pub obstacle_speed: f32,
    /// Normalized ticks between spawns
    pub spawn_interval: f32,

    /// Input lock after a crash, in real milliseconds
    pub cooldown_ms: f64,
    pub reference_frame_ms: f64,
    pub max_frame_gap_ms: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
            avatar_x: AVATAR_X,
            avatar_start_y: AVATAR_START_Y,
            avatar_size: AVATAR_SIZE,
            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,
            obstacle_width: OBSTACLE_WIDTH,
            gap_height: GAP_HEIGHT,
            gap_margin_top: GAP_MARGIN_TOP,
            gap_margin_bottom: GAP_MARGIN_BOTTOM,
            obstacle_speed: OBSTACLE_SPEED,
            spawn_interval: SPAWN_INTERVAL,
            cooldown_ms: GAME_OVER_COOLDOWN_MS,
            reference_frame_ms: REFERENCE_FRAME_MS,
            max_frame_gap_ms: MAX_FRAME_GAP_MS,
        }
    }
}

impl GameConfig {
    /// Parse a (possibly partial) JSON config
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Range the top of a gap is drawn from.
    ///
    /// Collapses to the lower bound when the margins leave no room, so a
    /// cramped world still spawns obstacles instead of panicking.
    pub fn gap_top_range(&self) -> (f32, f32) {
        let min = self.gap_margin_top;
        let max = self.world_height - self.gap_height - self.gap_margin_bottom;
        (min, max.max(min))
    }
}
