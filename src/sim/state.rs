//! Game state and core simulation types
//!
//! Everything a session needs lives in [`GameState`]; nothing is global, so
//! several games can run side by side (and tests stay deterministic).

use glam::Vec2;

use super::collision::Rect;
use super::obstacles::ObstacleField;
use super::score::Scoreboard;
use crate::config::GameConfig;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Title screen, waiting for the first activation
    Idle,
    /// Active gameplay
    Playing,
    /// Crashed; restart allowed once the cooldown has elapsed
    GameOver,
}

/// Things that happened during a tick or an activation.
///
/// The simulation only reports these; the orchestrator turns them into
/// audio cues and storage writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Idle -> Playing
    Started,
    /// Jump impulse applied
    Flapped,
    /// Obstacle cleared (score after the increment)
    Scored { score: u32 },
    /// Playing -> GameOver
    Crashed { final_score: u32, new_best: bool },
    /// Cooldown elapsed, restart is accepted again
    Unlocked,
    /// GameOver -> Idle
    Reset,
}

/// The player-controlled avatar (square bounding box)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Avatar {
    /// Top-left corner; x never changes
    pub pos: Vec2,
    pub size: f32,
    /// Vertical velocity (positive is down)
    pub velocity: f32,
    pub gravity: f32,
    pub jump_impulse: f32,
}

impl Avatar {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            pos: Vec2::new(config.avatar_x, config.avatar_start_y),
            size: config.avatar_size,
            velocity: 0.0,
            gravity: config.gravity,
            jump_impulse: config.jump_impulse,
        }
    }

    /// Semi-implicit Euler step, scaled by elapsed reference frames
    pub fn integrate(&mut self, scale: f32) {
        self.velocity += self.gravity * scale;
        self.pos.y += self.velocity * scale;
    }

    /// Flap: velocity is set, not added
    pub fn activate(&mut self) {
        self.velocity = self.jump_impulse;
    }

    /// Left edge; an obstacle counts as cleared once this is past it
    pub fn rear_edge(&self) -> f32 {
        self.pos.x
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos, Vec2::splat(self.size))
    }
}

/// A pair of bars with a vertical gap between them
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    /// Left edge
    pub x: f32,
    /// Bottom of the top bar / top of the gap
    pub gap_top: f32,
    /// Set once the avatar has cleared it; never reverts
    pub passed: bool,
}

impl Obstacle {
    pub fn new(x: f32, gap_top: f32) -> Self {
        Self {
            x,
            gap_top,
            passed: false,
        }
    }

    /// Right edge, the side the avatar must clear
    pub fn trailing_edge(&self, width: f32) -> f32 {
        self.x + width
    }

    pub fn top_bar(&self, width: f32) -> Rect {
        Rect::new(Vec2::new(self.x, 0.0), Vec2::new(width, self.gap_top))
    }

    pub fn bottom_bar(&self, width: f32, gap_height: f32, world_height: f32) -> Rect {
        let top = self.gap_top + gap_height;
        Rect::new(
            Vec2::new(self.x, top),
            Vec2::new(width, (world_height - top).max(0.0)),
        )
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: GameConfig,
    pub phase: GamePhase,
    pub avatar: Avatar,
    pub field: ObstacleField,
    pub scoreboard: Scoreboard,
    /// Restart input is ignored while set (GameOver only)
    pub input_locked: bool,
    /// Real-time deadline (ms) at which `input_locked` clears
    pub unlock_at_ms: Option<f64>,
    /// Simulated ticks in the current session
    pub time_ticks: u64,
}

impl GameState {
    /// Fresh idle session with the given best score and RNG seed
    pub fn new(config: GameConfig, best_score: u32, seed: u64) -> Self {
        Self {
            avatar: Avatar::new(&config),
            field: ObstacleField::new(seed),
            scoreboard: Scoreboard::new(best_score),
            phase: GamePhase::Idle,
            input_locked: false,
            unlock_at_ms: None,
            time_ticks: 0,
            config,
        }
    }

    /// Back to Idle: obstacles cleared, avatar repositioned, score and timers zeroed.
    /// Best score and RNG stream carry over.
    pub fn reset(&mut self) {
        self.avatar = Avatar::new(&self.config);
        self.field.clear();
        self.scoreboard.reset();
        self.phase = GamePhase::Idle;
        self.input_locked = false;
        self.unlock_at_ms = None;
        self.time_ticks = 0;
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        self.field.obstacles()
    }
}
