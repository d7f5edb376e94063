//! Flappy Gates - a gravity-driven gate runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (clock, physics, obstacles, collisions, state machine)
//! - `game`: Orchestrator wiring the simulation to presenter/audio/storage capabilities
//! - `config`: Data-driven world constants
//! - `platform`: Input normalization and browser HUD
//! - `persistence`: Best-score storage
//! - `audio`: Sound cue capability and Web Audio backend
//! - `renderer`: WebGPU quad renderer

pub mod audio;
pub mod config;
pub mod game;
pub mod persistence;
pub mod platform;
pub mod presenter;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use config::GameConfig;
pub use game::Game;
pub use presenter::Presenter;
pub use settings::Settings;

/// Default world constants (world units are canvas pixels at 400x600)
pub mod consts {
    /// World dimensions
    pub const WORLD_WIDTH: f32 = 400.0;
    pub const WORLD_HEIGHT: f32 = 600.0;

    /// Avatar defaults
    pub const AVATAR_X: f32 = 80.0;
    pub const AVATAR_START_Y: f32 = 250.0;
    pub const AVATAR_SIZE: f32 = 40.0;
    /// Downward acceleration per normalized tick
    pub const GRAVITY: f32 = 0.35;
    /// Velocity set on flap (negative is up)
    pub const JUMP_IMPULSE: f32 = -7.0;

    /// Obstacle defaults
    pub const OBSTACLE_WIDTH: f32 = 60.0;
    pub const GAP_HEIGHT: f32 = 180.0;
    pub const GAP_MARGIN_TOP: f32 = 50.0;
    pub const GAP_MARGIN_BOTTOM: f32 = 50.0;
    /// Horizontal scroll per normalized tick
    pub const OBSTACLE_SPEED: f32 = 2.5;
    /// Normalized ticks between spawns
    pub const SPAWN_INTERVAL: f32 = 100.0;

    /// Real-time input lock after a crash
    pub const GAME_OVER_COOLDOWN_MS: f64 = 1500.0;

    /// Frame interval that maps to a scale factor of 1.0 (60 Hz)
    pub const REFERENCE_FRAME_MS: f64 = 1000.0 / 60.0;
    /// Frame gaps longer than this are treated as a backgrounded tab
    pub const MAX_FRAME_GAP_MS: f64 = 250.0;
}
