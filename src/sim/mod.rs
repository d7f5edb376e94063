//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time enters only through `Frame` samples
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering, audio or platform dependencies

pub mod autopilot;
pub mod clock;
pub mod collision;
pub mod obstacles;
pub mod score;
pub mod state;
pub mod tick;

pub use clock::{Frame, FrameClock, Step};
pub use collision::{Collision, Rect, check, detect};
pub use obstacles::ObstacleField;
pub use score::Scoreboard;
pub use state::{Avatar, GameEvent, GamePhase, GameState, Obstacle};
pub use tick::{activate, tick};
