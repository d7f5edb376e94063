//! Sound capability
//!
//! Every call is fire-and-forget. Backends report whether a cue actually
//! played, and the game loop deliberately ignores the answer: a failed sound
//! never changes game state.

#[cfg(target_arch = "wasm32")]
pub mod web;

#[cfg(target_arch = "wasm32")]
pub use web::AudioManager;

/// One-shot sound cues
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    /// Jump impulse applied
    Flap,
    /// Obstacle cleared
    Score,
    /// Session ended
    Crash,
}

/// Outcome of a playback request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Playback {
    Played,
    /// Audio unavailable, muted, or the platform refused
    Failed,
}

pub trait AudioSink {
    fn play(&mut self, cue: SoundCue) -> Playback;
    /// Start the background loop (no-op if already running)
    fn start_loop(&mut self) -> Playback;
    /// Stop the background loop (no-op if not running)
    fn stop_loop(&mut self) -> Playback;
}

/// Backend that plays nothing (headless runs, tests)
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentAudio;

impl AudioSink for SilentAudio {
    fn play(&mut self, _cue: SoundCue) -> Playback {
        Playback::Failed
    }

    fn start_loop(&mut self) -> Playback {
        Playback::Failed
    }

    fn stop_loop(&mut self) -> Playback {
        Playback::Failed
    }
}
