//! Drawing capability consumed by the game loop
//!
//! The core calls exactly one of these per frame. Implementations: the
//! WebGPU + DOM presenter in the browser and [`LogPresenter`] for headless runs.

use crate::sim::{Avatar, Obstacle};

/// Game-over prompt, depending on whether restart input is still locked
pub fn restart_hint(waiting: bool) -> &'static str {
    if waiting {
        "Wait for it..."
    } else {
        "Tap or Space to Restart"
    }
}

pub trait Presenter {
    /// Title screen
    fn draw_idle(&mut self, best_score: u32);
    /// Active gameplay
    fn draw_playing(&mut self, avatar: &Avatar, obstacles: &[Obstacle], score: u32);
    /// Crash screen; `waiting` while restart input is still locked
    fn draw_game_over(&mut self, final_score: u32, best_score: u32, waiting: bool);
}

/// Headless presenter: logs screen changes instead of drawing
#[derive(Debug, Default)]
pub struct LogPresenter {
    frames: u64,
    last_screen: Option<Screen>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Idle,
    Playing,
    GameOver { waiting: bool },
}

impl LogPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames presented so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    fn enter(&mut self, screen: Screen) -> bool {
        self.frames += 1;
        let changed = self.last_screen != Some(screen);
        self.last_screen = Some(screen);
        changed
    }
}

impl Presenter for LogPresenter {
    fn draw_idle(&mut self, best_score: u32) {
        if self.enter(Screen::Idle) {
            log::info!("[title] best {}", best_score);
        }
    }

    fn draw_playing(&mut self, avatar: &Avatar, obstacles: &[Obstacle], score: u32) {
        if self.enter(Screen::Playing) {
            log::info!("[playing] avatar y={:.1}", avatar.pos.y);
        }
        log::trace!(
            "[playing] y={:.1} vy={:.2} obstacles={} score={}",
            avatar.pos.y,
            avatar.velocity,
            obstacles.len(),
            score
        );
    }

    fn draw_game_over(&mut self, final_score: u32, best_score: u32, waiting: bool) {
        if self.enter(Screen::GameOver { waiting }) {
            log::info!(
                "[game over] score {} best {} ({})",
                final_score,
                best_score,
                restart_hint(waiting)
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restart_hint_follows_lock() {
        assert_eq!(restart_hint(true), "Wait for it...");
        assert_eq!(restart_hint(false), "Tap or Space to Restart");
    }

    #[test]
    fn test_log_presenter_counts_every_frame() {
        let mut presenter = LogPresenter::new();
        presenter.draw_idle(3);
        presenter.draw_idle(3);
        presenter.draw_game_over(1, 3, true);
        presenter.draw_game_over(1, 3, false);
        assert_eq!(presenter.frames(), 4);
    }
}
