//! Session orchestration
//!
//! Owns the simulation state and the three host capabilities. The host feeds
//! it animation-frame timestamps and activation intents; everything else
//! (sound, persistence, drawing) flows out through the capabilities.

use crate::audio::{AudioSink, Playback, SoundCue};
use crate::config::GameConfig;
use crate::persistence::ScoreStore;
use crate::presenter::Presenter;
use crate::sim::{self, FrameClock, GameEvent, GamePhase, GameState};

pub struct Game<P, A, S> {
    state: GameState,
    clock: FrameClock,
    presenter: P,
    audio: A,
    store: S,
}

impl<P, A, S> Game<P, A, S>
where
    P: Presenter,
    A: AudioSink,
    S: ScoreStore,
{
    /// Best score is read from `store` exactly once, here
    pub fn new(config: GameConfig, seed: u64, presenter: P, audio: A, mut store: S) -> Self {
        let best = store.load_best_score();
        let clock = FrameClock::new(&config);
        log::info!("Game ready (best {}, seed {})", best, seed);
        Self {
            state: GameState::new(config, best, seed),
            clock,
            presenter,
            audio,
            store,
        }
    }

    /// One animation frame: advance the simulation, then draw exactly once
    pub fn on_tick(&mut self, timestamp_ms: f64) {
        let frame = self.clock.sample(timestamp_ms);
        let events = sim::tick(&mut self.state, frame);
        self.dispatch(&events);
        self.present();
    }

    /// Tap, click or space. Ignored while the game-over cooldown runs.
    pub fn activate_intent(&mut self) {
        let events = sim::activate(&mut self.state);
        self.dispatch(&events);
    }

    fn dispatch(&mut self, events: &[GameEvent]) {
        for event in events {
            match *event {
                GameEvent::Started => {
                    unheard(self.audio.start_loop(), "loop");
                }
                GameEvent::Flapped => {
                    unheard(self.audio.play(SoundCue::Flap), "flap");
                }
                GameEvent::Scored { score } => {
                    log::debug!("Score {}", score);
                    unheard(self.audio.play(SoundCue::Score), "score");
                }
                GameEvent::Crashed {
                    final_score,
                    new_best,
                } => {
                    unheard(self.audio.stop_loop(), "loop stop");
                    unheard(self.audio.play(SoundCue::Crash), "crash");
                    if new_best {
                        log::info!("New best score {}", final_score);
                        self.store.save_best_score(final_score);
                    }
                }
                GameEvent::Unlocked | GameEvent::Reset => {}
            }
        }
    }

    fn present(&mut self) {
        let board = &self.state.scoreboard;
        match self.state.phase {
            GamePhase::Idle => self.presenter.draw_idle(board.best),
            GamePhase::Playing => {
                self.presenter
                    .draw_playing(&self.state.avatar, self.state.obstacles(), board.score)
            }
            GamePhase::GameOver => {
                self.presenter
                    .draw_game_over(board.score, board.best, self.state.input_locked)
            }
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn audio_mut(&mut self) -> &mut A {
        &mut self.audio
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

/// Sound outcomes are reported, never acted on
fn unheard(playback: Playback, what: &str) {
    if playback == Playback::Failed {
        log::debug!("Audio {} not played", what);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::SilentAudio;
    use crate::persistence::MemoryStore;
    use crate::presenter::LogPresenter;

    #[test]
    fn test_best_loaded_once_at_startup() {
        let game = Game::new(
            GameConfig::default(),
            1,
            LogPresenter::new(),
            SilentAudio,
            MemoryStore::with_best(17),
        );
        assert_eq!(game.state().scoreboard.best, 17);
        assert_eq!(game.state().phase, GamePhase::Idle);
        assert_eq!(game.store().writes, 0);
    }

    #[test]
    fn test_each_tick_presents_once() {
        let mut game = Game::new(
            GameConfig::default(),
            1,
            LogPresenter::new(),
            SilentAudio,
            MemoryStore::new(),
        );
        for i in 0..10 {
            game.on_tick(i as f64 * 16.7);
        }
        game.activate_intent();
        game.on_tick(1000.0);
        assert_eq!(game.presenter().frames(), 11);
    }
}
