//! Per-frame state machine
//!
//! Idle -> Playing on the first activation, Playing -> GameOver on a crash,
//! GameOver -> Idle on an activation after the cooldown. A tick performs at
//! most one phase transition.

use super::clock::{Frame, Step};
use super::collision;
use super::state::{GameEvent, GamePhase, GameState};

/// Advance the session by one animation frame
pub fn tick(state: &mut GameState, frame: Frame) -> Vec<GameEvent> {
    let mut events = Vec::new();

    match state.phase {
        GamePhase::Idle => {}

        GamePhase::Playing => {
            let Step::Advance(scale) = frame.step else {
                return events;
            };
            state.time_ticks += 1;

            state.avatar.integrate(scale);

            let scored = state
                .field
                .tick(scale, state.avatar.rear_edge(), &state.config);
            for _ in 0..scored {
                let score = state.scoreboard.record_pass();
                events.push(GameEvent::Scored { score });
            }

            if let Some(hit) = collision::detect(&state.avatar, state.obstacles(), &state.config) {
                let final_score = state.scoreboard.score;
                let new_best = state.scoreboard.finalize().is_some();

                state.phase = GamePhase::GameOver;
                state.input_locked = true;
                state.unlock_at_ms = Some(frame.now_ms + state.config.cooldown_ms);

                log::info!(
                    "Crashed into {:?} after {} ticks, score {} (best {})",
                    hit,
                    state.time_ticks,
                    final_score,
                    state.scoreboard.best
                );
                events.push(GameEvent::Crashed {
                    final_score,
                    new_best,
                });
            }
        }

        GamePhase::GameOver => {
            // Real time, not scaled: a skipped frame still counts toward the cooldown
            let due = state.unlock_at_ms.is_some_and(|at| frame.now_ms >= at);
            if state.input_locked && due {
                state.input_locked = false;
                state.unlock_at_ms = None;
                events.push(GameEvent::Unlocked);
            }
        }
    }

    events
}

/// Handle a normalized activation intent (tap, click, space)
pub fn activate(state: &mut GameState) -> Vec<GameEvent> {
    match state.phase {
        GamePhase::Idle => {
            state.phase = GamePhase::Playing;
            state.avatar.activate();
            log::info!("Session started");
            vec![GameEvent::Started, GameEvent::Flapped]
        }
        GamePhase::Playing => {
            state.avatar.activate();
            vec![GameEvent::Flapped]
        }
        GamePhase::GameOver if state.input_locked => {
            log::debug!("Restart ignored, input locked");
            Vec::new()
        }
        GamePhase::GameOver => {
            state.reset();
            log::info!("Session reset");
            vec![GameEvent::Reset]
        }
    }
}
