//! Demo autopilot
//!
//! Flaps whenever the avatar sinks below the centre of the next gap. Good
//! enough for headless runs and attract mode; not meant to be unbeatable.

use super::state::{GamePhase, GameState};

/// How far below the gap centre (world units) the avatar may sink before flapping
const FLAP_SLACK: f32 = 12.0;

/// Centre of the gap the avatar has to clear next, or the world centre when none is near
pub fn target_y(state: &GameState) -> f32 {
    let config = &state.config;
    state
        .obstacles()
        .iter()
        .find(|o| o.trailing_edge(config.obstacle_width) >= state.avatar.pos.x)
        .map(|o| o.gap_top + config.gap_height / 2.0)
        .unwrap_or(config.world_height / 2.0)
}

/// Whether the autopilot wants an activation this frame
pub fn wants_activation(state: &GameState) -> bool {
    match state.phase {
        GamePhase::Idle => true,
        GamePhase::Playing => {
            let centre = state.avatar.pos.y + state.avatar.size / 2.0;
            state.avatar.velocity >= 0.0 && centre > target_y(state) + FLAP_SLACK
        }
        GamePhase::GameOver => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::clock::{Frame, Step};
    use crate::sim::tick::{activate, tick};

    #[test]
    fn test_target_defaults_to_world_centre() {
        let state = GameState::new(GameConfig::default(), 0, 1);
        assert_eq!(target_y(&state), 300.0);
    }

    #[test]
    fn test_autopilot_survives_forgiving_world() {
        // Gap tops limited to 100..320 so consecutive gaps are always reachable
        let config = GameConfig {
            gap_margin_top: 100.0,
            gap_margin_bottom: 100.0,
            ..Default::default()
        };
        let mut state = GameState::new(config, 0, 2024);
        for t in 0..3000 {
            if wants_activation(&state) {
                activate(&mut state);
            }
            tick(
                &mut state,
                Frame {
                    now_ms: t as f64 * 16.0,
                    step: Step::Advance(1.0),
                },
            );
        }
        assert_eq!(state.phase, GamePhase::Playing);
        assert!(state.scoreboard.score >= 20, "score {}", state.scoreboard.score);
    }
}
