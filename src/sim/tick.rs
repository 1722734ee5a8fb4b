//! Fixed timestep driver
//!
//! Input is applied in arrival order, then timers advance one step.

use super::control::ArrowKey;
use super::state::{GamePhase, GameState, MoveOutcome};

/// Input collected since the previous tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Start button / restart button
    pub start: bool,
    /// Arrow presses in arrival order
    pub keys: Vec<ArrowKey>,
}

impl TickInput {
    /// Clear one-shot inputs after they've been consumed
    pub fn clear(&mut self) {
        self.start = false;
        self.keys.clear();
    }
}

/// Advance the game state by one fixed timestep.
///
/// Returns the outcome of each key press that was actually evaluated.
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<MoveOutcome> {
    state.time_ticks += 1;

    if input.start && !state.is_playing() {
        state.start_or_restart();
    }

    // A capture this tick starts the full delay next tick
    let respawn_pending = state.phase == GamePhase::Captured;

    let mut outcomes = Vec::new();
    for key in &input.keys {
        // Presses after a capture or failure are dropped along with the rest of the batch
        match state.handle_input(*key) {
            Some(outcome) => outcomes.push(outcome),
            None => break,
        }
    }

    if respawn_pending {
        state.respawn_ticks = state.respawn_ticks.saturating_sub(1);
        if state.respawn_ticks == 0 {
            state.finish_respawn();
        }
    }

    outcomes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::control::{CardinalDirection, Facing};
    use crate::sim::state::{Drone, GameEvent};
    use glam::Vec2;

    fn keys(keys: &[ArrowKey]) -> TickInput {
        TickInput {
            keys: keys.to_vec(),
            ..Default::default()
        }
    }

    fn capture_ready(seed: u64) -> GameState {
        let mut state = GameState::new(seed);
        state.start_or_restart();
        state.drone = Drone {
            pos: Vec2::new(450.0, 450.0),
            facing: Facing::Back,
        };
        state.target = Vec2::new(450.0, 420.0);
        state.target_direction = CardinalDirection::Up;
        state.drain_events().for_each(drop);
        state
    }

    #[test]
    fn test_tick_title_to_playing() {
        let mut state = GameState::new(12345);
        assert_eq!(state.phase, GamePhase::Title);

        // Tick without start - should stay on the title screen
        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, GamePhase::Title);

        let input = TickInput {
            start: true,
            ..Default::default()
        };
        tick(&mut state, &input);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_start_ignored_mid_game() {
        let mut state = capture_ready(5);
        state.score = 3;
        let input = TickInput {
            start: true,
            ..Default::default()
        };
        tick(&mut state, &input);
        assert_eq!(state.score, 3);
        assert_eq!(state.drone.pos, Vec2::new(450.0, 450.0));
    }

    #[test]
    fn test_respawn_after_delay() {
        let mut state = capture_ready(8);

        let outcomes = tick(&mut state, &keys(&[ArrowKey::Up]));
        assert_eq!(outcomes, vec![MoveOutcome::Captured]);
        assert_eq!(state.phase, GamePhase::Captured);
        let stale_target = state.target;

        for _ in 1..RESPAWN_DELAY_TICKS {
            tick(&mut state, &keys(&[ArrowKey::Up]));
            assert_eq!(state.phase, GamePhase::Captured);
            assert_eq!(state.target, stale_target);
        }

        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 1);
        assert_eq!(state.drone.facing, Facing::Back);
        assert_eq!(state.drone.pos, Vec2::new(450.0, 390.0));

        let events: Vec<_> = state.drain_events().collect();
        assert_eq!(events, vec![GameEvent::Move, GameEvent::Win, GameEvent::TargetSpawned]);
    }

    #[test]
    fn test_keys_after_capture_in_same_batch_are_dropped() {
        let mut state = capture_ready(9);
        let outcomes = tick(&mut state, &keys(&[ArrowKey::Up, ArrowKey::Down, ArrowKey::Down]));
        assert_eq!(outcomes, vec![MoveOutcome::Captured]);
        assert_eq!(state.drone.pos, Vec2::new(450.0, 390.0));
    }

    #[test]
    fn test_restart_during_delay_cancels_respawn() {
        let mut state = capture_ready(10);
        tick(&mut state, &keys(&[ArrowKey::Up]));
        assert_eq!(state.phase, GamePhase::Captured);

        state.start_or_restart();
        let fresh_target = state.target;
        let fresh_facing = state.drone.facing;

        for _ in 0..RESPAWN_DELAY_TICKS * 2 {
            tick(&mut state, &TickInput::default());
        }
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.target, fresh_target);
        assert_eq!(state.drone.facing, fresh_facing);
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        let mut state1 = GameState::new(99999);
        let mut state2 = GameState::new(99999);

        let inputs = [
            TickInput {
                start: true,
                ..Default::default()
            },
            keys(&[ArrowKey::Up]),
            keys(&[ArrowKey::Left, ArrowKey::Right]),
            TickInput::default(),
        ];

        for input in &inputs {
            let a = tick(&mut state1, input);
            let b = tick(&mut state2, input);
            assert_eq!(a, b);
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.drone, state2.drone);
        assert_eq!(state1.target, state2.target);
        assert_eq!(state1.phase, state2.phase);
    }
}
