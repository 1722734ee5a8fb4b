//! Move evaluation
//!
//! Pure decision for a single proposed move. Mutation happens in
//! [`GameState::handle_input`](super::GameState::handle_input).

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::in_world;

/// Why a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailReason {
    /// The move would leave the world
    Boundary,
    /// The move took the drone noticeably further from the gem
    WrongDirection,
}

/// Outcome of evaluating a proposed move
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Verdict {
    /// Move is legal. `captured` is set when the drone ends inside the capture radius.
    Accepted { new_pos: Vec2, new_dist: f32, captured: bool },
    /// Move is illegal; the drone does not move
    Rejected(FailReason),
}

/// Decide what happens when a drone at `drone` moves by `delta` toward `target`.
///
/// Boundary is checked before direction, so a move that both leaves the
/// world and moves away reports `Boundary`.
pub fn evaluate_move(drone: Vec2, target: Vec2, delta: Vec2) -> Verdict {
    let new_pos = drone + delta;
    let old_dist = target.distance(drone);
    let new_dist = target.distance(new_pos);

    if !in_world(new_pos) {
        return Verdict::Rejected(FailReason::Boundary);
    }

    if new_dist > old_dist + DIRECTION_TOLERANCE {
        return Verdict::Rejected(FailReason::WrongDirection);
    }

    Verdict::Accepted {
        new_pos,
        new_dist,
        captured: new_dist < CAPTURE_RADIUS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_step_toward_target_is_accepted() {
        let verdict = evaluate_move(
            Vec2::new(450.0, 450.0),
            Vec2::new(450.0, 330.0),
            Vec2::new(0.0, -60.0),
        );
        assert_eq!(
            verdict,
            Verdict::Accepted {
                new_pos: Vec2::new(450.0, 390.0),
                new_dist: 60.0,
                captured: false,
            }
        );
    }

    #[test]
    fn test_step_away_is_wrong_direction() {
        let verdict = evaluate_move(
            Vec2::new(450.0, 450.0),
            Vec2::new(450.0, 330.0),
            Vec2::new(0.0, 60.0),
        );
        assert_eq!(verdict, Verdict::Rejected(FailReason::WrongDirection));
    }

    #[test]
    fn test_sideways_step_within_tolerance() {
        // Target 200 away; a perpendicular 60 step adds ~8.8, under the 10 margin
        let verdict = evaluate_move(
            Vec2::new(450.0, 450.0),
            Vec2::new(450.0, 250.0),
            Vec2::new(60.0, 0.0),
        );
        assert!(matches!(verdict, Verdict::Accepted { captured: false, .. }));

        // Closer target; the same sideways step costs more than 10
        let verdict = evaluate_move(
            Vec2::new(450.0, 450.0),
            Vec2::new(450.0, 390.0),
            Vec2::new(60.0, 0.0),
        );
        assert_eq!(verdict, Verdict::Rejected(FailReason::WrongDirection));
    }

    #[test]
    fn test_boundary_wins_over_direction() {
        let verdict = evaluate_move(
            Vec2::new(30.0, 450.0),
            Vec2::new(450.0, 450.0),
            Vec2::new(-60.0, 0.0),
        );
        assert_eq!(verdict, Verdict::Rejected(FailReason::Boundary));
    }

    #[test]
    fn test_landing_on_edge_is_inside() {
        let verdict = evaluate_move(
            Vec2::new(60.0, 450.0),
            Vec2::new(0.0, 450.0),
            Vec2::new(-60.0, 0.0),
        );
        assert!(matches!(verdict, Verdict::Accepted { captured: true, .. }));
    }

    #[test]
    fn test_capture_radius_is_exclusive() {
        let verdict = evaluate_move(
            Vec2::new(450.0, 450.0),
            Vec2::new(450.0, 350.0),
            Vec2::new(0.0, -60.0),
        );
        assert!(matches!(verdict, Verdict::Accepted { captured: false, .. }));

        let verdict = evaluate_move(
            Vec2::new(450.0, 450.0),
            Vec2::new(450.0, 351.0),
            Vec2::new(0.0, -60.0),
        );
        assert!(matches!(verdict, Verdict::Accepted { captured: true, .. }));
    }

    fn step() -> impl Strategy<Value = Vec2> {
        prop_oneof![
            Just(Vec2::new(0.0, -MOVE_STEP)),
            Just(Vec2::new(0.0, MOVE_STEP)),
            Just(Vec2::new(-MOVE_STEP, 0.0)),
            Just(Vec2::new(MOVE_STEP, 0.0)),
        ]
    }

    proptest! {
        #[test]
        fn prop_accepted_moves_stay_in_world(
            dx in 0.0f32..=WORLD_SIZE,
            dy in 0.0f32..=WORLD_SIZE,
            tx in TARGET_MARGIN..=WORLD_SIZE - TARGET_MARGIN,
            ty in TARGET_MARGIN..=WORLD_SIZE - TARGET_MARGIN,
            delta in step(),
        ) {
            if let Verdict::Accepted { new_pos, .. } = evaluate_move(Vec2::new(dx, dy), Vec2::new(tx, ty), delta) {
                prop_assert!(in_world(new_pos));
            }
        }

        #[test]
        fn prop_moving_away_always_fails(
            dx in 0.0f32..=WORLD_SIZE,
            dy in 0.0f32..=WORLD_SIZE,
            tx in TARGET_MARGIN..=WORLD_SIZE - TARGET_MARGIN,
            ty in TARGET_MARGIN..=WORLD_SIZE - TARGET_MARGIN,
            delta in step(),
        ) {
            let drone = Vec2::new(dx, dy);
            let target = Vec2::new(tx, ty);
            let new_pos = drone + delta;
            let verdict = evaluate_move(drone, target, delta);
            if !in_world(new_pos) {
                prop_assert_eq!(verdict, Verdict::Rejected(FailReason::Boundary));
            } else if target.distance(new_pos) > target.distance(drone) + DIRECTION_TOLERANCE {
                prop_assert_eq!(verdict, Verdict::Rejected(FailReason::WrongDirection));
            } else {
                let accepted = matches!(verdict, Verdict::Accepted { .. });
                prop_assert!(accepted);
            }
        }
    }
}
