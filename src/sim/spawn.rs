//! Gem placement
//!
//! Gems appear 3-4 moves away from the drone along one cardinal axis,
//! then get pulled inside the margin. Near the edges clamping can leave
//! the gem closer than three moves; that is accepted as-is.

use glam::Vec2;
use rand::Rng;

use super::control::CardinalDirection;
use crate::consts::*;

/// Clamp a point into `[TARGET_MARGIN, WORLD_SIZE - TARGET_MARGIN]` on both axes
#[inline]
pub fn clamp_to_play_area(pos: Vec2) -> Vec2 {
    pos.clamp(
        Vec2::splat(TARGET_MARGIN),
        Vec2::splat(WORLD_SIZE - TARGET_MARGIN),
    )
}

/// Gem position `steps` moves from `drone` in `direction`, before clamping
#[inline]
pub fn offset_position(drone: Vec2, direction: CardinalDirection, steps: f32) -> Vec2 {
    drone + direction.unit() * (MOVE_STEP * steps)
}

/// Roll a direction and distance, returning the direction and the clamped gem position
pub fn spawn_target_position<R: Rng>(drone: Vec2, rng: &mut R) -> (CardinalDirection, Vec2) {
    let direction = CardinalDirection::ALL[rng.random_range(0..CardinalDirection::ALL.len())];
    let steps = rng.random_range(TARGET_MIN_STEPS..TARGET_MAX_STEPS);
    let pos = clamp_to_play_area(offset_position(drone, direction, steps));
    (direction, pos)
}
