//! Direction hints
//!
//! Hint logic only decides *what* to tell the player: where the gem is,
//! which key flies there, and how the controls are rotated. Turning that
//! into words is [`crate::text`]'s job.

use serde::{Deserialize, Serialize};

use super::control::{ArrowKey, CardinalDirection, Facing};

/// How the controls relate to the screen for a given facing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControlNote {
    /// Keys match the screen
    Aligned,
    /// Camera faces the nose; every key is reversed
    Inverted,
    /// Nose points screen-right
    NoseRight,
    /// Nose points screen-left
    NoseLeft,
}

impl ControlNote {
    pub fn for_facing(facing: Facing) -> Self {
        match facing {
            Facing::Back => ControlNote::Aligned,
            Facing::Front => ControlNote::Inverted,
            Facing::Left => ControlNote::NoseRight,
            Facing::Right => ControlNote::NoseLeft,
        }
    }
}

/// Hint for the current round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hint {
    pub target_direction: CardinalDirection,
    pub note: ControlNote,
    /// Only revealed once the player has failed at least once
    pub suggested_key: Option<ArrowKey>,
}

impl Hint {
    pub fn new(facing: Facing, target_direction: CardinalDirection, reveal_key: bool) -> Self {
        Self {
            target_direction,
            note: ControlNote::for_facing(facing),
            suggested_key: reveal_key.then(|| suggested_key(facing, target_direction)),
        }
    }
}

/// Key that flies a drone with `facing` toward `direction`.
///
/// Inverse of [`map_input`](super::control::map_input); keep the two in step.
pub fn suggested_key(facing: Facing, direction: CardinalDirection) -> ArrowKey {
    use ArrowKey as K;
    use CardinalDirection as D;

    match (facing, direction) {
        (Facing::Back, D::Up) => K::Up,
        (Facing::Back, D::Down) => K::Down,
        (Facing::Back, D::Left) => K::Left,
        (Facing::Back, D::Right) => K::Right,

        (Facing::Front, D::Up) => K::Down,
        (Facing::Front, D::Down) => K::Up,
        (Facing::Front, D::Left) => K::Right,
        (Facing::Front, D::Right) => K::Left,

        (Facing::Left, D::Up) => K::Left,
        (Facing::Left, D::Down) => K::Right,
        (Facing::Left, D::Left) => K::Down,
        (Facing::Left, D::Right) => K::Up,

        (Facing::Right, D::Up) => K::Right,
        (Facing::Right, D::Down) => K::Left,
        (Facing::Right, D::Left) => K::Up,
        (Facing::Right, D::Right) => K::Down,
    }
}
