//! Orientation-aware control mapping
//!
//! Arrow keys are screen-relative, but the drone flies relative to its own
//! nose. A key press becomes a pitch/roll command with a local vector, and
//! the drone's facing rotates that vector into world space.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::MOVE_STEP;

/// One of the four arrow keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArrowKey {
    Up,
    Down,
    Left,
    Right,
}

impl ArrowKey {
    pub const ALL: [ArrowKey; 4] = [ArrowKey::Up, ArrowKey::Down, ArrowKey::Left, ArrowKey::Right];

    /// Parse a DOM `KeyboardEvent.key` value. Anything that isn't an arrow is `None`.
    pub fn from_dom_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(ArrowKey::Up),
            "ArrowDown" => Some(ArrowKey::Down),
            "ArrowLeft" => Some(ArrowKey::Left),
            "ArrowRight" => Some(ArrowKey::Right),
            _ => None,
        }
    }

    /// Flight command this key issues
    pub fn command(self) -> Command {
        match self {
            ArrowKey::Up => Command::PitchForward,
            ArrowKey::Down => Command::PitchBack,
            ArrowKey::Left => Command::RollLeft,
            ArrowKey::Right => Command::RollRight,
        }
    }
}

/// Abstract flight command, independent of orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    PitchForward,
    PitchBack,
    RollLeft,
    RollRight,
}

impl Command {
    /// Unit vector in the drone's local frame (screen axes, forward is -Y)
    pub fn local_vector(self) -> Vec2 {
        match self {
            Command::PitchForward => Vec2::new(0.0, -1.0),
            Command::PitchBack => Vec2::new(0.0, 1.0),
            Command::RollLeft => Vec2::new(-1.0, 0.0),
            Command::RollRight => Vec2::new(1.0, 0.0),
        }
    }
}

/// Which side of the drone faces the camera
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Facing {
    /// Tail toward the camera; controls match the screen
    #[default]
    Back,
    /// Nose toward the camera; everything is reversed
    Front,
    /// Nose pointing screen-right
    Left,
    /// Nose pointing screen-left
    Right,
}

impl Facing {
    pub const ALL: [Facing; 4] = [Facing::Back, Facing::Front, Facing::Left, Facing::Right];

    /// Rotate a local command vector into world space
    pub fn to_world(self, local: Vec2) -> Vec2 {
        match self {
            Facing::Back => Vec2::new(local.x, local.y),
            Facing::Front => Vec2::new(-local.x, -local.y),
            Facing::Left => Vec2::new(-local.y, local.x),
            Facing::Right => Vec2::new(local.y, -local.x),
        }
    }

    /// Lowercase name, used for the `drone-<facing>` CSS class
    pub fn as_str(&self) -> &'static str {
        match self {
            Facing::Back => "back",
            Facing::Front => "front",
            Facing::Left => "left",
            Facing::Right => "right",
        }
    }
}

/// Cardinal direction on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardinalDirection {
    Up,
    Down,
    Left,
    Right,
}

impl CardinalDirection {
    pub const ALL: [CardinalDirection; 4] = [
        CardinalDirection::Up,
        CardinalDirection::Down,
        CardinalDirection::Left,
        CardinalDirection::Right,
    ];

    /// Unit vector in world space (y down)
    pub fn unit(self) -> Vec2 {
        match self {
            CardinalDirection::Up => Vec2::new(0.0, -1.0),
            CardinalDirection::Down => Vec2::new(0.0, 1.0),
            CardinalDirection::Left => Vec2::new(-1.0, 0.0),
            CardinalDirection::Right => Vec2::new(1.0, 0.0),
        }
    }

    /// Direction of the dominant axis of `delta`. Ties go to the horizontal axis.
    pub fn dominant(delta: Vec2) -> Option<Self> {
        if delta == Vec2::ZERO {
            return None;
        }
        Some(if delta.x.abs() >= delta.y.abs() {
            if delta.x < 0.0 {
                CardinalDirection::Left
            } else {
                CardinalDirection::Right
            }
        } else if delta.y < 0.0 {
            CardinalDirection::Up
        } else {
            CardinalDirection::Down
        })
    }
}

/// World-space displacement for a key press given the drone's facing.
///
/// Exactly one component is non-zero and its magnitude is `MOVE_STEP`.
pub fn map_input(key: ArrowKey, facing: Facing) -> Vec2 {
    facing.to_world(key.command().local_vector()) * MOVE_STEP
}
