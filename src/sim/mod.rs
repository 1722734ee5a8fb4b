//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering, audio, or platform dependencies

pub mod autopilot;
pub mod control;
pub mod hint;
pub mod round;
pub mod spawn;
pub mod state;
pub mod tick;

pub use control::{ArrowKey, CardinalDirection, Command, Facing, map_input};
pub use hint::{ControlNote, Hint, suggested_key};
pub use round::{FailReason, Verdict, evaluate_move};
pub use spawn::{clamp_to_play_area, spawn_target_position};
pub use state::{Drone, GameEvent, GamePhase, GameState, MoveOutcome};
pub use tick::{TickInput, tick};
