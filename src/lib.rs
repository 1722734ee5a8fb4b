//! Drone Orient - an orientation-training arcade game
//!
//! A drone sits in the arena facing one of four ways; a gem appears in one
//! of four cardinal directions. The arrow keys fly the drone relative to its
//! own nose, so the player has to rotate the controls in their head.
//!
//! Core modules:
//! - `sim`: Deterministic game rules (control mapping, move evaluation, spawning)
//! - `text`: Localized hint and failure strings
//! - `settings`: Session configuration
//! - `audio`: Sound effect definitions (Web Audio playback on wasm)

pub mod audio;
pub mod settings;
pub mod sim;
pub mod text;

pub use settings::Settings;
pub use text::Language;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, only timers run on it)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// World is a square, `[0, WORLD_SIZE]` on both axes
    pub const WORLD_SIZE: f32 = 900.0;
    /// Drone sprite edge length (layout only)
    pub const DRONE_SIZE: f32 = 200.0;
    /// Distance covered by one key press
    pub const MOVE_STEP: f32 = 60.0;

    /// Gem is collected when the drone ends a move closer than this
    pub const CAPTURE_RADIUS: f32 = 40.0;
    /// A move may increase distance-to-gem by at most this much
    pub const DIRECTION_TOLERANCE: f32 = 10.0;
    /// Gems are clamped this far inside the world edges
    pub const TARGET_MARGIN: f32 = 60.0;

    /// Gem spawn distance, in moves (lower bound inclusive, upper exclusive)
    pub const TARGET_MIN_STEPS: f32 = 3.0;
    pub const TARGET_MAX_STEPS: f32 = 4.0;

    /// Pause between collecting a gem and the next one appearing (200 ms)
    pub const RESPAWN_DELAY_TICKS: u32 = 12;
    /// Autopilot presses one key every this many ticks
    pub const AUTOPILOT_INTERVAL_TICKS: u32 = 15;
}

use glam::Vec2;

/// Center of the world, where every round starts
#[inline]
pub fn world_center() -> Vec2 {
    Vec2::splat(consts::WORLD_SIZE / 2.0)
}

/// Whether a point lies inside `[0, WORLD_SIZE]` on both axes (edges included)
#[inline]
pub fn in_world(pos: Vec2) -> bool {
    (0.0..=consts::WORLD_SIZE).contains(&pos.x) && (0.0..=consts::WORLD_SIZE).contains(&pos.y)
}
