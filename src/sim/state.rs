//! Game state and round lifecycle
//!
//! One `GameState` per session. The front end feeds it key presses and
//! timer ticks, then reads the public fields back to render.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::control::{ArrowKey, CardinalDirection, Facing, map_input};
use super::hint::Hint;
use super::round::{FailReason, Verdict, evaluate_move};
use super::spawn::spawn_target_position;
use crate::consts::*;
use crate::world_center;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Start screen; no game has begun yet
    Title,
    /// Flying; key presses are evaluated
    Playing,
    /// Gem just collected; waiting out the respawn delay with input disabled
    Captured,
    /// Round failed; waiting for restart
    GameOver,
}

/// Feedback for the presentation layer (sounds, overlays)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Drone moved one step
    Move,
    /// Gem collected
    Win,
    /// Round failed
    Lose(FailReason),
    /// A new gem was placed
    TargetSpawned,
    /// Drone recentred with a new facing
    RoundReset,
}

/// Result of handling a single key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved,
    Captured,
    Failed(FailReason),
}

/// The player's drone
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Drone {
    pub pos: Vec2,
    pub facing: Facing,
}

impl Default for Drone {
    fn default() -> Self {
        Self {
            pos: world_center(),
            facing: Facing::Back,
        }
    }
}

/// Complete game state for a session
#[derive(Debug, Clone)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    /// Gems collected since the last (re)start
    pub score: u64,
    pub phase: GamePhase,
    pub drone: Drone,
    /// Current gem position
    pub target: Vec2,
    /// Direction the gem was placed in, relative to the drone at spawn time
    pub target_direction: CardinalDirection,
    /// Gem direction at the most recent failure. Kept across restarts.
    pub last_failed_direction: Option<CardinalDirection>,
    /// Reason the last round ended, cleared on restart
    pub last_failure: Option<FailReason>,
    /// Ticks left before the next gem appears (only counts in `Captured`)
    pub respawn_ticks: u32,
    /// Re-roll the facing (and recentre) after each capture instead of keeping it
    pub reroll_facing_on_capture: bool,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Pending feedback, drained by the front end
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new session with the given seed. A round is staged behind the title screen.
    pub fn new(seed: u64) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            score: 0,
            phase: GamePhase::Title,
            drone: Drone::default(),
            target: world_center(),
            target_direction: CardinalDirection::Up,
            last_failed_direction: None,
            last_failure: None,
            respawn_ticks: 0,
            reroll_facing_on_capture: false,
            time_ticks: 0,
            events: Vec::new(),
        };

        state.reset_round();
        state.events.clear();

        state
    }

    /// Whether a game is in progress (true through the capture delay)
    pub fn is_playing(&self) -> bool {
        matches!(self.phase, GamePhase::Playing | GamePhase::Captured)
    }

    /// Whether key presses are evaluated right now
    pub fn accepts_input(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    /// Start a new game, or restart after a failure. Cancels any pending respawn.
    pub fn start_or_restart(&mut self) {
        self.score = 0;
        self.phase = GamePhase::Playing;
        self.respawn_ticks = 0;
        self.last_failure = None;
        self.reset_round();
        log::info!(
            "Game started (facing {:?}, gem {:?})",
            self.drone.facing,
            self.target_direction
        );
    }

    /// Recentre the drone, roll a new facing, and place a new gem
    pub fn reset_round(&mut self) {
        self.drone.pos = world_center();
        self.drone.facing = Facing::ALL[self.rng.random_range(0..Facing::ALL.len())];
        self.events.push(GameEvent::RoundReset);
        self.spawn_target();
    }

    /// Place a new gem relative to the drone's current position
    pub fn spawn_target(&mut self) {
        let (direction, pos) = spawn_target_position(self.drone.pos, &mut self.rng);
        self.target_direction = direction;
        self.target = pos;
        self.events.push(GameEvent::TargetSpawned);
        log::debug!("Gem spawned {:?} at ({:.0}, {:.0})", direction, pos.x, pos.y);
    }

    /// Handle one arrow key press. Returns `None` when input is not accepted.
    pub fn handle_input(&mut self, key: ArrowKey) -> Option<MoveOutcome> {
        if !self.accepts_input() {
            return None;
        }

        let delta = map_input(key, self.drone.facing);
        let outcome = match evaluate_move(self.drone.pos, self.target, delta) {
            Verdict::Rejected(reason) => {
                self.fail(reason);
                MoveOutcome::Failed(reason)
            }
            Verdict::Accepted { new_pos, captured, .. } => {
                self.drone.pos = new_pos;
                self.events.push(GameEvent::Move);
                log::debug!("{:?} -> ({:.0}, {:.0})", key, new_pos.x, new_pos.y);

                if captured {
                    self.capture();
                    MoveOutcome::Captured
                } else {
                    MoveOutcome::Moved
                }
            }
        };

        Some(outcome)
    }

    /// Hint for the current facing and gem. The key is revealed after any failure.
    pub fn hint(&self) -> Hint {
        Hint::new(
            self.drone.facing,
            self.target_direction,
            self.last_failed_direction.is_some(),
        )
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> std::vec::Drain<'_, GameEvent> {
        self.events.drain(..)
    }

    /// Pending events without consuming them
    pub fn pending_events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Called by the tick driver when the respawn delay runs out
    pub(super) fn finish_respawn(&mut self) {
        self.phase = GamePhase::Playing;
        if self.reroll_facing_on_capture {
            self.reset_round();
        } else {
            self.spawn_target();
        }
    }

    fn capture(&mut self) {
        self.score += 1;
        self.phase = GamePhase::Captured;
        self.respawn_ticks = RESPAWN_DELAY_TICKS;
        self.events.push(GameEvent::Win);
        log::info!("Gem collected! Score: {}", self.score);
    }

    fn fail(&mut self, reason: FailReason) {
        self.phase = GamePhase::GameOver;
        self.last_failure = Some(reason);
        self.last_failed_direction = Some(self.target_direction);
        self.events.push(GameEvent::Lose(reason));
        log::info!(
            "Round failed ({:?}) with facing {:?}, gem {:?}, score {}",
            reason,
            self.drone.facing,
            self.target_direction,
            self.score
        );
    }
}
