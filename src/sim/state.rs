//! Session state and core simulation types

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::field::PlatformField;
use super::geom::Rect;
use crate::tuning::Tuning;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// The player fell past the bottom edge; only the restart input works
    GameOver,
}

/// Which way the player sprite faces (sprite selection only, no gameplay
/// effect)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Facing {
    Right,
    Left,
}

/// The player sprite
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner in board pixels
    pub pos: Vec2,
    /// Sprite size, constant for the session lifetime
    pub size: Vec2,
    /// Velocity in pixels per tick
    pub vel: Vec2,
    pub facing: Facing,
}

impl Player {
    /// Player at the spawn position, carrying the bounce impulse
    pub fn spawn(tuning: &Tuning) -> Self {
        Self {
            pos: tuning.spawn_pos(),
            size: tuning.player_size,
            vel: Vec2::new(0.0, tuning.jump_impulse),
            facing: Facing::Right,
        }
    }

    /// Set horizontal velocity and facing from a steer input. The velocity
    /// persists until the next steer.
    pub fn steer(&mut self, dir: Facing, speed: f32) {
        self.vel.x = match dir {
            Facing::Right => speed,
            Facing::Left => -speed,
        };
        self.facing = dir;
    }

    /// Advance horizontally and wrap around the vertical board edges
    pub fn advance_and_wrap(&mut self, board_width: f32) {
        self.pos.x += self.vel.x;
        if self.pos.x > board_width {
            self.pos.x = 0.0;
        } else if self.pos.x + self.size.x < 0.0 {
            self.pos.x = board_width;
        }
    }

    /// Bounding box for collision tests and drawing
    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }
}

/// Timed jump boost window, polled against a wall-clock deadline
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SuperJump {
    pub active: bool,
    /// Absolute deadline in ms
    pub ends_at_ms: f64,
}

impl SuperJump {
    /// Open the boost window; re-activation extends the deadline
    pub fn activate(&mut self, now_ms: f64, duration_ms: f64) {
        self.active = true;
        self.ends_at_ms = now_ms + duration_ms;
    }

    /// Close the window once the deadline has passed
    pub fn expire_if_due(&mut self, now_ms: f64) {
        if self.active && now_ms > self.ends_at_ms {
            self.active = false;
        }
    }
}

/// Complete session state
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    pub tuning: Tuning,
    pub phase: GamePhase,
    pub player: Player,
    pub platforms: PlatformField,
    /// Displayed score; ratchets up to `max_score`, never decreases
    pub score: u64,
    /// Running total of bounce rewards
    pub max_score: u64,
    pub super_jump: SuperJump,
    /// True if a bounce happened this tick; gates scoring. Reset every tick.
    pub bounced: bool,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Session RNG (platform placement, score rewards)
    #[serde(skip)]
    pub rng: Pcg32,
}

impl GameState {
    /// Create a session with the given seed and balance data
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let player = Player::spawn(&tuning);
        let platforms = PlatformField::place(&mut rng, &tuning);
        Self {
            seed,
            tuning,
            phase: GamePhase::Running,
            player,
            platforms,
            score: 0,
            max_score: 0,
            super_jump: SuperJump::default(),
            bounced: false,
            time_ticks: 0,
            rng,
        }
    }

    /// Reset everything for a fresh run.
    ///
    /// The RNG stream continues, so a whole session stays reproducible from
    /// its seed across restarts.
    pub fn restart(&mut self) {
        self.player = Player::spawn(&self.tuning);
        self.platforms = PlatformField::place(&mut self.rng, &self.tuning);
        self.score = 0;
        self.max_score = 0;
        self.super_jump = SuperJump::default();
        self.bounced = false;
        self.phase = GamePhase::Running;
    }

    /// Award one bounce reward. The reward is always drawn so the RNG stream
    /// does not depend on the velocity sign; it only lands while ascending,
    /// and the ratchet raises `score` to meet `max_score`.
    pub fn accrue(&mut self) {
        let points = self.rng.random_range(0..self.tuning.max_bounce_points) as u64;
        if self.player.vel.y < 0.0 {
            self.max_score += points;
            if self.score < self.max_score {
                self.score = self.max_score;
            }
        }
    }
}
