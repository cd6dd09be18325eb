//! Data-driven game balance
//!
//! Everything the simulation treats as a constant lives in [`Tuning`], so a
//! session carries its own configuration instead of reading globals. Tests
//! and drivers build one with [`Tuning::default`] and hand it to the state.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::Rect;

/// Gameplay constants for one session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tuning {
    /// Logical board size in pixels
    pub board: Vec2,
    /// Player sprite size
    pub player_size: Vec2,
    /// Downward acceleration per tick
    pub gravity: f32,
    /// Impulse a bounce puts on the player (negative = up)
    pub jump_impulse: f32,
    /// Velocity multiplier while a super jump is active
    pub super_jump_factor: f32,
    /// Super jump window in milliseconds
    pub super_jump_duration_ms: f64,
    /// Horizontal speed set by steering input
    pub move_speed: f32,
    /// Platform size, shared by every platform
    pub platform_size: Vec2,
    /// Rows of randomized platforms placed above the base platform
    pub starting_rows: usize,
    /// Vertical distance between starting rows
    pub row_spacing: f32,
    /// Height of the first randomized row above the board bottom
    pub first_row_offset: f32,
    /// Height of the fixed base platform above the board bottom
    pub base_platform_offset: f32,
    /// Exclusive upper bound of the per-bounce score reward
    pub max_bounce_points: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            board: Vec2::new(BOARD_WIDTH, BOARD_HEIGHT),
            player_size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,
            super_jump_factor: SUPER_JUMP_FACTOR,
            super_jump_duration_ms: SUPER_JUMP_DURATION_MS,
            move_speed: MOVE_SPEED,
            platform_size: Vec2::new(PLATFORM_WIDTH, PLATFORM_HEIGHT),
            starting_rows: STARTING_ROWS,
            row_spacing: ROW_SPACING,
            first_row_offset: FIRST_ROW_OFFSET,
            base_platform_offset: BASE_PLATFORM_OFFSET,
            max_bounce_points: MAX_BOUNCE_POINTS,
        }
    }
}

impl Tuning {
    /// Player spawn position (top-left corner)
    pub fn spawn_pos(&self) -> Vec2 {
        Vec2::new(
            self.board.x / 2.0 - self.player_size.x / 2.0,
            self.board.y * 7.0 / 8.0 - self.player_size.y,
        )
    }

    /// Horizontal band platforms are randomly placed in: `[0, 3/4 * width)`
    pub fn spawn_band(&self) -> f32 {
        self.board.x * 3.0 / 4.0
    }

    /// Platforms scroll only while the player ascends above this line
    pub fn scroll_line(&self) -> f32 {
        self.board.y * 3.0 / 4.0
    }

    /// Position of the fixed base platform
    pub fn base_platform_pos(&self) -> Vec2 {
        Vec2::new(self.board.x / 2.0, self.board.y - self.base_platform_offset)
    }

    /// The whole board as a rect, for clearing
    pub fn board_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.board.x, self.board.y)
    }
}
