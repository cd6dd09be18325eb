//! Sky Hop - an endless single-screen platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, platform field, session state)
//! - `renderer`: Sprite drawing seam (canvas 2d on wasm)
//! - `tuning`: Data-driven game balance

pub mod renderer;
pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Logical board size in pixels
    pub const BOARD_WIDTH: f32 = 956.0;
    pub const BOARD_HEIGHT: f32 = 716.0;

    /// Player sprite size, fixed for the session lifetime
    pub const PLAYER_WIDTH: f32 = 110.0;
    pub const PLAYER_HEIGHT: f32 = 110.0;

    /// Downward acceleration per tick
    pub const GRAVITY: f32 = 0.4;
    /// Impulse a bounce puts on the player (negative = up)
    pub const JUMP_IMPULSE: f32 = -8.0;
    /// Velocity multiplier while a super jump is active
    pub const SUPER_JUMP_FACTOR: f32 = 1.1;
    /// Super jump window in milliseconds
    pub const SUPER_JUMP_DURATION_MS: f64 = 90.0;
    /// Horizontal speed set by steering input
    pub const MOVE_SPEED: f32 = 4.0;

    /// Platform size, shared by every platform
    pub const PLATFORM_WIDTH: f32 = 160.0;
    pub const PLATFORM_HEIGHT: f32 = 70.0;
    /// Rows of randomized platforms placed above the base platform
    pub const STARTING_ROWS: usize = 6;
    /// Vertical distance between starting rows
    pub const ROW_SPACING: f32 = 75.0;
    /// Height of the first randomized row above the board bottom
    pub const FIRST_ROW_OFFSET: f32 = 150.0;
    /// Height of the fixed base platform above the board bottom
    pub const BASE_PLATFORM_OFFSET: f32 = 50.0;

    /// Exclusive upper bound of the per-bounce score reward
    pub const MAX_BOUNCE_POINTS: u32 = 50;
}
