//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per driver frame; the wall clock is passed in, never read
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod field;
pub mod geom;
pub mod state;
pub mod tick;

pub use field::{Platform, PlatformField};
pub use geom::Rect;
pub use state::{Facing, GamePhase, GameState, Player, SuperJump};
pub use tick::{TickInput, tick};
