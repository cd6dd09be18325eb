//! Drawing seam
//!
//! The simulation never draws; the driver hands a [`GameState`] to
//! [`draw_frame`], which talks to an opaque [`DrawSurface`]. The wasm build
//! provides a canvas-2d surface; tests use a recording stub.

#[cfg(target_arch = "wasm32")]
pub mod canvas;

use crate::sim::{Facing, GamePhase, GameState, Rect};

/// Opaque sprite identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sprite {
    PlayerRight,
    PlayerLeft,
    Platform,
}

/// The drawing primitives the game needs from a backend
pub trait DrawSurface {
    /// Clear a region of the board
    fn clear(&mut self, region: Rect);
    /// Draw a sprite stretched to `rect`
    fn sprite(&mut self, sprite: Sprite, rect: Rect);
    /// Draw overlay text with its baseline starting at (x, y)
    fn text(&mut self, text: &str, x: f32, y: f32);
}

/// Overlay shown while the session is in game over
pub const GAME_OVER_MESSAGE: &str = "Game Over: Press 'Space' to Restart";

/// Draw one frame: board clear, player, platforms, score, game-over overlay.
///
/// Runs every frame, including after a game over, so the final frame and
/// its overlay keep being shown.
pub fn draw_frame(state: &GameState, surface: &mut impl DrawSurface) {
    let tuning = &state.tuning;
    surface.clear(tuning.board_rect());

    let player_sprite = match state.player.facing {
        Facing::Right => Sprite::PlayerRight,
        Facing::Left => Sprite::PlayerLeft,
    };
    surface.sprite(player_sprite, state.player.rect());

    for platform in state.platforms.iter() {
        surface.sprite(Sprite::Platform, platform.rect(tuning.platform_size));
    }

    surface.text(&state.score.to_string(), 5.0, 20.0);

    if state.phase == GamePhase::GameOver {
        surface.text(
            GAME_OVER_MESSAGE,
            tuning.board.x / 7.0,
            tuning.board.y * 7.0 / 8.0,
        );
    }
}
