//! Per-frame simulation step
//!
//! One tick runs per driver frame and advances the whole session: input,
//! horizontal wrap, vertical physics, platform scroll/recycle, bounce
//! resolution, and score accrual. The driver passes the wall clock in; the
//! super-jump deadline is the only thing compared against it.

use super::state::{Facing, GamePhase, GameState};

/// Input gathered by the driver since the previous tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Steer left/right: sets horizontal velocity and facing
    pub steer: Option<Facing>,
    /// The action key: super jump while running, restart after a game over
    pub action: bool,
}

/// Advance the session by one frame
pub fn tick(state: &mut GameState, input: &TickInput, now_ms: f64) {
    if state.phase == GamePhase::GameOver {
        // Simulation is suspended; the action key restarts instead of
        // boosting.
        if input.action {
            state.restart();
        }
        return;
    }

    if input.action {
        state
            .super_jump
            .activate(now_ms, state.tuning.super_jump_duration_ms);
    }
    if let Some(dir) = input.steer {
        state.player.steer(dir, state.tuning.move_speed);
    }

    state.time_ticks += 1;
    state.bounced = false;

    state.player.advance_and_wrap(state.tuning.board.x);

    integrate_vertical(state);
    apply_super_jump(state, now_ms);
    scroll_field(state);
    resolve_bounces(state);
    state.platforms.recycle(&mut state.rng, &state.tuning);

    if state.bounced {
        state.accrue();
    }
}

/// Gravity integration and the bottom-edge game-over check. The tick that
/// detects the fall still runs to completion; suspension starts next tick.
fn integrate_vertical(state: &mut GameState) {
    state.player.vel.y += state.tuning.gravity;
    state.player.pos.y += state.player.vel.y;

    if state.player.pos.y > state.tuning.board.y {
        state.phase = GamePhase::GameOver;
    }
}

/// Expire the boost window, then either hold vy at the boosted impulse or
/// apply the fall-speed cap.
fn apply_super_jump(state: &mut GameState, now_ms: f64) {
    state.super_jump.expire_if_due(now_ms);

    let j = state.tuning.jump_impulse;
    if state.super_jump.active {
        state.player.vel.y = j * state.tuning.super_jump_factor;
    } else if state.player.vel.y > j {
        // fall-speed cap
        state.player.vel.y = state.player.vel.y.max(j);
    }
}

/// While the player ascends above the scroll line, the world slides down by
/// the bounce impulse magnitude.
fn scroll_field(state: &mut GameState) {
    if state.player.vel.y < 0.0 && state.player.pos.y < state.tuning.scroll_line() {
        state.platforms.scroll_down(-state.tuning.jump_impulse);
    }
}

/// A platform under a descending player turns the fall into a bounce. The
/// bounce always resets to the base impulse, boosted or not.
fn resolve_bounces(state: &mut GameState) {
    let player_rect = state.player.rect();
    let size = state.tuning.platform_size;
    let j = state.tuning.jump_impulse;

    for platform in state.platforms.iter() {
        if state.player.vel.y >= 0.0 && player_rect.overlaps(&platform.rect(size)) {
            state.player.vel.y = j;
            state.bounced = true;
        }
    }
}
