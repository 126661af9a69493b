//! Fixed timestep simulation tick
//!
//! One call advances the world by one frame. Order matters: platforms
//! settle first so the player and enemies resolve against their final
//! positions for this tick.

use super::collectible::CollectibleKind;
use super::collision::collides_with;
use super::state::{GamePhase, GameState, TickInput};
use crate::consts::*;

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput) {
    // Handle pause toggle
    if input.pause {
        match state.phase {
            GamePhase::Running => {
                state.phase = GamePhase::Paused;
                return;
            }
            GamePhase::Paused => {
                state.phase = GamePhase::Running;
            }
            _ => {}
        }
    }

    if state.phase != GamePhase::Running {
        return;
    }

    state.time_ticks += 1;

    // Resolve input into the player's velocity command. Held keys are
    // level-triggered; opposing keys cancel.
    match (input.left, input.right) {
        (true, false) => state.player.move_left(),
        (false, true) => state.player.move_right(),
        _ => state.player.stop(),
    }
    if input.jump {
        state.player.jump();
    }

    // Movement and collision: platforms, then player, then enemies
    for platform in &mut state.platforms {
        platform.update();
    }
    state.player.update(&state.platforms, &mut state.enemies);
    for enemy in &mut state.enemies {
        enemy.update(&state.platforms);
    }

    // Collectible animation and pickups
    for collectible in &mut state.collectibles {
        collectible.update();
        if collectible.collected || !collides_with(&state.player, collectible) {
            continue;
        }
        let (kind, value) = collectible.collect();
        match kind {
            CollectibleKind::Heart => state.player.heal(1),
            CollectibleKind::DoubleJump => {
                state.player.has_double_jump = true;
                state.score += value;
            }
            CollectibleKind::Coin | CollectibleKind::Star => state.score += value,
        }
    }

    // Defeat bonus, exactly once per enemy no matter how long the defeat
    // animation runs
    for enemy in &mut state.enemies {
        if enemy.defeated && !enemy.scored {
            enemy.scored = true;
            state.score += ENEMY_DEFEAT_BONUS;
        }
    }

    state
        .camera
        .follow(state.player.pos.x + state.player.size.x / 2.0);

    // Terminal conditions
    if !state.player.active {
        state.phase = GamePhase::GameOver;
        state.high_score = state.high_score.max(state.score);
    } else if state.player.pos.x > GOAL_X {
        state.phase = GamePhase::GameWon;
        state.high_score = state.high_score.max(state.score);
    }
}
