//! Draw-list and HUD snapshot builders
//!
//! A pure read of simulation state: world positions become screen
//! positions through the camera offset, and each visible entity becomes
//! one draw command. No mutation, callable at any rate independent of the
//! tick rate.

use crate::consts::*;
use crate::sim::{CollectibleKind, GameState};

/// One shape for the frontend to fill
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Rect {
        /// Screen-space top-left
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: &'static str,
        /// Radians about the rect center
        rotation: f32,
        alpha: f32,
    },
    Circle {
        /// Screen-space center
        x: f32,
        y: f32,
        radius: f32,
        color: &'static str,
        alpha: f32,
    },
}

/// Scalar HUD values, one snapshot per frame
#[derive(Debug, Clone, PartialEq)]
pub struct Hud {
    pub score: u64,
    pub high_score: u64,
    pub health: u32,
    pub max_health: u32,
    /// 0..=100, floor of level completion
    pub progress_percent: u32,
    pub hint: &'static str,
}

/// Build the frame's draw list. `reduced_flicker` renders the invincible
/// player at half alpha instead of blinking it (accessibility setting).
pub fn draw_list(state: &GameState, reduced_flicker: bool) -> Vec<DrawCommand> {
    let camera = &state.camera;
    let mut commands = Vec::with_capacity(
        state.platforms.len() + state.enemies.len() + state.collectibles.len() + 2,
    );

    let visible = |left: f32, right: f32| right >= camera.offset && left <= camera.offset + VIEW_WIDTH;

    for platform in state.platforms.iter().filter(|p| p.active) {
        if !visible(platform.pos.x, platform.pos.x + platform.size.x) {
            continue;
        }
        commands.push(DrawCommand::Rect {
            x: camera.to_screen_x(platform.pos.x),
            y: platform.pos.y,
            width: platform.size.x,
            height: platform.size.y,
            color: platform.color,
            rotation: 0.0,
            alpha: 1.0,
        });
    }

    // Goal post at the win threshold
    if visible(GOAL_X, GOAL_X + 10.0) {
        commands.push(DrawCommand::Rect {
            x: camera.to_screen_x(GOAL_X),
            y: 550.0 - 140.0,
            width: 10.0,
            height: 140.0,
            color: "#f2f2f2",
            rotation: 0.0,
            alpha: 1.0,
        });
    }

    for collectible in state.collectibles.iter().filter(|c| c.active) {
        if !visible(collectible.pos.x, collectible.pos.x + collectible.size.x) {
            continue;
        }
        let cx = camera.to_screen_x(collectible.pos.x + collectible.size.x / 2.0);
        let cy = collectible.pos.y + collectible.size.y / 2.0 + collectible.bob;
        match collectible.kind {
            CollectibleKind::Coin | CollectibleKind::Star => {
                commands.push(DrawCommand::Circle {
                    x: cx,
                    y: cy,
                    radius: collectible.size.x / 2.0,
                    color: collectible.kind.color(),
                    alpha: 1.0,
                });
            }
            CollectibleKind::Heart | CollectibleKind::DoubleJump => {
                commands.push(DrawCommand::Rect {
                    x: camera.to_screen_x(collectible.pos.x),
                    y: collectible.pos.y + collectible.bob,
                    width: collectible.size.x,
                    height: collectible.size.y,
                    color: collectible.kind.color(),
                    rotation: collectible.rotation,
                    alpha: 1.0,
                });
            }
        }
    }

    for enemy in state.enemies.iter().filter(|e| e.active) {
        if !visible(enemy.pos.x, enemy.pos.x + enemy.size.x) {
            continue;
        }
        // The defeat "spin" lives entirely here; the sim only times removal
        let t = enemy.defeat_ticks as f32 / ENEMY_DEFEAT_TICKS as f32;
        let (rotation, alpha) = if enemy.defeated {
            (t * std::f32::consts::TAU, 1.0 - t)
        } else {
            (0.0, 1.0)
        };
        commands.push(DrawCommand::Rect {
            x: camera.to_screen_x(enemy.pos.x),
            y: enemy.pos.y,
            width: enemy.size.x,
            height: enemy.size.y,
            color: enemy.color,
            rotation,
            alpha,
        });
    }

    if let Some(command) = player_command(state, reduced_flicker) {
        commands.push(command);
    }

    commands
}

/// The player's draw command, or `None` on a flicker skip-frame
fn player_command(state: &GameState, reduced_flicker: bool) -> Option<DrawCommand> {
    let player = &state.player;
    if !player.active {
        return None;
    }

    let mut alpha = 1.0;
    if player.is_invincible() {
        if reduced_flicker {
            alpha = 0.5;
        } else if (player.invincible_ticks / FLICKER_WINDOW) % 2 == 0 {
            // Hidden window of the blink
            return None;
        }
    }

    Some(DrawCommand::Rect {
        x: state.camera.to_screen_x(player.pos.x),
        y: player.pos.y,
        width: player.size.x,
        height: player.size.y,
        color: player.color,
        rotation: 0.0,
        alpha,
    })
}

/// Build the frame's HUD snapshot
pub fn hud(state: &GameState) -> Hud {
    Hud {
        score: state.score,
        high_score: state.high_score,
        health: state.player.health,
        max_health: MAX_HEALTH,
        progress_percent: state.progress_percent(),
        hint: if state.player.has_double_jump {
            "Double jump unlocked: press jump again in mid-air"
        } else {
            "Reach the flag! Grab the purple charm to unlock double jump"
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GameState;

    #[test]
    fn test_collected_items_never_render() {
        let mut state = GameState::new(1);
        let before = draw_list(&state, false).len();
        state.collectibles[0].collect();
        let after = draw_list(&state, false).len();
        assert_eq!(after, before - 1);
    }

    #[test]
    fn test_flicker_hides_player_on_alternating_windows() {
        let mut state = GameState::new(1);
        state.player.invincible_ticks = FLICKER_WINDOW * 3; // odd window: visible
        assert!(player_command(&state, false).is_some());

        state.player.invincible_ticks = FLICKER_WINDOW * 2; // even window: hidden
        assert!(player_command(&state, false).is_none());

        // Reduced flicker never hides, only dims
        match player_command(&state, true) {
            Some(DrawCommand::Rect { alpha, .. }) => assert_eq!(alpha, 0.5),
            other => panic!("expected player rect, got {other:?}"),
        }
    }

    #[test]
    fn test_draw_positions_use_camera_offset() {
        let mut state = GameState::new(1);
        state.player.pos.x = 1200.0;
        state.camera.follow(1200.0 + state.player.size.x / 2.0);

        let command = player_command(&state, false).expect("player visible");
        match command {
            DrawCommand::Rect { x, .. } => {
                assert_eq!(x, 1200.0 - state.camera.offset);
            }
            other => panic!("expected rect, got {other:?}"),
        }
    }

    #[test]
    fn test_offscreen_entities_are_culled() {
        let state = GameState::new(1);
        // Camera at the level start: everything drawn sits on or near the
        // viewport, and the far goal post is absent
        let commands = draw_list(&state, false);
        for command in &commands {
            let x = match command {
                DrawCommand::Rect { x, .. } => *x,
                DrawCommand::Circle { x, .. } => *x,
            };
            assert!(x < VIEW_WIDTH + 1.0, "command past the viewport: {command:?}");
        }
        assert!(!commands.iter().any(|c| matches!(
            c,
            DrawCommand::Rect { color: "#f2f2f2", .. }
        )));
    }

    #[test]
    fn test_hud_hint_changes_with_charm() {
        let mut state = GameState::new(1);
        let before = hud(&state).hint;
        state.player.has_double_jump = true;
        let after = hud(&state).hint;
        assert_ne!(before, after);
    }
}
