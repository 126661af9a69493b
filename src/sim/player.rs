//! The player: input-driven velocity, gravity, jumps, health

use glam::Vec2;

use super::collision::{Aabb, Body, collides_with};
use super::enemy::Enemy;
use super::platform::Platform;
use crate::consts::*;

/// The only entity driven by input. Horizontal commands are level-triggered:
/// `move_left`/`move_right`/`stop` set a velocity that persists until the
/// next command.
#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec2,
    pub size: Vec2,
    pub active: bool,
    pub color: &'static str,
    pub vel: Vec2,
    pub speed: f32,
    pub jump_impulse: f32,
    pub on_ground: bool,
    pub health: u32,
    /// Remaining invincibility frames after damage (0 = vulnerable)
    pub invincible_ticks: u32,
    /// Unlocked by the double-jump charm
    pub has_double_jump: bool,
    /// One-shot mid-air jump charge, refilled on landing
    pub double_jump_available: bool,
}

impl Player {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            active: true,
            color: "#3d7dd8",
            vel: Vec2::ZERO,
            speed: PLAYER_SPEED,
            jump_impulse: PLAYER_JUMP_IMPULSE,
            on_ground: false,
            health: MAX_HEALTH,
            invincible_ticks: 0,
            has_double_jump: false,
            double_jump_available: true,
        }
    }

    #[inline]
    pub fn is_invincible(&self) -> bool {
        self.invincible_ticks > 0
    }

    /// Advance one frame: integrate, resolve platforms, resolve enemies,
    /// clamp to level bounds, apply the fatal fall check, run the
    /// invincibility timer.
    pub fn update(&mut self, platforms: &[Platform], enemies: &mut [Enemy]) {
        if !self.active {
            return;
        }

        self.vel.y += GRAVITY;
        self.pos += self.vel;

        // Displacement actually applied this step; resolution below infers
        // the collision side from the pre-step edge positions. This is an
        // ordered-tolerance heuristic, not continuous collision - fast
        // movers can tunnel through thin geometry.
        let step = self.vel;

        let was_on_ground = self.on_ground;
        self.on_ground = false;
        self.resolve_platforms(platforms, step);
        if !was_on_ground && self.on_ground {
            self.double_jump_available = true;
        }

        self.resolve_enemies(enemies, step);

        // Level horizontal bounds
        if self.pos.x < 0.0 {
            self.pos.x = 0.0;
            self.vel.x = 0.0;
        } else if self.pos.x + self.size.x > LEVEL_WIDTH {
            self.pos.x = LEVEL_WIDTH - self.size.x;
            self.vel.x = 0.0;
        }

        // Fatal fall
        if self.pos.y > DEATH_Y {
            self.health = 0;
            self.active = false;
        }

        if self.invincible_ticks > 0 {
            self.invincible_ticks -= 1;
        }
    }

    /// Ordered resolution per overlapping platform, first match wins:
    /// top landing, ceiling bump, right wall, left wall.
    fn resolve_platforms(&mut self, platforms: &[Platform], step: Vec2) {
        for platform in platforms.iter().filter(|p| p.active) {
            let plat = platform.aabb();
            if !self.aabb().overlaps(&plat) {
                continue;
            }

            let prev_bottom = self.aabb().bottom() - step.y;
            let prev_top = self.aabb().top() - step.y;

            if step.y > 0.0 && prev_bottom <= plat.top() + PLATFORM_LAND_SLOP {
                // Falling onto the top: land
                self.pos.y = plat.top() - self.size.y;
                self.vel.y = 0.0;
                self.on_ground = true;
            } else if step.y < 0.0 && prev_top >= plat.bottom() - PLATFORM_LAND_SLOP {
                // Rising into the underside: bump
                self.pos.y = plat.bottom();
                self.vel.y = 0.0;
            } else if step.x > 0.0 {
                self.pos.x = plat.left() - self.size.x;
                self.vel.x = 0.0;
            } else if step.x < 0.0 {
                self.pos.x = plat.right();
                self.vel.x = 0.0;
            }
        }
    }

    /// Stomp or get hurt. Skipped entirely while invincible.
    fn resolve_enemies(&mut self, enemies: &mut [Enemy], step: Vec2) {
        for enemy in enemies.iter_mut() {
            if self.is_invincible() {
                return;
            }
            if enemy.defeated || !collides_with(self, enemy) {
                continue;
            }

            let prev_bottom = self.aabb().bottom() - step.y;
            if step.y > 0.0 && prev_bottom <= enemy.aabb().top() + ENEMY_STOMP_SLOP {
                enemy.defeat();
                self.vel.y = -STOMP_BOUNCE;
            } else {
                self.take_damage();
            }
        }
    }

    /// Lose one health and start the invincibility window. No-op while
    /// already invincible.
    pub fn take_damage(&mut self) {
        if self.is_invincible() {
            return;
        }
        self.health = self.health.saturating_sub(1);
        self.invincible_ticks = INVINCIBLE_TICKS;
        if self.health == 0 {
            self.active = false;
        }
    }

    /// Restore health, clamped to the maximum.
    pub fn heal(&mut self, amount: u32) {
        self.health = (self.health + amount).min(MAX_HEALTH);
    }

    /// Grounded jump, or the one-shot mid-air jump if the charm is held
    /// and the charge is available. No-op otherwise.
    pub fn jump(&mut self) {
        if self.on_ground {
            self.vel.y = -self.jump_impulse;
            self.on_ground = false;
        } else if self.has_double_jump && self.double_jump_available {
            self.vel.y = -self.jump_impulse;
            self.double_jump_available = false;
        }
    }

    pub fn move_left(&mut self) {
        self.vel.x = -self.speed;
    }

    pub fn move_right(&mut self) {
        self.vel.x = self.speed;
    }

    pub fn stop(&mut self) {
        self.vel.x = 0.0;
    }
}

impl Body for Player {
    fn aabb(&self) -> Aabb {
        Aabb {
            pos: self.pos,
            size: self.size,
        }
    }
    fn is_active(&self) -> bool {
        self.active
    }
}
