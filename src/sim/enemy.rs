//! Patrolling enemies

use glam::Vec2;

use super::collision::{Aabb, Body};
use super::platform::Platform;
use crate::consts::*;

/// Walks back and forth between its patrol bounds, falls under gravity and
/// rests on platform tops. Enemies do not collide with platform walls.
#[derive(Debug, Clone)]
pub struct Enemy {
    pub pos: Vec2,
    pub size: Vec2,
    pub active: bool,
    pub color: &'static str,
    /// Horizontal speed magnitude, pixels per frame
    pub speed: f32,
    /// +1 right, -1 left
    pub direction: f32,
    pub vy: f32,
    /// Patrol interval for `pos.x`
    pub patrol_start: f32,
    pub patrol_end: f32,
    pub defeated: bool,
    /// Frames since defeat; removal happens at `ENEMY_DEFEAT_TICKS`
    pub defeat_ticks: u32,
    /// Set once the defeat bonus has been awarded
    pub scored: bool,
}

impl Enemy {
    pub fn new(x: f32, y: f32, patrol_start: f32, patrol_end: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(ENEMY_WIDTH, ENEMY_HEIGHT),
            active: true,
            color: "#c3423f",
            speed: ENEMY_SPEED,
            direction: 1.0,
            vy: 0.0,
            patrol_start,
            patrol_end,
            defeated: false,
            defeat_ticks: 0,
            scored: false,
        }
    }

    /// Advance one frame. While defeated only the removal timer runs; the
    /// death spin is render-only.
    pub fn update(&mut self, platforms: &[Platform]) {
        if !self.active {
            return;
        }
        if self.defeated {
            self.defeat_ticks += 1;
            if self.defeat_ticks >= ENEMY_DEFEAT_TICKS {
                self.active = false;
            }
            return;
        }

        self.vy += GRAVITY;
        self.pos.y += self.vy;
        self.pos.x += self.speed * self.direction;

        // Rest on platform tops (top-edge heuristic only)
        let aabb = self.aabb();
        for platform in platforms.iter().filter(|p| p.active) {
            let plat = platform.aabb();
            if !aabb.overlaps(&plat) {
                continue;
            }
            let prev_bottom = aabb.bottom() - self.vy;
            if self.vy > 0.0 && prev_bottom <= plat.top() + PLATFORM_LAND_SLOP {
                self.pos.y = plat.top() - self.size.y;
                self.vy = 0.0;
                break;
            }
        }

        // Clamp exactly at patrol bounds and turn around
        if self.pos.x >= self.patrol_end {
            self.pos.x = self.patrol_end;
            self.direction = -1.0;
        } else if self.pos.x <= self.patrol_start {
            self.pos.x = self.patrol_start;
            self.direction = 1.0;
        }
    }

    /// Enter the defeated state. Idempotent: overlapping resolution paths
    /// may call this twice in one tick without restarting the timer.
    pub fn defeat(&mut self) {
        if self.defeated {
            return;
        }
        self.defeated = true;
        self.defeat_ticks = 0;
    }
}

impl Body for Enemy {
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

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn grounded_enemy() -> (Enemy, Vec<Platform>) {
        let platforms = vec![Platform::fixed(0.0, 500.0, 1000.0, 20.0)];
        let enemy = Enemy::new(400.0, 500.0 - ENEMY_HEIGHT, 300.0, 600.0);
        (enemy, platforms)
    }

    #[test]
    fn test_patrol_turns_at_bounds() {
        let (mut enemy, platforms) = grounded_enemy();
        enemy.direction = 1.0;
        // 100 px to the right bound at 2 px/frame
        for _ in 0..100 {
            enemy.update(&platforms);
        }
        assert_eq!(enemy.pos.x, 600.0);
        assert_eq!(enemy.direction, -1.0);
    }

    #[test]
    fn test_defeat_is_idempotent() {
        let (mut enemy, platforms) = grounded_enemy();
        enemy.defeat();
        for _ in 0..10 {
            enemy.update(&platforms);
        }
        assert_eq!(enemy.defeat_ticks, 10);

        // A second defeat in the same tick must not restart the timer
        enemy.defeat();
        assert_eq!(enemy.defeat_ticks, 10);
    }

    #[test]
    fn test_defeated_enemy_removed_after_timeout() {
        let (mut enemy, platforms) = grounded_enemy();
        let x = enemy.pos.x;
        enemy.defeat();
        for _ in 0..ENEMY_DEFEAT_TICKS {
            assert!(enemy.active);
            enemy.update(&platforms);
        }
        assert!(!enemy.active);
        // No horizontal motion while defeated
        assert_eq!(enemy.pos.x, x);
    }

    proptest! {
        #[test]
        fn prop_enemy_stays_in_patrol_bounds(steps in 0usize..600) {
            let (mut enemy, platforms) = grounded_enemy();
            for _ in 0..steps {
                enemy.update(&platforms);
                prop_assert!(enemy.pos.x >= enemy.patrol_start);
                prop_assert!(enemy.pos.x <= enemy.patrol_end);
            }
        }
    }
}
