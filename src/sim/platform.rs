//! Platforms: static standing surfaces, some oscillating horizontally

use glam::Vec2;

use super::collision::{Aabb, Body};

/// A standing surface. Moving platforms oscillate between `anchor_x` and
/// `anchor_x + range`, clamping exactly at either bound.
#[derive(Debug, Clone)]
pub struct Platform {
    pub pos: Vec2,
    pub size: Vec2,
    pub active: bool,
    pub color: &'static str,
    pub moving: bool,
    /// Original x, the left oscillation bound
    pub anchor_x: f32,
    /// Oscillation distance (right bound is `anchor_x + range`)
    pub range: f32,
    /// Pixels per frame while moving
    pub speed: f32,
    /// +1 right, -1 left
    pub direction: f32,
}

impl Platform {
    pub fn fixed(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
            active: true,
            color: "#5a8f3c",
            moving: false,
            anchor_x: x,
            range: 0.0,
            speed: 0.0,
            direction: 1.0,
        }
    }

    pub fn moving(x: f32, y: f32, width: f32, range: f32, speed: f32) -> Self {
        Self {
            moving: true,
            range,
            speed,
            color: "#8f6b3c",
            ..Self::fixed(x, y, width, 20.0)
        }
    }

    /// Advance one frame. Static platforms no-op.
    pub fn update(&mut self) {
        if !self.moving {
            return;
        }
        self.pos.x += self.speed * self.direction;
        if self.pos.x >= self.anchor_x + self.range {
            self.pos.x = self.anchor_x + self.range;
            self.direction = -1.0;
        } else if self.pos.x <= self.anchor_x {
            self.pos.x = self.anchor_x;
            self.direction = 1.0;
        }
    }
}

impl Body for Platform {
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

    #[test]
    fn test_static_platform_never_moves() {
        let mut p = Platform::fixed(100.0, 550.0, 200.0, 20.0);
        for _ in 0..100 {
            p.update();
        }
        assert_eq!(p.pos.x, 100.0);
    }

    #[test]
    fn test_moving_platform_clamps_at_bounds() {
        let mut p = Platform::moving(100.0, 400.0, 80.0, 50.0, 3.0);
        // 50 / 3 = 16.67 steps to the right bound; the 17th would overshoot
        for _ in 0..17 {
            p.update();
        }
        assert_eq!(p.pos.x, 150.0);
        assert_eq!(p.direction, -1.0);

        // Head back and clamp at the anchor
        for _ in 0..17 {
            p.update();
        }
        assert_eq!(p.pos.x, 100.0);
        assert_eq!(p.direction, 1.0);
    }

    proptest! {
        #[test]
        fn prop_moving_platform_stays_in_range(
            range in 10.0f32..200.0,
            speed in 0.5f32..8.0,
            steps in 0usize..500,
        ) {
            let mut p = Platform::moving(300.0, 400.0, 80.0, range, speed);
            for _ in 0..steps {
                p.update();
                prop_assert!(p.pos.x >= 300.0 - 1e-3);
                prop_assert!(p.pos.x <= 300.0 + range + 1e-3);
            }
        }
    }
}
