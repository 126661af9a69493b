//! Collectibles: coins, stars, hearts and the double-jump charm

use glam::Vec2;

use super::collision::{Aabb, Body};
use crate::consts::*;

/// The closed set of collectible variants. Point values and colors are
/// fixed per kind; an invalid kind is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectibleKind {
    Coin,
    Star,
    /// Heal-only, worth no points
    Heart,
    /// Unlocks the mid-air jump
    DoubleJump,
}

impl CollectibleKind {
    /// Points awarded on pickup (0 for heal-only kinds)
    pub fn value(&self) -> u64 {
        match self {
            CollectibleKind::Coin => COIN_VALUE,
            CollectibleKind::Star => STAR_VALUE,
            CollectibleKind::Heart => 0,
            CollectibleKind::DoubleJump => DOUBLE_JUMP_VALUE,
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            CollectibleKind::Coin => "#ffd23f",
            CollectibleKind::Star => "#fff3b0",
            CollectibleKind::Heart => "#e63946",
            CollectibleKind::DoubleJump => "#7b5ce0",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Collectible {
    pub kind: CollectibleKind,
    pub pos: Vec2,
    pub size: Vec2,
    pub active: bool,
    pub collected: bool,
    /// Spin angle, radians; also drives the bob phase
    pub rotation: f32,
    /// Derived vertical offset for rendering, recomputed each tick
    pub bob: f32,
}

impl Collectible {
    pub fn new(kind: CollectibleKind, x: f32, y: f32) -> Self {
        Self {
            kind,
            pos: Vec2::new(x, y),
            size: Vec2::splat(COLLECTIBLE_SIZE),
            active: true,
            collected: false,
            rotation: 0.0,
            bob: 0.0,
        }
    }

    /// Advance the spin/bob animation. Collected items stay frozen.
    pub fn update(&mut self) {
        if self.collected {
            return;
        }
        self.rotation += COLLECTIBLE_SPIN_STEP;
        self.bob = (self.rotation * 2.0).sin() * COLLECTIBLE_BOB_AMPLITUDE;
    }

    /// Mark collected and return what the orchestrator should apply.
    /// Callers must check `collected` first; a collected item never
    /// re-activates.
    pub fn collect(&mut self) -> (CollectibleKind, u64) {
        self.collected = true;
        self.active = false;
        (self.kind, self.kind.value())
    }
}

impl Body for Collectible {
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

    #[test]
    fn test_bob_is_derived_from_rotation() {
        let mut c = Collectible::new(CollectibleKind::Coin, 100.0, 200.0);
        for _ in 0..10 {
            c.update();
        }
        let expected = (c.rotation * 2.0).sin() * COLLECTIBLE_BOB_AMPLITUDE;
        assert!((c.bob - expected).abs() < 1e-6);
    }

    #[test]
    fn test_collect_deactivates_forever() {
        let mut c = Collectible::new(CollectibleKind::Star, 0.0, 0.0);
        let (kind, value) = c.collect();
        assert_eq!(kind, CollectibleKind::Star);
        assert_eq!(value, STAR_VALUE);
        assert!(c.collected);
        assert!(!c.active);

        let rotation = c.rotation;
        c.update();
        assert_eq!(c.rotation, rotation);
        assert!(!c.active);
    }

    #[test]
    fn test_heart_is_worth_no_points() {
        assert_eq!(CollectibleKind::Heart.value(), 0);
        assert!(CollectibleKind::Coin.value() > 0);
        assert!(CollectibleKind::DoubleJump.value() > 0);
    }
}
