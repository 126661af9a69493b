//! Axis-aligned collision primitive shared by every entity
//!
//! Overlap uses the strict half-open convention: rectangles that merely
//! touch along an edge do not collide. This is what lets a player stand
//! exactly on a platform top without re-triggering the landing resolution
//! every tick.

use glam::Vec2;

/// An axis-aligned bounding box (top-left origin, +y down)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Strict overlap test. Touching edges do not count.
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

/// Anything with a bounding box and an active flag
pub trait Body {
    fn aabb(&self) -> Aabb;
    fn is_active(&self) -> bool;
}

/// True iff both bodies are active and their boxes strictly overlap.
/// Symmetric, no side effects.
#[inline]
pub fn collides_with(a: &impl Body, b: &impl Body) -> bool {
    a.is_active() && b.is_active() && a.aabb().overlaps(&b.aabb())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    struct TestBody {
        aabb: Aabb,
        active: bool,
    }

    impl Body for TestBody {
        fn aabb(&self) -> Aabb {
            self.aabb
        }
        fn is_active(&self) -> bool {
            self.active
        }
    }

    fn body(x: f32, y: f32, w: f32, h: f32, active: bool) -> TestBody {
        TestBody {
            aabb: Aabb::new(x, y, w, h),
            active,
        }
    }

    #[test]
    fn test_overlap_basic() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        let b = Aabb::new(5.0, 5.0, 10.0, 10.0);
        assert!(a.overlaps(&b));

        let far = Aabb::new(100.0, 100.0, 10.0, 10.0);
        assert!(!a.overlaps(&far));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        // Shares the x=10 edge
        let right = Aabb::new(10.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&right));
        // Shares the y=10 edge (standing on top)
        let below = Aabb::new(0.0, 10.0, 10.0, 10.0);
        assert!(!a.overlaps(&below));
    }

    #[test]
    fn test_inactive_never_collides() {
        let a = body(0.0, 0.0, 10.0, 10.0, true);
        let b = body(5.0, 5.0, 10.0, 10.0, false);
        assert!(!collides_with(&a, &b));
        assert!(!collides_with(&b, &a));
    }

    proptest! {
        #[test]
        fn prop_collision_symmetric(
            ax in -500.0f32..500.0, ay in -500.0f32..500.0,
            aw in 1.0f32..100.0, ah in 1.0f32..100.0,
            bx in -500.0f32..500.0, by in -500.0f32..500.0,
            bw in 1.0f32..100.0, bh in 1.0f32..100.0,
            a_active: bool, b_active: bool,
        ) {
            let a = body(ax, ay, aw, ah, a_active);
            let b = body(bx, by, bw, bh, b_active);
            prop_assert_eq!(collides_with(&a, &b), collides_with(&b, &a));
            if !a_active || !b_active {
                prop_assert!(!collides_with(&a, &b));
            }
        }
    }
}
