//! Level construction
//!
//! The layout is fixed; a seeded pass jitters collectible placement and
//! spin phase so runs look slightly different without affecting
//! reachability. Same seed, same level.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::collectible::{Collectible, CollectibleKind};
use super::enemy::Enemy;
use super::platform::Platform;
use crate::consts::*;

/// Everything the orchestrator owns besides the player
pub struct LevelEntities {
    pub platforms: Vec<Platform>,
    pub enemies: Vec<Enemy>,
    pub collectibles: Vec<Collectible>,
}

/// Player spawn point
pub const SPAWN_X: f32 = 60.0;
pub const SPAWN_Y: f32 = 550.0 - PLAYER_HEIGHT;

/// Build the level entity collections. Entities are created wholesale here
/// and replaced wholesale on reset.
pub fn build(seed: u64) -> LevelEntities {
    let mut rng = Pcg32::seed_from_u64(seed);

    let platforms = vec![
        // Ground runs with two pits
        Platform::fixed(0.0, 550.0, 640.0, 50.0),
        Platform::fixed(760.0, 550.0, 700.0, 50.0),
        Platform::fixed(1580.0, 550.0, 820.0, 50.0),
        // Steps and ledges
        Platform::fixed(320.0, 440.0, 120.0, 20.0),
        Platform::fixed(520.0, 360.0, 120.0, 20.0),
        Platform::fixed(900.0, 430.0, 140.0, 20.0),
        Platform::fixed(1150.0, 340.0, 120.0, 20.0),
        Platform::fixed(1750.0, 450.0, 120.0, 20.0),
        Platform::fixed(2000.0, 360.0, 120.0, 20.0),
        // Carriers over the pits
        Platform::moving(640.0, 500.0, 90.0, 60.0, 1.2),
        Platform::moving(1430.0, 470.0, 90.0, 100.0, 1.5),
    ];

    let enemies = vec![
        Enemy::new(400.0, 550.0 - ENEMY_HEIGHT, 300.0, 560.0),
        Enemy::new(900.0, 550.0 - ENEMY_HEIGHT, 800.0, 1100.0),
        Enemy::new(1250.0, 550.0 - ENEMY_HEIGHT, 1180.0, 1400.0),
        Enemy::new(1800.0, 550.0 - ENEMY_HEIGHT, 1650.0, 2000.0),
    ];

    let mut collectibles = vec![
        Collectible::new(CollectibleKind::Coin, 200.0, 490.0),
        Collectible::new(CollectibleKind::Coin, 360.0, 390.0),
        Collectible::new(CollectibleKind::Coin, 560.0, 310.0),
        Collectible::new(CollectibleKind::Coin, 960.0, 380.0),
        Collectible::new(CollectibleKind::Coin, 1470.0, 420.0),
        Collectible::new(CollectibleKind::Coin, 1790.0, 400.0),
        Collectible::new(CollectibleKind::Star, 1190.0, 280.0),
        Collectible::new(CollectibleKind::Heart, 1000.0, 500.0),
        Collectible::new(CollectibleKind::DoubleJump, 700.0, 420.0),
        Collectible::new(CollectibleKind::Star, 2040.0, 300.0),
    ];

    for collectible in &mut collectibles {
        collectible.pos.x += rng.random_range(-8.0..8.0);
        collectible.rotation = rng.random_range(0.0..std::f32::consts::TAU);
        collectible.bob = (collectible.rotation * 2.0).sin() * COLLECTIBLE_BOB_AMPLITUDE;
    }

    LevelEntities {
        platforms,
        enemies,
        collectibles,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_is_deterministic_per_seed() {
        let a = build(42);
        let b = build(42);
        assert_eq!(a.collectibles.len(), b.collectibles.len());
        for (x, y) in a.collectibles.iter().zip(&b.collectibles) {
            assert_eq!(x.pos, y.pos);
            assert_eq!(x.rotation, y.rotation);
        }
    }

    #[test]
    fn test_level_has_required_pickups() {
        let level = build(7);
        let kinds: Vec<_> = level.collectibles.iter().map(|c| c.kind).collect();
        assert!(kinds.contains(&CollectibleKind::Heart));
        assert!(kinds.contains(&CollectibleKind::DoubleJump));
        assert!(kinds.contains(&CollectibleKind::Coin));
        assert!(kinds.contains(&CollectibleKind::Star));
    }

    #[test]
    fn test_jitter_stays_in_safe_range() {
        let base = 700.0;
        for seed in 0..50 {
            let level = build(seed);
            let charm = level
                .collectibles
                .iter()
                .find(|c| c.kind == CollectibleKind::DoubleJump)
                .expect("charm present");
            assert!((charm.pos.x - base).abs() <= 8.0);
        }
    }
}
