//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one tick = one frame at 60 Hz)
//! - Seeded RNG only (level variation)
//! - No rendering or platform dependencies

pub mod camera;
pub mod collectible;
pub mod collision;
pub mod enemy;
pub mod level;
pub mod platform;
pub mod player;
pub mod state;
pub mod tick;

pub use camera::Camera;
pub use collectible::{Collectible, CollectibleKind};
pub use collision::Aabb;
pub use enemy::Enemy;
pub use platform::Platform;
pub use player::Player;
pub use state::{GamePhase, GameState, TickInput};
pub use tick::tick;
