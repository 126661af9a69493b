//! Skyreach - A side-scrolling platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, game state)
//! - `render`: Draw-list and HUD snapshot builders (pure data, no platform calls)
//! - `highscores`: Persisted leaderboard
//! - `settings`: Persisted preferences

pub mod highscores;
pub mod render;
pub mod settings;
pub mod sim;

pub use highscores::HighScores;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, frame-count timers throughout)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 5;

    /// Viewport dimensions (canvas size in CSS pixels)
    pub const VIEW_WIDTH: f32 = 800.0;
    pub const VIEW_HEIGHT: f32 = 600.0;

    /// Level dimensions
    pub const LEVEL_WIDTH: f32 = 2400.0;
    /// Crossing this x wins the run
    pub const GOAL_X: f32 = 2250.0;
    /// Falling past this y is fatal
    pub const DEATH_Y: f32 = 650.0;

    /// Player defaults (pixels and pixels/frame)
    pub const PLAYER_WIDTH: f32 = 32.0;
    pub const PLAYER_HEIGHT: f32 = 48.0;
    pub const PLAYER_SPEED: f32 = 5.0;
    pub const PLAYER_JUMP_IMPULSE: f32 = 15.0;
    pub const GRAVITY: f32 = 0.8;
    pub const MAX_HEALTH: u32 = 5;
    /// Invincibility window after taking damage (frames)
    pub const INVINCIBLE_TICKS: u32 = 90;
    /// Upward impulse applied when bouncing off a stomped enemy
    pub const STOMP_BOUNCE: f32 = 8.0;

    /// Landing tolerance: how far past a platform top the player's previous
    /// bottom edge may have sunk and still count as "falling onto" it
    pub const PLATFORM_LAND_SLOP: f32 = 10.0;
    /// Same heuristic for stomping enemies, shallower on purpose
    pub const ENEMY_STOMP_SLOP: f32 = 6.0;

    /// Enemy defaults
    pub const ENEMY_WIDTH: f32 = 36.0;
    pub const ENEMY_HEIGHT: f32 = 36.0;
    pub const ENEMY_SPEED: f32 = 2.0;
    /// Frames between defeat and removal (render spins during this window)
    pub const ENEMY_DEFEAT_TICKS: u32 = 30;
    /// One-time score bonus per defeated enemy
    pub const ENEMY_DEFEAT_BONUS: u64 = 25;

    /// Collectible defaults
    pub const COLLECTIBLE_SIZE: f32 = 24.0;
    pub const COLLECTIBLE_SPIN_STEP: f32 = 0.05;
    pub const COLLECTIBLE_BOB_AMPLITUDE: f32 = 6.0;
    pub const COIN_VALUE: u64 = 10;
    pub const STAR_VALUE: u64 = 30;
    pub const DOUBLE_JUMP_VALUE: u64 = 50;

    /// Invincibility flicker: the player is hidden on alternating windows
    /// of this many frames
    pub const FLICKER_WINDOW: u32 = 4;
}
