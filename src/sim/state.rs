//! Game state and orchestrator-owned collections

use super::camera::Camera;
use super::collectible::Collectible;
use super::enemy::Enemy;
use super::level;
use super::platform::Platform;
use super::player::Player;
use crate::consts::*;

/// Current phase of gameplay.
///
/// `Idle -> Running <-> Paused`; the terminal phases are reachable only
/// from `Running` and exit only through `reset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Constructed but not started
    Idle,
    /// Ticking
    Running,
    /// Frozen, state preserved
    Paused,
    /// Player died
    GameOver,
    /// Player reached the goal
    GameWon,
}

/// Input commands for a single tick.
///
/// `left`/`right` are level-triggered key state; `jump` and `pause` are
/// one-shot edge flags the frontend clears after the tick consumes them.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub pause: bool,
}

/// Complete game state. The orchestrator exclusively owns the player and
/// the three entity collections; entities never reference each other's
/// collections.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Level variation seed
    pub seed: u64,
    pub phase: GamePhase,
    pub score: u64,
    /// Best score seen; the one piece of state that survives `reset`
    pub high_score: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub player: Player,
    pub platforms: Vec<Platform>,
    pub enemies: Vec<Enemy>,
    pub collectibles: Vec<Collectible>,
    pub camera: Camera,
}

impl GameState {
    /// Create a fresh game in `Idle` with level entities built for `seed`.
    pub fn new(seed: u64) -> Self {
        let entities = level::build(seed);
        Self {
            seed,
            phase: GamePhase::Idle,
            score: 0,
            high_score: 0,
            time_ticks: 0,
            player: Player::new(level::SPAWN_X, level::SPAWN_Y),
            platforms: entities.platforms,
            enemies: entities.enemies,
            collectibles: entities.collectibles,
            camera: Camera::default(),
        }
    }

    /// Begin ticking. No-op unless idle.
    pub fn start(&mut self) {
        if self.phase == GamePhase::Idle {
            self.phase = GamePhase::Running;
        }
    }

    /// Rebuild all entities wholesale, zero the score and run again.
    /// The high score carries over.
    pub fn reset(&mut self, seed: u64) {
        let high_score = self.high_score;
        *self = Self::new(seed);
        self.high_score = high_score;
        self.phase = GamePhase::Running;
    }

    /// HUD progress: how far through the level the player is
    pub fn progress_percent(&self) -> u32 {
        ((self.player.pos.x / LEVEL_WIDTH) * 100.0).floor() as u32
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self.phase, GamePhase::GameOver | GamePhase::GameWon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_only_from_idle() {
        let mut state = GameState::new(1);
        assert_eq!(state.phase, GamePhase::Idle);
        state.start();
        assert_eq!(state.phase, GamePhase::Running);

        state.phase = GamePhase::GameOver;
        state.start();
        assert_eq!(state.phase, GamePhase::GameOver);
    }

    #[test]
    fn test_reset_preserves_high_score_only() {
        let mut state = GameState::new(1);
        state.start();
        state.score = 300;
        state.high_score = 900;
        state.player.health = 1;
        state.collectibles[0].collect();

        state.reset(2);

        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.score, 0);
        assert_eq!(state.high_score, 900);
        assert_eq!(state.player.health, MAX_HEALTH);
        assert!(state.collectibles.iter().all(|c| !c.collected));
    }

    #[test]
    fn test_progress_percent_floors() {
        let mut state = GameState::new(1);
        state.player.pos.x = LEVEL_WIDTH * 0.57 + 1.0;
        assert_eq!(state.progress_percent(), 57);
    }
}
