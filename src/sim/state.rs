//! Game state and transition events
//!
//! All mutable run state lives in one owned `GameState` threaded through the
//! tick function; there are no module globals, so tests can run parallel
//! instances.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::sim::character::{Character, CharacterAllocator};
use crate::sim::physics::Velocity;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Idle pose and "press to start" prompt; waiting for the first input
    Ready,
    /// Active run
    Running,
    /// Run ended; restart gated by a wall-clock cooldown
    Over,
}

/// Collaborator notifications produced by a tick
///
/// The simulation never calls audio, persistence, or minting itself; the host
/// maps these to fire-and-forget collaborator calls after the tick returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A run started (fresh game or restart)
    Started,
    /// A jump input was accepted
    Jumped,
    /// The player hit an obstacle
    GameOver,
    /// The finished run beat the persisted high score
    NewHighScore(u32),
}

/// Complete game state
///
/// The player is a permanent `Character` at `harmful[0]`, re-seeded on every
/// reset; obstacles follow it in insertion order. Allocator cooldowns survive
/// resets, matching the original's long-lived spawner banks.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Simulation RNG (spawn selection and cooldowns)
    pub rng: Pcg32,
    /// Viewport width in pixels; spawns enter at this edge
    pub view_cols: f32,
    pub phase: GamePhase,
    /// Timestamp (ms) of the last transition into Over
    pub over_at: Option<f64>,
    /// Integer score
    pub score: u32,
    /// Fractional score accumulator, carried between ticks
    pub score_step: f32,
    /// Best persisted score; updated in place when a run beats it
    pub hi_score: u32,
    /// Monotonic world speed-up, grown at every score boundary
    pub cumulative_velocity: Velocity,
    /// Player's vertical thrust; gravity pulls it down every tick
    pub thrust: Velocity,
    /// Grounded latch gating jump input
    pub ready_to_jump: bool,
    /// Decorative pool (clouds, stars, stones, pits)
    pub harmless: Vec<Character>,
    /// Collidable pool; index 0 is the player
    pub harmful: Vec<Character>,
    pub harmless_allocators: Vec<CharacterAllocator>,
    pub harmful_allocators: Vec<CharacterAllocator>,
    tuning: Tuning,
}

impl GameState {
    /// Build a Ready-phase state for the given viewport, seeding only the
    /// player. `hi_score` is whatever the persistence collaborator loaded.
    pub fn new(seed: u64, view_cols: f32, hi_score: u32) -> Self {
        let tuning = Tuning::for_view(view_cols);
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            view_cols,
            phase: GamePhase::Ready,
            over_at: None,
            score: 0,
            score_step: 0.0,
            hi_score,
            cumulative_velocity: Velocity::new(0.0, 0.0),
            thrust: Velocity::new(0.0, 0.0),
            ready_to_jump: true,
            harmless: Vec::new(),
            harmful: vec![Character::new(&tuning.player_meta())],
            harmless_allocators: tuning.harmless_allocators(view_cols),
            harmful_allocators: tuning.harmful_allocators(view_cols),
            tuning,
        }
    }

    /// Reset all mutable run state and enter Running. Used for both the first
    /// start and every restart; allocator cooldowns intentionally carry over.
    pub fn reset_run(&mut self) {
        self.phase = GamePhase::Running;
        self.over_at = None;
        self.score = 0;
        self.score_step = 0.0;
        self.cumulative_velocity = Velocity::new(0.0, 0.0);
        self.thrust = Velocity::new(0.0, 0.0);
        self.ready_to_jump = true;
        self.harmless.clear();
        self.harmful.clear();
        self.harmful.push(Character::new(&self.tuning.player_meta()));
    }

    pub fn player(&self) -> &Character {
        &self.harmful[0]
    }

    pub fn player_mut(&mut self) -> &mut Character {
        &mut self.harmful[0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::DINO_FLOOR_POSITION;

    #[test]
    fn test_new_state_is_ready_with_player_only() {
        let state = GameState::new(1, 1000.0, 42);
        assert_eq!(state.phase, GamePhase::Ready);
        assert_eq!(state.score, 0);
        assert_eq!(state.hi_score, 42);
        assert!(state.harmless.is_empty());
        assert_eq!(state.harmful.len(), 1);
        assert_eq!(state.player().position().get(), DINO_FLOOR_POSITION.get());
    }

    #[test]
    fn test_reset_run_clears_mutable_state() {
        let mut state = GameState::new(1, 1000.0, 0);
        state.score = 250;
        state.score_step = 0.7;
        state.cumulative_velocity = Velocity::new(0.0, -0.3);
        state.over_at = Some(5000.0);
        state.ready_to_jump = false;
        state.reset_run();
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.score, 0);
        assert_eq!(state.score_step, 0.0);
        assert_eq!(state.cumulative_velocity.get(), (0.0, 0.0));
        assert_eq!(state.over_at, None);
        assert!(state.ready_to_jump);
        assert_eq!(state.harmful.len(), 1);
    }
}
