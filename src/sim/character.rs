//! Live characters and their probabilistic allocators
//!
//! A `CharacterMeta` is an immutable template (frames, animation interval,
//! spawn pose); a `Character` is a live instance of one. `CharacterAllocator`
//! emits characters on a randomized cooldown using the Bernoulli-chain
//! selection the game was tuned against: each entry in order gets a fresh
//! uniform draw and spawns when the draw exceeds its threshold. The thresholds
//! are survival probabilities, not a normalized distribution; do not replace
//! this with a weighted partition.

use rand::Rng;
use rand_pcg::Pcg32;

use crate::layouts::LayoutFrame;
use crate::sim::physics::{Position, Velocity};

/// Immutable spawn template
#[derive(Debug, Clone, Copy)]
pub struct CharacterMeta {
    /// Animation frame sequence (one entry for static sprites)
    pub frames: &'static [LayoutFrame],
    /// Ticks between frame switches; 0 disables animation
    pub frame_interval: u32,
    /// Spawn position
    pub position: Position,
    /// Spawn velocity
    pub velocity: Velocity,
}

impl CharacterMeta {
    pub const fn new(
        frames: &'static [LayoutFrame],
        frame_interval: u32,
        position: Position,
        velocity: Velocity,
    ) -> Self {
        Self {
            frames,
            frame_interval,
            position,
            velocity,
        }
    }
}

/// A live, moving, animated entity
#[derive(Debug, Clone)]
pub struct Character {
    frames: &'static [LayoutFrame],
    frame_interval: u32,
    frame_index: usize,
    frame_ticks: u32,
    position: Position,
    velocity: Velocity,
}

impl Character {
    pub fn new(meta: &CharacterMeta) -> Self {
        Self {
            frames: meta.frames,
            frame_interval: meta.frame_interval,
            frame_index: 0,
            frame_ticks: 0,
            position: meta.position,
            velocity: meta.velocity,
        }
    }

    /// Advance one simulation step: integrate motion, then advance the
    /// animation cursor if this sprite animates. Motion and animation are
    /// independent; a zero interval means a static single-frame sprite.
    pub fn tick(&mut self) {
        self.position.row += self.velocity.row;
        self.position.col += self.velocity.col;

        if self.frame_interval > 0 {
            self.frame_ticks += 1;
            if self.frame_ticks > self.frame_interval {
                self.frame_ticks = 0;
                self.frame_index = (self.frame_index + 1) % self.frames.len();
            }
        }
    }

    /// Current animation frame grid
    pub fn layout(&self) -> LayoutFrame {
        self.frames[self.frame_index]
    }

    /// Frame height in cells
    pub fn height(&self) -> f32 {
        self.layout().len() as f32
    }

    /// Frame width in cells
    pub fn width(&self) -> f32 {
        self.layout()[0].len() as f32
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn position_mut(&mut self) -> &mut Position {
        &mut self.position
    }

    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    pub fn velocity(&self) -> &Velocity {
        &self.velocity
    }

    /// Live handle; the engine mutates this in place to apply the world
    /// speed-up ratchet.
    pub fn velocity_mut(&mut self) -> &mut Velocity {
        &mut self.velocity
    }

    pub fn set_velocity(&mut self, velocity: Velocity) {
        self.velocity = velocity;
    }
}

/// Ordered (template, threshold) pairs for weighted-or-nothing selection
#[derive(Debug, Clone, Default)]
pub struct AllocatorCharacterArray {
    entries: Vec<(CharacterMeta, f64)>,
}

impl AllocatorCharacterArray {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style append. Thresholds are expected to decrease down the
    /// list so rarer templates sit first.
    pub fn with_character(mut self, meta: CharacterMeta, threshold: f64) -> Self {
        self.entries.push((meta, threshold));
        self
    }

    /// One selection cycle: fresh draw per entry, first entry whose draw
    /// exceeds its threshold wins, otherwise nothing spawns.
    pub fn select(&self, rng: &mut Pcg32) -> Option<Character> {
        for (meta, threshold) in &self.entries {
            if rng.random::<f64>() > *threshold {
                return Some(Character::new(meta));
            }
        }
        None
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Cooldown-gated spawner with a single-slot handoff
///
/// The countdown resets to a random value in `[min_cooldown, max_cooldown]`
/// every time it reaches zero, whether or not a character was produced. A
/// spawn not collected with `take_character` on the same tick is overwritten
/// by the next one; this is deliberate (queueing would change spawn density).
#[derive(Debug, Clone)]
pub struct CharacterAllocator {
    characters: AllocatorCharacterArray,
    min_cooldown: u32,
    max_cooldown: u32,
    countdown: u32,
    slot: Option<Character>,
}

impl CharacterAllocator {
    pub fn new(characters: AllocatorCharacterArray, min_cooldown: u32, max_cooldown: u32) -> Self {
        Self {
            characters,
            min_cooldown,
            max_cooldown,
            countdown: 0,
            slot: None,
        }
    }

    /// Advance the cooldown; on the tick it reaches zero, run one selection
    /// cycle and re-arm.
    pub fn tick(&mut self, rng: &mut Pcg32) {
        if self.countdown > 0 {
            self.countdown -= 1;
        }
        if self.countdown == 0 {
            self.slot = self.characters.select(rng);
            self.countdown = rng.random_range(self.min_cooldown..=self.max_cooldown);
        }
    }

    /// Pull the most recent spawn, clearing the slot.
    pub fn take_character(&mut self) -> Option<Character> {
        self.slot.take()
    }

    #[cfg(test)]
    pub fn countdown(&self) -> u32 {
        self.countdown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layouts;
    use rand::SeedableRng;

    fn static_meta() -> CharacterMeta {
        CharacterMeta::new(
            &[layouts::STONE_LARGE],
            0,
            Position::new(240.0, 1000.0),
            Velocity::new(0.0, -7.0),
        )
    }

    fn certain_array() -> AllocatorCharacterArray {
        // Threshold -1: every draw in [0,1) exceeds it
        AllocatorCharacterArray::new().with_character(static_meta(), -1.0)
    }

    fn never_array() -> AllocatorCharacterArray {
        AllocatorCharacterArray::new().with_character(static_meta(), 1.0)
    }

    #[test]
    fn test_character_motion_and_animation() {
        let meta = CharacterMeta::new(
            layouts::DINO_RUN,
            2,
            Position::new(200.0, 20.0),
            Velocity::new(0.0, 0.0),
        );
        let mut c = Character::new(&meta);
        assert!(std::ptr::eq(c.layout(), layouts::DINO_RUN[0]));
        // Interval 2: frame advances on the third tick, then wraps
        c.tick();
        c.tick();
        assert!(std::ptr::eq(c.layout(), layouts::DINO_RUN[0]));
        c.tick();
        assert!(std::ptr::eq(c.layout(), layouts::DINO_RUN[1]));
        for _ in 0..3 {
            c.tick();
        }
        assert!(std::ptr::eq(c.layout(), layouts::DINO_RUN[0]));
    }

    #[test]
    fn test_static_zero_velocity_tick_is_idempotent() {
        let mut c = Character::new(&CharacterMeta::new(
            &[layouts::CLOUD],
            0,
            Position::new(100.0, 500.0),
            Velocity::new(0.0, 0.0),
        ));
        for _ in 0..50 {
            c.tick();
        }
        assert_eq!(c.position().get(), (100.0, 500.0));
        assert!(std::ptr::eq(c.layout(), layouts::CLOUD));
    }

    #[test]
    fn test_character_integrates_velocity_every_tick() {
        let mut c = Character::new(&static_meta());
        c.tick();
        c.tick();
        assert_eq!(c.position().get(), (240.0, 986.0));
    }

    #[test]
    fn test_selection_first_match_wins() {
        // Both entries are certain; the first one must be picked
        let first = static_meta();
        let second = CharacterMeta::new(
            &[layouts::CLOUD],
            0,
            Position::new(100.0, 1000.0),
            Velocity::new(0.0, -1.0),
        );
        let array = AllocatorCharacterArray::new()
            .with_character(first, -1.0)
            .with_character(second, -1.0);
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..20 {
            let c = array.select(&mut rng).expect("certain spawn");
            assert!(std::ptr::eq(c.layout(), layouts::STONE_LARGE));
        }
    }

    #[test]
    fn test_selection_can_emit_nothing() {
        let array = never_array();
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..100 {
            assert!(array.select(&mut rng).is_none());
        }
    }

    #[test]
    fn test_countdown_resets_into_range_after_zero() {
        let mut alloc = CharacterAllocator::new(never_array(), 3, 9);
        let mut rng = Pcg32::seed_from_u64(42);
        // Countdown starts at 0, so the first tick fires and re-arms; from
        // then on it decrements to zero and resets in the same tick.
        for _ in 0..200 {
            let before = alloc.countdown();
            alloc.tick(&mut rng);
            let after = alloc.countdown();
            if before > 1 {
                assert_eq!(after, before - 1);
            } else {
                assert!((3..=9).contains(&after), "countdown {after} out of range");
            }
        }
    }

    #[test]
    fn test_countdown_resets_even_on_spawn() {
        let mut alloc = CharacterAllocator::new(certain_array(), 5, 5);
        let mut rng = Pcg32::seed_from_u64(1);
        alloc.tick(&mut rng);
        assert!(alloc.take_character().is_some());
        assert_eq!(alloc.countdown(), 5);
    }

    #[test]
    fn test_single_slot_handoff_clears() {
        let mut alloc = CharacterAllocator::new(certain_array(), 0, 0);
        let mut rng = Pcg32::seed_from_u64(1);
        alloc.tick(&mut rng);
        assert!(alloc.take_character().is_some());
        // Slot is a handoff, not a queue
        assert!(alloc.take_character().is_none());
    }

    #[test]
    fn test_uncollected_spawn_is_lost() {
        let mut alloc = CharacterAllocator::new(certain_array(), 0, 0);
        let mut rng = Pcg32::seed_from_u64(1);
        alloc.tick(&mut rng);
        alloc.tick(&mut rng);
        // Two spawn cycles, one slot: only the latest survives
        assert!(alloc.take_character().is_some());
        assert!(alloc.take_character().is_none());
    }
}
