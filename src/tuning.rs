//! Data-driven game balance
//!
//! Every gameplay number that is not a hard engine constant lives here: the
//! allocator tables (templates, spawn thresholds, cooldown ranges) and the
//! viewport-dependent scroll speed. Thresholds are survival probabilities for
//! the Bernoulli-chain selection in `sim::character`; lower threshold means a
//! more common spawn, and entries are ordered rarest-first.

use crate::consts::{DEFAULT_VIEW_COLS, DINO_FLOOR_POSITION};
use crate::layouts;
use crate::sim::character::{AllocatorCharacterArray, CharacterAllocator, CharacterMeta};
use crate::sim::physics::{Position, Velocity};

/// Viewport-dependent balance knobs
#[derive(Debug, Clone, Copy)]
pub struct Tuning {
    /// Ground-scroll velocity shared by road-bound characters
    pub floor_velocity: Velocity,
    /// Lower bound of the cactus spawn cooldown
    pub cactus_min_cooldown: u32,
}

impl Tuning {
    /// Narrow viewports scroll slower and space cacti further apart, so the
    /// game stays playable on phones.
    pub fn for_view(view_cols: f32) -> Self {
        if view_cols < DEFAULT_VIEW_COLS {
            Self {
                floor_velocity: Velocity::new(0.0, -5.0),
                cactus_min_cooldown: 50,
            }
        } else {
            Self {
                floor_velocity: Velocity::new(0.0, -7.0),
                cactus_min_cooldown: 20,
            }
        }
    }

    /// The player template: two-frame run gait, resting on the floor.
    pub fn player_meta(&self) -> CharacterMeta {
        CharacterMeta::new(
            layouts::DINO_RUN,
            4,
            DINO_FLOOR_POSITION,
            Velocity::new(0.0, 0.0),
        )
    }

    /// Decorative spawners: roadside stones, clouds, stars, pits in the road.
    /// Spawn columns sit at the right viewport edge.
    pub fn harmless_allocators(&self, view_cols: f32) -> Vec<CharacterAllocator> {
        let floor = self.floor_velocity;
        vec![
            CharacterAllocator::new(
                AllocatorCharacterArray::new()
                    .with_character(
                        CharacterMeta::new(
                            &[layouts::STONE_LARGE],
                            0,
                            Position::new(240.0, view_cols),
                            floor,
                        ),
                        0.9,
                    )
                    .with_character(
                        CharacterMeta::new(
                            &[layouts::STONE_MEDIUM],
                            0,
                            Position::new(243.0, view_cols),
                            floor,
                        ),
                        0.75,
                    )
                    .with_character(
                        CharacterMeta::new(
                            &[layouts::STONE_SMALL],
                            0,
                            Position::new(241.0, view_cols),
                            floor,
                        ),
                        0.6,
                    ),
                0,
                2,
            ),
            CharacterAllocator::new(
                AllocatorCharacterArray::new()
                    .with_character(
                        CharacterMeta::new(
                            &[layouts::CLOUD],
                            0,
                            Position::new(100.0, view_cols),
                            Velocity::new(0.0, -1.0),
                        ),
                        0.9,
                    )
                    .with_character(
                        CharacterMeta::new(
                            &[layouts::CLOUD],
                            0,
                            Position::new(135.0, view_cols),
                            Velocity::new(0.0, -1.0),
                        ),
                        0.85,
                    )
                    .with_character(
                        CharacterMeta::new(
                            &[layouts::CLOUD],
                            0,
                            Position::new(150.0, view_cols),
                            Velocity::new(0.0, -1.0),
                        ),
                        0.8,
                    ),
                300,
                350,
            ),
            CharacterAllocator::new(
                AllocatorCharacterArray::new()
                    .with_character(
                        CharacterMeta::new(
                            &[layouts::STAR_SMALL_S1],
                            0,
                            Position::new(90.0, view_cols),
                            Velocity::new(0.0, -0.3),
                        ),
                        0.9,
                    )
                    .with_character(
                        CharacterMeta::new(
                            &[layouts::STAR_SMALL_S2],
                            0,
                            Position::new(125.0, view_cols),
                            Velocity::new(0.0, -0.3),
                        ),
                        0.85,
                    )
                    .with_character(
                        CharacterMeta::new(
                            &[layouts::STAR_SMALL_S1],
                            0,
                            Position::new(140.0, view_cols),
                            Velocity::new(0.0, -0.3),
                        ),
                        0.8,
                    ),
                250,
                350,
            ),
            CharacterAllocator::new(
                AllocatorCharacterArray::new()
                    .with_character(
                        CharacterMeta::new(
                            &[layouts::PIT_LARGE],
                            0,
                            Position::new(223.0, view_cols),
                            floor,
                        ),
                        0.97,
                    )
                    .with_character(
                        CharacterMeta::new(
                            &[layouts::PIT_UP],
                            0,
                            Position::new(227.0, view_cols),
                            floor,
                        ),
                        0.9,
                    )
                    .with_character(
                        CharacterMeta::new(
                            &[layouts::PIT_DOWN],
                            0,
                            Position::new(230.0, view_cols),
                            floor,
                        ),
                        0.85,
                    ),
                50,
                100,
            ),
        ]
    }

    /// Collidable spawners: cacti on the road, birds at jump height.
    pub fn harmful_allocators(&self, view_cols: f32) -> Vec<CharacterAllocator> {
        let floor = self.floor_velocity;
        let mut bird_velocity = floor;
        bird_velocity.add(&Velocity::new(0.0, -1.0));
        vec![
            CharacterAllocator::new(
                AllocatorCharacterArray::new()
                    .with_character(
                        CharacterMeta::new(
                            &[layouts::CACTUS_SMALL_D1],
                            0,
                            Position::new(201.0, view_cols),
                            floor,
                        ),
                        0.8,
                    )
                    .with_character(
                        CharacterMeta::new(
                            &[layouts::CACTUS_SMALL_S1],
                            0,
                            Position::new(201.0, view_cols),
                            floor,
                        ),
                        0.7,
                    )
                    .with_character(
                        CharacterMeta::new(
                            &[layouts::CACTUS_SMALL_S2],
                            0,
                            Position::new(201.0, view_cols),
                            floor,
                        ),
                        0.6,
                    )
                    .with_character(
                        CharacterMeta::new(
                            &[layouts::CACTUS_MEDIUM_D1],
                            0,
                            Position::new(193.0, view_cols),
                            floor,
                        ),
                        0.5,
                    )
                    .with_character(
                        CharacterMeta::new(
                            &[layouts::CACTUS_MEDIUM_S1],
                            0,
                            Position::new(193.0, view_cols),
                            floor,
                        ),
                        0.4,
                    )
                    .with_character(
                        CharacterMeta::new(
                            &[layouts::CACTUS_MEDIUM_S2],
                            0,
                            Position::new(193.0, view_cols),
                            floor,
                        ),
                        0.3,
                    ),
                self.cactus_min_cooldown,
                100,
            ),
            CharacterAllocator::new(
                AllocatorCharacterArray::new()
                    .with_character(
                        CharacterMeta::new(
                            layouts::BIRD_FLY,
                            6,
                            Position::new(170.0, view_cols),
                            bird_velocity,
                        ),
                        0.98,
                    )
                    .with_character(
                        CharacterMeta::new(
                            layouts::BIRD_FLY,
                            6,
                            Position::new(190.0, view_cols),
                            bird_velocity,
                        ),
                        0.9,
                    ),
                50,
                500,
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_narrow_view_slows_scroll() {
        let wide = Tuning::for_view(1200.0);
        let narrow = Tuning::for_view(480.0);
        assert_eq!(wide.floor_velocity.get(), (0.0, -7.0));
        assert_eq!(narrow.floor_velocity.get(), (0.0, -5.0));
        assert!(narrow.cactus_min_cooldown > wide.cactus_min_cooldown);
    }

    #[test]
    fn test_allocator_banks_are_populated() {
        let tuning = Tuning::for_view(1000.0);
        assert_eq!(tuning.harmless_allocators(1000.0).len(), 4);
        assert_eq!(tuning.harmful_allocators(1000.0).len(), 2);
    }
}
