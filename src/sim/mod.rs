//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One discrete step per host animation callback
//! - Seeded RNG only
//! - No rendering or platform dependencies
//!
//! The host drives `tick` and fans the returned events out to the audio,
//! persistence, and minting collaborators; nothing in here blocks or calls out.

pub mod character;
pub mod physics;
pub mod state;
pub mod tick;

pub use character::{AllocatorCharacterArray, Character, CharacterAllocator, CharacterMeta};
pub use physics::{Position, Velocity, apply_velocity_to_position, is_collided};
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{TickInput, tick};
