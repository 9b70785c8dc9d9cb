//! Dino Dash - a pixel-grid endless runner with NFT cosmetic themes
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, characters, game state machine)
//! - `layouts`: Static sprite tables (palette-index grids)
//! - `tuning`: Data-driven game balance
//! - `theme`: Color palettes, NFT trait mapping, theme persistence
//! - `render`: Canvas-2D painting and confetti FX (wasm)
//! - `highscores` / `audio` / `mint`: collaborator boundaries

pub mod highscores;
pub mod layouts;
pub mod sim;
pub mod theme;
pub mod tuning;

#[cfg(target_arch = "wasm32")]
pub mod audio;
#[cfg(target_arch = "wasm32")]
pub mod mint;
#[cfg(target_arch = "wasm32")]
pub mod render;

pub use sim::{GameEvent, GamePhase, GameState, TickInput, tick};
pub use theme::Theme;

/// Game configuration constants
pub mod consts {
    use crate::sim::physics::{Position, Velocity};

    /// Pixels painted per layout grid cell
    pub const CELL_SIZE: f32 = 2.0;
    /// Canvas height in pixels; the height is fixed, the width follows the page
    pub const BOARD_ROWS: u32 = 300;
    /// Reference viewport width; narrower screens get the slow tuning variant
    pub const DEFAULT_VIEW_COLS: f32 = 1000.0;
    /// Row of the road line
    pub const ROAD_ROW: f32 = 232.0;

    /// Player resting pose (row, col); the floor clamp snaps back to this
    pub const DINO_FLOOR_POSITION: Position = Position::new(200.0, 20.0);
    /// Upward impulse applied when a jump is accepted
    pub const DINO_JUMP_IMPULSE: Velocity = Velocity::new(-11.0, 0.0);
    /// Subtracted from the player's thrust every tick (down is +row)
    pub const ENVIRONMENT_GRAVITY: Velocity = Velocity::new(-0.6, 0.0);

    /// Characters scrolled strictly past this column are evicted
    pub const OFFSCREEN_COL: f32 = -150.0;
    /// Fractional score gained per tick
    pub const SCORE_STEP: f32 = 0.15;
    /// Integer-score interval between world speed-ups
    pub const SPEEDUP_INTERVAL: u32 = 100;
    /// Added to the cumulative world speed-up at each interval boundary
    pub const SPEEDUP_STEP: Velocity = Velocity::new(0.0, -0.1);
    /// Wall-clock gate between entering Over and accepting a restart
    pub const RESTART_COOLDOWN_MS: f64 = 1000.0;
}
