//! Static sprite tables
//!
//! Every sprite is a 2D grid of palette indices; index 0 is transparent and
//! the rest are looked up in the active theme's palette at paint time. All
//! rows of a frame have the same length (the collision pass reads the frame's
//! height and width from the grid).
//!
//! Positions are board pixels; each grid cell paints `CELL_SIZE` pixels. The
//! player is 16 cells tall, so standing at row 200 its painted feet reach the
//! road line at row 232.

/// One animation frame: rows of palette indices
pub type LayoutFrame = &'static [&'static [u8]];

// Palette indices used below:
//   0 transparent, 1 body, 2 dark detail, 3 white, 4 red (dead eye)

const DINO_RUN_A: LayoutFrame = &[
    &[0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 0],
    &[0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 3, 1, 1, 1, 1, 1],
    &[0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1],
    &[0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1],
    &[0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 2, 2, 2],
    &[0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 0, 0, 0, 0],
    &[1, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 0, 0, 0, 0],
    &[1, 1, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 0, 0, 0, 0],
    &[1, 1, 1, 0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0],
    &[1, 1, 1, 1, 0, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0],
    &[0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0],
    &[0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0],
    &[0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0],
    &[0, 0, 0, 0, 1, 1, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0],
    &[0, 0, 0, 0, 1, 1, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0],
    &[0, 0, 0, 0, 2, 2, 0, 0, 0, 0, 2, 2, 0, 0, 0, 0],
];

const DINO_RUN_B: LayoutFrame = &[
    &[0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 0],
    &[0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 3, 1, 1, 1, 1, 1],
    &[0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1],
    &[0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1],
    &[0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 2, 2, 2],
    &[0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 0, 0, 0, 0],
    &[1, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 0, 0, 0, 0],
    &[1, 1, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 0, 0, 0, 0],
    &[1, 1, 1, 0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0],
    &[1, 1, 1, 1, 0, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0],
    &[0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0],
    &[0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0],
    &[0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0],
    &[0, 0, 0, 0, 1, 1, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0],
    &[0, 0, 0, 1, 1, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0],
    &[0, 0, 2, 2, 0, 0, 0, 0, 2, 2, 0, 0, 0, 0, 0, 0],
];

/// Two-frame running gait
pub const DINO_RUN: &[LayoutFrame] = &[DINO_RUN_A, DINO_RUN_B];

/// Idle pose: both legs planted (also drawn while airborne)
pub const DINO_STAND: LayoutFrame = &[
    &[0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 0],
    &[0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 3, 1, 1, 1, 1, 1],
    &[0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1],
    &[0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1],
    &[0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 2, 2, 2],
    &[0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 0, 0, 0, 0],
    &[1, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 0, 0, 0, 0],
    &[1, 1, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 0, 0, 0, 0],
    &[1, 1, 1, 0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0],
    &[1, 1, 1, 1, 0, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0],
    &[0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0],
    &[0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0],
    &[0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0],
    &[0, 0, 0, 0, 1, 1, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0],
    &[0, 0, 0, 0, 1, 1, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0],
    &[0, 0, 0, 0, 2, 2, 0, 0, 2, 2, 0, 0, 0, 0, 0, 0],
];

/// Game-over pose: wide red eye
pub const DINO_DEAD: LayoutFrame = &[
    &[0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 0],
    &[0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 4, 4, 1, 1, 1, 1],
    &[0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 4, 4, 1, 1, 1, 1],
    &[0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1],
    &[0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 2, 2, 2],
    &[0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 0, 0, 0, 0],
    &[1, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 0, 0, 0, 0],
    &[1, 1, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 0, 0, 0, 0],
    &[1, 1, 1, 0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0],
    &[1, 1, 1, 1, 0, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0],
    &[0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0],
    &[0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0],
    &[0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0],
    &[0, 0, 0, 0, 1, 1, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0],
    &[0, 0, 0, 0, 1, 1, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0],
    &[0, 0, 0, 0, 2, 2, 0, 0, 2, 2, 0, 0, 0, 0, 0, 0],
];

// Cacti: small stems are 15 cells tall (spawn row 201), medium 19 cells
// (spawn row 193); painted at cell size 2 both ground at the road line.

pub const CACTUS_SMALL_S1: LayoutFrame = &[
    &[0, 0, 0, 1, 1, 0, 0, 0],
    &[0, 0, 0, 1, 1, 0, 0, 0],
    &[0, 1, 0, 1, 1, 0, 0, 0],
    &[0, 1, 0, 1, 1, 0, 1, 0],
    &[0, 1, 0, 1, 1, 0, 1, 0],
    &[0, 1, 1, 1, 1, 0, 1, 0],
    &[0, 0, 0, 1, 1, 1, 1, 0],
    &[0, 0, 0, 1, 1, 0, 0, 0],
    &[0, 0, 0, 1, 1, 0, 0, 0],
    &[0, 0, 0, 1, 1, 0, 0, 0],
    &[0, 0, 0, 1, 1, 0, 0, 0],
    &[0, 0, 0, 1, 1, 0, 0, 0],
    &[0, 0, 0, 1, 1, 0, 0, 0],
    &[0, 0, 0, 1, 1, 0, 0, 0],
    &[0, 0, 0, 1, 1, 0, 0, 0],
];

pub const CACTUS_SMALL_S2: LayoutFrame = &[
    &[0, 0, 0, 1, 1, 0, 0, 0],
    &[0, 0, 0, 1, 1, 0, 0, 0],
    &[0, 0, 0, 1, 1, 0, 1, 0],
    &[0, 1, 0, 1, 1, 0, 1, 0],
    &[0, 1, 0, 1, 1, 0, 1, 0],
    &[0, 1, 0, 1, 1, 1, 1, 0],
    &[0, 1, 1, 1, 1, 0, 0, 0],
    &[0, 0, 0, 1, 1, 0, 0, 0],
    &[0, 0, 0, 1, 1, 0, 0, 0],
    &[0, 0, 0, 1, 1, 0, 0, 0],
    &[0, 0, 0, 1, 1, 0, 0, 0],
    &[0, 0, 0, 1, 1, 0, 0, 0],
    &[0, 0, 0, 1, 1, 0, 0, 0],
    &[0, 0, 0, 1, 1, 0, 0, 0],
    &[0, 0, 0, 1, 1, 0, 0, 0],
];

pub const CACTUS_SMALL_D1: LayoutFrame = &[
    &[0, 0, 1, 1, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0],
    &[0, 0, 1, 1, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0],
    &[1, 0, 1, 1, 0, 0, 0, 1, 0, 1, 1, 0, 1, 0],
    &[1, 0, 1, 1, 0, 1, 0, 1, 0, 1, 1, 0, 1, 0],
    &[1, 0, 1, 1, 0, 1, 0, 1, 0, 1, 1, 0, 1, 0],
    &[1, 1, 1, 1, 0, 1, 0, 1, 1, 1, 1, 1, 1, 0],
    &[0, 0, 1, 1, 1, 1, 0, 0, 0, 1, 1, 0, 0, 0],
    &[0, 0, 1, 1, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0],
    &[0, 0, 1, 1, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0],
    &[0, 0, 1, 1, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0],
    &[0, 0, 1, 1, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0],
    &[0, 0, 1, 1, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0],
    &[0, 0, 1, 1, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0],
    &[0, 0, 1, 1, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0],
    &[0, 0, 1, 1, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0],
];

pub const CACTUS_MEDIUM_S1: LayoutFrame = &[
    &[0, 0, 0, 0, 1, 1, 0, 0, 0, 0],
    &[0, 0, 0, 0, 1, 1, 0, 0, 0, 0],
    &[0, 0, 0, 0, 1, 1, 0, 0, 0, 0],
    &[0, 1, 0, 0, 1, 1, 0, 0, 0, 0],
    &[0, 1, 0, 0, 1, 1, 0, 0, 1, 0],
    &[0, 1, 0, 0, 1, 1, 0, 0, 1, 0],
    &[0, 1, 0, 0, 1, 1, 0, 0, 1, 0],
    &[0, 1, 0, 0, 1, 1, 0, 0, 1, 0],
    &[0, 1, 1, 1, 1, 1, 0, 0, 1, 0],
    &[0, 0, 0, 0, 1, 1, 1, 1, 1, 0],
    &[0, 0, 0, 0, 1, 1, 0, 0, 0, 0],
    &[0, 0, 0, 0, 1, 1, 0, 0, 0, 0],
    &[0, 0, 0, 0, 1, 1, 0, 0, 0, 0],
    &[0, 0, 0, 0, 1, 1, 0, 0, 0, 0],
    &[0, 0, 0, 0, 1, 1, 0, 0, 0, 0],
    &[0, 0, 0, 0, 1, 1, 0, 0, 0, 0],
    &[0, 0, 0, 0, 1, 1, 0, 0, 0, 0],
    &[0, 0, 0, 0, 1, 1, 0, 0, 0, 0],
    &[0, 0, 0, 0, 1, 1, 0, 0, 0, 0],
];

pub const CACTUS_MEDIUM_S2: LayoutFrame = &[
    &[0, 0, 0, 0, 1, 1, 0, 0, 0, 0],
    &[0, 0, 0, 0, 1, 1, 0, 0, 0, 0],
    &[0, 0, 0, 0, 1, 1, 0, 0, 1, 0],
    &[0, 0, 0, 0, 1, 1, 0, 0, 1, 0],
    &[0, 1, 0, 0, 1, 1, 0, 0, 1, 0],
    &[0, 1, 0, 0, 1, 1, 0, 0, 1, 0],
    &[0, 1, 0, 0, 1, 1, 1, 1, 1, 0],
    &[0, 1, 0, 0, 1, 1, 0, 0, 0, 0],
    &[0, 1, 1, 1, 1, 1, 0, 0, 0, 0],
    &[0, 0, 0, 0, 1, 1, 0, 0, 0, 0],
    &[0, 0, 0, 0, 1, 1, 0, 0, 0, 0],
    &[0, 0, 0, 0, 1, 1, 0, 0, 0, 0],
    &[0, 0, 0, 0, 1, 1, 0, 0, 0, 0],
    &[0, 0, 0, 0, 1, 1, 0, 0, 0, 0],
    &[0, 0, 0, 0, 1, 1, 0, 0, 0, 0],
    &[0, 0, 0, 0, 1, 1, 0, 0, 0, 0],
    &[0, 0, 0, 0, 1, 1, 0, 0, 0, 0],
    &[0, 0, 0, 0, 1, 1, 0, 0, 0, 0],
    &[0, 0, 0, 0, 1, 1, 0, 0, 0, 0],
];

pub const CACTUS_MEDIUM_D1: LayoutFrame = &[
    &[0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0],
    &[0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0],
    &[0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0],
    &[1, 0, 1, 1, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 1, 0],
    &[1, 0, 1, 1, 0, 1, 0, 0, 1, 0, 1, 1, 0, 0, 1, 0],
    &[1, 0, 1, 1, 0, 1, 0, 0, 1, 0, 1, 1, 0, 0, 1, 0],
    &[1, 0, 1, 1, 0, 1, 0, 0, 1, 0, 1, 1, 0, 0, 1, 0],
    &[1, 0, 1, 1, 0, 1, 0, 0, 1, 0, 1, 1, 0, 0, 1, 0],
    &[1, 1, 1, 1, 0, 1, 0, 0, 1, 1, 1, 1, 1, 1, 1, 0],
    &[0, 0, 1, 1, 1, 1, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0],
    &[0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0],
    &[0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0],
    &[0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0],
    &[0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0],
    &[0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0],
    &[0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0],
    &[0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0],
    &[0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0],
    &[0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0],
];

// Bird flies right-to-left, beak on the left.

const BIRD_FLY_UP: LayoutFrame = &[
    &[0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0],
    &[0, 0, 0, 0, 0, 1, 1, 1, 0, 0, 0, 0, 0, 0],
    &[0, 0, 0, 0, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0],
    &[0, 0, 1, 0, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0],
    &[2, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0],
    &[0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    &[0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0],
    &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
];

const BIRD_FLY_DOWN: LayoutFrame = &[
    &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    &[0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    &[2, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0],
    &[0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    &[0, 0, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0],
    &[0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0],
];

/// Two-frame wing flap
pub const BIRD_FLY: &[LayoutFrame] = &[BIRD_FLY_UP, BIRD_FLY_DOWN];

pub const CLOUD: LayoutFrame = &[
    &[0, 0, 0, 0, 0, 3, 3, 3, 3, 0, 0, 0, 0, 0, 0, 0],
    &[0, 0, 0, 3, 3, 3, 3, 3, 3, 3, 3, 0, 0, 0, 0, 0],
    &[0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 0, 0, 0],
    &[3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 0],
    &[3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3],
    &[0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 0],
];

// Roadside rubble, drawn below the road line.

pub const STONE_LARGE: LayoutFrame = &[
    &[0, 2, 2, 2, 2, 0],
    &[2, 2, 2, 2, 2, 2],
    &[2, 2, 2, 2, 2, 2],
];

pub const STONE_MEDIUM: LayoutFrame = &[
    &[0, 2, 2, 0],
    &[2, 2, 2, 2],
];

pub const STONE_SMALL: LayoutFrame = &[
    &[2, 2, 0],
    &[2, 2, 2],
];

// Pits: dark gashes straddling the road line.

pub const PIT_LARGE: LayoutFrame = &[
    &[0, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 0],
    &[2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2],
    &[2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2],
    &[0, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 0],
];

pub const PIT_UP: LayoutFrame = &[
    &[0, 0, 2, 2, 2, 2, 0, 0],
    &[0, 2, 2, 2, 2, 2, 2, 0],
    &[2, 2, 2, 2, 2, 2, 2, 2],
];

pub const PIT_DOWN: LayoutFrame = &[
    &[2, 2, 2, 2, 2, 2, 2, 2],
    &[0, 2, 2, 2, 2, 2, 2, 0],
];

// Night-sky sparkles.

pub const STAR_SMALL_S1: LayoutFrame = &[
    &[0, 3, 0],
    &[3, 3, 3],
    &[0, 3, 0],
];

pub const STAR_SMALL_S2: LayoutFrame = &[
    &[3, 0, 3],
    &[0, 3, 0],
    &[3, 0, 3],
];

/// Retry arrow glyph shown on the game-over screen
pub const RETRY: LayoutFrame = &[
    &[0, 0, 0, 2, 2, 2, 2, 2, 2, 0, 0, 0],
    &[0, 0, 2, 2, 2, 2, 2, 2, 2, 2, 0, 0],
    &[0, 2, 2, 2, 0, 0, 0, 2, 2, 2, 0, 0],
    &[0, 2, 2, 0, 0, 0, 0, 0, 2, 2, 2, 0],
    &[0, 2, 2, 0, 0, 0, 2, 2, 2, 2, 2, 2],
    &[0, 2, 2, 0, 0, 0, 0, 2, 2, 2, 2, 0],
    &[0, 2, 2, 0, 0, 0, 0, 0, 2, 2, 0, 0],
    &[0, 2, 2, 2, 0, 0, 0, 0, 0, 0, 0, 0],
    &[0, 0, 2, 2, 2, 2, 2, 2, 0, 0, 0, 0],
    &[0, 0, 0, 2, 2, 2, 2, 2, 2, 0, 0, 0],
];

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_rectangular(frame: LayoutFrame) {
        assert!(!frame.is_empty());
        let width = frame[0].len();
        assert!(width > 0);
        for row in frame {
            assert_eq!(row.len(), width);
        }
    }

    #[test]
    fn test_all_frames_rectangular() {
        let singles: &[LayoutFrame] = &[
            DINO_STAND,
            DINO_DEAD,
            CACTUS_SMALL_S1,
            CACTUS_SMALL_S2,
            CACTUS_SMALL_D1,
            CACTUS_MEDIUM_S1,
            CACTUS_MEDIUM_S2,
            CACTUS_MEDIUM_D1,
            CLOUD,
            STONE_LARGE,
            STONE_MEDIUM,
            STONE_SMALL,
            PIT_LARGE,
            PIT_UP,
            PIT_DOWN,
            STAR_SMALL_S1,
            STAR_SMALL_S2,
            RETRY,
        ];
        for frame in singles {
            assert_rectangular(frame);
        }
        for frame in DINO_RUN.iter().chain(BIRD_FLY) {
            assert_rectangular(frame);
        }
    }

    #[test]
    fn test_animated_frames_share_dimensions() {
        assert_eq!(DINO_RUN.len(), 2);
        assert_eq!(DINO_RUN[0].len(), DINO_RUN[1].len());
        assert_eq!(DINO_RUN[0][0].len(), DINO_RUN[1][0].len());
        assert_eq!(BIRD_FLY[0].len(), BIRD_FLY[1].len());
    }

    #[test]
    fn test_player_poses_match_run_frame_size() {
        // The render pass swaps these in for the run frames; mismatched grids
        // would shift the hitbox.
        assert_eq!(DINO_STAND.len(), DINO_RUN[0].len());
        assert_eq!(DINO_DEAD.len(), DINO_RUN[0].len());
        assert_eq!(DINO_STAND[0].len(), DINO_RUN[0][0].len());
    }
}
