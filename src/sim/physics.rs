//! Vector primitives and collision detection
//!
//! Screen space is (row, col): the row axis is vertical (gravity acts on it,
//! down is +row) and the col axis is horizontal (world scroll is a negative
//! col velocity). Both `Position` and `Velocity` are plain value types; `add`
//! and `sub` mutate in place and chain, `clone` is an independent copy.

use serde::{Deserialize, Serialize};

/// A point in board space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub row: f32,
    pub col: f32,
}

impl Position {
    pub const fn new(row: f32, col: f32) -> Self {
        Self { row, col }
    }

    pub fn add(&mut self, other: &Position) -> &mut Self {
        self.row += other.row;
        self.col += other.col;
        self
    }

    pub fn sub(&mut self, other: &Position) -> &mut Self {
        self.row -= other.row;
        self.col -= other.col;
        self
    }

    pub fn get(&self) -> (f32, f32) {
        (self.row, self.col)
    }
}

/// A per-tick displacement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub row: f32,
    pub col: f32,
}

impl Velocity {
    pub const fn new(row: f32, col: f32) -> Self {
        Self { row, col }
    }

    pub fn add(&mut self, other: &Velocity) -> &mut Self {
        self.row += other.row;
        self.col += other.col;
        self
    }

    pub fn sub(&mut self, other: &Velocity) -> &mut Self {
        self.row -= other.row;
        self.col -= other.col;
        self
    }

    pub fn get(&self) -> (f32, f32) {
        (self.row, self.col)
    }
}

/// Returns `position + velocity` without mutating either input.
///
/// The engine decides whether to commit the result (the player's integration
/// goes through a floor clamp first).
pub fn apply_velocity_to_position(position: &Position, velocity: &Velocity) -> Position {
    Position::new(position.row + velocity.row, position.col + velocity.col)
}

/// Axis-aligned bounding-box overlap test.
///
/// Rectangles are given as top-left corner plus grid dimensions. The engine
/// passes layout dimensions in cells against positions in pixels, so hitboxes
/// are deliberately coarser than the painted sprite; collisions near sprite
/// edges will not match the visuals exactly.
#[allow(clippy::too_many_arguments)]
#[inline]
pub fn is_collided(
    a_row: f32,
    a_col: f32,
    a_height: f32,
    a_width: f32,
    b_row: f32,
    b_col: f32,
    b_height: f32,
    b_width: f32,
) -> bool {
    a_row < b_row + b_height
        && a_row + a_height > b_row
        && a_col < b_col + b_width
        && a_col + a_width > b_col
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_add_sub_chain() {
        let mut v = Velocity::new(0.0, -7.0);
        v.add(&Velocity::new(0.0, 2.0));
        assert_eq!(v.get(), (0.0, -5.0));
        v.sub(&Velocity::new(-0.6, 0.0));
        assert_eq!(v.get(), (0.6, -5.0));
    }

    #[test]
    fn test_clone_is_independent() {
        let mut a = Position::new(200.0, 20.0);
        let b = a;
        a.add(&Position::new(1.0, 1.0));
        assert_eq!(b.get(), (200.0, 20.0));
    }

    #[test]
    fn test_apply_velocity_does_not_mutate() {
        let pos = Position::new(100.0, 50.0);
        let vel = Velocity::new(-11.0, 0.0);
        let moved = apply_velocity_to_position(&pos, &vel);
        assert_eq!(moved.get(), (89.0, 50.0));
        assert_eq!(pos.get(), (100.0, 50.0));
        assert_eq!(vel.get(), (-11.0, 0.0));
    }

    #[test]
    fn test_overlap_basic() {
        // Two 10x10 boxes offset by 5 in each axis
        assert!(is_collided(0.0, 0.0, 10.0, 10.0, 5.0, 5.0, 10.0, 10.0));
        // Separated horizontally
        assert!(!is_collided(0.0, 0.0, 10.0, 10.0, 0.0, 20.0, 10.0, 10.0));
        // Separated vertically
        assert!(!is_collided(0.0, 0.0, 10.0, 10.0, 20.0, 0.0, 10.0, 10.0));
    }

    #[test]
    fn test_touching_edges_do_not_collide() {
        // Strict inequalities: sharing an edge is not overlap
        assert!(!is_collided(0.0, 0.0, 10.0, 10.0, 0.0, 10.0, 10.0, 10.0));
        assert!(!is_collided(0.0, 0.0, 10.0, 10.0, 10.0, 0.0, 10.0, 10.0));
    }

    proptest! {
        #[test]
        fn prop_collision_symmetric(
            a_row in -300.0f32..300.0, a_col in -300.0f32..300.0,
            a_h in 0.0f32..50.0, a_w in 0.0f32..50.0,
            b_row in -300.0f32..300.0, b_col in -300.0f32..300.0,
            b_h in 0.0f32..50.0, b_w in 0.0f32..50.0,
        ) {
            let ab = is_collided(a_row, a_col, a_h, a_w, b_row, b_col, b_h, b_w);
            let ba = is_collided(b_row, b_col, b_h, b_w, a_row, a_col, a_h, a_w);
            prop_assert_eq!(ab, ba);
        }

        #[test]
        fn prop_box_collides_with_itself(
            row in -300.0f32..300.0, col in -300.0f32..300.0,
            h in 1.0f32..50.0, w in 1.0f32..50.0,
        ) {
            prop_assert!(is_collided(row, col, h, w, row, col, h, w));
        }
    }
}
