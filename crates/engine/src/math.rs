//! Scalar math primitives shared across the engine.

use core::ops::{Add, AddAssign};

/// Two-component vector used for positions, facings, and velocities.
///
/// Values stay in float space so movement deltas can accumulate freely;
/// world-grid coordinates are derived by truncation at query time.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// True when both components are exactly zero.
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Truncates to the containing world-grid cell.
    pub fn grid(self) -> (i32, i32) {
        (self.x as i32, self.y as i32)
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

/// Spatial snapshot of a pawn: where it is and which way it last moved.
///
/// A zero `facing` means the pawn has not moved yet. Facing carries the raw
/// velocity that produced it; only the component signs are meaningful.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Frame {
    pub position: Vec2,
    pub facing: Vec2,
}

impl Frame {
    pub const fn new(position: Vec2, facing: Vec2) -> Self {
        Self { position, facing }
    }

    /// Frame at `position` with no facing.
    pub const fn at(position: Vec2) -> Self {
        Self {
            position,
            facing: Vec2::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addition_accumulates_both_components() {
        let mut v = Vec2::new(1.0, -2.0);
        v += Vec2::new(0.5, 2.0);
        assert_eq!(v, Vec2::new(1.5, 0.0));
        assert_eq!(v + Vec2::new(-1.5, 1.0), Vec2::new(0.0, 1.0));
    }

    #[test]
    fn grid_truncates_toward_zero() {
        assert_eq!(Vec2::new(2.9, 3.1).grid(), (2, 3));
        assert_eq!(Vec2::new(20.0, 10.0).grid(), (20, 10));
    }

    #[test]
    fn zero_check_requires_both_components() {
        assert!(Vec2::ZERO.is_zero());
        assert!(!Vec2::new(0.0, 1.0).is_zero());
        assert!(!Vec2::new(-1.0, 0.0).is_zero());
    }
}
