use std::fmt;

use serde::{Deserialize, Serialize};

/// A grid-cell coordinate.
///
/// Plain value type — compared and copied, never shared mutable state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Target cell after applying a fractional displacement.
    ///
    /// The summed coordinate (not the delta) is rounded half-away-from-zero
    /// (`f32::round`), so `0 + (-0.5)` lands on `-1` while `5 + (-0.5)`
    /// lands on `5`.
    pub fn displaced_by(self, dx: f32, dy: f32) -> Position {
        let (rx, ry) = rounded_delta(self.x as f32 + dx, self.y as f32 + dy);
        Position::new(rx, ry)
    }

    /// Component-wise difference `self - other`.
    pub fn delta_from(self, other: Position) -> (i32, i32) {
        (self.x - other.x, self.y - other.y)
    }
}

/// Round a fractional displacement pair to whole cells, half-away-from-zero.
pub fn rounded_delta(dx: f32, dy: f32) -> (i32, i32) {
    (dx.round() as i32, dy.round() as i32)
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
