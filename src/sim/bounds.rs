use serde::{Deserialize, Serialize};

use crate::model::Position;

/// How a target position related to the grid bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryStatus {
    /// Already in bounds; returned as-is.
    Unchanged,
    /// Out of bounds with wrapping off; capped at the nearest edge.
    Clamped,
    /// Out of bounds with wrapping on; re-entered from the opposite edge.
    Wrapped,
}

/// The rectangular extent of the grid: valid cells are
/// `[0, width) × [0, height)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridBounds {
    width: i32,
    height: i32,
}

impl GridBounds {
    /// # Panics
    /// Panics if either dimension is not positive.
    pub fn new(width: i32, height: i32) -> Self {
        assert!(
            width > 0 && height > 0,
            "grid bounds must be positive: {width}x{height}"
        );
        Self { width, height }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn contains(&self, position: Position) -> bool {
        (0..self.width).contains(&position.x) && (0..self.height).contains(&position.y)
    }

    /// Map a raw target position to a valid cell.
    ///
    /// Pure and total: always returns an in-bounds position. Wrapping uses
    /// true modulo (`rem_euclid`), so negative coordinates wrap to the high
    /// end; clamping caps each coordinate independently.
    pub fn validate(&self, position: Position, wrap: bool) -> (Position, BoundaryStatus) {
        if self.contains(position) {
            return (position, BoundaryStatus::Unchanged);
        }
        if wrap {
            let wrapped = Position::new(
                position.x.rem_euclid(self.width),
                position.y.rem_euclid(self.height),
            );
            (wrapped, BoundaryStatus::Wrapped)
        } else {
            let clamped = Position::new(
                position.x.clamp(0, self.width - 1),
                position.y.clamp(0, self.height - 1),
            );
            (clamped, BoundaryStatus::Clamped)
        }
    }
}
