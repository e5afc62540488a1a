use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// Position on the grid, `Dims(row, col)`.
///
/// Signed so that offsets can step outside of the grid and be rejected afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Dims(pub i32, pub i32);

impl Dims {
    pub const ZERO: Dims = Dims(0, 0);

    /// Iterates positions in `[from, to)` in row-major order.
    pub fn iter_fill(from: Dims, to: Dims) -> impl Iterator<Item = Dims> {
        (from.0..to.0).flat_map(move |row| (from.1..to.1).map(move |col| Dims(row, col)))
    }

    pub fn all_non_negative(self) -> bool {
        self.0 >= 0 && self.1 >= 0
    }

    pub fn abs_sum(self) -> i32 {
        self.0.abs() + self.1.abs()
    }

    /// Index of this position in a row-major buffer of the given size.
    pub fn linear_index(&self, size: Dims) -> usize {
        assert!(self.all_non_negative());
        (self.0 * size.1 + self.1) as usize
    }

    /// Two positions are adjacent when they differ by exactly one in exactly one coordinate.
    pub fn is_adjacent(self, other: Dims) -> bool {
        (self - other).abs_sum() == 1
    }
}

impl Add for Dims {
    type Output = Dims;

    fn add(self, other: Dims) -> Dims {
        Dims(self.0 + other.0, self.1 + other.1)
    }
}

impl Sub for Dims {
    type Output = Dims;

    fn sub(self, other: Dims) -> Dims {
        Dims(self.0 - other.0, self.1 - other.1)
    }
}

impl From<(usize, usize)> for Dims {
    fn from(tuple: (usize, usize)) -> Self {
        Dims(tuple.0 as i32, tuple.1 as i32)
    }
}
