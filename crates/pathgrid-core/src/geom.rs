//! Geometry primitives: [`Pos`].
//!
//! Positions are `(row, col)` pairs. Rows grow downward and columns grow to
//! the right, matching the row-major layout of [`Grid`](crate::Grid).

use std::fmt;
use std::ops::{Add, Sub};

/// A cell position on the grid.
///
/// Coordinates are signed so that neighbour arithmetic can step outside the
/// grid; [`Grid::contains`](crate::Grid::contains) filters those out.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pos {
    pub row: i32,
    pub col: i32,
}

impl Pos {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// One step up.
    pub const UP: Self = Self { row: -1, col: 0 };
    /// One step down.
    pub const DOWN: Self = Self { row: 1, col: 0 };
    /// One step left.
    pub const LEFT: Self = Self { row: 0, col: -1 };
    /// One step right.
    pub const RIGHT: Self = Self { row: 0, col: 1 };

    /// Cardinal steps in neighbour order: up, down, left, right.
    ///
    /// Every search strategy expands neighbours in this order, so it fixes
    /// their tie-breaking.
    pub const CARDINALS: [Self; 4] = [Self::UP, Self::DOWN, Self::LEFT, Self::RIGHT];

    /// Create a new position.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a position shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// The four orthogonal neighbours in [`CARDINALS`](Self::CARDINALS)
    /// order. No bounds check.
    #[inline]
    pub fn neighbors_4(self) -> [Pos; 4] {
        Self::CARDINALS.map(|d| self + d)
    }

    /// Whether `other` is orthogonally adjacent to `self`.
    #[inline]
    pub fn is_adjacent(self, other: Pos) -> bool {
        (self.row - other.row).abs() + (self.col - other.col).abs() == 1
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl Add for Pos {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Pos {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

impl From<(i32, i32)> for Pos {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pos_arithmetic() {
        let a = Pos::new(1, 2);
        let b = Pos::new(3, 4);
        assert_eq!(a + b, Pos::new(4, 6));
        assert_eq!(b - a, Pos::new(2, 2));
        assert_eq!(a.shift(-1, 1), Pos::new(0, 3));
    }

    #[test]
    fn neighbors_are_up_down_left_right() {
        let p = Pos::new(5, 5);
        assert_eq!(
            p.neighbors_4(),
            [
                Pos::new(4, 5),
                Pos::new(6, 5),
                Pos::new(5, 4),
                Pos::new(5, 6)
            ]
        );
    }

    #[test]
    fn adjacency() {
        let a = Pos::new(0, 0);
        assert!(a.is_adjacent(Pos::new(0, 1)));
        assert!(!a.is_adjacent(Pos::new(1, 1)));
        assert!(!a.is_adjacent(a));
    }

    #[test]
    fn display() {
        assert_eq!(Pos::new(3, -1).to_string(), "(3, -1)");
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn pos_json_shape() {
        let json = serde_json::to_string(&Pos::new(2, 7)).unwrap();
        assert_eq!(json, r#"{"row":2,"col":7}"#);
    }
}
