//! Grid layout presets.

use crate::geom::Pos;

/// Dimensions and endpoints used to build a fresh [`Grid`](crate::Grid).
///
/// The default is the wide 25x35 layout; [`compact`](Self::compact) gives
/// the narrower 20x30 layout with the same endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridConfig {
    pub rows: i32,
    pub cols: i32,
    pub start: Pos,
    pub goal: Pos,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: 25,
            cols: 35,
            start: Pos::new(5, 5),
            goal: Pos::new(15, 25),
        }
    }
}

impl GridConfig {
    /// An open grid of the given size with explicit endpoints.
    pub const fn new(rows: i32, cols: i32, start: Pos, goal: Pos) -> Self {
        Self {
            rows,
            cols,
            start,
            goal,
        }
    }

    /// The 20x30 layout for small screens.
    pub fn compact() -> Self {
        Self {
            rows: 20,
            cols: 30,
            ..Self::default()
        }
    }

    /// Same endpoints, different dimensions.
    pub fn with_size(self, rows: i32, cols: i32) -> Self {
        Self { rows, cols, ..self }
    }

    /// Whether both endpoints lie inside the configured dimensions.
    ///
    /// A layout switch should be refused when this is false rather than
    /// silently clamping the endpoints.
    pub fn fits(&self) -> bool {
        let inside = |p: Pos| p.row >= 0 && p.row < self.rows && p.col >= 0 && p.col < self.cols;
        inside(self.start) && inside(self.goal)
    }
}
