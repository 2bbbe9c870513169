use thiserror::Error;

use crate::geom::Pos;

/// Reasons a grid, a grid edit, or a grid snapshot is rejected.
///
/// Every search validates its grid before touching it, so these are always
/// reported up front and never in the middle of a traversal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The grid has zero rows or zero columns.
    #[error("grid dimensions must be at least 1x1, got {rows}x{cols}")]
    EmptyDimensions { rows: i32, cols: i32 },
    /// The cell count does not fit a row-major `i32` index.
    #[error("grid dimensions {rows}x{cols} exceed the addressable cell count")]
    OversizedDimensions { rows: i32, cols: i32 },
    /// No cell is marked as the start.
    #[error("grid has no start cell")]
    MissingStart,
    /// No cell is marked as the goal.
    #[error("grid has no goal cell")]
    MissingGoal,
    /// More than one cell is marked as the start.
    #[error("grid has a second start cell at {0}")]
    DuplicateStart(Pos),
    /// More than one cell is marked as the goal.
    #[error("grid has a second goal cell at {0}")]
    DuplicateGoal(Pos),
    /// The start cell is a wall.
    #[error("start cell {0} is blocked")]
    BlockedStart(Pos),
    /// The goal cell is a wall.
    #[error("goal cell {0} is blocked")]
    BlockedGoal(Pos),
    /// A position lies outside the grid.
    #[error("position {pos} is outside the {rows}x{cols} grid")]
    OutOfBounds { pos: Pos, rows: i32, cols: i32 },
    /// A per-cell snapshot does not hold exactly `rows * cols` cells.
    #[error("snapshot holds {got} cells, expected {expected}")]
    SnapshotLength { expected: usize, got: usize },
    /// ASCII rows have different widths.
    #[error("row {row} has width {width}, expected {expected}")]
    RaggedRow {
        row: i32,
        width: i32,
        expected: i32,
    },
    /// An ASCII glyph other than `.`, `#`, `S`, `G` or `@`.
    #[error("unknown glyph \u{201c}{glyph}\u{201d} at {pos}")]
    UnknownGlyph { glyph: char, pos: Pos },
}
