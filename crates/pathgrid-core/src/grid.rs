//! The grid model: dimensions, walls, start and goal.
//!
//! A [`Grid`] is plain data owned by the caller. Searches borrow it shared
//! and keep their own bookkeeping, so edits (which need `&mut Grid`) can
//! never happen while a search is running.

use crate::config::GridConfig;
use crate::error::GridError;
use crate::geom::Pos;

/// Per-cell flags exchanged with a presentation layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CellSnapshot {
    pub blocked: bool,
    pub start: bool,
    pub goal: bool,
}

impl CellSnapshot {
    /// An open cell with no endpoint flags.
    pub const OPEN: Self = Self {
        blocked: false,
        start: false,
        goal: false,
    };

    /// A wall.
    pub const WALL: Self = Self {
        blocked: true,
        start: false,
        goal: false,
    };
}

/// A rectangular grid of open and blocked cells with one start and one goal.
///
/// Invariants held by every constructor and edit:
///
/// - `rows >= 1` and `cols >= 1`, and `rows * cols` fits in an `i32`;
/// - `start` and `goal` are in bounds and not blocked.
///
/// Start and goal may coincide.
///
/// With the `serde` feature a grid can also be deserialized, which skips the
/// checks above; searches re-validate before running.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    rows: i32,
    cols: i32,
    walls: Vec<bool>,
    start: Pos,
    goal: Pos,
}

impl Grid {
    /// Create an open grid from a layout.
    pub fn new(cfg: &GridConfig) -> Result<Self, GridError> {
        check_dimensions(cfg.rows, cfg.cols)?;
        let grid = Self {
            rows: cfg.rows,
            cols: cfg.cols,
            walls: vec![false; (cfg.rows as usize) * (cfg.cols as usize)],
            start: cfg.start,
            goal: cfg.goal,
        };
        grid.check_bounds(cfg.start)?;
        grid.check_bounds(cfg.goal)?;
        Ok(grid)
    }

    /// Build a grid from a row-major list of per-cell flags.
    ///
    /// Exactly one cell must carry `start` and exactly one `goal` (possibly
    /// the same cell), and neither may be blocked.
    pub fn from_cells(rows: i32, cols: i32, cells: &[CellSnapshot]) -> Result<Self, GridError> {
        check_dimensions(rows, cols)?;
        let expected = (rows as usize) * (cols as usize);
        if cells.len() != expected {
            return Err(GridError::SnapshotLength {
                expected,
                got: cells.len(),
            });
        }

        let mut start = None;
        let mut goal = None;
        for (i, cell) in cells.iter().enumerate() {
            let p = Pos::new(i as i32 / cols, i as i32 % cols);
            if cell.start {
                if start.is_some() {
                    return Err(GridError::DuplicateStart(p));
                }
                start = Some(p);
            }
            if cell.goal {
                if goal.is_some() {
                    return Err(GridError::DuplicateGoal(p));
                }
                goal = Some(p);
            }
        }
        let start = start.ok_or(GridError::MissingStart)?;
        let goal = goal.ok_or(GridError::MissingGoal)?;

        let grid = Self {
            rows,
            cols,
            walls: cells.iter().map(|c| c.blocked).collect(),
            start,
            goal,
        };
        grid.validate()?;
        Ok(grid)
    }

    /// Re-check every invariant.
    ///
    /// Constructors and edits already enforce them; searches call this once
    /// more before starting so that every strategy rejects bad input in the
    /// same way.
    pub fn validate(&self) -> Result<(), GridError> {
        check_dimensions(self.rows, self.cols)?;
        if self.walls.len() != self.len() {
            return Err(GridError::SnapshotLength {
                expected: self.len(),
                got: self.walls.len(),
            });
        }
        self.check_bounds(self.start)?;
        self.check_bounds(self.goal)?;
        if self.is_blocked(self.start) {
            return Err(GridError::BlockedStart(self.start));
        }
        if self.is_blocked(self.goal) {
            return Err(GridError::BlockedGoal(self.goal));
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        (self.rows.max(0) as usize) * (self.cols.max(0) as usize)
    }

    /// Always false for a valid grid; present for symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The start position.
    #[inline]
    pub fn start(&self) -> Pos {
        self.start
    }

    /// The goal position.
    #[inline]
    pub fn goal(&self) -> Pos {
        self.goal
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Pos) -> bool {
        p.row >= 0 && p.row < self.rows && p.col >= 0 && p.col < self.cols
    }

    /// Row-major flat index of `p`, or `None` if out of bounds.
    #[inline]
    pub fn index(&self, p: Pos) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some((p.row * self.cols + p.col) as usize)
    }

    /// Position of a flat index. The index must be below [`len`](Self::len).
    #[inline]
    pub fn pos(&self, idx: usize) -> Pos {
        let cols = self.cols as usize;
        Pos::new((idx / cols) as i32, (idx % cols) as i32)
    }

    /// Whether `p` is a wall. Out-of-bounds positions count as blocked.
    #[inline]
    pub fn is_blocked(&self, p: Pos) -> bool {
        match self.index(p) {
            Some(i) => self.walls[i],
            None => true,
        }
    }

    /// Whether `p` is in bounds and not a wall.
    #[inline]
    pub fn is_open(&self, p: Pos) -> bool {
        !self.is_blocked(p)
    }

    /// In-bounds orthogonal neighbours of `p`, in the fixed order
    /// up, down, left, right. Walls are included; callers filter them.
    pub fn neighbors(&self, p: Pos) -> impl Iterator<Item = Pos> + '_ {
        p.neighbors_4().into_iter().filter(|&n| self.contains(n))
    }

    /// Number of walls.
    pub fn wall_count(&self) -> usize {
        self.walls.iter().filter(|&&w| w).count()
    }

    /// Row-major iterator over every position.
    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..self.len()).map(|i| self.pos(i))
    }

    /// Per-cell flags in row-major order, the inverse of
    /// [`from_cells`](Self::from_cells).
    pub fn snapshot(&self) -> Vec<CellSnapshot> {
        self.positions()
            .map(|p| CellSnapshot {
                blocked: self.is_blocked(p),
                start: p == self.start,
                goal: p == self.goal,
            })
            .collect()
    }

    // -----------------------------------------------------------------------
    // Edits
    // -----------------------------------------------------------------------

    /// Make `p` a wall or open it up.
    ///
    /// Walling the start or the goal is refused.
    pub fn set_blocked(&mut self, p: Pos, blocked: bool) -> Result<(), GridError> {
        let i = self.checked_index(p)?;
        if blocked {
            if p == self.start {
                return Err(GridError::BlockedStart(p));
            }
            if p == self.goal {
                return Err(GridError::BlockedGoal(p));
            }
        }
        self.walls[i] = blocked;
        Ok(())
    }

    /// Flip the wall state of `p` and return the new state.
    pub fn toggle_wall(&mut self, p: Pos) -> Result<bool, GridError> {
        let blocked = !self.is_blocked(p);
        self.set_blocked(p, blocked)?;
        log::trace!("wall at {p} toggled to {blocked}");
        Ok(blocked)
    }

    /// Move the start onto an open cell.
    pub fn set_start(&mut self, p: Pos) -> Result<(), GridError> {
        let i = self.checked_index(p)?;
        if self.walls[i] {
            return Err(GridError::BlockedStart(p));
        }
        self.start = p;
        Ok(())
    }

    /// Move the goal onto an open cell.
    pub fn set_goal(&mut self, p: Pos) -> Result<(), GridError> {
        let i = self.checked_index(p)?;
        if self.walls[i] {
            return Err(GridError::BlockedGoal(p));
        }
        self.goal = p;
        Ok(())
    }

    /// Remove every wall.
    pub fn clear_walls(&mut self) {
        let n = self.wall_count();
        self.walls.fill(false);
        log::debug!("cleared {n} walls");
    }

    fn checked_index(&self, p: Pos) -> Result<usize, GridError> {
        self.index(p).ok_or(GridError::OutOfBounds {
            pos: p,
            rows: self.rows,
            cols: self.cols,
        })
    }

    fn check_bounds(&self, p: Pos) -> Result<(), GridError> {
        self.checked_index(p).map(|_| ())
    }

    /// Assemble a grid from already-parsed parts and validate it.
    pub(crate) fn from_parts(
        rows: i32,
        cols: i32,
        walls: Vec<bool>,
        start: Pos,
        goal: Pos,
    ) -> Result<Self, GridError> {
        let grid = Self {
            rows,
            cols,
            walls,
            start,
            goal,
        };
        grid.validate()?;
        Ok(grid)
    }
}

fn check_dimensions(rows: i32, cols: i32) -> Result<(), GridError> {
    if rows < 1 || cols < 1 {
        return Err(GridError::EmptyDimensions { rows, cols });
    }
    if rows.checked_mul(cols).is_none() {
        return Err(GridError::OversizedDimensions { rows, cols });
    }
    Ok(())
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn deserialized_grid_can_break_invariants() {
        let json = r#"{"rows":1,"cols":2,"walls":[true,false],"start":{"row":0,"col":0},"goal":{"row":0,"col":1}}"#;
        let g: Grid = serde_json::from_str(json).unwrap();
        assert_eq!(g.validate(), Err(GridError::BlockedStart(Pos::new(0, 0))));

        let json = r#"{"rows":46341,"cols":46341,"walls":[],"start":{"row":0,"col":0},"goal":{"row":0,"col":0}}"#;
        let g: Grid = serde_json::from_str(json).unwrap();
        assert_eq!(
            g.validate(),
            Err(GridError::OversizedDimensions {
                rows: 46_341,
                cols: 46_341
            })
        );
    }

    #[test]
    fn grid_round_trip() {
        let g = Grid::parse("S#\n.G").unwrap();
        let json = serde_json::to_string(&g).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(g, back);
    }
}
