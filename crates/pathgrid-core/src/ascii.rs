//! Text snapshots of a grid.
//!
//! One line per row, one glyph per cell:
//!
//! | glyph | meaning |
//! |---|---|
//! | `.` | open |
//! | `#` | wall |
//! | `S` | start |
//! | `G` | goal |
//! | `@` | start and goal in the same cell |
//!
//! Leading and trailing whitespace is trimmed from the whole text and from
//! each line, so indented raw strings parse as expected.

use std::fmt;
use std::str::FromStr;

use crate::error::GridError;
use crate::geom::Pos;
use crate::grid::Grid;

/// Glyph for an open cell.
pub const OPEN: char = '.';
/// Glyph for a wall.
pub const WALL: char = '#';
/// Glyph for the start cell.
pub const START: char = 'S';
/// Glyph for the goal cell.
pub const GOAL: char = 'G';
/// Glyph for a cell that is both start and goal.
pub const START_GOAL: char = '@';

impl Grid {
    /// Parse a text snapshot.
    ///
    /// Every line must have the same width. The start is marked by exactly
    /// one `S` or `@` and the goal by exactly one `G` or `@`.
    pub fn parse(s: &str) -> Result<Self, GridError> {
        let mut walls = Vec::new();
        let mut start = None;
        let mut goal = None;
        let mut cols = -1;
        let mut rows = 0;

        for line in s.trim().lines().map(str::trim) {
            let mut width = 0;
            for ch in line.chars() {
                let p = Pos::new(rows, width);
                match ch {
                    OPEN => walls.push(false),
                    WALL => walls.push(true),
                    START => {
                        if start.replace(p).is_some() {
                            return Err(GridError::DuplicateStart(p));
                        }
                        walls.push(false);
                    }
                    GOAL => {
                        if goal.replace(p).is_some() {
                            return Err(GridError::DuplicateGoal(p));
                        }
                        walls.push(false);
                    }
                    START_GOAL => {
                        if start.replace(p).is_some() {
                            return Err(GridError::DuplicateStart(p));
                        }
                        if goal.replace(p).is_some() {
                            return Err(GridError::DuplicateGoal(p));
                        }
                        walls.push(false);
                    }
                    glyph => return Err(GridError::UnknownGlyph { glyph, pos: p }),
                }
                width += 1;
            }
            if cols < 0 {
                cols = width;
            } else if width != cols {
                return Err(GridError::RaggedRow {
                    row: rows,
                    width,
                    expected: cols,
                });
            }
            rows += 1;
        }

        if rows == 0 || cols <= 0 {
            return Err(GridError::EmptyDimensions {
                rows,
                cols: cols.max(0),
            });
        }
        let start = start.ok_or(GridError::MissingStart)?;
        let goal = goal.ok_or(GridError::MissingGoal)?;
        Grid::from_parts(rows, cols, walls, start, goal)
    }
}

impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Grid::parse(s)
    }
}

/// Renders the text snapshot. A shared start and goal cell is written `@`, so
/// the output always parses back to an equal grid.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows() {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..self.cols() {
                let p = Pos::new(row, col);
                let glyph = if p == self.start() && p == self.goal() {
                    START_GOAL
                } else if p == self.start() {
                    START
                } else if p == self.goal() {
                    GOAL
                } else if self.is_blocked(p) {
                    WALL
                } else {
                    OPEN
                };
                write!(f, "{glyph}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOM: &str = "
        S.#.
        ..#.
        ...G
    ";

    #[test]
    fn parse_room() {
        let g = Grid::parse(ROOM).unwrap();
        assert_eq!((g.rows(), g.cols()), (3, 4));
        assert_eq!(g.start(), Pos::new(0, 0));
        assert_eq!(g.goal(), Pos::new(2, 3));
        assert!(g.is_blocked(Pos::new(0, 2)));
        assert!(g.is_blocked(Pos::new(1, 2)));
        assert_eq!(g.wall_count(), 2);
    }

    #[test]
    fn display_matches_input() {
        let g: Grid = ROOM.parse().unwrap();
        assert_eq!(g.to_string(), "S.#.\n..#.\n...G");
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            Grid::parse("S.\n.G."),
            Err(GridError::RaggedRow {
                row: 1,
                width: 3,
                expected: 2
            })
        );
        assert_eq!(
            Grid::parse("S.\n.x"),
            Err(GridError::UnknownGlyph {
                glyph: 'x',
                pos: Pos::new(1, 1)
            })
        );
        assert_eq!(
            Grid::parse("SS\n.G"),
            Err(GridError::DuplicateStart(Pos::new(0, 1)))
        );
        assert_eq!(
            Grid::parse("SG\nG."),
            Err(GridError::DuplicateGoal(Pos::new(1, 0)))
        );
        assert_eq!(Grid::parse("..\n.G"), Err(GridError::MissingStart));
        assert_eq!(Grid::parse("S.\n.."), Err(GridError::MissingGoal));
        assert_eq!(
            Grid::parse("   "),
            Err(GridError::EmptyDimensions { rows: 0, cols: 0 })
        );
    }

    #[test]
    fn single_cell_needs_both_endpoints() {
        assert_eq!(Grid::parse("S"), Err(GridError::MissingGoal));
        let g = Grid::parse("@").unwrap();
        assert_eq!(g.start(), Pos::ZERO);
        assert_eq!(g.goal(), Pos::ZERO);
    }

    #[test]
    fn shared_endpoint_round_trips() {
        let mut g = Grid::parse("SG").unwrap();
        g.set_goal(Pos::ZERO).unwrap();
        assert_eq!(g.to_string(), "@.");
        assert_eq!(Grid::parse(&g.to_string()), Ok(g));

        assert_eq!(
            Grid::parse("@S"),
            Err(GridError::DuplicateStart(Pos::new(0, 1)))
        );
        assert_eq!(
            Grid::parse("G@"),
            Err(GridError::DuplicateGoal(Pos::new(0, 1)))
        );
    }
}
