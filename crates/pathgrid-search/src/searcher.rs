use pathgrid_core::{Grid, GridError, Pos};

use crate::astar::AStar;
use crate::bfs::Bfs;
use crate::dfs::Dfs;
use crate::dijkstra::Dijkstra;
use crate::distance::manhattan;
use crate::frontier::Frontier;
use crate::strategy::Strategy;

/// Sentinel distance for cells no search has reached.
pub const UNREACHABLE: i32 = i32::MAX;

/// Sentinel predecessor index: the start, or a cell never reached.
pub(crate) const NONE: usize = usize::MAX;

// ---------------------------------------------------------------------------
// Per-cell search metadata
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Node {
    pub(crate) distance: i32,
    pub(crate) heuristic: i32,
    pub(crate) parent: usize,
    pub(crate) visited: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            distance: UNREACHABLE,
            heuristic: 0,
            parent: NONE,
            visited: false,
        }
    }
}

// ---------------------------------------------------------------------------
// SearchOutcome
// ---------------------------------------------------------------------------

/// Result of one search: the settle order and the reconstructed path.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchOutcome {
    pub strategy: Strategy,
    pub start: Pos,
    pub goal: Pos,
    /// Cells in the order they were settled, start first.
    pub visited: Vec<Pos>,
    /// Start to goal inclusive when reached; otherwise just `[goal]`.
    pub path: Vec<Pos>,
}

impl SearchOutcome {
    /// Whether the path actually connects start to goal.
    pub fn is_reached(&self) -> bool {
        self.path.first() == Some(&self.start)
    }

    /// Number of steps along the path, or `None` if the goal was not reached.
    pub fn path_cost(&self) -> Option<usize> {
        self.is_reached().then(|| self.path.len() - 1)
    }
}

// ---------------------------------------------------------------------------
// Searcher
// ---------------------------------------------------------------------------

/// Runs searches over a [`Grid`] and owns all of their bookkeeping.
///
/// The grid is only borrowed for the duration of [`run`](Self::run); the
/// visited flags, distances, heuristics and predecessors live here in a flat
/// array indexed like the grid. The array is reset at the start of every run
/// and reused, so repeated searches allocate nothing once it has grown to
/// the largest grid seen.
///
/// After a run the metadata stays queryable until the next one.
#[derive(Debug, Default)]
pub struct Searcher {
    pub(crate) rows: i32,
    pub(crate) cols: i32,
    pub(crate) nodes: Vec<Node>,
    pub(crate) trace: Vec<Pos>,
}

impl Searcher {
    /// Create an empty searcher. Caches grow on first use.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all search metadata, validate `grid`, and size the metadata for
    /// it with every heuristic recomputed to its goal. The start cell is left
    /// at distance 0.
    ///
    /// The previous run's metadata is discarded even when `grid` is rejected,
    /// so the searcher then answers every query as if it held an empty grid.
    pub fn reset(&mut self, grid: &Grid) -> Result<(), GridError> {
        self.rows = 0;
        self.cols = 0;
        self.nodes.clear();
        self.trace.clear();
        grid.validate()?;

        self.rows = grid.rows();
        self.cols = grid.cols();
        self.nodes.resize(grid.len(), Node::default());
        let goal = grid.goal();
        for (i, n) in self.nodes.iter_mut().enumerate() {
            n.heuristic = manhattan(grid.pos(i), goal);
        }
        let si = grid
            .index(grid.start())
            .ok_or(GridError::OutOfBounds {
                pos: grid.start(),
                rows: grid.rows(),
                cols: grid.cols(),
            })?;
        self.nodes[si].distance = 0;
        Ok(())
    }

    /// Validate `grid`, run `strategy` on it until the goal is settled or the
    /// frontier is exhausted, and reconstruct the path.
    ///
    /// An unreachable goal is not an error: check
    /// [`SearchOutcome::is_reached`].
    pub fn run(&mut self, grid: &Grid, strategy: Strategy) -> Result<SearchOutcome, GridError> {
        if let Err(e) = self.reset(grid) {
            log::warn!("{strategy} search rejected: {e}");
            return Err(e);
        }
        let (start, goal) = (grid.start(), grid.goal());
        log::debug!(
            "{strategy} search on {}x{} grid from {start} to {goal}",
            grid.rows(),
            grid.cols()
        );

        let reached = match strategy {
            Strategy::Bfs => self.traverse(grid, Bfs::default()),
            Strategy::Dfs => self.traverse(grid, Dfs::default()),
            Strategy::Dijkstra => self.traverse(grid, Dijkstra::default()),
            Strategy::AStar => self.traverse(grid, AStar::default()),
        };
        let path = self.reconstruct(goal);

        log::debug!(
            "{strategy} search settled {} cells, goal {}",
            self.trace.len(),
            if reached {
                format!("reached in {} steps", path.len() - 1)
            } else {
                "unreachable".to_string()
            }
        );

        Ok(SearchOutcome {
            strategy,
            start,
            goal,
            visited: self.trace.clone(),
            path,
        })
    }

    /// The shared pop, settle, relax loop. Returns whether the goal was
    /// settled.
    fn traverse<F: Frontier>(&mut self, grid: &Grid, mut frontier: F) -> bool {
        let (Some(si), Some(gi)) = (grid.index(grid.start()), grid.index(grid.goal())) else {
            return false;
        };
        frontier.seed(si, &self.nodes[si]);

        while let Some(ci) = frontier.pop() {
            if self.nodes[ci].visited {
                // Superseded entry.
                continue;
            }
            self.nodes[ci].visited = true;
            let cp = grid.pos(ci);
            self.trace.push(cp);

            if ci == gi {
                log::trace!("goal {cp} settled after {} cells", self.trace.len());
                return true;
            }

            let g = self.nodes[ci].distance + 1;
            for np in grid.neighbors(cp) {
                if grid.is_blocked(np) {
                    continue;
                }
                let Some(ni) = grid.index(np) else {
                    continue;
                };
                let n = &mut self.nodes[ni];
                if n.visited {
                    continue;
                }
                frontier.offer(ni, n, ci, g);
            }
        }

        log::trace!("frontier exhausted after {} cells", self.trace.len());
        false
    }

    // -----------------------------------------------------------------------
    // Queries on the last run
    // -----------------------------------------------------------------------

    /// Cells settled by the last run, in order.
    pub fn trace(&self) -> &[Pos] {
        &self.trace
    }

    /// Distance recorded for `p` by the last run.
    ///
    /// Returns [`UNREACHABLE`] if `p` is outside the grid or was never
    /// reached.
    pub fn distance_at(&self, p: Pos) -> i32 {
        match self.idx(p) {
            Some(i) => self.nodes[i].distance,
            None => UNREACHABLE,
        }
    }

    /// Whether the last run settled `p`.
    pub fn is_visited(&self, p: Pos) -> bool {
        self.idx(p).is_some_and(|i| self.nodes[i].visited)
    }

    /// Manhattan distance from `p` to the goal of the last reset.
    pub fn heuristic_at(&self, p: Pos) -> Option<i32> {
        self.idx(p).map(|i| self.nodes[i].heuristic)
    }

    /// The cell `p` was reached from, if any.
    pub fn predecessor_of(&self, p: Pos) -> Option<Pos> {
        let i = self.idx(p)?;
        let parent = self.nodes[i].parent;
        (parent != NONE).then(|| self.point(parent))
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Flat index of `p` in the last reset grid, or `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Pos) -> Option<usize> {
        if p.row < 0 || p.row >= self.rows || p.col < 0 || p.col >= self.cols {
            return None;
        }
        Some((p.row * self.cols + p.col) as usize)
    }

    /// Position of a flat index.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Pos {
        let cols = self.cols as usize;
        Pos::new((idx / cols) as i32, (idx % cols) as i32)
    }
}

/// Run one search with a throwaway [`Searcher`].
pub fn search(grid: &Grid, strategy: Strategy) -> Result<SearchOutcome, GridError> {
    Searcher::new().run(grid, strategy)
}
