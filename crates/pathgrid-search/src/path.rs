//! Path reconstruction from predecessor links.

use pathgrid_core::Pos;

use crate::searcher::{NONE, Searcher};

impl Searcher {
    /// Walk predecessor links back from `goal` and return the path in
    /// start-to-goal order.
    ///
    /// If `goal` was never reached (and is not the start) the result is just
    /// `[goal]`, so callers tell an unreached goal from a trivial path by
    /// checking whether the first element is the start. Returns an empty
    /// path if `goal` lies outside the last reset grid.
    pub fn reconstruct(&self, goal: Pos) -> Vec<Pos> {
        let Some(gi) = self.idx(goal) else {
            return Vec::new();
        };

        let mut path = Vec::new();
        let mut ci = gi;
        while ci != NONE {
            path.push(self.point(ci));
            ci = self.nodes[ci].parent;
        }
        path.reverse();
        path
    }
}
