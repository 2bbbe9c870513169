use crate::frontier::{Frontier, OpenList};
use crate::searcher::Node;

/// A* frontier: an open list keyed by distance plus the Manhattan estimate
/// to the goal.
///
/// Relaxation is the same as [`Dijkstra`](crate::dijkstra::Dijkstra); only
/// the key differs. The estimate is consistent on a 4-connected unit grid,
/// so a settled cell never needs reopening and the path is shortest. Ties
/// on the key pop in insertion order.
#[derive(Debug, Default)]
pub(crate) struct AStar {
    open: OpenList,
}

impl Frontier for AStar {
    fn seed(&mut self, idx: usize, node: &Node) {
        self.open.push(idx, node.distance + node.heuristic);
    }

    fn pop(&mut self) -> Option<usize> {
        self.open.pop()
    }

    fn offer(&mut self, idx: usize, node: &mut Node, from: usize, g: i32) {
        if g >= node.distance {
            return;
        }
        node.distance = g;
        node.parent = from;
        self.open.push(idx, g + node.heuristic);
    }
}
