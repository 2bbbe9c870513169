use std::collections::VecDeque;

use crate::frontier::Frontier;
use crate::searcher::{Node, UNREACHABLE};

/// Breadth-first frontier: a FIFO queue.
///
/// A cell is accepted the first time it is offered, so each cell is queued
/// at most once and settles in discovery order. Every step costs 1, which
/// makes the reconstructed path shortest by hop count.
#[derive(Debug, Default)]
pub(crate) struct Bfs {
    queue: VecDeque<usize>,
}

impl Frontier for Bfs {
    fn seed(&mut self, idx: usize, _node: &Node) {
        self.queue.push_back(idx);
    }

    fn pop(&mut self) -> Option<usize> {
        self.queue.pop_front()
    }

    fn offer(&mut self, idx: usize, node: &mut Node, from: usize, g: i32) {
        if node.distance != UNREACHABLE {
            return;
        }
        node.distance = g;
        node.parent = from;
        self.queue.push_back(idx);
    }
}

#[cfg(test)]
mod tests {
    use pathgrid_core::{Grid, Pos};

    use crate::{Searcher, Strategy};

    fn pts(v: &[(i32, i32)]) -> Vec<Pos> {
        v.iter().map(|&p| p.into()).collect()
    }

    #[test]
    fn open_grid_trace_order() {
        let grid = Grid::parse("S..\n...\n..G").unwrap();
        let out = Searcher::new().run(&grid, Strategy::Bfs).unwrap();
        assert_eq!(
            out.visited,
            pts(&[
                (0, 0),
                (1, 0),
                (0, 1),
                (2, 0),
                (1, 1),
                (0, 2),
                (2, 1),
                (1, 2),
                (2, 2)
            ])
        );
        assert_eq!(out.path, pts(&[(0, 0), (1, 0), (2, 0), (2, 1), (2, 2)]));
    }

    #[test]
    fn distances_are_hop_counts() {
        let grid = Grid::parse(
            "
            S.#....
            ..#.##.
            ....#.G
            ",
        )
        .unwrap();
        let mut s = Searcher::new();
        let out = s.run(&grid, Strategy::Bfs).unwrap();
        assert!(out.is_reached());
        assert_eq!(out.path_cost(), Some(12));
        assert_eq!(s.distance_at(Pos::new(2, 3)), 5);
        assert_eq!(s.distance_at(Pos::new(0, 2)), crate::UNREACHABLE);
    }

    #[test]
    fn stops_once_goal_settles() {
        let grid = Grid::parse("SG..\n....").unwrap();
        let out = Searcher::new().run(&grid, Strategy::Bfs).unwrap();
        assert_eq!(out.visited, pts(&[(0, 0), (1, 0), (0, 1)]));
        assert_eq!(out.path, pts(&[(0, 0), (0, 1)]));
    }
}
