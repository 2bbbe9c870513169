use crate::frontier::{Frontier, OpenList};
use crate::searcher::Node;

/// Uniform-cost frontier: an open list keyed by distance from the start.
///
/// Cells are inserted lazily on relaxation and re-inserted when their
/// distance improves; superseded entries surface later and are skipped.
/// Ties on distance pop in insertion order.
#[derive(Debug, Default)]
pub(crate) struct Dijkstra {
    open: OpenList,
}

impl Frontier for Dijkstra {
    fn seed(&mut self, idx: usize, node: &Node) {
        self.open.push(idx, node.distance);
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
        self.open.push(idx, g);
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
    fn settles_in_distance_order() {
        let grid = Grid::parse(
            "
            S..
            #.#
            ..G
            ",
        )
        .unwrap();
        let mut s = Searcher::new();
        let out = s.run(&grid, Strategy::Dijkstra).unwrap();
        assert_eq!(
            out.visited,
            pts(&[(0, 0), (0, 1), (1, 1), (0, 2), (2, 1), (2, 0), (2, 2)])
        );
        assert_eq!(out.path, pts(&[(0, 0), (0, 1), (1, 1), (2, 1), (2, 2)]));

        let dists: Vec<_> = out.visited.iter().map(|&p| s.distance_at(p)).collect();
        assert_eq!(dists, vec![0, 1, 2, 2, 3, 4, 4]);
        assert!(!s.is_visited(Pos::new(1, 0)));
        assert!(!s.is_visited(Pos::new(1, 2)));
    }

    #[test]
    fn equal_distances_keep_insertion_order() {
        let grid = Grid::parse("S..\n...\n..G").unwrap();
        let dijkstra = Searcher::new().run(&grid, Strategy::Dijkstra).unwrap();
        let bfs = Searcher::new().run(&grid, Strategy::Bfs).unwrap();
        assert_eq!(dijkstra.visited, bfs.visited);
        assert_eq!(dijkstra.path, bfs.path);
    }

    #[test]
    fn walls_are_never_settled() {
        let grid = Grid::parse(
            "
            S.#.
            .##.
            ...G
            ",
        )
        .unwrap();
        let out = Searcher::new().run(&grid, Strategy::Dijkstra).unwrap();
        assert!(out.is_reached());
        assert_eq!(out.path_cost(), Some(5));
        assert!(out.visited.iter().all(|&p| grid.is_open(p)));
    }
}
