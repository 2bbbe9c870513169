use pathgrid_core::Pos;

/// Manhattan (L1) distance between two positions.
///
/// On a 4-connected grid with unit steps this never overestimates the
/// remaining cost, which makes it an admissible and consistent A* heuristic.
#[inline]
pub fn manhattan(a: Pos, b: Pos) -> i32 {
    (a.row - b.row).abs() + (a.col - b.col).abs()
}
