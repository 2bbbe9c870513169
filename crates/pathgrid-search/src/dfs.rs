use crate::frontier::Frontier;
use crate::searcher::{NONE, Node};

/// Depth-first frontier: a LIFO stack.
///
/// Every open, unsettled neighbour is pushed, even if it is already on the
/// stack, and the visited check happens when it is popped. The predecessor
/// belongs to the first cell that pushed it and is never overwritten by
/// later pushes. Paths are valid but generally not shortest.
#[derive(Debug, Default)]
pub(crate) struct Dfs {
    stack: Vec<usize>,
}

impl Frontier for Dfs {
    fn seed(&mut self, idx: usize, _node: &Node) {
        self.stack.push(idx);
    }

    fn pop(&mut self) -> Option<usize> {
        self.stack.pop()
    }

    fn offer(&mut self, idx: usize, node: &mut Node, from: usize, g: i32) {
        if node.parent == NONE {
            node.parent = from;
            node.distance = g;
        }
        self.stack.push(idx);
    }
}
