use std::cmp::Ordering;

use crate::common::State;

/// Frontier entry for the cost-ordered drivers. `Ord` is inverted so that
/// `BinaryHeap`, a max-heap, pops the minimum priority first. Ties break on
/// the insertion sequence number, so equal-priority states come out in
/// insertion order and repeated runs pop identically.
#[derive(Debug, Clone)]
pub(super) struct OpenNode {
    pub(super) priority: usize,
    pub(super) seq: usize,
    pub(super) state: State,
}

impl OpenNode {
    pub(super) fn new(priority: usize, seq: usize, state: State) -> Self {
        OpenNode {
            priority,
            seq,
            state,
        }
    }
}

impl PartialEq for OpenNode {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.seq == other.seq
    }
}

impl Eq for OpenNode {}

impl Ord for OpenNode {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
