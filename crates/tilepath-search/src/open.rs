use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Reference into the grid's tile array, ordered for use in `BinaryHeap`.
///
/// The heap pops the lowest `f` first, then the lowest `h`, then the entry
/// pushed earliest.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub(crate) struct OpenEntry {
    pub(crate) idx: usize,
    pub(crate) f: u64,
    pub(crate) h: u32,
    pub(crate) seq: u64,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest key first.
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.h.cmp(&self.h))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// The open set. A tile whose cost improves while queued is pushed again;
/// the outdated entry is recognised on pop by its `f` no longer matching
/// the tile's live bookkeeping.
#[derive(Debug, Default)]
pub(crate) struct OpenSet {
    heap: BinaryHeap<OpenEntry>,
    seq: u64,
}

impl OpenSet {
    pub(crate) fn clear(&mut self) {
        self.heap.clear();
        self.seq = 0;
    }

    pub(crate) fn push(&mut self, idx: usize, f: u64, h: u32) {
        self.heap.push(OpenEntry {
            idx,
            f,
            h,
            seq: self.seq,
        });
        self.seq += 1;
    }

    pub(crate) fn pop(&mut self) -> Option<OpenEntry> {
        self.heap.pop()
    }

    /// Entries pushed since the last [`clear`](Self::clear).
    pub(crate) fn pushed(&self) -> u64 {
        self.seq
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_lowest_f_then_h_then_fifo() {
        let mut open = OpenSet::default();
        open.push(0, 5, 1);
        open.push(1, 4, 3);
        open.push(2, 4, 2);
        open.push(3, 4, 2);
        let order: Vec<usize> = std::iter::from_fn(|| open.pop()).map(|e| e.idx).collect();
        assert_eq!(order, vec![2, 3, 1, 0]);
        assert_eq!(open.pushed(), 4);
    }

    #[test]
    fn clear_restarts_sequence() {
        let mut open = OpenSet::default();
        open.push(7, 1, 1);
        open.clear();
        assert!(open.pop().is_none());
        assert_eq!(open.pushed(), 0);
    }
}
