use std::cmp::Ordering;

use petgraph::graph::NodeIndex;

/// Frontier entry of the A* search
#[derive(Copy, Clone, Debug)]
pub(super) struct State {
    /// `g + h` at the time of insertion
    pub(super) estimate: f64,
    /// Insertion counter, lower wins among equal estimates
    pub(super) seq: u64,
    pub(super) node: NodeIndex,
}

// Implement Ord for State to use in BinaryHeap
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-heap by estimate, then by insertion order (reversed from standard Rust BinaryHeap)
        other
            .estimate
            .total_cmp(&self.estimate)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for State {}

#[cfg(test)]
mod tests {
    use std::collections::BinaryHeap;

    use super::*;

    #[test]
    fn pops_lowest_estimate_then_earliest_insertion() {
        let mut heap = BinaryHeap::new();
        for (seq, estimate) in [(0, 2.0), (1, 1.0), (2, 1.0), (3, 0.5)] {
            heap.push(State {
                estimate,
                seq,
                node: NodeIndex::new(seq as usize),
            });
        }
        let order: Vec<u64> = std::iter::from_fn(|| heap.pop().map(|s| s.seq)).collect();
        assert_eq!(order, vec![3, 1, 2, 0]);
    }
}
