//! Pathfinding algorithms
//!
//! Breadth-first search for unweighted shortest paths and Dijkstra for
//! non-negative weighted ones. Both expand neighbors in CSR row order, so
//! among equally short paths the first one discovered is returned.

use super::common::{GraphView, NodeId};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, VecDeque};

/// Result of a pathfinding algorithm
#[derive(Debug, Clone, PartialEq)]
pub struct PathResult {
    pub source: NodeId,
    pub target: NodeId,
    pub path: Vec<NodeId>,
    pub cost: f64,
}

impl PathResult {
    /// Number of edges along the path
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

fn reconstruct(view: &GraphView, parents: &HashMap<usize, Option<usize>>, target_idx: usize) -> Vec<NodeId> {
    let mut path = Vec::new();
    let mut curr = Some(target_idx);
    while let Some(idx) = curr {
        path.push(view.index_to_node[idx]);
        curr = parents.get(&idx).copied().flatten();
    }
    path.reverse();
    path
}

/// Breadth-First Search (Unweighted Shortest Path)
///
/// Returns `None` when either endpoint is unknown to the view or the target is
/// unreachable. Cost is the number of hops.
pub fn bfs(
    view: &GraphView,
    source: NodeId,
    target: NodeId,
) -> Option<PathResult> {
    let source_idx = *view.node_to_index.get(&source)?;
    let target_idx = *view.node_to_index.get(&target)?;

    let mut queue = VecDeque::new();
    let mut visited = HashMap::new(); // index -> parent_index

    queue.push_back(source_idx);
    visited.insert(source_idx, None);

    while let Some(current_idx) = queue.pop_front() {
        if current_idx == target_idx {
            let path = reconstruct(view, &visited, target_idx);
            return Some(PathResult {
                source,
                target,
                cost: (path.len() - 1) as f64,
                path,
            });
        }

        for &next_idx in view.successors(current_idx) {
            if !visited.contains_key(&next_idx) {
                visited.insert(next_idx, Some(current_idx));
                queue.push_back(next_idx);
            }
        }
    }

    None
}

/// State for Dijkstra priority queue
#[derive(Copy, Clone, PartialEq)]
struct State {
    cost: f64,
    /// Push order; breaks cost ties first-in first-out
    seq: u64,
    node_idx: usize,
}

impl Eq for State {}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        // Compare costs reversed for min-heap
        other
            .cost
            .partial_cmp(&self.cost)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Dijkstra's Algorithm (Weighted Shortest Path)
///
/// Uses edge weights from GraphView if available, otherwise assumes 1.0.
/// Negative weights are skipped; callers that must reject them check first.
pub fn dijkstra(
    view: &GraphView,
    source: NodeId,
    target: NodeId,
) -> Option<PathResult> {
    let source_idx = *view.node_to_index.get(&source)?;
    let target_idx = *view.node_to_index.get(&target)?;

    let mut dist = HashMap::new();
    let mut parent: HashMap<usize, Option<usize>> = HashMap::new();
    let mut heap = BinaryHeap::new();
    let mut seq = 0u64;

    dist.insert(source_idx, 0.0);
    parent.insert(source_idx, None);
    heap.push(State { cost: 0.0, seq, node_idx: source_idx });

    while let Some(State { cost, node_idx, .. }) = heap.pop() {
        if node_idx == target_idx {
            return Some(PathResult {
                source,
                target,
                path: reconstruct(view, &parent, target_idx),
                cost,
            });
        }

        if cost > *dist.get(&node_idx).unwrap_or(&f64::INFINITY) {
            continue;
        }

        let weights = view.weights(node_idx);

        for (i, &next_idx) in view.successors(node_idx).iter().enumerate() {
            let weight = weights.map_or(1.0, |w| w[i]);

            if weight < 0.0 { continue; }

            let next_cost = cost + weight;

            if next_cost < *dist.get(&next_idx).unwrap_or(&f64::INFINITY) {
                dist.insert(next_idx, next_cost);
                parent.insert(next_idx, Some(node_idx));
                seq += 1;
                heap.push(State { cost: next_cost, seq, node_idx: next_idx });
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bfs() {
        // 0->1->2
        let view = GraphView::from_edges(3, &[(0, 1, 1.0), (1, 2, 1.0)], false, false);

        let result = bfs(&view, 0, 2).unwrap();
        assert_eq!(result.path, vec![0, 1, 2]);
        assert_eq!(result.cost, 2.0);
        assert_eq!(result.hops(), 2);
    }

    #[test]
    fn test_bfs_respects_direction() {
        let view = GraphView::from_edges(3, &[(0, 1, 1.0), (1, 2, 1.0)], false, false);
        assert!(bfs(&view, 2, 0).is_none());

        let undirected = GraphView::from_edges(3, &[(0, 1, 1.0), (1, 2, 1.0)], true, false);
        assert_eq!(bfs(&undirected, 2, 0).unwrap().path, vec![2, 1, 0]);
    }

    #[test]
    fn test_bfs_tie_break_follows_row_order() {
        // Two equal routes 0->1->3 and 0->2->3; edge 0->2 inserted first.
        let edges = [(0, 2, 1.0), (0, 1, 1.0), (1, 3, 1.0), (2, 3, 1.0)];
        let view = GraphView::from_edges(4, &edges, false, false);

        assert_eq!(bfs(&view, 0, 3).unwrap().path, vec![0, 2, 3]);
    }

    #[test]
    fn test_bfs_same_node_and_unknown_node() {
        let view = GraphView::from_edges(2, &[(0, 1, 1.0)], false, false);

        let result = bfs(&view, 1, 1).unwrap();
        assert_eq!(result.path, vec![1]);
        assert_eq!(result.cost, 0.0);

        assert!(bfs(&view, 0, 42).is_none());
    }

    #[test]
    fn test_dijkstra() {
        // 0->1 (10.0), 1->2 (5.0), 0->2 (50.0)
        let edges = [(0, 1, 10.0), (0, 2, 50.0), (1, 2, 5.0)];
        let view = GraphView::from_edges(3, &edges, false, true);

        let result = dijkstra(&view, 0, 2).unwrap();
        assert_eq!(result.path, vec![0, 1, 2]);
        assert_eq!(result.cost, 15.0);
    }

    #[test]
    fn test_dijkstra_tie_break_keeps_first_discovered() {
        // 0->1->3 and 0->2->3 both cost 4; 0->1 is pushed first.
        let edges = [(0, 1, 2.0), (0, 2, 2.0), (2, 3, 2.0), (1, 3, 2.0)];
        let view = GraphView::from_edges(4, &edges, false, true);

        let result = dijkstra(&view, 0, 3).unwrap();
        assert_eq!(result.path, vec![0, 1, 3]);
        assert_eq!(result.cost, 4.0);
    }

    #[test]
    fn test_dijkstra_prefers_cheaper_parallel_edge() {
        let edges = [(0, 1, 7.0), (0, 1, 3.0)];
        let view = GraphView::from_edges(2, &edges, true, true);

        assert_eq!(dijkstra(&view, 1, 0).unwrap().cost, 3.0);
    }

    #[test]
    fn test_dijkstra_unreachable() {
        let view = GraphView::from_edges(3, &[(0, 1, 1.0)], false, true);
        assert!(dijkstra(&view, 0, 2).is_none());
    }
}
