//! Connectivity algorithms
//!
//! Weakly connected components (union-find) and strongly connected
//! components (Kosaraju, iterative).

use super::common::{GraphView, NodeId};
use std::collections::HashMap;

/// Result of WCC algorithm
pub struct WccResult {
    /// Map of Component ID -> List of NodeIds
    pub components: HashMap<usize, Vec<NodeId>>,
    /// Map of NodeId -> Component ID
    pub node_component: HashMap<NodeId, usize>,
}

/// Result of SCC algorithm
pub struct SccResult {
    /// Map of Component ID -> List of NodeIds
    pub components: HashMap<usize, Vec<NodeId>>,
    /// Map of NodeId -> Component ID
    pub node_component: HashMap<NodeId, usize>,
}

/// Returns true when every node in `nodes` maps to the same component.
fn same_component(node_component: &HashMap<NodeId, usize>, nodes: &[NodeId]) -> bool {
    let mut ids = nodes.iter().map(|n| node_component.get(n));
    match ids.next() {
        Some(first) => ids.all(|id| id == first),
        None => true,
    }
}

impl WccResult {
    /// Check whether all of `nodes` lie in a single weak component.
    pub fn connects_all(&self, nodes: &[NodeId]) -> bool {
        same_component(&self.node_component, nodes)
    }
}

impl SccResult {
    /// Check whether all of `nodes` lie in a single strong component.
    pub fn connects_all(&self, nodes: &[NodeId]) -> bool {
        same_component(&self.node_component, nodes)
    }
}

/// Union-Find data structure
struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<usize>,
}

impl UnionFind {
    fn new(size: usize) -> Self {
        UnionFind {
            parent: (0..size).collect(),
            rank: vec![0; size],
        }
    }

    fn find(&mut self, i: usize) -> usize {
        let mut root = i;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        // Path compression
        let mut curr = i;
        while self.parent[curr] != root {
            let next = self.parent[curr];
            self.parent[curr] = root;
            curr = next;
        }
        root
    }

    fn union(&mut self, i: usize, j: usize) {
        let root_i = self.find(i);
        let root_j = self.find(j);

        if root_i != root_j {
            if self.rank[root_i] < self.rank[root_j] {
                self.parent[root_i] = root_j;
            } else if self.rank[root_i] > self.rank[root_j] {
                self.parent[root_j] = root_i;
            } else {
                self.parent[root_j] = root_i;
                self.rank[root_i] += 1;
            }
        }
    }
}

/// Weakly Connected Components (WCC)
///
/// Finds all disjoint subgraphs in the graph.
/// Ignores edge direction.
pub fn weakly_connected_components(view: &GraphView) -> WccResult {
    let n = view.node_count;
    let mut uf = UnionFind::new(n);

    for u_idx in 0..n {
        for &v_idx in view.successors(u_idx) {
            uf.union(u_idx, v_idx);
        }
    }

    let mut components = HashMap::new();
    let mut node_component = HashMap::new();

    for i in 0..n {
        let root = uf.find(i);
        let node_id = view.index_to_node[i];

        components.entry(root).or_insert_with(Vec::new).push(node_id);
        node_component.insert(node_id, root);
    }

    WccResult {
        components,
        node_component,
    }
}

/// Strongly Connected Components (SCC)
///
/// Kosaraju's algorithm: a post-order pass over successors, then a pass over
/// predecessors in reverse finishing order. Both passes use explicit stacks.
pub fn strongly_connected_components(view: &GraphView) -> SccResult {
    let n = view.node_count;

    // Pass 1: finishing order
    let mut visited = vec![false; n];
    let mut order = Vec::with_capacity(n);
    for root in 0..n {
        if visited[root] {
            continue;
        }
        visited[root] = true;
        let mut stack = vec![(root, 0usize)];
        while let Some(frame) = stack.last_mut() {
            let (node, cursor) = *frame;
            let successors = view.successors(node);
            if cursor < successors.len() {
                frame.1 += 1;
                let next = successors[cursor];
                if !visited[next] {
                    visited[next] = true;
                    stack.push((next, 0));
                }
            } else {
                order.push(node);
                stack.pop();
            }
        }
    }

    // Pass 2: assign components on the transposed graph
    let mut component = vec![usize::MAX; n];
    let mut next_id = 0;
    for &root in order.iter().rev() {
        if component[root] != usize::MAX {
            continue;
        }
        component[root] = next_id;
        let mut stack = vec![root];
        while let Some(node) = stack.pop() {
            for &prev in view.predecessors(node) {
                if component[prev] == usize::MAX {
                    component[prev] = next_id;
                    stack.push(prev);
                }
            }
        }
        next_id += 1;
    }

    let mut components = HashMap::new();
    let mut node_component = HashMap::new();
    for (i, &comp) in component.iter().enumerate() {
        let node_id = view.index_to_node[i];
        components.entry(comp).or_insert_with(Vec::new).push(node_id);
        node_component.insert(node_id, comp);
    }

    SccResult {
        components,
        node_component,
    }
}
