//! Shared utilities for graph algorithms
//!
//! Provides a read-only, optimized view of the graph topology for algorithm execution.

use std::collections::HashMap;

/// Node Identifier type (u64)
pub type NodeId = u64;

/// A dense, integer-indexed view of the graph topology using Compressed Sparse Row (CSR) format.
///
/// Entries inside a node's row keep the order in which they were supplied, so every
/// traversal over the view visits neighbors deterministically.
#[derive(Debug, Clone)]
pub struct GraphView {
    /// Number of nodes
    pub node_count: usize,
    /// Mapping from dense index (0..N) back to NodeId
    pub index_to_node: Vec<NodeId>,
    /// Mapping from NodeId to dense index
    pub node_to_index: HashMap<NodeId, usize>,

    /// Outgoing edges CSR structure
    /// Offsets into `out_targets`. Size = node_count + 1
    pub out_offsets: Vec<usize>,
    /// Contiguous array of target node indices
    pub out_targets: Vec<usize>,

    /// Incoming edges CSR structure (Compressed Sparse Column effectively)
    /// Offsets into `in_sources`. Size = node_count + 1
    pub in_offsets: Vec<usize>,
    /// Contiguous array of source node indices
    pub in_sources: Vec<usize>,

    /// Edge weights: aligned with `out_targets`
    pub weights: Option<Vec<f64>>,
}

impl GraphView {
    /// Get the out-degree of a node (by index)
    pub fn out_degree(&self, idx: usize) -> usize {
        self.out_offsets[idx + 1] - self.out_offsets[idx]
    }

    /// Get the in-degree of a node (by index)
    pub fn in_degree(&self, idx: usize) -> usize {
        self.in_offsets[idx + 1] - self.in_offsets[idx]
    }

    /// Get outgoing neighbors (successors) of a node
    pub fn successors(&self, idx: usize) -> &[usize] {
        let start = self.out_offsets[idx];
        let end = self.out_offsets[idx + 1];
        &self.out_targets[start..end]
    }

    /// Get incoming neighbors (predecessors) of a node
    pub fn predecessors(&self, idx: usize) -> &[usize] {
        let start = self.in_offsets[idx];
        let end = self.in_offsets[idx + 1];
        &self.in_sources[start..end]
    }

    /// Get weights for outgoing edges of a node
    pub fn weights(&self, idx: usize) -> Option<&[f64]> {
        self.weights.as_ref().map(|w| {
            let start = self.out_offsets[idx];
            let end = self.out_offsets[idx + 1];
            &w[start..end]
        })
    }

    /// Build a GraphView from per-node adjacency lists.
    ///
    /// `weights`, when present, must mirror the shape of `outgoing`.
    pub fn from_adjacency_list(
        node_count: usize,
        index_to_node: Vec<NodeId>,
        node_to_index: HashMap<NodeId, usize>,
        outgoing: Vec<Vec<usize>>,
        incoming: Vec<Vec<usize>>,
        weights: Option<Vec<Vec<f64>>>,
    ) -> Self {
        let mut out_offsets = Vec::with_capacity(node_count + 1);
        let mut out_targets = Vec::new();
        let mut in_offsets = Vec::with_capacity(node_count + 1);
        let mut in_sources = Vec::new();
        let mut flat_weights = if weights.is_some() { Some(Vec::new()) } else { None };

        out_offsets.push(0);
        for (i, neighbors) in outgoing.into_iter().enumerate() {
            out_targets.extend(neighbors);
            out_offsets.push(out_targets.len());

            if let Some(ref mut w_flat) = flat_weights {
                if let Some(w_row) = weights.as_ref().map(|w| &w[i]) {
                    w_flat.extend(w_row.iter());
                }
            }
        }

        in_offsets.push(0);
        for sources in incoming {
            in_sources.extend(sources);
            in_offsets.push(in_sources.len());
        }

        GraphView {
            node_count,
            index_to_node,
            node_to_index,
            out_offsets,
            out_targets,
            in_offsets,
            in_sources,
            weights: flat_weights,
        }
    }

    /// Build a GraphView from an edge list over nodes `0..node_count`.
    ///
    /// NodeIds equal dense indices. When `symmetric` is set every edge is
    /// emitted in both orientations (a self-loop therefore lands twice in its
    /// node's row).
    pub fn from_edges(
        node_count: usize,
        edges: &[(usize, usize, f64)],
        symmetric: bool,
        weighted: bool,
    ) -> Self {
        let index_to_node: Vec<NodeId> = (0..node_count as NodeId).collect();
        let node_to_index = index_to_node
            .iter()
            .enumerate()
            .map(|(idx, &id)| (id, idx))
            .collect();

        let mut outgoing = vec![Vec::new(); node_count];
        let mut incoming = vec![Vec::new(); node_count];
        let mut weights = vec![Vec::new(); node_count];

        for &(u, v, w) in edges {
            outgoing[u].push(v);
            incoming[v].push(u);
            weights[u].push(w);
            if symmetric {
                outgoing[v].push(u);
                incoming[u].push(v);
                weights[v].push(w);
            }
        }

        Self::from_adjacency_list(
            node_count,
            index_to_node,
            node_to_index,
            outgoing,
            incoming,
            if weighted { Some(weights) } else { None },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csr_rows_keep_insertion_order() {
        // 0->2, 0->1, 1->2
        let view = GraphView::from_edges(3, &[(0, 2, 1.0), (0, 1, 4.0), (1, 2, 2.0)], false, true);

        assert_eq!(view.successors(0), &[2, 1]);
        assert_eq!(view.successors(1), &[2]);
        assert!(view.successors(2).is_empty());
        assert_eq!(view.predecessors(2), &[0, 1]);
        assert_eq!(view.weights(0), Some(&[1.0, 4.0][..]));
        assert_eq!(view.out_degree(0), 2);
        assert_eq!(view.in_degree(2), 2);
        assert_eq!(view.out_targets.len(), 3);
    }

    #[test]
    fn test_symmetric_self_loop_counts_twice() {
        let view = GraphView::from_edges(2, &[(0, 0, 1.0), (0, 1, 1.0)], true, false);

        assert_eq!(view.out_degree(0), 3);
        assert_eq!(view.out_degree(1), 1);
        assert!(view.weights.is_none());
    }
}
