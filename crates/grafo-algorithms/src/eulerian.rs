//! Eulerian classification
//!
//! Decides whether a graph admits an Eulerian circuit, only an open Eulerian
//! path, or neither. Isolated nodes (degree zero) never affect the answer, and
//! a graph without edges trivially satisfies the circuit conditions.

use super::common::{GraphView, NodeId};
use super::community::{strongly_connected_components, weakly_connected_components};

/// Which kind of Eulerian walk a graph admits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum EulerianKind {
    /// Closed walk using every edge exactly once
    Circuit,
    /// Open walk using every edge exactly once
    Path,
    Neither,
}

/// Result of an Eulerian test
#[derive(Debug, Clone, PartialEq)]
pub struct EulerianResult {
    pub kind: EulerianKind,
    /// First node of the open path (set only for `EulerianKind::Path`)
    pub start: Option<NodeId>,
    /// Last node of the open path (set only for `EulerianKind::Path`)
    pub end: Option<NodeId>,
}

impl EulerianResult {
    fn circuit() -> Self {
        Self { kind: EulerianKind::Circuit, start: None, end: None }
    }

    fn path(start: NodeId, end: NodeId) -> Self {
        Self { kind: EulerianKind::Path, start: Some(start), end: Some(end) }
    }

    fn neither() -> Self {
        Self { kind: EulerianKind::Neither, start: None, end: None }
    }
}

/// Eulerian test for an undirected graph.
///
/// Expects a symmetric view (each edge present in both rows, self-loops twice),
/// so a node's out-degree is its undirected degree.
pub fn undirected_eulerian(view: &GraphView) -> EulerianResult {
    let active: Vec<usize> = (0..view.node_count)
        .filter(|&idx| view.out_degree(idx) > 0)
        .collect();
    if active.is_empty() {
        return EulerianResult::circuit();
    }

    let active_ids: Vec<NodeId> = active.iter().map(|&idx| view.index_to_node[idx]).collect();
    if !weakly_connected_components(view).connects_all(&active_ids) {
        return EulerianResult::neither();
    }

    let odd: Vec<NodeId> = active
        .iter()
        .filter(|&&idx| view.out_degree(idx) % 2 == 1)
        .map(|&idx| view.index_to_node[idx])
        .collect();

    match odd.as_slice() {
        [] => EulerianResult::circuit(),
        [start, end] => EulerianResult::path(*start, *end),
        _ => EulerianResult::neither(),
    }
}

/// Eulerian test for a directed graph.
///
/// A circuit needs every node balanced (in == out) and the non-isolated nodes
/// strongly connected. A path needs exactly one node with one surplus outgoing
/// edge (the start), exactly one with one surplus incoming edge (the end), all
/// others balanced, and the non-isolated nodes weakly connected.
pub fn directed_eulerian(view: &GraphView) -> EulerianResult {
    let active: Vec<usize> = (0..view.node_count)
        .filter(|&idx| view.out_degree(idx) + view.in_degree(idx) > 0)
        .collect();
    if active.is_empty() {
        return EulerianResult::circuit();
    }

    let mut start = None;
    let mut end = None;
    for &idx in &active {
        let surplus = view.out_degree(idx) as i64 - view.in_degree(idx) as i64;
        match surplus {
            0 => {}
            1 if start.is_none() => start = Some(idx),
            -1 if end.is_none() => end = Some(idx),
            _ => return EulerianResult::neither(),
        }
    }

    let active_ids: Vec<NodeId> = active.iter().map(|&idx| view.index_to_node[idx]).collect();
    match (start, end) {
        (None, None) => {
            if strongly_connected_components(view).connects_all(&active_ids) {
                EulerianResult::circuit()
            } else {
                EulerianResult::neither()
            }
        }
        (Some(s), Some(e)) => {
            if weakly_connected_components(view).connects_all(&active_ids) {
                EulerianResult::path(view.index_to_node[s], view.index_to_node[e])
            } else {
                EulerianResult::neither()
            }
        }
        // Total in-degree equals total out-degree, so a lone surplus cannot occur.
        _ => EulerianResult::neither(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn undirected(n: usize, edges: &[(usize, usize)]) -> GraphView {
        let edges: Vec<_> = edges.iter().map(|&(u, v)| (u, v, 1.0)).collect();
        GraphView::from_edges(n, &edges, true, false)
    }

    fn directed(n: usize, edges: &[(usize, usize)]) -> GraphView {
        let edges: Vec<_> = edges.iter().map(|&(u, v)| (u, v, 1.0)).collect();
        GraphView::from_edges(n, &edges, false, false)
    }

    #[test]
    fn test_triangle_has_circuit() {
        let view = undirected(3, &[(0, 1), (1, 2), (2, 0)]);
        assert_eq!(undirected_eulerian(&view).kind, EulerianKind::Circuit);
    }

    #[test]
    fn test_simple_path_has_open_path() {
        let view = undirected(4, &[(0, 1), (1, 2), (2, 3)]);
        let result = undirected_eulerian(&view);
        assert_eq!(result.kind, EulerianKind::Path);
        assert_eq!(result.start, Some(0));
        assert_eq!(result.end, Some(3));
    }

    #[test]
    fn test_star_is_neither() {
        // Center 0 with three leaves: four odd vertices
        let view = undirected(4, &[(0, 1), (0, 2), (0, 3)]);
        assert_eq!(undirected_eulerian(&view).kind, EulerianKind::Neither);
    }

    #[test]
    fn test_disconnected_even_graph_is_neither() {
        let view = undirected(6, &[(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3)]);
        assert_eq!(undirected_eulerian(&view).kind, EulerianKind::Neither);
    }

    #[test]
    fn test_isolated_vertices_are_ignored() {
        let view = undirected(5, &[(0, 1), (1, 2), (2, 0)]);
        assert_eq!(undirected_eulerian(&view).kind, EulerianKind::Circuit);
    }

    #[test]
    fn test_self_loop_keeps_parity() {
        // Triangle plus a self-loop on 0
        let view = undirected(3, &[(0, 1), (1, 2), (2, 0), (0, 0)]);
        assert_eq!(undirected_eulerian(&view).kind, EulerianKind::Circuit);
    }

    #[test]
    fn test_no_edges_is_trivial_circuit() {
        assert_eq!(undirected_eulerian(&undirected(3, &[])).kind, EulerianKind::Circuit);
        assert_eq!(directed_eulerian(&directed(0, &[])).kind, EulerianKind::Circuit);
    }

    #[test]
    fn test_directed_cycle_has_circuit() {
        let view = directed(3, &[(0, 1), (1, 2), (2, 0)]);
        assert_eq!(directed_eulerian(&view).kind, EulerianKind::Circuit);
    }

    #[test]
    fn test_directed_chain_has_path() {
        let view = directed(3, &[(0, 1), (1, 2)]);
        let result = directed_eulerian(&view);
        assert_eq!(result.kind, EulerianKind::Path);
        assert_eq!(result.start, Some(0));
        assert_eq!(result.end, Some(2));
    }

    #[test]
    fn test_directed_two_sources_is_neither() {
        // 0->2, 1->2: node 2 has in-degree surplus of two
        let view = directed(3, &[(0, 2), (1, 2)]);
        assert_eq!(directed_eulerian(&view).kind, EulerianKind::Neither);
    }

    #[test]
    fn test_directed_balanced_but_split_is_neither() {
        let view = directed(4, &[(0, 1), (1, 0), (2, 3), (3, 2)]);
        assert_eq!(directed_eulerian(&view).kind, EulerianKind::Neither);
    }
}
