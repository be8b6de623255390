//! Graph algorithms module
//!
//! Algorithms are implemented in the `grafo-algorithms` crate over a dense
//! `GraphView`. This module provides the integration/adapter layer: it
//! projects a `GraphStore` into a view and maps results back to labels and
//! graph errors.

use crate::graph::{GraphError, GraphResult, GraphStore, Vertex};
use grafo_algorithms::{GraphView, NodeId as AlgoNodeId};
use serde::Serialize;
use std::fmt;
use tracing::debug;

// Re-export algorithms
pub use grafo_algorithms::{
    bfs, dijkstra, PathResult,
    directed_eulerian, undirected_eulerian, EulerianKind, EulerianResult,
    weakly_connected_components, WccResult,
    strongly_connected_components, SccResult,
};

/// Build a GraphView from the store for algorithm execution.
///
/// View indices equal store vertex indices. Undirected graphs are emitted
/// symmetrically; rows follow edge insertion order.
pub fn build_view(store: &GraphStore) -> GraphView {
    let edges: Vec<(usize, usize, f64)> = store
        .endpoints()
        .iter()
        .zip(store.edges())
        .map(|(&(u, v), edge)| (u, v, edge.cost()))
        .collect();

    GraphView::from_edges(store.order(), &edges, !store.is_directed(), store.is_weighted())
}

fn labels(store: &GraphStore, ids: &[AlgoNodeId]) -> Vec<Vertex> {
    ids.iter()
        .filter_map(|&id| store.vertex_at(id as usize).cloned())
        .collect()
}

/// Length of a shortest path: hop count when unweighted, weight sum otherwise
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PathLength {
    Hops(usize),
    Cost(f64),
}

impl PathLength {
    pub fn as_f64(&self) -> f64 {
        match *self {
            PathLength::Hops(h) => h as f64,
            PathLength::Cost(c) => c,
        }
    }
}

impl fmt::Display for PathLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathLength::Hops(h) => write!(f, "{}", h),
            PathLength::Cost(c) => write!(f, "{}", c),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortestPath {
    pub path: Vec<Vertex>,
    pub length: PathLength,
}

/// Shortest path between two labels.
///
/// BFS for unweighted graphs, Dijkstra for weighted ones. Weighted graphs
/// with any negative edge are refused with `NegativeWeight`; a reachable
/// target whose cheapest cost overflows `f64` is `InvalidWeight`.
pub fn shortest_path(store: &GraphStore, start: &str, end: &str) -> GraphResult<ShortestPath> {
    let start_idx = store.index_of(start)?;
    let end_idx = store.index_of(end)?;

    if store.is_weighted() {
        let negative = store
            .edges()
            .iter()
            .find(|edge| edge.weight.is_some_and(|w| w < 0.0));
        if let Some(edge) = negative {
            return Err(GraphError::NegativeWeight {
                from: edge.source.clone(),
                to: edge.target.clone(),
                weight: edge.cost(),
            });
        }
    }

    let view = build_view(store);
    let (source, target) = (start_idx as AlgoNodeId, end_idx as AlgoNodeId);
    let result = if store.is_weighted() {
        dijkstra(&view, source, target)
    } else {
        bfs(&view, source, target)
    };

    let result = match result {
        Some(result) => result,
        // Dijkstra never relaxes into an infinite cost, so a reachable target
        // it gave up on means the cheapest cost exceeds f64.
        None if store.is_weighted() && bfs(&view, source, target).is_some() => {
            return Err(GraphError::InvalidWeight(format!(
                "cost of every path from {} to {} overflows",
                start, end
            )));
        }
        None => {
            return Err(GraphError::NoPath {
                start: Vertex::new(start),
                end: Vertex::new(end),
            })
        }
    };

    let length = if store.is_weighted() {
        PathLength::Cost(result.cost)
    } else {
        PathLength::Hops(result.hops())
    };
    debug!(start, end, %length, hops = result.hops(), "Shortest path found");

    Ok(ShortestPath {
        path: labels(store, &result.path),
        length,
    })
}

/// Eulerian classification with labels resolved
#[derive(Debug, Clone, PartialEq)]
pub struct EulerianReport {
    pub kind: EulerianKind,
    pub start: Option<Vertex>,
    pub end: Option<Vertex>,
}

impl EulerianReport {
    pub fn describe(&self) -> String {
        match (&self.kind, &self.start, &self.end) {
            (EulerianKind::Circuit, _, _) => "The graph has an Eulerian circuit".to_string(),
            (EulerianKind::Path, Some(start), Some(end)) => format!(
                "The graph has an Eulerian path from {} to {} but no Eulerian circuit",
                start, end
            ),
            (EulerianKind::Path, _, _) => {
                "The graph has an Eulerian path but no Eulerian circuit".to_string()
            }
            (EulerianKind::Neither, _, _) => {
                "The graph has neither an Eulerian circuit nor an Eulerian path".to_string()
            }
        }
    }
}

/// Decide whether the graph admits an Eulerian circuit, path, or neither.
pub fn eulerian(store: &GraphStore) -> EulerianReport {
    let view = build_view(store);
    let result = if store.is_directed() {
        directed_eulerian(&view)
    } else {
        undirected_eulerian(&view)
    };

    let resolve = |id: Option<AlgoNodeId>| id.and_then(|id| store.vertex_at(id as usize).cloned());
    let report = EulerianReport {
        kind: result.kind,
        start: resolve(result.start),
        end: resolve(result.end),
    };
    debug!(kind = ?report.kind, "Eulerian test finished");
    report
}
