//! In-memory graph storage implementation
//!
//! Vertices and edges are kept in insertion order. A vertex's dense index is
//! its insertion position and an edge's id is its position in the edge list;
//! both stay stable until the graph is reset or cleared.

use super::edge::Edge;
use super::types::{Direction, EdgeId, GraphMode, Vertex};
use indexmap::IndexSet;
use rustc_hash::FxBuildHasher;
use thiserror::Error;
use tracing::{debug, info};

pub(crate) type FxIndexSet<T> = IndexSet<T, FxBuildHasher>;

/// Errors that can occur during graph operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("Vertex {0} is not in the graph")]
    UnknownVertex(Vertex),

    #[error("Invalid weight: {0}")]
    InvalidWeight(String),

    #[error("Edge {from} -> {to} has negative weight {weight}; shortest path requires non-negative weights")]
    NegativeWeight { from: Vertex, to: Vertex, weight: f64 },

    #[error("No path from {start} to {end}")]
    NoPath { start: Vertex, end: Vertex },

    #[error("Invalid graph mode: {0}")]
    InvalidMode(String),
}

impl GraphError {
    /// Stable name of the error kind, as reported to clients
    pub fn kind(&self) -> &'static str {
        match self {
            GraphError::UnknownVertex(_) => "UnknownVertex",
            GraphError::InvalidWeight(_) => "InvalidWeight",
            GraphError::NegativeWeight { .. } => "NegativeWeight",
            GraphError::NoPath { .. } => "NoPath",
            GraphError::InvalidMode(_) => "InvalidMode",
        }
    }
}

pub type GraphResult<T> = Result<T, GraphError>;

/// Degree figures for one vertex
///
/// For undirected graphs `out_degree` counts edges recorded with the vertex as
/// `from` and `in_degree` those recorded with it as `to`; only their sum is
/// meaningful there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexDegree {
    pub vertex: Vertex,
    pub directed: bool,
    pub in_degree: usize,
    pub out_degree: usize,
}

impl VertexDegree {
    /// In-degree plus out-degree. Undirected: incident edges, self-loops twice.
    pub fn total(&self) -> usize {
        self.in_degree + self.out_degree
    }

    pub fn in_direction(&self, direction: Direction) -> usize {
        if !self.directed {
            return self.total();
        }
        match direction {
            Direction::In => self.in_degree,
            Direction::Out => self.out_degree,
            Direction::Both => self.total(),
        }
    }

    /// Human readable summary, as shown by the degree endpoint
    pub fn describe(&self, direction: Direction) -> String {
        if !self.directed {
            return format!("Vertex {} has degree {}", self.vertex, self.total());
        }
        match direction {
            Direction::In => format!("Vertex {} has in-degree {}", self.vertex, self.in_degree),
            Direction::Out => format!("Vertex {} has out-degree {}", self.vertex, self.out_degree),
            Direction::Both => format!(
                "Vertex {} has in-degree {} and out-degree {} (total {})",
                self.vertex,
                self.in_degree,
                self.out_degree,
                self.total()
            ),
        }
    }
}

/// In-memory graph storage
///
/// - vertices: insertion-ordered label set (label -> dense index)
/// - edges: EdgeId -> Edge, with `endpoints` holding the dense indices
/// - outgoing: index -> Vec<EdgeId> (edges recorded with this vertex as `from`)
/// - incoming: index -> Vec<EdgeId> (edges recorded with this vertex as `to`)
#[derive(Debug, Clone)]
pub struct GraphStore {
    mode: GraphMode,

    vertices: FxIndexSet<Vertex>,

    edges: Vec<Edge>,

    /// (source index, target index), aligned with `edges`
    endpoints: Vec<(usize, usize)>,

    outgoing: Vec<Vec<EdgeId>>,

    incoming: Vec<Vec<EdgeId>>,
}

impl Default for GraphStore {
    fn default() -> Self {
        Self::new(GraphMode::default())
    }
}

impl GraphStore {
    /// Create a new empty graph with the given mode
    pub fn new(mode: GraphMode) -> Self {
        GraphStore {
            mode,
            vertices: FxIndexSet::default(),
            edges: Vec::new(),
            endpoints: Vec::new(),
            outgoing: Vec::new(),
            incoming: Vec::new(),
        }
    }

    /// Discard all state and start an empty graph with a new mode
    pub fn reset(&mut self, mode: GraphMode) {
        info!(%mode, previous_order = self.order(), previous_size = self.size(), "Graph reset");
        *self = GraphStore::new(mode);
    }

    /// Remove every vertex and edge, keeping the mode
    pub fn clear(&mut self) {
        info!(mode = %self.mode, "Graph cleared");
        self.vertices.clear();
        self.edges.clear();
        self.endpoints.clear();
        self.outgoing.clear();
        self.incoming.clear();
    }

    pub fn mode(&self) -> GraphMode {
        self.mode
    }

    pub fn is_directed(&self) -> bool {
        self.mode.directed
    }

    pub fn is_weighted(&self) -> bool {
        self.mode.weighted
    }

    /// Number of vertices
    pub fn order(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges
    pub fn size(&self) -> usize {
        self.edges.len()
    }

    pub fn contains_vertex(&self, label: &str) -> bool {
        self.vertices.contains(label)
    }

    /// All vertices in insertion order
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> + '_ {
        self.vertices.iter()
    }

    /// All edges in insertion order
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub(crate) fn vertex_at(&self, idx: usize) -> Option<&Vertex> {
        self.vertices.get_index(idx)
    }

    pub(crate) fn endpoints(&self) -> &[(usize, usize)] {
        &self.endpoints
    }

    /// Dense index of a vertex, or `UnknownVertex`
    pub fn index_of(&self, label: &str) -> GraphResult<usize> {
        self.vertices
            .get_index_of(label)
            .ok_or_else(|| GraphError::UnknownVertex(Vertex::new(label)))
    }

    /// Insert a vertex if absent. Returns true if it was newly added.
    pub fn add_vertex(&mut self, label: impl Into<Vertex>) -> bool {
        let label = label.into();
        let (_, inserted) = self.ensure_vertex(label.clone());
        if inserted {
            debug!(vertex = %label, "Vertex added");
        }
        inserted
    }

    fn ensure_vertex(&mut self, label: Vertex) -> (usize, bool) {
        let (idx, inserted) = self.vertices.insert_full(label);
        if inserted {
            self.outgoing.push(Vec::new());
            self.incoming.push(Vec::new());
        }
        (idx, inserted)
    }

    /// Check a weight against the graph mode
    pub fn validate_weight(&self, weight: Option<f64>) -> GraphResult<()> {
        match (self.mode.weighted, weight) {
            (true, None) => Err(GraphError::InvalidWeight(
                "weighted graph requires a weight on every edge".to_string(),
            )),
            (false, Some(w)) => Err(GraphError::InvalidWeight(format!(
                "unweighted graph does not accept weight {}",
                w
            ))),
            (true, Some(w)) if !w.is_finite() => Err(GraphError::InvalidWeight(format!(
                "weight must be a finite number, got {}",
                w
            ))),
            _ => Ok(()),
        }
    }

    /// Append an edge, inserting missing endpoints.
    ///
    /// The weight is validated first, so a rejected edge leaves the graph untouched.
    pub fn add_edge(
        &mut self,
        source: impl Into<Vertex>,
        target: impl Into<Vertex>,
        weight: Option<f64>,
    ) -> GraphResult<EdgeId> {
        self.validate_weight(weight)?;

        let source = source.into();
        let target = target.into();
        let (source_idx, _) = self.ensure_vertex(source.clone());
        let (target_idx, _) = self.ensure_vertex(target.clone());

        let edge_id = EdgeId::new(self.edges.len() as u64);
        debug!(%source, %target, ?weight, id = edge_id.as_u64(), "Edge added");

        self.outgoing[source_idx].push(edge_id);
        self.incoming[target_idx].push(edge_id);
        self.endpoints.push((source_idx, target_idx));
        self.edges.push(Edge::new(edge_id, source, target, weight));

        Ok(edge_id)
    }

    /// Edge ids traversable from a vertex, in insertion order.
    ///
    /// Directed: outgoing edges. Undirected: every incident edge; a self-loop
    /// appears twice.
    fn traversable_edges(&self, idx: usize) -> Vec<EdgeId> {
        if self.mode.directed {
            return self.outgoing[idx].clone();
        }
        let mut ids: Vec<EdgeId> = self.outgoing[idx]
            .iter()
            .chain(self.incoming[idx].iter())
            .copied()
            .collect();
        ids.sort_unstable();
        ids
    }

    fn other_endpoint(&self, edge: EdgeId, idx: usize) -> usize {
        let (source, target) = self.endpoints[edge.index()];
        if source == idx {
            target
        } else {
            source
        }
    }

    /// Vertices reachable by one edge (out-neighbors for directed graphs),
    /// without duplicates, in first-seen order.
    pub fn neighbors(&self, label: &str) -> GraphResult<Vec<Vertex>> {
        let idx = self.index_of(label)?;
        let seen: FxIndexSet<usize> = self
            .traversable_edges(idx)
            .into_iter()
            .map(|edge| self.other_endpoint(edge, idx))
            .collect();

        Ok(seen
            .into_iter()
            .filter_map(|n| self.vertex_at(n).cloned())
            .collect())
    }

    pub fn degree(&self, label: &str) -> GraphResult<VertexDegree> {
        let idx = self.index_of(label)?;
        Ok(VertexDegree {
            vertex: Vertex::new(label),
            directed: self.mode.directed,
            in_degree: self.incoming[idx].len(),
            out_degree: self.outgoing[idx].len(),
        })
    }

    /// Whether an edge joins `a` to `b` (directed: `a -> b` only).
    pub fn are_adjacent(&self, a: &str, b: &str) -> GraphResult<bool> {
        let a_idx = self.index_of(a)?;
        let b_idx = self.index_of(b)?;

        let forward = self.outgoing[a_idx]
            .iter()
            .any(|&e| self.endpoints[e.index()].1 == b_idx);
        if forward || self.mode.directed {
            return Ok(forward);
        }

        Ok(self.incoming[a_idx]
            .iter()
            .any(|&e| self.endpoints[e.index()].0 == b_idx))
    }
}
