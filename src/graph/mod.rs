//! Graph store
//!
//! This module holds the in-memory graph:
//! - Vertices identified by string labels, created explicitly or by edges
//! - Edges that are ordered or unordered and weighted or not, per graph mode
//! - Multi-edges and self-loops
//! - Best-effort batch insertion and edge-list parsing

pub mod batch;
pub mod edge;
pub mod store;
pub mod types;

// Re-export main types
pub use batch::{parse_edge_list, BatchOutcome, EdgeList, EdgeSpec, RejectedEdge, SkippedLine};
pub use edge::Edge;
pub use store::{GraphError, GraphResult, GraphStore, VertexDegree};
pub use types::{Direction, EdgeId, GraphMode, Vertex};
