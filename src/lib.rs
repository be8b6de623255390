//! Grafo graph engine
//!
//! An in-memory graph (directed or undirected, weighted or unweighted) with
//! label-addressed insertion, adjacency and degree queries, shortest paths,
//! Eulerian classification, and an HTTP API in front of it.
//!
//! # Architecture
//!
//! - [`graph`]: the Graph Store (vertices, edges, mode) and batch mutation
//! - [`algo`]: adapters from the store onto `grafo-algorithms`
//! - [`http`]: the request handler, one shared store behind an async `RwLock`
//!
//! ## Example Usage
//!
//! ```rust
//! use grafo::algo::{eulerian, shortest_path, EulerianKind};
//! use grafo::graph::{GraphMode, GraphStore};
//!
//! let mut store = GraphStore::new(GraphMode::new(false, true));
//! store.add_edge("A", "B", Some(3.0)).unwrap();
//! store.add_edge("B", "C", Some(1.0)).unwrap();
//!
//! let path = shortest_path(&store, "A", "C").unwrap();
//! assert_eq!(path.length.as_f64(), 4.0);
//! assert_eq!(eulerian(&store).kind, EulerianKind::Path);
//! ```

#![warn(clippy::all)]

pub mod algo;
pub mod graph;
pub mod http;

// Re-export main types for convenience
pub use graph::{
    Direction, Edge, EdgeId, EdgeSpec, GraphError, GraphMode, GraphResult, GraphStore, Vertex,
    VertexDegree,
};

pub use http::{router, ApiError, HttpServer, ServerConfig, SharedGraph};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
