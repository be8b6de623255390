//! Core type definitions for the graph engine

use serde::{Deserialize, Serialize};
use std::fmt;

/// Vertex label (e.g., "A", "Lisbon"), unique within a graph
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
pub struct Vertex(String);

impl Vertex {
    pub fn new(label: impl Into<String>) -> Self {
        Vertex(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Vertex {
    fn from(s: String) -> Self {
        Vertex(s)
    }
}

impl From<&str> for Vertex {
    fn from(s: &str) -> Self {
        Vertex(s.to_string())
    }
}

impl From<&String> for Vertex {
    fn from(s: &String) -> Self {
        Vertex(s.clone())
    }
}

impl std::borrow::Borrow<str> for Vertex {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Unique identifier for an edge (its insertion position)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct EdgeId(pub u64);

impl EdgeId {
    pub fn new(id: u64) -> Self {
        EdgeId(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }

    pub(crate) fn index(&self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EdgeId({})", self.0)
    }
}

impl From<u64> for EdgeId {
    fn from(id: u64) -> Self {
        EdgeId(id)
    }
}

/// Graph mode, fixed when the graph is created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GraphMode {
    pub directed: bool,
    pub weighted: bool,
}

impl GraphMode {
    pub fn new(directed: bool, weighted: bool) -> Self {
        GraphMode { directed, weighted }
    }
}

impl fmt::Display for GraphMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let direction = if self.directed { "directed" } else { "undirected" };
        let weighting = if self.weighted { "weighted" } else { "unweighted" };
        write!(f, "{} {}", direction, weighting)
    }
}

/// Edge direction relative to a vertex, used by degree queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    In,
    Out,
    #[default]
    Both,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex() {
        let v = Vertex::new("A");
        assert_eq!(v.as_str(), "A");
        assert_eq!(format!("{}", v), "A");

        let v2: Vertex = "B".into();
        assert_eq!(v2.as_str(), "B");
        assert_eq!(serde_json::to_string(&v2).unwrap(), "\"B\"");
    }

    #[test]
    fn test_edge_id() {
        let id = EdgeId::new(99);
        assert_eq!(id.as_u64(), 99);
        assert_eq!(format!("{}", id), "EdgeId(99)");
    }

    #[test]
    fn test_mode_display() {
        assert_eq!(GraphMode::new(true, false).to_string(), "directed unweighted");
        assert_eq!(GraphMode::default().to_string(), "undirected unweighted");
    }

    #[test]
    fn test_direction_serde() {
        let d: Direction = serde_json::from_str("\"in\"").unwrap();
        assert_eq!(d, Direction::In);
        assert_eq!(Direction::default(), Direction::Both);
    }
}
