//! Edge representation
//!
//! An edge joins two vertex labels and optionally carries a numeric weight.
//! Whether the pair is ordered is a property of the owning graph's mode, not
//! of the edge itself.

use super::types::{EdgeId, Vertex};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Unique identifier for this edge
    pub id: EdgeId,

    /// Source vertex (the `from` endpoint)
    pub source: Vertex,

    /// Target vertex (the `to` endpoint)
    pub target: Vertex,

    /// Weight, present exactly when the graph is weighted
    pub weight: Option<f64>,
}

impl Edge {
    pub fn new(id: EdgeId, source: Vertex, target: Vertex, weight: Option<f64>) -> Self {
        Edge {
            id,
            source,
            target,
            weight,
        }
    }

    /// Path cost of this edge; unweighted edges cost 1
    pub fn cost(&self) -> f64 {
        self.weight.unwrap_or(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unweighted_cost() {
        let edge = Edge::new(EdgeId::new(0), "A".into(), "B".into(), None);
        assert_eq!(edge.cost(), 1.0);
        assert_eq!(edge.source.as_str(), "A");
        assert_eq!(edge.target.as_str(), "B");
    }

    #[test]
    fn test_weighted_cost() {
        let edge = Edge::new(EdgeId::new(1), "A".into(), "A".into(), Some(2.5));
        assert_eq!(edge.cost(), 2.5);
    }
}
