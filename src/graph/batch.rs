//! Batch mutation
//!
//! Applies many vertex/edge insertions in one call with per-item best-effort
//! semantics: an edge whose weight contradicts the graph mode is recorded and
//! skipped, everything else still lands. Also parses the plain-text edge list
//! format accepted by file uploads (`from to [weight]`, one edge per line).

use super::store::{GraphError, GraphStore};
use super::types::Vertex;
use serde::Serialize;
use tracing::{debug, warn};

/// An edge as submitted by a caller, before validation against the graph mode
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeSpec {
    pub source: Vertex,
    pub target: Vertex,
    pub weight: Option<f64>,
}

impl EdgeSpec {
    pub fn new(source: impl Into<Vertex>, target: impl Into<Vertex>, weight: Option<f64>) -> Self {
        EdgeSpec {
            source: source.into(),
            target: target.into(),
            weight,
        }
    }
}

/// An edge the batch did not apply, with its position in the input
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedEdge {
    pub index: usize,
    pub edge: EdgeSpec,
    pub error: GraphError,
}

/// Summary of one batch insertion
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchOutcome {
    /// Vertices that did not exist before, including auto-inserted endpoints
    pub vertices_added: usize,
    pub edges_added: usize,
    pub rejected: Vec<RejectedEdge>,
}

impl BatchOutcome {
    pub fn is_complete(&self) -> bool {
        self.rejected.is_empty()
    }
}

impl GraphStore {
    /// Insert `vertices`, then `edges`, in input order.
    ///
    /// Items already applied are never rolled back when a later one fails.
    pub fn insert_batch<V, E>(&mut self, vertices: V, edges: E) -> BatchOutcome
    where
        V: IntoIterator,
        V::Item: Into<Vertex>,
        E: IntoIterator<Item = EdgeSpec>,
    {
        let order_before = self.order();
        let mut outcome = BatchOutcome::default();

        for vertex in vertices {
            self.add_vertex(vertex);
        }

        for (index, spec) in edges.into_iter().enumerate() {
            match self.add_edge(spec.source.clone(), spec.target.clone(), spec.weight) {
                Ok(_) => outcome.edges_added += 1,
                Err(error) => {
                    warn!(index, source = %spec.source, target = %spec.target, %error, "Batch edge rejected");
                    outcome.rejected.push(RejectedEdge { index, edge: spec, error });
                }
            }
        }

        outcome.vertices_added = self.order() - order_before;
        debug!(
            vertices_added = outcome.vertices_added,
            edges_added = outcome.edges_added,
            rejected = outcome.rejected.len(),
            "Batch applied"
        );
        outcome
    }
}

/// A line of an edge list that could not be parsed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedLine {
    /// 1-based line number
    pub line: usize,
    pub content: String,
    pub reason: String,
}

/// Parsed edge list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EdgeList {
    pub edges: Vec<EdgeSpec>,
    pub skipped: Vec<SkippedLine>,
}

/// Parse whitespace-separated `from to [weight]` lines.
///
/// Blank lines and lines starting with `#` are ignored. Malformed lines are
/// reported in `skipped` and parsing continues.
pub fn parse_edge_list(input: &str) -> EdgeList {
    let mut list = EdgeList::default();

    for (i, raw) in input.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        let parsed = match tokens.as_slice() {
            [from, to] => Ok(EdgeSpec::new(*from, *to, None)),
            [from, to, weight] => weight
                .parse::<f64>()
                .map(|w| EdgeSpec::new(*from, *to, Some(w)))
                .map_err(|_| format!("weight '{}' is not a number", weight)),
            _ => Err(format!("expected 2 or 3 fields, found {}", tokens.len())),
        };

        match parsed {
            Ok(spec) => list.edges.push(spec),
            Err(reason) => list.skipped.push(SkippedLine {
                line: i + 1,
                content: line.to_string(),
                reason,
            }),
        }
    }

    list
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphMode;

    #[test]
    fn test_batch_inserts_vertices_then_edges() {
        let mut store = GraphStore::new(GraphMode::new(false, true));
        let outcome = store.insert_batch(
            ["A", "B"],
            vec![EdgeSpec::new("A", "B", Some(3.0)), EdgeSpec::new("B", "C", Some(1.0))],
        );

        assert!(outcome.is_complete());
        assert_eq!(outcome.vertices_added, 3);
        assert_eq!(outcome.edges_added, 2);
        assert_eq!(store.order(), 3);
        assert_eq!(store.size(), 2);
    }

    #[test]
    fn test_batch_skips_inconsistent_edges() {
        let mut store = GraphStore::new(GraphMode::new(false, false));
        let outcome = store.insert_batch(
            Vec::<String>::new(),
            vec![
                EdgeSpec::new("A", "B", None),
                EdgeSpec::new("B", "C", Some(2.0)),
                EdgeSpec::new("C", "D", None),
            ],
        );

        assert_eq!(outcome.edges_added, 2);
        assert_eq!(outcome.rejected.len(), 1);
        assert_eq!(outcome.rejected[0].index, 1);
        assert_eq!(outcome.rejected[0].error.kind(), "InvalidWeight");
        // C only arrives through the third edge
        assert_eq!(store.order(), 4);
        assert_eq!(store.size(), 2);
    }

    #[test]
    fn test_existing_vertices_are_not_counted() {
        let mut store = GraphStore::default();
        store.add_vertex("A");
        let outcome = store.insert_batch(["A", "B"], Vec::<EdgeSpec>::new());
        assert_eq!(outcome.vertices_added, 1);
    }

    #[test]
    fn test_parse_edge_list() {
        let input = "A B\n\n# comment\nB C 2.5\nC\nC D x\n  D   E  ";
        let list = parse_edge_list(input);

        assert_eq!(
            list.edges,
            vec![
                EdgeSpec::new("A", "B", None),
                EdgeSpec::new("B", "C", Some(2.5)),
                EdgeSpec::new("D", "E", None),
            ]
        );
        assert_eq!(list.skipped.len(), 2);
        assert_eq!(list.skipped[0].line, 5);
        assert_eq!(list.skipped[1].content, "C D x");
        assert!(list.skipped[1].reason.contains("not a number"));
    }
}
