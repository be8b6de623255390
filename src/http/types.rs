//! Request and response schemas for the HTTP API
//!
//! Field names follow the contract the presentation layer already speaks
//! (`startVertex`, `vertex_start`, ...), so they are deliberately not uniform.

use crate::algo::EulerianKind;
use crate::graph::{Direction, Edge, EdgeSpec, RejectedEdge, SkippedLine, Vertex};
use serde::de::{self, Deserializer, IgnoredAny, SeqAccess, Visitor};
use serde::ser::{SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A weight as clients send it: a number, a numeric string, or null
#[derive(Deserialize)]
#[serde(untagged)]
enum RawWeight {
    Number(f64),
    Text(String),
}

impl RawWeight {
    fn into_weight(self) -> Result<Option<f64>, String> {
        match self {
            RawWeight::Number(n) => Ok(Some(n)),
            RawWeight::Text(s) if s.trim().is_empty() => Ok(None),
            RawWeight::Text(s) => s
                .trim()
                .parse::<f64>()
                .map(Some)
                .map_err(|_| format!("weight '{}' is not a number", s)),
        }
    }
}

fn deserialize_weight<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<RawWeight>::deserialize(deserializer)? {
        Some(raw) => raw.into_weight().map_err(de::Error::custom),
        None => Ok(None),
    }
}

/// Edge on the wire: `[from, to]` or `[from, to, weight]`
#[derive(Debug, Clone, PartialEq)]
pub struct WireEdge {
    pub source: String,
    pub target: String,
    pub weight: Option<f64>,
}

impl Serialize for WireEdge {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.weight.is_some() { 3 } else { 2 };
        let mut seq = serializer.serialize_seq(Some(len))?;
        seq.serialize_element(&self.source)?;
        seq.serialize_element(&self.target)?;
        if let Some(weight) = self.weight {
            seq.serialize_element(&weight)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for WireEdge {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EdgeVisitor;

        impl<'de> Visitor<'de> for EdgeVisitor {
            type Value = WireEdge;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an edge array [from, to] or [from, to, weight]")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<WireEdge, A::Error> {
                let source: String = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let target: String = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(1, &self))?;
                let raw = seq.next_element::<Option<RawWeight>>()?.flatten();
                if seq.next_element::<IgnoredAny>()?.is_some() {
                    return Err(de::Error::invalid_length(4, &self));
                }
                let weight = match raw {
                    Some(raw) => raw.into_weight().map_err(de::Error::custom)?,
                    None => None,
                };
                Ok(WireEdge { source, target, weight })
            }
        }

        deserializer.deserialize_seq(EdgeVisitor)
    }
}

impl From<&Edge> for WireEdge {
    fn from(edge: &Edge) -> Self {
        WireEdge {
            source: edge.source.as_str().to_string(),
            target: edge.target.as_str().to_string(),
            weight: edge.weight,
        }
    }
}

impl From<&EdgeSpec> for WireEdge {
    fn from(spec: &EdgeSpec) -> Self {
        WireEdge {
            source: spec.source.as_str().to_string(),
            target: spec.target.as_str().to_string(),
            weight: spec.weight,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateGraphRequest {
    pub directed: bool,
    pub weighted: bool,
}

#[derive(Debug, Deserialize)]
pub struct AddVertexRequest {
    pub vertex: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddEdgeRequest {
    pub start_vertex: String,
    pub end_vertex: String,
    #[serde(default, deserialize_with = "deserialize_weight")]
    pub weight: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct BatchInsertRequest {
    #[serde(default)]
    pub vertices: Vec<String>,
    #[serde(default)]
    pub edges: Vec<WireEdge>,
}

#[derive(Debug, Deserialize)]
pub struct VertexQuery {
    pub vertex: String,
}

#[derive(Debug, Deserialize)]
pub struct DegreeQuery {
    pub vertex: String,
    #[serde(default)]
    pub direction: Direction,
}

#[derive(Debug, Deserialize)]
pub struct PairQuery {
    pub vertex1: String,
    pub vertex2: String,
}

#[derive(Debug, Deserialize)]
pub struct PathQuery {
    pub vertex_start: String,
    pub vertex_end: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct CreateGraphResponse {
    pub message: String,
    pub directed: bool,
    pub weighted: bool,
}

/// A batch edge the engine refused
#[derive(Debug, Serialize)]
pub struct RejectedItem {
    pub index: usize,
    pub edge: WireEdge,
    pub kind: &'static str,
    pub error: String,
}

impl From<&RejectedEdge> for RejectedItem {
    fn from(rejected: &RejectedEdge) -> Self {
        RejectedItem {
            index: rejected.index,
            edge: WireEdge::from(&rejected.edge),
            kind: rejected.error.kind(),
            error: rejected.error.to_string(),
        }
    }
}

/// Authoritative graph contents after a batch
#[derive(Debug, Serialize)]
pub struct GraphSnapshotResponse {
    pub message: String,
    pub vertices: Vec<Vertex>,
    pub edges: Vec<WireEdge>,
    pub rejected: Vec<RejectedItem>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped_lines: Vec<SkippedLine>,
}

#[derive(Debug, Serialize)]
pub struct NeighborsResponse {
    pub neighbors: Vec<Vertex>,
}

#[derive(Debug, Serialize)]
pub struct AdjacencyResponse {
    pub result: bool,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct DegreeResponse {
    pub message: String,
    pub degree: usize,
    pub in_degree: usize,
    pub out_degree: usize,
}

#[derive(Debug, Serialize)]
pub struct EulerianResponse {
    pub result: EulerianKind,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<Vertex>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<Vertex>,
}

#[derive(Debug, Serialize)]
pub struct GraphInfoResponse {
    pub order: usize,
    pub size: usize,
    pub directed: bool,
    pub weighted: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub kind: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wire_edge_shapes() {
        let plain: WireEdge = serde_json::from_value(json!(["A", "B"])).unwrap();
        assert_eq!(plain.weight, None);

        let weighted: WireEdge = serde_json::from_value(json!(["A", "B", 3])).unwrap();
        assert_eq!(weighted.weight, Some(3.0));

        let text: WireEdge = serde_json::from_value(json!(["A", "B", "2.5"])).unwrap();
        assert_eq!(text.weight, Some(2.5));

        let null: WireEdge = serde_json::from_value(json!(["A", "B", null])).unwrap();
        assert_eq!(null.weight, None);
    }

    #[test]
    fn test_wire_edge_rejects_bad_shapes() {
        assert!(serde_json::from_value::<WireEdge>(json!(["A"])).is_err());
        assert!(serde_json::from_value::<WireEdge>(json!(["A", "B", 1, 2])).is_err());
        assert!(serde_json::from_value::<WireEdge>(json!(["A", "B", "heavy"])).is_err());
        assert!(serde_json::from_value::<WireEdge>(json!({"from": "A"})).is_err());
    }

    #[test]
    fn test_wire_edge_serializes_as_array() {
        let edge = WireEdge { source: "A".into(), target: "B".into(), weight: Some(3.0) };
        assert_eq!(serde_json::to_value(&edge).unwrap(), json!(["A", "B", 3.0]));

        let edge = WireEdge { source: "A".into(), target: "B".into(), weight: None };
        assert_eq!(serde_json::to_value(&edge).unwrap(), json!(["A", "B"]));
    }

    #[test]
    fn test_add_edge_request_field_names() {
        let req: AddEdgeRequest =
            serde_json::from_value(json!({"startVertex": "A", "endVertex": "B"})).unwrap();
        assert_eq!(req.start_vertex, "A");
        assert_eq!(req.weight, None);

        let req: AddEdgeRequest =
            serde_json::from_value(json!({"startVertex": "A", "endVertex": "B", "weight": null}))
                .unwrap();
        assert_eq!(req.weight, None);

        let req: AddEdgeRequest =
            serde_json::from_value(json!({"startVertex": "A", "endVertex": "B", "weight": 4.5}))
                .unwrap();
        assert_eq!(req.weight, Some(4.5));
    }
}
