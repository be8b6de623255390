//! HTTP handlers for the graph API
//!
//! Handlers only validate payload shape, take the store lock, call into the
//! graph store or algorithm adapters, and serialize the outcome. Mutations
//! hold the write guard for their whole duration; reads hold a read guard,
//! which no writer can interleave with.

use super::error::{require_label, ApiError, ApiResult};
use super::types::*;
use crate::algo;
use crate::graph::{
    parse_edge_list, BatchOutcome, EdgeSpec, GraphError, GraphMode, GraphStore, SkippedLine, Vertex,
};
use axum::extract::multipart::{Multipart, MultipartRejection};
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Json, Query, State};
use serde_json::json;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

/// The single graph shared by every request
pub type SharedGraph = Arc<RwLock<GraphStore>>;

fn snapshot(
    store: &GraphStore,
    message: String,
    outcome: &BatchOutcome,
    skipped_lines: Vec<SkippedLine>,
) -> GraphSnapshotResponse {
    GraphSnapshotResponse {
        message,
        vertices: store.vertices().cloned().collect(),
        edges: store.edges().iter().map(WireEdge::from).collect(),
        rejected: outcome.rejected.iter().map(RejectedItem::from).collect(),
        skipped_lines,
    }
}

fn batch_message(outcome: &BatchOutcome, skipped: usize) -> String {
    if outcome.is_complete() && skipped == 0 {
        return "Batch items inserted".to_string();
    }
    format!(
        "Batch items inserted; {} edge(s) rejected, {} line(s) skipped",
        outcome.rejected.len(),
        skipped
    )
}

/// Handler for graph creation (full reset)
pub async fn create_graph_handler(
    State(store): State<SharedGraph>,
    payload: Result<Json<CreateGraphRequest>, JsonRejection>,
) -> ApiResult<Json<CreateGraphResponse>> {
    let Json(req) = payload.map_err(|rejection| GraphError::InvalidMode(rejection.body_text()))?;
    let mode = GraphMode::new(req.directed, req.weighted);

    store.write().await.reset(mode);
    info!(%mode, "Graph created");

    Ok(Json(CreateGraphResponse {
        message: "Graph created".to_string(),
        directed: mode.directed,
        weighted: mode.weighted,
    }))
}

/// Handler for clearing the graph while keeping its mode
pub async fn reset_graph_handler(State(store): State<SharedGraph>) -> Json<MessageResponse> {
    store.write().await.clear();
    Json(MessageResponse {
        message: "Graph reset successfully.".to_string(),
    })
}

pub async fn add_vertex_handler(
    State(store): State<SharedGraph>,
    payload: Result<Json<AddVertexRequest>, JsonRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let Json(req) = payload?;
    let label = require_label("vertex", &req.vertex)?;

    let inserted = store.write().await.add_vertex(label);
    let message = if inserted {
        format!("Vertex {} added successfully!", label)
    } else {
        format!("Vertex {} already exists", label)
    };
    Ok(Json(MessageResponse { message }))
}

pub async fn add_edge_handler(
    State(store): State<SharedGraph>,
    payload: Result<Json<AddEdgeRequest>, JsonRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let Json(req) = payload?;
    let source = require_label("startVertex", &req.start_vertex)?;
    let target = require_label("endVertex", &req.end_vertex)?;

    store.write().await.add_edge(source, target, req.weight)?;
    Ok(Json(MessageResponse {
        message: "Edge added successfully!".to_string(),
    }))
}

/// Handler for JSON batch insertion
pub async fn insert_batch_items_handler(
    State(store): State<SharedGraph>,
    payload: Result<Json<BatchInsertRequest>, JsonRejection>,
) -> ApiResult<Json<GraphSnapshotResponse>> {
    let Json(req) = payload?;
    let vertices = req
        .vertices
        .iter()
        .map(|vertex| require_label("vertices", vertex).map(Vertex::from))
        .collect::<ApiResult<Vec<_>>>()?;
    let edges = req
        .edges
        .iter()
        .map(|edge| {
            let source = require_label("edges", &edge.source)?;
            let target = require_label("edges", &edge.target)?;
            Ok(EdgeSpec::new(source, target, edge.weight))
        })
        .collect::<ApiResult<Vec<_>>>()?;

    let mut graph = store.write().await;
    let outcome = graph.insert_batch(vertices, edges);
    let message = batch_message(&outcome, 0);
    Ok(Json(snapshot(&graph, message, &outcome, Vec::new())))
}

/// Fields of an edge-list upload
#[derive(Debug, Default)]
struct Upload {
    text: Option<String>,
    directed: Option<bool>,
    weighted: Option<bool>,
}

fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_lowercase().as_str(), "true" | "1")
}

async fn read_upload(multipart: Result<Multipart, MultipartRejection>) -> ApiResult<Upload> {
    let mut multipart = multipart?;
    let mut upload = Upload::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => upload.text = Some(field.text().await?),
            "directed" => upload.directed = Some(parse_flag(&field.text().await?)),
            "weighted" => upload.weighted = Some(parse_flag(&field.text().await?)),
            _ => {}
        }
    }

    if upload.text.is_none() {
        return Err(ApiError::BadRequest("multipart field 'file' is required".to_string()));
    }
    Ok(upload)
}

/// Handler for loading an edge-list file into the current graph
pub async fn insert_batch_info_handler(
    State(store): State<SharedGraph>,
    multipart: Result<Multipart, MultipartRejection>,
) -> ApiResult<Json<GraphSnapshotResponse>> {
    let upload = read_upload(multipart).await?;
    let list = parse_edge_list(upload.text.as_deref().unwrap_or_default());

    let mut graph = store.write().await;
    let outcome = graph.insert_batch(Vec::<Vertex>::new(), list.edges);
    let message = batch_message(&outcome, list.skipped.len());
    Ok(Json(snapshot(&graph, message, &outcome, list.skipped)))
}

/// Handler for replacing the graph with the contents of an edge-list file
pub async fn create_graph_from_file_handler(
    State(store): State<SharedGraph>,
    multipart: Result<Multipart, MultipartRejection>,
) -> ApiResult<Json<GraphSnapshotResponse>> {
    let upload = read_upload(multipart).await?;
    let mode = GraphMode::new(
        upload.directed.unwrap_or(false),
        upload.weighted.unwrap_or(false),
    );
    let list = parse_edge_list(upload.text.as_deref().unwrap_or_default());

    let mut graph = store.write().await;
    graph.reset(mode);
    let outcome = graph.insert_batch(Vec::<Vertex>::new(), list.edges);
    info!(%mode, order = graph.order(), size = graph.size(), "Graph created from file");

    let message = format!("Graph created from file; {}", batch_message(&outcome, list.skipped.len()));
    Ok(Json(snapshot(&graph, message, &outcome, list.skipped)))
}

/// Handler for neighbor queries
pub async fn adjacency_handler(
    State(store): State<SharedGraph>,
    query: Result<Query<VertexQuery>, QueryRejection>,
) -> ApiResult<Json<NeighborsResponse>> {
    let Query(q) = query?;
    let neighbors = store.read().await.neighbors(q.vertex.trim())?;
    Ok(Json(NeighborsResponse { neighbors }))
}

/// Handler for pairwise adjacency
pub async fn verify_adj_handler(
    State(store): State<SharedGraph>,
    query: Result<Query<PairQuery>, QueryRejection>,
) -> ApiResult<Json<AdjacencyResponse>> {
    let Query(q) = query?;
    let (a, b) = (q.vertex1.trim(), q.vertex2.trim());
    let adjacent = store.read().await.are_adjacent(a, b)?;
    let message = if adjacent {
        format!("{} and {} are adjacent", a, b)
    } else {
        format!("{} and {} are not adjacent", a, b)
    };
    Ok(Json(AdjacencyResponse { result: adjacent, message }))
}

pub async fn degree_handler(
    State(store): State<SharedGraph>,
    query: Result<Query<DegreeQuery>, QueryRejection>,
) -> ApiResult<Json<DegreeResponse>> {
    let Query(q) = query?;
    let degree = store.read().await.degree(q.vertex.trim())?;
    Ok(Json(DegreeResponse {
        message: degree.describe(q.direction),
        degree: degree.in_direction(q.direction),
        in_degree: degree.in_degree,
        out_degree: degree.out_degree,
    }))
}

pub async fn shortest_path_handler(
    State(store): State<SharedGraph>,
    query: Result<Query<PathQuery>, QueryRejection>,
) -> ApiResult<Json<algo::ShortestPath>> {
    let Query(q) = query?;
    let graph = store.read().await;
    let path = algo::shortest_path(&graph, q.vertex_start.trim(), q.vertex_end.trim())?;
    Ok(Json(path))
}

pub async fn check_eulerian_handler(State(store): State<SharedGraph>) -> Json<EulerianResponse> {
    let report = algo::eulerian(&*store.read().await);
    Json(EulerianResponse {
        result: report.kind,
        message: report.describe(),
        start: report.start,
        end: report.end,
    })
}

pub async fn graph_info_handler(State(store): State<SharedGraph>) -> Json<GraphInfoResponse> {
    let graph = store.read().await;
    let mode = graph.mode();
    Json(GraphInfoResponse {
        order: graph.order(),
        size: graph.size(),
        directed: mode.directed,
        weighted: mode.weighted,
    })
}

/// Handler for system status
pub async fn status_handler(State(store): State<SharedGraph>) -> Json<serde_json::Value> {
    let graph = store.read().await;
    Json(json!({
        "status": "healthy",
        "version": crate::VERSION,
        "graph": {
            "order": graph.order(),
            "size": graph.size(),
            "directed": graph.is_directed(),
            "weighted": graph.is_weighted(),
        }
    }))
}
