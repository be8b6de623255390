//! HTTP server implementation for the graph API

use super::handler::*;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use crate::graph::GraphStore;

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Bind address
    pub address: String,
    /// Port
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: "127.0.0.1".to_string(),
            port: 5000,
        }
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.address, self.port)
    }
}

/// Build the API router over a shared graph
pub fn router(store: SharedGraph) -> Router {
    Router::new()
        .route("/create_graph", post(create_graph_handler))
        .route("/reset_graph", post(reset_graph_handler))
        .route("/add_vertex", post(add_vertex_handler))
        .route("/add_edge", post(add_edge_handler))
        .route("/insert_batch_items", post(insert_batch_items_handler))
        .route("/insert_batch_info", post(insert_batch_info_handler))
        .route("/create_graph_from_file", post(create_graph_from_file_handler))
        .route("/adjacency", get(adjacency_handler))
        .route("/verify_adj", get(verify_adj_handler))
        .route("/degree", get(degree_handler))
        .route("/shortest_path", get(shortest_path_handler))
        .route("/check_eulerian", get(check_eulerian_handler))
        .route("/get_graph_info", get(graph_info_handler))
        .route("/status", get(status_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(store)
}

/// HTTP server owning the graph for the lifetime of the process
pub struct HttpServer {
    store: SharedGraph,
    config: ServerConfig,
}

impl HttpServer {
    /// Create a new HTTP server over an empty undirected, unweighted graph
    pub fn new(config: ServerConfig) -> Self {
        Self {
            store: Arc::new(RwLock::new(GraphStore::default())),
            config,
        }
    }

    /// Start the HTTP server and serve until Ctrl-C
    pub async fn start(&self) -> std::io::Result<()> {
        let app = router(Arc::clone(&self.store));

        let addr = self.config.bind_addr();
        let listener = tokio::net::TcpListener::bind(&addr).await?;

        info!("Graph API available at http://{}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
