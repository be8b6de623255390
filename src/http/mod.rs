//! HTTP request handler for the graph engine
//!
//! Maps the JSON/multipart API onto graph store and algorithm calls.

pub mod error;
pub mod handler;
pub mod server;
pub mod types;

pub use error::{ApiError, ApiResult};
pub use handler::SharedGraph;
pub use server::{router, HttpServer, ServerConfig};
