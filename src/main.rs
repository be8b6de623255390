use clap::Parser;
use grafo::{HttpServer, ServerConfig};
use tracing_subscriber::EnvFilter;

/// Grafo - in-memory graph engine with an HTTP API
#[derive(Parser, Debug)]
#[command(name = "grafo", version, about, long_about = None)]
struct Args {
    /// Host address to bind to
    #[arg(long, default_value = "127.0.0.1", env = "GRAFO_HOST")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value = "5000", env = "GRAFO_PORT")]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("grafo=info,tower_http=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();
    let config = ServerConfig {
        address: args.host,
        port: args.port,
    };

    tracing::info!("Grafo v{}", grafo::version());
    HttpServer::new(config).start().await?;

    Ok(())
}
