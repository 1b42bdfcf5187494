mod admin;
mod error;
mod words;

use std::path::PathBuf;
use std::sync::Arc;

use axum::{Json, Router};
use clap::Parser;
use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

use palabra_core::Scope;
use palabra_store::{Lexicon, WordStore};

#[derive(Parser)]
#[command(name = "palabra-server", about = "Spanish-English vocabulary API for word games")]
struct Cli {
    /// HTTP port
    #[arg(long, default_value = "8000")]
    port: u16,
    /// Bind address
    #[arg(long, default_value = "0.0.0.0")]
    host: String,
    /// Directory holding the word collections
    #[arg(long, default_value = "./data")]
    data_dir: PathBuf,
    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

/// Paths advertised by the root banner, in documentation order.
const ENDPOINTS: &[&str] = &[
    "/palabra-normal",
    "/palabra-warframe",
    "/palabra-mixta",
    "/palabra-random",
    "/traducir/{palabra}",
    "/agregar-palabra",
    "/estadisticas",
    "/admin/palabras",
    "/test/categorias",
];

async fn banner() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "mensaje": "API de Traducción activa",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": ENDPOINTS,
    }))
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .init();

    std::fs::create_dir_all(&cli.data_dir).expect("create data dir");

    tracing::info!("Loading word collections from {:?} ...", cli.data_dir);
    let lexicon = Arc::new(Lexicon::new(WordStore::new(&cli.data_dir)));
    tracing::info!("Loaded {} word(s)", lexicon.stats(Scope::Mixed).total);

    let app = Router::new()
        // Word game queries
        .merge(words::routes())
        // Curation and inspection
        .merge(admin::routes())
        // Root banner
        .route("/", axum::routing::get(banner))
        .layer(CorsLayer::permissive())
        .with_state(lexicon);

    let addr = format!("{}:{}", cli.host, cli.port);
    tracing::info!("palabra-server listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
