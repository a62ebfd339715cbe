use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use culinary::api::create_router;
use culinary::catalog::InMemoryCatalog;
use culinary::config::CONFIG;
use culinary::query_codec::SearchQueryCodec;

#[derive(Debug, Parser)]
#[command(version, about = "Serve the recipe catalog over the search query-string API")]
struct Args {
    /// Address to listen on (defaults to BIND_ADDR)
    #[arg(long)]
    bind: Option<String>,

    /// Path to the recipe catalog JSON (defaults to CATALOG_PATH)
    #[arg(long)]
    catalog: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber (also picks up records from the log crate)
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(true)
        .init();

    let args = Args::parse();
    let bind = args.bind.unwrap_or_else(|| CONFIG.bind_addr.clone());
    let catalog_path = args.catalog.unwrap_or_else(|| CONFIG.catalog_path.clone());

    let catalog = InMemoryCatalog::from_json_file(&catalog_path)
        .with_context(|| format!("Failed to load recipe catalog from {catalog_path}"))?;
    log::info!("Loaded {} recipes from {}", catalog.len(), catalog_path);

    let codec = SearchQueryCodec::new(CONFIG.page_sizing.initial);
    let app = create_router(Arc::new(catalog), codec);

    let listener = tokio::net::TcpListener::bind(&bind)
        .await
        .with_context(|| format!("Failed to bind {bind}"))?;
    log::info!("Listening on http://{bind}");

    axum::serve(listener, app).await?;
    Ok(())
}
