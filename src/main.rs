use clap::Parser;
use rankx_api::RestApi;
use rankx_catalog::{CatalogSource, CatalogStore};
use rankx_core::RankingConfig;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// A catalog ranking engine with a REST API
#[derive(Parser, Debug)]
#[command(name = "rankx")]
#[command(about = "Rank catalog items against weighted preferences", long_about = None)]
struct Args {
    /// Path to a JSON catalog document (built-in GPU sample if omitted)
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// HTTP API port
    #[arg(long, default_value_t = 8000)]
    http_port: u16,

    /// Number of recommendations returned when a request sets no limit
    #[arg(long, default_value_t = 5)]
    top_k: usize,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting RankX v{}", env!("CARGO_PKG_VERSION"));

    let source = CatalogSource::from(args.catalog);
    let config = RankingConfig { default_k: args.top_k };
    let store = Arc::new(CatalogStore::open(source, config)?);
    info!("Catalog ready: {} items", store.snapshot().len());

    let http_port = args.http_port;
    let http_handle = std::thread::spawn(move || {
        info!("Starting HTTP server on port {}", http_port);
        let sys = actix_web::rt::System::new();
        sys.block_on(async {
            if let Err(e) = RestApi::start(store, http_port).await {
                tracing::error!("HTTP server error: {}", e);
            }
        })
    });

    info!("HTTP API: http://localhost:{}/", args.http_port);

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
        _ = tokio::task::spawn_blocking(move || {
            http_handle.join().ok();
        }) => {
            info!("HTTP server stopped");
        }
    }

    info!("Shutting down...");
    Ok(())
}
