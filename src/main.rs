use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use url_shortener::config::{self, Config, StorageBackend};
use url_shortener::server;

/// Deterministic URL shortener.
#[derive(Parser)]
#[command(name = "url-shortener")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Use PostgreSQL as storage, overriding STORAGE_BACKEND
    #[arg(short = 'd', long = "postgres")]
    postgres: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let backend_override = cli.postgres.then_some(StorageBackend::Postgres);

    let config = config::load_from_env(backend_override)?;

    init_tracing(&config);
    config.print_summary();

    server::run(config).await
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);

    if config.log_format == "json" {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}
