//! Backend entry-point: CLI parsing, tracing setup, and server bootstrap.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use classhub_backend::server::{self, ServerConfig};

/// Academic management backend over a flat-file JSON store.
#[derive(Debug, Parser)]
#[command(name = "classhub-backend", version, about)]
struct Cli {
    /// Address to bind the HTTP server to.
    #[arg(long, default_value = "127.0.0.1:8080")]
    bind: SocketAddr,

    /// Directory holding the JSON collection files.
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let cli = Cli::parse();

    // Secure cookies are opt-in for local use; set SESSION_COOKIE_SECURE=1
    // in production behind TLS.
    let cookie_secure = env::var("SESSION_COOKIE_SECURE")
        .map(|v| v != "0")
        .unwrap_or(false);

    server::run(ServerConfig::new(cli.bind, cli.data_dir, cookie_secure)).await
}
