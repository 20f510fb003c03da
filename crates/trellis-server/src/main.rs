//! trellis-server CLI
//!
//! Runs the demo application.

use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use trellis_server::{demo_engine, serve};

/// Segment-trie HTTP router demo server.
#[derive(Parser)]
#[command(name = "trellis-server")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Address to listen on.
    #[arg(short, long, env = "TRELLIS_ADDR", default_value = "127.0.0.1:9999")]
    addr: SocketAddr,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let engine = Arc::new(demo_engine());
    serve(engine, cli.addr).await?;

    Ok(())
}
