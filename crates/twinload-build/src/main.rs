//! CLI entry point for the twinload-build graph loader.

use std::sync::Arc;

use tracing_subscriber::{fmt, EnvFilter};

use twinload_graph::GraphClient;

use twinload_build::cli;
use twinload_build::config::{load_build_config, load_graph_config};
use twinload_build::driver::GraphBuilder;
use twinload_build::input::read_records;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Usage errors exit before any remote work.
    let cli = cli::parse_or_exit(std::env::args_os());

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).json().init();

    let build_config = load_build_config(&cli.config);
    let graph_config = load_graph_config(&cli.config);

    let records = read_records(&cli.input)?;

    let graph = GraphClient::connect(&graph_config).await?;
    let builder = GraphBuilder::new(Arc::new(graph), &cli.workspace_id, build_config);
    builder.run(&records).await?;

    Ok(())
}
