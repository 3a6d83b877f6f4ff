//! Pattern Catalogue - Main Entry Point

use catalogue_cli::{init_logging, run, Cli};
use clap::Parser;
use tracing::info;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level)?;

    info!("=== Pattern Catalogue v{} ===", env!("CARGO_PKG_VERSION"));
    run(&cli, std::io::stdout)
}
