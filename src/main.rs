use anyhow::Context;
use clap::Parser;
use coord_convert::cli::{run, Cli};
use tracing::Level;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    run(cli).context("coordinate conversion failed")
}
