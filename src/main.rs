use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;

use ccrun::cli::{self, Cli};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    cli::init_logging(cli.verbose);

    cli.run().await
}
