// Entrypoint for the seeding CLI.
// - Loads `.env`, sets up logging and resolves configuration.
// - Runs every source once; per-item and per-source failures are reported
//   but never change the exit status.

use std::io;

use anyhow::Context;
use clap::Parser;
use product_seed::api::ApiClient;
use product_seed::config::{Cli, Config};
use product_seed::loader::Loader;
use product_seed::record::DEFAULT_SOURCES;
use product_seed::ui::Reporter;
use product_seed::{logging, orchestrator};
use tracing::info;

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    logging::init_tracing("warn")?;

    let config = Config::from_cli(Cli::parse())?;
    let api = ApiClient::from_config(&config)?;
    let loader = Loader::new(&config.data_dir);
    info!(endpoint = api.endpoint(), "uploading to product API");

    let stdout = io::stdout();
    let mut reporter = Reporter::new(stdout.lock());
    orchestrator::run(&DEFAULT_SOURCES, &loader, &api, &mut reporter)
        .context("Failed to write upload report")?;
    Ok(())
}
