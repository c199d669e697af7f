use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::runtime::Runtime;

use garage_inventory::ui::{launch_gui, InventoryApp};
use garage_inventory::{Args, InventoryApi, InventoryController, Splash};

fn main() -> Result<()> {
    // Initialize logger. Set RUST_LOG environment variable to control log level.
    // Examples: RUST_LOG=info, RUST_LOG=garage_inventory=debug
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    log::info!("Starting Garage Inventory");
    log::info!("Inventory service: {}", args.api_url());

    let runtime = Runtime::new().context("Failed to create Tokio runtime")?;
    let api = InventoryApi::with_timeout(args.api_url(), args.timeout())
        .context("Failed to build HTTP client")?;
    let splash = Splash::new(args.splash_duration(), Instant::now());
    let controller = InventoryController::new(api, splash, args.export_dir());

    if let Err(e) = launch_gui(InventoryApp::new(controller, runtime)) {
        log::error!("Application error: {e}");
        return Err(anyhow::anyhow!("Application error: {e}"));
    }

    Ok(())
}
