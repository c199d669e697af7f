//! Command-line and environment configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::inventory_api::{normalize_base_url, DEFAULT_API_URL};
use crate::splash::DEFAULT_SPLASH_DURATION;

/// Garage tyre inventory - desktop client for the shop's inventory service
#[derive(Parser, Debug, Clone)]
#[command(name = "garage_inventory")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Base URL of the inventory service
    #[arg(long, env = "INVENTORY_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// How long the splash screen stays up, in milliseconds
    #[arg(long, env = "INVENTORY_SPLASH_MS", default_value_t = DEFAULT_SPLASH_DURATION.as_millis() as u64)]
    pub splash_ms: u64,

    /// Per-request timeout in seconds
    #[arg(long, env = "INVENTORY_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,

    /// Directory the CSV save dialog opens in (default: Downloads)
    #[arg(long, env = "INVENTORY_EXPORT_DIR")]
    pub export_dir: Option<PathBuf>,

    /// Skip the splash screen and load immediately
    #[arg(long, default_value_t = false)]
    pub no_splash: bool,
}

impl Args {
    pub fn api_url(&self) -> String {
        normalize_base_url(self.api_url.clone())
    }

    pub fn splash_duration(&self) -> Duration {
        if self.no_splash {
            Duration::ZERO
        } else {
            Duration::from_millis(self.splash_ms)
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Explicit directory, else the user's download directory, else `.`.
    pub fn export_dir(&self) -> PathBuf {
        self.export_dir
            .clone()
            .or_else(dirs::download_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
