#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Context as _;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use tracing_subscriber::EnvFilter;
use urbanskate_core::SimConfig;

/// Global simulation config, set from command line
static SIM_CONFIG: OnceLock<SimConfig> = OnceLock::new();

/// Get the simulation config (set from command line or default)
pub fn get_sim_config() -> SimConfig {
    SIM_CONFIG.get().cloned().unwrap_or_default()
}

/// Urban Skate Track - community site
#[derive(Parser, Debug)]
#[command(name = "urbanskate-desktop")]
#[command(about = "Urban Skate Track - gallery, donations and NFT dashboard")]
struct Args {
    /// JSON file with simulation delays and failure rate
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Skip every simulated delay
    #[arg(long)]
    instant: bool,

    /// Probability (0-1) that a simulated payment or wallet call fails
    #[arg(long)]
    failure_rate: Option<f64>,

    /// Seed for reproducible fabricated values
    #[arg(long)]
    seed: Option<u64>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info,urbanskate_core=debug")]
    log_filter: String,
}

fn build_sim_config(args: &Args) -> anyhow::Result<SimConfig> {
    let mut config = match &args.config {
        Some(path) => SimConfig::load(path)
            .with_context(|| format!("loading simulation config from {}", path.display()))?,
        None => SimConfig::default(),
    };

    if args.instant {
        config = SimConfig {
            failure_rate: config.failure_rate,
            seed: config.seed,
            ..SimConfig::instant()
        };
    }
    if let Some(rate) = args.failure_rate {
        config.failure_rate = rate;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    config.validate()?;
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&args.log_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let sim_config = build_sim_config(&args)?;
    tracing::info!(
        instant = args.instant,
        failure_rate = sim_config.failure_rate,
        "Starting Urban Skate Track"
    );

    // Store config globally
    let _ = SIM_CONFIG.set(sim_config);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Urban Skate Track - Community Hub")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1200.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["urbanskate-desktop"];
        argv.extend_from_slice(extra);
        Args::parse_from(argv)
    }

    #[test]
    fn test_default_config() {
        let config = build_sim_config(&args(&[])).unwrap();
        assert_eq!(config, SimConfig::default());
    }

    #[test]
    fn test_instant_keeps_overrides() {
        let config =
            build_sim_config(&args(&["--instant", "--failure-rate", "0.25", "--seed", "9"]))
                .unwrap();
        assert_eq!(config.mint_delay_ms, 0);
        assert_eq!(config.failure_rate, 0.25);
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn test_rejects_bad_failure_rate() {
        assert!(build_sim_config(&args(&["--failure-rate", "2"])).is_err());
    }
}
