//! Simulation settings for the mocked payment and wallet backends.
//!
//! Every "network call" in the site is a fixed-duration timer. The durations
//! and the chance of a simulated failure live here so the desktop binary can
//! tune them from the command line or a JSON file.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{SkateError, SkateResult};

/// Timings and failure injection for [`MockGateway`](crate::MockGateway).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Delay before a PIX charge is "generated"
    pub pix_delay_ms: u64,
    /// Delay before a wallet "connects"
    pub wallet_connect_delay_ms: u64,
    /// Delay while the NFT collection "loads" after connecting
    pub collection_load_delay_ms: u64,
    /// Delay before a crypto donation "confirms"
    pub transaction_delay_ms: u64,
    /// Delay before a mint "confirms"
    pub mint_delay_ms: u64,
    /// Probability in [0, 1] that a simulated call fails
    pub failure_rate: f64,
    /// Seed for a deterministic RNG (random when absent)
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            pix_delay_ms: 2000,
            wallet_connect_delay_ms: 2000,
            collection_load_delay_ms: 1000,
            transaction_delay_ms: 3000,
            mint_delay_ms: 3000,
            failure_rate: 0.0,
            seed: None,
        }
    }
}

impl SimConfig {
    /// Zero-delay config, handy for demos and tests.
    pub fn instant() -> Self {
        Self {
            pix_delay_ms: 0,
            wallet_connect_delay_ms: 0,
            collection_load_delay_ms: 0,
            transaction_delay_ms: 0,
            mint_delay_ms: 0,
            ..Self::default()
        }
    }

    /// Load a config from a JSON file. Missing fields take their defaults.
    pub fn load(path: impl AsRef<Path>) -> SkateResult<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let config: SimConfig = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the gateway cannot honour.
    pub fn validate(&self) -> SkateResult<()> {
        if !(0.0..=1.0).contains(&self.failure_rate) {
            return Err(SkateError::Config(format!(
                "failure_rate must be between 0 and 1, got {}",
                self.failure_rate
            )));
        }
        Ok(())
    }

    pub fn pix_delay(&self) -> Duration {
        Duration::from_millis(self.pix_delay_ms)
    }

    pub fn wallet_connect_delay(&self) -> Duration {
        Duration::from_millis(self.wallet_connect_delay_ms)
    }

    pub fn collection_load_delay(&self) -> Duration {
        Duration::from_millis(self.collection_load_delay_ms)
    }

    pub fn transaction_delay(&self) -> Duration {
        Duration::from_millis(self.transaction_delay_ms)
    }

    pub fn mint_delay(&self) -> Duration {
        Duration::from_millis(self.mint_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_delays() {
        let config = SimConfig::default();
        assert_eq!(config.pix_delay(), Duration::from_secs(2));
        assert_eq!(config.mint_delay(), Duration::from_secs(3));
        assert_eq!(config.failure_rate, 0.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_instant_has_no_delays() {
        let config = SimConfig::instant();
        assert_eq!(config.pix_delay(), Duration::ZERO);
        assert_eq!(config.wallet_connect_delay(), Duration::ZERO);
        assert_eq!(config.collection_load_delay(), Duration::ZERO);
        assert_eq!(config.transaction_delay(), Duration::ZERO);
        assert_eq!(config.mint_delay(), Duration::ZERO);
    }

    #[test]
    fn test_validate_rejects_bad_failure_rate() {
        let config = SimConfig {
            failure_rate: 1.5,
            ..SimConfig::default()
        };
        assert!(matches!(config.validate(), Err(SkateError::Config(_))));
    }

    #[test]
    fn test_load_partial_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sim.json");
        std::fs::write(&path, r#"{ "mint_delay_ms": 10, "seed": 7 }"#).unwrap();

        let config = SimConfig::load(&path).unwrap();
        assert_eq!(config.mint_delay_ms, 10);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.pix_delay_ms, 2000);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = SimConfig::load(dir.path().join("nope.json"));
        assert!(matches!(result, Err(SkateError::Io(_))));
    }
}
