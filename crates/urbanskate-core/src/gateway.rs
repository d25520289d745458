//! Mock backend standing in for payment processors and wallet providers.
//!
//! Every call sleeps for its configured delay and then fabricates a result.
//! With a non-zero `failure_rate` a call may instead fail, which the views
//! surface with a "try again" option.

use std::sync::Arc;

use chrono::NaiveDate;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::SimConfig;
use crate::error::{SkateError, SkateResult};
use crate::fixtures;
use crate::payment::PixCharge;
use crate::types::{Nft, Transaction, TxHash, WalletInfo};

/// Result of a simulated mint, before the dashboard assigns ids
#[derive(Debug, Clone, PartialEq)]
pub struct MintedToken {
    pub name: String,
    pub tx_hash: TxHash,
    pub date: NaiveDate,
}

/// Tokens and history loaded after a wallet connects
#[derive(Debug, Clone, PartialEq)]
pub struct WalletCollection {
    pub tokens: Vec<Nft>,
    pub transactions: Vec<Transaction>,
}

/// Cloneable handle to the simulated backend.
///
/// Clones share one RNG so a seeded config yields one deterministic stream.
#[derive(Clone)]
pub struct MockGateway {
    config: Arc<SimConfig>,
    rng: Arc<Mutex<StdRng>>,
}

impl std::fmt::Debug for MockGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockGateway")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl MockGateway {
    pub fn new(config: SimConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            config: Arc::new(config),
            rng: Arc::new(Mutex::new(rng)),
        }
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Roll the configured failure rate for one call
    fn should_fail(&self, operation: &str) -> bool {
        let rate = self.config.failure_rate;
        if rate.is_nan() || rate <= 0.0 {
            return false;
        }
        let failed = self.rng.lock().random_bool(rate.min(1.0));
        if failed {
            tracing::warn!(operation, "Simulated failure");
        }
        failed
    }

    /// Generate a PIX charge for `amount` USD.
    pub async fn create_pix_charge(&self, amount: f64) -> SkateResult<PixCharge> {
        tokio::time::sleep(self.config.pix_delay()).await;
        if self.should_fail("pix_charge") {
            return Err(SkateError::Payment(
                "PIX provider did not respond".to_string(),
            ));
        }
        let charge = PixCharge::generate(amount, &mut *self.rng.lock())?;
        tracing::info!(amount, "PIX charge generated");
        Ok(charge)
    }

    /// Pretend to connect a browser wallet.
    pub async fn connect_wallet(&self) -> SkateResult<WalletInfo> {
        tokio::time::sleep(self.config.wallet_connect_delay()).await;
        if self.should_fail("connect_wallet") {
            return Err(SkateError::WalletConnection(
                "the wallet rejected the request".to_string(),
            ));
        }
        let balance = self.rng.lock().random_range(0.0..10.0);
        Ok(WalletInfo::new(fixtures::DEMO_WALLET_ADDRESS, balance))
    }

    /// Load the fixture collection for a connected wallet.
    pub async fn load_collection(&self) -> SkateResult<WalletCollection> {
        tokio::time::sleep(self.config.collection_load_delay()).await;
        Ok(WalletCollection {
            tokens: fixtures::nft_collection(),
            transactions: fixtures::transaction_history(),
        })
    }

    /// Send a crypto donation worth `amount_usd`.
    pub async fn send_donation(&self, amount_usd: f64) -> SkateResult<TxHash> {
        tokio::time::sleep(self.config.transaction_delay()).await;
        if self.should_fail("send_donation") {
            return Err(SkateError::Payment(
                "the transaction was reverted".to_string(),
            ));
        }
        let hash = TxHash::random(&mut *self.rng.lock());
        tracing::debug!(amount_usd, tx = %hash, "Donation transaction fabricated");
        Ok(hash)
    }

    /// Mint a "Track Supporter" token.
    pub async fn mint_supporter_token(&self) -> SkateResult<MintedToken> {
        tokio::time::sleep(self.config.mint_delay()).await;
        if self.should_fail("mint") {
            return Err(SkateError::Mint("out of gas".to_string()));
        }
        let (serial, tx_hash) = {
            let mut rng = self.rng.lock();
            let serial: u32 = rng.random_range(0..1000);
            (serial, TxHash::random(&mut *rng))
        };
        Ok(MintedToken {
            name: format!("Track Supporter #{:03}", serial),
            tx_hash,
            date: chrono::Utc::now().date_naive(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn seeded(seed: u64) -> MockGateway {
        MockGateway::new(SimConfig {
            seed: Some(seed),
            ..SimConfig::default()
        })
    }

    #[tokio::test(start_paused = true)]
    async fn test_pix_waits_for_delay() {
        let gateway = seeded(1);
        let start = tokio::time::Instant::now();
        let charge = gateway.create_pix_charge(100.0).await.unwrap();
        assert!(start.elapsed() >= Duration::from_secs(2));
        assert!(charge.payload.contains("540100.00"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_seeded_gateways_agree() {
        let a = seeded(11).send_donation(10.0).await.unwrap();
        let b = seeded(11).send_donation(10.0).await.unwrap();
        assert_eq!(a, b);
    }

    #[tokio::test(start_paused = true)]
    async fn test_wallet_balance_in_range() {
        let wallet = seeded(5).connect_wallet().await.unwrap();
        assert_eq!(wallet.address, fixtures::DEMO_WALLET_ADDRESS);
        assert!((0.0..10.0).contains(&wallet.balance));
    }

    #[tokio::test(start_paused = true)]
    async fn test_failure_rate_one_always_fails() {
        let gateway = MockGateway::new(SimConfig {
            failure_rate: 1.0,
            ..SimConfig::instant()
        });
        assert!(matches!(gateway.connect_wallet().await, Err(SkateError::WalletConnection(_))));
        assert!(matches!(gateway.mint_supporter_token().await, Err(SkateError::Mint(_))));
        assert!(matches!(gateway.create_pix_charge(5.0).await, Err(SkateError::Payment(_))));
    }

    #[tokio::test(start_paused = true)]
    async fn test_mint_name_format() {
        let minted = seeded(2).mint_supporter_token().await.unwrap();
        let serial = minted.name.strip_prefix("Track Supporter #").unwrap();
        assert_eq!(serial.len(), 3);
        assert!(serial.chars().all(|c| c.is_ascii_digit()));
    }
}
