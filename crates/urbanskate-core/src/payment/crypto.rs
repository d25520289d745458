//! Cryptocurrency donation view state.

use super::Checkout;
use crate::error::{SkateError, SkateResult};
use crate::gateway::MockGateway;
use crate::types::{TxHash, WalletInfo, WalletSession};

/// Fixed USD price of one ETH used for estimates
pub const ETH_USD_RATE: f64 = 2000.0;

/// Flat network fee shown with the estimate
pub const NETWORK_FEE_ETH: f64 = 0.002;

/// Approximate ETH needed for a USD donation
pub fn estimate_eth(amount_usd: f64) -> f64 {
    amount_usd / ETH_USD_RATE
}

/// Wallet connection plus the donation transfer
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CryptoCheckout {
    wallet: Option<WalletInfo>,
    connecting: bool,
    connect_error: Option<String>,
    payment: Checkout<TxHash>,
    session: WalletSession,
}

impl CryptoCheckout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn wallet(&self) -> Option<&WalletInfo> {
        self.wallet.as_ref()
    }

    pub fn is_connecting(&self) -> bool {
        self.connecting
    }

    pub fn connect_error(&self) -> Option<&str> {
        self.connect_error.as_deref()
    }

    pub fn payment(&self) -> &Checkout<TxHash> {
        &self.payment
    }

    /// Session the in-flight results must belong to
    pub fn session(&self) -> WalletSession {
        self.session
    }

    /// Start connecting. `None` if already connecting or connected.
    pub fn begin_connect(&mut self) -> Option<WalletSession> {
        if self.connecting || self.wallet.is_some() {
            return None;
        }
        self.connecting = true;
        self.connect_error = None;
        Some(self.session)
    }

    pub fn finish_connect(&mut self, session: WalletSession, result: SkateResult<WalletInfo>) {
        if session != self.session || !self.connecting {
            return;
        }
        self.connecting = false;
        match result {
            Ok(wallet) => {
                tracing::info!(address = %wallet.short_address(), "Wallet connected for donation");
                self.wallet = Some(wallet);
            }
            Err(e) => {
                self.connect_error = Some(e.to_string());
            }
        }
    }

    /// Drop the wallet and any payment result, retiring the session.
    pub fn disconnect(&mut self) {
        self.wallet = None;
        self.connecting = false;
        self.connect_error = None;
        self.payment.reset();
        self.session = self.session.next();
    }

    /// Start the transfer. `Ok(None)` when one is already running or done.
    pub fn begin_send(&mut self) -> SkateResult<Option<WalletSession>> {
        if self.wallet.is_none() {
            return Err(SkateError::WalletNotConnected);
        }
        Ok(self.payment.begin().then_some(self.session))
    }

    pub fn finish_send(&mut self, session: WalletSession, result: SkateResult<TxHash>) {
        if session != self.session {
            tracing::debug!("Dropping transfer result for a stale session");
            return;
        }
        if let Ok(hash) = &result {
            tracing::info!(tx = %hash, "Crypto donation confirmed");
        }
        self.payment.finish(result);
    }

    /// "Try again" after a failed transfer
    pub fn retry(&mut self) -> bool {
        self.payment.retry()
    }

    /// Connect through the gateway, waiting out its delay.
    pub async fn connect(&mut self, gateway: &MockGateway) {
        let Some(session) = self.begin_connect() else {
            return;
        };
        let result = gateway.connect_wallet().await;
        self.finish_connect(session, result);
    }

    /// Send `amount_usd` through the gateway, waiting out its delay.
    pub async fn send(&mut self, gateway: &MockGateway, amount_usd: f64) -> SkateResult<()> {
        let Some(session) = self.begin_send()? else {
            return Ok(());
        };
        let result = gateway.send_donation(amount_usd).await;
        self.finish_send(session, result);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimConfig;

    fn wallet() -> WalletInfo {
        WalletInfo::new("0x742d35Cc6634C0532925a3b8D4C9db96590b5c8e", 1.0)
    }

    #[test]
    fn test_estimate() {
        assert_eq!(estimate_eth(100.0), 0.05);
        assert_eq!(format!("{:.6}", estimate_eth(25.0)), "0.012500");
    }

    #[test]
    fn test_send_requires_wallet() {
        let mut checkout = CryptoCheckout::new();
        assert!(matches!(checkout.begin_send(), Err(SkateError::WalletNotConnected)));
    }

    #[test]
    fn test_connect_guards() {
        let mut checkout = CryptoCheckout::new();
        let session = checkout.begin_connect().unwrap();
        assert!(checkout.begin_connect().is_none());
        checkout.finish_connect(session, Ok(wallet()));
        assert!(checkout.wallet().is_some());
        assert!(checkout.begin_connect().is_none());
    }

    #[test]
    fn test_connect_failure_keeps_wallet_empty() {
        let mut checkout = CryptoCheckout::new();
        let session = checkout.begin_connect().unwrap();
        checkout.finish_connect(
            session,
            Err(SkateError::WalletConnection("rejected".to_string())),
        );
        assert!(checkout.wallet().is_none());
        assert!(!checkout.is_connecting());
        assert_eq!(checkout.connect_error(), Some("Failed to connect wallet: rejected"));
        assert!(checkout.begin_connect().is_some());
    }

    #[test]
    fn test_disconnect_resets_payment() {
        let mut checkout = CryptoCheckout::new();
        let session = checkout.begin_connect().unwrap();
        checkout.finish_connect(session, Ok(wallet()));
        let send = checkout.begin_send().unwrap().unwrap();
        checkout.finish_send(send, Ok(TxHash::from_string("0xfeed")));
        assert!(checkout.payment().result().is_some());

        checkout.disconnect();
        assert!(checkout.wallet().is_none());
        assert!(checkout.payment().is_idle());
    }

    #[test]
    fn test_stale_send_does_not_land_on_next_session() {
        let mut checkout = CryptoCheckout::new();
        let first = checkout.begin_connect().unwrap();
        checkout.finish_connect(first, Ok(wallet()));
        let stale = checkout.begin_send().unwrap().unwrap();
        checkout.disconnect();

        let second = checkout.begin_connect().unwrap();
        checkout.finish_connect(second, Ok(wallet()));
        let send = checkout.begin_send().unwrap().unwrap();

        checkout.finish_send(stale, Ok(TxHash::from_string("0xdead")));
        assert!(checkout.payment().is_pending());

        checkout.finish_send(send, Ok(TxHash::from_string("0xfeed")));
        assert_eq!(checkout.payment().result().map(TxHash::as_str), Some("0xfeed"));
    }

    #[test]
    fn test_stale_connect_is_dropped() {
        let mut checkout = CryptoCheckout::new();
        let first = checkout.begin_connect().unwrap();
        checkout.disconnect();
        checkout.finish_connect(first, Ok(wallet()));
        assert!(checkout.wallet().is_none());
        assert!(checkout.begin_connect().is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_async_flow() {
        let gateway = MockGateway::new(SimConfig {
            seed: Some(3),
            ..SimConfig::default()
        });
        let mut checkout = CryptoCheckout::new();
        checkout.connect(&gateway).await;
        checkout.send(&gateway, 100.0).await.unwrap();

        let hash = checkout.payment().result().unwrap();
        assert_eq!(hash.as_str().len(), 66);
    }
}
