//! Mocked payment views.
//!
//! Each view tracks a [`Checkout`]: a small status machine around one
//! simulated call to the [`MockGateway`](crate::MockGateway).
//!
//! ```text
//! Idle ──begin──▶ Pending ──finish(Ok)──▶ Success
//!   ▲                 │
//!   └────retry─── Failed ◀──finish(Err)──┘
//! ```
//!
//! A checkout that is pending or has succeeded refuses to begin again, so
//! each view produces its result at most once.

pub mod card;
pub mod crypto;
pub mod pix;

pub use crypto::{estimate_eth, CryptoCheckout, ETH_USD_RATE, NETWORK_FEE_ETH};
pub use pix::{PixCharge, PixCheckout};

use crate::error::SkateResult;

/// Where a simulated payment stands
#[derive(Debug, Clone, PartialEq)]
pub enum PaymentStatus<T> {
    Idle,
    Pending,
    Success(T),
    Failed(String),
}

/// Status tracker for one simulated call
#[derive(Debug, Clone, PartialEq)]
pub struct Checkout<T> {
    status: PaymentStatus<T>,
}

impl<T> Default for Checkout<T> {
    fn default() -> Self {
        Self {
            status: PaymentStatus::Idle,
        }
    }
}

impl<T> Checkout<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> &PaymentStatus<T> {
        &self.status
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.status, PaymentStatus::Idle)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.status, PaymentStatus::Pending)
    }

    pub fn result(&self) -> Option<&T> {
        match &self.status {
            PaymentStatus::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            PaymentStatus::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Idle → Pending. Returns false (and changes nothing) otherwise.
    pub fn begin(&mut self) -> bool {
        if !self.is_idle() {
            return false;
        }
        self.status = PaymentStatus::Pending;
        true
    }

    /// Pending → Success/Failed. Results arriving in any other state are dropped.
    pub fn finish(&mut self, result: SkateResult<T>) {
        if !self.is_pending() {
            tracing::debug!("Dropping result for a checkout that is not pending");
            return;
        }
        self.status = match result {
            Ok(value) => PaymentStatus::Success(value),
            Err(e) => PaymentStatus::Failed(e.to_string()),
        };
    }

    /// "Try again": Failed → Idle.
    pub fn retry(&mut self) -> bool {
        if self.error().is_none() {
            return false;
        }
        self.status = PaymentStatus::Idle;
        true
    }

    /// Back to Idle from any state
    pub fn reset(&mut self) {
        self.status = PaymentStatus::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SkateError;

    #[test]
    fn test_happy_path() {
        let mut checkout: Checkout<u32> = Checkout::new();
        assert!(checkout.begin());
        assert!(checkout.is_pending());
        checkout.finish(Ok(7));
        assert_eq!(checkout.result(), Some(&7));
    }

    #[test]
    fn test_begin_is_guarded() {
        let mut checkout: Checkout<u32> = Checkout::new();
        assert!(checkout.begin());
        assert!(!checkout.begin());
        checkout.finish(Ok(1));
        assert!(!checkout.begin());
        assert_eq!(checkout.result(), Some(&1));
    }

    #[test]
    fn test_late_result_is_dropped() {
        let mut checkout: Checkout<u32> = Checkout::new();
        checkout.finish(Ok(3));
        assert!(checkout.is_idle());

        checkout.begin();
        checkout.reset();
        checkout.finish(Ok(4));
        assert!(checkout.is_idle());
    }

    #[test]
    fn test_retry_after_failure() {
        let mut checkout: Checkout<u32> = Checkout::new();
        assert!(!checkout.retry());
        checkout.begin();
        checkout.finish(Err(SkateError::Payment("declined".to_string())));
        assert_eq!(checkout.error(), Some("Payment failed: declined"));
        assert!(checkout.retry());
        assert!(checkout.is_idle());
    }
}
