//! Urban Skate Track Core Library
//!
//! UI-independent state for the Urban Skate Track community site.
//!
//! ## Overview
//!
//! The site has four interactive pieces, each a plain struct mutated through
//! methods so the UI only has to render it:
//!
//! - [`DonationWizard`]: the four-step donation form with validation gates
//! - [`PixCheckout`] / [`CryptoCheckout`]: mocked payment views
//! - [`PhotoGallery`]: category filter and detail overlay
//! - [`NftDashboard`]: mocked wallet connection, minting and history
//!
//! Nothing talks to a real payment processor or chain. The [`MockGateway`]
//! sleeps for a configured delay and fabricates results.
//!
//! ## Quick Start
//!
//! ```ignore
//! use urbanskate_core::{DonationWizard, MockGateway, PaymentMethod, SimConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let gateway = MockGateway::new(SimConfig::default());
//!
//!     let mut wizard = DonationWizard::new();
//!     wizard.select_preset(100);
//!     wizard.next()?;
//!     wizard.select_method(PaymentMethod::Pix);
//!     wizard.next()?;
//!     wizard.set_name("Tony Hawk");
//!     wizard.set_email("tony@birdhouse.com");
//!     wizard.next()?;
//!
//!     let charge = gateway.create_pix_charge(wizard.amount().unwrap_or_default()).await?;
//!     println!("{}", charge.payload);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod dashboard;
pub mod donation;
pub mod error;
pub mod fixtures;
pub mod gallery;
pub mod gateway;
pub mod payment;
pub mod types;

// Re-exports
pub use config::SimConfig;
pub use dashboard::{DashboardTab, NftDashboard, MINT_BENEFITS, MINT_PRICE_ETH};
pub use donation::{
    format_usd, AmountSelection, DonationDraft, DonationWizard, Field, PaymentMethod,
    ValidationErrors, WizardStep, PRESET_AMOUNTS,
};
pub use error::{SkateError, SkateResult};
pub use gallery::PhotoGallery;
pub use gateway::{MintedToken, MockGateway, WalletCollection};
pub use payment::{
    estimate_eth, Checkout, CryptoCheckout, PaymentStatus, PixCharge, PixCheckout,
    NETWORK_FEE_ETH,
};
pub use types::*;
