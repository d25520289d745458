//! Core types for Urban Skate Track
//!
//! Display records for the gallery, the NFT dashboard and the crypto
//! checkout. None of these have a lifecycle beyond the current session.

mod gallery;
mod nft;
mod wallet;

pub use gallery::{CategoryFilter, GalleryCategory, GalleryImage};
pub use nft::{Nft, Rarity, Transaction, TxKind, TxStatus};
pub use wallet::{format_address, TxHash, WalletInfo, WalletSession};
