//! NFT and transaction records shown on the dashboard.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::wallet::TxHash;

/// Rarity tier of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Rare,
    Legendary,
}

impl Rarity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Rare => "rare",
            Rarity::Legendary => "legendary",
        }
    }
}

/// A token owned by the connected wallet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nft {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub image: String,
    pub token_id: String,
    pub contract_address: String,
    pub rarity: Rarity,
    pub mint_date: NaiveDate,
}

/// What a transaction did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxKind {
    Mint,
    Transfer,
    Purchase,
}

impl TxKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TxKind::Mint => "mint",
            TxKind::Transfer => "transfer",
            TxKind::Purchase => "purchase",
        }
    }
}

/// Confirmation state of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxStatus {
    Confirmed,
    Pending,
    Failed,
}

impl TxStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TxStatus::Confirmed => "confirmed",
            TxStatus::Pending => "pending",
            TxStatus::Failed => "failed",
        }
    }
}

/// A row in the transaction history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub kind: TxKind,
    pub nft_name: String,
    pub date: NaiveDate,
    pub tx_hash: TxHash,
    pub status: TxStatus,
}
