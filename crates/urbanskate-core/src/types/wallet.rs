//! Wallet and transaction hash display types.

use rand::RngCore;
use serde::{Deserialize, Serialize};

/// Block explorer used for transaction links
pub const EXPLORER_TX_URL: &str = "https://etherscan.io/tx/";

/// A connected (simulated) wallet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletInfo {
    /// Account address, `0x`-prefixed
    pub address: String,
    /// Balance in ETH
    pub balance: f64,
}

impl WalletInfo {
    pub fn new(address: impl Into<String>, balance: f64) -> Self {
        Self {
            address: address.into(),
            balance,
        }
    }

    /// Shortened address for headers, e.g. `0x742d...5c8e`
    pub fn short_address(&self) -> String {
        format_address(&self.address)
    }

    /// Balance with four decimals, e.g. `2.5847`
    pub fn balance_display(&self) -> String {
        format!("{:.4}", self.balance)
    }
}

/// Shorten an address or hash to its first 6 and last 4 characters.
///
/// Strings too short to shorten are returned unchanged.
pub fn format_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 10 {
        return address.to_string();
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}

/// Identity of one connect → disconnect span.
///
/// Handed out by `begin_*` and checked by `finish_*`, so a result started
/// before a disconnect never lands on the next connection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct WalletSession(u64);

impl WalletSession {
    pub(crate) fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// Transaction identifier: `0x` followed by lowercase hex
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TxHash(String);

impl TxHash {
    /// Fabricate a 32-byte hash from the given RNG
    pub fn random(rng: &mut impl RngCore) -> Self {
        let mut bytes = [0u8; 32];
        rng.fill_bytes(&mut bytes);
        Self(format!("0x{}", hex::encode(bytes)))
    }

    /// Wrap an existing hash string (fixtures)
    pub fn from_string(hash: impl Into<String>) -> Self {
        Self(hash.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn short(&self) -> String {
        format_address(&self.0)
    }

    /// Link to the transaction on the block explorer
    pub fn explorer_url(&self) -> String {
        format!("{}{}", EXPLORER_TX_URL, self.0)
    }
}

impl std::fmt::Display for TxHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_format_address() {
        assert_eq!(
            format_address("0x742d35Cc6634C0532925a3b8D4C9db96590b5c8e"),
            "0x742d...5c8e"
        );
        assert_eq!(format_address("0x1234"), "0x1234");
    }

    #[test]
    fn test_random_hash_shape() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(1);
        let hash = TxHash::random(&mut rng);
        let hex_part = hash.as_str().strip_prefix("0x").unwrap();
        assert_eq!(hex_part.len(), 64);
        assert!(hex_part.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_explorer_url() {
        let hash = TxHash::from_string("0xabc");
        assert_eq!(hash.explorer_url(), "https://etherscan.io/tx/0xabc");
    }

    #[test]
    fn test_balance_display() {
        let wallet = WalletInfo::new("0x742d35Cc6634C0532925a3b8D4C9db96590b5c8e", 2.58471);
        assert_eq!(wallet.balance_display(), "2.5847");
        assert_eq!(wallet.short_address(), "0x742d...5c8e");
    }
}
