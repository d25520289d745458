//! Mocked NFT dashboard.
//!
//! Flow: connect wallet → load collection → browse / mint / view history →
//! disconnect. Every async step is split into `begin_*` and `finish_*` so the
//! UI can release its state borrow while the gateway sleeps; the async
//! helpers at the bottom chain the two for callers that own the dashboard.

use crate::error::{SkateError, SkateResult};
use crate::fixtures;
use crate::gateway::{MintedToken, MockGateway, WalletCollection};
use crate::types::{Nft, Rarity, Transaction, TxKind, TxStatus, WalletInfo, WalletSession};

/// Nominal mint price, display only
pub const MINT_PRICE_ETH: f64 = 0.01;

/// Perks listed on the mint tab
pub const MINT_BENEFITS: [&str; 4] = [
    "Exclusive access to community events",
    "Voting rights on track improvements",
    "Special discounts on merchandise",
    "Priority booking for private sessions",
];

const SUPPORTER_DESCRIPTION: &str = "Special NFT for track supporters and donors";

/// Dashboard tabs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DashboardTab {
    #[default]
    Nfts,
    Mint,
    History,
}

impl DashboardTab {
    pub fn all() -> &'static [DashboardTab] {
        &[DashboardTab::Nfts, DashboardTab::Mint, DashboardTab::History]
    }

    pub fn label(&self) -> &'static str {
        match self {
            DashboardTab::Nfts => "My NFTs",
            DashboardTab::Mint => "Mint New",
            DashboardTab::History => "Transaction History",
        }
    }
}

/// Local state of the NFT dashboard
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NftDashboard {
    wallet: Option<WalletInfo>,
    tokens: Vec<Nft>,
    transactions: Vec<Transaction>,
    tab: DashboardTab,
    connecting: bool,
    loading: bool,
    minting: bool,
    error: Option<String>,
    notice: Option<String>,
    session: WalletSession,
}

impl NftDashboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn wallet(&self) -> Option<&WalletInfo> {
        self.wallet.as_ref()
    }

    pub fn is_connected(&self) -> bool {
        self.wallet.is_some()
    }

    pub fn tokens(&self) -> &[Nft] {
        &self.tokens
    }

    /// History, newest first
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn tab(&self) -> DashboardTab {
        self.tab
    }

    pub fn set_tab(&mut self, tab: DashboardTab) {
        self.tab = tab;
    }

    /// Badge count shown next to a tab label
    pub fn tab_count(&self, tab: DashboardTab) -> Option<usize> {
        match tab {
            DashboardTab::Nfts => Some(self.tokens.len()),
            DashboardTab::Mint => None,
            DashboardTab::History => Some(self.transactions.len()),
        }
    }

    pub fn is_connecting(&self) -> bool {
        self.connecting
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_minting(&self) -> bool {
        self.minting
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Success message after a mint
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Session the in-flight results must belong to
    pub fn session(&self) -> WalletSession {
        self.session
    }

    /// Start connecting. `None` while connecting or already connected.
    pub fn begin_connect(&mut self) -> Option<WalletSession> {
        if self.connecting || self.wallet.is_some() {
            return None;
        }
        self.connecting = true;
        self.error = None;
        Some(self.session)
    }

    /// Apply the connection result. Returns true when the collection should
    /// be loaded next.
    pub fn finish_connect(
        &mut self,
        session: WalletSession,
        result: SkateResult<WalletInfo>,
    ) -> bool {
        if session != self.session || !self.connecting {
            return false;
        }
        self.connecting = false;
        match result {
            Ok(wallet) => {
                tracing::info!(address = %wallet.short_address(), "Wallet connected");
                self.wallet = Some(wallet);
                self.loading = true;
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "Wallet connection failed");
                self.error = Some(e.to_string());
                false
            }
        }
    }

    /// Apply the loaded collection. Dropped if the wallet went away meanwhile.
    pub fn finish_load(&mut self, session: WalletSession, result: SkateResult<WalletCollection>) {
        if session != self.session || !self.loading || self.wallet.is_none() {
            tracing::debug!("Dropping collection for a stale session");
            return;
        }
        self.loading = false;
        match result {
            Ok(collection) => {
                tracing::debug!(
                    tokens = collection.tokens.len(),
                    transactions = collection.transactions.len(),
                    "Collection loaded"
                );
                self.tokens = collection.tokens;
                self.transactions = collection.transactions;
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    /// Clear wallet, tokens and history, and retire the current session.
    pub fn disconnect(&mut self) {
        tracing::info!("Wallet disconnected");
        *self = Self {
            session: self.session.next(),
            ..Self::default()
        };
    }

    /// Start a mint.
    ///
    /// `Ok(None)` while another mint is in flight or the collection is still
    /// loading; a load landing after the mint would replace its token.
    pub fn begin_mint(&mut self) -> SkateResult<Option<WalletSession>> {
        if self.wallet.is_none() {
            return Err(SkateError::WalletNotConnected);
        }
        if self.minting || self.loading {
            return Ok(None);
        }
        self.minting = true;
        self.error = None;
        self.notice = None;
        Ok(Some(self.session))
    }

    /// Apply a mint result: append the token, prepend its transaction.
    pub fn finish_mint(
        &mut self,
        session: WalletSession,
        result: SkateResult<MintedToken>,
    ) -> Option<&Nft> {
        if session != self.session || !self.minting || self.wallet.is_none() {
            tracing::debug!("Dropping mint result for a stale session");
            return None;
        }
        self.minting = false;
        let minted = match result {
            Ok(minted) => minted,
            Err(e) => {
                tracing::warn!(error = %e, "Mint failed");
                self.error = Some(e.to_string());
                return None;
            }
        };

        let id = self.tokens.iter().map(|nft| nft.id).max().unwrap_or(0) + 1;
        let nft = Nft {
            id,
            name: minted.name,
            description: SUPPORTER_DESCRIPTION.to_string(),
            image: fixtures::SUPPORTER_IMAGE.to_string(),
            token_id: id.to_string(),
            contract_address: fixtures::CONTRACT_ADDRESS.to_string(),
            rarity: Rarity::Common,
            mint_date: minted.date,
        };
        let transaction = Transaction {
            id: (self.transactions.len() + 1).to_string(),
            kind: TxKind::Mint,
            nft_name: nft.name.clone(),
            date: minted.date,
            tx_hash: minted.tx_hash,
            status: TxStatus::Confirmed,
        };

        tracing::info!(name = %nft.name, tx = %transaction.tx_hash, "NFT minted");
        self.transactions.insert(0, transaction);
        self.tokens.push(nft);
        self.notice = Some("NFT minted successfully!".to_string());
        self.tokens.last()
    }

    /// Connect and load the collection through the gateway.
    pub async fn connect(&mut self, gateway: &MockGateway) {
        let Some(session) = self.begin_connect() else {
            return;
        };
        let result = gateway.connect_wallet().await;
        if self.finish_connect(session, result) {
            let collection = gateway.load_collection().await;
            self.finish_load(session, collection);
        }
    }

    /// Mint through the gateway.
    pub async fn mint(&mut self, gateway: &MockGateway) -> SkateResult<()> {
        let Some(session) = self.begin_mint()? else {
            return Ok(());
        };
        let result = gateway.mint_supporter_token().await;
        self.finish_mint(session, result);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TxHash;

    fn collection() -> WalletCollection {
        WalletCollection {
            tokens: fixtures::nft_collection(),
            transactions: fixtures::transaction_history(),
        }
    }

    fn wallet() -> WalletInfo {
        WalletInfo::new(fixtures::DEMO_WALLET_ADDRESS, 2.5847)
    }

    fn connected() -> NftDashboard {
        let mut dashboard = NftDashboard::new();
        let session = dashboard.begin_connect().unwrap();
        dashboard.finish_connect(session, Ok(wallet()));
        dashboard.finish_load(session, Ok(collection()));
        dashboard
    }

    fn minted(name: &str) -> MintedToken {
        MintedToken {
            name: name.to_string(),
            tx_hash: TxHash::from_string("0xbeef"),
            date: chrono::NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        }
    }

    #[test]
    fn test_connect_loads_fixtures() {
        let dashboard = connected();
        assert!(dashboard.is_connected());
        assert!(!dashboard.is_loading());
        assert_eq!(dashboard.tab_count(DashboardTab::Nfts), Some(3));
        assert_eq!(dashboard.tab_count(DashboardTab::History), Some(3));
        assert_eq!(dashboard.tab_count(DashboardTab::Mint), None);
    }

    #[test]
    fn test_mint_requires_wallet() {
        let mut dashboard = NftDashboard::new();
        assert!(matches!(dashboard.begin_mint(), Err(SkateError::WalletNotConnected)));
    }

    #[test]
    fn test_mint_appends_token_and_prepends_tx() {
        let mut dashboard = connected();
        let session = dashboard.begin_mint().unwrap().unwrap();
        assert!(dashboard.begin_mint().unwrap().is_none());

        let nft = dashboard
            .finish_mint(session, Ok(minted("Track Supporter #007")))
            .cloned()
            .unwrap();
        assert_eq!(nft.id, 4);
        assert_eq!(nft.token_id, "4");
        assert_eq!(nft.rarity, Rarity::Common);
        assert_eq!(dashboard.tokens().last(), Some(&nft));
        assert_eq!(dashboard.transactions()[0].nft_name, "Track Supporter #007");
        assert_eq!(dashboard.transactions()[0].id, "4");
        assert_eq!(dashboard.transactions().len(), 4);
        assert_eq!(dashboard.notice(), Some("NFT minted successfully!"));
    }

    #[test]
    fn test_mint_failure_changes_nothing() {
        let mut dashboard = connected();
        let session = dashboard.begin_mint().unwrap().unwrap();
        assert!(dashboard
            .finish_mint(session, Err(SkateError::Mint("out of gas".to_string())))
            .is_none());
        assert_eq!(dashboard.tokens().len(), 3);
        assert_eq!(dashboard.transactions().len(), 3);
        assert_eq!(dashboard.error(), Some("Failed to mint NFT: out of gas"));
        assert!(!dashboard.is_minting());
    }

    #[test]
    fn test_disconnect_clears_everything() {
        let mut dashboard = connected();
        dashboard.set_tab(DashboardTab::History);
        dashboard.disconnect();
        assert!(!dashboard.is_connected());
        assert!(dashboard.tokens().is_empty());
        assert!(dashboard.transactions().is_empty());
        assert_eq!(dashboard.tab(), DashboardTab::Nfts);
    }

    #[test]
    fn test_disconnect_retires_session() {
        let mut dashboard = connected();
        let before = dashboard.session();
        dashboard.disconnect();
        assert_ne!(dashboard.session(), before);
    }

    #[test]
    fn test_mint_result_after_disconnect_is_dropped() {
        let mut dashboard = connected();
        let session = dashboard.begin_mint().unwrap().unwrap();
        dashboard.disconnect();
        assert!(dashboard
            .finish_mint(session, Ok(minted("Track Supporter #001")))
            .is_none());
        assert!(dashboard.tokens().is_empty());
    }

    #[test]
    fn test_mint_blocked_while_loading() {
        let mut dashboard = NftDashboard::new();
        let session = dashboard.begin_connect().unwrap();
        dashboard.finish_connect(session, Ok(wallet()));
        assert!(dashboard.is_loading());

        assert!(dashboard.begin_mint().unwrap().is_none());
        assert!(!dashboard.is_minting());

        dashboard.finish_load(session, Ok(collection()));
        assert!(dashboard.begin_mint().unwrap().is_some());
    }

    #[test]
    fn test_stale_mint_does_not_land_on_next_session() {
        let mut dashboard = connected();
        let first = dashboard.begin_mint().unwrap().unwrap();
        dashboard.disconnect();

        let second = dashboard.begin_connect().unwrap();
        dashboard.finish_connect(second, Ok(wallet()));
        dashboard.finish_load(second, Ok(collection()));
        let mint = dashboard.begin_mint().unwrap().unwrap();

        assert!(dashboard
            .finish_mint(first, Ok(minted("Track Supporter #042")))
            .is_none());
        assert!(dashboard.is_minting());

        let nft = dashboard
            .finish_mint(mint, Ok(minted("Track Supporter #043")))
            .cloned()
            .unwrap();
        assert_eq!(nft.name, "Track Supporter #043");
        assert_eq!(dashboard.tokens().len(), 4);
        assert_eq!(dashboard.transactions().len(), 4);
    }

    #[test]
    fn test_stale_load_is_dropped_after_reconnect() {
        let mut dashboard = NftDashboard::new();
        let first = dashboard.begin_connect().unwrap();
        dashboard.finish_connect(first, Ok(wallet()));
        dashboard.disconnect();

        let second = dashboard.begin_connect().unwrap();
        dashboard.finish_connect(second, Ok(wallet()));
        dashboard.finish_load(first, Ok(collection()));
        assert!(dashboard.is_loading());
        assert!(dashboard.tokens().is_empty());

        dashboard.finish_load(second, Ok(collection()));
        assert!(!dashboard.is_loading());
        assert_eq!(dashboard.tokens().len(), 3);
    }

    #[test]
    fn test_mint_into_empty_collection() {
        let mut dashboard = NftDashboard::new();
        let session = dashboard.begin_connect().unwrap();
        dashboard.finish_connect(session, Ok(WalletInfo::new(fixtures::DEMO_WALLET_ADDRESS, 1.0)));
        dashboard.finish_load(
            session,
            Ok(WalletCollection {
                tokens: Vec::new(),
                transactions: Vec::new(),
            }),
        );
        let session = dashboard.begin_mint().unwrap().unwrap();
        let nft = dashboard
            .finish_mint(session, Ok(minted("Track Supporter #100")))
            .unwrap();
        assert_eq!(nft.id, 1);
    }
}
