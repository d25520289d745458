//! Mocked NFT dashboard components.

mod nft_card;
mod nft_dashboard_panel;
mod tx_history;

pub use nft_card::NftCard;
pub use nft_dashboard_panel::NftDashboardPanel;
pub use tx_history::TxHistory;
