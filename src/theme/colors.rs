//! Accent colors for rarity and status badges.
//!
//! Everything else on the site is black, white or gray and lives in the
//! stylesheet; these are applied inline because they depend on data.

use urbanskate_core::{Rarity, TxStatus};

// === RARITY ===
pub const LEGENDARY: &str = "#ca8a04";
pub const RARE: &str = "#9333ea";
pub const COMMON: &str = "#4b5563";

// === STATUS ===
pub const SUCCESS: &str = "#16a34a";
pub const PENDING: &str = "#ca8a04";
pub const DANGER: &str = "#dc2626";

pub fn rarity_color(rarity: Rarity) -> &'static str {
    match rarity {
        Rarity::Legendary => LEGENDARY,
        Rarity::Rare => RARE,
        Rarity::Common => COMMON,
    }
}

pub fn status_color(status: TxStatus) -> &'static str {
    match status {
        TxStatus::Confirmed => SUCCESS,
        TxStatus::Pending => PENDING,
        TxStatus::Failed => DANGER,
    }
}

/// Inline style for a pill badge: colored text on a faint tint of the same color.
pub fn badge_style(color: &str) -> String {
    format!("color: {color}; background: {color}1a;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_style_tints_with_alpha() {
        assert_eq!(
            badge_style(RARE),
            "color: #9333ea; background: #9333ea1a;"
        );
    }

    #[test]
    fn test_legendary_is_gold() {
        assert_eq!(rarity_color(Rarity::Legendary), LEGENDARY);
        assert_eq!(status_color(TxStatus::Failed), DANGER);
    }
}
