//! Fixture data rendered by the site.
//!
//! The gallery and the NFT dashboard have no backing store; these lists are
//! the whole dataset.

use chrono::NaiveDate;

use crate::types::{
    GalleryCategory, GalleryImage, Nft, Rarity, Transaction, TxHash, TxKind, TxStatus,
};

/// Contract every fixture (and minted) token belongs to
pub const CONTRACT_ADDRESS: &str = "0x742d35Cc6634C0532925a3b8D4C9db96590b5c8e";

/// Address reported by the simulated wallet connection
pub const DEMO_WALLET_ADDRESS: &str = "0x742d35Cc6634C0532925a3b8D4C9db96590b5c8e";

/// Direct-donation addresses shown next to the wallet flow
pub const ETH_DONATION_ADDRESS: &str = "0x742d35Cc6634C0532925a3b8D4C9db96590b5c8e";
pub const BTC_DONATION_ADDRESS: &str = "1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa";

const PHOTO_KICKFLIP: &str = "https://images.pexels.com/photos/416978/pexels-photo-416978.jpeg";
const PHOTO_PARK: &str = "https://images.pexels.com/photos/1263349/pexels-photo-1263349.jpeg";
const PHOTO_BOWL: &str = "https://images.pexels.com/photos/1263348/pexels-photo-1263348.jpeg";
const PHOTO_STREET: &str = "https://images.pexels.com/photos/1263347/pexels-photo-1263347.jpeg";

/// Artwork used for freshly minted supporter tokens
pub const SUPPORTER_IMAGE: &str = PHOTO_STREET;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn photo(
    id: u32,
    src: &str,
    alt: &str,
    category: GalleryCategory,
    title: &str,
    description: &str,
    photographer: &str,
) -> GalleryImage {
    GalleryImage {
        id,
        src: src.to_string(),
        alt: alt.to_string(),
        category,
        title: title.to_string(),
        description: description.to_string(),
        photographer: photographer.to_string(),
    }
}

/// The eight gallery photos, one per category
pub fn gallery_images() -> Vec<GalleryImage> {
    use GalleryCategory::*;

    vec![
        photo(
            1,
            PHOTO_KICKFLIP,
            "Skater performing trick",
            Tricks,
            "Perfect Kickflip",
            "Amazing kickflip captured at the perfect moment",
            "Alex Rodriguez",
        ),
        photo(
            2,
            PHOTO_PARK,
            "Skateboard park overview",
            Park,
            "Park Overview",
            "Aerial view of our concrete paradise",
            "Maria Santos",
        ),
        photo(
            3,
            PHOTO_BOWL,
            "Skater in bowl",
            Bowl,
            "Bowl Session",
            "Deep carve in the main bowl section",
            "Jake Thompson",
        ),
        photo(
            4,
            PHOTO_STREET,
            "Street skating",
            Street,
            "Street Style",
            "Technical street skating at its finest",
            "Sam Wilson",
        ),
        photo(
            5,
            PHOTO_KICKFLIP,
            "Competition event",
            Events,
            "Summer Competition",
            "Annual summer skateboarding competition",
            "Lisa Chen",
        ),
        photo(
            6,
            PHOTO_PARK,
            "Night session",
            Night,
            "Night Session",
            "Late night skating under the lights",
            "Mike Davis",
        ),
        photo(
            7,
            PHOTO_BOWL,
            "Beginner lesson",
            Lessons,
            "Learning the Basics",
            "Teaching the next generation of skaters",
            "Anna Johnson",
        ),
        photo(
            8,
            PHOTO_STREET,
            "Community gathering",
            Community,
            "Community Day",
            "Monthly community gathering and BBQ",
            "Tom Brown",
        ),
    ]
}

/// Tokens owned by the demo wallet
pub fn nft_collection() -> Vec<Nft> {
    let token = |id: u32,
                 name: &str,
                 description: &str,
                 image: &str,
                 token_id: &str,
                 rarity,
                 mint_date| Nft {
        id,
        name: name.to_string(),
        description: description.to_string(),
        image: image.to_string(),
        token_id: token_id.to_string(),
        contract_address: CONTRACT_ADDRESS.to_string(),
        rarity,
        mint_date,
    };

    vec![
        token(
            1,
            "Urban Rider #001",
            "First edition skateboard track NFT featuring the main bowl",
            PHOTO_KICKFLIP,
            "1",
            Rarity::Legendary,
            date(2024, 1, 15),
        ),
        token(
            2,
            "Street Session #042",
            "Commemorative NFT from the 2024 Street Competition",
            PHOTO_PARK,
            "42",
            Rarity::Rare,
            date(2024, 2, 20),
        ),
        token(
            3,
            "Community Badge #156",
            "Special badge for active community members",
            PHOTO_BOWL,
            "156",
            Rarity::Common,
            date(2024, 3, 10),
        ),
    ]
}

/// Mint history for the demo wallet, newest first
pub fn transaction_history() -> Vec<Transaction> {
    let mint = |id: &str, nft_name: &str, date, hash: &str| Transaction {
        id: id.to_string(),
        kind: TxKind::Mint,
        nft_name: nft_name.to_string(),
        date,
        tx_hash: TxHash::from_string(hash),
        status: TxStatus::Confirmed,
    };

    vec![
        mint(
            "1",
            "Community Badge #156",
            date(2024, 3, 10),
            "0x1234567890abcdef1234567890abcdef12345678",
        ),
        mint(
            "2",
            "Street Session #042",
            date(2024, 2, 20),
            "0xabcdef1234567890abcdef1234567890abcdef12",
        ),
        mint(
            "3",
            "Urban Rider #001",
            date(2024, 1, 15),
            "0x567890abcdef1234567890abcdef1234567890ab",
        ),
    ]
}
