//! UI Components for Urban Skate Track.
//!
//! Monochrome street aesthetic components.

mod category_pills;
pub mod clipboard;
pub mod donation;
mod gallery_grid;
mod navigation;
pub mod nft;
mod photo_modal;

pub use category_pills::CategoryPills;
pub use gallery_grid::GalleryGrid;
pub use navigation::{NavBar, NavLocation};
pub use photo_modal::PhotoModal;
