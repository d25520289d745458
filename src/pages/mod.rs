//! Page components for Urban Skate Track.

mod donate;
mod gallery;
mod home;
mod nft;

pub use donate::Donate;
pub use gallery::Gallery;
pub use home::Home;
pub use nft::Nft;
