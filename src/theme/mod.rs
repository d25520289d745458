//! Visual theme for Urban Skate Track.

pub mod colors;
mod styles;

pub use styles::GLOBAL_STYLES;
