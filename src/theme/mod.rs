//! Visual theme for Keepsake.

pub mod colors;
mod styles;

pub use styles::GLOBAL_STYLES;
