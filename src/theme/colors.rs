//! Color constants for the Keepsake palette.
//!
//! Warm, romantic tones: cream backgrounds, rose and gold accents.

#![allow(dead_code)]

// === CREAM (Backgrounds) ===
pub const CREAM: &str = "#fdf8f4";
pub const CREAM_DARKER: &str = "#f6ece4";
pub const CREAM_BORDER: &str = "#eadfd5";

// === ROSE (Hearts, Accents, Actions) ===
pub const ROSE: &str = "#c96f6f";
pub const ROSE_DEEP: &str = "#a94c4c";
pub const ROSE_SOFT: &str = "rgba(201, 111, 111, 0.15)";

// === GOLD (Dates, Numbers, Highlights) ===
pub const GOLD: &str = "#b08d57";
pub const GOLD_GLOW: &str = "rgba(176, 141, 87, 0.25)";

// === TEXT ===
pub const INK: &str = "#3c3430";
pub const INK_SECONDARY: &str = "rgba(60, 52, 48, 0.7)";
pub const INK_MUTED: &str = "rgba(60, 52, 48, 0.45)";

// === SEMANTIC ===
pub const SUCCESS: &str = "#5f8a5f";
pub const DANGER: &str = "#c0392b";

// === OVERLAY ===
pub const NIGHT: &str = "#1d1715";
pub const NIGHT_VEIL: &str = "rgba(29, 23, 21, 0.92)";
