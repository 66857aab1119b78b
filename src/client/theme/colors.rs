//! Color Constants
//!
//! Indigo accent on white cards, with a dark indigo backdrop behind the
//! login and register forms.

use eframe::egui::Color32;

/// Brand accent - Indigo
pub const ACCENT: Color32 = Color32::from_rgb(0x58, 0x56, 0xD6);

/// Accent hover
pub const ACCENT_HOVER: Color32 = Color32::from_rgb(0x6E, 0x6C, 0xE0);

/// Auth screens background - Deep indigo
pub const AUTH_BG: Color32 = Color32::from_rgb(0x2E, 0x2C, 0x8F);

/// Main panel background
pub const BG_LIGHT: Color32 = Color32::WHITE;

/// Top bar background
pub const TOP_BAR_BG: Color32 = Color32::from_rgb(0xF4, 0xF4, 0xFB);

/// Text on dark backgrounds
pub const TEXT_LIGHT: Color32 = Color32::WHITE;

/// Primary text color
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(0x1A, 0x1A, 0x1A);

/// Secondary text color (muted)
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0x6B, 0x6B, 0x6B);

/// Hint text on the auth backdrop
pub const TEXT_HINT: Color32 = Color32::from_rgba_premultiplied(0x66, 0x66, 0x66, 0x66);

/// Destructive actions (delete, log out) - Salmon
pub const DANGER: Color32 = Color32::from_rgb(0xF4, 0x70, 0x62);

/// Row separator
pub const SEPARATOR: Color32 = Color32::from_rgb(0xE6, 0xE6, 0xE6);
