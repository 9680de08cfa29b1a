//! Color Constants
//!
//! The color constants used throughout the FinTrack UI. A dark green/slate
//! scheme: money app, calm colors.

use eframe::egui::Color32;

/// Main background - Deep slate
pub const BG_DARK: Color32 = Color32::from_rgb(0x1A, 0x20, 0x1E);

/// Top bar background - Dark green-gray
pub const TOP_BAR_BG: Color32 = Color32::from_rgb(0x22, 0x2B, 0x27);

/// Card/panel background - Slightly lifted slate
pub const PANEL_BG: Color32 = Color32::from_rgb(0x26, 0x30, 0x2B);

/// Text on dark backgrounds
pub const TEXT_LIGHT: Color32 = Color32::from_rgb(0xE8, 0xEE, 0xEA);

/// Secondary text - Muted gray-green
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0x9A, 0xAB, 0xA2);

/// Accent - Money green
pub const ACCENT: Color32 = Color32::from_rgb(0x2E, 0x8B, 0x57);

/// Error color - Red
pub const ERROR: Color32 = Color32::from_rgb(0xE5, 0x53, 0x4B);

/// Success/notice color - Green
pub const SUCCESS: Color32 = Color32::from_rgb(0x4C, 0xAF, 0x50);
