//! Castle palette: stone, torchlight and banner gold.

use eframe::egui::Color32;

/// Top bar, darker than the hall below it
pub const TOP_BAR_BG: Color32 = Color32::from_rgb(0x26, 0x1C, 0x17);

/// Main hall background
pub const BG_DARK: Color32 = Color32::from_rgb(0x1B, 0x14, 0x11);

pub const CARD_BG: Color32 = Color32::from_rgb(0x33, 0x26, 0x1F);
pub const CARD_BORDER: Color32 = Color32::from_rgb(0x5E, 0x46, 0x33);
pub const HOVER_ITEM: Color32 = Color32::from_rgb(0x45, 0x33, 0x28);

/// Parchment, for body text
pub const TEXT_LIGHT: Color32 = Color32::from_rgb(0xEE, 0xE3, 0xCB);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0xB5, 0xA2, 0x86);

/// Bronze, for primary buttons
pub const ACCENT: Color32 = Color32::from_rgb(0x8A, 0x55, 0x25);

/// Banner gold for the active choice (selected god, active language)
pub const SELECTED: Color32 = Color32::from_rgb(0xD4, 0xA0, 0x3A);

pub const SUCCESS: Color32 = Color32::from_rgb(0x7F, 0xB0, 0x69);
pub const ERROR: Color32 = Color32::from_rgb(0xD9, 0x5D, 0x4F);
