//! Shared theme constants for reel UI components

use iced::Color;
use reel_core::Rgba;

pub const BG_DARK: Color = Color::from_rgb(0.12, 0.12, 0.14);
pub const BG_MEDIUM: Color = Color::from_rgb(0.18, 0.18, 0.20);
pub const BORDER_COLOR: Color = Color::from_rgb(0.35, 0.35, 0.40);
pub const TEXT_PRIMARY: Color = Color::from_rgb(0.9, 0.9, 0.9);
pub const TEXT_SECONDARY: Color = Color::from_rgb(0.6, 0.6, 0.65);
pub const TEXT_DISABLED: Color = Color::from_rgb(0.4, 0.4, 0.42);
pub const ACCENT: Color = Color::from_rgb(0.3, 0.7, 0.9);

/// Picker column widths in pixels
pub const LANGUAGES_WIDTH: f32 = 180.0;
pub const VARIANTS_WIDTH: f32 = 200.0;
pub const SETTINGS_WIDTH: f32 = 220.0;

/// Convert a core color to an iced color
pub fn to_color(rgba: Rgba) -> Color {
    Color::from_rgba8(rgba.r, rgba.g, rgba.b, f32::from(rgba.a) / 255.0)
}
