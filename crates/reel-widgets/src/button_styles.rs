//! Button styling for the subtitles picker
//!
//! - Option rows: flat, accent background when selected
//! - Step buttons: raised -/+ with a pressed-in look while held

use iced::widget::button::{Status, Style};
use iced::{Background, Border, Color, Shadow, Vector};

use crate::theme::{ACCENT, BG_DARK, BG_MEDIUM, TEXT_DISABLED, TEXT_PRIMARY};

/// Shadow offset for raised buttons
const SHADOW_OFFSET: Vector = Vector::new(1.0, 1.0);

/// Lighten a color by a factor (0.0-1.0)
fn lighten(color: Color, factor: f32) -> Color {
    Color::from_rgb(
        (color.r + factor).min(1.0),
        (color.g + factor).min(1.0),
        (color.b + factor).min(1.0),
    )
}

/// Darken a color by a factor (0.0-1.0)
fn darken(color: Color, factor: f32) -> Color {
    Color::from_rgb(
        (color.r * (1.0 - factor)).max(0.0),
        (color.g * (1.0 - factor)).max(0.0),
        (color.b * (1.0 - factor)).max(0.0),
    )
}

fn flat_style(background: Color, text_color: Color) -> Style {
    Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: 3.0.into(),
        },
        shadow: Shadow::default(),
        snap: false,
    }
}

fn raised_style(base_color: Color) -> Style {
    Style {
        background: Some(Background::Color(base_color)),
        text_color: TEXT_PRIMARY,
        border: Border {
            color: lighten(base_color, 0.1),
            width: 1.0,
            radius: 4.0.into(),
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.4),
            offset: SHADOW_OFFSET,
            blur_radius: 2.0,
        },
        snap: false,
    }
}

fn pressed_style(base_color: Color) -> Style {
    Style {
        background: Some(Background::Color(darken(base_color, 0.15))),
        text_color: TEXT_PRIMARY,
        border: Border {
            color: darken(base_color, 0.2),
            width: 1.0,
            radius: 4.0.into(),
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.2),
            offset: Vector::new(0.5, 0.5),
            blur_radius: 1.0,
        },
        snap: false,
    }
}

/// Style for a language or variant row
///
/// Use with `.style(move |_theme, status| option_style(status, selected))`
pub fn option_style(status: Status, selected: bool) -> Style {
    if selected {
        match status {
            Status::Hovered => flat_style(lighten(ACCENT, 0.08), Color::WHITE),
            _ => flat_style(ACCENT, Color::WHITE),
        }
    } else {
        match status {
            Status::Active => flat_style(BG_DARK, TEXT_PRIMARY),
            Status::Hovered => flat_style(BG_MEDIUM, TEXT_PRIMARY),
            Status::Pressed => flat_style(darken(BG_MEDIUM, 0.1), TEXT_PRIMARY),
            Status::Disabled => flat_style(BG_DARK, TEXT_DISABLED),
        }
    }
}

/// Style for a -/+ step button
///
/// A button without `on_press` reports `Status::Disabled`, which renders flat
/// and dimmed.
pub fn step_style(status: Status) -> Style {
    match status {
        Status::Active => raised_style(BG_MEDIUM),
        Status::Hovered => raised_style(lighten(BG_MEDIUM, 0.08)),
        Status::Pressed => pressed_style(BG_MEDIUM),
        Status::Disabled => flat_style(BG_DARK, TEXT_DISABLED),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selected_rows_use_accent() {
        let style = option_style(Status::Active, true);
        assert_eq!(style.background, Some(Background::Color(ACCENT)));
    }

    #[test]
    fn test_disabled_step_is_dimmed() {
        let style = step_style(Status::Disabled);
        assert_eq!(style.text_color, TEXT_DISABLED);
        assert_eq!(style.shadow, Shadow::default());
    }
}
