//! View function for the subtitles picker

use iced::widget::{button, column, container, row, scrollable, text, tooltip, Space};
use iced::{Alignment, Background, Border, Element, Length};

use reel_core::{
    ColorSwatches, Direction, PickerViewModel, Rgba, SettingControl, SubtitlesPickerMessage,
    Variants, NO_VARIANTS_LABEL,
};

use crate::button_styles::{option_style, step_style};
use crate::theme::{
    to_color, BG_DARK, BORDER_COLOR, LANGUAGES_WIDTH, SETTINGS_WIDTH, TEXT_DISABLED, TEXT_PRIMARY,
    TEXT_SECONDARY, VARIANTS_WIDTH,
};

// ─────────────────────────────────────────────────────────────────────────────
// Main view function
// ─────────────────────────────────────────────────────────────────────────────

/// Render the subtitles picker
///
/// Layout:
/// ```text
/// ┌──────────────┬─────────────────┬────────────────────────┐
/// │ Languages    │ Variants        │ Settings               │
/// │  Off         │  EMBEDDED     ✓ │  Delay    [-] 0.00s [+] │
/// │  English   ✓ │  OpenSubtitles  │  Size     [-] 100%  [+] │
/// │  French      │                 │  Position [-] 0%    [+] │
/// └──────────────┴─────────────────┴────────────────────────┘
/// ```
pub fn subtitles_picker<'a, Message>(
    view: PickerViewModel<'a>,
    on_message: impl Fn(SubtitlesPickerMessage) -> Message + 'a,
) -> Element<'a, Message>
where
    Message: 'a,
{
    let PickerViewModel {
        languages,
        variants,
        delay,
        size,
        offset,
        colors,
    } = view;

    let language_rows: Vec<Element<'a, SubtitlesPickerMessage>> = languages
        .into_iter()
        .map(|option| {
            let message = option.message();
            option_row(option.label, option.selected, message)
        })
        .collect();

    let languages_column = column![
        header("Languages"),
        scrollable(column(language_rows).spacing(1).width(Length::Fill)),
    ]
    .spacing(6)
    .width(Length::Fixed(LANGUAGES_WIDTH));

    let variants_column = column![header("Variants"), variants_list(variants)]
        .spacing(6)
        .width(Length::Fixed(VARIANTS_WIDTH));

    let mut settings_column = column![
        header("Settings"),
        setting_control(delay),
        setting_control(size),
        setting_control(offset),
    ]
    .spacing(6)
    .width(Length::Fixed(SETTINGS_WIDTH));

    if let Some(colors) = colors {
        settings_column = settings_column.push(color_swatches(colors));
    }

    let picker: Element<'a, SubtitlesPickerMessage> = container(
        row![languages_column, variants_column, settings_column].spacing(12),
    )
    .padding(10)
    .style(picker_container_style)
    .into();

    picker.map(on_message)
}

fn header(title: &'static str) -> Element<'static, SubtitlesPickerMessage> {
    text(title).size(11).color(TEXT_SECONDARY).into()
}

/// A selectable row with a check mark when selected
fn option_row<'a>(
    label: &'a str,
    selected: bool,
    message: SubtitlesPickerMessage,
) -> Element<'a, SubtitlesPickerMessage> {
    let mark: Element<'a, SubtitlesPickerMessage> = if selected {
        text("✓").size(11).into()
    } else {
        Space::new().width(Length::Shrink).into()
    };

    button(
        row![text(label).size(12), Space::new().width(Length::Fill), mark]
            .spacing(4)
            .align_y(Alignment::Center),
    )
    .on_press(message)
    .padding([4, 8])
    .width(Length::Fill)
    .style(move |_theme: &iced::Theme, status| option_style(status, selected))
    .into()
}

/// Variant rows, or the "Subtitles are disabled" placeholder
fn variants_list(variants: Variants<'_>) -> Element<'_, SubtitlesPickerMessage> {
    match variants {
        Variants::List(options) => {
            let rows: Vec<Element<'_, SubtitlesPickerMessage>> = options
                .into_iter()
                .map(|option| {
                    let message = option.message();
                    option_row(option.track.origin.as_str(), option.selected, message)
                })
                .collect();
            scrollable(column(rows).spacing(1).width(Length::Fill)).into()
        }
        Variants::Disabled => container(text(NO_VARIANTS_LABEL).size(12).color(TEXT_DISABLED))
            .padding(8)
            .width(Length::Fill)
            .center_x(Length::Fill)
            .into(),
    }
}

/// Title plus `[-] value [+]`, greyed out and without handlers when disabled
fn setting_control(control: SettingControl) -> Element<'static, SubtitlesPickerMessage> {
    let title_color = if control.disabled {
        TEXT_DISABLED
    } else {
        TEXT_SECONDARY
    };

    let step_button = |glyph: &'static str, direction: Direction| {
        button(container(text(glyph).size(12)).center_x(Length::Fill))
            .on_press_maybe(control.message(direction))
            .width(Length::Fixed(26.0))
            .style(|_theme: &iced::Theme, status| step_style(status))
    };

    let value_color = if control.disabled {
        TEXT_DISABLED
    } else {
        TEXT_PRIMARY
    };

    let stepper = row![
        step_button("−", Direction::Decrease),
        container(text(control.label.clone()).size(12).color(value_color))
            .center_x(Length::Fill),
        step_button("+", Direction::Increase),
    ]
    .spacing(4)
    .align_y(Alignment::Center);

    let stepper: Element<'static, SubtitlesPickerMessage> = match control.tooltip {
        Some(hint) => tooltip(
            stepper,
            container(text(hint).size(10)).padding(4).style(picker_container_style),
            tooltip::Position::Bottom,
        )
        .into(),
        None => stepper.into(),
    };

    column![text(control.kind.title()).size(11).color(title_color), stepper]
        .spacing(2)
        .into()
}

/// Preview swatches for text, background and outline colors
fn color_swatches(colors: ColorSwatches) -> Element<'static, SubtitlesPickerMessage> {
    let swatch = |label: &'static str, color: Rgba| {
        column![
            text(label).size(9).color(TEXT_SECONDARY),
            container(Space::new().width(Length::Fixed(28.0)).height(Length::Fixed(14.0)))
                .style(move |_theme: &iced::Theme| container::Style {
                    background: Some(Background::Color(to_color(color))),
                    border: Border {
                        color: BORDER_COLOR,
                        width: 1.0,
                        radius: 2.0.into(),
                    },
                    ..Default::default()
                }),
        ]
        .spacing(2)
        .align_x(Alignment::Center)
    };

    row![
        swatch("Text", colors.text),
        swatch("Background", colors.background),
        swatch("Outline", colors.outline),
    ]
    .spacing(8)
    .into()
}

fn picker_container_style(_theme: &iced::Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(BG_DARK)),
        border: Border {
            color: BORDER_COLOR,
            width: 1.0,
            radius: 4.0.into(),
        },
        ..Default::default()
    }
}
