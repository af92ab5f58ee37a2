// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Frame around the demo thumbnail.
///
/// Derived from the active theme background so it stays visible in both
/// light and dark modes.
pub fn thumbnail_frame(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let strong = palette.background.strong.color;

    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..strong
            },
            width: 1.0,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// Full-window backdrop behind the demo content.
#[must_use]
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_900)),
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}
