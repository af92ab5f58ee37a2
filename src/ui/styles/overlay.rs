// SPDX-License-Identifier: MPL-2.0
//! Overlay styles for the photo dimmer.

use crate::ui::design_tokens::{opacity, palette::BLACK};
use iced::widget::container;
use iced::{Background, Color, Theme};

fn dimmer_color(alpha: f32) -> Color {
    Color {
        a: alpha.clamp(opacity::TRANSPARENT, opacity::OPAQUE),
        ..BLACK
    }
}

/// Full-screen black backdrop at `alpha`.
pub fn dimmer(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(dimmer_color(alpha))),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn dimmer_alpha_is_clamped() {
        assert_abs_diff_eq!(dimmer_color(1.7).a, 1.0);
        assert_abs_diff_eq!(dimmer_color(-0.3).a, 0.0);
        assert_abs_diff_eq!(dimmer_color(0.4).a, 0.4);
    }

    #[test]
    fn dimmer_style_uses_black_background() {
        let style = dimmer(0.5)(&Theme::Dark);
        assert_eq!(
            style.background,
            Some(Background::Color(Color::from_rgba(0.0, 0.0, 0.0, 0.5)))
        );
    }
}
