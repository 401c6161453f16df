// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Gallery root: no background and no border, so the tiles sit directly on
/// the window surface.
pub fn gallery(_theme: &Theme) -> container::Style {
    container::Style::default()
}

/// Tile whose thumbnail is loading or not requested yet.
pub fn tile_placeholder(theme: &Theme) -> container::Style {
    let text = theme.extended_palette().background.base.text;

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::PLACEHOLDER,
            ..palette::GRAY_400
        })),
        border: Border {
            color: Color {
                a: opacity::PLACEHOLDER,
                ..text
            },
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        ..Default::default()
    }
}

/// Tile whose thumbnail failed to load.
pub fn tile_failed(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::ERROR_TINT,
            ..palette::ERROR_500
        })),
        text_color: Some(palette::ERROR_500),
        border: Border {
            color: palette::ERROR_500,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        ..Default::default()
    }
}

/// Tile holding a decoded thumbnail; clips the image to rounded corners.
pub fn tile_ready(_theme: &Theme) -> container::Style {
    container::Style {
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Status bar strip below the gallery.
pub fn status_bar(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        text_color: Some(palette.background.weak.text),
        border: Border {
            radius: radius::NONE.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
