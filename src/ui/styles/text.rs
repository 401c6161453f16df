// SPDX-License-Identifier: MPL-2.0
//! Text styles.

use crate::ui::design_tokens::{opacity, palette};
use iced::widget::text;
use iced::{Color, Theme};

/// Section heading above a group of tiles.
pub fn section_heading(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(theme.extended_palette().background.base.text),
    }
}

/// Secondary text (hints, tile labels, status bar).
pub fn hint(theme: &Theme) -> text::Style {
    let base = theme.extended_palette().background.base.text;
    text::Style {
        color: Some(Color {
            a: opacity::HINT,
            ..base
        }),
    }
}

/// Error line shown when a sections file cannot be loaded.
pub fn error(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(palette::ERROR_500),
    }
}
