// SPDX-License-Identifier: MPL-2.0
//! Single thumbnail tile.
//!
//! A tile is a fixed-size square. What it shows depends on the cache entry
//! for its image URL: the decoded image, a neutral placeholder while loading,
//! or an error-tinted placeholder with a short label once loading failed.

use crate::i18n::fluent::I18n;
use crate::thumbnail::{ThumbnailCache, ThumbnailState};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{image, Column, Container, Text};
use iced::{alignment, ContentFit, Element, Length};

/// Read-only inputs shared by every tile of one frame.
#[derive(Clone, Copy)]
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub cache: &'a ThumbnailCache,
    /// Tile edge length in logical pixels.
    pub size: f32,
}

/// Visible state of a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileStatus {
    Loading,
    Ready,
    Failed,
}

/// Maps the cache entry for `image_url` to the state a tile displays.
///
/// URLs without an entry (not requested yet, or evicted) show as loading.
#[must_use]
pub fn status(cache: &ThumbnailCache, image_url: &str) -> TileStatus {
    match cache.state(image_url) {
        Some(ThumbnailState::Ready(_)) => TileStatus::Ready,
        Some(ThumbnailState::Failed(_)) => TileStatus::Failed,
        Some(ThumbnailState::Loading) | None => TileStatus::Loading,
    }
}

/// Renders the tile for photo `id` whose thumbnail lives at `image_url`.
pub fn view<'a, Message: 'a>(
    id: &'a str,
    image_url: &'a str,
    ctx: ViewContext<'a>,
) -> Element<'a, Message> {
    let size = Length::Fixed(ctx.size);

    match ctx.cache.state(image_url) {
        Some(ThumbnailState::Ready(data)) => Container::new(
            image(data.handle.clone())
                .content_fit(ContentFit::Cover)
                .width(size)
                .height(size),
        )
        .width(size)
        .height(size)
        .clip(true)
        .style(styles::container::tile_ready)
        .into(),
        Some(ThumbnailState::Failed(_)) => {
            let label = Column::new()
                .spacing(spacing::XXS)
                .align_x(alignment::Horizontal::Center)
                .push(Text::new(ctx.i18n.tr("thumbnail-failed")).size(typography::BODY))
                .push(
                    Text::new(id)
                        .size(typography::CAPTION)
                        .style(styles::text::hint),
                );

            Container::new(label)
                .width(size)
                .height(size)
                .padding(spacing::XS)
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Center)
                .style(styles::container::tile_failed)
                .into()
        }
        Some(ThumbnailState::Loading) | None => Container::new(Text::new(""))
            .width(size)
            .height(size)
            .style(styles::container::tile_placeholder)
            .into(),
    }
}
