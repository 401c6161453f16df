// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Without a sections file the empty state is shown. Otherwise the window
//! holds the scrollable gallery (or the load error) above a status bar.

use super::Message;
use crate::error::Error;
use crate::gallery::ThumbnailTree;
use crate::i18n::fluent::I18n;
use crate::thumbnail::ThumbnailCache;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::{empty_state, styles, thumbnail, thumbnails};
use iced::widget::{scrollable, Column, Container, Row, Space, Text};
use iced::{alignment, Element, Length};
use std::path::Path;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub tree: &'a ThumbnailTree,
    pub thumbnails: &'a ThumbnailCache,
    pub source_path: Option<&'a Path>,
    pub load_error: Option<&'a Error>,
    pub is_loading: bool,
    pub thumbnail_size: u32,
    pub tile_spacing: u16,
}

/// Renders the application view.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let Some(source_path) = ctx.source_path else {
        return empty_state::view(ctx.i18n, Message::OpenFileDialog);
    };

    let body = match ctx.load_error {
        Some(err) => view_load_error(ctx.i18n, err),
        None => view_gallery(&ctx),
    };

    Column::new()
        .push(Container::new(body).width(Length::Fill).height(Length::Fill))
        .push(view_status_bar(&ctx, source_path))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_gallery<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    #[allow(clippy::cast_precision_loss)]
    let size = ctx.thumbnail_size as f32;
    let tile_ctx = thumbnail::ViewContext {
        i18n: ctx.i18n,
        cache: ctx.thumbnails,
        size,
    };

    let gallery = thumbnails::view(ctx.tree, f32::from(ctx.tile_spacing), move |tile| {
        thumbnail::view(&tile.id, &tile.image_url, tile_ctx)
    });

    scrollable(Container::new(gallery).padding(spacing::MD))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_load_error<'a>(i18n: &I18n, err: &Error) -> Element<'a, Message> {
    let details = format!("{} ({})", i18n.tr(err.i18n_key()), err);
    let content = Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .push(
            Text::new(i18n.tr_with_args("sections-load-error", &[("details", details.as_str())]))
                .size(typography::BODY)
                .style(styles::text::error),
        )
        .push(
            Text::new(i18n.tr("reload-hint"))
                .size(typography::CAPTION)
                .style(styles::text::hint),
        );

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

/// Status line: file name on the left, summary and reload hint on the right.
fn status_text(ctx: &ViewContext<'_>) -> String {
    if ctx.is_loading {
        return ctx.i18n.tr("thumbnail-loading");
    }
    if ctx.load_error.is_some() {
        return ctx.i18n.tr("reload-hint");
    }
    if ctx.tree.is_empty() {
        return ctx.i18n.tr("sections-empty");
    }
    let sections = ctx.tree.groups.len().to_string();
    let photos = ctx.tree.tile_count().to_string();
    ctx.i18n.tr_with_args(
        "sections-summary",
        &[("sections", sections.as_str()), ("photos", photos.as_str())],
    )
}

fn view_status_bar<'a>(ctx: &ViewContext<'a>, source_path: &Path) -> Element<'a, Message> {
    let file_name = source_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let row = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(Text::new(file_name).size(typography::CAPTION))
        .push(Space::new().width(Length::Fill))
        .push(
            Text::new(status_text(ctx))
                .size(typography::CAPTION)
                .style(styles::text::hint),
        );

    Container::new(row)
        .width(Length::Fill)
        .height(sizing::STATUS_BAR_HEIGHT)
        .padding([spacing::XXS, spacing::SM])
        .style(styles::container::status_bar)
        .into()
}
