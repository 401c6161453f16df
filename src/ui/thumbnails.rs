// SPDX-License-Identifier: MPL-2.0
//! Thumbnails view: lays out a [`ThumbnailTree`] as headed groups of tiles.
//!
//! Each group is a child of a keyed column, keyed by the section's
//! [`RenderKey`](crate::gallery::RenderKey), so a reload that keeps the same
//! sections keeps widget state attached to the same group. Tiles are drawn by
//! the caller-supplied renderer; this view only decides where they go.

use crate::gallery::{SectionGroup, ThumbnailTree, Tile};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{keyed_column, Column, Container, Row, Text};
use iced::{Element, Length, Padding};

/// Renders the whole tree.
///
/// `tile_spacing` separates tiles inside a group, horizontally and between
/// wrapped lines. An empty tree renders an empty container.
pub fn view<'a, Message, F>(
    tree: &'a ThumbnailTree,
    tile_spacing: f32,
    tile: F,
) -> Element<'a, Message>
where
    Message: 'a,
    F: Fn(&'a Tile) -> Element<'a, Message>,
{
    let groups = keyed_column(
        tree.groups
            .iter()
            .map(|group| (group.key, section(group, tile_spacing, &tile))),
    )
    .spacing(spacing::LG)
    .width(Length::Fill);

    Container::new(groups)
        .padding(Padding::ZERO)
        .width(Length::Fill)
        .style(styles::container::gallery)
        .into()
}

/// One section: optional heading, then every tile in a wrapping row.
fn section<'a, Message, F>(
    group: &'a SectionGroup,
    tile_spacing: f32,
    tile: &F,
) -> Element<'a, Message>
where
    Message: 'a,
    F: Fn(&'a Tile) -> Element<'a, Message>,
{
    let tiles = Row::with_children(group.tiles.iter().map(tile))
        .spacing(tile_spacing)
        .wrap()
        .vertical_spacing(tile_spacing);

    let mut column = Column::new().spacing(spacing::XS).width(Length::Fill);
    if let Some(heading) = &group.heading {
        column = column.push(
            Text::new(heading.as_str())
                .size(typography::TITLE_SM)
                .width(Length::Fill)
                .style(styles::text::section_heading),
        );
    }

    column.push(tiles).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::{render, Photo, PhotoSection, Segment};
    use std::cell::RefCell;

    fn sample_sections() -> Vec<PhotoSection> {
        vec![
            PhotoSection::new(
                "s1",
                Some("Trip"),
                vec![
                    Segment::new(vec![Photo::new("p1", "u1"), Photo::new("p2", "u2")]),
                    Segment::new(vec![Photo::new("p3", "u3")]),
                ],
            ),
            PhotoSection::new("s2", None, vec![Segment::new(vec![Photo::new("p4", "u4")])]),
        ]
    }

    #[test]
    fn every_tile_is_rendered_once_in_order() {
        let sections = sample_sections();
        let tree = render(Some(sections.as_slice()));
        let rendered = RefCell::new(Vec::new());

        let _element: Element<'_, ()> = view(&tree, 8.0, |tile| {
            rendered
                .borrow_mut()
                .push((tile.id.clone(), tile.image_url.clone()));
            Text::new(tile.id.as_str()).into()
        });

        assert_eq!(
            rendered.into_inner(),
            vec![
                ("p1".to_string(), "u1".to_string()),
                ("p2".to_string(), "u2".to_string()),
                ("p3".to_string(), "u3".to_string()),
                ("p4".to_string(), "u4".to_string()),
            ]
        );
    }

    #[test]
    fn empty_tree_renders_no_tiles() {
        let tree = render(None);
        let calls = RefCell::new(0usize);

        let _element: Element<'_, ()> = view(&tree, 8.0, |tile| {
            *calls.borrow_mut() += 1;
            Text::new(tile.id.as_str()).into()
        });

        assert_eq!(calls.into_inner(), 0);
    }
}
