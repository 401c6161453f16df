// SPDX-License-Identifier: MPL-2.0
//! `iced_gallery` is a lightweight thumbnail gallery built with the Iced GUI framework.
//!
//! It reads photo sections from a JSON or TOML file, turns them into a tree of
//! headed groups and tiles ([`gallery::render`]), and draws one thumbnail per
//! photo ([`ui::thumbnails`]). Thumbnails are loaded in the background and kept
//! in a bounded cache ([`thumbnail`]).

#![doc(html_root_url = "https://docs.rs/iced_gallery/0.1.0")]

pub mod app;
pub mod diagnostics;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod thumbnail;
pub mod ui;
