// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! Handlers borrow the parts of [`App`](super::App) they touch through an
//! [`UpdateContext`] and return the follow-up [`Task`]s: loading a sections
//! file, then one load per distinct thumbnail URL.

use super::config::GalleryConfig;
use super::persisted_state::AppState;
use super::Message;
use crate::diagnostics::{DiagnosticEventKind, EventLog};
use crate::error::Error;
use crate::gallery::{self, LoadedSections, PhotoSection, ThumbnailTree};
use crate::thumbnail::{self, ResolveContext, ThumbnailCache, ThumbnailData, ThumbnailSource};
use iced::Task;
use std::path::{Path, PathBuf};

/// File dialog filter for sections files.
const SECTION_FILE_EXTENSIONS: &[&str] = &["json", "toml"];

/// Mutable view of the application state used by the handlers.
pub struct UpdateContext<'a> {
    pub gallery: &'a GalleryConfig,
    pub tree: &'a mut ThumbnailTree,
    pub source_path: &'a mut Option<PathBuf>,
    pub load_error: &'a mut Option<Error>,
    pub is_loading: &'a mut bool,
    pub thumbnails: &'a mut ThumbnailCache,
    pub diagnostics: &'a mut EventLog,
    pub app_state: &'a mut AppState,
    pub data_dir: Option<PathBuf>,
}

/// Opens the native file picker, starting in the last used directory.
pub fn handle_open_file_dialog(last_directory: Option<PathBuf>) -> Task<Message> {
    Task::perform(
        async move {
            let mut dialog =
                rfd::AsyncFileDialog::new().add_filter("Photo sections", SECTION_FILE_EXTENSIONS);

            if let Some(dir) = last_directory {
                if dir.exists() {
                    dialog = dialog.set_directory(&dir);
                }
            }

            dialog.pick_file().await.map(|h| h.path().to_path_buf())
        },
        Message::OpenFileDialogResult,
    )
}

/// Handles the result of the open file dialog.
pub fn handle_open_file_dialog_result(
    ctx: &mut UpdateContext<'_>,
    path: Option<PathBuf>,
) -> Task<Message> {
    let Some(path) = path else {
        // User cancelled the dialog
        return Task::none();
    };
    load_sections_file(ctx, path)
}

/// Handles a file dropped on the window.
pub fn handle_file_dropped(ctx: &mut UpdateContext<'_>, path: PathBuf) -> Task<Message> {
    if path.is_dir() {
        return Task::none();
    }
    load_sections_file(ctx, path)
}

/// Reloads the current sections file and retries failed thumbnails.
pub fn handle_reload(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let Some(path) = ctx.source_path.clone() else {
        return Task::none();
    };
    ctx.thumbnails.clear_failed();
    load_sections_file(ctx, path)
}

/// Starts loading `path` in the background.
///
/// The path becomes the current source right away so that results of any
/// earlier load still in flight are discarded when they arrive.
pub fn load_sections_file(ctx: &mut UpdateContext<'_>, path: PathBuf) -> Task<Message> {
    *ctx.source_path = Some(path.clone());
    *ctx.is_loading = true;

    let task_path = path.clone();
    Task::perform(gallery::load_sections_async(task_path), move |result| {
        Message::SectionsLoaded { path, result }
    })
}

/// Applies a loaded sections file and requests its thumbnails.
pub fn handle_sections_loaded(
    ctx: &mut UpdateContext<'_>,
    path: &Path,
    result: Result<LoadedSections, Error>,
) -> Task<Message> {
    if ctx.source_path.as_deref() != Some(path) {
        // Superseded by a newer load
        return Task::none();
    }
    *ctx.is_loading = false;

    match result {
        Ok(loaded) => {
            let photos = loaded
                .sections
                .as_deref()
                .map_or(0, |sections| sections.iter().map(PhotoSection::photo_count).sum());
            ctx.diagnostics.record(DiagnosticEventKind::SectionsLoaded {
                path: path.display().to_string(),
                sections: loaded.sections.as_ref().map(Vec::len),
                photos,
            });

            ctx.app_state.remember_sections_file(&loaded.path);
            if let Some(key) = ctx.app_state.save_to(ctx.data_dir.clone()) {
                ctx.diagnostics
                    .record(DiagnosticEventKind::ConfigWarning { message: key });
            }

            *ctx.tree = gallery::render(loaded.sections.as_deref());
            *ctx.load_error = None;
            request_thumbnails(ctx)
        }
        Err(err) => {
            ctx.diagnostics.record(DiagnosticEventKind::SectionsFailed {
                path: path.display().to_string(),
                message: err.to_string(),
            });
            *ctx.tree = ThumbnailTree::default();
            *ctx.load_error = Some(err);
            Task::none()
        }
    }
}

/// Starts one background load per thumbnail URL of the current tree that the
/// cache has not seen yet.
pub fn request_thumbnails(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let resolve_ctx = ResolveContext {
        base_url: ctx.gallery.effective_base_url(),
        base_dir: ctx
            .source_path
            .as_deref()
            .and_then(Path::parent)
            .map(Path::to_path_buf),
    };
    let max_edge = ctx.gallery.effective_thumbnail_size();
    let timeout = ctx.gallery.effective_fetch_timeout();

    ctx.thumbnails
        .reserve(ctx.tree.tiles().map(|tile| tile.image_url.as_str()));
    let urls = ctx
        .thumbnails
        .urls_to_load(ctx.tree.tiles().map(|tile| tile.image_url.as_str()));

    let tasks: Vec<Task<Message>> = urls
        .into_iter()
        .filter(|url| ctx.thumbnails.begin_load(url))
        .map(|url| {
            let source = ThumbnailSource::resolve(&url, &resolve_ctx);
            Task::perform(
                thumbnail::load_thumbnail(source, max_edge, timeout),
                move |result| Message::ThumbnailLoaded { url, result },
            )
        })
        .collect();

    Task::batch(tasks)
}

/// Stores a finished thumbnail load.
pub fn handle_thumbnail_loaded(
    ctx: &mut UpdateContext<'_>,
    url: String,
    result: Result<ThumbnailData, Error>,
) -> Task<Message> {
    match &result {
        Ok(data) => ctx.diagnostics.record(DiagnosticEventKind::ThumbnailLoaded {
            url: url.clone(),
            width: data.width,
            height: data.height,
        }),
        Err(err) => ctx.diagnostics.record(DiagnosticEventKind::ThumbnailFailed {
            url: url.clone(),
            message: err.to_string(),
        }),
    }
    ctx.thumbnails.finish_load(&url, result);
    Task::none()
}
