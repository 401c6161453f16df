// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct owns the loaded thumbnail tree, the thumbnail cache and
//! the session state, and translates messages into side effects such as
//! loading a sections file or fetching thumbnails.

pub mod config;
mod message;
pub mod paths;
pub mod persisted_state;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::diagnostics::{DiagnosticEventKind, EventLog};
use crate::error::Error;
use crate::gallery::ThumbnailTree;
use crate::i18n::fluent::I18n;
use crate::thumbnail::{ThumbnailCache, ThumbnailCacheConfig};
use crate::ui::theming::ThemeMode;
use config::GalleryConfig;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    theme_mode: ThemeMode,
    gallery: GalleryConfig,
    /// Render output of the current sections file.
    tree: ThumbnailTree,
    /// Sections file being shown (or being loaded).
    source_path: Option<PathBuf>,
    /// Why the current sections file could not be shown.
    load_error: Option<Error>,
    is_loading: bool,
    thumbnails: ThumbnailCache,
    diagnostics: EventLog,
    /// Persisted session state (last sections file, last directory).
    app_state: persisted_state::AppState,
    /// Data directory override for the session state; `None` uses the
    /// regular resolution (CLI, environment, platform directory).
    data_dir: Option<PathBuf>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("source_path", &self.source_path)
            .field("groups", &self.tree.groups.len())
            .field("tiles", &self.tree.tile_count())
            .field("is_loading", &self.is_loading)
            .field("thumbnails", &self.thumbnails)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const MIN_WINDOW_HEIGHT: u32 = 320;
pub const MIN_WINDOW_WIDTH: u32 = 400;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an `Fn` boot function while flags can only be consumed once
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            theme_mode: ThemeMode::System,
            gallery: GalleryConfig::default(),
            tree: ThumbnailTree::default(),
            source_path: None,
            load_error: None,
            is_loading: false,
            thumbnails: ThumbnailCache::with_defaults(),
            diagnostics: EventLog::default(),
            app_state: persisted_state::AppState::default(),
            data_dir: None,
        }
    }
}

impl App {
    /// Initializes application state and starts loading the sections file
    /// given on the command line, or the one shown last.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), flags.i18n_dir.clone(), &config);
        let (app_state, state_warning) = persisted_state::AppState::load();

        let mut app = App {
            i18n,
            theme_mode: config.general.theme_mode,
            thumbnails: ThumbnailCache::new(ThumbnailCacheConfig::new(
                config.gallery.effective_cache_max_thumbnails(),
            )),
            gallery: config.gallery,
            app_state,
            ..Self::default()
        };

        for key in [config_warning, state_warning].into_iter().flatten() {
            let message = app.i18n.tr(&key);
            app.diagnostics
                .record(DiagnosticEventKind::ConfigWarning { message });
        }

        let startup_file = flags.file_path.map(PathBuf::from).or_else(|| {
            app.app_state
                .last_sections_file
                .clone()
                .filter(|path| path.is_file())
        });

        let task = match startup_file {
            Some(path) => update::load_sections_file(&mut app.update_context(), path),
            None => Task::none(),
        };

        (app, task)
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            gallery: &self.gallery,
            tree: &mut self.tree,
            source_path: &mut self.source_path,
            load_error: &mut self.load_error,
            is_loading: &mut self.is_loading,
            thumbnails: &mut self.thumbnails,
            diagnostics: &mut self.diagnostics,
            app_state: &mut self.app_state,
            data_dir: self.data_dir.clone(),
        }
    }

    fn title(&self) -> String {
        let file_name = self
            .source_path
            .as_ref()
            .and_then(|path| path.file_name())
            .map(|name| name.to_string_lossy().into_owned());

        match file_name {
            Some(name) => self
                .i18n
                .tr_with_args("window-title-with-file", &[("file", name.as_str())]),
            None => self.i18n.tr("window-title"),
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::OpenFileDialog => {
                update::handle_open_file_dialog(self.app_state.last_open_directory.clone())
            }
            Message::OpenFileDialogResult(path) => {
                update::handle_open_file_dialog_result(&mut self.update_context(), path)
            }
            Message::FileDropped(path) => {
                update::handle_file_dropped(&mut self.update_context(), path)
            }
            Message::Reload => update::handle_reload(&mut self.update_context()),
            Message::SectionsLoaded { path, result } => {
                update::handle_sections_loaded(&mut self.update_context(), &path, result)
            }
            Message::ThumbnailLoaded { url, result } => {
                update::handle_thumbnail_loaded(&mut self.update_context(), url, result)
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            tree: &self.tree,
            thumbnails: &self.thumbnails,
            source_path: self.source_path.as_deref(),
            load_error: self.load_error.as_ref(),
            is_loading: self.is_loading,
            thumbnail_size: self.gallery.effective_thumbnail_size(),
            tile_spacing: self.gallery.effective_tile_spacing(),
        })
    }
}
