// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration around the editor session.
//!
//! The `App` struct wires together the editor, localization, and
//! notifications, and translates editor events into side effects like file
//! dialogs, asynchronous decoding, and export. Policy decisions (window
//! sizing, load-generation handling) stay close to the main update loop so
//! user-facing behavior is easy to audit.

mod message;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config::{self, BackgroundTheme};
use crate::i18n::fluent::I18n;
use crate::ui::editor::State as EditorState;
use crate::ui::notifications;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state bridging the editor, localization, and
/// user feedback.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    editor: Option<EditorState>,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
    /// Canvas backdrop configured in `settings.toml`.
    background_theme: BackgroundTheme,
    /// Last known window size, used to fit freshly loaded images.
    window_size: iced::Size,
    /// Monotonic token attached to every decode request. Completions
    /// carrying a stale token are discarded, so a slow decode can never
    /// overwrite a newer load.
    load_generation: u64,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("has_editor", &self.editor.is_some())
            .field("load_generation", &self.load_generation)
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 1000;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 700;
pub const MIN_WINDOW_WIDTH: u32 = 640;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

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

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
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
            screen: Screen::Empty,
            editor: None,
            notifications: notifications::Manager::new(),
            background_theme: BackgroundTheme::default(),
            window_size: iced::Size::new(
                WINDOW_DEFAULT_WIDTH as f32,
                WINDOW_DEFAULT_HEIGHT as f32,
            ),
            load_generation: 0,
        }
    }
}

impl App {
    /// Initializes application state and optionally kicks off asynchronous
    /// image loading based on `Flags` received from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let mut app = App {
            i18n,
            ..Self::default()
        };

        if let Some(theme) = config.background_theme {
            app.background_theme = theme;
        }

        let task = if let Some(path_str) = flags.file_path {
            app.begin_load(std::path::PathBuf::from(path_str))
        } else {
            Task::none()
        };

        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        match self.background_theme {
            BackgroundTheme::Light => Theme::Light,
            BackgroundTheme::Dark => Theme::Dark,
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create(self.screen, self.notifications.has_notifications())
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            editor: self.editor.as_ref(),
            notifications: &self.notifications,
            background_theme: self.background_theme,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{DynamicImage, ImageBuffer, Rgba};

    fn test_image(width: u32, height: u32) -> DynamicImage {
        let buffer = ImageBuffer::from_pixel(width, height, Rgba([1, 2, 3, 255]));
        DynamicImage::ImageRgba8(buffer)
    }

    fn decoded(app: &App, generation_offset: u64, image: DynamicImage) -> Message {
        Message::ImageDecoded {
            generation: app.load_generation - generation_offset,
            result: Ok(image),
        }
    }

    #[test]
    fn decode_success_installs_editor_session() {
        let mut app = App::default();
        app.load_generation = 1;

        let message = decoded(&app, 0, test_image(8, 6));
        let _ = app.update(message);

        assert!(app.editor.is_some());
        assert_eq!(app.screen, Screen::Editor);
    }

    #[test]
    fn stale_decode_generations_are_discarded() {
        let mut app = App::default();
        app.load_generation = 2;

        // A completion from the first (superseded) load arrives late
        let message = decoded(&app, 1, test_image(8, 6));
        let _ = app.update(message);

        assert!(app.editor.is_none());
        assert_eq!(app.screen, Screen::Empty);
    }

    #[test]
    fn stale_decode_does_not_replace_current_session() {
        let mut app = App::default();
        app.load_generation = 1;
        let _ = app.update(decoded(&app, 0, test_image(8, 6)));

        app.load_generation = 2;
        let _ = app.update(decoded(&app, 0, test_image(20, 10)));
        let current_width = app.editor.as_ref().unwrap().current_image().width;
        assert_eq!(current_width, 20);

        // The old generation resolves afterwards and must be ignored
        let _ = app.update(decoded(&app, 1, test_image(99, 99)));
        let width_after = app.editor.as_ref().unwrap().current_image().width;
        assert_eq!(width_after, 20);
    }

    #[test]
    fn decode_failure_keeps_prior_state_and_notifies() {
        let mut app = App::default();
        app.load_generation = 1;
        let _ = app.update(decoded(&app, 0, test_image(8, 6)));
        assert!(app.editor.is_some());

        app.load_generation = 2;
        let failure = Message::ImageDecoded {
            generation: 2,
            result: Err(crate::error::Error::Image("corrupt".into())),
        };
        let _ = app.update(failure);

        // Prior session survives, an error toast is queued
        assert!(app.editor.is_some());
        assert_eq!(app.editor.as_ref().unwrap().current_image().width, 8);
        assert!(app.notifications.has_notifications());
    }

    #[test]
    fn loading_a_second_image_starts_a_fresh_history() {
        let mut app = App::default();
        app.load_generation = 1;
        let _ = app.update(decoded(&app, 0, test_image(8, 6)));

        // Make the first session undoable
        let editor = app.editor.as_mut().unwrap();
        let _ = editor.update(crate::ui::editor::Message::Sidebar(
            crate::ui::editor::SidebarMessage::RotateLeft,
        ));
        assert!(app.editor.as_ref().unwrap().can_undo());

        app.load_generation = 2;
        let _ = app.update(decoded(&app, 0, test_image(12, 10)));

        let editor = app.editor.as_ref().unwrap();
        assert!(!editor.can_undo());
        assert_eq!(editor.current_image().width, 12);
    }

    #[test]
    fn wide_images_are_fitted_on_load() {
        let mut app = App::default();
        app.window_size = iced::Size::new(2000.0, 1200.0);
        app.load_generation = 1;

        let _ = app.update(decoded(&app, 0, test_image(1800, 900)));

        let editor = app.editor.as_ref().unwrap();
        // Capped at 900px wide, aspect preserved
        assert_eq!(editor.current_image().width, 900);
        assert_eq!(editor.current_image().height, 450);
    }

    #[test]
    fn small_images_are_not_upscaled_on_load() {
        let mut app = App::default();
        app.window_size = iced::Size::new(2000.0, 1200.0);
        app.load_generation = 1;

        let _ = app.update(decoded(&app, 0, test_image(200, 150)));

        let editor = app.editor.as_ref().unwrap();
        assert_eq!(editor.current_image().width, 200);
        assert_eq!(editor.current_image().height, 150);
    }

    #[test]
    fn unsupported_dropped_files_are_rejected_with_a_warning() {
        let mut app = App::default();

        let _ = app.update(Message::FileDropped("notes.txt".into()));

        assert!(app.editor.is_none());
        assert!(app.notifications.has_notifications());
        // No decode was started
        assert_eq!(app.load_generation, 0);
    }

    #[test]
    fn window_resize_updates_fit_target() {
        let mut app = App::default();

        let _ = app.update(Message::WindowResized(iced::Size::new(640.0, 480.0)));
        assert!((app.window_size.width - 640.0).abs() < f32::EPSILON);
    }
}
