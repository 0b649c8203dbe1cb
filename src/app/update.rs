// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! This module contains the main `update` function plus the side-effect
//! helpers (file dialogs, decode tasks, export) that editor events request.

use super::{App, Message, Screen};
use crate::error::Error;
use crate::media::{self, export, image_transform};
use crate::ui::editor::{Event as EditorEvent, State as EditorState};
use crate::ui::notifications::Notification;
use iced::Task;
use std::path::PathBuf;

impl App {
    /// Main update entrypoint; exactly one message is processed at a time.
    pub(super) fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Editor(msg) => self.handle_editor_message(msg),
            Message::Notification(msg) => {
                self.notifications.handle_message(&msg);
                Task::none()
            }
            Message::OpenFileDialog => open_file_dialog(),
            Message::OpenFileDialogResult(None) => Task::none(),
            Message::OpenFileDialogResult(Some(path)) => self.begin_load(path),
            Message::ImageDecoded { generation, result } => self.finish_load(generation, result),
            Message::ExportDialogResult(path) => {
                self.export_to(path);
                Task::none()
            }
            Message::FileDropped(path) => self.begin_load(path),
            Message::WindowResized(size) => {
                self.window_size = size;
                Task::none()
            }
            Message::Tick(_) => {
                self.notifications.tick();
                Task::none()
            }
        }
    }

    fn handle_editor_message(&mut self, message: crate::ui::editor::Message) -> Task<Message> {
        let Some(editor) = self.editor.as_mut() else {
            return Task::none();
        };

        match editor.update(message) {
            EditorEvent::None => Task::none(),
            EditorEvent::OpenRequested => open_file_dialog(),
            EditorEvent::ExportRequested => open_export_dialog(),
            EditorEvent::Notify(notification) => {
                self.notifications.push(notification);
                Task::none()
            }
        }
    }

    /// Starts an asynchronous decode for `path`, superseding any in-flight
    /// load by bumping the generation token.
    pub(super) fn begin_load(&mut self, path: PathBuf) -> Task<Message> {
        if !media::is_supported_image(&path) {
            self.notifications
                .push(Notification::warning("notification-unsupported-file"));
            return Task::none();
        }

        self.load_generation += 1;
        let generation = self.load_generation;

        Task::perform(
            async move { media::load_image(&path) },
            move |result| Message::ImageDecoded { generation, result },
        )
    }

    /// Installs a finished decode, unless a newer load superseded it.
    pub(super) fn finish_load(
        &mut self,
        generation: u64,
        result: Result<image_rs::DynamicImage, Error>,
    ) -> Task<Message> {
        if generation != self.load_generation {
            // A newer load is current; this completion must not win
            return Task::none();
        }

        match result {
            Ok(image) => {
                let fitted = image_transform::fit_for_canvas(&image, self.window_size.width);
                match EditorState::new(fitted) {
                    Ok(editor) => {
                        self.editor = Some(editor);
                        self.screen = Screen::Editor;
                        self.notifications.clear_load_errors();
                    }
                    Err(err) => {
                        eprintln!("[WARN] Failed to build editor session: {err}");
                        self.notifications
                            .push(Notification::error("notification-load-error-decode"));
                    }
                }
            }
            Err(err) => {
                self.notifications.push(Notification::error(err.i18n_key()));
            }
        }

        Task::none()
    }

    /// Writes the rendered surface to the chosen path.
    fn export_to(&mut self, path: Option<PathBuf>) {
        let Some(path) = path else {
            // User cancelled the dialog
            return;
        };
        let Some(editor) = self.editor.as_ref() else {
            return;
        };

        match export::export_png(editor.rendered(), &path) {
            Ok(()) => {
                let filename = path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_else(|| export::DEFAULT_EXPORT_FILE_NAME.to_string());
                self.notifications.push(
                    Notification::success("notification-export-success")
                        .with_arg("filename", filename),
                );
            }
            Err(err) => {
                eprintln!("[WARN] Export failed: {err}");
                self.notifications
                    .push(Notification::error("notification-export-error"));
            }
        }
    }
}

/// Opens the image picker.
fn open_file_dialog() -> Task<Message> {
    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .add_filter("Images", media::extensions::IMAGE_EXTENSIONS)
                .pick_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        Message::OpenFileDialogResult,
    )
}

/// Opens the export save dialog with the default filename.
fn open_export_dialog() -> Task<Message> {
    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .set_file_name(export::DEFAULT_EXPORT_FILE_NAME)
                .add_filter("PNG Image", &["png"])
                .save_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        Message::ExportDialogResult,
    )
}
