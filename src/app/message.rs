// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::ui::editor;
use crate::ui::notifications;
use image_rs::DynamicImage;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Editor(editor::Message),
    Notification(notifications::NotificationMessage),
    /// Trigger the open file dialog (from the empty state or the editor).
    OpenFileDialog,
    /// Result from the open file dialog.
    OpenFileDialogResult(Option<PathBuf>),
    /// A decode task finished. Stale generations are discarded.
    ImageDecoded {
        generation: u64,
        result: Result<DynamicImage, Error>,
    },
    /// Result from the export save dialog.
    ExportDialogResult(Option<PathBuf>),
    /// A file was dropped on the window.
    FileDropped(PathBuf),
    /// The window was resized (tracked for load-time fitting).
    WindowResized(iced::Size),
    /// Periodic tick for notification auto-dismiss.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional image path to preload on startup.
    pub file_path: Option<String>,
}
