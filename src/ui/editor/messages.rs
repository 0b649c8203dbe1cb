// SPDX-License-Identifier: MPL-2.0
//! Editor message/event types re-exported by the facade.

use crate::media::FilterPreset;
use crate::ui::editor::EditorTool;
use crate::ui::notifications::Notification;
use iced;

/// Toolbar-specific messages.
#[derive(Debug, Clone)]
pub enum ToolbarMessage {
    OpenImage,
    Export,
    Undo,
    Reset,
}

/// Sidebar control messages.
#[derive(Debug, Clone)]
pub enum SidebarMessage {
    ToggleSidebar,
    SelectTool(EditorTool),
    RotateLeft,
    RotateRight,
    FlipHorizontal,
    FlipVertical,
    /// Brightness slider changed (live, no history entry)
    BrightnessChanged(i32),
    /// Contrast slider changed (live, no history entry)
    ContrastChanged(i32),
    /// Saturation slider changed (live, no history entry)
    SaturationChanged(i32),
    /// Blur slider changed (live, no history entry)
    BlurChanged(f32),
    /// Named preset selected (live, no history entry)
    SetFilterPreset(FilterPreset),
    ApplyCrop,
    CancelCrop,
    WidthInputChanged(String),
    HeightInputChanged(String),
    ToggleLockAspect,
    ApplyResize,
}

/// Canvas overlay interaction messages, in image-local coordinates.
#[derive(Debug, Clone)]
pub enum CanvasMessage {
    CropOverlayMouseDown { x: f32, y: f32 },
    CropOverlayMouseMove { x: f32, y: f32 },
    CropOverlayMouseUp,
}

/// Messages emitted directly by the editor widgets.
#[derive(Debug, Clone)]
pub enum Message {
    Toolbar(ToolbarMessage),
    Sidebar(SidebarMessage),
    Canvas(CanvasMessage),
    /// Raw event for keyboard shortcuts
    RawEvent {
        window: iced::window::Id,
        event: iced::Event,
    },
}

impl From<ToolbarMessage> for Message {
    fn from(message: ToolbarMessage) -> Self {
        Message::Toolbar(message)
    }
}

impl From<SidebarMessage> for Message {
    fn from(message: SidebarMessage) -> Self {
        Message::Sidebar(message)
    }
}

impl From<CanvasMessage> for Message {
    fn from(message: CanvasMessage) -> Self {
        Message::Canvas(message)
    }
}

/// Events propagated to the parent application for side effects.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// Request to open the file picker for a new image.
    OpenRequested,
    /// Request to export the rendered surface.
    ExportRequested,
    /// Surface a user-facing notification.
    Notify(Notification),
}
