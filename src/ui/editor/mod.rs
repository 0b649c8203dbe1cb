// SPDX-License-Identifier: MPL-2.0
//! Image editor module with adjustment, crop, resize, and undo capabilities.
//!
//! This module follows a "state down, messages up" pattern. The editor owns
//! the whole editing session: the base bitmap the render pass draws from, the
//! rendered surface shown on the canvas, the original snapshot used by Reset,
//! and the bounded undo history. The parent application only performs side
//! effects (file dialogs, decoding, export) in response to [`Event`]s.

use crate::media::ImageData;

mod component;
mod messages;
mod overlay;
mod state;
mod view;

pub use self::state::{
    AdjustmentState, CropPhase, CropRegion, CropState, ResizeState, SnapshotStack, UNDO_LIMIT,
};
pub use component::{EditorTool, ViewContext};
use image_rs::DynamicImage;
pub use messages::{CanvasMessage, Event, Message, SidebarMessage, ToolbarMessage};

/// Local UI state for the editor screen.
#[derive(Clone)]
pub struct State {
    /// Input of the render pass. Replaced by baked output on crop/resize.
    base_image: DynamicImage,
    /// Output of the last render pass (the working surface).
    rendered: DynamicImage,
    /// Display data derived from `rendered`.
    current_image: ImageData,
    /// Immutable copy captured at load time, used only by Reset.
    original_image: DynamicImage,
    /// Current filter/transform parameters.
    adjustment: AdjustmentState,
    /// Bounded stack of full-frame snapshots for undo.
    history: SnapshotStack,
    /// Crop gesture state machine.
    crop: CropState,
    /// Resize tool inputs.
    resize: ResizeState,
    /// Currently active editing tool.
    active_tool: Option<EditorTool>,
    /// Whether the sidebar is expanded.
    sidebar_expanded: bool,
}

impl std::fmt::Debug for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("adjustment", &self.adjustment)
            .field("history_len", &self.history.len())
            .field("crop", &self.crop)
            .field("active_tool", &self.active_tool)
            .field("sidebar_expanded", &self.sidebar_expanded)
            .finish_non_exhaustive()
    }
}

impl State {
    /// Update the state and emit an [`Event`] for the parent when needed.
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::Toolbar(msg) => self.handle_toolbar_message(msg),
            Message::Sidebar(msg) => self.handle_sidebar_message(msg),
            Message::Canvas(msg) => self.handle_canvas_message(&msg),
            Message::RawEvent { event, .. } => self.handle_raw_event(&event),
        }
    }

    // Message handlers live in state::routing

    /// Get the current display image.
    pub fn current_image(&self) -> &ImageData {
        &self.current_image
    }

    /// Get the rendered working surface (for export).
    pub fn rendered(&self) -> &DynamicImage {
        &self.rendered
    }

    /// Get the current adjustment parameters.
    pub fn adjustment(&self) -> &AdjustmentState {
        &self.adjustment
    }

    /// Get the crop gesture state.
    pub fn crop(&self) -> &CropState {
        &self.crop
    }

    /// Get the resize tool state.
    pub fn resize(&self) -> &ResizeState {
        &self.resize
    }

    /// Whether an undo snapshot is available.
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Get the active tool.
    pub fn active_tool(&self) -> Option<EditorTool> {
        self.active_tool
    }

    /// Check if sidebar is expanded.
    pub fn is_sidebar_expanded(&self) -> bool {
        self.sidebar_expanded
    }
}

#[cfg(test)]
mod tests;
