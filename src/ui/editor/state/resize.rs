// SPDX-License-Identifier: MPL-2.0
//! Resize tool state and input validation.

use crate::media::{image_transform, ImageData};
use crate::ui::editor::{Event, State};
use crate::ui::notifications::Notification;

/// State for the resize tool.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeState {
    /// Width input field value
    pub width_input: String,
    /// Height input field value
    pub height_input: String,
    /// Whether aspect ratio is locked
    pub lock_aspect: bool,
    /// Aspect ratio of the current surface
    pub original_aspect: f32,
}

impl ResizeState {
    pub fn from_image(image: &ImageData) -> Self {
        Self {
            width_input: image.width.to_string(),
            height_input: image.height.to_string(),
            lock_aspect: true,
            original_aspect: aspect(image.width, image.height),
        }
    }

    /// Syncs the input fields with the provided surface dimensions.
    pub fn sync_from_image(&mut self, image: &ImageData) {
        self.width_input = image.width.to_string();
        self.height_input = image.height.to_string();
        self.original_aspect = aspect(image.width, image.height);
    }

    /// Parses both inputs into positive non-zero dimensions.
    ///
    /// Returns `None` for missing, non-numeric, or zero values.
    #[must_use]
    pub fn target_dimensions(&self) -> Option<(u32, u32)> {
        let width = self.width_input.trim().parse::<u32>().ok()?;
        let height = self.height_input.trim().parse::<u32>().ok()?;
        if width == 0 || height == 0 {
            return None;
        }
        Some((width, height))
    }
}

fn aspect(width: u32, height: u32) -> f32 {
    if height == 0 {
        1.0
    } else {
        width as f32 / height as f32
    }
}

impl State {
    pub(crate) fn sidebar_width_input_changed(&mut self, value: String) {
        self.resize.width_input = value;
        if self.resize.lock_aspect {
            if let Ok(width) = self.resize.width_input.trim().parse::<u32>() {
                let height =
                    (width as f32 / self.resize.original_aspect).round().max(1.0) as u32;
                self.resize.height_input = height.to_string();
            }
        }
    }

    pub(crate) fn sidebar_height_input_changed(&mut self, value: String) {
        self.resize.height_input = value;
        if self.resize.lock_aspect {
            if let Ok(height) = self.resize.height_input.trim().parse::<u32>() {
                let width =
                    (height as f32 * self.resize.original_aspect).round().max(1.0) as u32;
                self.resize.width_input = width.to_string();
            }
        }
    }

    pub(crate) fn sidebar_toggle_lock(&mut self) {
        self.resize.lock_aspect = !self.resize.lock_aspect;
    }

    /// Resamples the rendered surface to the requested dimensions.
    ///
    /// Both dimensions must be positive non-zero numbers; anything else is
    /// rejected with a user-facing error and no state change.
    pub(crate) fn sidebar_apply_resize(&mut self) -> Event {
        let Some((width, height)) = self.resize.target_dimensions() else {
            return Event::Notify(Notification::error("editor-resize-invalid-dimensions"));
        };

        self.push_undo();
        let resized = image_transform::resize(&self.rendered, width, height);
        self.bake_surface(resized);
        Event::None
    }

    pub(crate) fn sync_resize_dimensions(&mut self) {
        self.resize.sync_from_image(&self.current_image);
    }
}
