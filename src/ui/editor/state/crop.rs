// SPDX-License-Identifier: MPL-2.0
//! Crop gesture state machine and region bookkeeping.

use crate::media::image_transform;
use crate::ui::editor::{CanvasMessage, Event, State};
use crate::ui::notifications::Notification;

/// Axis-aligned selection rectangle in surface-local coordinates.
///
/// Extents are signed while a drag is in flight (dragging up or left
/// produces negative width/height); [`CropRegion::normalized`] shifts the
/// origin and takes absolute values at gesture end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropRegion {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl CropRegion {
    /// A zero-extent region anchored at the drag origin.
    #[must_use]
    pub fn from_origin(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            width: 0.0,
            height: 0.0,
        }
    }

    /// Normalizes negative extents so the origin sits at the min corner.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        if self.width < 0.0 {
            self.x += self.width;
            self.width = -self.width;
        }
        if self.height < 0.0 {
            self.y += self.height;
            self.height = -self.height;
        }
        self
    }

    /// Rounds the normalized region to whole pixels.
    #[must_use]
    pub fn to_pixels(self) -> (u32, u32, u32, u32) {
        let normalized = self.normalized();
        (
            normalized.x.round().max(0.0) as u32,
            normalized.y.round().max(0.0) as u32,
            normalized.width.round().max(0.0) as u32,
            normalized.height.round().max(0.0) as u32,
        )
    }

    /// Whether the region covers no pixels after rounding.
    #[must_use]
    pub fn is_empty(self) -> bool {
        let (_, _, width, height) = self.to_pixels();
        width == 0 || height == 0
    }
}

/// Phases of the crop gesture.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum CropPhase {
    /// Crop mode off; the overlay ignores pointer input.
    #[default]
    Idle,
    /// Crop mode on, waiting for a drag.
    Armed,
    /// Pointer down; the selection follows the cursor.
    Dragging { start_x: f32, start_y: f32 },
}

/// State for the crop tool.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CropState {
    pub phase: CropPhase,
    /// Pending selection; exists only while crop mode is engaged.
    pub region: Option<CropRegion>,
}

impl CropState {
    /// Whether crop mode is engaged (overlay interactive, apply/cancel enabled).
    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self.phase, CropPhase::Idle)
    }

    /// Whether a drag is currently in flight.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, CropPhase::Dragging { .. })
    }
}

impl State {
    /// Enters crop mode: the overlay becomes pointer-interactive.
    pub(crate) fn enter_crop_mode(&mut self) {
        self.crop.phase = CropPhase::Armed;
        self.crop.region = None;
    }

    /// Leaves crop mode, discarding any pending selection.
    pub(crate) fn exit_crop_mode(&mut self) {
        self.crop.phase = CropPhase::Idle;
        self.crop.region = None;
    }

    /// Drops a pending selection without leaving crop mode.
    pub(crate) fn discard_pending_crop(&mut self) {
        if self.crop.is_active() {
            self.crop.phase = CropPhase::Armed;
        }
        self.crop.region = None;
    }

    /// Routes pointer events from the overlay through the gesture machine.
    pub(crate) fn handle_crop_canvas_message(&mut self, message: &CanvasMessage) -> Event {
        if !self.crop.is_active() {
            return Event::None;
        }

        match *message {
            CanvasMessage::CropOverlayMouseDown { x, y } => {
                self.crop.phase = CropPhase::Dragging {
                    start_x: x,
                    start_y: y,
                };
                self.crop.region = Some(CropRegion::from_origin(x, y));
            }
            CanvasMessage::CropOverlayMouseMove { x, y } => {
                if let CropPhase::Dragging { start_x, start_y } = self.crop.phase {
                    self.crop.region = Some(CropRegion {
                        x: start_x,
                        y: start_y,
                        width: x - start_x,
                        height: y - start_y,
                    });
                }
            }
            CanvasMessage::CropOverlayMouseUp => {
                if self.crop.is_dragging() {
                    self.crop.phase = CropPhase::Armed;
                    self.crop.region = self.crop.region.map(CropRegion::normalized);
                }
            }
        }

        Event::None
    }

    /// Applies the pending selection to the surface.
    ///
    /// Precondition: a selection with non-zero extents. Rejected selections
    /// surface a warning and leave every piece of state untouched.
    pub(crate) fn apply_crop_from_sidebar(&mut self) -> Event {
        let Some(region) = self.crop.region else {
            return Event::Notify(Notification::warning("editor-crop-no-selection"));
        };

        if region.is_empty() {
            return Event::Notify(Notification::warning("editor-crop-empty-selection"));
        }

        let (x, y, width, height) = region.to_pixels();

        let Some(cropped) = image_transform::crop(&self.rendered, x, y, width, height) else {
            return Event::Notify(Notification::error("editor-crop-failed"));
        };

        self.push_undo();
        self.bake_surface(cropped);
        self.exit_crop_mode();
        Event::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_keeps_positive_regions() {
        let region = CropRegion {
            x: 10.0,
            y: 20.0,
            width: 30.0,
            height: 40.0,
        };
        assert_eq!(region.normalized(), region);
    }

    #[test]
    fn normalized_shifts_origin_for_negative_extents() {
        // Drag from (50, 50) up-left to (10, 10)
        let region = CropRegion {
            x: 50.0,
            y: 50.0,
            width: -40.0,
            height: -40.0,
        };
        let normalized = region.normalized();
        assert_eq!(normalized.x, 10.0);
        assert_eq!(normalized.y, 10.0);
        assert_eq!(normalized.width, 40.0);
        assert_eq!(normalized.height, 40.0);
    }

    #[test]
    fn zero_extent_region_is_empty() {
        assert!(CropRegion::from_origin(5.0, 5.0).is_empty());
        let line = CropRegion {
            x: 0.0,
            y: 0.0,
            width: 12.0,
            height: 0.2,
        };
        assert!(line.is_empty());
    }

    #[test]
    fn default_state_is_idle() {
        let state = CropState::default();
        assert!(!state.is_active());
        assert!(!state.is_dragging());
        assert!(state.region.is_none());
    }
}
