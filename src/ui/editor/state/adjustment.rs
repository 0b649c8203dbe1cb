// SPDX-License-Identifier: MPL-2.0
//! Adjustment tool state: filter parameters and render-time transforms.

use crate::domain::editing::{normalize_rotation, AdjustmentPercent, BlurRadius};
use crate::media::FilterPreset;
use crate::ui::editor::State;

/// Current filter and transform parameters.
///
/// The default value is the identity: rendering it reproduces the base
/// image pixel-for-pixel. Live slider changes mutate this state and trigger
/// a re-render without touching the undo history; only Reset restores the
/// defaults wholesale.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AdjustmentState {
    /// Multiplicative brightness (100 = identity).
    pub brightness: AdjustmentPercent,
    /// Contrast around the mid-point (100 = identity).
    pub contrast: AdjustmentPercent,
    /// Saturation (100 = identity, 0 = grayscale).
    pub saturation: AdjustmentPercent,
    /// Gaussian blur radius in pixels (0 = identity).
    pub blur: BlurRadius,
    /// Named preset applied after the numeric adjustments.
    pub preset: FilterPreset,
    /// Render-time rotation in degrees, normalized into `0..360`.
    pub rotation: i32,
    /// Mirror left-to-right at render time.
    pub flip_horizontal: bool,
    /// Mirror top-to-bottom at render time.
    pub flip_vertical: bool,
}

impl AdjustmentState {
    /// Returns true if any parameter differs from the identity.
    #[must_use]
    pub fn has_changes(&self) -> bool {
        !self.brightness.is_identity()
            || !self.contrast.is_identity()
            || !self.saturation.is_identity()
            || !self.blur.is_identity()
            || self.preset != FilterPreset::None
            || self.rotation != 0
            || self.flip_horizontal
            || self.flip_vertical
    }

    /// Reset all parameters to the identity.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl State {
    /// Handle brightness slider change with live redraw.
    pub(crate) fn sidebar_brightness_changed(&mut self, value: i32) {
        self.adjustment.brightness = AdjustmentPercent::new(value);
        self.rerender();
    }

    /// Handle contrast slider change with live redraw.
    pub(crate) fn sidebar_contrast_changed(&mut self, value: i32) {
        self.adjustment.contrast = AdjustmentPercent::new(value);
        self.rerender();
    }

    /// Handle saturation slider change with live redraw.
    pub(crate) fn sidebar_saturation_changed(&mut self, value: i32) {
        self.adjustment.saturation = AdjustmentPercent::new(value);
        self.rerender();
    }

    /// Handle blur slider change with live redraw.
    pub(crate) fn sidebar_blur_changed(&mut self, value: f32) {
        self.adjustment.blur = BlurRadius::new(value);
        self.rerender();
    }

    /// Select a named preset; exactly one is active at a time.
    pub(crate) fn sidebar_set_filter_preset(&mut self, preset: FilterPreset) {
        self.adjustment.preset = preset;
        self.rerender();
    }

    /// Rotation, kept normalized so the render pass only sees `0..360`.
    pub(crate) fn rotate_by(&mut self, degrees: i32) {
        self.adjustment.rotation = normalize_rotation(self.adjustment.rotation + degrees);
    }
}
