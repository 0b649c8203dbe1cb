// SPDX-License-Identifier: MPL-2.0
//! The render pass: composes the adjustment state into one redraw.

use crate::media::{color_adjust, image_transform, FilterEffect};
use crate::ui::editor::{AdjustmentState, State};
use image_rs::DynamicImage;

/// Renders the base image through the full adjustment chain.
///
/// The composition order is fixed: horizontal flip, vertical flip,
/// quarter-turn rotation, then the color effect chain. Pure with respect
/// to its inputs; identical inputs produce identical pixels.
pub fn compose(base: &DynamicImage, adjustment: &AdjustmentState) -> DynamicImage {
    let mut current = base.clone();

    if adjustment.flip_horizontal {
        current = image_transform::flip_horizontal(&current);
    }
    if adjustment.flip_vertical {
        current = image_transform::flip_vertical(&current);
    }

    current = match adjustment.rotation {
        90 => image_transform::rotate_right(&current),
        180 => image_transform::rotate_half(&current),
        270 => image_transform::rotate_left(&current),
        _ => current,
    };

    let effects = effect_chain(adjustment);
    if effects.is_empty() {
        current
    } else {
        color_adjust::apply(&current, &effects)
    }
}

/// Translates the adjustment state into typed effect descriptors, in the
/// fixed order brightness → contrast → saturation → blur → preset.
/// Identity parameters are skipped.
pub fn effect_chain(adjustment: &AdjustmentState) -> Vec<FilterEffect> {
    let mut effects = Vec::new();

    if !adjustment.brightness.is_identity() {
        effects.push(FilterEffect::Brightness(adjustment.brightness));
    }
    if !adjustment.contrast.is_identity() {
        effects.push(FilterEffect::Contrast(adjustment.contrast));
    }
    if !adjustment.saturation.is_identity() {
        effects.push(FilterEffect::Saturation(adjustment.saturation));
    }
    if !adjustment.blur.is_identity() {
        effects.push(FilterEffect::Blur(adjustment.blur));
    }
    if adjustment.preset != crate::media::FilterPreset::None {
        effects.push(FilterEffect::Preset(adjustment.preset));
    }

    effects
}

impl State {
    /// Re-renders the surface from the base image and current state.
    ///
    /// Called after every state mutation; there is no dirty tracking.
    pub(crate) fn rerender(&mut self) {
        let updated = compose(&self.base_image, &self.adjustment);
        match image_transform::dynamic_to_image_data(&updated) {
            Ok(image_data) => {
                self.rendered = updated;
                self.current_image = image_data;
                self.sync_resize_dimensions();
            }
            Err(err) => {
                eprintln!("[WARN] Failed to update editor surface: {err}");
            }
        }
    }
}
