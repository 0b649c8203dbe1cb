// SPDX-License-Identifier: MPL-2.0
//! Small helper methods that keep the editor facade lean.

use crate::media::image_transform;
use crate::ui::editor::{AdjustmentState, State};
use image_rs::DynamicImage;

impl State {
    /// Installs `image` as both base and rendered surface.
    ///
    /// Used after crop and resize, whose output already contains every
    /// pending adjustment; the chain resets to the identity so the next
    /// render pass does not apply those effects a second time.
    pub(crate) fn bake_surface(&mut self, image: DynamicImage) {
        let Ok(image_data) = image_transform::dynamic_to_image_data(&image) else {
            eprintln!("[WARN] Failed to convert baked surface for display");
            return;
        };

        self.base_image = image.clone();
        self.rendered = image;
        self.current_image = image_data;
        self.adjustment = AdjustmentState::default();
        self.discard_pending_crop();
        self.sync_resize_dimensions();
    }
}
