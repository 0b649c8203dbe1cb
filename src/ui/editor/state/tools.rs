// SPDX-License-Identifier: MPL-2.0
//! Rotate and flip operations.
//!
//! These reframe the content without touching stored pixel dimensions:
//! the transform is applied by the render pass, not by permuting the base
//! image. They are destructive in the undo sense, so each pushes a snapshot
//! before mutating state.

use crate::domain::editing::QUARTER_TURN_DEGREES;
use crate::ui::editor::State;

impl State {
    pub(crate) fn sidebar_rotate_left(&mut self) {
        self.push_undo();
        self.rotate_by(-QUARTER_TURN_DEGREES);
        self.rerender();
    }

    pub(crate) fn sidebar_rotate_right(&mut self) {
        self.push_undo();
        self.rotate_by(QUARTER_TURN_DEGREES);
        self.rerender();
    }

    pub(crate) fn sidebar_flip_horizontal(&mut self) {
        self.push_undo();
        self.adjustment.flip_horizontal = !self.adjustment.flip_horizontal;
        self.rerender();
    }

    pub(crate) fn sidebar_flip_vertical(&mut self) {
        self.push_undo();
        self.adjustment.flip_vertical = !self.adjustment.flip_vertical;
        self.rerender();
    }
}
