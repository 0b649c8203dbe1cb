// SPDX-License-Identifier: MPL-2.0
//! Reset/open/export helpers that keep the editor facade slim.

use crate::ui::editor::{Event, State};

impl State {
    /// Restores the original snapshot captured at load time.
    ///
    /// Both pixel content (original dimensions included) and the adjustment
    /// state return to their post-load values. Like the other destructive
    /// operations, Reset itself is undoable.
    pub(crate) fn sidebar_reset(&mut self) {
        self.push_undo();
        let original = self.original_image.clone();
        self.bake_surface(original);
    }

    pub(crate) fn toolbar_open_image(&mut self) -> Event {
        Event::OpenRequested
    }

    pub(crate) fn toolbar_export(&self) -> Event {
        Event::ExportRequested
    }
}
