// SPDX-License-Identifier: MPL-2.0
//! Bounded undo history of full-frame snapshots.
//!
//! Snapshots capture the rendered surface, not the parameter state: undo has
//! to restore pixel content and dimensions across destructive operations
//! (crop, resize) that discard information a parameter diff could not bring
//! back. Entries are stored as losslessly encoded PNG, which keeps the stack
//! opaque and makes pushes genuinely best-effort.

use crate::error::Result;
use crate::media::{export, image_transform};
use crate::ui::editor::State;
use image_rs::DynamicImage;
use std::collections::VecDeque;

/// Maximum number of retained snapshots.
pub const UNDO_LIMIT: usize = 8;

/// One captured frame: encoded pixels plus dimensions.
#[derive(Clone)]
pub struct Snapshot {
    bytes: Vec<u8>,
    width: u32,
    height: u32,
}

impl Snapshot {
    /// Encodes the given surface into a snapshot.
    pub fn capture(image: &DynamicImage) -> Result<Self> {
        let bytes = export::encode_png(image)?;
        Ok(Self {
            bytes,
            width: image.width(),
            height: image.height(),
        })
    }

    /// Decodes the snapshot back into a surface of its own dimensions.
    pub fn restore(&self) -> Result<DynamicImage> {
        export::decode_png(&self.bytes)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

impl std::fmt::Debug for Snapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Snapshot")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("encoded_len", &self.bytes.len())
            .finish()
    }
}

/// Ordered snapshot stack, most-recent-last, capacity [`UNDO_LIMIT`].
#[derive(Debug, Clone, Default)]
pub struct SnapshotStack {
    entries: VecDeque<Snapshot>,
}

impl SnapshotStack {
    /// Appends a snapshot, evicting the oldest entry at capacity.
    pub fn push(&mut self, snapshot: Snapshot) {
        if self.entries.len() >= UNDO_LIMIT {
            self.entries.pop_front();
        }
        self.entries.push_back(snapshot);
    }

    /// Removes and returns the most recent snapshot.
    pub fn pop(&mut self) -> Option<Snapshot> {
        self.entries.pop_back()
    }

    /// Drops every retained snapshot.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Dimensions of the retained snapshots, oldest first (for tests).
    #[cfg(test)]
    pub(crate) fn dimensions(&self) -> Vec<(u32, u32)> {
        self.entries.iter().map(|s| (s.width, s.height)).collect()
    }
}

impl State {
    /// Captures the current rendered surface onto the undo stack.
    ///
    /// History is best-effort: a failed capture is logged and the edit that
    /// triggered it proceeds regardless.
    pub(crate) fn push_undo(&mut self) {
        match Snapshot::capture(&self.rendered) {
            Ok(snapshot) => self.history.push(snapshot),
            Err(err) => {
                eprintln!("[WARN] Undo snapshot failed: {err}");
            }
        }
    }

    /// Restores the most recent snapshot, if any.
    ///
    /// The snapshot already contains the rendered pixels, adjustments
    /// included, so the adjustment chain resets to the identity.
    pub(crate) fn sidebar_undo(&mut self) {
        let Some(snapshot) = self.history.pop() else {
            return;
        };

        let image = match snapshot.restore() {
            Ok(image) => image,
            Err(err) => {
                eprintln!("[WARN] Undo snapshot could not be decoded: {err}");
                return;
            }
        };

        let Ok(image_data) = image_transform::dynamic_to_image_data(&image) else {
            return;
        };

        self.base_image = image.clone();
        self.rendered = image;
        self.current_image = image_data;
        self.adjustment.reset();
        self.discard_pending_crop();
        self.sync_resize_dimensions();
    }
}
