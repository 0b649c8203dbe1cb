// SPDX-License-Identifier: MPL-2.0
//! Public-facing view helpers and constructor for the editor facade.

use crate::config::BackgroundTheme;
use crate::error::Result;
use crate::media::{image_transform, ImageData};
use iced::Element;
use image_rs::DynamicImage;

use super::{state, view, Message, State};

/// Contextual data needed to render the editor view.
pub struct ViewContext<'a> {
    pub i18n: &'a crate::i18n::fluent::I18n,
    pub background_theme: BackgroundTheme,
}

impl State {
    /// Create a new editor session around a decoded (and already fitted) image.
    ///
    /// The image becomes both the working surface and the original snapshot
    /// that Reset restores. The undo history starts empty.
    pub fn new(image: DynamicImage) -> Result<Self> {
        let current_image = image_transform::dynamic_to_image_data(&image)?;

        Ok(Self {
            base_image: image.clone(),
            rendered: image.clone(),
            resize: state::ResizeState::from_image(&current_image),
            current_image,
            original_image: image,
            adjustment: state::AdjustmentState::default(),
            history: state::SnapshotStack::default(),
            crop: state::CropState::default(),
            active_tool: None,
            sidebar_expanded: true,
        })
    }

    /// Render the editor view.
    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        view::render(self, ctx)
    }

    pub(crate) fn display_image(&self) -> &ImageData {
        &self.current_image
    }
}

/// Available editing tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorTool {
    Adjust,
    Crop,
    Resize,
}
