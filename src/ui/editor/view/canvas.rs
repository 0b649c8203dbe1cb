// SPDX-License-Identifier: MPL-2.0
//! Image canvas composition with the crop overlay.

use crate::media::ImageData;
use crate::ui::theme;
use iced::widget::{container, image, Canvas, Stack};
use iced::{Element, Length};

use super::super::{overlay::CropOverlayRenderer, CropState, Message, State, ViewContext};

pub struct CanvasModel<'a> {
    pub display_image: &'a ImageData,
    pub crop: &'a CropState,
}

impl<'a> CanvasModel<'a> {
    pub fn from_state(state: &'a State) -> Self {
        Self {
            display_image: state.display_image(),
            crop: state.crop(),
        }
    }
}

pub fn view<'a>(model: CanvasModel<'a>, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let current_display = model.display_image;
    let img_width = current_display.width;
    let img_height = current_display.height;

    // Render image at natural size; the surrounding container centers it
    let image_widget = image(current_display.handle.clone())
        .width(Length::Fixed(img_width as f32))
        .height(Length::Fixed(img_height as f32));

    let image_with_overlay: Element<'a, Message> = if model.crop.is_active() {
        Stack::new()
            .push(image_widget)
            .push(
                Canvas::new(CropOverlayRenderer {
                    region: model.crop.region,
                    img_width,
                    img_height,
                })
                .width(Length::Fill)
                .height(Length::Fill),
            )
            .into()
    } else {
        image_widget.into()
    };

    let bg_color = theme::canvas_surface_color(ctx.background_theme);

    container(image_with_overlay)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(iced::Alignment::Center)
        .align_y(iced::Alignment::Center)
        .style(theme::editor_canvas_style(bg_color))
        .into()
}
