// SPDX-License-Identifier: MPL-2.0
//! Crop overlay renderer: spotlight mask and drag interaction.

use crate::ui::design_tokens::sizing;
use crate::ui::editor::{CanvasMessage, CropRegion, Message};
use crate::ui::theme;

/// Canvas program used to draw and interact with the crop overlay.
///
/// Pointer positions are translated into image-local coordinates before
/// they reach the gesture machine, so the stored region is independent of
/// window layout and scroll position.
pub struct CropOverlayRenderer {
    /// Pending selection in image coordinates (signed while dragging).
    pub region: Option<CropRegion>,
    pub img_width: u32,
    pub img_height: u32,
}

impl CropOverlayRenderer {
    /// Convert widget coordinates to image coordinates (clamped to image bounds).
    fn screen_to_image_coords(
        &self,
        screen_pos: iced::Point,
        bounds: iced::Rectangle,
    ) -> Option<(f32, f32)> {
        let (display_width, display_height, offset_x, offset_y) = self.display_rect(bounds)?;

        let clamped_x = screen_pos.x.max(offset_x).min(offset_x + display_width);
        let clamped_y = screen_pos.y.max(offset_y).min(offset_y + display_height);

        let img_x = ((clamped_x - offset_x) * (self.img_width as f32 / display_width))
            .max(0.0)
            .min(self.img_width as f32);
        let img_y = ((clamped_y - offset_y) * (self.img_height as f32 / display_height))
            .max(0.0)
            .min(self.img_height as f32);

        Some((img_x, img_y))
    }

    /// Area the image occupies inside the widget (ContentFit::Contain logic).
    fn display_rect(&self, bounds: iced::Rectangle) -> Option<(f32, f32, f32, f32)> {
        if self.img_width == 0 || self.img_height == 0 {
            return None;
        }

        let img_aspect = self.img_width as f32 / self.img_height as f32;
        let bounds_aspect = bounds.width / bounds.height;

        if img_aspect > bounds_aspect {
            let display_width = bounds.width;
            let display_height = bounds.width / img_aspect;
            let offset_y = (bounds.height - display_height) / 2.0;
            Some((display_width, display_height, 0.0, offset_y))
        } else {
            let display_height = bounds.height;
            let display_width = bounds.height * img_aspect;
            let offset_x = (bounds.width - display_width) / 2.0;
            Some((display_width, display_height, offset_x, 0.0))
        }
    }
}

impl iced::widget::canvas::Program<Message> for CropOverlayRenderer {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &iced::Event,
        bounds: iced::Rectangle,
        cursor: iced::mouse::Cursor,
    ) -> Option<iced::widget::Action<Message>> {
        use iced::widget::Action;

        match event {
            // If cursor leaves the canvas, end any drag operation
            iced::Event::Mouse(iced::mouse::Event::CursorLeft) => {
                return Some(
                    Action::publish(Message::Canvas(CanvasMessage::CropOverlayMouseUp))
                        .and_capture(),
                );
            }
            iced::Event::Mouse(iced::mouse::Event::ButtonPressed(iced::mouse::Button::Left)) => {
                if let Some(cursor_position) = cursor.position_in(bounds) {
                    if let Some((img_x, img_y)) =
                        self.screen_to_image_coords(cursor_position, bounds)
                    {
                        return Some(
                            Action::publish(Message::Canvas(CanvasMessage::CropOverlayMouseDown {
                                x: img_x,
                                y: img_y,
                            }))
                            .and_capture(),
                        );
                    }
                }
            }
            iced::Event::Mouse(iced::mouse::Event::CursorMoved { .. }) => {
                // If cursor is outside bounds during move, end drag
                if cursor.position_in(bounds).is_none() {
                    return Some(
                        Action::publish(Message::Canvas(CanvasMessage::CropOverlayMouseUp))
                            .and_capture(),
                    );
                }

                if let Some(cursor_position) = cursor.position_in(bounds) {
                    if let Some((img_x, img_y)) =
                        self.screen_to_image_coords(cursor_position, bounds)
                    {
                        return Some(
                            Action::publish(Message::Canvas(CanvasMessage::CropOverlayMouseMove {
                                x: img_x,
                                y: img_y,
                            }))
                            .and_capture(),
                        );
                    }
                }
            }
            iced::Event::Mouse(iced::mouse::Event::ButtonReleased(iced::mouse::Button::Left)) => {
                return Some(
                    Action::publish(Message::Canvas(CanvasMessage::CropOverlayMouseUp))
                        .and_capture(),
                );
            }
            _ => {}
        }

        None
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &iced::Theme,
        bounds: iced::Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<iced::widget::canvas::Geometry> {
        use iced::widget::canvas::{Frame, Path, Stroke};

        let mut frame = Frame::new(renderer, bounds.size());

        let Some(region) = self.region.map(CropRegion::normalized) else {
            // No selection yet: the overlay stays fully transparent
            return vec![frame.into_geometry()];
        };

        let Some((display_width, display_height, offset_x, offset_y)) = self.display_rect(bounds)
        else {
            return vec![frame.into_geometry()];
        };

        // Convert the selection from image space to widget space
        let scale_x = display_width / self.img_width as f32;
        let scale_y = display_height / self.img_height as f32;

        let sel_x = offset_x + region.x * scale_x;
        let sel_y = offset_y + region.y * scale_y;
        let sel_width = region.width * scale_x;
        let sel_height = region.height * scale_y;

        // Spotlight: dim everything outside the selection
        let mask = theme::crop_overlay_mask_color();

        // Top band
        if sel_y > offset_y {
            frame.fill_rectangle(
                iced::Point::new(offset_x, offset_y),
                iced::Size::new(display_width, sel_y - offset_y),
                mask,
            );
        }

        // Bottom band
        let bottom_y = sel_y + sel_height;
        if bottom_y < offset_y + display_height {
            frame.fill_rectangle(
                iced::Point::new(offset_x, bottom_y),
                iced::Size::new(display_width, offset_y + display_height - bottom_y),
                mask,
            );
        }

        // Left band
        if sel_x > offset_x {
            frame.fill_rectangle(
                iced::Point::new(offset_x, sel_y),
                iced::Size::new(sel_x - offset_x, sel_height),
                mask,
            );
        }

        // Right band
        let right_x = sel_x + sel_width;
        if right_x < offset_x + display_width {
            frame.fill_rectangle(
                iced::Point::new(right_x, sel_y),
                iced::Size::new(offset_x + display_width - right_x, sel_height),
                mask,
            );
        }

        // Selection border
        let selection = Path::rectangle(
            iced::Point::new(sel_x, sel_y),
            iced::Size::new(sel_width, sel_height),
        );
        frame.stroke(
            &selection,
            Stroke::default()
                .with_width(sizing::CROP_BORDER_WIDTH)
                .with_color(theme::crop_overlay_border_color()),
        );

        vec![frame.into_geometry()]
    }
}
