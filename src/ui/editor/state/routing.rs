// SPDX-License-Identifier: MPL-2.0
//! Message routing helpers that keep the editor facade slim.

use crate::ui::editor::{
    CanvasMessage, EditorTool, Event, Message, SidebarMessage, State, ToolbarMessage,
};
use iced::keyboard;

impl State {
    pub(crate) fn handle_toolbar_message(&mut self, message: ToolbarMessage) -> Event {
        match message {
            ToolbarMessage::OpenImage => self.toolbar_open_image(),
            ToolbarMessage::Export => self.toolbar_export(),
            ToolbarMessage::Undo => {
                self.sidebar_undo();
                Event::None
            }
            ToolbarMessage::Reset => {
                self.sidebar_reset();
                Event::None
            }
        }
    }

    pub(crate) fn handle_sidebar_message(&mut self, message: SidebarMessage) -> Event {
        match message {
            SidebarMessage::ToggleSidebar => {
                self.sidebar_expanded = !self.sidebar_expanded;
                Event::None
            }
            SidebarMessage::SelectTool(tool) => {
                self.select_tool(tool);
                Event::None
            }
            SidebarMessage::RotateLeft => {
                self.sidebar_rotate_left();
                Event::None
            }
            SidebarMessage::RotateRight => {
                self.sidebar_rotate_right();
                Event::None
            }
            SidebarMessage::FlipHorizontal => {
                self.sidebar_flip_horizontal();
                Event::None
            }
            SidebarMessage::FlipVertical => {
                self.sidebar_flip_vertical();
                Event::None
            }
            SidebarMessage::BrightnessChanged(value) => {
                self.sidebar_brightness_changed(value);
                Event::None
            }
            SidebarMessage::ContrastChanged(value) => {
                self.sidebar_contrast_changed(value);
                Event::None
            }
            SidebarMessage::SaturationChanged(value) => {
                self.sidebar_saturation_changed(value);
                Event::None
            }
            SidebarMessage::BlurChanged(value) => {
                self.sidebar_blur_changed(value);
                Event::None
            }
            SidebarMessage::SetFilterPreset(preset) => {
                self.sidebar_set_filter_preset(preset);
                Event::None
            }
            SidebarMessage::ApplyCrop => {
                let event = self.apply_crop_from_sidebar();
                if !self.crop.is_active() && self.active_tool == Some(EditorTool::Crop) {
                    self.active_tool = None;
                }
                event
            }
            SidebarMessage::CancelCrop => {
                self.exit_crop_mode();
                if self.active_tool == Some(EditorTool::Crop) {
                    self.active_tool = None;
                }
                Event::None
            }
            SidebarMessage::WidthInputChanged(value) => {
                self.sidebar_width_input_changed(value);
                Event::None
            }
            SidebarMessage::HeightInputChanged(value) => {
                self.sidebar_height_input_changed(value);
                Event::None
            }
            SidebarMessage::ToggleLockAspect => {
                self.sidebar_toggle_lock();
                Event::None
            }
            SidebarMessage::ApplyResize => self.sidebar_apply_resize(),
        }
    }

    pub(crate) fn handle_canvas_message(&mut self, message: &CanvasMessage) -> Event {
        self.handle_crop_canvas_message(message)
    }

    pub(crate) fn handle_raw_event(&mut self, event: &iced::Event) -> Event {
        match event {
            iced::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::Escape),
                ..
            }) => {
                if self.crop.is_active() {
                    self.exit_crop_mode();
                    if self.active_tool == Some(EditorTool::Crop) {
                        self.active_tool = None;
                    }
                }
                Event::None
            }
            iced::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. })
                if modifiers.command() =>
            {
                match key {
                    keyboard::Key::Character(c) if c.as_str() == "z" => {
                        self.sidebar_undo();
                        Event::None
                    }
                    _ => Event::None,
                }
            }
            _ => Event::None,
        }
    }

    /// Tool selection toggles panels; entering or leaving the crop tool
    /// drives the gesture machine.
    fn select_tool(&mut self, tool: EditorTool) {
        if self.active_tool == Some(tool) {
            self.active_tool = None;
            if tool == EditorTool::Crop {
                self.exit_crop_mode();
            }
        } else {
            if self.active_tool == Some(EditorTool::Crop) {
                self.exit_crop_mode();
            }
            self.active_tool = Some(tool);
            if tool == EditorTool::Crop {
                self.enter_crop_mode();
            }
        }
    }
}
