// SPDX-License-Identifier: MPL-2.0
//! Shared UI color helpers and overlay styles for the editor.

use crate::config::BackgroundTheme;
use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, GRAY_100, GRAY_900, WHITE},
};
use iced::widget::container;
use iced::{Color, Theme};

/// Flat color used when the canvas background theme is set to "Light".
pub fn canvas_light_surface_color() -> Color {
    GRAY_100
}

/// Flat color used when the canvas background theme is set to "Dark".
pub fn canvas_dark_surface_color() -> Color {
    GRAY_900
}

/// Background color of the sidebar.
pub fn sidebar_background() -> Color {
    GRAY_900
}

/// Standard color for error text.
pub fn error_text_color() -> Color {
    palette::ERROR_500
}

/// Standard color for muted/secondary text.
pub fn muted_text_color() -> Color {
    palette::GRAY_400
}

/// Style for the editor canvas background.
pub fn editor_canvas_style(background_color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(iced::Background::Color(background_color)),
        ..Default::default()
    }
}

/// Resolves the configured background theme into a surface color.
pub fn canvas_surface_color(background_theme: BackgroundTheme) -> Color {
    match background_theme {
        BackgroundTheme::Light => canvas_light_surface_color(),
        BackgroundTheme::Dark => canvas_dark_surface_color(),
    }
}

// ============================================================================
// Crop Overlay Styles
// ============================================================================

/// Color of the dimmed mask outside the crop selection.
pub fn crop_overlay_mask_color() -> Color {
    Color {
        a: opacity::OVERLAY_MEDIUM,
        ..BLACK
    }
}

/// Stroke color of the crop selection border.
pub fn crop_overlay_border_color() -> Color {
    WHITE
}
