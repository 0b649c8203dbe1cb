// SPDX-License-Identifier: MPL-2.0
//! Crop tool panel for the editor sidebar.

use crate::ui::design_tokens::{spacing, typography};
use crate::ui::editor::state::CropState;
use crate::ui::styles;
use crate::ui::theme;
use iced::widget::{button, container, text, Column, Row};
use iced::{Element, Length, Theme};

use super::super::super::ViewContext;
use crate::ui::editor::{Message, SidebarMessage};

pub fn panel<'a>(crop: &'a CropState, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let title = text(ctx.i18n.tr("editor-crop-section-title")).size(typography::BODY);

    let hint = text(ctx.i18n.tr("editor-crop-hint"))
        .size(typography::BODY_SM)
        .style(|_theme: &Theme| iced::widget::text::Style {
            color: Some(theme::muted_text_color()),
        });

    let selection_label = match crop.region.map(|region| region.to_pixels()) {
        Some((_, _, width, height)) if width > 0 && height > 0 => ctx.i18n.tr_with_args(
            "editor-crop-selection-size",
            &[("width", &width.to_string()), ("height", &height.to_string())],
        ),
        _ => ctx.i18n.tr("editor-crop-no-selection-yet"),
    };
    let selection = text(selection_label).size(typography::BODY_SM);

    let cancel_btn = button(text(ctx.i18n.tr("editor-crop-cancel")).size(typography::BODY))
        .padding(spacing::XS)
        .width(Length::Fill)
        .style(iced::widget::button::secondary)
        .on_press(Message::Sidebar(SidebarMessage::CancelCrop));

    let apply_btn = button(text(ctx.i18n.tr("editor-crop-apply")).size(typography::BODY))
        .padding(spacing::XS)
        .width(Length::Fill)
        .style(iced::widget::button::primary)
        .on_press(Message::Sidebar(SidebarMessage::ApplyCrop));

    let buttons_row = Row::new()
        .spacing(spacing::XS)
        .push(cancel_btn)
        .push(apply_btn);

    container(
        Column::new()
            .spacing(spacing::SM)
            .push(title)
            .push(hint)
            .push(selection)
            .push(buttons_row),
    )
    .padding(spacing::SM)
    .width(Length::Fill)
    .style(styles::editor::settings_panel)
    .into()
}
