// SPDX-License-Identifier: MPL-2.0
//! Resize tool panel for the editor sidebar.

use crate::ui::design_tokens::{spacing, typography};
use crate::ui::editor::state::ResizeState;
use crate::ui::styles;
use iced::widget::{button, checkbox, container, text, text_input, Column, Row};
use iced::{Element, Length};

use super::super::super::ViewContext;
use crate::ui::editor::{Message, SidebarMessage};

pub fn panel<'a>(resize: &'a ResizeState, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let width_placeholder = ctx.i18n.tr("editor-resize-width-label");
    let width_label = text(width_placeholder.clone()).size(typography::BODY_SM);
    let width_input = text_input(width_placeholder.as_str(), &resize.width_input)
        .on_input(|value| Message::Sidebar(SidebarMessage::WidthInputChanged(value)))
        .padding(6)
        .size(typography::BODY)
        .width(Length::Fill);

    let height_placeholder = ctx.i18n.tr("editor-resize-height-label");
    let height_label = text(height_placeholder.clone()).size(typography::BODY_SM);
    let height_input = text_input(height_placeholder.as_str(), &resize.height_input)
        .on_input(|value| Message::Sidebar(SidebarMessage::HeightInputChanged(value)))
        .padding(6)
        .size(typography::BODY)
        .width(Length::Fill);

    let dimensions_row = Row::new()
        .spacing(spacing::XS)
        .push(
            Column::new()
                .spacing(spacing::XXS)
                .width(Length::Fill)
                .push(width_label)
                .push(width_input),
        )
        .push(
            Column::new()
                .spacing(spacing::XXS)
                .width(Length::Fill)
                .push(height_label)
                .push(height_input),
        );

    let lock_checkbox = checkbox(resize.lock_aspect)
        .label(ctx.i18n.tr("editor-resize-lock-aspect"))
        .on_toggle(|_| Message::Sidebar(SidebarMessage::ToggleLockAspect));

    let apply_btn = button(text(ctx.i18n.tr("editor-resize-apply")).size(typography::BODY_LG))
        .padding(10)
        .width(Length::Fill)
        .style(iced::widget::button::primary)
        .on_press(Message::Sidebar(SidebarMessage::ApplyResize));

    container(
        Column::new()
            .spacing(spacing::SM)
            .push(text(ctx.i18n.tr("editor-resize-section-title")).size(typography::BODY))
            .push(dimensions_row)
            .push(lock_checkbox)
            .push(apply_btn),
    )
    .padding(spacing::SM)
    .width(Length::Fill)
    .style(styles::editor::settings_panel)
    .into()
}
