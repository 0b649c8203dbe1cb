// SPDX-License-Identifier: MPL-2.0
//! Top toolbar for the editor surface.

use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::styles::button as button_styles;
use iced::widget::{button, container, Row, Text};
use iced::{Alignment, Element, Length};

use super::super::{Message, State, ToolbarMessage, ViewContext};

pub struct ToolbarModel {
    pub can_undo: bool,
}

impl ToolbarModel {
    pub fn from_state(state: &State) -> Self {
        Self {
            can_undo: state.can_undo(),
        }
    }
}

pub fn view<'a>(model: &ToolbarModel, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let open_btn = button(Text::new(ctx.i18n.tr("editor-open-image")).size(typography::BODY))
        .padding([spacing::XS, spacing::SM])
        .on_press(Message::Toolbar(ToolbarMessage::OpenImage));

    // Disabled until a snapshot is available; restored the moment one is pushed
    let undo_btn = button(Text::new(ctx.i18n.tr("editor-undo")).size(typography::BODY))
        .padding([spacing::XS, spacing::SM]);
    let undo_btn = if model.can_undo {
        undo_btn.on_press(Message::Toolbar(ToolbarMessage::Undo))
    } else {
        undo_btn.style(button_styles::disabled())
    };

    let reset_btn = button(Text::new(ctx.i18n.tr("editor-reset")).size(typography::BODY))
        .padding([spacing::XS, spacing::SM])
        .on_press(Message::Toolbar(ToolbarMessage::Reset));

    let export_btn = button(Text::new(ctx.i18n.tr("editor-export")).size(typography::BODY))
        .padding([spacing::XS, spacing::SM])
        .style(iced::widget::button::primary)
        .on_press(Message::Toolbar(ToolbarMessage::Export));

    container(
        Row::new()
            .spacing(spacing::XS)
            .push(open_btn)
            .push(undo_btn)
            .push(reset_btn)
            .push(export_btn)
            .align_y(Alignment::Center)
            .padding(spacing::XS),
    )
    .width(Length::Fill)
    .style(styles::editor::toolbar)
    .into()
}
