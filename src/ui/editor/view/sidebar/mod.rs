// SPDX-License-Identifier: MPL-2.0
//! Sidebar layout composition.

pub mod adjustments_panel;
pub mod crop_panel;
pub mod resize_panel;

use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::editor::state::{AdjustmentState, CropState, ResizeState};
use crate::ui::styles;
use crate::ui::theme;
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{button, container, rule, text, Column, Row, Scrollable};
use iced::{alignment::Vertical, Background, Border, Element, Length};

use super::super::{EditorTool, Message, SidebarMessage, State, ViewContext};

pub struct SidebarModel<'a> {
    pub active_tool: Option<EditorTool>,
    pub adjustment: &'a AdjustmentState,
    pub crop: &'a CropState,
    pub resize: &'a ResizeState,
}

impl<'a> SidebarModel<'a> {
    pub fn from_state(state: &'a State) -> Self {
        Self {
            active_tool: state.active_tool(),
            adjustment: state.adjustment(),
            crop: state.crop(),
            resize: state.resize(),
        }
    }
}

pub fn expanded<'a>(model: SidebarModel<'a>, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut scrollable_section = Column::new().spacing(spacing::SM);

    let adjust_button = tool_button(
        ctx.i18n.tr("editor-tool-adjust"),
        Message::Sidebar(SidebarMessage::SelectTool(EditorTool::Adjust)),
        model.active_tool == Some(EditorTool::Adjust),
    );
    scrollable_section = scrollable_section.push(adjust_button);
    if model.active_tool == Some(EditorTool::Adjust) {
        scrollable_section = scrollable_section.push(adjustments_panel::panel(model.adjustment, ctx));
    }

    scrollable_section = scrollable_section.push(rule::horizontal(1));
    scrollable_section = scrollable_section.push(rotate_section(ctx));
    scrollable_section = scrollable_section.push(flip_section(ctx));
    scrollable_section = scrollable_section.push(rule::horizontal(1));

    let crop_button = tool_button(
        ctx.i18n.tr("editor-tool-crop"),
        Message::Sidebar(SidebarMessage::SelectTool(EditorTool::Crop)),
        model.active_tool == Some(EditorTool::Crop),
    );
    scrollable_section = scrollable_section.push(crop_button);
    if model.active_tool == Some(EditorTool::Crop) {
        scrollable_section = scrollable_section.push(crop_panel::panel(model.crop, ctx));
    }

    let resize_button = tool_button(
        ctx.i18n.tr("editor-tool-resize"),
        Message::Sidebar(SidebarMessage::SelectTool(EditorTool::Resize)),
        model.active_tool == Some(EditorTool::Resize),
    );
    scrollable_section = scrollable_section.push(resize_button);
    if model.active_tool == Some(EditorTool::Resize) {
        scrollable_section = scrollable_section.push(resize_panel::panel(model.resize, ctx));
    }

    let scrollable = Scrollable::new(scrollable_section)
        .direction(Direction::Vertical(Scrollbar::new()))
        .height(Length::Fill)
        .width(Length::Fill);

    let layout = Column::new()
        .spacing(spacing::XS)
        .padding(spacing::SM)
        .width(Length::Fixed(sizing::SIDEBAR_WIDTH))
        .push(header_section(ctx))
        .push(scrollable);

    container(layout)
        .width(Length::Fixed(sizing::SIDEBAR_WIDTH))
        .height(Length::Fill)
        .style(|_theme: &iced::Theme| iced::widget::container::Style {
            background: Some(Background::Color(theme::sidebar_background())),
            border: Border {
                width: 0.0,
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}

/// Narrow strip with just the expand toggle.
pub fn collapsed<'a>() -> Element<'a, Message> {
    let toggle_button = button(text("☰").size(typography::TITLE_MD))
        .on_press(Message::Sidebar(SidebarMessage::ToggleSidebar))
        .padding(spacing::XS)
        .style(iced::widget::button::secondary);

    container(toggle_button)
        .padding(spacing::XXS)
        .height(Length::Fill)
        .style(|_theme: &iced::Theme| iced::widget::container::Style {
            background: Some(Background::Color(theme::sidebar_background())),
            ..Default::default()
        })
        .into()
}

fn header_section<'a>(ctx: &ViewContext<'a>) -> Column<'a, Message> {
    let toggle_button = button(text("☰").size(typography::TITLE_MD))
        .on_press(Message::Sidebar(SidebarMessage::ToggleSidebar))
        .padding(spacing::XS)
        .style(iced::widget::button::secondary);

    Column::new()
        .spacing(spacing::XS)
        .push(
            Row::new()
                .spacing(spacing::XS)
                .align_y(Vertical::Center)
                .push(toggle_button)
                .push(text(ctx.i18n.tr("editor-title")).size(typography::TITLE_SM)),
        )
        .push(rule::horizontal(1))
}

fn tool_button<'a>(label: String, message: Message, active: bool) -> Element<'a, Message> {
    let styled = button(text(label).size(typography::BODY_LG))
        .on_press(message)
        .padding(spacing::SM)
        .width(Length::Fill);
    if active {
        styled.style(iced::widget::button::primary).into()
    } else {
        styled.style(iced::widget::button::secondary).into()
    }
}

fn rotate_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let rotate_left_btn = button(text(ctx.i18n.tr("editor-rotate-left")).size(typography::BODY))
        .on_press(Message::Sidebar(SidebarMessage::RotateLeft))
        .padding(spacing::XS)
        .width(Length::Fill)
        .style(iced::widget::button::secondary);

    let rotate_right_btn = button(text(ctx.i18n.tr("editor-rotate-right")).size(typography::BODY))
        .on_press(Message::Sidebar(SidebarMessage::RotateRight))
        .padding(spacing::XS)
        .width(Length::Fill)
        .style(iced::widget::button::secondary);

    let controls = Row::new()
        .spacing(spacing::XS)
        .push(rotate_left_btn)
        .push(rotate_right_btn);
    let title = text(ctx.i18n.tr("editor-rotate-section-title")).size(typography::BODY);

    container(Column::new().spacing(6).push(title).push(controls))
        .padding(spacing::SM)
        .width(Length::Fill)
        .style(styles::editor::settings_panel)
        .into()
}

fn flip_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let flip_h_btn = button(text(ctx.i18n.tr("editor-flip-horizontal")).size(typography::BODY))
        .on_press(Message::Sidebar(SidebarMessage::FlipHorizontal))
        .padding(spacing::XS)
        .width(Length::Fill)
        .style(iced::widget::button::secondary);

    let flip_v_btn = button(text(ctx.i18n.tr("editor-flip-vertical")).size(typography::BODY))
        .on_press(Message::Sidebar(SidebarMessage::FlipVertical))
        .padding(spacing::XS)
        .width(Length::Fill)
        .style(iced::widget::button::secondary);

    let controls = Row::new().spacing(spacing::XS).push(flip_h_btn).push(flip_v_btn);
    let title = text(ctx.i18n.tr("editor-flip-section-title")).size(typography::BODY);

    container(Column::new().spacing(6).push(title).push(controls))
        .padding(spacing::SM)
        .width(Length::Fill)
        .style(styles::editor::settings_panel)
        .into()
}
