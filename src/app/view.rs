// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current screen
//! based on application state, with the toast overlay stacked on top.

use super::{Message, Screen};
use crate::config::BackgroundTheme;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::editor::{self, State as EditorState};
use crate::ui::notifications::{Manager, Toast};
use crate::ui::theme;
use iced::widget::{button, container, text, Column, Stack};
use iced::{Element, Length, Theme};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub editor: Option<&'a EditorState>,
    pub notifications: &'a Manager,
    pub background_theme: BackgroundTheme,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Empty => view_empty(ctx.i18n, ctx.background_theme),
        Screen::Editor => view_editor(ctx.editor, ctx.i18n, ctx.background_theme),
    };

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .push(
            container(current_view)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .push(toasts)
        .into()
}

fn view_empty(i18n: &I18n, background_theme: BackgroundTheme) -> Element<'_, Message> {
    let open_btn = button(text(i18n.tr("empty-state-open")).size(typography::BODY_LG))
        .padding([spacing::SM, spacing::LG])
        .style(iced::widget::button::primary)
        .on_press(Message::OpenFileDialog);

    let hint = text(i18n.tr("empty-state-hint"))
        .size(typography::BODY)
        .style(|_theme: &Theme| iced::widget::text::Style {
            color: Some(theme::muted_text_color()),
        });

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(iced::Alignment::Center)
        .push(text(i18n.tr("empty-state-title")).size(typography::TITLE_MD))
        .push(open_btn)
        .push(hint);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(iced::Alignment::Center)
        .align_y(iced::Alignment::Center)
        .style(theme::editor_canvas_style(theme::canvas_surface_color(
            background_theme,
        )))
        .into()
}

fn view_editor<'a>(
    editor: Option<&'a EditorState>,
    i18n: &'a I18n,
    background_theme: BackgroundTheme,
) -> Element<'a, Message> {
    if let Some(editor_state) = editor {
        editor_state
            .view(editor::ViewContext {
                i18n,
                background_theme,
            })
            .map(Message::Editor)
    } else {
        // Fallback if editor state is missing
        container(text(i18n.tr("editor-missing-session")))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}
