// SPDX-License-Identifier: MPL-2.0
//! Editor view composition helpers.

pub mod canvas;
pub mod sidebar;
pub mod toolbar;

use iced::widget::{container, Column, Row};
use iced::{Element, Length};

use super::{Message, State, ViewContext};
use canvas::CanvasModel;
use sidebar::SidebarModel;
use toolbar::ToolbarModel;

pub fn render<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let toolbar_model = ToolbarModel::from_state(state);
    let toolbar = toolbar::view(&toolbar_model, &ctx);

    let mut main_row = Row::new().spacing(0.0);

    if state.is_sidebar_expanded() {
        let sidebar_model = SidebarModel::from_state(state);
        main_row = main_row.push(sidebar::expanded(sidebar_model, &ctx));
    } else {
        main_row = main_row.push(sidebar::collapsed());
    }

    let canvas_model = CanvasModel::from_state(state);
    main_row = main_row.push(canvas::view(canvas_model, &ctx));

    let content = Column::new().push(toolbar).push(main_row);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
