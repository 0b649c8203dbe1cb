// SPDX-License-Identifier: MPL-2.0
//! Adjustment tool panel: sliders and preset filters with live redraw.

use crate::domain::editing::{adjustment_bounds, blur_bounds};
use crate::media::FilterPreset;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{container, slider, text, Column, Row};
use iced::{Element, Length};

use super::super::super::ViewContext;
use crate::ui::editor::state::AdjustmentState;
use crate::ui::editor::{Message, SidebarMessage};

pub fn panel<'a>(adjustment: &'a AdjustmentState, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let brightness_section = percent_slider(
        ctx.i18n.tr("editor-adjust-brightness-label"),
        adjustment.brightness.value(),
        |value| Message::Sidebar(SidebarMessage::BrightnessChanged(value)),
    );

    let contrast_section = percent_slider(
        ctx.i18n.tr("editor-adjust-contrast-label"),
        adjustment.contrast.value(),
        |value| Message::Sidebar(SidebarMessage::ContrastChanged(value)),
    );

    let saturation_section = percent_slider(
        ctx.i18n.tr("editor-adjust-saturation-label"),
        adjustment.saturation.value(),
        |value| Message::Sidebar(SidebarMessage::SaturationChanged(value)),
    );

    let blur_value = adjustment.blur.value();
    let blur_section = Column::new()
        .spacing(spacing::XXS)
        .push(text(ctx.i18n.tr("editor-adjust-blur-label")).size(typography::BODY_SM))
        .push(
            slider(blur_bounds::MIN..=blur_bounds::MAX, blur_value, |value| {
                Message::Sidebar(SidebarMessage::BlurChanged(value))
            })
            .step(0.5),
        )
        .push(text(format!("{blur_value:.1} px")).size(typography::BODY_SM));

    let mut presets = Row::new().spacing(spacing::XXS);
    for preset in FilterPreset::ALL {
        presets = presets.push(preset_button(ctx, preset, adjustment.preset == preset));
    }

    let presets_section = Column::new()
        .spacing(spacing::XXS)
        .push(text(ctx.i18n.tr("editor-filter-section-title")).size(typography::BODY_SM))
        .push(presets);

    container(
        Column::new()
            .spacing(spacing::SM)
            .push(text(ctx.i18n.tr("editor-adjust-section-title")).size(typography::BODY))
            .push(brightness_section)
            .push(contrast_section)
            .push(saturation_section)
            .push(blur_section)
            .push(presets_section),
    )
    .padding(spacing::SM)
    .width(Length::Fill)
    .style(styles::editor::settings_panel)
    .into()
}

/// A labeled percentage slider (0–200, 100 = identity) with a value readout.
fn percent_slider<'a>(
    label: String,
    value: i32,
    on_change: impl Fn(i32) -> Message + 'a,
) -> Column<'a, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .push(text(label).size(typography::BODY_SM))
        .push(slider(adjustment_bounds::MIN..=adjustment_bounds::MAX, value, on_change).step(1))
        .push(text(format!("{value}%")).size(typography::BODY_SM))
}

fn preset_button<'a>(
    ctx: &ViewContext<'a>,
    preset: FilterPreset,
    active: bool,
) -> Element<'a, Message> {
    let styled = iced::widget::button(text(ctx.i18n.tr(preset.i18n_key())).size(typography::BODY_SM))
        .on_press(Message::Sidebar(SidebarMessage::SetFilterPreset(preset)))
        .padding([spacing::XXS, spacing::XS]);
    if active {
        styled.style(styles::button::selected()).into()
    } else {
        styled.style(iced::widget::button::secondary).into()
    }
}
