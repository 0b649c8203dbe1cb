// SPDX-License-Identifier: MPL-2.0

use super::*;
use image_rs::{DynamicImage, ImageBuffer, Rgba};

fn gradient_image(width: u32, height: u32) -> DynamicImage {
    let buffer = ImageBuffer::from_fn(width, height, |x, y| {
        Rgba([(x * 17 % 256) as u8, (y * 31 % 256) as u8, 128, 255])
    });
    DynamicImage::ImageRgba8(buffer)
}

fn editor_state(width: u32, height: u32) -> State {
    State::new(gradient_image(width, height)).expect("editor state")
}

fn pixels(state: &State) -> Vec<u8> {
    state.rendered().to_rgba8().into_vec()
}

fn sidebar(state: &mut State, message: SidebarMessage) -> Event {
    state.update(Message::Sidebar(message))
}

fn drag_crop(state: &mut State, from: (f32, f32), to: (f32, f32)) {
    state.update(Message::Canvas(CanvasMessage::CropOverlayMouseDown {
        x: from.0,
        y: from.1,
    }));
    state.update(Message::Canvas(CanvasMessage::CropOverlayMouseMove {
        x: to.0,
        y: to.1,
    }));
    state.update(Message::Canvas(CanvasMessage::CropOverlayMouseUp));
}

#[test]
fn new_editor_session_starts_clean() {
    let state = editor_state(8, 6);

    assert!(!state.can_undo());
    assert!(!state.adjustment().has_changes());
    assert!(!state.crop().is_active());
    assert_eq!(state.active_tool(), None);
    assert_eq!(state.current_image().width, 8);
    assert_eq!(state.current_image().height, 6);
}

#[test]
fn sidebar_starts_expanded() {
    let state = editor_state(4, 3);
    assert!(state.is_sidebar_expanded());
}

#[test]
fn rendering_identical_state_twice_is_pixel_identical() {
    let mut state = editor_state(8, 6);

    sidebar(&mut state, SidebarMessage::BrightnessChanged(150));
    let first = pixels(&state);
    sidebar(&mut state, SidebarMessage::BrightnessChanged(150));
    let second = pixels(&state);

    assert_eq!(first, second);
}

#[test]
fn rotate_left_then_right_returns_to_zero() {
    let mut state = editor_state(8, 6);

    sidebar(&mut state, SidebarMessage::RotateLeft);
    assert_eq!(state.adjustment().rotation, 270);

    sidebar(&mut state, SidebarMessage::RotateRight);
    assert_eq!(state.adjustment().rotation, 0);
}

#[test]
fn four_rotations_in_one_direction_return_to_zero() {
    let mut state = editor_state(8, 6);

    for _ in 0..4 {
        sidebar(&mut state, SidebarMessage::RotateRight);
    }
    assert_eq!(state.adjustment().rotation, 0);
    assert_eq!(state.current_image().width, 8);
    assert_eq!(state.current_image().height, 6);
}

#[test]
fn rotation_swaps_displayed_dimensions() {
    let mut state = editor_state(8, 6);

    sidebar(&mut state, SidebarMessage::RotateRight);
    assert_eq!(state.current_image().width, 6);
    assert_eq!(state.current_image().height, 8);
}

#[test]
fn flipping_the_same_axis_twice_is_an_involution() {
    let mut state = editor_state(8, 6);
    let original = pixels(&state);

    sidebar(&mut state, SidebarMessage::FlipHorizontal);
    assert!(state.adjustment().flip_horizontal);
    assert_ne!(pixels(&state), original);

    sidebar(&mut state, SidebarMessage::FlipHorizontal);
    assert!(!state.adjustment().flip_horizontal);
    assert_eq!(pixels(&state), original);
}

#[test]
fn live_adjustments_do_not_push_history() {
    let mut state = editor_state(8, 6);

    sidebar(&mut state, SidebarMessage::BrightnessChanged(180));
    sidebar(&mut state, SidebarMessage::ContrastChanged(60));
    sidebar(&mut state, SidebarMessage::SaturationChanged(0));
    sidebar(&mut state, SidebarMessage::BlurChanged(3.0));
    sidebar(
        &mut state,
        SidebarMessage::SetFilterPreset(crate::media::FilterPreset::Sepia),
    );

    assert!(!state.can_undo());
}

#[test]
fn destructive_operations_push_history() {
    let mut state = editor_state(8, 6);

    sidebar(&mut state, SidebarMessage::RotateLeft);
    assert_eq!(state.history.len(), 1);

    sidebar(&mut state, SidebarMessage::FlipVertical);
    assert_eq!(state.history.len(), 2);

    state.update(Message::Toolbar(ToolbarMessage::Reset));
    assert_eq!(state.history.len(), 3);
}

#[test]
fn history_retains_at_most_eight_snapshots() {
    let mut state = editor_state(20, 20);

    for i in 1..=10u32 {
        sidebar(
            &mut state,
            SidebarMessage::WidthInputChanged((10 + i).to_string()),
        );
        sidebar(
            &mut state,
            SidebarMessage::HeightInputChanged((10 + i).to_string()),
        );
        let event = sidebar(&mut state, SidebarMessage::ApplyResize);
        assert!(matches!(event, Event::None));
    }

    assert_eq!(state.history.len(), UNDO_LIMIT);
    // The first two pushes were evicted; the oldest survivor is the surface
    // as it looked before the third resize (the second resize's 12x12 target).
    assert_eq!(state.history.dimensions().first(), Some(&(12, 12)));
}

#[test]
fn undo_with_empty_history_is_a_no_op() {
    let mut state = editor_state(8, 6);
    let before = pixels(&state);

    state.update(Message::Toolbar(ToolbarMessage::Undo));

    assert!(!state.can_undo());
    assert_eq!(pixels(&state), before);
}

#[test]
fn undo_restores_dimensions_after_resize() {
    let mut state = editor_state(8, 6);

    sidebar(&mut state, SidebarMessage::ToggleLockAspect);
    sidebar(&mut state, SidebarMessage::WidthInputChanged("4".into()));
    sidebar(&mut state, SidebarMessage::HeightInputChanged("3".into()));
    sidebar(&mut state, SidebarMessage::ApplyResize);
    assert_eq!(state.current_image().width, 4);
    assert_eq!(state.current_image().height, 3);

    state.update(Message::Toolbar(ToolbarMessage::Undo));
    assert_eq!(state.current_image().width, 8);
    assert_eq!(state.current_image().height, 6);
    assert!(!state.can_undo());
}

#[test]
fn undo_restores_pixels_discarded_by_crop() {
    let mut state = editor_state(40, 30);
    let before = pixels(&state);

    sidebar(&mut state, SidebarMessage::SelectTool(EditorTool::Crop));
    drag_crop(&mut state, (5.0, 5.0), (25.0, 20.0));
    sidebar(&mut state, SidebarMessage::ApplyCrop);
    assert_eq!(state.current_image().width, 20);
    assert_eq!(state.current_image().height, 15);

    state.update(Message::Toolbar(ToolbarMessage::Undo));
    assert_eq!(state.current_image().width, 40);
    assert_eq!(state.current_image().height, 30);
    assert_eq!(pixels(&state), before);
}

#[test]
fn crop_gesture_normalizes_reverse_drag() {
    let mut state = editor_state(100, 100);

    sidebar(&mut state, SidebarMessage::SelectTool(EditorTool::Crop));
    drag_crop(&mut state, (50.0, 50.0), (10.0, 10.0));

    let region = state.crop().region.expect("region after drag");
    assert_eq!(region.x, 10.0);
    assert_eq!(region.y, 10.0);
    assert_eq!(region.width, 40.0);
    assert_eq!(region.height, 40.0);
}

#[test]
fn crop_apply_extracts_the_selected_rectangle() {
    let mut state = editor_state(100, 80);

    sidebar(&mut state, SidebarMessage::SelectTool(EditorTool::Crop));
    drag_crop(&mut state, (10.0, 10.0), (50.0, 40.0));
    let event = sidebar(&mut state, SidebarMessage::ApplyCrop);

    assert!(matches!(event, Event::None));
    assert_eq!(state.current_image().width, 40);
    assert_eq!(state.current_image().height, 30);
    assert!(!state.crop().is_active());
    assert!(state.can_undo());
}

#[test]
fn crop_without_selection_is_rejected() {
    let mut state = editor_state(100, 80);

    sidebar(&mut state, SidebarMessage::SelectTool(EditorTool::Crop));
    let event = sidebar(&mut state, SidebarMessage::ApplyCrop);

    assert!(matches!(event, Event::Notify(_)));
    assert_eq!(state.current_image().width, 100);
    assert_eq!(state.current_image().height, 80);
    assert!(!state.can_undo());
    assert!(state.crop().is_active());
}

#[test]
fn zero_area_crop_is_rejected_without_state_change() {
    let mut state = editor_state(100, 80);

    sidebar(&mut state, SidebarMessage::SelectTool(EditorTool::Crop));
    drag_crop(&mut state, (30.0, 30.0), (30.0, 30.0));
    let event = sidebar(&mut state, SidebarMessage::ApplyCrop);

    assert!(matches!(event, Event::Notify(_)));
    assert_eq!(state.current_image().width, 100);
    assert_eq!(state.current_image().height, 80);
    assert!(!state.can_undo());
}

#[test]
fn pointer_input_is_ignored_outside_crop_mode() {
    let mut state = editor_state(100, 80);

    drag_crop(&mut state, (10.0, 10.0), (50.0, 40.0));

    assert!(state.crop().region.is_none());
    assert!(!state.crop().is_active());
}

#[test]
fn leaving_crop_mode_discards_the_selection() {
    let mut state = editor_state(100, 80);

    sidebar(&mut state, SidebarMessage::SelectTool(EditorTool::Crop));
    drag_crop(&mut state, (10.0, 10.0), (50.0, 40.0));
    assert!(state.crop().region.is_some());

    // Toggling the tool off exits crop mode
    sidebar(&mut state, SidebarMessage::SelectTool(EditorTool::Crop));
    assert!(!state.crop().is_active());
    assert!(state.crop().region.is_none());
}

#[test]
fn cancel_exits_crop_mode() {
    let mut state = editor_state(100, 80);

    sidebar(&mut state, SidebarMessage::SelectTool(EditorTool::Crop));
    drag_crop(&mut state, (10.0, 10.0), (50.0, 40.0));
    sidebar(&mut state, SidebarMessage::CancelCrop);

    assert!(!state.crop().is_active());
    assert!(state.crop().region.is_none());
    assert_eq!(state.active_tool(), None);
}

#[test]
fn reset_restores_pixels_and_parameters_after_any_edits() {
    let mut state = editor_state(40, 30);
    let original = pixels(&state);

    sidebar(&mut state, SidebarMessage::BrightnessChanged(160));
    sidebar(&mut state, SidebarMessage::FlipHorizontal);
    sidebar(&mut state, SidebarMessage::SelectTool(EditorTool::Crop));
    drag_crop(&mut state, (0.0, 0.0), (20.0, 10.0));
    sidebar(&mut state, SidebarMessage::ApplyCrop);
    assert_ne!(state.current_image().width, 40);

    state.update(Message::Toolbar(ToolbarMessage::Reset));

    assert_eq!(state.current_image().width, 40);
    assert_eq!(state.current_image().height, 30);
    assert!(!state.adjustment().has_changes());
    assert_eq!(pixels(&state), original);
}

#[test]
fn resize_rejects_invalid_dimensions() {
    let mut state = editor_state(8, 6);

    sidebar(&mut state, SidebarMessage::ToggleLockAspect);
    for bad in ["0", "abc", "", "-4"] {
        sidebar(&mut state, SidebarMessage::WidthInputChanged(bad.into()));
        sidebar(&mut state, SidebarMessage::HeightInputChanged("6".into()));
        let event = sidebar(&mut state, SidebarMessage::ApplyResize);

        assert!(matches!(event, Event::Notify(_)), "input {bad:?} accepted");
        assert_eq!(state.current_image().width, 8);
        assert!(!state.can_undo());
    }
}

#[test]
fn resize_bakes_pending_adjustments() {
    let mut state = editor_state(8, 6);

    sidebar(&mut state, SidebarMessage::BrightnessChanged(150));
    assert!(state.adjustment().has_changes());

    sidebar(&mut state, SidebarMessage::ToggleLockAspect);
    sidebar(&mut state, SidebarMessage::WidthInputChanged("4".into()));
    sidebar(&mut state, SidebarMessage::HeightInputChanged("3".into()));
    sidebar(&mut state, SidebarMessage::ApplyResize);

    assert_eq!(state.current_image().width, 4);
    assert_eq!(state.current_image().height, 3);
    // The brightened pixels were baked in; the chain is back at identity
    assert!(!state.adjustment().has_changes());
}

#[test]
fn aspect_lock_derives_the_dependent_dimension() {
    let mut state = editor_state(100, 50);

    sidebar(&mut state, SidebarMessage::WidthInputChanged("40".into()));
    assert_eq!(state.resize().height_input, "20");

    sidebar(&mut state, SidebarMessage::HeightInputChanged("10".into()));
    assert_eq!(state.resize().width_input, "20");
}

#[test]
fn unlocked_inputs_change_independently() {
    let mut state = editor_state(100, 50);

    sidebar(&mut state, SidebarMessage::ToggleLockAspect);
    sidebar(&mut state, SidebarMessage::WidthInputChanged("40".into()));
    assert_eq!(state.resize().height_input, "50");
}

#[test]
fn toolbar_events_request_side_effects() {
    let mut state = editor_state(8, 6);

    let open = state.update(Message::Toolbar(ToolbarMessage::OpenImage));
    assert!(matches!(open, Event::OpenRequested));

    let export = state.update(Message::Toolbar(ToolbarMessage::Export));
    assert!(matches!(export, Event::ExportRequested));
}

#[test]
fn export_does_not_mutate_state() {
    let mut state = editor_state(8, 6);
    let before = pixels(&state);

    state.update(Message::Toolbar(ToolbarMessage::Export));

    assert_eq!(pixels(&state), before);
    assert!(!state.can_undo());
}
