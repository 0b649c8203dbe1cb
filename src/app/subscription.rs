// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Routes native events (keyboard, window) to the editor and drives the
//! notification auto-dismiss timer.

use super::{Message, Screen};
use iced::{event, time, Subscription};
use std::time::Duration;

/// Creates the application's combined subscription.
pub fn create(screen: Screen, has_notifications: bool) -> Subscription<Message> {
    Subscription::batch([
        create_event_subscription(screen),
        create_tick_subscription(has_notifications),
    ])
}

/// Routes native events based on the current screen.
///
/// - File drops always start a load.
/// - Window resizes keep the fit target current.
/// - Keyboard events reach the editor only while it is active.
fn create_event_subscription(screen: Screen) -> Subscription<Message> {
    if screen == Screen::Editor {
        event::listen_with(|event, status, window_id| {
            if let event::Event::Window(iced::window::Event::FileDropped(path)) = &event {
                return Some(Message::FileDropped(path.clone()));
            }

            if let event::Event::Window(iced::window::Event::Resized(size)) = &event {
                return Some(Message::WindowResized(*size));
            }

            if let event::Event::Keyboard(..) = &event {
                match status {
                    event::Status::Ignored => Some(Message::Editor(
                        crate::ui::editor::Message::RawEvent {
                            window: window_id,
                            event: event.clone(),
                        },
                    )),
                    event::Status::Captured => None,
                }
            } else {
                None
            }
        })
    } else {
        event::listen_with(|event, _status, _window_id| {
            if let event::Event::Window(iced::window::Event::FileDropped(path)) = &event {
                return Some(Message::FileDropped(path.clone()));
            }

            if let event::Event::Window(iced::window::Event::Resized(size)) = &event {
                return Some(Message::WindowResized(*size));
            }

            None
        })
    }
}

/// Creates a periodic tick subscription for notification auto-dismiss.
fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
