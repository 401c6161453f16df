// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Routes native events to messages: dropped files open as sections files
//! and F5 reloads the current one.

use super::Message;
use iced::keyboard::{self, key};
use iced::{event, window, Event, Subscription};

/// Maps one native event to an application message.
fn route_event(event: Event, status: event::Status) -> Option<Message> {
    match event {
        Event::Window(window::Event::FileDropped(path)) => Some(Message::FileDropped(path)),
        Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(key::Named::F5),
            ..
        }) if status == event::Status::Ignored => Some(Message::Reload),
        _ => None,
    }
}

pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| route_event(event, status))
}
