// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! This module handles routing of native events (keyboard, window) to the
//! appropriate components based on the current application state.

use super::Message;
use crate::ui::lightbox;
use iced::{event, keyboard, time, Subscription};

/// Creates the event subscription for window and keyboard events.
///
/// File drops are accepted in every state. Keyboard navigation is routed to
/// the lightbox only while it is open; with the lightbox closed no keyboard
/// events are consumed, so text inputs keep full control of typing.
pub fn create_event_subscription(lightbox_open: bool) -> Subscription<Message> {
    if lightbox_open {
        event::listen_with(|event, status, _window_id| {
            if let event::Event::Window(iced::window::Event::FileDropped(path)) = &event {
                return Some(Message::FileDropped(path.clone()));
            }

            if let event::Event::Keyboard(keyboard_event) = &event {
                return match status {
                    event::Status::Captured => None,
                    event::Status::Ignored => match keyboard_event {
                        keyboard::Event::KeyPressed {
                            key: keyboard::Key::Named(keyboard::key::Named::Escape),
                            ..
                        } => Some(Message::Lightbox(lightbox::Message::Close)),
                        keyboard::Event::KeyPressed {
                            key: keyboard::Key::Named(keyboard::key::Named::ArrowLeft),
                            ..
                        } => Some(Message::Lightbox(lightbox::Message::Previous)),
                        keyboard::Event::KeyPressed {
                            key: keyboard::Key::Named(keyboard::key::Named::ArrowRight),
                            ..
                        } => Some(Message::Lightbox(lightbox::Message::Next)),
                        _ => None,
                    },
                };
            }

            None
        })
    } else {
        event::listen_with(|event, _status, _window_id| {
            if let event::Event::Window(iced::window::Event::FileDropped(path)) = &event {
                return Some(Message::FileDropped(path.clone()));
            }

            None
        })
    }
}

/// Creates a periodic tick subscription for notification auto-dismiss.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(std::time::Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
