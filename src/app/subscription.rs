// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Both subscriptions are only active while something on screen needs them.

use super::Message;
use crate::app::config::LOADER_TICK_MS;
use crate::ui::page;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, Subscription};
use std::time::Duration;

/// Closes the modal when Escape is pressed.
pub fn create_event_subscription(modal_open: bool) -> Subscription<Message> {
    if !modal_open {
        return Subscription::none();
    }

    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: Key::Named(Named::Escape),
            ..
        }) => Some(Message::Page(page::Message::CloseModal)),
        _ => None,
    })
}

/// Drives the loader animations on pages that show them.
pub fn create_tick_subscription(animating: bool) -> Subscription<Message> {
    if animating {
        time::every(Duration::from_millis(LOADER_TICK_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
