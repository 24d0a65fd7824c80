// SPDX-License-Identifier: MPL-2.0
//! Interaction state shared by the colors and guideline pages.
//!
//! Accordion sections start open and the modal starts closed. The state is
//! reset whenever the active section changes.

use std::collections::HashSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct State {
    /// Keys of sections the user collapsed.
    collapsed: HashSet<String>,
    modal_open: bool,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self, key: &str) -> bool {
        !self.collapsed.contains(key)
    }

    pub fn toggle(&mut self, key: &str) {
        if !self.collapsed.remove(key) {
            self.collapsed.insert(key.to_string());
        }
    }

    pub fn modal_open(&self) -> bool {
        self.modal_open
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Messages emitted by page content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    ToggleSection(String),
    OpenModal,
    CloseModal,
    /// A link inside guideline text was clicked.
    FollowLink(String),
    /// A demo widget was clicked; demos have no behavior.
    DemoPressed,
    /// Text typed into a demo input.
    DemoInput(String),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Navigate(String),
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::ToggleSection(key) => {
            state.toggle(&key);
            Event::None
        }
        Message::OpenModal => {
            state.modal_open = true;
            Event::None
        }
        Message::CloseModal => {
            state.modal_open = false;
            Event::None
        }
        Message::FollowLink(label) => Event::Navigate(label),
        Message::DemoPressed | Message::DemoInput(_) => Event::None,
    }
}
