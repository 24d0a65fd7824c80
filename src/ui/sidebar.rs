// SPDX-License-Identifier: MPL-2.0
//! Sidebar with the two-level section menu.
//!
//! Parent entries are opened when one of their children is active. Clicking a
//! parent overrides that until the selection moves into or out of it, so the
//! active child is never left hidden. Clicking a parent never changes the
//! selection.

use crate::catalog::MenuTree;
use crate::navigation::{EntryView, NavigationView};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::glyphs;
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::font::Weight;
use iced::widget::{button, Column, Container, Row, Space, Text};
use iced::{alignment::Vertical, Element, Font, Length};
use std::collections::HashMap;

pub const TITLE: &str = "Style Guide";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct State {
    /// Open state chosen by the user, per parent label.
    opened: HashMap<String, bool>,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a parent's children are shown.
    pub fn is_open(&self, entry: &EntryView<'_>) -> bool {
        self.opened
            .get(entry.label)
            .copied()
            .unwrap_or(entry.expanded)
    }

    /// Drops the user's choice for the parents the selection left or entered.
    pub fn follow_selection(&mut self, menu: &MenuTree, previous: &str, current: &str) {
        let left = menu.parent_of(previous).map(|entry| entry.label.as_str());
        let entered = menu.parent_of(current).map(|entry| entry.label.as_str());
        if left == entered {
            return;
        }

        for parent in [left, entered].into_iter().flatten() {
            self.opened.remove(parent);
        }
    }
}

/// Contextual data needed to render the sidebar.
pub struct ViewContext<'a> {
    pub navigation: NavigationView<'a>,
    pub state: &'a State,
    pub theme_mode: ThemeMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Select(String),
    /// Parent clicked while showing (`true`) or hiding its children.
    ToggleOpen { label: String, open: bool },
    CycleTheme,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Select(String),
    CycleTheme,
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::Select(label) => Event::Select(label),
        Message::ToggleOpen { label, open } => {
            state.opened.insert(label, !open);
            Event::None
        }
        Message::CycleTheme => Event::CycleTheme,
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(TITLE).size(typography::TITLE_SM).font(Font {
        weight: Weight::Bold,
        ..Font::DEFAULT
    });

    let entries = ctx
        .navigation
        .entries
        .into_iter()
        .fold(Column::new().spacing(spacing::XXXS), |column, entry| {
            push_entry(column, entry, ctx.state)
        });

    let theme_button = button(
        Text::new(format!("Theme: {}", ctx.theme_mode)).size(typography::BODY_SM),
    )
    .width(Length::Fill)
    .padding([spacing::XS, spacing::SM])
    .style(styles::button::nav_item(false))
    .on_press(Message::CycleTheme);

    Container::new(
        Column::new()
            .spacing(spacing::MD)
            .height(Length::Fill)
            .push(title)
            .push(entries)
            .push(Space::new().height(Length::Fill))
            .push(theme_button),
    )
    .width(Length::Fixed(sizing::SIDEBAR_WIDTH))
    .height(Length::Fill)
    .padding(spacing::MD)
    .style(styles::container::sidebar)
    .into()
}

fn push_entry<'a>(
    column: Column<'a, Message>,
    entry: EntryView<'a>,
    state: &State,
) -> Column<'a, Message> {
    if entry.children.is_empty() {
        return column.push(nav_button(entry.label, entry.active, 0.0));
    }

    let open = state.is_open(&entry);
    let header = button(
        Row::new()
            .align_y(Vertical::Center)
            .push(Text::new(entry.label).size(typography::BODY).width(Length::Fill))
            .push(glyphs::sized(
                if open { "chevron-down" } else { "chevron-right" },
                sizing::ICON_SM,
            )),
    )
    .width(Length::Fill)
    .padding([spacing::XS, spacing::SM])
    .style(styles::button::nav_item(false))
    .on_press(Message::ToggleOpen {
        label: entry.label.to_string(),
        open,
    });

    let column = column.push(header);
    if !open {
        return column;
    }

    entry.children.into_iter().fold(column, |column, child| {
        column.push(nav_button(child.label, child.active, spacing::MD))
    })
}

fn nav_button<'a>(label: &'a str, active: bool, indent: f32) -> Element<'a, Message> {
    Row::new()
        .push(Space::new().width(Length::Fixed(indent)))
        .push(
            button(Text::new(label).size(typography::BODY))
                .width(Length::Fill)
                .padding([spacing::XS, spacing::SM])
                .style(styles::button::nav_item(active))
                .on_press(Message::Select(label.to_string())),
        )
        .into()
}
