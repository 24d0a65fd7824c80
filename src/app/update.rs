// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Each handler receives an [`UpdateContext`] borrowing the parts of the
//! application state it may touch and returns the follow-up task.

use super::{persistence, Message};
use crate::catalog::Catalog;
use crate::icon_directory::{CopyTicket, IconDirectoryState};
use crate::navigation::NavigationState;
use crate::ui::icon_directory::{self, Event as DirectoryEvent};
use crate::ui::page::{self, Event as PageEvent};
use crate::ui::sidebar::{self, Event as SidebarEvent};
use crate::ui::theming::ThemeMode;
use iced::Task;
use std::time::Instant;

/// Mutable view of the application state used by the handlers.
pub struct UpdateContext<'a> {
    pub catalog: &'a Catalog,
    pub navigation: &'a mut NavigationState,
    pub sidebar: &'a mut sidebar::State,
    pub directory: &'a mut IconDirectoryState,
    pub page: &'a mut page::State,
    pub theme_mode: &'a mut ThemeMode,
    pub now: &'a mut Instant,
}

pub fn handle_sidebar_message(
    ctx: &mut UpdateContext<'_>,
    message: sidebar::Message,
) -> Task<Message> {
    match sidebar::update(ctx.sidebar, message) {
        SidebarEvent::None => Task::none(),
        SidebarEvent::Select(label) => {
            select_section(ctx, &label);
            Task::none()
        }
        SidebarEvent::CycleTheme => {
            *ctx.theme_mode = ctx.theme_mode.next();
            tracing::info!(theme = %ctx.theme_mode, "theme mode changed");
            persistence::persist_theme_mode(*ctx.theme_mode)
        }
    }
}

pub fn handle_directory_message(
    ctx: &mut UpdateContext<'_>,
    message: icon_directory::Message,
) -> Task<Message> {
    match icon_directory::update(ctx.directory, ctx.catalog.icons(), message) {
        DirectoryEvent::None => Task::none(),
        DirectoryEvent::Copied(ticket) => copy_to_clipboard(ticket),
    }
}

pub fn handle_page_message(ctx: &mut UpdateContext<'_>, message: page::Message) -> Task<Message> {
    match page::update(ctx.page, message) {
        PageEvent::None => Task::none(),
        PageEvent::Navigate(label) => {
            select_section(ctx, &label);
            Task::none()
        }
    }
}

pub fn handle_tick(ctx: &mut UpdateContext<'_>, instant: Instant) -> Task<Message> {
    *ctx.now = instant;
    Task::none()
}

/// Switches the active section. Page interaction state does not carry over.
fn select_section(ctx: &mut UpdateContext<'_>, label: &str) {
    let previous = ctx.navigation.active_label().to_string();
    if ctx.navigation.select(ctx.catalog.menu(), label) {
        ctx.page.reset();
        ctx.sidebar.follow_selection(ctx.catalog.menu(), &previous, label);
        tracing::debug!(section = label, "section selected");
    }
}

/// Writes the icon name to the clipboard and schedules the ticket's expiry.
fn copy_to_clipboard(ticket: CopyTicket) -> Task<Message> {
    let name = ticket.name().to_string();
    let expire = Task::perform(expiry(ticket), |ticket| {
        Message::Directory(icon_directory::Message::CopyExpired(ticket))
    });

    Task::batch([iced::clipboard::write(name), expire])
}

/// Resolves with the ticket once its delay has elapsed.
async fn expiry(ticket: CopyTicket) -> CopyTicket {
    tokio::time::sleep(ticket.delay()).await;
    ticket
}
