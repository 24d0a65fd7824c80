// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The window is split into the sidebar and a scrollable content column
//! showing the active section's title and panel. An open modal is layered
//! over the whole window.

use super::Message;
use crate::catalog::{Catalog, Panel};
use crate::icon_directory::IconDirectoryState;
use crate::navigation::NavigationState;
use crate::ui::components::modal;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::page;
use crate::ui::theming::ThemeMode;
use crate::ui::{colors, guidelines, icon_directory, sidebar, styles};
use iced::font::Weight;
use iced::widget::{scrollable, Column, Container, Row, Space, Text};
use iced::{Element, Font, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub catalog: &'a Catalog,
    pub navigation: &'a NavigationState,
    pub sidebar: &'a sidebar::State,
    pub directory: &'a IconDirectoryState,
    pub page: &'a page::State,
    pub theme_mode: ThemeMode,
    /// Loader animation phase in seconds.
    pub phase: f32,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let sidebar_view = sidebar::view(sidebar::ViewContext {
        navigation: ctx.navigation.projection(ctx.catalog.menu()),
        state: ctx.sidebar,
        theme_mode: ctx.theme_mode,
    })
    .map(Message::Sidebar);

    let active = ctx.navigation.active_label();
    let title = Text::new(active).size(typography::TITLE_LG).font(Font {
        weight: Weight::Bold,
        ..Font::DEFAULT
    });

    let content = Column::new()
        .spacing(spacing::XL)
        .width(Length::Fill)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(title)
        .push(panel(&ctx, active));

    let main = Container::new(scrollable(
        Container::new(content)
            .padding([spacing::XXL, spacing::LG])
            .center_x(Length::Fill),
    ))
    .width(Length::Fill)
    .height(Length::Fill)
    .style(styles::container::page);

    let base: Element<'_, Message> = Row::new()
        .push(sidebar_view)
        .push(main)
        .width(Length::Fill)
        .height(Length::Fill)
        .into();

    match ctx
        .catalog
        .guidelines()
        .page(active)
        .and_then(|guide| guidelines::open_dialog(guide, ctx.page))
    {
        Some(dialog) => modal::overlay(
            base,
            dialog.map(Message::Page),
            Message::Page(page::Message::CloseModal),
        ),
        None => base,
    }
}

fn panel<'a>(ctx: &ViewContext<'a>, active: &'a str) -> Element<'a, Message> {
    match ctx.catalog.panel(active) {
        Some(Panel::Colors) => colors::view(colors::ViewContext {
            colors: ctx.catalog.colors(),
            state: ctx.page,
            phase: ctx.phase,
        })
        .map(Message::Page),
        Some(Panel::Icons) => {
            icon_directory::view(ctx.directory, ctx.catalog.icons()).map(Message::Directory)
        }
        Some(Panel::Guideline(page)) => guidelines::view(guidelines::ViewContext {
            page,
            colors: ctx.catalog.colors(),
            state: ctx.page,
            phase: ctx.phase,
        })
        .map(Message::Page),
        None => Space::new().into(),
    }
}
