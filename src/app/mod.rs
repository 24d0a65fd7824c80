// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the sidebar and the
//! content panels.
//!
//! The `App` struct wires together the catalog, the navigation and icon
//! directory state machines and the per-page interaction state, and
//! translates messages into side effects like clipboard writes, delayed
//! copy expiry or config persistence.

pub mod config;
mod message;
pub mod paths;
mod persistence;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::catalog::{Catalog, Panel};
use crate::error::Result;
use crate::icon_directory::{CopyDelay, IconDirectoryState};
use crate::navigation::NavigationState;
use crate::ui::theming::ThemeMode;
use crate::ui::{guidelines, page, sidebar};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

pub const APP_NAME: &str = "Stylebook";

/// Root Iced application state.
#[derive(Clone)]
pub struct App {
    catalog: Catalog,
    navigation: NavigationState,
    sidebar: sidebar::State,
    directory: IconDirectoryState,
    /// Accordion and modal state of the active page.
    page: page::State,
    theme_mode: ThemeMode,
    /// Start of the loader animation.
    started: Instant,
    /// Last animation tick.
    now: Instant,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("active", &self.navigation.active_label())
            .field("theme_mode", &self.theme_mode)
            .field("copied", &self.directory.copied_name())
            .finish()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    let icon = crate::icon::load_window_icon();

    window::Settings {
        size: iced::Size::new(config::DEFAULT_WINDOW_WIDTH, config::DEFAULT_WINDOW_HEIGHT),
        min_size: Some(iced::Size::new(
            config::MIN_WINDOW_WIDTH,
            config::MIN_WINDOW_HEIGHT,
        )),
        icon,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
///
/// Settings and the catalog are loaded before the window opens so a broken
/// catalog is reported on the command line instead of as an empty window.
pub fn run(flags: Flags) -> Result<()> {
    paths::init_cli_overrides(flags.config_dir.clone());

    let (config, warning) = config::load();
    if let Some(warning) = warning {
        tracing::warn!("{warning}");
    }

    let catalog_dir = flags
        .catalog_dir
        .clone()
        .or_else(|| config.catalog.dir.clone());
    let catalog = Catalog::load(catalog_dir.as_deref())?;
    tracing::info!(
        sections = catalog.menu().labels().count(),
        icons = catalog.icons().len(),
        "catalog loaded"
    );

    let app = App::new(catalog, &config, &flags);
    tracing::debug!(
        section = app.navigation.active_label(),
        copy_ack_ms = app.directory.delay().value(),
        "initial state"
    );

    // iced 0.14 requires the boot function to be `Fn`
    let boot = move || (app.clone(), Task::none());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()?;

    Ok(())
}

impl App {
    /// Initial state from the loaded catalog and settings. Command-line
    /// flags win over `settings.toml`.
    pub fn new(catalog: Catalog, config: &config::Config, flags: &Flags) -> Self {
        let navigation = match flags
            .section
            .as_deref()
            .or(config.general.default_section.as_deref())
        {
            Some(label) => NavigationState::with_initial(catalog.menu(), label),
            None => NavigationState::new(catalog.menu()),
        };

        let delay = flags
            .copy_ack_ms
            .map(CopyDelay::new)
            .unwrap_or_else(|| config.icons.copy_delay());

        let now = Instant::now();

        Self {
            catalog,
            navigation,
            sidebar: sidebar::State::new(),
            directory: IconDirectoryState::new(delay),
            page: page::State::new(),
            theme_mode: flags.theme.unwrap_or(config.general.theme_mode),
            started: now,
            now,
        }
    }

    fn title(&self) -> String {
        format!("{} - {APP_NAME}", self.navigation.active_label())
    }

    fn theme(&self) -> Theme {
        self.theme_mode.to_iced()
    }

    /// Loader animation phase in seconds.
    fn phase(&self) -> f32 {
        self.now.duration_since(self.started).as_secs_f32()
    }

    /// Whether the active page shows an animated loader.
    fn animating(&self) -> bool {
        match self.catalog.panel(self.navigation.active_label()) {
            Some(Panel::Guideline(page)) => guidelines::animates(page),
            _ => false,
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription(self.page.modal_open());
        let tick_sub = subscription::create_tick_subscription(self.animating());

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            catalog: &self.catalog,
            navigation: &mut self.navigation,
            sidebar: &mut self.sidebar,
            directory: &mut self.directory,
            page: &mut self.page,
            theme_mode: &mut self.theme_mode,
            now: &mut self.now,
        };

        match message {
            Message::Sidebar(message) => update::handle_sidebar_message(&mut ctx, message),
            Message::Directory(message) => update::handle_directory_message(&mut ctx, message),
            Message::Page(message) => update::handle_page_message(&mut ctx, message),
            Message::Tick(instant) => update::handle_tick(&mut ctx, instant),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            catalog: &self.catalog,
            navigation: &self.navigation,
            sidebar: &self.sidebar,
            directory: &self.directory,
            page: &self.page,
            theme_mode: self.theme_mode,
            phase: self.phase(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::{icon_directory, sidebar};
    use std::time::Duration;

    fn app_with(flags: Flags) -> App {
        let catalog = Catalog::embedded().expect("embedded catalog is valid");
        App::new(catalog, &config::Config::default(), &flags)
    }

    fn app() -> App {
        app_with(Flags::default())
    }

    fn select(app: &mut App, label: &str) {
        let _ = app.update(Message::Sidebar(sidebar::Message::Select(label.into())));
    }

    #[test]
    fn starts_on_catalog_default() {
        let app = app();
        assert_eq!(app.navigation.active_label(), "Colors");
        assert_eq!(app.title(), "Colors - Stylebook");
    }

    #[test]
    fn flags_override_settings() {
        let mut cfg = config::Config::default();
        cfg.general.default_section = Some("Icons".into());
        cfg.general.theme_mode = ThemeMode::Dark;
        cfg.icons.copy_ack_ms = Some(3000);

        let flags = Flags {
            theme: Some(ThemeMode::Light),
            section: Some("Buttons".into()),
            copy_ack_ms: Some(500),
            ..Flags::default()
        };
        let catalog = Catalog::embedded().expect("embedded catalog is valid");
        let app = App::new(catalog, &cfg, &flags);

        assert_eq!(app.navigation.active_label(), "Buttons");
        assert_eq!(app.theme_mode, ThemeMode::Light);
        assert_eq!(app.directory.delay().value(), 500);
    }

    #[test]
    fn settings_apply_without_flags() {
        let mut cfg = config::Config::default();
        cfg.general.default_section = Some("Icons".into());
        cfg.icons.copy_ack_ms = Some(3000);

        let catalog = Catalog::embedded().expect("embedded catalog is valid");
        let app = App::new(catalog, &cfg, &Flags::default());

        assert_eq!(app.navigation.active_label(), "Icons");
        assert_eq!(app.directory.delay().value(), 3000);
    }

    #[test]
    fn unknown_startup_section_falls_back_to_default() {
        let app = app_with(Flags {
            section: Some("Typography".into()),
            ..Flags::default()
        });
        assert_eq!(app.navigation.active_label(), "Colors");
    }

    #[test]
    fn selecting_a_section_resets_page_state() {
        let mut app = app();
        select(&mut app, "Modal");
        let _ = app.update(Message::Page(page::Message::OpenModal));
        assert!(app.page.modal_open());

        select(&mut app, "Badge");
        assert_eq!(app.navigation.active_label(), "Badge");
        assert!(!app.page.modal_open());
    }

    #[test]
    fn reselecting_the_active_section_keeps_page_state() {
        let mut app = app();
        select(&mut app, "Modal");
        let _ = app.update(Message::Page(page::Message::OpenModal));
        select(&mut app, "Modal");
        assert!(app.page.modal_open());
    }

    #[test]
    fn unknown_selection_is_ignored() {
        let mut app = app();
        select(&mut app, "Typography");
        assert_eq!(app.navigation.active_label(), "Colors");
    }

    #[test]
    fn links_navigate() {
        let mut app = app();
        select(&mut app, "Buttons");
        let _ = app.update(Message::Page(page::Message::FollowLink("Icons".into())));
        assert_eq!(app.navigation.active_label(), "Icons");
    }

    #[test]
    fn toggling_a_parent_does_not_select() {
        let mut app = app();
        let _ = app.update(Message::Sidebar(sidebar::Message::ToggleOpen {
            label: "Components".into(),
            open: false,
        }));
        assert_eq!(app.navigation.active_label(), "Colors");
    }

    fn components_open(app: &App) -> bool {
        app.navigation
            .projection(app.catalog.menu())
            .entries
            .iter()
            .find(|entry| entry.label == "Components")
            .is_some_and(|entry| app.sidebar.is_open(entry))
    }

    #[test]
    fn selecting_a_child_reopens_a_collapsed_parent() {
        let mut app = app();
        let _ = app.update(Message::Sidebar(sidebar::Message::ToggleOpen {
            label: "Components".into(),
            open: true,
        }));
        assert!(!components_open(&app));

        select(&mut app, "Badge");
        assert!(components_open(&app));
    }

    #[test]
    fn parent_section_renders_no_panel() {
        let app = app_with(Flags {
            section: Some("Components".into()),
            ..Flags::default()
        });
        assert_eq!(app.navigation.active_label(), "Components");
        assert!(app.catalog.panel("Components").is_none());
        let _ = app.view();
    }

    #[test]
    fn theme_cycles_through_modes() {
        let mut app = app_with(Flags {
            theme: Some(ThemeMode::Light),
            ..Flags::default()
        });
        let _ = app.update(Message::Sidebar(sidebar::Message::CycleTheme));
        assert_eq!(app.theme_mode, ThemeMode::Dark);
        assert_eq!(app.theme(), Theme::Dark);
    }

    #[test]
    fn copy_message_shows_acknowledgment() {
        let mut app = app();
        select(&mut app, "Icons");
        let _ = app.update(Message::Directory(icon_directory::Message::Copy(
            "trash".into(),
        )));
        assert_eq!(app.directory.copied_name(), Some("trash"));
    }

    #[test]
    fn expiry_clears_acknowledgment() {
        let mut app = app();
        let ticket = app
            .directory
            .copy(app.catalog.icons(), "trash")
            .expect("trash is listed");
        let _ = app.update(Message::Directory(icon_directory::Message::CopyExpired(
            ticket,
        )));
        assert_eq!(app.directory.copied_name(), None);
    }

    #[test]
    fn stale_expiry_keeps_newer_acknowledgment() {
        let mut app = app();
        let first = app
            .directory
            .copy(app.catalog.icons(), "trash")
            .expect("trash is listed");
        let _ = app.update(Message::Directory(icon_directory::Message::Copy(
            "bell".into(),
        )));

        let _ = app.update(Message::Directory(icon_directory::Message::CopyExpired(
            first,
        )));
        assert_eq!(app.directory.copied_name(), Some("bell"));
    }

    #[test]
    fn loader_page_animates() {
        let mut app = app();
        assert!(!app.animating());
        select(&mut app, "Loader");
        assert!(app.animating());
    }

    #[test]
    fn tick_advances_phase() {
        let mut app = app();
        let later = app.started + Duration::from_millis(600);
        let _ = app.update(Message::Tick(later));
        assert!((app.phase() - 0.6).abs() < 1e-3);
    }

    #[test]
    fn escape_message_closes_modal() {
        let mut app = app();
        select(&mut app, "Modal");
        let _ = app.update(Message::Page(page::Message::OpenModal));
        let _ = app.update(Message::Page(page::Message::CloseModal));
        assert!(!app.page.modal_open());
    }

    #[test]
    fn debug_output_names_active_section() {
        let app = app();
        assert!(format!("{app:?}").contains("Colors"));
    }
}
