// SPDX-License-Identifier: MPL-2.0
//! Configuration persistence logic.
//!
//! Only the theme mode is changed from inside the application. The file is
//! reloaded before saving so command-line overrides never end up on disk.

use super::Message;
use crate::app::config;
use crate::ui::theming::ThemeMode;
use iced::Task;

/// Persists the theme mode to `settings.toml`.
///
/// Guarded during tests to keep isolation: unit tests exercise the logic by
/// calling [`apply_theme_mode`] directly.
pub fn persist_theme_mode(theme_mode: ThemeMode) -> Task<Message> {
    if cfg!(test) {
        return Task::none();
    }

    let (mut cfg, warning) = config::load();
    if let Some(warning) = warning {
        tracing::warn!("{warning}");
    }
    apply_theme_mode(&mut cfg, theme_mode);

    if let Err(error) = config::save(&cfg) {
        tracing::warn!(%error, "failed to save config");
    }

    Task::none()
}

/// Writes `theme_mode` into the loaded configuration.
pub fn apply_theme_mode(cfg: &mut config::Config, theme_mode: ThemeMode) {
    cfg.general.theme_mode = theme_mode;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_mode_is_the_only_change() {
        let mut cfg = config::Config::default();
        cfg.icons.copy_ack_ms = Some(900);
        apply_theme_mode(&mut cfg, ThemeMode::Dark);

        assert_eq!(cfg.general.theme_mode, ThemeMode::Dark);
        assert_eq!(cfg.icons.copy_ack_ms, Some(900));
    }

    #[test]
    fn persisting_is_disabled_in_tests() {
        // Would otherwise write to the user's config directory.
        let _ = persist_theme_mode(ThemeMode::Light);
    }
}
