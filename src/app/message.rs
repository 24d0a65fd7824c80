// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::theming::ThemeMode;
use crate::ui::{icon_directory, page, sidebar};
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Sidebar(sidebar::Message),
    Directory(icon_directory::Message),
    Page(page::Message),
    /// Animation frame for the loader demos.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
///
/// Every flag takes precedence over the matching `settings.toml` entry.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    pub theme: Option<ThemeMode>,
    /// Menu label to open at startup.
    pub section: Option<String>,
    /// Directory with catalog files replacing the bundled ones.
    pub catalog_dir: Option<PathBuf>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `STYLEBOOK_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    pub copy_ack_ms: Option<u64>,
}
