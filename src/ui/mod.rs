// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Panels
//!
//! - [`colors`] - Usage table, per-color guidance and decorative scales
//! - [`icon_directory`] - Searchable icon table with copy to clipboard
//! - [`guidelines`] - Component usage pages built from catalog blocks
//! - [`sidebar`] - Two-level section menu and theme switch
//!
//! # Shared Infrastructure
//!
//! - [`page`] - Accordion and modal state shared by content pages
//! - [`components`] - Reusable UI components (accordion, tables, modal, demos)
//! - [`widgets`] - Custom Iced widgets (animated loaders)
//! - [`styles`] - Centralized styling (buttons, containers, variants)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`glyphs`] - Bundled SVG glyph handles

pub mod colors;
pub mod components;
pub mod design_tokens;
pub mod glyphs;
pub mod guidelines;
pub mod icon_directory;
pub mod page;
pub mod sidebar;
pub mod styles;
pub mod theming;
pub mod widgets;
