// SPDX-License-Identifier: MPL-2.0
//! `stylebook` is a design-system reference built with the Iced GUI framework.
//!
//! It shows the color palette, a searchable icon directory with copy to
//! clipboard, and usage rules for components such as buttons, badges and
//! loaders. All content comes from a validated static catalog.

pub mod app;
pub mod catalog;
pub mod error;
pub mod icon;
pub mod icon_directory;
pub mod navigation;
pub mod ui;
