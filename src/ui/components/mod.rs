// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components.

pub mod accordion;
pub mod demo;
pub mod example;
pub mod modal;
pub mod rich_text;
pub mod table;
pub mod wip_banner;
