// SPDX-License-Identifier: MPL-2.0
//! Custom canvas widgets.

pub mod loaders;

pub use loaders::Loader;
