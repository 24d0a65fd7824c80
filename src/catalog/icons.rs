// SPDX-License-Identifier: MPL-2.0
//! Icon catalog and the embedded glyph assets.

use super::CatalogError;
use rust_embed::RustEmbed;
use serde::Deserialize;
use std::collections::HashSet;

/// SVG glyphs bundled from `assets/icons/`, addressed by file stem.
#[derive(RustEmbed)]
#[folder = "assets/icons/"]
pub struct GlyphAssets;

impl GlyphAssets {
    /// Raw SVG bytes of a glyph.
    pub fn svg(glyph: &str) -> Option<rust_embed::EmbeddedFile> {
        Self::get(&format!("{glyph}.svg"))
    }

    pub fn contains(glyph: &str) -> bool {
        Self::svg(glyph).is_some()
    }
}

/// One entry of the icon directory.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IconRecord {
    /// Identifier copied to the clipboard.
    pub name: String,
    /// Glyph asset name.
    pub glyph: String,
    pub use_case: String,
}

impl IconRecord {
    pub fn new(
        name: impl Into<String>,
        glyph: impl Into<String>,
        use_case: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            glyph: glyph.into(),
            use_case: use_case.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawIcons {
    icons: Vec<IconRecord>,
}

impl RawIcons {
    pub(crate) fn into_catalog(self) -> Result<IconCatalog, CatalogError> {
        IconCatalog::new(self.icons)
    }
}

/// Ordered, validated icon records. Order is the stable default only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IconCatalog {
    records: Vec<IconRecord>,
}

impl IconCatalog {
    pub fn new(records: Vec<IconRecord>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for record in &records {
            if !is_kebab_case(&record.name) {
                return Err(CatalogError::InvalidIconName(record.name.clone()));
            }
            if !seen.insert(record.name.as_str()) {
                return Err(CatalogError::DuplicateIcon(record.name.clone()));
            }
        }
        Ok(Self { records })
    }

    pub fn records(&self) -> &[IconRecord] {
        &self.records
    }

    pub fn get(&self, name: &str) -> Option<&IconRecord> {
        self.records.iter().find(|record| record.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn is_kebab_case(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with('-')
        && !name.ends_with('-')
        && !name.contains("--")
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}
