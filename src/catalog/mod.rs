// SPDX-License-Identifier: MPL-2.0
//! Static documentation content.
//!
//! The catalog bundles everything the reference pages display: the sidebar
//! menu tree, the color tokens and their guidance, the icon catalog and the
//! component guideline pages. The TOML sources live under `assets/catalog/`
//! and are embedded at compile time. A directory override can replace
//! individual files; any file missing from it falls back to the embedded copy.
//!
//! The catalog is validated once by [`Catalog::load`] and is read-only
//! afterwards. Cross-file references (menu labels to panels, links between
//! pages, glyph and color names used by demos) are checked there so that the
//! views never have to handle a dangling reference.

pub mod colors;
pub mod guidelines;
pub mod icons;
pub mod menu;

pub use colors::{ColorCatalog, ColorScale, ColorUsage, DecorativeGuide, SwatchGuide, SHADES};
pub use guidelines::{
    AccordionSection, BadgeDemo, Block, ButtonDemo, Demo, Example, ExampleKind, GuidelineCatalog,
    GuidelinePage, LoaderKind, Size, Span, Variant,
};
pub use icons::{GlyphAssets, IconCatalog, IconRecord};
pub use menu::{BuiltinPanel, MenuEntry, MenuTree};

use rust_embed::RustEmbed;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use thiserror::Error;

const MENU_FILE: &str = "menu.toml";
const COLORS_FILE: &str = "colors.toml";
const ICONS_FILE: &str = "icons.toml";
const GUIDELINES_FILE: &str = "guidelines.toml";

#[derive(RustEmbed)]
#[folder = "assets/catalog/"]
struct CatalogAssets;

/// Problems detected while reading or validating static content.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("duplicate menu label '{0}'")]
    DuplicateLabel(String),

    #[error("menu labels must not be empty")]
    EmptyLabel,

    #[error("menu has no entries")]
    EmptyMenu,

    #[error("default section '{0}' is not a menu label")]
    UnknownDefault(String),

    #[error("duplicate icon name '{0}'")]
    DuplicateIcon(String),

    #[error("icon name '{0}' is not lowercase kebab-case")]
    InvalidIconName(String),

    #[error("glyph '{0}' has no SVG asset")]
    MissingGlyph(String),

    #[error("color scale '{name}' has {count} shades, expected 10")]
    ScaleLength { name: String, count: usize },

    #[error("invalid hex color '{0}'")]
    InvalidColor(String),

    #[error("unknown color '{0}'")]
    UnknownColor(String),

    #[error("no panel registered for menu label '{0}'")]
    MissingPanel(String),

    #[error("guideline page '{0}' is not reachable from the menu")]
    OrphanPage(String),

    #[error("duplicate guideline page '{0}'")]
    DuplicatePage(String),

    #[error("link target '{0}' is not a menu label")]
    UnknownLink(String),

    #[error("catalog file '{0}' not found")]
    MissingFile(String),

    #[error("failed to read {file}: {message}")]
    Read { file: String, message: String },

    #[error("failed to parse {file}: {message}")]
    Parse { file: String, message: String },
}

/// The content panel registered for a menu label.
#[derive(Debug, Clone, Copy)]
pub enum Panel<'a> {
    Colors,
    Icons,
    Guideline(&'a GuidelinePage),
}

/// All static content, validated.
#[derive(Debug, Clone)]
pub struct Catalog {
    menu: MenuTree,
    colors: ColorCatalog,
    icons: IconCatalog,
    guidelines: GuidelineCatalog,
}

impl Catalog {
    /// Loads the catalog embedded in the binary.
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::load(None)
    }

    /// Loads the catalog, preferring files found in `dir` when given.
    pub fn load(dir: Option<&Path>) -> Result<Self, CatalogError> {
        let menu = parse::<menu::RawMenu>(MENU_FILE, &read_source(MENU_FILE, dir)?)?.into_tree()?;
        let colors =
            parse::<colors::RawColors>(COLORS_FILE, &read_source(COLORS_FILE, dir)?)?.into_catalog()?;
        let icons =
            parse::<icons::RawIcons>(ICONS_FILE, &read_source(ICONS_FILE, dir)?)?.into_catalog()?;
        let guidelines = parse::<GuidelineCatalog>(
            GUIDELINES_FILE,
            &read_source(GUIDELINES_FILE, dir)?,
        )?;

        Self::from_parts(menu, colors, icons, guidelines)
    }

    /// Assembles a catalog from already parsed parts and checks the
    /// references between them.
    pub fn from_parts(
        menu: MenuTree,
        colors: ColorCatalog,
        icons: IconCatalog,
        guidelines: GuidelineCatalog,
    ) -> Result<Self, CatalogError> {
        let catalog = Self {
            menu,
            colors,
            icons,
            guidelines,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn menu(&self) -> &MenuTree {
        &self.menu
    }

    pub fn colors(&self) -> &ColorCatalog {
        &self.colors
    }

    pub fn icons(&self) -> &IconCatalog {
        &self.icons
    }

    pub fn guidelines(&self) -> &GuidelineCatalog {
        &self.guidelines
    }

    /// Resolves the content panel for a label. Parent entries with children
    /// have no panel of their own.
    pub fn panel(&self, label: &str) -> Option<Panel<'_>> {
        if let Some(entry) = self.menu.entry(label) {
            match entry.panel {
                Some(BuiltinPanel::Colors) => return Some(Panel::Colors),
                Some(BuiltinPanel::Icons) => return Some(Panel::Icons),
                None => {}
            }
        }
        self.guidelines.page(label).map(Panel::Guideline)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        for label in self.menu.leaf_labels() {
            if self.panel(label).is_none() {
                return Err(CatalogError::MissingPanel(label.to_string()));
            }
        }

        let mut pages = std::collections::HashSet::new();
        for page in self.guidelines.pages() {
            if !pages.insert(page.label.as_str()) {
                return Err(CatalogError::DuplicatePage(page.label.clone()));
            }
            if !self.menu.contains(&page.label) {
                return Err(CatalogError::OrphanPage(page.label.clone()));
            }
            self.validate_blocks(&page.blocks)?;
        }

        for record in self.icons.records() {
            require_glyph(&record.glyph)?;
        }

        for swatch in self.colors.swatches() {
            for example in &swatch.examples {
                self.validate_demo(&example.demo)?;
            }
        }
        for example in &self.colors.decorative_guide().examples {
            self.validate_demo(&example.demo)?;
        }

        Ok(())
    }

    fn validate_blocks(&self, blocks: &[Block]) -> Result<(), CatalogError> {
        for block in blocks {
            match block {
                Block::Rich { spans } => {
                    for span in spans {
                        if let Some(target) = &span.link {
                            if !self.menu.contains(target) {
                                return Err(CatalogError::UnknownLink(target.clone()));
                            }
                        }
                        if let Some(color) = &span.color {
                            self.colors.resolve(color)?;
                        }
                    }
                }
                Block::Examples { items, .. } => {
                    for example in items {
                        self.validate_demo(&example.demo)?;
                    }
                }
                Block::Accordion { sections } => {
                    for section in sections {
                        self.validate_blocks(&section.blocks)?;
                    }
                }
                Block::Paragraph { .. } | Block::Table { .. } | Block::Modal { .. } => {}
            }
        }
        Ok(())
    }

    fn validate_demo(&self, demo: &Demo) -> Result<(), CatalogError> {
        for color in demo.colors() {
            self.colors.resolve(color)?;
        }
        for glyph in demo.glyphs() {
            require_glyph(glyph)?;
        }
        Ok(())
    }
}

fn require_glyph(glyph: &str) -> Result<(), CatalogError> {
    if GlyphAssets::contains(glyph) {
        Ok(())
    } else {
        Err(CatalogError::MissingGlyph(glyph.to_string()))
    }
}

/// Reads a catalog file from the override directory, falling back to the
/// embedded copy.
fn read_source(file: &str, dir: Option<&Path>) -> Result<String, CatalogError> {
    if let Some(dir) = dir {
        let path = dir.join(file);
        if path.is_file() {
            tracing::debug!(path = %path.display(), "reading catalog file from disk");
            return fs::read_to_string(&path).map_err(|err| CatalogError::Read {
                file: path.display().to_string(),
                message: err.to_string(),
            });
        }
    }

    CatalogAssets::get(file)
        .map(|content| String::from_utf8_lossy(content.data.as_ref()).into_owned())
        .ok_or_else(|| CatalogError::MissingFile(file.to_string()))
}

fn parse<T: DeserializeOwned>(file: &str, source: &str) -> Result<T, CatalogError> {
    toml::from_str(source).map_err(|err| CatalogError::Parse {
        file: file.to_string(),
        message: err.to_string(),
    })
}
