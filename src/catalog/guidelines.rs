// SPDX-License-Identifier: MPL-2.0
//! Component guideline pages.
//!
//! A page is an ordered list of blocks: paragraphs, styled text with links to
//! other sections, comparison tables, do/don't example groups, collapsible
//! sections and a modal demo. Example panels carry a [`Demo`] describing the
//! widget to render inside them.

use serde::Deserialize;

/// All guideline pages, keyed by the menu label that opens them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GuidelineCatalog {
    #[serde(default)]
    pages: Vec<GuidelinePage>,
}

impl GuidelineCatalog {
    pub fn new(pages: Vec<GuidelinePage>) -> Self {
        Self { pages }
    }

    pub fn pages(&self) -> &[GuidelinePage] {
        &self.pages
    }

    pub fn page(&self, label: &str) -> Option<&GuidelinePage> {
        self.pages.iter().find(|page| page.label == label)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GuidelinePage {
    pub label: String,
    /// Shows the work-in-progress banner above the content.
    #[serde(default)]
    pub wip: bool,
    #[serde(default)]
    pub blocks: Vec<Block>,
}

impl GuidelinePage {
    /// Keys of every collapsible section on the page.
    pub fn section_keys(&self) -> Vec<&str> {
        self.blocks
            .iter()
            .filter_map(|block| match block {
                Block::Accordion { sections } => Some(sections),
                _ => None,
            })
            .flatten()
            .map(|section| section.key.as_str())
            .collect()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Block {
    Paragraph {
        text: String,
    },
    Rich {
        spans: Vec<Span>,
    },
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    Examples {
        #[serde(default = "default_columns")]
        columns: usize,
        items: Vec<Example>,
    },
    Accordion {
        sections: Vec<AccordionSection>,
    },
    Modal {
        trigger: String,
        title: String,
        body: String,
    },
}

fn default_columns() -> usize {
    2
}

/// A run of text inside a rich paragraph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Span {
    pub text: String,
    #[serde(default)]
    pub italic: bool,
    #[serde(default)]
    pub bold: bool,
    /// Name of a color scale.
    #[serde(default)]
    pub color: Option<String>,
    /// Menu label to navigate to when clicked.
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AccordionSection {
    pub key: String,
    pub title: String,
    #[serde(default)]
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExampleKind {
    Do,
    Dont,
}

/// A do/don't panel.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Example {
    pub kind: ExampleKind,
    pub caption: String,
    pub demo: Demo,
}

/// Widget rendered inside an example panel.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "widget", rename_all = "kebab-case")]
pub enum Demo {
    Button(ButtonDemo),
    ButtonRow {
        buttons: Vec<ButtonDemo>,
    },
    Badge(BadgeDemo),
    ActionIcon {
        glyph: String,
        #[serde(default)]
        variant: Variant,
        #[serde(default = "default_color")]
        color: String,
    },
    TextInput {
        #[serde(default)]
        label: Option<String>,
        placeholder: String,
    },
    Loader {
        kind: LoaderKind,
    },
}

impl Demo {
    /// Color scale names referenced by the demo.
    pub fn colors(&self) -> Vec<&str> {
        match self {
            Demo::Button(button) => vec![button.color.as_str()],
            Demo::ButtonRow { buttons } => buttons.iter().map(|b| b.color.as_str()).collect(),
            Demo::Badge(badge) => vec![badge.color.as_str()],
            Demo::ActionIcon { color, .. } => vec![color.as_str()],
            Demo::TextInput { .. } | Demo::Loader { .. } => Vec::new(),
        }
    }

    /// Glyph names referenced by the demo.
    pub fn glyphs(&self) -> Vec<&str> {
        match self {
            Demo::Button(button) => button.glyphs().collect(),
            Demo::ButtonRow { buttons } => buttons.iter().flat_map(|b| b.glyphs()).collect(),
            Demo::ActionIcon { glyph, .. } => vec![glyph.as_str()],
            Demo::Badge(_) | Demo::TextInput { .. } | Demo::Loader { .. } => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ButtonDemo {
    pub label: String,
    #[serde(default)]
    pub variant: Variant,
    #[serde(default = "default_color")]
    pub color: String,
    /// Glyph shown before the label.
    #[serde(default)]
    pub left: Option<String>,
    /// Glyph shown after the label.
    #[serde(default)]
    pub right: Option<String>,
}

impl ButtonDemo {
    fn glyphs(&self) -> impl Iterator<Item = &str> {
        self.left.iter().chain(self.right.iter()).map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BadgeDemo {
    pub label: String,
    #[serde(default)]
    pub size: Size,
    #[serde(default = "default_badge_radius")]
    pub radius: Size,
    #[serde(default)]
    pub variant: Variant,
    #[serde(default = "default_color")]
    pub color: String,
}

fn default_color() -> String {
    "blue".to_string()
}

fn default_badge_radius() -> Size {
    Size::Xl
}

/// Visual treatment shared by buttons, badges and action icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Filled,
    Light,
    Outline,
    Subtle,
    Transparent,
    Default,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Xs,
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoaderKind {
    Bars,
    Oval,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(source: &str) -> GuidelineCatalog {
        toml::from_str(source).expect("parse guidelines")
    }

    #[test]
    fn paragraph_and_examples_parse() {
        let catalog = parse(
            r#"
[[pages]]
label = "Badge"
wip = true

[[pages.blocks]]
type = "paragraph"
text = "Badges should be size medium."

[[pages.blocks]]
type = "examples"

[[pages.blocks.items]]
kind = "dont"
caption = "No!"
demo = { widget = "badge", label = "Tag", size = "xl" }
"#,
        );

        let page = catalog.page("Badge").expect("badge page");
        assert!(page.wip);
        assert_eq!(page.blocks.len(), 2);
        match &page.blocks[1] {
            Block::Examples { columns, items } => {
                assert_eq!(*columns, 2);
                assert_eq!(items[0].kind, ExampleKind::Dont);
                assert_eq!(
                    items[0].demo,
                    Demo::Badge(BadgeDemo {
                        label: "Tag".into(),
                        size: Size::Xl,
                        radius: Size::Xl,
                        variant: Variant::Filled,
                        color: "blue".into(),
                    })
                );
            }
            other => panic!("unexpected block {other:?}"),
        }
    }

    #[test]
    fn accordion_sections_expose_keys() {
        let catalog = parse(
            r#"
[[pages]]
label = "Buttons"

[[pages.blocks]]
type = "accordion"

[[pages.blocks.sections]]
key = "variants"
title = "Variants"

[[pages.blocks.sections.blocks]]
type = "rich"
spans = [{ text = "see " }, { text = "color", link = "Colors" }]

[[pages.blocks.sections]]
key = "labels"
title = "Labels"
"#,
        );

        let page = catalog.page("Buttons").expect("buttons page");
        assert_eq!(page.section_keys(), ["variants", "labels"]);
    }

    #[test]
    fn button_demo_lists_its_glyphs_and_colors() {
        let demo = Demo::ButtonRow {
            buttons: vec![
                ButtonDemo {
                    label: "Delete".into(),
                    variant: Variant::Filled,
                    color: "red".into(),
                    left: Some("trash".into()),
                    right: Some("chevron-down".into()),
                },
                ButtonDemo {
                    label: "Cancel".into(),
                    variant: Variant::Light,
                    color: "gray".into(),
                    left: None,
                    right: None,
                },
            ],
        };
        assert_eq!(demo.glyphs(), ["trash", "chevron-down"]);
        assert_eq!(demo.colors(), ["red", "gray"]);
    }

    #[test]
    fn unknown_block_type_is_rejected() {
        let result = toml::from_str::<GuidelineCatalog>(
            "[[pages]]\nlabel = \"X\"\n\n[[pages.blocks]]\ntype = \"video\"\n",
        );
        assert!(result.is_err());
    }
}
