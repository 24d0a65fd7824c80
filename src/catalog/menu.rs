// SPDX-License-Identifier: MPL-2.0
//! Two-level sidebar menu.
//!
//! Labels double as routing keys, so a tree is only constructed when every
//! label (parent or child) is unique and non-empty and the designated default
//! is one of them.

use super::CatalogError;
use serde::Deserialize;
use std::collections::HashSet;

/// Content panels that are not driven by guideline pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuiltinPanel {
    Colors,
    Icons,
}

/// A top-level menu entry, optionally expanding into child labels.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MenuEntry {
    pub label: String,
    #[serde(default)]
    pub panel: Option<BuiltinPanel>,
    #[serde(default)]
    pub children: Vec<String>,
}

impl MenuEntry {
    /// An entry without children.
    pub fn leaf(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            panel: None,
            children: Vec::new(),
        }
    }

    /// An entry expanding into the given child labels.
    pub fn parent<I, S>(label: impl Into<String>, children: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            label: label.into(),
            panel: None,
            children: children.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn with_panel(mut self, panel: BuiltinPanel) -> Self {
        self.panel = Some(panel);
        self
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn has_child(&self, label: &str) -> bool {
        self.children.iter().any(|child| child == label)
    }
}

/// `menu.toml` as written on disk.
#[derive(Debug, Deserialize)]
pub(crate) struct RawMenu {
    default: String,
    entries: Vec<MenuEntry>,
}

impl RawMenu {
    pub(crate) fn into_tree(self) -> Result<MenuTree, CatalogError> {
        MenuTree::new(self.entries, self.default)
    }
}

/// Validated menu tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuTree {
    entries: Vec<MenuEntry>,
    default_label: String,
}

impl MenuTree {
    pub fn new(
        entries: Vec<MenuEntry>,
        default_label: impl Into<String>,
    ) -> Result<Self, CatalogError> {
        if entries.is_empty() {
            return Err(CatalogError::EmptyMenu);
        }

        let mut seen = HashSet::new();
        for label in entries
            .iter()
            .flat_map(|entry| std::iter::once(&entry.label).chain(entry.children.iter()))
        {
            if label.trim().is_empty() {
                return Err(CatalogError::EmptyLabel);
            }
            if !seen.insert(label.as_str()) {
                return Err(CatalogError::DuplicateLabel(label.clone()));
            }
        }

        let default_label = default_label.into();
        if !seen.contains(default_label.as_str()) {
            return Err(CatalogError::UnknownDefault(default_label));
        }

        Ok(Self {
            entries,
            default_label,
        })
    }

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    pub fn default_label(&self) -> &str {
        &self.default_label
    }

    /// Top-level entry with the given label.
    pub fn entry(&self, label: &str) -> Option<&MenuEntry> {
        self.entries.iter().find(|entry| entry.label == label)
    }

    /// Top-level entry listing `label` as a child.
    pub fn parent_of(&self, label: &str) -> Option<&MenuEntry> {
        self.entries.iter().find(|entry| entry.has_child(label))
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels().any(|candidate| candidate == label)
    }

    /// Every label in display order, children right after their parent.
    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().flat_map(|entry| {
            std::iter::once(entry.label.as_str()).chain(entry.children.iter().map(String::as_str))
        })
    }

    /// Labels that open a content panel: childless entries and all children.
    pub fn leaf_labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().flat_map(|entry| {
            let own = (!entry.has_children()).then_some(entry.label.as_str());
            own.into_iter()
                .chain(entry.children.iter().map(String::as_str))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_entries() -> Vec<MenuEntry> {
        vec![
            MenuEntry::leaf("Colors").with_panel(BuiltinPanel::Colors),
            MenuEntry::leaf("Icons").with_panel(BuiltinPanel::Icons),
            MenuEntry::parent("Components", ["Badge", "Buttons"]),
        ]
    }

    #[test]
    fn valid_tree_is_built() {
        let tree = MenuTree::new(sample_entries(), "Colors").expect("valid tree");
        assert_eq!(tree.default_label(), "Colors");
        assert_eq!(
            tree.labels().collect::<Vec<_>>(),
            ["Colors", "Icons", "Components", "Badge", "Buttons"]
        );
    }

    #[test]
    fn leaf_labels_skip_parents() {
        let tree = MenuTree::new(sample_entries(), "Colors").expect("valid tree");
        assert_eq!(
            tree.leaf_labels().collect::<Vec<_>>(),
            ["Colors", "Icons", "Badge", "Buttons"]
        );
    }

    #[test]
    fn duplicate_child_and_parent_label_is_rejected() {
        let mut entries = sample_entries();
        entries.push(MenuEntry::parent("More", ["Icons"]));
        assert_eq!(
            MenuTree::new(entries, "Colors"),
            Err(CatalogError::DuplicateLabel("Icons".into()))
        );
    }

    #[test]
    fn duplicate_children_are_rejected() {
        let entries = vec![MenuEntry::parent("Components", ["Badge", "Badge"])];
        assert_eq!(
            MenuTree::new(entries, "Badge"),
            Err(CatalogError::DuplicateLabel("Badge".into()))
        );
    }

    #[test]
    fn empty_menu_is_rejected() {
        assert_eq!(MenuTree::new(Vec::new(), "Colors"), Err(CatalogError::EmptyMenu));
    }

    #[test]
    fn blank_label_is_rejected() {
        let entries = vec![MenuEntry::leaf("Colors"), MenuEntry::leaf("  ")];
        assert_eq!(MenuTree::new(entries, "Colors"), Err(CatalogError::EmptyLabel));
    }

    #[test]
    fn unknown_default_is_rejected() {
        assert_eq!(
            MenuTree::new(sample_entries(), "Typography"),
            Err(CatalogError::UnknownDefault("Typography".into()))
        );
    }

    #[test]
    fn child_label_can_be_the_default() {
        let tree = MenuTree::new(sample_entries(), "Badge").expect("valid tree");
        assert_eq!(tree.default_label(), "Badge");
    }

    #[test]
    fn parent_lookup_finds_owner() {
        let tree = MenuTree::new(sample_entries(), "Colors").expect("valid tree");
        assert_eq!(
            tree.parent_of("Buttons").map(|entry| entry.label.as_str()),
            Some("Components")
        );
        assert!(tree.parent_of("Colors").is_none());
        assert!(tree.entry("Badge").is_none());
    }

    #[test]
    fn raw_menu_parses_from_toml() {
        let raw: RawMenu = toml::from_str(
            "default = \"Icons\"\n\n[[entries]]\nlabel = \"Icons\"\npanel = \"icons\"\n\n\
             [[entries]]\nlabel = \"Components\"\nchildren = [\"Modal\"]\n",
        )
        .expect("parse menu");
        let tree = raw.into_tree().expect("valid tree");
        assert_eq!(tree.entry("Icons").and_then(|e| e.panel), Some(BuiltinPanel::Icons));
        assert!(tree.contains("Modal"));
    }
}
