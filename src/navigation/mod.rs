// SPDX-License-Identifier: MPL-2.0
//! Which documentation section is displayed.
//!
//! The state holds a single active label that always belongs to the menu
//! tree. Expansion of parent entries is never stored: it is derived from the
//! active label every time it is asked for, so the two cannot drift apart.

use crate::catalog::MenuTree;

/// Active section of the reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    active_label: String,
}

impl NavigationState {
    /// Starts on the menu's designated default.
    pub fn new(menu: &MenuTree) -> Self {
        Self {
            active_label: menu.default_label().to_string(),
        }
    }

    /// Starts on `label`, or on the default when `label` is not in the menu.
    pub fn with_initial(menu: &MenuTree, label: &str) -> Self {
        let mut state = Self::new(menu);
        if !menu.contains(label) {
            tracing::warn!(label, "unknown initial section, using the default");
        }
        state.select(menu, label);
        state
    }

    /// Makes `label` the active section.
    ///
    /// Labels that are not part of `menu` are ignored. Returns whether the
    /// active label changed.
    pub fn select(&mut self, menu: &MenuTree, label: &str) -> bool {
        if !menu.contains(label) {
            tracing::debug!(label, "ignoring selection of unknown section");
            return false;
        }
        if self.active_label == label {
            return false;
        }
        self.active_label = label.to_string();
        true
    }

    pub fn is_active(&self, label: &str) -> bool {
        self.active_label == label
    }

    /// Whether the active label is a child of `parent`.
    pub fn is_expanded(&self, menu: &MenuTree, parent: &str) -> bool {
        menu.entry(parent)
            .is_some_and(|entry| entry.has_child(&self.active_label))
    }

    pub fn active_label(&self) -> &str {
        &self.active_label
    }

    /// Flags needed to draw the menu for the current selection.
    pub fn projection<'a>(&'a self, menu: &'a MenuTree) -> NavigationView<'a> {
        let entries = menu
            .entries()
            .iter()
            .map(|entry| EntryView {
                label: &entry.label,
                active: self.is_active(&entry.label),
                expanded: self.is_expanded(menu, &entry.label),
                children: entry
                    .children
                    .iter()
                    .map(|child| ChildView {
                        label: child,
                        active: self.is_active(child),
                    })
                    .collect(),
            })
            .collect();

        NavigationView {
            active_label: &self.active_label,
            entries,
        }
    }
}

/// Render boundary for the sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationView<'a> {
    pub active_label: &'a str,
    pub entries: Vec<EntryView<'a>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryView<'a> {
    pub label: &'a str,
    pub active: bool,
    /// Derived from the active label; see [`NavigationState::is_expanded`].
    pub expanded: bool,
    pub children: Vec<ChildView<'a>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildView<'a> {
    pub label: &'a str,
    pub active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{BuiltinPanel, MenuEntry};

    fn menu() -> MenuTree {
        MenuTree::new(
            vec![
                MenuEntry::leaf("Colors").with_panel(BuiltinPanel::Colors),
                MenuEntry::leaf("Icons").with_panel(BuiltinPanel::Icons),
                MenuEntry::parent(
                    "Components",
                    ["Action Icon", "Badge", "Buttons", "Inputs", "Loader", "Modal"],
                ),
            ],
            "Colors",
        )
        .expect("valid menu")
    }

    #[test]
    fn starts_on_default_label() {
        let menu = menu();
        let state = NavigationState::new(&menu);
        assert_eq!(state.active_label(), "Colors");
        assert!(state.is_active("Colors"));
    }

    #[test]
    fn selecting_any_label_makes_only_it_active() {
        let menu = menu();
        let mut state = NavigationState::new(&menu);

        for label in menu.labels() {
            state.select(&menu, label);
            assert!(state.is_active(label));
            for other in menu.labels().filter(|other| *other != label) {
                assert!(!state.is_active(other), "{other} active after selecting {label}");
            }
        }
    }

    #[test]
    fn unknown_label_is_ignored() {
        let menu = menu();
        let mut state = NavigationState::new(&menu);
        state.select(&menu, "Buttons");

        assert!(!state.select(&menu, "Typography"));
        assert!(!state.select(&menu, ""));
        assert!(!state.select(&menu, "buttons"));
        assert_eq!(state.active_label(), "Buttons");
    }

    #[test]
    fn select_reports_changes() {
        let menu = menu();
        let mut state = NavigationState::new(&menu);

        assert!(state.select(&menu, "Icons"));
        assert!(!state.select(&menu, "Icons"));
        assert!(state.select(&menu, "Modal"));
    }

    #[test]
    fn parent_expands_only_while_a_child_is_active() {
        let menu = menu();
        let mut state = NavigationState::new(&menu);
        assert!(!state.is_expanded(&menu, "Components"));

        state.select(&menu, "Loader");
        assert!(state.is_expanded(&menu, "Components"));
        assert!(!state.is_expanded(&menu, "Colors"));

        state.select(&menu, "Icons");
        assert!(!state.is_expanded(&menu, "Components"));
    }

    #[test]
    fn selecting_a_parent_does_not_expand_it() {
        let menu = menu();
        let mut state = NavigationState::new(&menu);

        assert!(state.select(&menu, "Components"));
        assert!(state.is_active("Components"));
        assert!(!state.is_expanded(&menu, "Components"));
    }

    #[test]
    fn child_is_not_a_parent() {
        let menu = menu();
        let mut state = NavigationState::new(&menu);
        state.select(&menu, "Badge");
        assert!(!state.is_expanded(&menu, "Badge"));
        assert!(!state.is_expanded(&menu, "Nope"));
    }

    #[test]
    fn initial_label_falls_back_to_default() {
        let menu = menu();
        assert_eq!(
            NavigationState::with_initial(&menu, "Buttons").active_label(),
            "Buttons"
        );
        assert_eq!(
            NavigationState::with_initial(&menu, "Typography").active_label(),
            "Colors"
        );
    }

    #[test]
    fn projection_mirrors_queries() {
        let menu = menu();
        let mut state = NavigationState::new(&menu);
        state.select(&menu, "Badge");

        let view = state.projection(&menu);
        assert_eq!(view.active_label, "Badge");
        assert_eq!(view.entries.len(), 3);

        let components = &view.entries[2];
        assert_eq!(components.label, "Components");
        assert!(components.expanded);
        assert!(!components.active);

        let active_children: Vec<_> = components
            .children
            .iter()
            .filter(|child| child.active)
            .map(|child| child.label)
            .collect();
        assert_eq!(active_children, ["Badge"]);

        assert!(view.entries[..2].iter().all(|entry| !entry.expanded && !entry.active));
    }
}
