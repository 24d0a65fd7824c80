// SPDX-License-Identifier: MPL-2.0
//! Searchable, sortable icon directory with copy acknowledgment.
//!
//! The state keeps only what the user typed or clicked. The filtered and
//! sorted rows are rebuilt from the catalog by [`IconDirectoryState::view`]
//! every time they are needed.

mod acknowledgment;
mod collate;

pub use acknowledgment::{CopyDelay, CopyTicket};
pub use collate::compare_names;

use crate::catalog::{IconCatalog, IconRecord};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Acknowledgment {
    name: String,
    generation: u64,
}

/// User-facing state of the icon directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconDirectoryState {
    search_query: String,
    sort_ascending: bool,
    copied: Option<Acknowledgment>,
    generation: u64,
    delay: CopyDelay,
}

impl Default for IconDirectoryState {
    fn default() -> Self {
        Self::new(CopyDelay::default())
    }
}

impl IconDirectoryState {
    pub fn new(delay: CopyDelay) -> Self {
        Self {
            search_query: String::new(),
            sort_ascending: true,
            copied: None,
            generation: 0,
            delay,
        }
    }

    /// Replaces the query as typed. The acknowledgment is left alone.
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    pub fn toggle_sort(&mut self) {
        self.sort_ascending = !self.sort_ascending;
    }

    /// Marks `name` as copied and returns the ticket that will expire it.
    ///
    /// Returns `None` when `name` is not among the rows currently shown.
    /// Any earlier ticket becomes stale.
    pub fn copy(&mut self, catalog: &IconCatalog, name: &str) -> Option<CopyTicket> {
        let visible = catalog
            .records()
            .iter()
            .any(|record| record.name == name && self.matches(record));
        if !visible {
            tracing::debug!(name, "ignoring copy of an icon that is not shown");
            return None;
        }

        self.generation = self.generation.wrapping_add(1);
        self.copied = Some(Acknowledgment {
            name: name.to_string(),
            generation: self.generation,
        });
        tracing::info!(name, "copied icon name");

        Some(CopyTicket::new(
            name.to_string(),
            self.generation,
            self.delay.as_duration(),
        ))
    }

    /// Clears the acknowledgment if `ticket` belongs to the latest copy.
    pub fn expire(&mut self, ticket: &CopyTicket) -> bool {
        match &self.copied {
            Some(current) if current.generation == ticket.generation() => {
                self.copied = None;
                true
            }
            _ => {
                tracing::debug!(
                    name = ticket.name(),
                    generation = ticket.generation(),
                    "stale copy expiry ignored"
                );
                false
            }
        }
    }

    pub fn copied_name(&self) -> Option<&str> {
        self.copied.as_ref().map(|ack| ack.name.as_str())
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn sort_ascending(&self) -> bool {
        self.sort_ascending
    }

    pub fn delay(&self) -> CopyDelay {
        self.delay
    }

    /// Whether `record` passes the current query.
    pub fn matches(&self, record: &IconRecord) -> bool {
        if self.search_query.is_empty() {
            return true;
        }
        let needle = self.search_query.to_lowercase();
        record.name.to_lowercase().contains(&needle)
            || record.use_case.to_lowercase().contains(&needle)
    }

    /// Filtered, sorted and annotated rows.
    pub fn view<'a>(&self, catalog: &'a IconCatalog) -> DirectoryView<'a> {
        let copied = self.copied_name();
        let mut rows: Vec<DirectoryRow<'a>> = catalog
            .records()
            .iter()
            .filter(|record| self.matches(record))
            .map(|record| DirectoryRow {
                record,
                showing_copied: copied == Some(record.name.as_str()),
            })
            .collect();

        rows.sort_by(|a, b| {
            let order = compare_names(&a.record.name, &b.record.name);
            if self.sort_ascending {
                order
            } else {
                order.reverse()
            }
        });

        DirectoryView {
            rows,
            sort_ascending: self.sort_ascending,
        }
    }
}

/// Render boundary for the icon table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryView<'a> {
    pub rows: Vec<DirectoryRow<'a>>,
    pub sort_ascending: bool,
}

impl<'a> DirectoryView<'a> {
    pub fn names(&self) -> Vec<&'a str> {
        self.rows.iter().map(|row| row.record.name.as_str()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryRow<'a> {
    pub record: &'a IconRecord,
    pub showing_copied: bool,
}
