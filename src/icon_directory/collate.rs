// SPDX-License-Identifier: MPL-2.0
//! Name ordering for the icon directory.
//!
//! Approximates locale-aware collation without a collation table: names are
//! compared case-insensitively with punctuation sorting before digits and
//! digits before letters. Ties are broken by case (lowercase first) and then
//! by the raw text, so the order is total.

use std::cmp::Ordering;

/// Compares two icon names.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.chars()
        .map(primary_key)
        .cmp(b.chars().map(primary_key))
        .then_with(|| {
            a.chars()
                .map(char::is_uppercase)
                .cmp(b.chars().map(char::is_uppercase))
        })
        .then_with(|| a.cmp(b))
}

fn primary_key(c: char) -> (u8, char) {
    let class = if c.is_whitespace() || c.is_ascii_punctuation() {
        0
    } else if c.is_numeric() {
        1
    } else {
        2
    };
    (class, c.to_lowercase().next().unwrap_or(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut names: Vec<&str>) -> Vec<&str> {
        names.sort_by(|a, b| compare_names(a, b));
        names
    }

    #[test]
    fn plain_names_sort_alphabetically() {
        assert_eq!(
            sorted(vec!["trash", "bell", "filter"]),
            ["bell", "filter", "trash"]
        );
    }

    #[test]
    fn case_is_ignored_at_first() {
        assert_eq!(sorted(vec!["Bell", "alarm", "cog"]), ["alarm", "Bell", "cog"]);
    }

    #[test]
    fn lowercase_wins_ties() {
        assert_eq!(compare_names("bell", "Bell"), Ordering::Less);
        assert_eq!(compare_names("Bell", "bell"), Ordering::Greater);
    }

    #[test]
    fn prefixes_sort_first() {
        assert_eq!(compare_names("map", "map-pin"), Ordering::Less);
    }

    #[test]
    fn punctuation_sorts_before_letters() {
        assert_eq!(
            sorted(vec!["chartx", "chart-area-line"]),
            ["chart-area-line", "chartx"]
        );
    }

    #[test]
    fn digits_sort_before_letters() {
        assert_eq!(sorted(vec!["icon-a", "icon-2"]), ["icon-2", "icon-a"]);
    }

    #[test]
    fn equal_names_compare_equal() {
        assert_eq!(compare_names("info-circle", "info-circle"), Ordering::Equal);
    }
}
