//! Emoji categories.
//!
//! The order of `Category::ALL` is the tab and page order of the picker.
//! `Recent` is always page 0 and is the only category without a static table.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the nine fixed emoji groupings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Recent,
    Smileys,
    Animals,
    Foods,
    Travel,
    Activities,
    Objects,
    Symbols,
    Flags,
}

impl Category {
    /// All categories in page order.
    pub const ALL: [Category; 9] = [
        Category::Recent,
        Category::Smileys,
        Category::Animals,
        Category::Foods,
        Category::Travel,
        Category::Activities,
        Category::Objects,
        Category::Symbols,
        Category::Flags,
    ];

    /// Number of pages in the picker.
    pub const COUNT: usize = Self::ALL.len();

    /// Page/tab index of this category.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Category at a page index, `None` when out of range.
    pub fn from_index(index: usize) -> Option<Category> {
        Self::ALL.get(index).copied()
    }

    /// Categories backed by a static catalog table (everything but Recent).
    pub fn content() -> impl Iterator<Item = Category> {
        Self::ALL.into_iter().filter(|c| c.has_table())
    }

    pub fn has_table(self) -> bool {
        self != Category::Recent
    }

    /// Human readable label.
    pub fn label(self) -> &'static str {
        match self {
            Category::Recent => "Recent",
            Category::Smileys => "Smileys & People",
            Category::Animals => "Animals & Nature",
            Category::Foods => "Food & Drink",
            Category::Travel => "Travel & Places",
            Category::Activities => "Activities",
            Category::Objects => "Objects",
            Category::Symbols => "Symbols",
            Category::Flags => "Flags",
        }
    }

    /// Glyph used for the tab when no icon is configured.
    pub fn default_icon(self) -> &'static str {
        match self {
            Category::Recent => "🕘",
            Category::Smileys => "😀",
            Category::Animals => "🐻",
            Category::Foods => "🍔",
            Category::Travel => "🚗",
            Category::Activities => "⚽",
            Category::Objects => "💡",
            Category::Symbols => "🔣",
            Category::Flags => "🏳",
        }
    }

    /// Next category in tab order, wrapping around.
    pub fn next(self) -> Category {
        Self::ALL[(self.index() + 1) % Self::COUNT]
    }

    /// Previous category in tab order, wrapping around.
    pub fn prev(self) -> Category {
        Self::ALL[(self.index() + Self::COUNT - 1) % Self::COUNT]
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::Recent
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| format!("{:?}", c).to_ascii_lowercase() == lowered)
            .ok_or_else(|| format!("unknown category: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recent_is_first_page() {
        assert_eq!(Category::Recent.index(), 0);
        assert_eq!(Category::from_index(0), Some(Category::Recent));
        assert_eq!(Category::from_index(8), Some(Category::Flags));
        assert_eq!(Category::from_index(9), None);
    }

    #[test]
    fn index_matches_all_order() {
        for (i, c) in Category::ALL.iter().enumerate() {
            assert_eq!(c.index(), i);
        }
    }

    #[test]
    fn content_excludes_recent() {
        let content: Vec<_> = Category::content().collect();
        assert_eq!(content.len(), 8);
        assert!(!content.contains(&Category::Recent));
    }

    #[test]
    fn next_and_prev_wrap() {
        assert_eq!(Category::Flags.next(), Category::Recent);
        assert_eq!(Category::Recent.prev(), Category::Flags);
        assert_eq!(Category::Smileys.next(), Category::Animals);
    }

    #[test]
    fn parse_category_names() {
        assert_eq!("smileys".parse::<Category>(), Ok(Category::Smileys));
        assert_eq!(" Flags ".parse::<Category>(), Ok(Category::Flags));
        assert!("people".parse::<Category>().is_err());
    }
}
