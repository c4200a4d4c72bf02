//! Per-picker cache of availability-filtered category maps.

use crate::category::Category;
use crate::emoji::EmojiMap;
use std::collections::HashMap;

/// Filtered maps keyed by category.
///
/// Entries are written once and never invalidated for the life of the
/// picker; font capabilities are assumed not to change mid-session.
#[derive(Debug, Clone, Default)]
pub struct AvailabilityCache {
    filtered: HashMap<Category, EmojiMap>,
}

impl AvailabilityCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, category: Category) -> Option<&EmojiMap> {
        self.filtered.get(&category)
    }

    pub fn contains(&self, category: Category) -> bool {
        self.filtered.contains_key(&category)
    }

    /// Store the filtered map for a category.
    ///
    /// Returns `false` (and keeps the existing entry) if the category was
    /// already cached.
    pub fn insert(&mut self, category: Category, map: EmojiMap) -> bool {
        if self.filtered.contains_key(&category) {
            return false;
        }
        self.filtered.insert(category, map);
        true
    }

    pub fn len(&self) -> usize {
        self.filtered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filtered.is_empty()
    }
}
