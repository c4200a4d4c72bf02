//! Emoji catalog: the static category tables loaded into ordered maps.
//!
//! The catalog is immutable once built. The built-in instance is created on
//! first use and shared through an `Arc`; pickers receive it by reference
//! rather than reaching for a global.

use crate::category::Category;
use crate::emoji::{Emoji, EmojiMap};
use crate::tables;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::Arc;

static BUILTIN: Lazy<Arc<Catalog>> = Lazy::new(|| {
    let catalog = Catalog::from_tables([
        (Category::Smileys, tables::SMILEYS),
        (Category::Animals, tables::ANIMALS),
        (Category::Foods, tables::FOODS),
        (Category::Travel, tables::TRAVEL),
        (Category::Activities, tables::ACTIVITIES),
        (Category::Objects, tables::OBJECTS),
        (Category::Symbols, tables::SYMBOLS),
        (Category::Flags, tables::FLAGS),
    ]);
    tracing::debug!(entries = catalog.len(), "built-in emoji catalog loaded");
    Arc::new(catalog)
});

/// Mapping of content category → ordered name/glyph map.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    tables: HashMap<Category, EmojiMap>,
}

impl Catalog {
    /// The built-in catalog, shared for the life of the process.
    pub fn builtin() -> Arc<Catalog> {
        Arc::clone(&BUILTIN)
    }

    /// Build a catalog from `(category, entries)` tables.
    ///
    /// Tables for `Recent` are ignored: its contents are dynamic. A later
    /// table for the same category extends the earlier one.
    pub fn from_tables<'a, I, E>(tables: I) -> Self
    where
        I: IntoIterator<Item = (Category, E)>,
        E: IntoIterator<Item = &'a (&'a str, &'a str)>,
    {
        let mut out: HashMap<Category, EmojiMap> = HashMap::new();
        for (category, entries) in tables {
            if !category.has_table() {
                continue;
            }
            let map = out.entry(category).or_default();
            for (name, glyph) in entries {
                map.insert((*name).to_string(), (*glyph).to_string());
            }
        }
        Catalog { tables: out }
    }

    /// The ordered map for a category. `None` for `Recent`.
    pub fn get(&self, category: Category) -> Option<&EmojiMap> {
        self.tables.get(&category)
    }

    /// Entries of a category as `Emoji` values, in display order.
    pub fn emojis(&self, category: Category) -> Vec<Emoji> {
        self.get(category)
            .map(|m| m.iter().map(|(n, g)| Emoji::new(n.as_str(), g.as_str())).collect())
            .unwrap_or_default()
    }

    /// Total number of entries across all categories.
    pub fn len(&self) -> usize {
        self.tables.values().map(|m| m.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Find which category and name a glyph belongs to.
    pub fn find_glyph(&self, glyph: &str) -> Option<(Category, &str)> {
        Category::content().find_map(|category| {
            self.get(category)?
                .iter()
                .find(|(_, g)| g.as_str() == glyph)
                .map(|(name, _)| (category, name.as_str()))
        })
    }

    /// Recommend emoji whose names match the given keywords.
    ///
    /// Names and keywords are compared after normalization. Entries matching
    /// more keywords rank first; ties keep catalog order. Blank keywords are
    /// ignored and an empty keyword list yields nothing.
    pub fn recommend<S: AsRef<str>>(&self, keywords: &[S], limit: usize) -> Vec<Emoji> {
        let keywords: Vec<String> = keywords
            .iter()
            .map(|k| crate::utils::normalize_name(k.as_ref()))
            .filter(|k| !k.is_empty())
            .collect();
        if keywords.is_empty() || limit == 0 {
            return Vec::new();
        }

        let mut scored: Vec<(usize, Emoji)> = Vec::new();
        for category in Category::content() {
            let Some(map) = self.get(category) else {
                continue;
            };
            for (name, glyph) in map {
                let normalized = crate::utils::normalize_name(name);
                let hits = keywords
                    .iter()
                    .filter(|k| normalized.contains(k.as_str()))
                    .count();
                if hits > 0 {
                    scored.push((hits, Emoji::new(name.as_str(), glyph.as_str())));
                }
            }
        }

        // stable sort keeps catalog order for equal hit counts
        scored.sort_by(|a, b| b.0.cmp(&a.0));
        scored.into_iter().take(limit).map(|(_, e)| e).collect()
    }
}
