//! Recently used emoji.
//!
//! `RecentList` is the bounded most-recently-used list. `RecentStore` persists
//! it in [`Preferences`] under [`RECENT_KEY`], one compact record per entry.
//! Reads are best-effort and writes are fire-and-forget: neither ever fails
//! the caller.

use crate::emoji::Emoji;
use crate::storage::Preferences;
use std::sync::Arc;

/// Preferences key holding the persisted records.
pub const RECENT_KEY: &str = "recent_emojis";

/// Maximum number of recent emoji kept.
pub const RECENT_CAPACITY: usize = 30;

/// Most-recent-first list of distinct emoji, at most [`RECENT_CAPACITY`] long.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecentList {
    items: Vec<Emoji>,
}

impl RecentList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from an existing sequence, dropping duplicates (first occurrence
    /// wins) and anything past capacity.
    pub fn from_emojis<I: IntoIterator<Item = Emoji>>(emojis: I) -> Self {
        let mut items: Vec<Emoji> = Vec::new();
        for e in emojis {
            if items.len() == RECENT_CAPACITY {
                break;
            }
            if !items.contains(&e) {
                items.push(e);
            }
        }
        Self { items }
    }

    /// Parse persisted records, skipping malformed ones.
    pub fn from_records<S: AsRef<str>>(records: &[S]) -> Self {
        Self::from_emojis(records.iter().filter_map(|r| match Emoji::from_record(r.as_ref()) {
            Ok(e) => Some(e),
            Err(err) => {
                tracing::debug!(error = %err, "skipping malformed recent emoji record");
                None
            }
        }))
    }

    /// Move `emoji` to the front, inserting it if new and evicting the oldest
    /// entry beyond capacity.
    pub fn record(&mut self, emoji: Emoji) {
        self.items.retain(|e| e != &emoji);
        self.items.insert(0, emoji);
        self.items.truncate(RECENT_CAPACITY);
    }

    pub fn to_records(&self) -> Vec<String> {
        self.items.iter().map(Emoji::to_record).collect()
    }

    pub fn as_slice(&self) -> &[Emoji] {
        &self.items
    }

    pub fn first(&self) -> Option<&Emoji> {
        self.items.first()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_vec(self) -> Vec<Emoji> {
        self.items
    }
}

/// Recent list persisted in key-value preferences.
#[derive(Clone, Debug)]
pub struct RecentStore {
    prefs: Preferences,
}

impl RecentStore {
    pub fn new(prefs: Preferences) -> Self {
        Self { prefs }
    }

    pub fn in_memory() -> Self {
        Self::new(Preferences::new_in_memory())
    }

    pub fn preferences(&self) -> &Preferences {
        &self.prefs
    }

    /// Read the persisted list. Storage failures read as an empty list.
    pub fn load_list(&self) -> RecentList {
        match self.prefs.get_string_list(RECENT_KEY) {
            Ok(Some(records)) => RecentList::from_records(&records),
            Ok(None) => RecentList::new(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read recent emoji, starting empty");
                RecentList::new()
            }
        }
    }

    /// Read the persisted list as plain values, most recent first.
    pub fn load(&self) -> Vec<Emoji> {
        self.load_list().into_vec()
    }

    /// Record a selection: read, move to front, truncate, persist.
    ///
    /// Persist failures are logged; the updated list is returned regardless.
    /// If the stored list cannot be read it is left untouched and only this
    /// selection is returned.
    pub fn add(&self, emoji: Emoji) -> Vec<Emoji> {
        let records = match self.prefs.get_string_list(RECENT_KEY) {
            Ok(records) => records.unwrap_or_default(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read recent emoji, selection not persisted");
                return vec![emoji];
            }
        };
        let mut list = RecentList::from_records(&records);
        list.record(emoji);
        self.persist(&list);
        list.into_vec()
    }

    /// Overwrite the persisted list.
    pub fn persist(&self, list: &RecentList) {
        if let Err(e) = self.prefs.set_string_list(RECENT_KEY, &list.to_records()) {
            tracing::warn!(error = %e, "failed to persist recent emoji");
        }
    }

    /// Forget all recent emoji.
    pub fn clear(&self) {
        if let Err(e) = self.prefs.remove(RECENT_KEY) {
            tracing::warn!(error = %e, "failed to clear recent emoji");
        }
    }
}

/// Where a picker reads and records its recent emoji.
pub trait RecentSource {
    fn load(&self) -> Vec<Emoji>;
    fn add(&self, emoji: Emoji) -> Vec<Emoji>;
}

impl RecentSource for RecentStore {
    fn load(&self) -> Vec<Emoji> {
        RecentStore::load(self)
    }

    fn add(&self, emoji: Emoji) -> Vec<Emoji> {
        RecentStore::add(self, emoji)
    }
}

impl<T: RecentSource + ?Sized> RecentSource for Arc<T> {
    fn load(&self) -> Vec<Emoji> {
        (**self).load()
    }

    fn add(&self, emoji: Emoji) -> Vec<Emoji> {
        (**self).add(emoji)
    }
}

impl<T: RecentSource + ?Sized> RecentSource for &T {
    fn load(&self) -> Vec<Emoji> {
        (**self).load()
    }

    fn add(&self, emoji: Emoji) -> Vec<Emoji> {
        (**self).add(emoji)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nth(i: usize) -> Emoji {
        Emoji::new(format!("emoji {}", i), format!("#{}", i))
    }

    #[test]
    fn distinct_adds_are_capped_and_ordered() {
        for k in [0usize, 1, 5, 30, 31, 45] {
            let mut list = RecentList::new();
            for i in 0..k {
                list.record(nth(i));
            }
            assert_eq!(list.len(), k.min(RECENT_CAPACITY));
            if k > 0 {
                assert_eq!(list.first(), Some(&nth(k - 1)));
            }
            // most recent first: strictly decreasing insertion order
            let expected: Vec<_> = (0..k).rev().take(RECENT_CAPACITY).map(nth).collect();
            assert_eq!(list.as_slice(), expected.as_slice());
        }
    }

    #[test]
    fn re_adding_moves_to_front() {
        let mut list = RecentList::new();
        let e = Emoji::new("grinning face", "😀");
        list.record(e.clone());
        list.record(e.clone());
        assert_eq!(list.as_slice(), &[e.clone()]);

        list.record(nth(1));
        list.record(e.clone());
        assert_eq!(list.as_slice(), &[e, nth(1)]);
    }

    #[test]
    fn thirty_first_evicts_oldest() {
        let mut list = RecentList::new();
        for i in 0..RECENT_CAPACITY {
            list.record(nth(i));
        }
        assert!(list.as_slice().contains(&nth(0)));
        list.record(nth(RECENT_CAPACITY));
        assert_eq!(list.len(), RECENT_CAPACITY);
        assert!(!list.as_slice().contains(&nth(0)));
        assert_eq!(list.first(), Some(&nth(RECENT_CAPACITY)));
    }

    #[test]
    fn malformed_records_are_skipped() {
        let records = vec![
            Emoji::new("a", "😀").to_record(),
            "{broken".to_string(),
            r#"{"n": "only name"}"#.to_string(),
            Emoji::new("b", "🐶").to_record(),
        ];
        let list = RecentList::from_records(&records);
        assert_eq!(list.as_slice(), &[Emoji::new("a", "😀"), Emoji::new("b", "🐶")]);
    }

    #[test]
    fn store_add_persists_and_loads() {
        let store = RecentStore::in_memory();
        assert!(store.load().is_empty());
        store.add(Emoji::new("a", "😀"));
        store.add(Emoji::new("b", "🐶"));
        store.add(Emoji::new("a", "😀"));
        assert_eq!(store.load(), vec![Emoji::new("a", "😀"), Emoji::new("b", "🐶")]);

        let raw = store.preferences().get_string_list(RECENT_KEY).unwrap().unwrap();
        assert_eq!(raw[0], r#"{"n":"a","e":"😀"}"#);
    }

    #[test]
    fn store_clear() {
        let store = RecentStore::in_memory();
        store.add(Emoji::new("a", "😀"));
        store.clear();
        assert!(store.load().is_empty());
    }

    #[test]
    fn unreadable_list_is_not_overwritten() {
        let path = crate::storage::tests::temp_db_path("recent_unreadable");
        let prefs = crate::storage::RedbPreferences::new(&path).unwrap();
        prefs.put_raw(RECENT_KEY, "{not a list").unwrap();
        let prefs = std::sync::Arc::new(prefs);
        let store = RecentStore::new(Preferences::Redb(std::sync::Arc::clone(&prefs)));

        let after = store.add(Emoji::new("a", "😀"));
        assert_eq!(after, vec![Emoji::new("a", "😀")]);
        assert_eq!(prefs.get_raw(RECENT_KEY).unwrap().as_deref(), Some("{not a list"));

        drop(store);
        drop(prefs);
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn store_survives_corrupt_persisted_list() {
        let path = crate::storage::tests::temp_db_path("recent_corrupt");
        let prefs = crate::storage::RedbPreferences::new(&path).unwrap();
        prefs
            .set_string_list(RECENT_KEY, &["{bad".to_string()])
            .unwrap();
        let store = RecentStore::new(Preferences::Redb(std::sync::Arc::new(prefs)));
        assert!(store.load().is_empty());
        let after = store.add(Emoji::new("a", "😀"));
        assert_eq!(after, vec![Emoji::new("a", "😀")]);
        drop(store);
        let _ = std::fs::remove_file(path);
    }
}
