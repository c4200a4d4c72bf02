//! Headless picker state.
//!
//! `PickerState` is the whole mutable state of one picker instance. Front
//! ends feed it [`PickerEvent`]s and carry out the [`Effect`]s it returns;
//! nothing in here performs I/O or blocks. Results of asynchronous work come
//! back as events carrying the [`Ticket`] of the request, and are dropped if
//! the ticket no longer matches or the picker has been disposed.

use crate::availability::AvailabilityCache;
use crate::catalog::Catalog;
use crate::category::Category;
use crate::config::PickerConfig;
use crate::emoji::{Emoji, EmojiMap};
use crate::grid::CategoryGrid;
use crate::recent::RecentList;
use std::collections::{BTreeSet, HashMap};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

static NEXT_PICKER_ID: AtomicU64 = AtomicU64::new(1);

/// Liveness of one picker instance.
#[derive(Debug)]
struct Lifetime {
    id: u64,
    alive: Arc<AtomicBool>,
}

impl Lifetime {
    fn new() -> Self {
        Self {
            id: NEXT_PICKER_ID.fetch_add(1, Ordering::Relaxed),
            alive: Arc::new(AtomicBool::new(true)),
        }
    }

    fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Acquire)
    }

    fn end(&self) {
        self.alive.store(false, Ordering::Release);
    }

    fn ticket(&self, seq: u64) -> Ticket {
        Ticket {
            picker: self.id,
            seq,
            alive: Arc::clone(&self.alive),
        }
    }
}

/// Token attached to an asynchronous request.
///
/// Executors may check [`Ticket::is_live`] to skip work for a picker that has
/// already been disposed. Two tickets are equal when they were issued by the
/// same picker for the same request.
#[derive(Debug, Clone)]
pub struct Ticket {
    picker: u64,
    seq: u64,
    alive: Arc<AtomicBool>,
}

impl Ticket {
    /// Whether the issuing picker is still alive.
    pub fn is_live(&self) -> bool {
        self.alive.load(Ordering::Acquire)
    }
}

impl PartialEq for Ticket {
    fn eq(&self, other: &Self) -> bool {
        self.picker == other.picker && self.seq == other.seq
    }
}

impl Eq for Ticket {}

/// Keyboard input for terminal front ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    Left,
    Right,
    Up,
    Down,
    PageUp,
    PageDown,
    /// Next category tab
    Tab,
    /// Previous category tab
    BackTab,
    /// Select the emoji under the cursor
    Enter,
    /// Jump to tab N (1-based)
    Digit(u8),
}

/// Input to [`PickerState::update`].
#[derive(Debug, Clone, PartialEq)]
pub enum PickerEvent {
    /// The picker was attached to a front end.
    Mounted,
    /// Result of an [`Effect::LoadRecents`].
    RecentsLoaded { ticket: Ticket, emojis: Vec<Emoji> },
    /// Pages at least partially visible in the pager.
    VisiblePagesChanged(Vec<usize>),
    /// A category tab was tapped.
    TabTapped(usize),
    /// A category page is about to be drawn.
    CategoryShown(Category),
    /// Result of an [`Effect::FilterCategory`].
    CategoryFiltered {
        ticket: Ticket,
        category: Category,
        map: EmojiMap,
    },
    /// A glyph cell was tapped.
    EmojiTapped(Emoji),
    /// A category grid was scrolled to a row.
    GridScrolled { category: Category, row: usize },
    Key(KeyEvent),
    /// The picker is going away; late results must be ignored.
    Disposed,
}

/// Work requested by [`PickerState::update`].
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Load the persisted recent list, answer with `RecentsLoaded`.
    LoadRecents(Ticket),
    /// Filter a category through the glyph oracle, answer with `CategoryFiltered`.
    FilterCategory { ticket: Ticket, category: Category },
    /// Scroll the pager to a page.
    AnimateToPage { page: usize, duration: Duration },
    /// Invoke the caller's selection callback.
    EmojiSelected(Emoji),
    /// Push the emoji into the persisted recent list.
    RecordRecent(Emoji),
}

#[derive(Debug, Clone)]
enum RecentsState {
    /// Waiting for storage; selections made meanwhile are replayed on load.
    Loading { selected: Vec<Emoji> },
    Ready(RecentList),
}

/// Pages overlapping the viewport of a horizontal pager.
///
/// `offset` and `viewport_width` are in the same unit as `page_width`.
/// A page counts as visible when any positive width of it is on screen.
pub fn visible_pages(
    offset: f32,
    viewport_width: f32,
    page_width: f32,
    page_count: usize,
) -> BTreeSet<usize> {
    if page_count == 0 || page_width <= 0.0 || viewport_width <= 0.0 {
        return BTreeSet::new();
    }
    let offset = offset.max(0.0);
    let first = (offset / page_width).floor() as usize;
    let last = (((offset + viewport_width) / page_width).ceil() as usize).saturating_sub(1);
    let last = last.min(page_count - 1);
    if first > last {
        return BTreeSet::new();
    }
    (first..=last).collect()
}

/// Tab to highlight for a set of visible pages: the lowest valid index.
pub fn tab_for_visible_pages(pages: &[usize]) -> Option<usize> {
    pages.iter().copied().filter(|&p| p < Category::COUNT).min()
}

/// State of one picker instance.
#[derive(Debug)]
pub struct PickerState {
    lifetime: Lifetime,
    next_seq: u64,
    mounted: bool,

    recents: RecentsState,
    recents_ticket: Option<Ticket>,

    availability: AvailabilityCache,
    pending_filters: HashMap<Category, Ticket>,

    selected_tab: usize,
    visible_pages: BTreeSet<usize>,
    grids: Vec<CategoryGrid>,

    scroll_duration: Duration,
}

impl PickerState {
    pub fn new(config: &PickerConfig) -> Self {
        let initial = config.initial_category.index();
        Self {
            lifetime: Lifetime::new(),
            next_seq: 0,
            mounted: false,
            recents: RecentsState::Loading {
                selected: Vec::new(),
            },
            recents_ticket: None,
            availability: AvailabilityCache::new(),
            pending_filters: HashMap::new(),
            selected_tab: initial,
            visible_pages: BTreeSet::from([initial]),
            grids: Category::ALL
                .iter()
                .map(|_| CategoryGrid::new(config.columns(), config.rows()))
                .collect(),
            scroll_duration: config.scroll_duration(),
        }
    }

    // ========== Queries ==========

    pub fn selected_tab(&self) -> usize {
        self.selected_tab
    }

    pub fn selected_category(&self) -> Category {
        Category::from_index(self.selected_tab).unwrap_or_default()
    }

    pub fn visible_pages(&self) -> &BTreeSet<usize> {
        &self.visible_pages
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn is_disposed(&self) -> bool {
        !self.lifetime.is_alive()
    }

    pub fn is_loading_recents(&self) -> bool {
        matches!(self.recents, RecentsState::Loading { .. })
    }

    /// The loaded recent list, `None` while loading.
    pub fn recents(&self) -> Option<&RecentList> {
        match &self.recents {
            RecentsState::Ready(list) => Some(list),
            RecentsState::Loading { .. } => None,
        }
    }

    pub fn availability(&self) -> &AvailabilityCache {
        &self.availability
    }

    pub fn is_filter_pending(&self, category: Category) -> bool {
        self.pending_filters.contains_key(&category)
    }

    /// Whether the entries shown for `category` have been availability
    /// filtered. Recent is never filtered.
    pub fn is_filtered(&self, category: Category) -> bool {
        category.has_table() && self.availability.contains(category)
    }

    /// Entries drawn for a category: the cached filtered map when present,
    /// otherwise the unfiltered catalog map.
    pub fn entries(&self, catalog: &Catalog, category: Category) -> Vec<Emoji> {
        if category == Category::Recent {
            return self
                .recents()
                .map(|l| l.as_slice().to_vec())
                .unwrap_or_default();
        }
        let map = self
            .availability
            .get(category)
            .or_else(|| catalog.get(category));
        map.map(|m| m.iter().map(|(n, g)| Emoji::new(n.as_str(), g.as_str())).collect())
            .unwrap_or_default()
    }

    fn entries_len(&self, catalog: &Catalog, category: Category) -> usize {
        match category {
            Category::Recent => self.recents().map_or(0, RecentList::len),
            _ => self
                .availability
                .get(category)
                .or_else(|| catalog.get(category))
                .map_or(0, |m| m.len()),
        }
    }

    pub fn grid(&self, category: Category) -> &CategoryGrid {
        &self.grids[category.index()]
    }

    fn sync_grid(&mut self, catalog: &Catalog, category: Category) -> &mut CategoryGrid {
        let len = self.entries_len(catalog, category);
        let grid = &mut self.grids[category.index()];
        grid.set_len(len);
        grid
    }

    fn issue_ticket(&mut self) -> Ticket {
        self.next_seq += 1;
        self.lifetime.ticket(self.next_seq)
    }

    fn request_filter(&mut self, category: Category) -> Option<Effect> {
        if !category.has_table()
            || self.availability.contains(category)
            || self.pending_filters.contains_key(&category)
        {
            return None;
        }
        let ticket = self.issue_ticket();
        self.pending_filters.insert(category, ticket.clone());
        Some(Effect::FilterCategory { ticket, category })
    }

    // ========== Transitions ==========

    /// Apply an event and return the effects the front end must carry out.
    pub fn update(&mut self, catalog: &Catalog, event: PickerEvent) -> Vec<Effect> {
        if self.is_disposed() {
            tracing::debug!(?event, "event after dispose ignored");
            return Vec::new();
        }

        match event {
            PickerEvent::Mounted => self.on_mounted(),
            PickerEvent::RecentsLoaded { ticket, emojis } => {
                self.on_recents_loaded(catalog, ticket, emojis);
                Vec::new()
            }
            PickerEvent::VisiblePagesChanged(pages) => self.on_visible_pages(pages),
            PickerEvent::TabTapped(index) => self.on_tab_tapped(index),
            PickerEvent::CategoryShown(category) => self.request_filter(category).into_iter().collect(),
            PickerEvent::CategoryFiltered {
                ticket,
                category,
                map,
            } => {
                self.on_category_filtered(catalog, ticket, category, map);
                Vec::new()
            }
            PickerEvent::EmojiTapped(emoji) => self.select(emoji),
            PickerEvent::GridScrolled { category, row } => {
                self.sync_grid(catalog, category).scroll_to_row(row);
                Vec::new()
            }
            PickerEvent::Key(key) => self.on_key(catalog, key),
            PickerEvent::Disposed => {
                self.lifetime.end();
                self.pending_filters.clear();
                self.recents_ticket = None;
                tracing::debug!(picker = self.lifetime.id, "picker disposed");
                Vec::new()
            }
        }
    }

    fn on_mounted(&mut self) -> Vec<Effect> {
        if self.mounted {
            return Vec::new();
        }
        self.mounted = true;

        let ticket = self.issue_ticket();
        self.recents_ticket = Some(ticket.clone());
        let mut effects = vec![Effect::LoadRecents(ticket)];

        let initial = self.selected_category();
        effects.extend(self.request_filter(initial));
        if initial != Category::Recent {
            effects.push(Effect::AnimateToPage {
                page: initial.index(),
                duration: Duration::ZERO,
            });
        }
        effects
    }

    fn on_recents_loaded(&mut self, catalog: &Catalog, ticket: Ticket, emojis: Vec<Emoji>) {
        if self.recents_ticket.as_ref() != Some(&ticket) {
            tracing::debug!("stale recent emoji result discarded");
            return;
        }
        self.recents_ticket = None;

        let mut list = RecentList::from_emojis(emojis);
        if let RecentsState::Loading { selected } = &mut self.recents {
            for emoji in selected.drain(..) {
                list.record(emoji);
            }
        }
        self.recents = RecentsState::Ready(list);
        self.sync_grid(catalog, Category::Recent);
    }

    fn on_visible_pages(&mut self, pages: Vec<usize>) -> Vec<Effect> {
        let Some(lowest) = tab_for_visible_pages(&pages) else {
            return Vec::new();
        };
        self.selected_tab = lowest;
        let pages: BTreeSet<usize> = pages.into_iter().filter(|&p| p < Category::COUNT).collect();
        let effects = pages
            .iter()
            .filter_map(|&p| Category::from_index(p))
            .filter_map(|c| self.request_filter(c))
            .collect::<Vec<_>>();
        self.visible_pages = pages;
        effects
    }

    fn on_tab_tapped(&mut self, index: usize) -> Vec<Effect> {
        let Some(category) = Category::from_index(index) else {
            tracing::debug!(index, "tap on unknown tab ignored");
            return Vec::new();
        };
        let mut effects: Vec<Effect> = self.request_filter(category).into_iter().collect();
        effects.push(Effect::AnimateToPage {
            page: index,
            duration: self.scroll_duration,
        });
        effects
    }

    fn on_category_filtered(
        &mut self,
        catalog: &Catalog,
        ticket: Ticket,
        category: Category,
        map: EmojiMap,
    ) {
        if self.pending_filters.get(&category) != Some(&ticket) {
            tracing::debug!(?category, "stale availability result discarded");
            return;
        }
        self.pending_filters.remove(&category);

        // keep only catalog entries, with catalog glyphs
        let filtered: EmojiMap = match catalog.get(category) {
            Some(source) => source
                .iter()
                .filter(|(name, _)| map.contains_key(name.as_str()))
                .map(|(n, g)| (n.clone(), g.clone()))
                .collect(),
            None => EmojiMap::new(),
        };
        if let Some(source) = catalog.get(category) {
            let hidden = source.len() - filtered.len();
            if hidden > 0 {
                tracing::debug!(?category, hidden, "unrenderable glyphs hidden");
            }
        }
        self.availability.insert(category, filtered);
        self.sync_grid(catalog, category);
    }

    fn select(&mut self, emoji: Emoji) -> Vec<Effect> {
        match &mut self.recents {
            RecentsState::Ready(list) => list.record(emoji.clone()),
            RecentsState::Loading { selected } => selected.push(emoji.clone()),
        }
        vec![Effect::EmojiSelected(emoji.clone()), Effect::RecordRecent(emoji)]
    }

    fn on_key(&mut self, catalog: &Catalog, key: KeyEvent) -> Vec<Effect> {
        let category = self.selected_category();
        match key {
            KeyEvent::Tab => self.on_tab_tapped(category.next().index()),
            KeyEvent::BackTab => self.on_tab_tapped(category.prev().index()),
            KeyEvent::Digit(n @ 1..=9) => self.on_tab_tapped(n as usize - 1),
            KeyEvent::Digit(_) => Vec::new(),
            KeyEvent::Enter => {
                let Some(index) = self.sync_grid(catalog, category).cursor() else {
                    return Vec::new();
                };
                match self.entries(catalog, category).into_iter().nth(index) {
                    Some(emoji) => self.select(emoji),
                    None => Vec::new(),
                }
            }
            KeyEvent::Left
            | KeyEvent::Right
            | KeyEvent::Up
            | KeyEvent::Down
            | KeyEvent::PageUp
            | KeyEvent::PageDown => {
                let grid = self.sync_grid(catalog, category);
                match key {
                    KeyEvent::Left => grid.cursor_left(),
                    KeyEvent::Right => grid.cursor_right(),
                    KeyEvent::Up => grid.cursor_up(),
                    KeyEvent::Down => grid.cursor_down(),
                    KeyEvent::PageUp => grid.page_up(),
                    _ => grid.page_down(),
                };
                Vec::new()
            }
        }
    }
}
