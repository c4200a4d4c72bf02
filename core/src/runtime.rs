//! Synchronous effect executor for a picker.
//!
//! `PickerRuntime` owns a [`PickerState`], carries out its effects against a
//! glyph oracle and a recent-emoji source, and feeds the results back in. It
//! also stands in for the horizontal pager: `AnimateToPage` moves a simulated
//! viewport and reports the newly visible pages.

use crate::catalog::Catalog;
use crate::category::Category;
use crate::config::PickerConfig;
use crate::emoji::{Emoji, EmojiMap};
use crate::oracle::{filter_available, GlyphOracle};
use crate::picker::{visible_pages, Effect, KeyEvent, PickerEvent, PickerState};
use crate::recent::RecentSource;
use crate::view::{PickerFrame, PickerView};
use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;

/// Default render width in logical pixels.
pub const DEFAULT_WIDTH: f32 = 350.0;

/// When effects run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionMode {
    /// Run each effect as soon as it is produced.
    #[default]
    Immediate,
    /// Queue effects until [`PickerRuntime::run_pending`].
    Deferred,
}

pub type SelectionCallback = Box<dyn FnMut(&Emoji)>;

pub struct PickerRuntime<O, S> {
    catalog: Arc<Catalog>,
    oracle: O,
    store: S,
    state: PickerState,
    view: PickerView,
    on_selected: SelectionCallback,
    mode: ExecutionMode,
    queue: VecDeque<Effect>,
    /// Pager scroll offset, in pages
    offset: f32,
}

impl<O, S> fmt::Debug for PickerRuntime<O, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PickerRuntime")
            .field("state", &self.state)
            .field("mode", &self.mode)
            .field("queued", &self.queue.len())
            .field("offset", &self.offset)
            .finish_non_exhaustive()
    }
}

impl<O: GlyphOracle, S: RecentSource> PickerRuntime<O, S> {
    pub fn new<F>(
        catalog: Arc<Catalog>,
        oracle: O,
        store: S,
        config: PickerConfig,
        on_selected: F,
    ) -> Self
    where
        F: FnMut(&Emoji) + 'static,
    {
        let state = PickerState::new(&config);
        let offset = state.selected_tab() as f32;
        Self {
            catalog,
            oracle,
            store,
            state,
            view: PickerView::new(config, DEFAULT_WIDTH),
            on_selected: Box::new(on_selected),
            mode: ExecutionMode::Immediate,
            queue: VecDeque::new(),
            offset,
        }
    }

    pub fn with_mode(mut self, mode: ExecutionMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_width(mut self, width: f32) -> Self {
        self.view.set_width(width);
        self
    }

    pub fn state(&self) -> &PickerState {
        &self.state
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Effects waiting for [`run_pending`](Self::run_pending).
    pub fn pending(&self) -> &VecDeque<Effect> {
        &self.queue
    }

    pub fn render(&self) -> PickerFrame {
        self.view.render(&self.state, &self.catalog)
    }

    /// Feed an event and run (or queue) whatever it produces.
    pub fn dispatch(&mut self, event: PickerEvent) {
        let mut events = VecDeque::from([event]);
        while let Some(event) = events.pop_front() {
            let effects = self.state.update(&self.catalog, event);
            match self.mode {
                ExecutionMode::Immediate => {
                    for effect in effects {
                        events.extend(self.execute(effect));
                    }
                }
                ExecutionMode::Deferred => self.queue.extend(effects),
            }
        }
    }

    /// Run queued effects, including any they cause. Returns how many ran.
    pub fn run_pending(&mut self) -> usize {
        let mut ran = 0;
        while let Some(effect) = self.queue.pop_front() {
            ran += 1;
            for event in self.execute(effect) {
                self.dispatch(event);
            }
        }
        ran
    }

    pub fn mount(&mut self) {
        self.dispatch(PickerEvent::Mounted);
    }

    pub fn tap_tab(&mut self, index: usize) {
        self.dispatch(PickerEvent::TabTapped(index));
    }

    pub fn tap(&mut self, emoji: Emoji) {
        self.dispatch(PickerEvent::EmojiTapped(emoji));
    }

    pub fn key(&mut self, key: KeyEvent) {
        self.dispatch(PickerEvent::Key(key));
    }

    /// Move the simulated pager, as a swipe would.
    pub fn scroll_to(&mut self, offset: f32) {
        self.offset = offset.clamp(0.0, (Category::COUNT - 1) as f32);
        let pages = visible_pages(self.offset, 1.0, 1.0, Category::COUNT);
        self.dispatch(PickerEvent::VisiblePagesChanged(pages.into_iter().collect()));
    }

    /// Tear the picker down.
    ///
    /// Queued loads and availability checks are dropped. Selections already
    /// made still reach the callback and the recent store.
    pub fn dispose(&mut self) {
        self.dispatch(PickerEvent::Disposed);
        let queued = std::mem::take(&mut self.queue);
        for effect in queued {
            if matches!(effect, Effect::EmojiSelected(_) | Effect::RecordRecent(_)) {
                self.execute(effect);
            }
        }
    }

    fn execute(&mut self, effect: Effect) -> Vec<PickerEvent> {
        match effect {
            Effect::LoadRecents(ticket) => {
                if !ticket.is_live() {
                    return Vec::new();
                }
                let emojis = self.store.load();
                vec![PickerEvent::RecentsLoaded { ticket, emojis }]
            }
            Effect::FilterCategory { ticket, category } => {
                if !ticket.is_live() {
                    return Vec::new();
                }
                let map = match self.catalog.get(category) {
                    Some(candidates) => filter_available(&self.oracle, candidates),
                    None => EmojiMap::new(),
                };
                vec![PickerEvent::CategoryFiltered {
                    ticket,
                    category,
                    map,
                }]
            }
            Effect::AnimateToPage { page, duration } => {
                tracing::trace!(page, ?duration, "animating pager");
                self.offset = page.min(Category::COUNT - 1) as f32;
                let pages = visible_pages(self.offset, 1.0, 1.0, Category::COUNT);
                vec![PickerEvent::VisiblePagesChanged(pages.into_iter().collect())]
            }
            Effect::EmojiSelected(emoji) => {
                (self.on_selected)(&emoji);
                Vec::new()
            }
            Effect::RecordRecent(emoji) => {
                self.store.add(emoji);
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::tests::DenyList;
    use crate::oracle::Passthrough;
    use crate::recent::RecentStore;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn runtime(
        mode: ExecutionMode,
    ) -> (PickerRuntime<DenyList, RecentStore>, Rc<RefCell<Vec<Emoji>>>) {
        let selected = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&selected);
        let rt = PickerRuntime::new(
            Catalog::builtin(),
            DenyList(vec!["🍇"]),
            RecentStore::in_memory(),
            PickerConfig::default(),
            move |e: &Emoji| sink.borrow_mut().push(e.clone()),
        )
        .with_mode(mode);
        (rt, selected)
    }

    #[test]
    fn immediate_tab_tap_filters_and_moves_indicator() {
        let (mut rt, _) = runtime(ExecutionMode::Immediate);
        rt.mount();
        assert!(!rt.state().is_loading_recents());

        rt.tap_tab(Category::Foods.index());
        assert_eq!(rt.state().selected_category(), Category::Foods);
        let frame = rt.render();
        assert!(frame.filtered);
        assert!(frame.cells().all(|c| c.glyph != "🍇"));
    }

    #[test]
    fn deferred_mode_exposes_loading_and_optimistic_states() {
        let (mut rt, _) = runtime(ExecutionMode::Deferred);
        rt.mount();
        assert!(rt.render().loading);
        assert_eq!(rt.pending().len(), 1);

        rt.run_pending();
        assert!(!rt.render().loading);

        // swipe onto Foods: filter queued but not run yet
        rt.scroll_to(Category::Foods.index() as f32);
        assert_eq!(rt.state().selected_category(), Category::Foods);
        assert!(!rt.render().filtered);
        assert!(rt.render().cells().any(|c| c.glyph == "🍇"));

        assert_eq!(rt.run_pending(), 1);
        assert!(rt.render().filtered);
        assert!(rt.render().cells().all(|c| c.glyph != "🍇"));
    }

    #[test]
    fn straddling_swipe_selects_lower_tab() {
        let (mut rt, _) = runtime(ExecutionMode::Immediate);
        rt.mount();
        rt.scroll_to(3.4);
        assert_eq!(rt.state().selected_tab(), 3);
        assert!(rt.state().availability().contains(Category::Foods));
        assert!(rt.state().availability().contains(Category::Travel));
    }

    #[test]
    fn selection_invokes_callback_and_records() {
        let (mut rt, selected) = runtime(ExecutionMode::Immediate);
        rt.mount();
        let e = Emoji::new("grinning face", "😀");
        rt.tap(e.clone());
        assert_eq!(selected.borrow().as_slice(), &[e.clone()]);
        assert_eq!(rt.store().load(), vec![e.clone()]);
        assert_eq!(rt.state().recents().unwrap().first(), Some(&e));
    }

    #[test]
    fn dispose_flushes_selections_and_drops_loads() {
        let (mut rt, selected) = runtime(ExecutionMode::Deferred);
        rt.mount();
        rt.scroll_to(Category::Foods.index() as f32);
        let e = Emoji::new("grinning face", "😀");
        rt.tap(e.clone());
        rt.dispose();

        assert_eq!(selected.borrow().as_slice(), &[e.clone()]);
        assert_eq!(rt.store().load(), vec![e]);
        assert_eq!(rt.run_pending(), 0);
        // filter and recent load never completed
        assert!(rt.state().is_loading_recents());
        assert!(!rt.state().availability().contains(Category::Foods));
        assert!(rt.state().is_disposed());
        rt.tap_tab(2);
        assert!(rt.pending().is_empty());
    }

    #[test]
    fn passthrough_keeps_every_entry() {
        let mut rt = PickerRuntime::new(
            Catalog::builtin(),
            Passthrough,
            RecentStore::in_memory(),
            PickerConfig::default(),
            |_: &Emoji| {},
        );
        rt.mount();
        rt.tap_tab(Category::Flags.index());
        let filtered = rt.state().availability().get(Category::Flags).unwrap();
        assert_eq!(filtered, rt.catalog().get(Category::Flags).unwrap());
    }
}
