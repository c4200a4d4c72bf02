// core/tests/picker_flow.rs
//
// End-to-end picker behaviour through the public API:
// - selection reaches the callback and survives a restart via redb
// - oracle failures degrade to showing everything
// - late completions after dispose are ignored
// - the tab indicator follows the lowest visible page

use emojipicker_core::{
    visible_pages, Catalog, Category, ChannelOracle, Effect, Emoji, EmojiMap, ExecutionMode,
    GlyphOracle, KeyEvent, MethodCall, MethodResponse, OracleError, Passthrough, PickerConfig,
    PickerEvent, PickerRuntime, PickerState, Preferences, RecentStore, Transport,
};
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

fn temp_db(tag: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "emojipicker_it_{}_{}.redb",
        tag,
        std::process::id()
    ))
}

struct DeadHost;

impl Transport for DeadHost {
    fn invoke(&self, _call: &MethodCall) -> Result<MethodResponse, OracleError> {
        Err(OracleError::Boundary("host detached".into()))
    }
}

struct NoEmojiFont;

impl GlyphOracle for NoEmojiFont {
    fn is_available(&self, _glyph: &str) -> Result<bool, OracleError> {
        Ok(false)
    }
}

#[test]
fn selection_is_reported_and_first_after_restart() {
    let path = temp_db("restart");
    let _ = std::fs::remove_file(&path);
    let grinning = Emoji::new("grinning face", "😀");

    {
        let picked = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&picked);
        let store = RecentStore::new(Preferences::new_redb(&path).unwrap());
        let mut rt = PickerRuntime::new(
            Catalog::builtin(),
            Passthrough,
            store,
            PickerConfig::default(),
            move |e: &Emoji| sink.borrow_mut().push(e.clone()),
        );
        rt.mount();
        rt.tap_tab(Category::Smileys.index());
        rt.key(KeyEvent::Enter);
        assert_eq!(picked.borrow().as_slice(), &[grinning.clone()]);
        rt.dispose();
    }

    let store = RecentStore::new(Preferences::new_redb(&path).unwrap());
    let mut rt = PickerRuntime::new(
        Catalog::builtin(),
        Passthrough,
        store,
        PickerConfig::default(),
        |_: &Emoji| {},
    );
    rt.mount();
    assert_eq!(rt.state().recents().unwrap().first(), Some(&grinning));

    let frame = rt.render();
    assert_eq!(frame.category, Category::Recent);
    assert!(frame.placeholder.is_none());
    assert_eq!(frame.rows[0][0].glyph, "😀");

    drop(rt);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn dead_boundary_shows_unfiltered_catalog() {
    let catalog = Catalog::builtin();
    let mut rt = PickerRuntime::new(
        catalog.clone(),
        ChannelOracle::new(DeadHost),
        RecentStore::in_memory(),
        PickerConfig::default(),
        |_: &Emoji| {},
    );
    rt.mount();
    rt.tap_tab(Category::Animals.index());

    let shown = rt.state().availability().get(Category::Animals).unwrap();
    assert_eq!(shown, catalog.get(Category::Animals).unwrap());
    assert!(rt.render().filtered);
}

#[test]
fn recent_page_is_not_availability_filtered() {
    let store = RecentStore::in_memory();
    store.add(Emoji::new("melting face", "🫠"));

    let mut rt = PickerRuntime::new(
        Catalog::builtin(),
        NoEmojiFont,
        store,
        PickerConfig::default(),
        |_: &Emoji| {},
    );
    rt.mount();
    let frame = rt.render();
    assert!(!frame.filtered);
    assert_eq!(frame.cells().count(), 1);

    rt.tap_tab(Category::Flags.index());
    let frame = rt.render();
    assert_eq!(frame.category, Category::Flags);
    assert_eq!(frame.entry_count, 0);
}

#[test]
fn completions_after_dispose_do_not_touch_state() {
    let catalog = Catalog::builtin();
    let mut state = PickerState::new(&PickerConfig::default());
    let effects = state.update(&catalog, PickerEvent::Mounted);
    let Effect::LoadRecents(ticket) = effects[0].clone() else {
        panic!("expected LoadRecents first, got {:?}", effects);
    };
    let effects = state.update(&catalog, PickerEvent::TabTapped(Category::Foods.index()));
    let filter = effects
        .iter()
        .find_map(|e| match e {
            Effect::FilterCategory { ticket, .. } => Some(ticket.clone()),
            _ => None,
        })
        .unwrap();

    state.update(&catalog, PickerEvent::Disposed);

    let effects = state.update(
        &catalog,
        PickerEvent::RecentsLoaded {
            ticket,
            emojis: vec![Emoji::new("pizza", "🍕")],
        },
    );
    assert!(effects.is_empty());
    let effects = state.update(
        &catalog,
        PickerEvent::CategoryFiltered {
            ticket: filter,
            category: Category::Foods,
            map: EmojiMap::new(),
        },
    );
    assert!(effects.is_empty());
    assert!(state.recents().is_none());
    assert!(!state.availability().contains(Category::Foods));
}

#[test]
fn deferred_selection_survives_dispose() {
    let picked = Rc::new(RefCell::new(0usize));
    let sink = Rc::clone(&picked);
    let store = RecentStore::in_memory();
    let mut rt = PickerRuntime::new(
        Catalog::builtin(),
        Passthrough,
        store.clone(),
        PickerConfig::default(),
        move |_: &Emoji| *sink.borrow_mut() += 1,
    )
    .with_mode(ExecutionMode::Deferred);

    rt.mount();
    rt.run_pending();
    rt.tap(Emoji::new("grinning face", "😀"));
    assert!(!rt.pending().is_empty());
    rt.dispose();

    assert_eq!(rt.run_pending(), 0);
    assert_eq!(*picked.borrow(), 1);
    assert_eq!(store.load(), vec![Emoji::new("grinning face", "😀")]);
}

#[test]
fn tickets_do_not_cross_instances() {
    let catalog = Catalog::builtin();
    let mut a = PickerState::new(&PickerConfig::default());
    let mut b = PickerState::new(&PickerConfig::default());
    a.update(&catalog, PickerEvent::Mounted);
    let Effect::LoadRecents(b_ticket) = b.update(&catalog, PickerEvent::Mounted).remove(0) else {
        panic!("expected LoadRecents");
    };

    a.update(
        &catalog,
        PickerEvent::RecentsLoaded {
            ticket: b_ticket,
            emojis: vec![],
        },
    );
    assert!(a.is_loading_recents());
}

#[test]
fn indicator_tracks_lowest_visible_page_while_swiping() {
    let mut rt = PickerRuntime::new(
        Catalog::builtin(),
        Passthrough,
        RecentStore::in_memory(),
        PickerConfig::default(),
        |_: &Emoji| {},
    );
    rt.mount();
    for step in 0..=32 {
        let offset = step as f32 * 0.25;
        rt.scroll_to(offset);
        let lowest = *visible_pages(offset, 1.0, 1.0, Category::COUNT)
            .iter()
            .next()
            .unwrap();
        assert_eq!(rt.state().selected_tab(), lowest);
        assert_eq!(rt.state().selected_tab(), offset.floor() as usize);
    }
}
