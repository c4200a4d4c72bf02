//! emojipicker-core
//!
//! Catalog, glyph availability, recent-emoji persistence and the headless
//! picker shared by the font backend and the `emojipicker` front end.
//!
//! Public API:
//! - `Catalog` - Built-in category tables (name → glyph, ordered)
//! - `GlyphOracle` - Platform glyph capability, with passthrough fallback
//! - `RecentStore` - Most-recent-first list persisted in redb preferences
//! - `PickerState` - Event/effect state machine for one picker
//! - `PickerRuntime` - Executes picker effects and renders `PickerFrame`s
//! - `PickerConfig` - Caller options, loadable from TOML

pub mod emoji;
pub use emoji::{Emoji, EmojiMap};

pub mod category;
pub use category::Category;

mod tables;

pub mod catalog;
pub use catalog::Catalog;

pub mod oracle;
pub use oracle::{filter_available, glyph_available, GlyphOracle, OracleError, Passthrough};

pub mod channel;
pub use channel::{
    handle_method_call, serve_lines, ChannelOracle, InProcess, LineTransport, MethodCall,
    MethodResponse, Transport,
};

pub mod storage;
pub use storage::{Preferences, StorageError};

pub mod recent;
pub use recent::{RecentList, RecentSource, RecentStore, RECENT_CAPACITY, RECENT_KEY};

pub mod availability;
pub use availability::AvailabilityCache;

pub mod config;
pub use config::{Color, ConfigError, PickerConfig};

pub mod grid;
pub use grid::CategoryGrid;

// Picker modules
pub mod picker;
pub use picker::{visible_pages, Effect, KeyEvent, PickerEvent, PickerState, Ticket};

pub mod view;
pub use view::{PickerFrame, PickerLayout, PickerView};

pub mod runtime;
pub use runtime::{ExecutionMode, PickerRuntime};

/// Utility helpers.
pub mod utils {
    use unicode_normalization::UnicodeNormalization;

    /// Normalize input strings (NFC) and trim whitespace.
    pub fn normalize(s: &str) -> String {
        s.nfc().collect::<String>().trim().to_string()
    }

    /// Normalize an emoji name or search keyword: NFC, trimmed, lowercase.
    pub fn normalize_name(s: &str) -> String {
        normalize(s).to_lowercase()
    }

}
