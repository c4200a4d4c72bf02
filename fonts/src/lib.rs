//! emojipicker-fonts
//!
//! Native glyph availability for emojipicker. On desktop targets glyphs are
//! shaped against the system font stack with cosmic-text; targets without a
//! font system get the passthrough oracle, which treats everything as
//! renderable.

#[cfg(not(target_arch = "wasm32"))]
mod font;
#[cfg(not(target_arch = "wasm32"))]
pub use font::{FontOracle, GlyphShape};

use emojipicker_core::{GlyphOracle, Passthrough, PickerConfig};

/// Best glyph oracle for the current target.
#[cfg(not(target_arch = "wasm32"))]
pub fn platform_oracle(config: &PickerConfig) -> Box<dyn GlyphOracle> {
    let oracle = FontOracle::new(&config.font_families);
    if oracle.face_count() == 0 {
        tracing::warn!("no system fonts found, glyph filtering disabled");
        return Box::new(Passthrough);
    }
    Box::new(oracle)
}

/// Best glyph oracle for the current target.
#[cfg(target_arch = "wasm32")]
pub fn platform_oracle(_config: &PickerConfig) -> Box<dyn GlyphOracle> {
    tracing::info!("no native glyph capability on this target, using passthrough");
    Box::new(Passthrough)
}

/// Oracle that never filters, for callers that opt out of glyph checks.
pub fn passthrough_oracle() -> Box<dyn GlyphOracle> {
    Box::new(Passthrough)
}

#[cfg(test)]
mod tests {
    use super::*;
    use emojipicker_core::{filter_available, Catalog, Category};

    #[test]
    fn passthrough_oracle_keeps_catalog_intact() {
        let catalog = Catalog::builtin();
        let oracle = passthrough_oracle();
        let flags = catalog.get(Category::Flags).unwrap();
        assert_eq!(&filter_available(&oracle, flags), flags);
    }

    #[test]
    #[ignore = "needs system fonts"]
    fn platform_oracle_filters_to_a_subset() {
        let catalog = Catalog::builtin();
        let oracle = platform_oracle(&PickerConfig::default());
        let smileys = catalog.get(Category::Smileys).unwrap();
        let filtered = filter_available(&oracle, smileys);
        assert!(filtered.len() <= smileys.len());
        assert!(filtered.keys().all(|k| smileys.contains_key(k)));
    }
}
