//! Glyph availability oracle.
//!
//! A `GlyphOracle` answers whether the current font stack can render a glyph.
//! Callers go through [`filter_available`] and [`glyph_available`], which
//! degrade to "treat as available" when the oracle fails: a boundary failure
//! is logged, never surfaced, and never retried.

use crate::emoji::EmojiMap;
use std::sync::Arc;
use thiserror::Error;

/// Failure talking to the glyph capability.
#[derive(Debug, Error)]
pub enum OracleError {
    /// The boundary (host capability, transport, font system) failed.
    #[error("glyph capability failed: {0}")]
    Boundary(String),

    /// The other side does not implement the requested method.
    #[error("method not implemented: {0}")]
    NotImplemented(String),

    /// A reply could not be decoded.
    #[error("malformed reply: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// The two operations of the platform glyph capability.
pub trait GlyphOracle {
    /// Whether a single glyph can be rendered.
    fn is_available(&self, glyph: &str) -> Result<bool, OracleError>;

    /// The subset of `candidates` whose glyphs can be rendered.
    ///
    /// Keys and input order are preserved.
    fn check_availability(&self, candidates: &EmojiMap) -> Result<EmojiMap, OracleError> {
        let mut out = EmojiMap::with_capacity(candidates.len());
        for (name, glyph) in candidates {
            if self.is_available(glyph)? {
                out.insert(name.clone(), glyph.clone());
            }
        }
        Ok(out)
    }
}

impl<T: GlyphOracle + ?Sized> GlyphOracle for Box<T> {
    fn is_available(&self, glyph: &str) -> Result<bool, OracleError> {
        (**self).is_available(glyph)
    }

    fn check_availability(&self, candidates: &EmojiMap) -> Result<EmojiMap, OracleError> {
        (**self).check_availability(candidates)
    }
}

impl<T: GlyphOracle + ?Sized> GlyphOracle for Arc<T> {
    fn is_available(&self, glyph: &str) -> Result<bool, OracleError> {
        (**self).is_available(glyph)
    }

    fn check_availability(&self, candidates: &EmojiMap) -> Result<EmojiMap, OracleError> {
        (**self).check_availability(candidates)
    }
}

impl<T: GlyphOracle + ?Sized> GlyphOracle for &T {
    fn is_available(&self, glyph: &str) -> Result<bool, OracleError> {
        (**self).is_available(glyph)
    }

    fn check_availability(&self, candidates: &EmojiMap) -> Result<EmojiMap, OracleError> {
        (**self).check_availability(candidates)
    }
}

/// Oracle for targets without a native glyph capability: everything renders.
#[derive(Debug, Clone, Copy, Default)]
pub struct Passthrough;

impl GlyphOracle for Passthrough {
    fn is_available(&self, _glyph: &str) -> Result<bool, OracleError> {
        Ok(true)
    }

    fn check_availability(&self, candidates: &EmojiMap) -> Result<EmojiMap, OracleError> {
        Ok(candidates.clone())
    }
}

/// Filter `candidates` down to the glyphs the oracle can render.
///
/// On oracle failure the input is returned unchanged. The result is always a
/// subset of the input with the input's glyph values, in input order.
pub fn filter_available<O: GlyphOracle + ?Sized>(oracle: &O, candidates: &EmojiMap) -> EmojiMap {
    match oracle.check_availability(candidates) {
        Ok(available) => candidates
            .iter()
            .filter(|(name, _)| available.contains_key(name.as_str()))
            .map(|(name, glyph)| (name.clone(), glyph.clone()))
            .collect(),
        Err(e) => {
            tracing::warn!(error = %e, count = candidates.len(), "glyph availability check failed, showing all");
            candidates.clone()
        }
    }
}

/// Whether a single glyph renders; `true` when the oracle fails.
pub fn glyph_available<O: GlyphOracle + ?Sized>(oracle: &O, glyph: &str) -> bool {
    match oracle.is_available(glyph) {
        Ok(available) => available,
        Err(e) => {
            tracing::warn!(error = %e, glyph, "glyph availability check failed, assuming available");
            true
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::Cell;

    /// Oracle that rejects a fixed set of glyphs.
    pub(crate) struct DenyList(pub Vec<&'static str>);

    impl GlyphOracle for DenyList {
        fn is_available(&self, glyph: &str) -> Result<bool, OracleError> {
            Ok(!self.0.contains(&glyph))
        }
    }

    /// Oracle whose boundary always fails.
    pub(crate) struct Broken;

    impl GlyphOracle for Broken {
        fn is_available(&self, _glyph: &str) -> Result<bool, OracleError> {
            Err(OracleError::Boundary("host went away".into()))
        }
    }

    fn sample() -> EmojiMap {
        [("a", "😀"), ("b", "🫠"), ("c", "🐶")]
            .into_iter()
            .map(|(n, g)| (n.to_string(), g.to_string()))
            .collect()
    }

    #[test]
    fn passthrough_is_identity() {
        assert_eq!(filter_available(&Passthrough, &sample()), sample());
        assert!(glyph_available(&Passthrough, "🫠"));
    }

    #[test]
    fn deny_list_filters_and_keeps_order() {
        let out = filter_available(&DenyList(vec!["🫠"]), &sample());
        let keys: Vec<_> = out.keys().cloned().collect();
        assert_eq!(keys, vec!["a", "c"]);
        assert_eq!(out["c"], "🐶");
    }

    #[test]
    fn failure_degrades_to_identity() {
        assert_eq!(filter_available(&Broken, &sample()), sample());
        assert!(glyph_available(&Broken, "😀"));
    }

    #[test]
    fn filter_is_idempotent() {
        let oracle = DenyList(vec!["😀"]);
        let once = filter_available(&oracle, &sample());
        let twice = filter_available(&oracle, &sample());
        assert_eq!(once, twice);
        assert_eq!(filter_available(&oracle, &once), once);
    }

    #[test]
    fn misbehaving_oracle_cannot_add_or_rewrite_entries() {
        struct Liar;
        impl GlyphOracle for Liar {
            fn is_available(&self, _glyph: &str) -> Result<bool, OracleError> {
                Ok(true)
            }
            fn check_availability(&self, _c: &EmojiMap) -> Result<EmojiMap, OracleError> {
                let mut m = EmojiMap::new();
                m.insert("a".into(), "💥".into());
                m.insert("zzz".into(), "💤".into());
                Ok(m)
            }
        }
        let out = filter_available(&Liar, &sample());
        assert_eq!(out.len(), 1);
        assert_eq!(out["a"], "😀");
    }

    #[test]
    fn default_bulk_check_stops_on_first_error() {
        struct FailsSecond(Cell<usize>);
        impl GlyphOracle for FailsSecond {
            fn is_available(&self, _glyph: &str) -> Result<bool, OracleError> {
                let n = self.0.get();
                self.0.set(n + 1);
                if n == 1 {
                    Err(OracleError::Boundary("flaky".into()))
                } else {
                    Ok(true)
                }
            }
        }
        let oracle = FailsSecond(Cell::new(0));
        assert!(oracle.check_availability(&sample()).is_err());
        assert_eq!(filter_available(&oracle, &sample()).len(), 3);
    }

    #[test]
    fn every_builtin_category_filters_to_a_subset() {
        // rejects sequences: ZWJ emoji, keycaps, flags
        struct SingleScalarOnly;
        impl GlyphOracle for SingleScalarOnly {
            fn is_available(&self, glyph: &str) -> Result<bool, OracleError> {
                Ok(glyph.chars().count() == 1)
            }
        }

        let catalog = crate::catalog::Catalog::builtin();
        let mut rejected = 0;
        for category in crate::category::Category::content() {
            let candidates = catalog.get(category).unwrap();
            let once = filter_available(&SingleScalarOnly, candidates);
            for (name, glyph) in &once {
                assert_eq!(candidates.get(name), Some(glyph), "{} in {}", name, category);
            }
            assert_eq!(filter_available(&SingleScalarOnly, &once), once);
            assert_eq!(filter_available(&SingleScalarOnly, candidates), once);
            rejected += candidates.len() - once.len();
        }
        assert!(rejected > 0);
    }
}
