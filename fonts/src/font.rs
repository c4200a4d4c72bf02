//! Glyph oracle that shapes each glyph with cosmic-text.

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping};
use emojipicker_core::{EmojiMap, GlyphOracle, OracleError};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::{Mutex, MutexGuard};

const SHAPE_FONT_SIZE: f32 = 32.0;

/// Outcome of shaping one glyph string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GlyphShape {
    /// Glyphs produced by shaping
    pub glyphs: usize,
    /// Glyphs that resolved to `.notdef` (glyph id 0)
    pub missing: usize,
    /// Glyphs with a non-zero advance
    pub advancing: usize,
}

impl GlyphShape {
    /// A glyph renders when shaping produced no `.notdef` and collapsed to
    /// exactly one visible glyph. Unsupported ZWJ sequences and flags fall
    /// apart into several glyphs.
    pub fn renders(&self) -> bool {
        self.glyphs > 0 && self.missing == 0 && self.advancing == 1
    }
}

pub struct FontOracle {
    font_system: Mutex<FontSystem>,
    /// First configured family installed on this system
    family: Option<String>,
}

impl std::fmt::Debug for FontOracle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontOracle")
            .field("family", &self.family)
            .finish_non_exhaustive()
    }
}

impl FontOracle {
    /// Load system fonts and pick the first installed family of `families`.
    pub fn new<S: AsRef<str>>(families: &[S]) -> Self {
        let font_system = FontSystem::new();
        let family = families
            .iter()
            .map(AsRef::as_ref)
            .find(|want| has_family(&font_system, want))
            .map(str::to_string);

        match &family {
            Some(name) => tracing::info!(family = %name, "using emoji font"),
            None => tracing::warn!(
                faces = font_system.db().len(),
                "no preferred emoji font installed, relying on font fallback"
            ),
        }

        Self {
            font_system: Mutex::new(font_system),
            family,
        }
    }

    pub fn family(&self) -> Option<&str> {
        self.family.as_deref()
    }

    /// Number of font faces known to the font system.
    pub fn face_count(&self) -> usize {
        self.lock().map(|fs| fs.db().len()).unwrap_or(0)
    }

    fn lock(&self) -> Result<MutexGuard<'_, FontSystem>, OracleError> {
        self.font_system
            .lock()
            .map_err(|_| OracleError::Boundary("font system lock poisoned".into()))
    }

    /// Shape a glyph string and report what came out.
    pub fn shape(&self, glyph: &str) -> Result<GlyphShape, OracleError> {
        let mut font_system = self.lock()?;
        self.shape_locked(&mut font_system, glyph)
    }

    fn shape_locked(&self, font_system: &mut FontSystem, glyph: &str) -> Result<GlyphShape, OracleError> {
        // cosmic-text can panic inside shaping on unusual input
        catch_unwind(AssertUnwindSafe(|| {
            shape_glyph(font_system, glyph, self.family.as_deref())
        }))
        .map_err(|_| OracleError::Boundary(format!("text shaping panicked on {:?}", glyph)))
    }
}

impl GlyphOracle for FontOracle {
    fn is_available(&self, glyph: &str) -> Result<bool, OracleError> {
        Ok(self.shape(glyph)?.renders())
    }

    fn check_availability(&self, candidates: &EmojiMap) -> Result<EmojiMap, OracleError> {
        let mut font_system = self.lock()?;
        let mut out = EmojiMap::with_capacity(candidates.len());
        for (name, glyph) in candidates {
            if self.shape_locked(&mut font_system, glyph)?.renders() {
                out.insert(name.clone(), glyph.clone());
            }
        }
        tracing::debug!(
            total = candidates.len(),
            available = out.len(),
            "checked glyph availability"
        );
        Ok(out)
    }
}

fn has_family(font_system: &FontSystem, want: &str) -> bool {
    font_system
        .db()
        .faces()
        .any(|face| face.families.iter().any(|(name, _)| name.eq_ignore_ascii_case(want)))
}

fn shape_glyph(font_system: &mut FontSystem, glyph: &str, family: Option<&str>) -> GlyphShape {
    let metrics = Metrics::new(SHAPE_FONT_SIZE, SHAPE_FONT_SIZE * 1.2);
    let mut buffer = Buffer::new(font_system, metrics);
    buffer.set_size(font_system, Some(f32::MAX), Some(f32::MAX));

    let attrs = match family {
        Some(name) => Attrs::new().family(Family::Name(name)),
        None => Attrs::new().family(Family::SansSerif),
    };
    buffer.set_text(font_system, glyph, attrs, Shaping::Advanced);
    buffer.shape_until_scroll(font_system, false);

    let mut shape = GlyphShape::default();
    for run in buffer.layout_runs() {
        for g in run.glyphs.iter() {
            shape.glyphs += 1;
            if g.glyph_id == 0 {
                shape.missing += 1;
            }
            if g.w > 0.0 {
                shape.advancing += 1;
            }
        }
    }
    shape
}
