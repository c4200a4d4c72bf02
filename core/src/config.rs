//! Picker configuration.
//!
//! Every option has a default, so a TOML file only needs the keys it
//! changes:
//!
//! ```toml
//! columns = 8
//! indicator_color = "#FF9800"
//! empty_text = "Nothing yet"
//!
//! [icons]
//! flags = "🚩"
//! ```

use crate::category::Category;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("cannot serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// RGBA colour, written as `#RRGGBB` or `#RRGGBBAA`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b, a: 0xFF }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color { r, g, b, a }
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim().trim_start_matches('#');
        if !matches!(hex.len(), 6 | 8) || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(format!("invalid colour '{}', expected #RRGGBB or #RRGGBBAA", s));
        }
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|e| e.to_string());
        let a = if hex.len() == 8 { byte(6)? } else { 0xFF };
        Ok(Color::rgba(byte(0)?, byte(2)?, byte(4)?, a))
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Color> for String {
    fn from(c: Color) -> Self {
        c.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 0xFF {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

/// Style of the empty-state text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextStyle {
    pub font_size: f32,
    pub color: Color,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_size: 20.0,
            color: Color::rgba(0, 0, 0, 0x42),
        }
    }
}

/// Tab icon for each category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryIcons {
    pub recent: String,
    pub smileys: String,
    pub animals: String,
    pub foods: String,
    pub travel: String,
    pub activities: String,
    pub objects: String,
    pub symbols: String,
    pub flags: String,
}

impl CategoryIcons {
    pub fn get(&self, category: Category) -> &str {
        match category {
            Category::Recent => &self.recent,
            Category::Smileys => &self.smileys,
            Category::Animals => &self.animals,
            Category::Foods => &self.foods,
            Category::Travel => &self.travel,
            Category::Activities => &self.activities,
            Category::Objects => &self.objects,
            Category::Symbols => &self.symbols,
            Category::Flags => &self.flags,
        }
    }
}

impl Default for CategoryIcons {
    fn default() -> Self {
        let icon = |c: Category| c.default_icon().to_string();
        Self {
            recent: icon(Category::Recent),
            smileys: icon(Category::Smileys),
            animals: icon(Category::Animals),
            foods: icon(Category::Foods),
            travel: icon(Category::Travel),
            activities: icon(Category::Activities),
            objects: icon(Category::Objects),
            symbols: icon(Category::Symbols),
            flags: icon(Category::Flags),
        }
    }
}

/// Caller-supplied picker options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// Grid columns per category page
    pub columns: usize,
    /// Visible grid rows per category page
    pub rows: usize,

    pub background_color: Color,
    /// Colour of the selected-tab indicator
    pub indicator_color: Color,
    /// Colour of the loading indicator on the Recent page
    pub progress_color: Color,

    /// Text shown on the Recent page while it is empty or loading
    pub empty_text: String,

    pub icon_size: f32,

    /// Cell height as a multiple of cell width
    pub aspect_factor: f32,

    /// Preferred font families for glyph rendering, most preferred first
    pub font_families: Vec<String>,

    /// Duration of the page animation after a tab tap
    pub scroll_duration_ms: u64,

    /// Category shown when the picker opens
    pub initial_category: Category,

    // tables last so they serialize after the plain keys
    pub empty_style: TextStyle,
    pub icons: CategoryIcons,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            columns: 7,
            rows: 3,
            background_color: Color::rgb(0xF2, 0xF2, 0xF2),
            indicator_color: Color::rgb(0x21, 0x96, 0xF3),
            progress_color: Color::rgb(0x21, 0x96, 0xF3),
            empty_text: "No Recents".to_string(),
            icon_size: 24.0,
            aspect_factor: 1.0,
            font_families: vec![
                "Noto Color Emoji".to_string(),
                "Apple Color Emoji".to_string(),
                "Segoe UI Emoji".to_string(),
            ],
            scroll_duration_ms: 300,
            initial_category: Category::Recent,
            empty_style: TextStyle::default(),
            icons: CategoryIcons::default(),
        }
    }
}

impl PickerConfig {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_toml_str(&content)?)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(&self, path: P) -> Result<(), ConfigError> {
        std::fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Grid columns, at least 1.
    pub fn columns(&self) -> usize {
        self.columns.max(1)
    }

    /// Visible grid rows, at least 1.
    pub fn rows(&self) -> usize {
        self.rows.max(1)
    }

    /// Emoji visible at once on a category page.
    pub fn page_size(&self) -> usize {
        self.columns() * self.rows()
    }

    pub fn scroll_duration(&self) -> Duration {
        Duration::from_millis(self.scroll_duration_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = PickerConfig::default();
        assert_eq!(cfg.columns, 7);
        assert_eq!(cfg.rows, 3);
        assert_eq!(cfg.page_size(), 21);
        assert_eq!(cfg.empty_text, "No Recents");
        assert_eq!(cfg.icons.get(Category::Foods), "🍔");
        assert_eq!(cfg.scroll_duration(), Duration::from_millis(300));
    }

    #[test]
    fn zero_grid_is_clamped() {
        let cfg = PickerConfig {
            columns: 0,
            rows: 0,
            ..Default::default()
        };
        assert_eq!(cfg.page_size(), 1);
    }

    #[test]
    fn colour_parse_and_display() {
        assert_eq!("#2196F3".parse::<Color>(), Ok(Color::rgb(0x21, 0x96, 0xF3)));
        assert_eq!("00000042".parse::<Color>(), Ok(Color::rgba(0, 0, 0, 0x42)));
        assert!("#12345".parse::<Color>().is_err());
        assert!("#GGGGGG".parse::<Color>().is_err());
        assert_eq!(Color::rgba(0, 0, 0, 0x42).to_string(), "#00000042");
        assert_eq!(Color::rgb(1, 2, 3).to_string(), "#010203");
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let cfg = PickerConfig::from_toml_str(
            r##"
columns = 8
indicator_color = "#FF9800"
initial_category = "smileys"

[icons]
flags = "🚩"
"##,
        )
        .unwrap();
        assert_eq!(cfg.columns, 8);
        assert_eq!(cfg.rows, 3);
        assert_eq!(cfg.indicator_color, Color::rgb(0xFF, 0x98, 0x00));
        assert_eq!(cfg.initial_category, Category::Smileys);
        assert_eq!(cfg.icons.flags, "🚩");
        assert_eq!(cfg.icons.recent, "🕘");
    }

    #[test]
    fn toml_roundtrip() {
        let mut cfg = PickerConfig::default();
        cfg.empty_text = "Nothing yet".into();
        cfg.font_families = vec!["Twemoji".into()];
        let text = cfg.to_toml_string().unwrap();
        assert_eq!(PickerConfig::from_toml_str(&text).unwrap(), cfg);
    }

    #[test]
    fn invalid_colour_in_toml_is_rejected() {
        assert!(PickerConfig::from_toml_str("background_color = \"blue\"").is_err());
    }
}
