//! Rendering of picker state into a plain frame.
//!
//! `PickerFrame` carries everything a front end needs to draw one picker:
//! tab strip, the rows of the current page, colours and geometry. Terminals
//! can use [`PickerFrame::to_text`] directly.

use crate::catalog::Catalog;
use crate::category::Category;
use crate::config::{Color, PickerConfig, TextStyle};
use crate::picker::PickerState;
use std::fmt::Write as _;

/// Cell and bar geometry for a given picker width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickerLayout {
    pub width: f32,
    pub cell_width: f32,
    pub cell_height: f32,
    /// Height of the glyph grid (all visible rows)
    pub grid_height: f32,
    pub tab_bar_height: f32,
    pub height: f32,
    /// Font size for glyphs inside a cell
    pub glyph_size: f32,
}

impl PickerLayout {
    pub fn compute(width: f32, config: &PickerConfig) -> Self {
        let width = width.max(0.0);
        let cell_width = width / config.columns() as f32;
        let cell_height = cell_width * config.aspect_factor.max(0.0);
        let grid_height = cell_height * config.rows() as f32;
        let tab_bar_height = config.icon_size * 2.0;
        Self {
            width,
            cell_width,
            cell_height,
            grid_height,
            tab_bar_height,
            height: grid_height + tab_bar_height,
            glyph_size: cell_width.min(cell_height) * 0.7,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TabCell {
    pub category: Category,
    pub icon: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GlyphCell {
    /// Index within the page's entries
    pub index: usize,
    pub name: String,
    pub glyph: String,
    pub cursor: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Placeholder {
    pub text: String,
    pub style: TextStyle,
}

/// One rendered picker.
#[derive(Debug, Clone, PartialEq)]
pub struct PickerFrame {
    pub tabs: Vec<TabCell>,
    pub category: Category,

    /// Visible grid rows of the current page
    pub rows: Vec<Vec<GlyphCell>>,
    pub scroll_row: usize,
    pub total_rows: usize,
    /// Number of entries on the current page
    pub entry_count: usize,

    /// Shown instead of the grid on an empty or loading Recent page
    pub placeholder: Option<Placeholder>,
    /// Recent emoji are still being read
    pub loading: bool,
    /// Whether the current page went through the glyph oracle
    pub filtered: bool,

    pub background_color: Color,
    pub indicator_color: Color,
    pub progress_color: Color,
    pub icon_size: f32,
    pub font_families: Vec<String>,
    pub layout: PickerLayout,
}

impl PickerFrame {
    pub fn cells(&self) -> impl Iterator<Item = &GlyphCell> {
        self.rows.iter().flatten()
    }

    pub fn cursor_cell(&self) -> Option<&GlyphCell> {
        self.cells().find(|c| c.cursor)
    }

    /// Draw the frame as text, one line per grid row.
    pub fn to_text(&self) -> String {
        let mut out = String::new();

        let tabs: Vec<String> = self
            .tabs
            .iter()
            .map(|t| {
                if t.selected {
                    format!("[{}]", t.icon)
                } else {
                    format!(" {} ", t.icon)
                }
            })
            .collect();
        let _ = writeln!(out, "{}", tabs.join(""));

        let mut title = format!("-- {} --", self.category.label());
        if self.category.has_table() && !self.filtered {
            title.push_str(" (unfiltered)");
        }
        let _ = writeln!(out, "{}", title);

        if let Some(placeholder) = &self.placeholder {
            let _ = writeln!(out, "  {}", placeholder.text);
            if self.loading {
                let _ = writeln!(out, "  loading...");
            }
            return out;
        }

        for row in &self.rows {
            let line: String = row
                .iter()
                .map(|c| {
                    if c.cursor {
                        format!(">{}<", c.glyph)
                    } else {
                        format!(" {} ", c.glyph)
                    }
                })
                .collect();
            let _ = writeln!(out, "{}", line.trim_end());
        }
        if self.total_rows > self.rows.len() {
            let _ = writeln!(
                out,
                "  rows {}-{} of {}",
                self.scroll_row + 1,
                self.scroll_row + self.rows.len(),
                self.total_rows
            );
        }
        if let Some(cell) = self.cursor_cell() {
            let _ = writeln!(out, "  {}", cell.name);
        }
        out
    }
}

/// Renders picker state with a fixed configuration and width.
#[derive(Debug, Clone)]
pub struct PickerView {
    config: PickerConfig,
    layout: PickerLayout,
}

impl PickerView {
    pub fn new(config: PickerConfig, width: f32) -> Self {
        let layout = PickerLayout::compute(width, &config);
        Self { config, layout }
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    pub fn layout(&self) -> &PickerLayout {
        &self.layout
    }

    pub fn set_width(&mut self, width: f32) {
        self.layout = PickerLayout::compute(width, &self.config);
    }

    /// Render the page under the tab indicator.
    pub fn render(&self, state: &PickerState, catalog: &Catalog) -> PickerFrame {
        let category = state.selected_category();
        let entries = state.entries(catalog, category);

        let mut grid = state.grid(category).clone();
        grid.set_len(entries.len());
        let cursor = grid.cursor();
        let range = grid.visible_range();
        let rows: Vec<Vec<GlyphCell>> = entries[range.clone()]
            .chunks(grid.columns())
            .enumerate()
            .map(|(r, chunk)| {
                chunk
                    .iter()
                    .enumerate()
                    .map(|(c, e)| {
                        let index = range.start + r * grid.columns() + c;
                        GlyphCell {
                            index,
                            name: e.name.clone(),
                            glyph: e.glyph.clone(),
                            cursor: cursor == Some(index),
                        }
                    })
                    .collect()
            })
            .collect();

        let loading = state.is_loading_recents();
        let placeholder = (category == Category::Recent && (loading || entries.is_empty()))
            .then(|| Placeholder {
                text: self.config.empty_text.clone(),
                style: self.config.empty_style.clone(),
            });

        let tabs = Category::ALL
            .iter()
            .map(|&c| TabCell {
                category: c,
                icon: self.config.icons.get(c).to_string(),
                selected: c.index() == state.selected_tab(),
            })
            .collect();

        PickerFrame {
            tabs,
            category,
            rows,
            scroll_row: grid.scroll_row(),
            total_rows: grid.total_rows(),
            entry_count: entries.len(),
            placeholder,
            loading,
            filtered: state.is_filtered(category),
            background_color: self.config.background_color,
            indicator_color: self.config.indicator_color,
            progress_color: self.config.progress_color,
            icon_size: self.config.icon_size,
            font_families: self.config.font_families.clone(),
            layout: self.layout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::picker::{Effect, PickerEvent};

    #[test]
    fn layout_follows_columns_and_aspect() {
        let config = PickerConfig {
            aspect_factor: 1.5,
            ..Default::default()
        };
        let layout = PickerLayout::compute(350.0, &config);
        assert_eq!(layout.cell_width, 50.0);
        assert_eq!(layout.cell_height, 75.0);
        assert_eq!(layout.grid_height, 225.0);
        assert_eq!(layout.tab_bar_height, 48.0);
        assert_eq!(layout.height, 273.0);
    }

    #[test]
    fn loading_recent_page_shows_placeholder() {
        let catalog = Catalog::builtin();
        let view = PickerView::new(PickerConfig::default(), 350.0);
        let mut state = PickerState::new(view.config());
        state.update(&catalog, PickerEvent::Mounted);

        let frame = view.render(&state, &catalog);
        assert_eq!(frame.category, Category::Recent);
        assert!(frame.loading);
        assert_eq!(frame.placeholder.as_ref().unwrap().text, "No Recents");
        assert!(frame.rows.is_empty());
        assert!(frame.tabs[0].selected);
        assert_eq!(frame.tabs.len(), 9);
        assert!(frame.to_text().contains("loading..."));
    }

    #[test]
    fn content_page_renders_first_rows_unfiltered() {
        let catalog = Catalog::builtin();
        let view = PickerView::new(PickerConfig::default(), 350.0);
        let mut state = PickerState::new(view.config());
        state.update(&catalog, PickerEvent::Mounted);
        let effects = state.update(&catalog, PickerEvent::VisiblePagesChanged(vec![1]));
        assert!(matches!(effects[0], Effect::FilterCategory { .. }));

        let frame = view.render(&state, &catalog);
        assert_eq!(frame.category, Category::Smileys);
        assert!(!frame.filtered);
        assert!(frame.placeholder.is_none());
        assert_eq!(frame.rows.len(), 3);
        assert_eq!(frame.rows[0].len(), 7);
        assert_eq!(frame.rows[0][0].glyph, "😀");
        assert_eq!(frame.cursor_cell().map(|c| c.index), Some(0));
        assert!(frame.to_text().contains("(unfiltered)"));
    }
}
