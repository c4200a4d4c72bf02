//! Grid paging and cursor navigation for one category page.
//!
//! A page shows `rows` rows of `columns` cells and scrolls vertically by
//! whole rows. The cursor is a global entry index and is kept inside the
//! visible rows whenever it moves.

use std::ops::Range;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGrid {
    /// Number of entries on the page
    len: usize,

    columns: usize,

    /// Rows visible at once
    rows: usize,

    /// First visible row
    scroll_row: usize,

    /// Global index of the highlighted entry
    cursor: usize,
}

impl CategoryGrid {
    pub fn new(columns: usize, rows: usize) -> Self {
        Self {
            len: 0,
            columns: columns.max(1),
            rows: rows.max(1),
            scroll_row: 0,
            cursor: 0,
        }
    }

    /// Update the entry count, keeping scroll and cursor in bounds.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        self.scroll_row = self.scroll_row.min(self.max_scroll_row());
        if self.cursor >= len {
            self.cursor = len.saturating_sub(1);
        }
        self.ensure_cursor_visible();
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn scroll_row(&self) -> usize {
        self.scroll_row
    }

    /// Total rows needed for all entries.
    pub fn total_rows(&self) -> usize {
        self.len.div_ceil(self.columns)
    }

    pub fn max_scroll_row(&self) -> usize {
        self.total_rows().saturating_sub(self.rows)
    }

    /// Entry indices currently visible.
    pub fn visible_range(&self) -> Range<usize> {
        let start = (self.scroll_row * self.columns).min(self.len);
        let end = ((self.scroll_row + self.rows) * self.columns).min(self.len);
        start..end
    }

    /// Highlighted entry, `None` when the page is empty.
    pub fn cursor(&self) -> Option<usize> {
        if self.len == 0 {
            None
        } else {
            Some(self.cursor)
        }
    }

    fn cursor_row(&self) -> usize {
        self.cursor / self.columns
    }

    fn ensure_cursor_visible(&mut self) {
        if self.len == 0 {
            self.scroll_row = 0;
            return;
        }
        let row = self.cursor_row();
        if row < self.scroll_row {
            self.scroll_row = row;
        } else if row >= self.scroll_row + self.rows {
            self.scroll_row = row + 1 - self.rows;
        }
    }

    fn move_cursor_to(&mut self, index: usize) -> bool {
        if self.len == 0 || index >= self.len || index == self.cursor {
            return false;
        }
        self.cursor = index;
        self.ensure_cursor_visible();
        true
    }

    pub fn cursor_left(&mut self) -> bool {
        match self.cursor.checked_sub(1) {
            Some(i) => self.move_cursor_to(i),
            None => false,
        }
    }

    pub fn cursor_right(&mut self) -> bool {
        self.move_cursor_to(self.cursor + 1)
    }

    pub fn cursor_up(&mut self) -> bool {
        match self.cursor.checked_sub(self.columns) {
            Some(i) => self.move_cursor_to(i),
            None => false,
        }
    }

    /// Move down a row; on a short last row, land on the last entry.
    pub fn cursor_down(&mut self) -> bool {
        if self.len == 0 || self.cursor_row() + 1 >= self.total_rows() {
            return false;
        }
        let target = (self.cursor + self.columns).min(self.len - 1);
        self.move_cursor_to(target)
    }

    /// Scroll to a row (clamped). The cursor follows if it leaves the view.
    pub fn scroll_to_row(&mut self, row: usize) -> bool {
        let row = row.min(self.max_scroll_row());
        if row == self.scroll_row {
            return false;
        }
        self.scroll_row = row;
        let visible = self.visible_range();
        if !visible.contains(&self.cursor) && !visible.is_empty() {
            let column = self.cursor % self.columns;
            self.cursor = (visible.start + column).min(visible.end - 1);
        }
        true
    }

    /// Scroll down by a page of rows.
    pub fn page_down(&mut self) -> bool {
        self.scroll_to_row(self.scroll_row + self.rows)
    }

    /// Scroll up by a page of rows.
    pub fn page_up(&mut self) -> bool {
        self.scroll_to_row(self.scroll_row.saturating_sub(self.rows))
    }
}
