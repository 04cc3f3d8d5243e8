use crate::commands::CommandEntry;
use crate::commands::CommandGroup;

pub const DEFAULT_RESULT_ROWS: usize = 12;

/// Live state of an open command palette. Dropped on close, so every open
/// starts from `PaletteState::default()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteState {
    pub query: String,
    pub selected: usize,
    pub scroll_top: usize,
    pub viewport_rows: usize,
    pub input_focused: bool,
}

impl Default for PaletteState {
    fn default() -> Self {
        Self {
            query: String::new(),
            selected: 0,
            scroll_top: 0,
            viewport_rows: DEFAULT_RESULT_ROWS,
            input_focused: false,
        }
    }
}

impl PaletteState {
    pub fn push_char(&mut self, ch: char) {
        self.query.push(ch);
        self.restart_selection();
    }

    pub fn backspace(&mut self) {
        if self.query.pop().is_some() {
            self.restart_selection();
        }
    }

    pub fn paste(&mut self, text: &str) {
        let text: String = text.chars().filter(|ch| !ch.is_control()).collect();
        if text.is_empty() {
            return;
        }
        self.query.push_str(&text);
        self.restart_selection();
    }

    fn restart_selection(&mut self) {
        self.selected = 0;
        self.scroll_top = 0;
    }

    pub fn move_down(&mut self, count: usize) -> bool {
        let before = self.selected;
        if count > 0 {
            self.selected = (self.selected + 1).min(count - 1);
        }
        before != self.selected
    }

    pub fn move_up(&mut self) -> bool {
        let before = self.selected;
        self.selected = self.selected.saturating_sub(1);
        before != self.selected
    }

    pub fn hover(&mut self, index: usize, count: usize) -> bool {
        if index >= count || index == self.selected {
            return false;
        }
        self.selected = index;
        true
    }

    pub fn clamp(&mut self, count: usize) {
        self.selected = if count == 0 {
            0
        } else {
            self.selected.min(count - 1)
        };
    }

    /// Adjusts `scroll_top` so rows `first..=last` fit in the viewport,
    /// moving as little as possible.
    pub fn reveal(&mut self, first: usize, last: usize) {
        let rows = self.viewport_rows.max(1);
        if first < self.scroll_top {
            self.scroll_top = first;
        } else if last >= self.scroll_top + rows {
            self.scroll_top = last + 1 - rows;
        }
    }

    pub fn reveal_selected(&mut self, rows: &[PaletteRow<'_>]) {
        let Some(row) = selected_row(rows, self.selected) else {
            self.scroll_top = 0;
            return;
        };
        // A group's first entry drags its heading into view too.
        let first = match row.checked_sub(1).and_then(|above| rows.get(above)) {
            Some(PaletteRow::Heading(_)) => row - 1,
            _ => row,
        };
        self.reveal(first, row);
    }

    pub fn set_viewport_rows(&mut self, rows: usize) {
        self.viewport_rows = rows.max(1);
    }
}

/// One rendered line of the results panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteRow<'a> {
    Heading(&'static str),
    Entry {
        index: usize,
        entry: &'a CommandEntry,
    },
}

/// Lays groups out as heading and entry rows; `index` is the position in
/// display order, which is what `PaletteState::selected` addresses.
pub fn palette_rows<'a>(groups: &[CommandGroup<'a>]) -> Vec<PaletteRow<'a>> {
    let mut rows = Vec::new();
    let mut index = 0;
    for group in groups {
        rows.push(PaletteRow::Heading(group.heading));
        for entry in &group.entries {
            rows.push(PaletteRow::Entry { index, entry });
            index += 1;
        }
    }
    rows
}

pub fn selected_row(rows: &[PaletteRow<'_>], selected: usize) -> Option<usize> {
    rows.iter().position(|row| {
        matches!(row, PaletteRow::Entry { index, .. } if *index == selected)
    })
}

/// Entry index under a results-panel row, counting from the top of the
/// viewport. Headings and empty space map to `None`.
pub fn entry_at_row(rows: &[PaletteRow<'_>], scroll_top: usize, visible_row: usize) -> Option<usize> {
    match rows.get(scroll_top + visible_row)? {
        PaletteRow::Entry { index, .. } => Some(*index),
        PaletteRow::Heading(_) => None,
    }
}

pub fn no_results_message(query: &str) -> String {
    format!("No results found for \"{query}\"")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::commands::group_commands;
    use crate::commands::CommandRegistry;
    use crate::content::PORTFOLIO;
    use crate::theme::ThemeStore;

    fn registry() -> CommandRegistry {
        CommandRegistry::build(&ThemeStore::default(), PORTFOLIO.quick_links)
    }

    #[test]
    fn arrows_clamp_at_both_ends() {
        let mut palette = PaletteState::default();
        assert!(!palette.move_up());
        for _ in 0..10 {
            palette.move_down(3);
        }
        assert_eq!(palette.selected, 2);
        assert!(!palette.move_down(3));
        assert!(!palette.move_down(0));
    }

    #[test]
    fn query_edits_reset_selection() {
        let mut palette = PaletteState {
            selected: 4,
            scroll_top: 3,
            ..PaletteState::default()
        };
        palette.push_char('d');
        assert_eq!((palette.selected, palette.scroll_top), (0, 0));

        palette.selected = 2;
        palette.paste("ark\n");
        assert_eq!(palette.query, "dark");
        assert_eq!(palette.selected, 0);

        palette.selected = 1;
        palette.backspace();
        assert_eq!(palette.query, "dar");
        assert_eq!(palette.selected, 0);
    }

    #[test]
    fn hover_out_of_range_is_ignored() {
        let mut palette = PaletteState::default();
        assert!(palette.hover(3, 5));
        assert!(!palette.hover(9, 5));
        assert_eq!(palette.selected, 3);
    }

    #[test]
    fn rows_count_group_headings() {
        let registry = registry();
        let entries = registry.filter("");
        let groups = group_commands(&entries);
        let rows = palette_rows(&groups);

        assert_eq!(rows.len(), entries.len() + groups.len());
        // "Navigation" heading, 6 views, then "Appearance" heading.
        assert_eq!(selected_row(&rows, 0), Some(1));
        assert_eq!(selected_row(&rows, 6), Some(8));
        assert_eq!(entry_at_row(&rows, 0, 7), None);
        assert_eq!(entry_at_row(&rows, 0, 8), Some(6));
        assert_eq!(entry_at_row(&rows, 2, 6), Some(6));
    }

    #[test]
    fn selection_is_scrolled_into_view() {
        let registry = registry();
        let entries = registry.filter("");
        let groups = group_commands(&entries);
        let rows = palette_rows(&groups);
        let count = entries.len();

        let mut palette = PaletteState::default();
        palette.set_viewport_rows(5);
        for _ in 0..count {
            palette.move_down(count);
            palette.reveal_selected(&rows);
            let row = selected_row(&rows, palette.selected).expect("row");
            assert!(row >= palette.scroll_top && row < palette.scroll_top + 5);
        }
        assert_eq!(palette.selected, count - 1);
        assert_eq!(palette.scroll_top, rows.len() - 5);

        while palette.move_up() {
            palette.reveal_selected(&rows);
        }
        assert_eq!(palette.scroll_top, 0);
    }

    #[test]
    fn no_results_text_quotes_query() {
        assert_eq!(no_results_message("zzz"), "No results found for \"zzz\"");
    }
}
