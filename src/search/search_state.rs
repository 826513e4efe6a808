use ratatui::style::{Modifier, Style};
use tui_textarea::TextArea;

use crate::source::Quote;

fn create_search_textarea() -> TextArea<'static> {
    let mut textarea = TextArea::default();
    textarea.set_cursor_line_style(Style::default());
    textarea.set_cursor_style(Style::default().add_modifier(Modifier::REVERSED));
    textarea
}

/// Manages the state of the search popup
pub struct SearchState {
    visible: bool,
    search_textarea: TextArea<'static>,
    results: Vec<Quote>,
    selected: usize,
    /// Keyword the current `results` belong to
    results_keyword: Option<String>,
    /// Keyword of the request still in flight
    pending: Option<String>,
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchState {
    pub fn new() -> Self {
        Self {
            visible: false,
            search_textarea: create_search_textarea(),
            results: Vec::new(),
            selected: 0,
            results_keyword: None,
            pending: None,
        }
    }

    pub fn open(&mut self) {
        self.visible = true;
    }

    /// Closes the popup and clears input and results
    pub fn close(&mut self) {
        self.visible = false;
        self.search_textarea = create_search_textarea();
        self.results.clear();
        self.selected = 0;
        self.results_keyword = None;
        self.pending = None;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn query(&self) -> &str {
        self.search_textarea
            .lines()
            .first()
            .map(|s| s.as_str())
            .unwrap_or("")
    }

    pub fn search_textarea_mut(&mut self) -> &mut TextArea<'static> {
        &mut self.search_textarea
    }

    pub fn search_textarea(&self) -> &TextArea<'static> {
        &self.search_textarea
    }

    pub fn mark_pending(&mut self, keyword: &str) {
        self.pending = Some(keyword.to_string());
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// True when a newer search than `keyword` is still in flight
    pub fn is_superseded(&self, keyword: &str) -> bool {
        self.pending.as_deref().is_some_and(|pending| pending != keyword)
    }

    /// Store results for `keyword`. Responses for a closed popup, or for a
    /// keyword a newer search has replaced, are dropped. Returns true when
    /// the results were applied.
    pub fn set_results(&mut self, keyword: String, results: Vec<Quote>) -> bool {
        if !self.visible || self.is_superseded(&keyword) {
            return false;
        }
        self.pending = None;
        self.results = results;
        self.selected = 0;
        self.results_keyword = Some(keyword);
        true
    }

    pub fn clear_pending(&mut self) {
        self.pending = None;
    }

    pub fn results(&self) -> &[Quote] {
        &self.results
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// True when the listed results match what is typed, so Enter picks a
    /// result instead of searching again
    pub fn results_are_current(&self) -> bool {
        !self.results.is_empty() && self.results_keyword.as_deref() == Some(self.query().trim())
    }

    pub fn selected(&self) -> Option<&Quote> {
        self.results.get(self.selected)
    }

    pub fn select_next(&mut self) {
        if !self.results.is_empty() {
            self.selected = (self.selected + 1) % self.results.len();
        }
    }

    pub fn select_previous(&mut self) {
        if !self.results.is_empty() {
            self.selected = if self.selected == 0 {
                self.results.len() - 1
            } else {
                self.selected - 1
            };
        }
    }
}
