use ratatui::style::{Modifier, Style};
use tui_textarea::TextArea;

/// Which input receives typed keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitField {
    #[default]
    Content,
    Author,
}

fn create_field_textarea() -> TextArea<'static> {
    let mut textarea = TextArea::default();
    textarea.set_cursor_line_style(Style::default());
    textarea.set_cursor_style(Style::default().add_modifier(Modifier::REVERSED));
    textarea
}

fn single_line<'a>(textarea: &'a TextArea<'static>) -> &'a str {
    textarea.lines().first().map(String::as_str).unwrap_or("")
}

/// The submit form. Text survives closing the popup so a rejected quote can
/// be fixed and resent.
pub struct SubmitState {
    visible: bool,
    content: TextArea<'static>,
    author: TextArea<'static>,
    focus: SubmitField,
    pending: bool,
}

impl Default for SubmitState {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmitState {
    pub fn new() -> Self {
        Self {
            visible: false,
            content: create_field_textarea(),
            author: create_field_textarea(),
            focus: SubmitField::Content,
            pending: false,
        }
    }

    pub fn open(&mut self) {
        self.visible = true;
        self.focus = SubmitField::Content;
    }

    pub fn close(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn focus(&self) -> SubmitField {
        self.focus
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            SubmitField::Content => SubmitField::Author,
            SubmitField::Author => SubmitField::Content,
        };
    }

    pub fn content_text(&self) -> String {
        self.content.lines().join("\n")
    }

    pub fn author_text(&self) -> &str {
        single_line(&self.author)
    }

    pub fn content_textarea(&self) -> &TextArea<'static> {
        &self.content
    }

    pub fn author_textarea(&self) -> &TextArea<'static> {
        &self.author
    }

    pub fn focused_textarea_mut(&mut self) -> &mut TextArea<'static> {
        match self.focus {
            SubmitField::Content => &mut self.content,
            SubmitField::Author => &mut self.author,
        }
    }

    /// Submission handed to the worker; the popup closes until it answers
    pub fn mark_pending(&mut self) {
        self.pending = true;
        self.visible = false;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// The submission finished. On success the quote text is cleared and the
    /// author kept for the next one.
    pub fn finish(&mut self, accepted: bool) {
        self.pending = false;
        if accepted {
            self.content = create_field_textarea();
        }
    }
}
