use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::App;
use crate::theme;

macro_rules! hints {
    ($($key:literal => $desc:literal),+ $(,)?) => {
        vec![$(($key, $desc)),+]
    };
}

fn get_context_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    if app.batch.is_prompt_visible() {
        hints!["Enter" => "Start", "Esc" => "Close", "Ctrl+C" => "Quit"]
    } else if app.submit.is_visible() {
        hints!["Tab" => "Switch field", "Enter" => "Submit", "Esc" => "Close", "Ctrl+C" => "Quit"]
    } else if app.leaderboard.is_visible() {
        hints!["r" => "Refresh", "Esc/l" => "Close", "Ctrl+C" => "Quit"]
    } else if app.search.is_visible() {
        hints!["Enter" => "Search/Pick", "↑/↓" => "Select", "Esc" => "Close", "Ctrl+C" => "Quit"]
    } else if app.batch.is_active() {
        hints!["Esc/c" => "Cancel batch", "n" => "New quote", "/" => "Search", "q" => "Quit"]
    } else {
        hints![
            "n" => "New quote",
            "y" => "Copy",
            "/" => "Search",
            "b" => "Batch copy",
            "s" => "Submit",
            "l" => "Leaderboard",
            "q" => "Quit",
        ]
    }
}

fn build_styled_spans(hints: &[(&'static str, &'static str)]) -> Vec<Span<'static>> {
    let key_style = Style::default().fg(theme::help_line::KEY);
    let desc_style = Style::default().fg(theme::help_line::DESCRIPTION);
    let sep_style = Style::default().fg(theme::help_line::SEPARATOR);

    let mut spans = Vec::with_capacity(hints.len() * 4 + 1);
    spans.push(Span::raw(" "));

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" \u{2022} ", sep_style));
        }
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, desc_style));
    }

    spans
}

pub fn render_line(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_context_hints(app);
    let spans = build_styled_spans(&hints);
    let help = Paragraph::new(Line::from(spans));
    frame.render_widget(help, area);
}

#[cfg(test)]
#[path = "help_line_render_tests.rs"]
mod help_line_render_tests;
