use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use super::quote_state::{QuoteState, QuoteStatus};
use crate::source::SiteStats;
use crate::theme;

fn stats_line(stats: &SiteStats) -> Line<'static> {
    let label = Style::default().fg(theme::stats::LABEL);
    let value = Style::default().fg(theme::stats::VALUE);

    let entries = [
        ("Quotes", stats.total_sentences),
        ("Views today", stats.today_views),
        ("Pending", stats.pending_sentences),
        ("API calls today", stats.today_api_calls),
    ];

    let mut spans = vec![Span::raw(" ")];
    for (i, (name, count)) in entries.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" • ", label));
        }
        spans.push(Span::styled(format!("{} ", name), label));
        spans.push(Span::styled(count.to_string(), value));
    }
    spans.push(Span::raw(" "));
    Line::from(spans)
}

fn body_lines(state: &QuoteState) -> Vec<Line<'static>> {
    if let QuoteStatus::Failed(message) = state.status() {
        return vec![
            Line::from(Span::styled(
                "Failed to load quote",
                Style::default().fg(theme::quote::ERROR),
            )),
            Line::from(Span::styled(
                message.clone(),
                Style::default().fg(theme::quote::PLACEHOLDER),
            )),
        ];
    }

    match state.current() {
        Some(quote) => {
            let mut lines = vec![Line::from(Span::styled(
                quote.content.clone(),
                theme::quote::CONTENT,
            ))];
            if !quote.author.is_empty() {
                lines.push(Line::default());
                lines.push(Line::from(Span::styled(
                    format!("—— {}", quote.author),
                    Style::default().fg(theme::quote::AUTHOR),
                )));
            }
            lines
        }
        None => vec![Line::from(Span::styled(
            "Loading…",
            Style::default().fg(theme::quote::PLACEHOLDER),
        ))],
    }
}

/// Render the quote panel; returns the area used
pub fn render_panel(state: &QuoteState, frame: &mut Frame, area: Rect) -> Rect {
    let title = if *state.status() == QuoteStatus::Loading {
        " Quote (loading…) "
    } else {
        " Quote "
    };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .border_style(Style::default().fg(theme::quote::BORDER))
        .style(Style::default().bg(theme::quote::BACKGROUND));

    if let Some(stats) = state.stats() {
        block = block.title_bottom(stats_line(&stats).alignment(Alignment::Right));
    }

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = body_lines(state);
    // Vertically center short quotes
    let top_padding = inner.height.saturating_sub(lines.len() as u16 + 1) / 2;
    let body = Rect {
        y: inner.y + top_padding,
        height: inner.height - top_padding,
        ..inner
    };

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, body);

    area
}
