use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Gauge},
};

use super::batch_state::{BatchPhase, BatchState};
use super::types::BatchProgress;
use crate::theme;
use crate::widgets::popup;

pub const GAUGE_HEIGHT: u16 = 3;
const PROMPT_WIDTH: u16 = 44;
const PROMPT_HEIGHT: u16 = 3;

/// `completed/total (pct%)`, or a placeholder before the first snapshot
pub fn gauge_label(state: &BatchState) -> String {
    let counts = match state.progress() {
        Some(BatchProgress {
            completed,
            total,
            percentage,
        }) => format!("{}/{} ({}%)", completed, total, percentage),
        None => "Starting…".to_string(),
    };

    if state.phase() == BatchPhase::Cancelling {
        format!("Cancelling… {}", counts)
    } else {
        counts
    }
}

pub fn render_gauge(state: &BatchState, frame: &mut Frame, area: Rect) {
    let percent = state
        .progress()
        .map(|progress| u16::from(progress.percentage))
        .unwrap_or(0);

    let title_color = if state.phase() == BatchPhase::Cancelling {
        theme::batch::CANCELLING
    } else {
        theme::batch::GAUGE_BORDER
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(Span::styled(" Batch copy ", Style::default().fg(title_color)))
        .title_bottom(theme::border_hints::build_hints(
            &[("Esc/c", "Cancel")],
            theme::batch::GAUGE_BORDER,
        ))
        .border_style(Style::default().fg(theme::batch::GAUGE_BORDER));

    let gauge = Gauge::default()
        .block(block)
        .gauge_style(
            Style::default()
                .fg(theme::batch::GAUGE_FILLED)
                .bg(theme::batch::GAUGE_EMPTY),
        )
        .percent(percent.min(100))
        .label(Span::styled(
            gauge_label(state),
            Style::default()
                .fg(theme::batch::GAUGE_LABEL)
                .add_modifier(Modifier::BOLD),
        ));

    frame.render_widget(gauge, area);
}

/// Centered single-line count prompt
pub fn render_prompt(state: &BatchState, frame: &mut Frame) -> Rect {
    let area = popup::centered_popup(frame.area(), PROMPT_WIDTH, PROMPT_HEIGHT);
    popup::clear_area(frame, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(" How many quotes? (1-50) ")
        .title_bottom(theme::border_hints::build_hints(
            &[("Enter", "Start"), ("Esc", "Close")],
            theme::batch::PROMPT_BORDER,
        ))
        .border_style(Style::default().fg(theme::batch::PROMPT_BORDER))
        .style(Style::default().bg(theme::batch::PROMPT_BACKGROUND));

    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(state.prompt(), inner);
    area
}

#[cfg(test)]
#[path = "batch_render_tests.rs"]
mod batch_render_tests;
