use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders},
};
use tui_textarea::TextArea;

use super::submit_state::{SubmitField, SubmitState};
use crate::source::MAX_CONTENT_CHARS;
use crate::theme;
use crate::widgets::popup;

const POPUP_WIDTH: u16 = 60;
const POPUP_HEIGHT: u16 = 10;

fn counter(chars: usize) -> Span<'static> {
    let color = if chars > MAX_CONTENT_CHARS {
        theme::submit::COUNTER_OVER
    } else {
        theme::submit::COUNTER
    };
    Span::styled(
        format!(" {}/{} ", chars, MAX_CONTENT_CHARS),
        Style::default().fg(color),
    )
}

fn field_block(title: &'static str, active: bool) -> Block<'static> {
    let color = if active {
        theme::submit::FIELD_ACTIVE
    } else {
        theme::submit::FIELD_INACTIVE
    };
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(color))
}

fn render_field(frame: &mut Frame, area: Rect, textarea: &TextArea<'static>, block: Block<'static>) {
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(textarea, inner);
}

/// Centered two-field submit form
pub fn render_popup(state: &SubmitState, frame: &mut Frame) -> Rect {
    let area = popup::centered_popup(frame.area(), POPUP_WIDTH, POPUP_HEIGHT);
    popup::clear_area(frame, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(" Submit a quote ")
        .title_bottom(theme::border_hints::build_hints(
            &[("Tab", "Switch"), ("Enter", "Submit"), ("Esc", "Close")],
            theme::submit::BORDER,
        ))
        .border_style(Style::default().fg(theme::submit::BORDER))
        .style(Style::default().bg(theme::submit::BACKGROUND));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [content_area, author_area] =
        Layout::vertical([Constraint::Length(3), Constraint::Length(3)]).areas(inner);

    let content_chars = state.content_text().chars().count();
    let content_block = field_block(" Quote ", state.focus() == SubmitField::Content)
        .title_top(Line::from(counter(content_chars)).alignment(Alignment::Right));
    render_field(frame, content_area, state.content_textarea(), content_block);

    let author_block = field_block(
        " Author (blank for 匿名) ",
        state.focus() == SubmitField::Author,
    );
    render_field(frame, author_area, state.author_textarea(), author_block);

    area
}
