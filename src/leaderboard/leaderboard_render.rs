use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::leaderboard_state::LeaderboardState;
use crate::source::LeaderboardStats;
use crate::theme;
use crate::widgets::popup;

const POPUP_WIDTH: u16 = 50;
const POPUP_HEIGHT: u16 = 16;

fn totals_line(stats: &LeaderboardStats) -> Line<'static> {
    Line::from(Span::styled(
        format!(
            " Approved {} • Authors {} • Top {} ",
            stats.total_approved_submissions, stats.total_authors, stats.top_submissions
        ),
        Style::default().fg(theme::leaderboard::TOTALS),
    ))
    .alignment(Alignment::Right)
}

fn placeholder(text: impl Into<String>, color: Color) -> Vec<Line<'static>> {
    vec![Line::from(Span::styled(
        text.into(),
        Style::default().fg(color),
    ))]
}

fn body_lines(state: &LeaderboardState) -> Vec<Line<'static>> {
    if let Some(error) = state.error() {
        return placeholder(
            format!("Failed to load leaderboard: {}", error),
            theme::leaderboard::ERROR,
        );
    }

    let Some(board) = state.board() else {
        return placeholder("Loading…", theme::leaderboard::PLACEHOLDER);
    };

    if board.entries.is_empty() {
        return placeholder("No ranked authors yet", theme::leaderboard::PLACEHOLDER);
    }

    board
        .entries
        .iter()
        .map(|entry| {
            Line::from(vec![
                Span::styled(
                    format!("#{:<3}", entry.rank),
                    Style::default()
                        .fg(theme::leaderboard::RANK)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    entry.author.clone(),
                    Style::default().fg(theme::leaderboard::AUTHOR),
                ),
                Span::styled(
                    format!("  {} quotes", entry.count),
                    Style::default().fg(theme::leaderboard::COUNT),
                ),
            ])
        })
        .collect()
}

/// Centered leaderboard popup
pub fn render_popup(state: &LeaderboardState, frame: &mut Frame) -> Rect {
    let area = popup::centered_popup(frame.area(), POPUP_WIDTH, POPUP_HEIGHT);
    popup::clear_area(frame, area);

    let title = if state.is_loading() && state.board().is_some() {
        " Leaderboard (refreshing…) "
    } else {
        " Leaderboard "
    };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .title_bottom(theme::border_hints::build_hints(
            &[("r", "Refresh"), ("Esc", "Close")],
            theme::leaderboard::BORDER,
        ))
        .border_style(Style::default().fg(theme::leaderboard::BORDER))
        .style(Style::default().bg(theme::leaderboard::BACKGROUND));

    if let Some(board) = state.board() {
        block = block.title_top(totals_line(&board.stats));
    }

    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(Paragraph::new(body_lines(state)), inner);
    area
}
