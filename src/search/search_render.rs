use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::search_state::SearchState;
use crate::theme;
use crate::widgets::popup;

pub const SEARCH_BAR_HEIGHT: u16 = 3;

/// Count shown on the bar's right edge
fn status_text(search: &SearchState) -> String {
    if search.is_pending() {
        "searching…".to_string()
    } else if search.results().is_empty() {
        String::new()
    } else {
        format!("{}/{}", search.selected_index() + 1, search.results().len())
    }
}

/// Render the search popup over `area` (the quote panel)
pub fn render_popup(search: &SearchState, frame: &mut Frame, area: Rect) -> Rect {
    let popup_area = popup::inset_rect(area, 2, 1);
    popup::clear_area(frame, popup_area);

    let [bar_area, list_area] = Layout::vertical([
        Constraint::Length(SEARCH_BAR_HEIGHT),
        Constraint::Min(0),
    ])
    .areas(popup_area);

    render_bar(search, frame, bar_area);
    render_results(search, frame, list_area);
    popup_area
}

fn render_bar(search: &SearchState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(" Search: ")
        .title_top(
            Line::from(Span::styled(
                format!(" {} ", status_text(search)),
                Style::default().fg(theme::search::RESULT_AUTHOR),
            ))
            .alignment(Alignment::Right),
        )
        .border_style(Style::default().fg(theme::search::BORDER_ACTIVE))
        .style(Style::default().bg(theme::search::BACKGROUND));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(search.search_textarea(), inner_area);
}

fn render_results(search: &SearchState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title_bottom(theme::border_hints::build_hints(
            &[("↑/↓", "Select"), ("Enter", "Search/Pick"), ("Esc", "Close")],
            theme::search::BORDER_INACTIVE,
        ))
        .border_style(Style::default().fg(theme::search::BORDER_INACTIVE))
        .style(Style::default().bg(theme::search::BACKGROUND));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if search.results().is_empty() {
        let hint = Paragraph::new(Line::from(Span::styled(
            "Type a keyword and press Enter",
            Style::default().fg(theme::search::EMPTY),
        )));
        frame.render_widget(hint, inner);
        return;
    }

    // Keep the selection on screen
    let visible_rows = usize::from(inner.height.max(1));
    let offset = (search.selected_index() + 1).saturating_sub(visible_rows);

    let lines: Vec<Line> = search
        .results()
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible_rows)
        .map(|(index, quote)| {
            let selected = index == search.selected_index();
            let bg = if selected {
                theme::search::SELECTED_BG
            } else {
                theme::search::BACKGROUND
            };
            let mut text_style = Style::default().fg(theme::search::RESULT_TEXT).bg(bg);
            if selected {
                text_style = text_style.add_modifier(Modifier::BOLD);
            }
            Line::from(vec![
                Span::styled(if selected { "▸ " } else { "  " }, text_style),
                Span::styled(quote.content.clone(), text_style),
                Span::styled(
                    format!("  —— {}", quote.author),
                    Style::default().fg(theme::search::RESULT_AUTHOR).bg(bg),
                ),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::Quote;
    use crate::test_utils::test_helpers::{buffer_text, render_to_terminal};

    fn state_with_results(n: usize) -> SearchState {
        let mut state = SearchState::new();
        state.open();
        state.search_textarea_mut().insert_str("k");
        state.set_results(
            "k".to_string(),
            (0..n)
                .map(|i| Quote::new(format!("result {}", i), "who"))
                .collect(),
        );
        state
    }

    #[test]
    fn test_empty_results_show_hint() {
        let mut state = SearchState::new();
        state.open();

        let terminal = render_to_terminal(60, 12, |f| {
            render_popup(&state, f, f.area());
        });
        let output = buffer_text(&terminal);

        assert!(output.contains("Search:"));
        assert!(output.contains("Type a keyword"));
    }

    #[test]
    fn test_results_listed_with_author() {
        let state = state_with_results(2);

        let terminal = render_to_terminal(60, 12, |f| {
            render_popup(&state, f, f.area());
        });
        let output = buffer_text(&terminal);

        assert!(output.contains("result 0"));
        assert!(output.contains("—— who"));
        assert!(output.contains("1/2"));
    }

    #[test]
    fn test_selection_scrolls_into_view() {
        let mut state = state_with_results(20);
        for _ in 0..15 {
            state.select_next();
        }

        let terminal = render_to_terminal(60, 12, |f| {
            render_popup(&state, f, f.area());
        });
        let output = buffer_text(&terminal);

        assert!(output.contains("result 15"));
        assert!(!output.contains("result 0 "));
    }
}
