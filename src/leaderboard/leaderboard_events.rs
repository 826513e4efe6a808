//! Keys while the leaderboard is open, plus applying worker results

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::leaderboard_state::LEADERBOARD_LIMIT;
use crate::app::App;
use crate::source::{Leaderboard, SourceError};
use crate::worker::WorkerRequest;

/// Open the popup and fetch a fresh board
pub fn open_leaderboard(app: &mut App) {
    app.leaderboard.open();
    request_leaderboard(app);
}

fn request_leaderboard(app: &mut App) {
    if app.leaderboard.is_loading() {
        return;
    }
    if app.send_request(WorkerRequest::Leaderboard {
        limit: LEADERBOARD_LIMIT,
    }) {
        app.leaderboard.mark_loading();
    }
}

/// Returns true if the event was consumed
pub fn handle_leaderboard_key(app: &mut App, key: KeyEvent) -> bool {
    if !app.leaderboard.is_visible() {
        return false;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return false;
    }

    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('l') => app.leaderboard.close(),
        KeyCode::Char('r') => request_leaderboard(app),
        _ => {}
    }
    true
}

pub fn handle_leaderboard_response(app: &mut App, result: Result<Leaderboard, SourceError>) {
    if let Err(e) = &result {
        log::debug!("Leaderboard fetch failed: {}", e);
    }
    app.leaderboard.set_result(result);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::LeaderboardEntry;
    use crate::test_utils::test_helpers::{
        app_with_channels, drain_requests, key, key_with_mods, test_app,
    };

    #[test]
    fn test_open_requests_board() {
        let (mut app, mut requests, _responses) = app_with_channels();

        open_leaderboard(&mut app);

        assert!(app.leaderboard.is_visible());
        assert!(app.leaderboard.is_loading());
        assert_eq!(
            drain_requests(&mut requests),
            vec![WorkerRequest::Leaderboard { limit: 20 }]
        );
    }

    #[test]
    fn test_refresh_while_loading_sends_nothing() {
        let (mut app, mut requests, _responses) = app_with_channels();
        open_leaderboard(&mut app);
        drain_requests(&mut requests);

        assert!(handle_leaderboard_key(&mut app, key(KeyCode::Char('r'))));

        assert!(drain_requests(&mut requests).is_empty());
    }

    #[test]
    fn test_refresh_after_response() {
        let (mut app, mut requests, _responses) = app_with_channels();
        open_leaderboard(&mut app);
        handle_leaderboard_response(&mut app, Ok(Leaderboard::default()));
        drain_requests(&mut requests);

        handle_leaderboard_key(&mut app, key(KeyCode::Char('r')));

        assert_eq!(drain_requests(&mut requests).len(), 1);
    }

    #[test]
    fn test_close_keys() {
        for code in [KeyCode::Esc, KeyCode::Char('q'), KeyCode::Char('l')] {
            let mut app = test_app();
            app.leaderboard.open();

            assert!(handle_leaderboard_key(&mut app, key(code)));
            assert!(!app.leaderboard.is_visible());
        }
    }

    #[test]
    fn test_other_keys_are_swallowed() {
        let mut app = test_app();
        app.leaderboard.open();

        assert!(handle_leaderboard_key(&mut app, key(KeyCode::Char('n'))));
        assert!(app.leaderboard.is_visible());
    }

    #[test]
    fn test_ctrl_c_passes_through() {
        let mut app = test_app();
        app.leaderboard.open();

        assert!(!handle_leaderboard_key(
            &mut app,
            key_with_mods(KeyCode::Char('c'), KeyModifiers::CONTROL)
        ));
    }

    #[test]
    fn test_response_fills_board() {
        let mut app = test_app();
        app.leaderboard.open();
        let board = Leaderboard {
            entries: vec![LeaderboardEntry {
                rank: 1,
                author: "丙".to_string(),
                count: 9,
            }],
            ..Leaderboard::default()
        };

        handle_leaderboard_response(&mut app, Ok(board.clone()));

        assert_eq!(app.leaderboard.board(), Some(&board));
    }
}
