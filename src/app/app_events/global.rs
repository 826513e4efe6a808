use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::app_state::App;
use crate::leaderboard::leaderboard_events;
use crate::search::search_events;
use crate::submit::submit_events;

/// Keys available whenever no popup has claimed the event
pub fn handle_global_keys(app: &mut App, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => {
                app.quit();
                true
            }
            _ => false,
        };
    }

    match key.code {
        KeyCode::Char('q') => {
            app.quit();
            true
        }
        KeyCode::Char('n') => {
            app.request_random_quote();
            true
        }
        KeyCode::Char('/') => {
            search_events::open_search(app);
            true
        }
        KeyCode::Char('s') => {
            submit_events::open_submit(app);
            true
        }
        KeyCode::Char('l') => {
            leaderboard_events::open_leaderboard(app);
            true
        }
        KeyCode::Esc => app.notification.dismiss(),
        _ => false,
    }
}
