use ratatui::{
    Frame,
    layout::{Constraint, Layout},
};

use super::app_state::App;
use crate::batch::batch_render;
use crate::notification::render_notification;

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let gauge_height = if self.batch.is_active() {
            batch_render::GAUGE_HEIGHT
        } else {
            0
        };

        let [quote_area, gauge_area, help_area] = Layout::vertical([
            Constraint::Min(5),
            Constraint::Length(gauge_height),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        crate::quote::quote_render::render_panel(&self.quote, frame, quote_area);

        if self.batch.is_active() {
            batch_render::render_gauge(&self.batch, frame, gauge_area);
        }

        crate::help::help_line_render::render_line(self, frame, help_area);

        if self.search.is_visible() {
            crate::search::search_render::render_popup(&self.search, frame, quote_area);
        }

        if self.leaderboard.is_visible() {
            crate::leaderboard::leaderboard_render::render_popup(&self.leaderboard, frame);
        }

        if self.submit.is_visible() {
            crate::submit::submit_render::render_popup(&self.submit, frame);
        }

        if self.batch.is_prompt_visible() {
            batch_render::render_prompt(&self.batch, frame);
        }

        render_notification(frame, &mut self.notification);
    }
}
