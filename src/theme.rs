//! Centralized theme configuration for all UI components.
//!
//! All colors and styles are defined here. Render files use
//! `theme::module::CONSTANT` rather than hardcoding `Color::*` values.
//!
//! Theme: Galaxy - Purple/pink accents with deep space blue background

use ratatui::style::{Color, Modifier, Style};

/// Core color palette - shared base colors.
pub mod palette {
    use super::*;

    pub const TEXT: Color = Color::Rgb(236, 236, 244);
    pub const TEXT_DIM: Color = Color::Rgb(90, 92, 119);
    pub const TEXT_MUTED: Color = Color::Rgb(130, 133, 158);

    pub const BG_DARK: Color = Color::Rgb(26, 26, 46);
    pub const BG_HIGHLIGHT: Color = Color::Rgb(55, 55, 85);

    pub const CYAN: Color = Color::Rgb(0, 217, 255);
    pub const YELLOW: Color = Color::Rgb(255, 217, 61);
    pub const GREEN: Color = Color::Rgb(107, 203, 119);
    pub const PINK: Color = Color::Rgb(255, 107, 157);
    pub const RED: Color = Color::Rgb(224, 108, 117);
    pub const PURPLE: Color = Color::Rgb(189, 147, 249);
}

/// Quote panel styles
pub mod quote {
    use super::*;

    pub const BORDER: Color = palette::PURPLE;
    pub const CONTENT: Style = Style::new()
        .fg(palette::TEXT)
        .add_modifier(Modifier::BOLD);
    pub const AUTHOR: Color = palette::TEXT_MUTED;
    pub const PLACEHOLDER: Color = palette::TEXT_DIM;
    pub const ERROR: Color = palette::RED;
    pub const BACKGROUND: Color = palette::BG_DARK;
}

/// Site statistics line
pub mod stats {
    use super::*;

    pub const LABEL: Color = palette::TEXT_DIM;
    pub const VALUE: Color = palette::CYAN;
}

/// Search bar and result list
pub mod search {
    use super::*;

    pub const BORDER_ACTIVE: Color = palette::PINK;
    pub const BORDER_INACTIVE: Color = palette::TEXT_DIM;
    pub const BACKGROUND: Color = palette::BG_DARK;
    pub const RESULT_TEXT: Color = palette::TEXT;
    pub const RESULT_AUTHOR: Color = palette::TEXT_MUTED;
    pub const SELECTED_BG: Color = palette::BG_HIGHLIGHT;
    pub const EMPTY: Color = palette::TEXT_DIM;
}

/// Batch prompt and progress gauge
pub mod batch {
    use super::*;

    pub const PROMPT_BORDER: Color = palette::YELLOW;
    pub const PROMPT_BACKGROUND: Color = palette::BG_DARK;
    pub const GAUGE_BORDER: Color = palette::CYAN;
    pub const GAUGE_FILLED: Color = palette::GREEN;
    pub const GAUGE_EMPTY: Color = palette::BG_HIGHLIGHT;
    pub const GAUGE_LABEL: Color = palette::TEXT;
    pub const CANCELLING: Color = palette::YELLOW;
}

/// Leaderboard popup
pub mod leaderboard {
    use super::*;

    pub const BORDER: Color = palette::CYAN;
    pub const BACKGROUND: Color = palette::BG_DARK;
    pub const RANK: Color = palette::YELLOW;
    pub const AUTHOR: Color = palette::TEXT;
    pub const COUNT: Color = palette::GREEN;
    pub const TOTALS: Color = palette::TEXT_MUTED;
    pub const PLACEHOLDER: Color = palette::TEXT_DIM;
    pub const ERROR: Color = palette::RED;
}

/// Submit form
pub mod submit {
    use super::*;

    pub const BORDER: Color = palette::PURPLE;
    pub const FIELD_ACTIVE: Color = palette::PINK;
    pub const FIELD_INACTIVE: Color = palette::TEXT_DIM;
    pub const BACKGROUND: Color = palette::BG_DARK;
    pub const COUNTER: Color = palette::TEXT_MUTED;
    pub const COUNTER_OVER: Color = palette::RED;
}

/// Notification styles
pub mod notification {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct NotificationColors {
        pub fg: Color,
        pub bg: Color,
        pub border: Color,
    }

    pub const INFO: NotificationColors = NotificationColors {
        fg: Color::Rgb(236, 236, 244),
        bg: Color::Rgb(55, 55, 85),
        border: Color::Rgb(130, 133, 158),
    };

    pub const WARNING: NotificationColors = NotificationColors {
        fg: Color::Rgb(26, 26, 46),
        bg: Color::Rgb(255, 217, 61),
        border: Color::Rgb(255, 217, 61),
    };

    pub const ERROR: NotificationColors = NotificationColors {
        fg: Color::Rgb(236, 236, 244),
        bg: Color::Rgb(224, 108, 117),
        border: Color::Rgb(255, 135, 145),
    };
}

/// Help line (bottom status bar) styles
pub mod help_line {
    use super::*;

    pub const KEY: Color = palette::TEXT_MUTED;
    pub const DESCRIPTION: Color = palette::TEXT_DIM;
    pub const SEPARATOR: Color = palette::TEXT_DIM;
}

/// Border hint utilities - for building styled keyboard shortcuts on borders
pub mod border_hints {
    use super::*;
    use ratatui::text::{Line, Span};

    /// Build a line of `key desc` hints separated by dimmed dots
    pub fn build_hints(hints: &[(&'static str, &'static str)], color: Color) -> Line<'static> {
        let mut spans = vec![Span::raw(" ")];
        for (i, (key, desc)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(
                    "• ",
                    Style::new().fg(color).add_modifier(Modifier::DIM),
                ));
            }
            spans.push(Span::styled(*key, Style::new().fg(color)));
            spans.push(Span::styled(
                format!(" {} ", desc),
                Style::new().fg(color).add_modifier(Modifier::DIM),
            ));
        }
        Line::from(spans)
    }
}
