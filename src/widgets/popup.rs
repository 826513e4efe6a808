use ratatui::{Frame, layout::Rect, widgets::Clear};

/// A `width` x `height` rect centered in `area`, clamped to fit
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// `area` shrunk by the given margins on each side
pub fn inset_rect(area: Rect, horizontal_margin: u16, vertical_margin: u16) -> Rect {
    let width = area.width.saturating_sub(horizontal_margin.saturating_mul(2));
    let height = area.height.saturating_sub(vertical_margin.saturating_mul(2));
    Rect {
        x: area.x + horizontal_margin.min(area.width / 2),
        y: area.y + vertical_margin.min(area.height / 2),
        width,
        height,
    }
}

/// Blank the cells under an overlay
pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}
