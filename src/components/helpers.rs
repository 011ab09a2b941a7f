use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// A full-width band of `height` rows centred vertically in `r`.
pub fn centered_band(height: u16, r: Rect) -> Rect {
    let height = height.min(r.height);
    Rect {
        x: r.x,
        y: r.y + (r.height - height) / 2,
        width: r.width,
        height,
    }
}

pub fn centered_rect_fixed_height(percent_x: u16, height: u16, r: Rect) -> Rect {
    let band = centered_band(height, r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(100u16.saturating_sub(percent_x) / 2),
            Constraint::Percentage(percent_x.min(100)),
            Constraint::Percentage(100u16.saturating_sub(percent_x) / 2),
        ])
        .split(band)[1]
}
