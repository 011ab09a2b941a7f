use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

const HINTS: [(&str, &str); 3] = [("type", "filter"), ("↑/↓", "select"), ("Esc", "quit")];

pub struct Footer<'a> {
    pub pending: bool,
    pub spinner: &'a str,
    pub theme: &'a Theme,
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;

        let status_span = if self.pending {
            Span::styled(format!("  {} SEARCHING  ", self.spinner), theme.status_info)
        } else {
            Span::styled("  READY  ", theme.status_ready)
        };

        let mut spans = vec![status_span, Span::raw(" ")];
        let mut current_width: usize = spans.iter().map(Span::width).sum();
        let available_width = area.width.saturating_sub(2) as usize;

        // Drop hints from the right rather than wrapping
        for (key, desc) in HINTS {
            let key_span = Span::styled(format!(" {key} "), theme.footer_segment_key);
            let desc_span = Span::styled(format!(" {desc} "), theme.footer_segment_val);
            let width = key_span.width() + desc_span.width() + 1;
            if current_width + width > available_width {
                break;
            }
            spans.push(key_span);
            spans.push(desc_span);
            spans.push(Span::raw(" "));
            current_width += width;
        }

        Paragraph::new(Line::from(spans))
            .style(theme.footer)
            .render(area, buf);
    }
}
