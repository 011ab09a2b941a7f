use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct Header<'a> {
    pub endpoint: &'a str,
    pub matched: usize,
    pub total: usize,
    pub theme: &'a Theme,
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let stats = format!(" {} / {} users ", self.matched, self.total);
        let spans = vec![
            Span::styled(" SIFT ", self.theme.header_logo),
            Span::styled(stats, self.theme.header_stats),
            Span::styled(format!(" {} ", self.endpoint), self.theme.header_item),
        ];

        Paragraph::new(Line::from(spans))
            .style(self.theme.header)
            .render(area, buf);
    }
}
