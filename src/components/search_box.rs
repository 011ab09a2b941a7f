use crate::app::state::InputState;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Widget},
};

pub struct SearchBox<'a, 'b> {
    pub input: &'a InputState<'b>,
    pub pending: bool,
    pub spinner: &'a str,
    pub theme: &'a Theme,
}

impl Widget for SearchBox<'_, '_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut title = vec![
            Span::raw(" "),
            Span::styled("SEARCH", self.theme.border_focus),
            Span::raw(" "),
        ];
        // Spinner alongside the input while a debounce is pending
        if self.pending {
            title.push(Span::styled(
                format!("{} ", self.spinner),
                self.theme.border_focus,
            ));
        }

        let block = Block::default()
            .title(Line::from(title))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus);

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width > 0 && inner.height > 0 {
            Widget::render(&self.input.text_area, inner, buf);
        }
    }
}
