use crate::domain::models::Record;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};

pub struct ResultsList<'a> {
    pub rows: Vec<&'a Record>,
    pub theme: &'a Theme,
}

impl StatefulWidget for ResultsList<'_> {
    type State = ListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut ListState) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        if self.rows.is_empty() {
            Paragraph::new(Span::styled(" no matching users", self.theme.dimmed))
                .render(area, buf);
            return;
        }

        let items: Vec<ListItem> = self
            .rows
            .iter()
            .map(|record| ListItem::new(Line::from(format!(" {}", record.name))))
            .collect();

        let list = List::new(items)
            .style(self.theme.list_item)
            .highlight_style(self.theme.list_selected);

        StatefulWidget::render(list, area, buf, state);
    }
}
