use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use super::helpers::{centered_band, centered_rect_fixed_height};

/// Full-screen states that replace the search view entirely.
pub enum StatusScreen<'a> {
    Loading { spinner: &'a str },
    Failed { message: &'a str },
    NoResult,
}

pub struct Status<'a> {
    pub screen: StatusScreen<'a>,
    pub theme: &'a Theme,
}

impl Widget for Status<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        match self.screen {
            StatusScreen::Loading { spinner } => {
                Paragraph::new(Line::from(Span::styled(
                    spinner.to_string(),
                    self.theme.border_focus,
                )))
                .alignment(Alignment::Center)
                .render(centered_band(1, area), buf);
            }
            StatusScreen::Failed { message } => {
                // The message is shown exactly as reported
                let target = centered_rect_fixed_height(80, 3, area);
                if target.width > 0 && target.height > 0 {
                    Paragraph::new(Span::styled(message.to_string(), self.theme.error_text))
                        .alignment(Alignment::Center)
                        .wrap(Wrap { trim: true })
                        .render(target, buf);
                }
            }
            StatusScreen::NoResult => {
                Paragraph::new(Span::styled("No result found...", self.theme.list_item))
                    .alignment(Alignment::Center)
                    .render(centered_band(1, area), buf);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(screen: StatusScreen<'_>, width: u16, height: u16) -> String {
        let theme = Theme::default();
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        Status { screen, theme: &theme }.render(area, &mut buf);
        let mut text = String::new();
        for y in 0..height {
            for x in 0..width {
                text.push_str(buf[(x, y)].symbol());
            }
        }
        text
    }

    #[test]
    fn test_failed_shows_message_only() {
        let text = render(StatusScreen::Failed { message: "Network Error" }, 40, 9);
        assert!(text.contains("Network Error"));
        assert_eq!(text.trim(), "Network Error");
    }

    #[test]
    fn test_no_result_message() {
        let text = render(StatusScreen::NoResult, 40, 5);
        assert!(text.contains("No result found..."));
    }

    #[test]
    fn test_zero_area_is_noop() {
        assert_eq!(render(StatusScreen::Loading { spinner: "⠋" }, 0, 0), "");
    }
}
