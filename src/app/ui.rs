use crate::app::state::{AppState, Screen};
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::results_list::ResultsList;
use crate::components::search_box::SearchBox;
use crate::components::status::{Status, StatusScreen};

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

pub struct AppLayout {
    pub header: Rect,
    pub search: Rect,
    pub list: Rect,
    pub footer: Rect,
}

pub fn get_layout(area: Rect) -> AppLayout {
    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(3), // Search box
            Constraint::Min(0),    // Results
            Constraint::Length(1), // Footer
        ])
        .split(area);

    AppLayout {
        header: main[0],
        search: main[1],
        list: main[2],
        footer: main[3],
    }
}

pub fn draw(f: &mut Frame, app_state: &mut AppState) {
    let area = f.area();
    if area.width == 0 || area.height == 0 {
        return;
    }

    let theme = &app_state.theme;
    let screen = match app_state.screen() {
        Screen::Loading => Some(StatusScreen::Loading {
            spinner: &app_state.spinner,
        }),
        Screen::Failed(message) => Some(StatusScreen::Failed { message }),
        Screen::NoResult => Some(StatusScreen::NoResult),
        Screen::Search { .. } => None,
    };
    if let Some(screen) = screen {
        f.render_widget(Status { screen, theme }, area);
        return;
    }

    let Some(records) = app_state.results.as_deref() else {
        return;
    };
    let rows = app_state.search.visible_results(records);
    let pending = app_state.search.is_pending();
    let layout = get_layout(area);

    // --- Header ---
    if layout.header.width > 0 && layout.header.height > 0 {
        let header = Header {
            endpoint: &app_state.endpoint,
            matched: rows.len(),
            total: app_state.total_results(),
            theme,
        };
        f.render_widget(header, layout.header);
    }

    // --- Search Box ---
    if layout.search.width > 0 && layout.search.height > 0 {
        let search_box = SearchBox {
            input: &app_state.input,
            pending,
            spinner: &app_state.spinner,
            theme,
        };
        f.render_widget(search_box, layout.search);
    }

    // --- Results ---
    if layout.list.width > 0 && layout.list.height > 0 {
        f.render_stateful_widget(
            ResultsList { rows, theme },
            layout.list,
            &mut app_state.list_state,
        );
    }

    // --- Footer ---
    if layout.footer.width > 0 && layout.footer.height > 0 {
        let footer = Footer {
            pending,
            spinner: &app_state.spinner,
            theme,
        };
        f.render_widget(footer, layout.footer);
    }
}
