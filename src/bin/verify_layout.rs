use sift::app::search::SearchController;
use sift::app::state::AppState;
use sift::app::ui;
use sift::domain::models::{LoadingState, Record};
use sift::theme::{PaletteType, Theme};
use ratatui::{backend::TestBackend, Terminal};
use std::time::{Duration, Instant};

fn states() -> Vec<AppState<'static>> {
    let users: Vec<Record> = [
        "Leanne Graham",
        "Ervin Howell",
        "Clementine Bauch",
        "Patricia Lebsack",
        "Chelsey Dietrich",
    ]
    .iter()
    .map(|n| Record::new(*n))
    .collect();

    let mut pending = AppState {
        loading: LoadingState::Loaded,
        results: Some(users.clone()),
        search: SearchController::new(Duration::from_secs(60)),
        ..Default::default()
    };
    pending.input.set_text("Le");
    pending.search.on_input("Le", Instant::now());

    vec![
        AppState::default(),
        AppState {
            loading: LoadingState::Loading,
            ..Default::default()
        },
        AppState {
            loading: LoadingState::Failed(
                "Test error message that might be long and cause issues if not handled correctly by the layout engine.".to_string(),
            ),
            ..Default::default()
        },
        AppState {
            loading: LoadingState::Loaded,
            ..Default::default()
        },
        AppState {
            loading: LoadingState::Loaded,
            results: Some(Vec::new()),
            ..Default::default()
        },
        AppState {
            loading: LoadingState::Loaded,
            results: Some(users),
            ..Default::default()
        },
        pending,
    ]
}

fn main() {
    for palette in PaletteType::all() {
        for mut app_state in states() {
            app_state.theme = Theme::from_palette_type(*palette);
            app_state.list_state.select(Some(3));

            for width in 0..100 {
                for height in 0..50 {
                    let backend = TestBackend::new(width, height);
                    let mut terminal = Terminal::new(backend).unwrap();
                    if let Err(err) = terminal.draw(|f| {
                        ui::draw(f, &mut app_state);
                    }) {
                        panic!("draw failed at {width}x{height}: {err}");
                    }
                }
            }
        }
    }

    println!("Layout verification completed successfully!");
}
