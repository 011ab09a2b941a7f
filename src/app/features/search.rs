use crate::app::{
    action::{Action, UpdateResult},
    state::{AppState, Screen},
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Instant;

use super::navigation::clamp_selection;

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::SearchInput(key) => {
            if accepts_input(state) && !is_line_break(key) {
                let before = state.input.text();
                state.input.text_area.input(*key);
                let after = state.input.text();
                // Cursor movement alone must not restart the timer
                if after != before {
                    state.search.on_input(after, Instant::now());
                }
            }
            UpdateResult::Handled(None)
        }
        Action::DebounceElapsed(now) => {
            if state.search.fire(*now) {
                clamp_selection(state);
            }
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}

fn accepts_input(state: &AppState) -> bool {
    matches!(state.screen(), Screen::Search { .. })
}

fn is_line_break(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter => true,
        KeyCode::Char('m' | 'j') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}
