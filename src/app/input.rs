use crate::app::{
    action::Action,
    state::{AppState, Screen},
};
use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};

pub fn map_event_to_action(event: Event, app_state: &AppState<'_>) -> Option<Action> {
    let Event::Key(key) = event else {
        // Resizes are picked up by the next draw; the mouse is not used
        return None;
    };
    if key.kind == KeyEventKind::Release {
        return None;
    }

    match app_state.screen() {
        Screen::Search { .. } => app_state
            .keymap
            .get_action(key)
            .or(Some(Action::SearchInput(key))),
        Screen::Loading | Screen::Failed(_) | Screen::NoResult => match key.code {
            KeyCode::Esc | KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::Quit)
            }
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{LoadingState, Record};
    use crossterm::event::{KeyEvent, MouseEvent, MouseEventKind};

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn loaded() -> AppState<'static> {
        AppState {
            loading: LoadingState::Loaded,
            results: Some(vec![Record::new("Leanne Graham")]),
            ..Default::default()
        }
    }

    #[test]
    fn test_search_screen_types_q() {
        let state = loaded();
        let action = map_event_to_action(press(KeyCode::Char('q')), &state);
        assert!(matches!(action, Some(Action::SearchInput(_))));
        assert_eq!(
            map_event_to_action(press(KeyCode::Down), &state),
            Some(Action::SelectNext)
        );
        assert_eq!(
            map_event_to_action(press(KeyCode::Esc), &state),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_failed_screen_only_quits() {
        let state = AppState {
            loading: LoadingState::Failed("Network Error".to_string()),
            ..Default::default()
        };
        assert_eq!(
            map_event_to_action(press(KeyCode::Char('q')), &state),
            Some(Action::Quit)
        );
        assert_eq!(map_event_to_action(press(KeyCode::Char('G')), &state), None);
        assert_eq!(map_event_to_action(press(KeyCode::Down), &state), None);
    }

    #[test]
    fn test_release_and_mouse_ignored() {
        let state = loaded();
        let mut release = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert_eq!(map_event_to_action(Event::Key(release), &state), None);

        let mouse = Event::Mouse(MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(map_event_to_action(mouse, &state), None);
        assert_eq!(map_event_to_action(Event::Resize(10, 10), &state), None);
    }
}
