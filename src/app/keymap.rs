use super::action::Action;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Keys that act on the search screen instead of editing the query.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyMap {
    pub search: HashMap<KeyEvent, Action>,
}

impl Default for KeyMap {
    fn default() -> Self {
        let mut search = HashMap::new();

        search.insert(key(KeyCode::Esc), Action::Quit);
        search.insert(ctrl('c'), Action::Quit);
        search.insert(key(KeyCode::Down), Action::SelectNext);
        search.insert(ctrl('n'), Action::SelectNext);
        search.insert(key(KeyCode::Up), Action::SelectPrev);
        search.insert(ctrl('p'), Action::SelectPrev);
        search.insert(key(KeyCode::PageUp), Action::SelectFirst);
        search.insert(key(KeyCode::PageDown), Action::SelectLast);

        Self { search }
    }
}

impl KeyMap {
    pub fn get_action(&self, event: KeyEvent) -> Option<Action> {
        self.search
            .get(&KeyEvent::new(event.code, event.modifiers))
            .cloned()
    }
}

fn key(code: impl Into<KeyCode>) -> KeyEvent {
    KeyEvent::new(code.into(), KeyModifiers::empty())
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}
