use crate::app::{
    action::{Action, UpdateResult},
    state::AppState,
};

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::SelectNext => move_selection(state, 1),
        Action::SelectPrev => move_selection(state, -1),
        Action::SelectFirst => {
            let len = state.visible_results().len();
            state.list_state.select(if len == 0 { None } else { Some(0) });
        }
        Action::SelectLast => {
            let len = state.visible_results().len();
            state.list_state.select(len.checked_sub(1));
        }
        _ => return UpdateResult::NotHandled,
    }
    UpdateResult::Handled(None)
}

fn move_selection(state: &mut AppState, delta: isize) {
    let len = state.visible_results().len();
    if len == 0 {
        state.list_state.select(None);
        return;
    }

    let next = match state.list_state.selected() {
        Some(i) => (i as isize + delta).rem_euclid(len as isize) as usize,
        None => 0,
    };
    state.list_state.select(Some(next));
}

/// Keeps the selection inside the visible rows after the filter changes.
pub fn clamp_selection(state: &mut AppState) {
    let len = state.visible_results().len();
    let selected = match (len, state.list_state.selected()) {
        (0, _) => None,
        (_, None) => Some(0),
        (len, Some(i)) => Some(i.min(len - 1)),
    };
    state.list_state.select(selected);
}
