use crate::app::{
    action::{Action, UpdateResult},
    state::{AppState, SPINNER_FRAMES},
};

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::Tick => {
            state.frame_count = state.frame_count.wrapping_add(1);
            let frame = (state.frame_count % SPINNER_FRAMES.len() as u64) as usize;
            state.spinner = SPINNER_FRAMES[frame].to_string();
            UpdateResult::Handled(None)
        }
        Action::Quit => {
            state.should_quit = true;
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}
