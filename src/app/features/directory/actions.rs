use crate::app::{
    action::{Action, UpdateResult},
    state::AppState,
};
use crate::domain::models::LoadingState;

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::FetchStarted => {
            if state.loading == LoadingState::Idle {
                state.loading = LoadingState::Loading;
            }
            UpdateResult::Handled(None)
        }
        Action::UsersLoaded(records) => {
            if state.loading.is_terminal() {
                tracing::warn!("ignoring users delivered after the fetch settled");
                return UpdateResult::Handled(None);
            }
            tracing::info!(count = records.len(), "users loaded");
            // An empty list is still a result, never a reason to keep the old state
            state.results = Some(records.clone());
            state.loading = LoadingState::Loaded;
            let visible = state.visible_results().len();
            state.list_state.select(if visible == 0 { None } else { Some(0) });
            UpdateResult::Handled(None)
        }
        Action::FetchFailed(err) => {
            if state.loading.is_terminal() {
                return UpdateResult::Handled(None);
            }
            tracing::error!(error = %err, "fetching users failed");
            state.loading = LoadingState::Failed(err.message.clone());
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}
