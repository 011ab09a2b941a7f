use super::{
    action::{Action, UpdateResult},
    command::Command,
    features,
    state::AppState,
};

type FeatureUpdate = fn(&mut AppState, &Action) -> UpdateResult;

const FEATURES: [FeatureUpdate; 4] = [
    features::ui::update,
    features::directory::update,
    features::search::update,
    features::navigation::update,
];

pub fn update(state: &mut AppState, action: Action) -> Option<Command> {
    for feature in FEATURES {
        if let UpdateResult::Handled(command) = feature(state, &action) {
            return command;
        }
    }
    tracing::trace!(?action, "unhandled action");
    None
}
