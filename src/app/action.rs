use crate::app::command::Command;
use crate::domain::models::Record;
use crate::domain::source::FetchError;
use std::time::Instant;

#[derive(Debug, Clone)]
pub enum UpdateResult {
    Handled(Option<Command>),
    NotHandled,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // --- System / Terminal ---
    Tick,
    Quit,

    // --- Navigation (Result List) ---
    SelectNext,
    SelectPrev,
    SelectFirst,
    SelectLast,

    // --- Search ---
    SearchInput(crossterm::event::KeyEvent), // Edit the query text box
    DebounceElapsed(Instant),                // The pending debounce deadline passed

    // --- Async Results (The "Callback") ---
    FetchStarted,               // The one-time fetch is in flight
    UsersLoaded(Vec<Record>),   // Fetch succeeded
    FetchFailed(FetchError),    // Fetch failed, terminal for the session
}
