use crate::app::{
    action::Action, command::Command, input::map_event_to_action, reducer, state::AppState, ui,
};
use crate::domain::source::DataSource;

use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::{backend::Backend, Terminal};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tokio::time::interval;

const TICK_RATE: Duration = Duration::from_millis(100);

pub async fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: AppState<'_>,
    source: Arc<dyn DataSource>,
) -> Result<()> {
    // User input channel
    let (event_tx, event_rx) = mpsc::channel(100);
    tokio::task::spawn_blocking(move || loop {
        match event::read() {
            Ok(evt) => {
                if event_tx.blocking_send(Ok(evt)).is_err() {
                    break;
                }
            }
            Err(e) => {
                let _ = event_tx.blocking_send(Err(e));
                break;
            }
        }
    });

    run_loop_with_events(terminal, app_state, source, event_rx).await
}

pub async fn run_loop_with_events<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app_state: AppState<'_>,
    source: Arc<dyn DataSource>,
    mut event_rx: mpsc::Receiver<Result<Event, std::io::Error>>,
) -> Result<()> {
    let (action_tx, mut action_rx) = mpsc::channel(100);
    let mut interval = interval(TICK_RATE);

    // Initial Load, the only fetch of the session
    tracing::info!(endpoint = %source.endpoint(), "requesting users");
    handle_command(Command::FetchUsers, source.clone(), action_tx.clone())?;

    loop {
        // --- 1. Render ---
        terminal.draw(|f| {
            ui::draw(f, &mut app_state);
        })?;

        // --- 2. Event Handling (TEA Runtime) ---
        let debounce_at = app_state.search.deadline();
        let action = tokio::select! {
            _ = interval.tick() => Some(Action::Tick),

            // User Input
            Some(res) = event_rx.recv() => {
                let event = match res {
                    Ok(e) => e,
                    Err(e) => return Err(e.into()),
                };
                map_event_to_action(event, &app_state)
            },

            // Async Results
            Some(a) = action_rx.recv() => Some(a),

            // Debounce timer; a keystroke replaces the deadline before the next pass
            () = tokio::time::sleep_until(debounce_at.unwrap_or_else(Instant::now).into()),
                if debounce_at.is_some() => Some(Action::DebounceElapsed(Instant::now())),
        };

        // --- 3. Update (Reducer) ---
        if let Some(action) = action {
            if let Action::Quit = action {
                break;
            }

            let command = reducer::update(&mut app_state, action);

            if app_state.should_quit {
                break;
            }

            if let Some(cmd) = command {
                handle_command(cmd, source.clone(), action_tx.clone())?;
            }
        }
    }

    Ok(())
}

pub(crate) fn handle_command(
    command: Command,
    source: Arc<dyn DataSource>,
    tx: mpsc::Sender<Action>,
) -> Result<()> {
    crate::app::features::handle_command(command, source, tx)
}

#[cfg(test)]
#[path = "loop_tests.rs"]
mod tests;
