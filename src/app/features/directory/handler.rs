use crate::app::{action::Action, command::Command};
use crate::domain::source::DataSource;
use anyhow::Result;
use std::sync::Arc;
use tokio::sync::mpsc;

pub fn handle_command(
    command: Command,
    source: Arc<dyn DataSource>,
    tx: mpsc::Sender<Action>,
) -> Result<()> {
    match command {
        Command::FetchUsers => {
            tokio::spawn(async move {
                let _ = tx.send(Action::FetchStarted).await;
                match source.fetch().await {
                    Ok(records) => {
                        let _ = tx.send(Action::UsersLoaded(records)).await;
                    }
                    Err(e) => {
                        let _ = tx.send(Action::FetchFailed(e)).await;
                    }
                }
            });
        }
    }
    Ok(())
}
