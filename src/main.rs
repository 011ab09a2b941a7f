use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;

use sift::app::{r#loop::run_loop, state::AppState};
use sift::config::Config;
use sift::infrastructure::http::HttpDataSource;

fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        tracing::error!(panic = %panic_info, "panic");
        original_hook(panic_info);
    }));
}

#[tokio::main]
async fn main() -> Result<()> {
    let logging = sift::logging::init();
    setup_panic_hook();

    // Build the client before touching the terminal so a bad config
    // doesn't leave it in raw mode.
    let config = Config::load();
    tracing::info!(
        endpoint = %config.endpoint,
        debounce_ms = config.debounce_ms,
        theme = config.theme.label(),
        "starting"
    );
    let source = Arc::new(HttpDataSource::from_config(&config)?);
    let app_state = AppState::new(&config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_loop(&mut terminal, app_state, source).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = ?err, "exited with error");
        println!("{:?}", err);
        if let Some(guard) = &logging {
            println!("see logs in {}", guard.log_dir().display());
        }
    }

    Ok(())
}
