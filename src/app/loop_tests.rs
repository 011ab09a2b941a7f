use super::*;
use crate::app::action::Action;
use crate::app::command::Command;
use crate::app::search::SearchController;
use crate::app::state::AppState;
use crate::domain::models::{LoadingState, Record};
use crate::domain::source::{FetchError, MockDataSource};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use rand::{Rng, SeedableRng};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

fn users() -> Vec<Record> {
    vec![Record::new("Leanne Graham"), Record::new("Ervin Howell")]
}

fn fast_state() -> AppState<'static> {
    AppState {
        search: SearchController::new(Duration::from_millis(50)),
        ..Default::default()
    }
}

fn mock_source() -> MockDataSource {
    let mut mock = MockDataSource::new();
    mock.expect_endpoint()
        .returning(|| "http://localhost/users".to_string());
    mock
}

fn key_event(code: KeyCode) -> Result<Event, std::io::Error> {
    Ok(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
}

fn screen_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

#[tokio::test]
async fn test_handle_command_success() {
    let mut mock = MockDataSource::new();
    mock.expect_fetch().times(1).returning(|| Ok(users()));

    let source = Arc::new(mock);
    let (tx, mut rx) = mpsc::channel(2);

    handle_command(Command::FetchUsers, source, tx).unwrap();

    assert_eq!(rx.recv().await.unwrap(), Action::FetchStarted);
    let action = rx.recv().await.unwrap();
    if let Action::UsersLoaded(records) = action {
        assert_eq!(records, users());
    } else {
        panic!("Expected Action::UsersLoaded, got {action:?}");
    }
}

#[tokio::test]
async fn test_handle_command_error_propagation() {
    let mut mock = MockDataSource::new();
    mock.expect_fetch()
        .times(1)
        .returning(|| Err(FetchError::new("Network Error")));

    let source = Arc::new(mock);
    let (tx, mut rx) = mpsc::channel(2);
    let mut state = AppState::default();

    handle_command(Command::FetchUsers, source, tx).unwrap();

    // 1. First action: FetchStarted
    let action1 = rx.recv().await.unwrap();
    crate::app::reducer::update(&mut state, action1);
    assert_eq!(state.loading, LoadingState::Loading);

    // 2. Second action: FetchFailed
    let action2 = rx.recv().await.unwrap();
    crate::app::reducer::update(&mut state, action2);
    assert_eq!(
        state.loading,
        LoadingState::Failed("Network Error".to_string())
    );
}

#[tokio::test]
async fn test_loop_filters_after_debounce() {
    let mut mock = mock_source();
    mock.expect_fetch().times(1).returning(|| Ok(users()));

    let mut terminal = Terminal::new(TestBackend::new(60, 16)).unwrap();
    let (event_tx, event_rx) = mpsc::channel(100);

    let typist = tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(150)).await;
        for c in "Gra".chars() {
            event_tx.send(key_event(KeyCode::Char(c))).await.unwrap();
        }
        // Well past the 50ms debounce
        tokio::time::sleep(Duration::from_millis(400)).await;
        event_tx.send(key_event(KeyCode::Esc)).await.unwrap();
    });

    tokio::time::timeout(
        Duration::from_secs(10),
        run_loop_with_events(&mut terminal, fast_state(), Arc::new(mock), event_rx),
    )
    .await
    .expect("loop timed out")
    .unwrap();
    typist.await.unwrap();

    let text = screen_text(&terminal);
    assert!(text.contains("Leanne Graham"), "{text}");
    assert!(!text.contains("Ervin Howell"), "{text}");
    assert!(text.contains("Gra"), "{text}");
}

#[tokio::test]
async fn test_loop_shows_only_failure_message() {
    let mut mock = mock_source();
    mock.expect_fetch()
        .times(1)
        .returning(|| Err(FetchError::new("Network Error")));

    let mut terminal = Terminal::new(TestBackend::new(60, 16)).unwrap();
    let (event_tx, event_rx) = mpsc::channel(100);

    let typist = tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(150)).await;
        // Typing on the error screen goes nowhere
        event_tx.send(key_event(KeyCode::Char('G'))).await.unwrap();
        tokio::time::sleep(Duration::from_millis(150)).await;
        event_tx.send(key_event(KeyCode::Char('q'))).await.unwrap();
    });

    tokio::time::timeout(
        Duration::from_secs(10),
        run_loop_with_events(&mut terminal, fast_state(), Arc::new(mock), event_rx),
    )
    .await
    .expect("loop timed out")
    .unwrap();
    typist.await.unwrap();

    let text = screen_text(&terminal);
    assert!(text.contains("Network Error"), "{text}");
    assert!(!text.contains("SEARCH"), "{text}");
}

#[tokio::test]
async fn test_keystroke_fuzzing() {
    let mut mock = mock_source();
    mock.expect_fetch().times(1).returning(|| {
        Ok((0..50)
            .map(|i| Record::new(format!("User {i} Example")))
            .collect())
    });

    let source = Arc::new(mock);
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    let app_state = fast_state();

    let (event_tx, event_rx) = mpsc::channel(100);

    // Spawn a task to feed random events
    let fuzzer_handle = tokio::spawn(async move {
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        tokio::time::sleep(Duration::from_millis(50)).await;
        for _ in 0..5000 {
            let event = match rng.gen_range(0..100) {
                0..=5 => {
                    let w = rng.gen_range(10..200);
                    let h = rng.gen_range(10..100);
                    Event::Resize(w, h)
                }
                _ => generate_random_key(&mut rng),
            };
            if event_tx.send(Ok(event)).await.is_err() {
                break;
            }
            // Yield to allow the loop to process events
            if rng.gen_bool(0.1) {
                tokio::task::yield_now().await;
            }
            // Occasionally let the debounce fire
            if rng.gen_bool(0.01) {
                tokio::time::sleep(Duration::from_millis(60)).await;
            }
        }
        // Send Quit
        let _ = event_tx.send(key_event(KeyCode::Esc)).await;
    });

    // Run the real loop (with a test backend)
    let result = tokio::time::timeout(
        Duration::from_secs(30),
        run_loop_with_events(&mut terminal, app_state, source, event_rx),
    )
    .await;

    match result {
        Ok(res) => res.unwrap(),
        Err(_) => panic!("Fuzzer timed out - possible deadlock or too slow"),
    }

    fuzzer_handle.await.unwrap();
}

fn generate_random_key<R: Rng>(rng: &mut R) -> Event {
    let code = match rng.gen_range(0..20) {
        0 => KeyCode::Enter,
        1 => KeyCode::Left,
        2 => KeyCode::Right,
        3 => KeyCode::Up,
        4 => KeyCode::Down,
        5 => KeyCode::Home,
        6 => KeyCode::End,
        7 => KeyCode::PageUp,
        8 => KeyCode::PageDown,
        9 => KeyCode::Tab,
        10 => KeyCode::Delete,
        11 => KeyCode::Backspace,
        _ => {
            let c = rng.gen_range(b' '..=b'~') as char;
            KeyCode::Char(c)
        }
    };

    let mut modifiers = KeyModifiers::empty();
    if rng.gen_bool(0.05) && code != KeyCode::Char('c') {
        modifiers.insert(KeyModifiers::CONTROL);
    }
    if rng.gen_bool(0.1) {
        modifiers.insert(KeyModifiers::ALT);
    }
    if rng.gen_bool(0.1) {
        modifiers.insert(KeyModifiers::SHIFT);
    }

    Event::Key(KeyEvent::new(code, modifiers))
}
