use super::keymap::KeyMap;
use super::search::SearchController;
use crate::config::Config;
use crate::domain::models::{LoadingState, Record};
use crate::theme::{PaletteType, Theme};
use ratatui::widgets::ListState;
use std::sync::Arc;

pub mod input;

// Re-exports
pub use input::{AppTextArea, InputState};

pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// What the screen shows, derived from the loading lifecycle and the
/// search state.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen<'s> {
    Loading,
    Failed(&'s str),
    NoResult,
    Search {
        pending: bool,
        rows: Vec<&'s Record>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState<'a> {
    // --- Lifecycle ---
    pub should_quit: bool,
    pub loading: LoadingState,
    pub endpoint: String,

    // --- Directory Data (The "Source of Truth") ---
    // None until the fetch lands; the fetch itself always yields Some.
    pub results: Option<Vec<Record>>,

    // --- Search ---
    pub search: SearchController,
    pub input: InputState<'a>,

    // --- UI State ---
    pub list_state: ListState,
    pub spinner: String,
    pub frame_count: u64,

    // --- Config ---
    pub keymap: Arc<KeyMap>,
    pub palette_type: PaletteType,
    pub theme: Theme,
}

impl AppState<'_> {
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            endpoint: config.endpoint.clone(),
            search: SearchController::new(config.debounce()),
            palette_type: config.theme,
            theme: Theme::from_palette_type(config.theme),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn screen(&self) -> Screen<'_> {
        match &self.loading {
            LoadingState::Idle | LoadingState::Loading => Screen::Loading,
            LoadingState::Failed(message) => Screen::Failed(message),
            LoadingState::Loaded => match &self.results {
                None => Screen::NoResult,
                Some(records) => Screen::Search {
                    pending: self.search.is_pending(),
                    rows: self.search.visible_results(records),
                },
            },
        }
    }

    #[must_use]
    pub fn visible_results(&self) -> Vec<&Record> {
        self.results
            .as_deref()
            .map(|records| self.search.visible_results(records))
            .unwrap_or_default()
    }

    #[must_use]
    pub fn total_results(&self) -> usize {
        self.results.as_ref().map_or(0, Vec::len)
    }
}

impl Default for AppState<'_> {
    fn default() -> Self {
        Self {
            should_quit: false,
            loading: LoadingState::Idle,
            endpoint: crate::config::DEFAULT_ENDPOINT.to_string(),
            results: None,
            search: SearchController::default(),
            input: InputState::default(),
            list_state: ListState::default(),
            spinner: SPINNER_FRAMES[0].to_string(),
            frame_count: 0,
            keymap: Arc::new(KeyMap::default()),
            palette_type: PaletteType::CatppuccinMocha,
            theme: Theme::default(),
        }
    }
}
