use super::config::AppConfig;
use super::keymap::{KeyConfig, KeyMap};
use crate::domain::models::{Company, CompanyDirectory};
use chrono::{DateTime, Local};
use std::sync::Arc;

pub mod error;
pub mod picker;
pub mod quote;

// Re-exports
pub use error::{ErrorSeverity, ErrorState};
pub use picker::PickerState;
pub use quote::{LogoView, QuoteView, PLACEHOLDER};

pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    // --- Lifecycle ---
    pub should_quit: bool,

    // --- Picker ---
    pub directory: CompanyDirectory,
    pub picker: PickerState,

    // --- Fetch round ---
    // Bumped on every selection; results from older rounds are dropped.
    pub generation: u64,
    pub is_loading: bool,
    pub quote: QuoteView,
    pub logo: LogoView,
    pub last_updated: Option<DateTime<Local>>,

    // --- Alerts (topmost is last) ---
    pub alerts: Vec<ErrorState>,

    // --- Animation ---
    pub frame_count: u64,
    pub spinner: String,

    // --- Config ---
    pub keymap: Arc<KeyMap>,
    pub palette_type: crate::theme::PaletteType,
    pub theme: crate::theme::Theme,
    pub report_malformed_quotes: bool,
}

impl AppState {
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        Self {
            keymap: Arc::new(KeyMap::from_config(&config.keys)),
            palette_type: config.theme,
            theme: crate::theme::Theme::from_palette_type(config.theme),
            report_malformed_quotes: config.report_malformed_quotes,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn selected_company(&self) -> Option<&Company> {
        self.picker
            .selected()
            .and_then(|idx| self.directory.get(idx))
    }

    #[must_use]
    pub fn has_alert(&self) -> bool {
        !self.alerts.is_empty()
    }
}

impl Default for AppState {
    fn default() -> Self {
        let mut picker = PickerState::default();
        picker.select(0);
        Self {
            should_quit: false,
            directory: CompanyDirectory::default(),
            picker,
            generation: 0,
            is_loading: false,
            quote: QuoteView::placeholder(),
            logo: LogoView::Empty,
            last_updated: None,
            alerts: Vec::new(),
            frame_count: 0,
            spinner: SPINNER_FRAMES[0].to_string(),
            keymap: Arc::new(KeyMap::from_config(&KeyConfig::default())),
            palette_type: crate::theme::PaletteType::CatppuccinMocha,
            theme: crate::theme::Theme::default(),
            report_malformed_quotes: false,
        }
    }
}
