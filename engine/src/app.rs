//! Application shell: one engine state plus the view-facing concerns.
//!
//! `App` owns the single [`EngineState`] instance, threads every action
//! through [`dispatch`], and autosaves the persisted subset afterwards.
//! Everything here is UI bookkeeping; the arithmetic policy lives entirely
//! in the dispatcher.

use std::mem;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant, SystemTime};

use tally_types::{Action, EngineState, HistoryEntry};

use crate::config::TallyConfig;
use crate::dispatch::dispatch;
use crate::session_state::SessionState;

/// UI configuration options derived from config.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiOptions {
    pub ascii_only: bool,
    pub high_contrast: bool,
    pub reduced_motion: bool,
}

/// Interactive state for the history panel.
#[derive(Debug, Clone, Copy, Default)]
pub struct HistoryPanelState {
    pub visible: bool,
    /// Index into the newest-first entry list.
    pub selected: usize,
}

/// How long a pressed keycap stays highlighted.
pub const KEY_FLASH_DURATION: Duration = Duration::from_millis(160);

#[derive(Debug, Clone, Copy)]
struct KeyFlash {
    label: &'static str,
    started_at: Instant,
}

pub struct App {
    state: EngineState,
    data_dir: PathBuf,
    ui_options: UiOptions,
    should_quit: bool,
    status: Option<String>,
    history_panel: HistoryPanelState,
    key_flash: Option<KeyFlash>,
    autosave_warning_shown: bool,
}

impl App {
    /// Build the app from config, loading any persisted session from the
    /// default data directory (`TALLY_DATA_DIR`, else `~/.tally`, else
    /// `./.tally`).
    #[must_use]
    pub fn new(config: &TallyConfig) -> Self {
        Self::with_data_dir(config, resolve_data_dir())
    }

    /// Build the app with an explicit data directory.
    #[must_use]
    pub fn with_data_dir(config: &TallyConfig, data_dir: PathBuf) -> Self {
        let session_path = data_dir.join(SessionState::FILENAME);
        let state = match SessionState::load(&session_path) {
            Ok(Some(session)) => {
                EngineState::with_session(session.memory, session.history, session.mode)
            }
            Ok(None) => {
                let mut state = EngineState::new();
                state.mode = config.start_mode();
                state
            }
            Err(e) => {
                tracing::warn!(path = %session_path.display(), "Failed to load session: {e}");
                let mut state = EngineState::new();
                state.mode = config.start_mode();
                state
            }
        };

        Self {
            state,
            data_dir,
            ui_options: config.ui_options(),
            should_quit: false,
            status: None,
            history_panel: HistoryPanelState::default(),
            key_flash: None,
            autosave_warning_shown: false,
        }
    }

    /// Dispatch one action and autosave the persisted subset.
    pub fn apply(&mut self, action: Action) {
        let state = mem::take(&mut self.state);
        self.state = dispatch(state, action, SystemTime::now());
        self.clamp_history_selection();
        self.autosave_session();
    }

    #[must_use]
    pub fn state(&self) -> &EngineState {
        &self.state
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.ui_options
    }

    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }

    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    // === History panel ===

    #[must_use]
    pub fn history_panel(&self) -> HistoryPanelState {
        self.history_panel
    }

    pub fn toggle_history_panel(&mut self) {
        self.history_panel.visible = !self.history_panel.visible;
        self.history_panel.selected = 0;
    }

    pub fn history_select_prev(&mut self) {
        self.history_panel.selected = self.history_panel.selected.saturating_sub(1);
    }

    pub fn history_select_next(&mut self) {
        let last = self.state.history.len().saturating_sub(1);
        self.history_panel.selected = (self.history_panel.selected + 1).min(last);
    }

    #[must_use]
    pub fn selected_history_entry(&self) -> Option<&HistoryEntry> {
        self.state.history.get(self.history_panel.selected)
    }

    /// Empty the history list. Arithmetic state is untouched.
    pub fn clear_history(&mut self) {
        self.state.history.clear();
        self.history_panel.selected = 0;
        self.autosave_session();
        self.set_status("History cleared");
    }

    fn clamp_history_selection(&mut self) {
        let last = self.state.history.len().saturating_sub(1);
        self.history_panel.selected = self.history_panel.selected.min(last);
    }

    // === Key flash ===

    /// Mark a keycap as just pressed so the keypad can flash it.
    pub fn flash_key(&mut self, label: &'static str) {
        if self.ui_options.reduced_motion {
            return;
        }
        self.key_flash = Some(KeyFlash {
            label,
            started_at: Instant::now(),
        });
    }

    /// The keycap currently flashing, if any.
    #[must_use]
    pub fn key_flash(&self) -> Option<&'static str> {
        self.key_flash
            .filter(|flash| flash.started_at.elapsed() < KEY_FLASH_DURATION)
            .map(|flash| flash.label)
    }

    /// Advance per-frame state; called once per render tick.
    pub fn tick(&mut self) {
        if let Some(flash) = self.key_flash
            && flash.started_at.elapsed() >= KEY_FLASH_DURATION
        {
            self.key_flash = None;
        }
    }

    // === Persistence ===

    #[must_use]
    pub fn session_path(&self) -> PathBuf {
        self.data_dir.join(SessionState::FILENAME)
    }

    /// Save the persisted subset. Failures are logged and surfaced once in
    /// the status line; the calculator keeps working in memory.
    fn autosave_session(&mut self) {
        let session = SessionState::new(
            self.state.memory,
            self.state.history.clone(),
            self.state.mode,
        );
        if let Err(e) = session.save(&self.session_path()) {
            tracing::warn!("Failed to save session: {e}");
            if !self.autosave_warning_shown {
                self.set_status("Session save failed; continuing without persistence");
                self.autosave_warning_shown = true;
            }
        }
    }
}

fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("TALLY_DATA_DIR") {
        return PathBuf::from(dir);
    }
    match dirs::home_dir() {
        Some(home) => home.join(".tally"),
        None => {
            tracing::warn!("No home directory; using ./.tally for session data");
            PathBuf::from(".tally")
        }
    }
}
