//! Core engine for Tally - the calculator state machine without TUI
//! dependencies.
//!
//! The [`dispatch`] function is the whole arithmetic policy: a pure reducer
//! over [`EngineState`]. The [`App`] shell wraps one state instance with the
//! view-facing concerns (status line, history panel, persistence plumbing)
//! that the terminal UI renders from.

mod app;
mod config;
mod dispatch;
mod session_state;


pub use app::{App, HistoryPanelState, UiOptions, KEY_FLASH_DURATION};
pub use config::{AppConfig, ConfigError, TallyConfig};
pub use dispatch::dispatch;
pub use session_state::SessionState;

// Re-export the domain types so downstream crates only need this one.
pub use tally_types::{
    Action, CalcHistory, CalcMode, Digit, EngineState, EntryId, HistoryEntry, InvalidDigitError,
    MemoryOp, Operator, PendingOp, ScientificFn, MAX_HISTORY, format_number, parse_display,
};
