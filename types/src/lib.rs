//! Core domain types for Tally.
//!
//! This crate contains pure domain types with no IO, no async, and minimal
//! dependencies. The engine state, the action sum type, and the numeric
//! policy all live here; everything that touches a file, a clock source, or
//! a terminal lives in the layers above.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory
#![allow(clippy::missing_panics_doc)] // Panics are documented in assertions

mod action;
mod digit;
mod history;
mod number;
mod operator;
mod scientific;
mod state;

pub use action::{Action, MemoryOp};
pub use digit::{Digit, InvalidDigitError};
pub use history::{CalcHistory, EntryId, HistoryEntry, MAX_HISTORY};
pub use number::{format_number, parse_display};
pub use operator::Operator;
pub use scientific::ScientificFn;
pub use state::{CalcMode, EngineState, PendingOp};
