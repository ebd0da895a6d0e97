//! The engine state record.

use serde::{Deserialize, Serialize};

use crate::history::CalcHistory;
use crate::number::parse_display;
use crate::operator::Operator;

/// Which keypad the view offers. Has no effect on arithmetic; scientific
/// actions evaluate identically in either mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalcMode {
    #[default]
    Standard,
    Scientific,
}

impl CalcMode {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Scientific => "scientific",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Standard => Self::Scientific,
            Self::Scientific => Self::Standard,
        }
    }
}

/// The committed left-hand operand and its operator.
///
/// The pair is one value on purpose: every reachable state has either both
/// or neither, so "a pending operator implies an accumulator" holds by
/// construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingOp {
    pub accumulator: f64,
    pub operator: Operator,
}

/// The complete calculator state, owned by the caller and rewritten by the
/// dispatcher one action at a time.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineState {
    /// The shown value, kept as text so in-progress entry (`"3."`) and
    /// leading-zero suppression are representable exactly as typed.
    pub display: String,
    /// The pending binary operation, if an operator has been selected.
    pub pending: Option<PendingOp>,
    /// True immediately after an operator, equals, memory-recall, or
    /// scientific action; the next digit starts a fresh operand.
    pub awaiting_fresh_operand: bool,
    /// The memory register. Survives both clear actions.
    pub memory: f64,
    pub mode: CalcMode,
    pub history: CalcHistory,
}

impl Default for EngineState {
    fn default() -> Self {
        Self {
            display: "0".to_owned(),
            pending: None,
            awaiting_fresh_operand: false,
            memory: 0.0,
            mode: CalcMode::default(),
            history: CalcHistory::default(),
        }
    }
}

impl EngineState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a state from the persisted subset. The in-flight entry state
    /// starts fresh; an in-progress calculation does not survive a restart.
    #[must_use]
    pub fn with_session(memory: f64, history: CalcHistory, mode: CalcMode) -> Self {
        Self {
            memory,
            history,
            mode,
            ..Self::default()
        }
    }

    /// The numeric value of the display register.
    #[must_use]
    pub fn operand(&self) -> f64 {
        parse_display(&self.display)
    }
}
