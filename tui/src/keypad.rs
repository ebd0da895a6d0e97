//! Keypad layout model.
//!
//! The keypad is a reference grid for the keyboard bindings, not a clickable
//! widget. Keys are identified by canonical ASCII ids; the pretty label
//! (Unicode operator glyphs, `π`) is resolved against the active glyph set
//! at render time. The ids double as the flash labels reported by the input
//! layer.

use tally_engine::CalcMode;

use crate::theme::Glyphs;

/// Kinds drive the keycap color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    Digit,
    OperatorKey,
    Equals,
    ClearKey,
    MemoryKey,
    SciKey,
}

/// One keycap: canonical id plus its color class.
#[derive(Debug, Clone, Copy)]
pub struct KeyCap {
    pub id: &'static str,
    pub kind: KeyKind,
}

const fn digit(id: &'static str) -> KeyCap {
    KeyCap {
        id,
        kind: KeyKind::Digit,
    }
}

const fn op(id: &'static str) -> KeyCap {
    KeyCap {
        id,
        kind: KeyKind::OperatorKey,
    }
}

const fn sci(id: &'static str) -> KeyCap {
    KeyCap {
        id,
        kind: KeyKind::SciKey,
    }
}

const fn mem(id: &'static str) -> KeyCap {
    KeyCap {
        id,
        kind: KeyKind::MemoryKey,
    }
}

const fn clear(id: &'static str) -> KeyCap {
    KeyCap {
        id,
        kind: KeyKind::ClearKey,
    }
}

const EQUALS: KeyCap = KeyCap {
    id: "=",
    kind: KeyKind::Equals,
};

const MAIN_ROWS: &[&[KeyCap]] = &[
    &[digit("7"), digit("8"), digit("9"), op("/")],
    &[digit("4"), digit("5"), digit("6"), op("*")],
    &[digit("1"), digit("2"), digit("3"), op("-")],
    &[digit("0"), digit("."), EQUALS, op("+")],
    &[
        clear("AC"),
        clear("CE"),
        mem("MC"),
        mem("MR"),
        mem("M+"),
        mem("M-"),
    ],
];

const SCI_ROWS: &[&[KeyCap]] = &[
    &[
        sci("sin"),
        sci("cos"),
        sci("tan"),
        sci("log"),
        sci("ln"),
        sci("sqrt"),
    ],
    &[
        sci("sqr"),
        sci("cube"),
        sci("inv"),
        sci("%"),
        sci("pi"),
        sci("e"),
    ],
];

/// The keypad rows for the active mode, scientific rows first.
#[must_use]
pub fn rows(mode: CalcMode) -> Vec<&'static [KeyCap]> {
    let mut rows: Vec<&'static [KeyCap]> = Vec::new();
    if mode == CalcMode::Scientific {
        rows.extend(SCI_ROWS.iter().copied());
    }
    rows.extend(MAIN_ROWS.iter().copied());
    rows
}

/// Number of rows the keypad occupies for the given mode.
#[must_use]
pub fn row_count(mode: CalcMode) -> u16 {
    rows(mode).len() as u16
}

/// Resolve a canonical key id to its display label.
#[must_use]
pub fn label(id: &'static str, glyphs: &Glyphs) -> &'static str {
    match id {
        "*" => glyphs.multiply,
        "/" => glyphs.divide,
        "-" => glyphs.minus,
        "pi" => glyphs.pi,
        "sqrt" => glyphs.sqrt,
        "sqr" => glyphs.square,
        "cube" => glyphs.cube,
        "inv" => "1/x",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use tally_engine::CalcMode;

    use super::{rows, KeyKind};

    #[test]
    fn standard_mode_hides_scientific_rows() {
        let standard = rows(CalcMode::Standard);
        assert!(
            standard
                .iter()
                .flat_map(|row| row.iter())
                .all(|cap| cap.kind != KeyKind::SciKey)
        );
    }

    #[test]
    fn scientific_mode_offers_the_full_table() {
        let scientific = rows(CalcMode::Scientific);
        let sci_caps: Vec<&str> = scientific
            .iter()
            .flat_map(|row| row.iter())
            .filter(|cap| cap.kind == KeyKind::SciKey)
            .map(|cap| cap.id)
            .collect();
        assert_eq!(sci_caps.len(), 12);
        assert!(sci_caps.contains(&"sin"));
        assert!(sci_caps.contains(&"pi"));
        assert!(sci_caps.contains(&"%"));
    }
}
