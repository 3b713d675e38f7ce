//! Error types for zodiac classification and reference-table loading.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from classifying a longitude or looking up a sector by number.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ClassifyError {
    /// A 1-based sector number outside `1..=max`.
    InvalidIndex {
        /// Which numbering was violated ("rashi", "nakshatra", "pada").
        kind: &'static str,
        value: u32,
        max: u32,
    },
    /// Longitude is NaN or infinite.
    InvalidLongitude(f64),
    /// Angle cannot be expressed as [`crate::Dms`] (non-finite or too large).
    InvalidAngle(f64),
}

impl Display for ClassifyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidIndex { kind, value, max } => {
                write!(f, "invalid {kind} number {value}: expected 1..={max}")
            }
            Self::InvalidLongitude(lon) => write!(f, "invalid longitude: {lon}"),
            Self::InvalidAngle(deg) => write!(f, "angle {deg} is out of DMS range"),
        }
    }
}

impl Error for ClassifyError {}

/// Errors from loading a reference-table file.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ReferenceError {
    /// I/O error while reading the file.
    Io(String),
    /// JSON did not match the reference-table schema.
    Parse(String),
    /// Wrong number of entries in a table.
    Count {
        table: &'static str,
        expected: usize,
        found: usize,
    },
    /// An entry's `number` does not match its 1-based position in the table.
    Numbering {
        table: &'static str,
        position: usize,
        found: u32,
    },
}

impl Display for ReferenceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "I/O error: {msg}"),
            Self::Parse(msg) => write!(f, "reference parse error: {msg}"),
            Self::Count {
                table,
                expected,
                found,
            } => write!(f, "{table} table has {found} entries, expected {expected}"),
            Self::Numbering {
                table,
                position,
                found,
            } => write!(
                f,
                "{table} entry at position {position} is numbered {found}, expected {position}"
            ),
        }
    }
}

impl Error for ReferenceError {}

impl From<std::io::Error> for ReferenceError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

impl From<serde_json::Error> for ReferenceError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_index_message() {
        let e = ClassifyError::InvalidIndex {
            kind: "rashi",
            value: 13,
            max: 12,
        };
        assert_eq!(e.to_string(), "invalid rashi number 13: expected 1..=12");
    }

    #[test]
    fn numbering_message_is_one_based() {
        let e = ReferenceError::Numbering {
            table: "nakshatra",
            position: 5,
            found: 7,
        };
        assert_eq!(
            e.to_string(),
            "nakshatra entry at position 5 is numbered 7, expected 5"
        );
    }

    #[test]
    fn io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let e: ReferenceError = io.into();
        assert!(matches!(e, ReferenceError::Io(_)));
    }
}
