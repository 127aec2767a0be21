// error.rs - Error types for table loading and lookup.
//
// Loading is the only fallible phase. Lookups against a loaded table return
// plain negative results; only a missing table is reported as an error.

use std::fmt;
use std::io;

use crate::tables::Tables;

/// Error type for decoding, loading and accessing Unicode data tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UcError {
    /// The table source could not be opened or read.
    Io { kind: io::ErrorKind, message: String },
    /// The table source produced no bytes.
    EmptySource,
    /// A read needed `needed` bytes at `offset` but the buffer holds `len`.
    Truncated { offset: usize, needed: usize, len: usize },
    /// The table data is structurally invalid.
    Malformed { table: Tables, reason: &'static str },
    /// A count does not fit the binary format (writer side).
    Capacity { table: Tables, count: usize },
    /// The table was queried before it was loaded.
    Unpopulated(Tables),
}

impl fmt::Display for UcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UcError::Io { message, .. } => write!(f, "i/o error: {}", message),
            UcError::EmptySource => write!(f, "table source is empty"),
            UcError::Truncated { offset, needed, len } => write!(
                f,
                "truncated table: {} bytes needed at offset {}, buffer holds {}",
                needed, offset, len
            ),
            UcError::Malformed { table, reason } => {
                write!(f, "malformed {} table: {}", table.name(), reason)
            }
            UcError::Capacity { table, count } => {
                write!(f, "{} table too large: {} entries", table.name(), count)
            }
            UcError::Unpopulated(table) => write!(f, "{} table is not loaded", table.name()),
        }
    }
}

impl std::error::Error for UcError {}

impl From<io::Error> for UcError {
    fn from(err: io::Error) -> Self {
        UcError::Io {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

impl UcError {
    /// Shorthand for a [`UcError::Malformed`] error.
    pub(crate) fn malformed(table: Tables, reason: &'static str) -> Self {
        UcError::Malformed { table, reason }
    }

    /// Returns true for errors raised while reaching the source, as opposed
    /// to errors in the data itself.
    pub fn is_io(&self) -> bool {
        matches!(self, UcError::Io { .. } | UcError::EmptySource)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_io_error() {
        let err = UcError::from(io::Error::new(io::ErrorKind::NotFound, "ctype.dat"));
        assert!(matches!(
            err,
            UcError::Io {
                kind: io::ErrorKind::NotFound,
                ..
            }
        ));
        assert!(err.is_io());
        assert_eq!(err.to_string(), "i/o error: ctype.dat");
    }

    #[test]
    fn empty_source_is_io() {
        assert!(UcError::EmptySource.is_io());
        assert!(!UcError::Unpopulated(Tables::CASE).is_io());
    }

    #[test]
    fn display_names_table() {
        let err = UcError::malformed(Tables::DECOMP, "sentinel missing");
        assert_eq!(err.to_string(), "malformed decomp table: sentinel missing");
        assert_eq!(
            UcError::Unpopulated(Tables::NUM).to_string(),
            "num table is not loaded"
        );
    }

    #[test]
    fn display_truncated() {
        let err = UcError::Truncated {
            offset: 8,
            needed: 4,
            len: 10,
        };
        assert_eq!(
            err.to_string(),
            "truncated table: 4 bytes needed at offset 8, buffer holds 10"
        );
    }

    #[test]
    fn error_trait() {
        let err: Box<dyn std::error::Error> = Box::new(UcError::EmptySource);
        assert_eq!(err.to_string(), "table source is empty");
    }
}
