// prelude.rs - Convenient re-exports for table loading and lookup.
//
//! # Prelude
//!
//! ```
//! use ucdata::prelude::*;
//!
//! let ucd = UcData::new();
//! assert_eq!(ucd.loaded(), Tables::empty());
//! assert_eq!(ucd.ctype().unwrap_err(), UcError::Unpopulated(Tables::CTYPE));
//! ```

pub use crate::category::Category;
pub use crate::decoder::ByteOrder;
pub use crate::error::UcError;
pub use crate::registry::{LoadReport, UcData};
pub use crate::source::{MemorySource, SearchPath, TableSource};
pub use crate::tables::ctype::{is_han, is_hangul};
pub use crate::tables::{
    decompose_hangul, Case, CaseMapper, Decomposition, DigitValue, Number, Table, Tables,
};
pub use crate::Codepoint;
