// tables/mod.rs - Table registry
// Each table file maps to one module implementing the `Table` trait.

pub mod case;
pub mod cmbcl;
pub mod ctype;
pub mod decomp;
pub mod number;

use bitflags::bitflags;

use crate::decoder::ByteReader;
use crate::error::UcError;

pub use case::{Case, CaseMapper, CaseTable};
pub use cmbcl::CombiningClassTable;
pub use ctype::PropertyTable;
pub use decomp::{decompose_hangul, Decomposition, DecompositionTable};
pub use number::{DigitValue, Number, NumericTable};

bitflags! {
    /// Selects which tables a load, reload or unload applies to.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Tables: u32 {
        const CASE = 0x01;
        const CTYPE = 0x02;
        const DECOMP = 0x04;
        const CMBCL = 0x08;
        const NUM = 0x10;
        const ALL = 0x1f;
    }
}

impl Tables {
    /// Single tables in load order.
    pub const EACH: [Tables; 5] = [
        Tables::CTYPE,
        Tables::CASE,
        Tables::DECOMP,
        Tables::CMBCL,
        Tables::NUM,
    ];

    const NAMES: [(Tables, &'static str, &'static str); 5] = [
        (Tables::CTYPE, "ctype", "ctype.dat"),
        (Tables::CASE, "case", "case.dat"),
        (Tables::DECOMP, "decomp", "decomp.dat"),
        (Tables::CMBCL, "cmbcl", "cmbcl.dat"),
        (Tables::NUM, "num", "num.dat"),
    ];

    /// File name of a single table under a base location.
    pub fn file_name(self) -> Option<&'static str> {
        Self::NAMES
            .iter()
            .find(|(t, _, _)| *t == self)
            .map(|&(_, _, file)| file)
    }

    /// Short name of a single table, `"tables"` for combinations.
    pub fn name(self) -> &'static str {
        Self::NAMES
            .iter()
            .find(|(t, _, _)| *t == self)
            .map_or("tables", |&(_, name, _)| name)
    }
}

// === Table Trait ===

/// A lookup table decoded from one file of the binary container format.
pub trait Table: Sized {
    /// The mask bit selecting this table.
    const KIND: Tables;

    /// Decode the table from a reader positioned just after the order marker.
    fn decode(reader: &mut ByteReader<'_>) -> Result<Self, UcError>;

    /// Decode from a complete file buffer, marker included.
    fn from_bytes(data: &[u8]) -> Result<Self, UcError> {
        let mut reader = ByteReader::open(data)?;
        Self::decode(&mut reader)
    }
}
