// tables/cmbcl.rs - Canonical combining class table (cmbcl.dat)
//
// Layout after the marker:
//   u16 count        number of (start, end, class) triplets
//   u32 byte size    unused
//   i32 nodes[]      triplets sorted by start, ranges inclusive

use crate::decoder::ByteReader;
use crate::error::UcError;
use crate::search::{find, is_sorted_ranges, Probe};
use crate::tables::{Table, Tables};
use crate::Codepoint;

/// Range table of canonical combining classes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombiningClassTable {
    nodes: Vec<[Codepoint; 3]>,
}

impl Table for CombiningClassTable {
    const KIND: Tables = Tables::CMBCL;

    fn decode(r: &mut ByteReader<'_>) -> Result<Self, UcError> {
        let count = r.read_u16()? as usize;
        r.skip(4);
        let nodes = r.read_records::<3>(count)?;
        if !is_sorted_ranges(&nodes) {
            return Err(UcError::malformed(Tables::CMBCL, "ranges not sorted"));
        }
        if nodes.iter().any(|rec| u8::try_from(rec[2]).is_err()) {
            return Err(UcError::malformed(Tables::CMBCL, "class out of range"));
        }
        log::debug!("decoded cmbcl table: {} ranges", nodes.len());
        Ok(CombiningClassTable { nodes })
    }
}

impl CombiningClassTable {
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Combining class of `code`; 0 for starters and unlisted codes.
    pub fn combining_class(&self, code: Codepoint) -> u8 {
        // Classes are checked to fit a byte at decode time.
        find(&self.nodes, Probe::Within(code)).map_or(0, |rec| rec[2] as u8)
    }

    /// True if `code` has a non-zero combining class.
    pub fn is_combining(&self, code: Codepoint) -> bool {
        self.combining_class(code) != 0
    }
}
