// tables/case.rs - Case mapping table (case.dat)
//
// Layout after the marker:
//   u16 total     number of triplets
//   u16 upper     triplets keyed by an uppercase code
//   u16 lower     triplets keyed by a lowercase code
//   i32 map[]     (code, alt1, alt2) triplets
//
// The triplets form three segments sorted by code, in this order:
//   upper-keyed  (upper, lower, title)
//   lower-keyed  (lower, upper, title)
//   title-keyed  (title, upper, lower)
// The title-keyed segment holds the remaining `total - upper - lower`.

use std::ops::Range;

use crate::decoder::ByteReader;
use crate::error::UcError;
use crate::search::{find, is_sorted_by_key, Probe};
use crate::tables::{PropertyTable, Table, Tables};
use crate::Codepoint;

/// Letter case of a codepoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Case {
    Upper,
    Lower,
    Title,
}

impl Case {
    /// Field of a triplet keyed by `self` that holds the `to` mapping.
    fn field(self, to: Case) -> Option<usize> {
        match (self, to) {
            (Case::Upper, Case::Lower) => Some(1),
            (Case::Upper, Case::Title) => Some(2),
            (Case::Lower, Case::Upper) => Some(1),
            (Case::Lower, Case::Title) => Some(2),
            (Case::Title, Case::Upper) => Some(1),
            (Case::Title, Case::Lower) => Some(2),
            _ => None,
        }
    }
}

/// Segmented case mapping table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseTable {
    map: Vec<[Codepoint; 3]>,
    upper: Range<usize>,
    lower: Range<usize>,
    title: Range<usize>,
}

impl Table for CaseTable {
    const KIND: Tables = Tables::CASE;

    fn decode(r: &mut ByteReader<'_>) -> Result<Self, UcError> {
        let total = r.read_u16_at(2)? as usize;
        let upper = r.read_u16()? as usize;
        let lower = r.read_u16()? as usize;
        if upper + lower > total {
            return Err(UcError::malformed(Tables::CASE, "segment lengths exceed count"));
        }
        let map = r.read_records::<3>(total)?;

        let table = CaseTable {
            map,
            upper: 0..upper,
            lower: upper..upper + lower,
            title: upper + lower..total,
        };
        let sorted = [&table.upper, &table.lower, &table.title]
            .into_iter()
            .all(|seg| is_sorted_by_key(&table.map[seg.clone()]));
        if !sorted {
            return Err(UcError::malformed(Tables::CASE, "segment not sorted"));
        }

        log::debug!(
            "decoded case table: {} upper, {} lower, {} title",
            upper,
            lower,
            total - upper - lower
        );
        Ok(table)
    }
}

impl CaseTable {
    /// Number of mappings keyed by codes of the given case.
    pub fn len(&self, case: Case) -> usize {
        self.segment(case).len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    fn segment(&self, case: Case) -> &[[Codepoint; 3]] {
        let seg = match case {
            Case::Upper => &self.upper,
            Case::Lower => &self.lower,
            Case::Title => &self.title,
        };
        &self.map[seg.clone()]
    }

    /// Map `code`, known to be of case `from`, to case `to`.
    ///
    /// Only the segment keyed by `from` is searched. Returns `None` when it
    /// has no entry for `code` or when `from == to`.
    pub fn lookup(&self, from: Case, to: Case, code: Codepoint) -> Option<Codepoint> {
        let field = from.field(to)?;
        find(self.segment(from), Probe::Exact(code)).map(|rec| rec[field])
    }
}

// === CaseMapper ===

/// Case conversion using the property table to detect the current case.
#[derive(Debug, Clone, Copy)]
pub struct CaseMapper<'a> {
    ctype: &'a PropertyTable,
    case: &'a CaseTable,
}

impl<'a> CaseMapper<'a> {
    pub fn new(ctype: &'a PropertyTable, case: &'a CaseTable) -> Self {
        CaseMapper { ctype, case }
    }

    /// Detected case of `code`. Codes that are neither upper nor lower
    /// case are treated as title case.
    pub fn case_of(&self, code: Codepoint) -> Case {
        if self.ctype.is_upper(code) {
            Case::Upper
        } else if self.ctype.is_lower(code) {
            Case::Lower
        } else {
            Case::Title
        }
    }

    /// Uppercase counterpart of `code`, or `code` itself.
    pub fn to_upper(&self, code: Codepoint) -> Codepoint {
        if self.ctype.is_upper(code) {
            return code;
        }
        let from = if self.ctype.is_lower(code) {
            Case::Lower
        } else {
            Case::Title
        };
        self.case.lookup(from, Case::Upper, code).unwrap_or(code)
    }

    /// Lowercase counterpart of `code`, or `code` itself.
    pub fn to_lower(&self, code: Codepoint) -> Codepoint {
        if self.ctype.is_lower(code) {
            return code;
        }
        let from = if self.ctype.is_upper(code) {
            Case::Upper
        } else {
            Case::Title
        };
        self.case.lookup(from, Case::Lower, code).unwrap_or(code)
    }

    /// Titlecase counterpart of `code`, or `code` itself.
    pub fn to_title(&self, code: Codepoint) -> Codepoint {
        if self.ctype.is_title(code) {
            return code;
        }
        let from = if self.ctype.is_upper(code) {
            Case::Upper
        } else {
            Case::Lower
        };
        self.case.lookup(from, Case::Title, code).unwrap_or(code)
    }
}
