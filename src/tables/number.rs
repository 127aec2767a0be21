// tables/number.rs - Numeric value table (num.dat)
//
// Layout after the marker:
//   u16 count        number of i32 fields in the node array (2 per node)
//   u32 byte size    node bytes plus value bytes
//   i32 nodes[]      (code, value index) pairs sorted by code
//   i16 values[]     numerator, denominator pairs addressed by value index
//
// A value whose numerator equals its denominator is the integer numerator,
// so the digit zero is stored as 0/0.

use std::fmt;

use crate::decoder::ByteReader;
use crate::error::UcError;
use crate::search::{find, is_sorted_by_key, Probe};
use crate::tables::{Table, Tables};
use crate::Codepoint;

/// Numeric value of a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Number {
    pub numerator: i16,
    pub denominator: i16,
}

impl Number {
    pub fn is_integer(self) -> bool {
        self.numerator == self.denominator
    }

    /// The integer value, `None` for fractions.
    pub fn as_integer(self) -> Option<i32> {
        self.is_integer().then_some(self.numerator as i32)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

/// Result of a digit lookup for a code present in the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigitValue {
    /// An integral value.
    Digit(i32),
    /// A numeric character whose value is a fraction; not a digit.
    Fraction(Number),
}

impl DigitValue {
    pub fn digit(self) -> Option<i32> {
        match self {
            DigitValue::Digit(d) => Some(d),
            DigitValue::Fraction(_) => None,
        }
    }
}

/// Numeric value table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumericTable {
    nodes: Vec<[Codepoint; 2]>,
    values: Vec<i16>,
}

impl Table for NumericTable {
    const KIND: Tables = Tables::NUM;

    fn decode(r: &mut ByteReader<'_>) -> Result<Self, UcError> {
        let fields = r.read_u16()? as usize;
        let bytes = r.read_u32()? as usize;
        if fields & 1 != 0 {
            return Err(UcError::malformed(Tables::NUM, "odd node field count"));
        }
        let value_count = bytes
            .checked_sub(fields * 4)
            .ok_or(UcError::malformed(Tables::NUM, "byte size smaller than nodes"))?
            / 2;
        let nodes = r.read_records::<2>(fields / 2)?;
        let values = r.read_i16_vec(value_count)?;

        if !is_sorted_by_key(&nodes) {
            return Err(UcError::malformed(Tables::NUM, "nodes not sorted"));
        }
        let in_range = |idx: Codepoint| idx >= 0 && (idx as usize) + 1 < values.len();
        if !nodes.iter().all(|n| in_range(n[1])) {
            return Err(UcError::malformed(Tables::NUM, "value index out of range"));
        }

        log::debug!(
            "decoded num table: {} nodes, {} values",
            nodes.len(),
            values.len()
        );
        Ok(NumericTable { nodes, values })
    }
}

impl NumericTable {
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Numeric value of `code`, `None` if it has none.
    pub fn number(&self, code: Codepoint) -> Option<Number> {
        let node = find(&self.nodes, Probe::Exact(code))?;
        let idx = node[1] as usize;
        Some(Number {
            numerator: self.values[idx],
            denominator: self.values[idx + 1],
        })
    }

    /// Digit value of `code`.
    ///
    /// `None` if `code` has no numeric value at all; a fraction is reported
    /// as [`DigitValue::Fraction`] rather than a truncated integer.
    pub fn digit(&self, code: Codepoint) -> Option<DigitValue> {
        let num = self.number(code)?;
        Some(match num.as_integer() {
            Some(d) => DigitValue::Digit(d),
            None => DigitValue::Fraction(num),
        })
    }

    /// True if `code` has an integral numeric value.
    pub fn is_digit(&self, code: Codepoint) -> bool {
        matches!(self.digit(code), Some(DigitValue::Digit(_)))
    }
}
