// writer.rs - Encoder for the table file format.
//
// Produces files the decoders in `tables` accept, in either byte order.
// Inputs are sorted here; overlapping or duplicate keys are rejected.

use std::collections::HashMap;

use crate::decoder::ByteOrder;
use crate::error::UcError;
use crate::search::{is_sorted_by_key, is_sorted_ranges};
use crate::tables::ctype::NO_RANGES;
use crate::tables::Tables;
use crate::Codepoint;

// === TableWriter ===

/// Byte buffer that writes multi-byte fields in a fixed byte order.
#[derive(Debug, Clone)]
pub struct TableWriter {
    buf: Vec<u8>,
    order: ByteOrder,
}

impl TableWriter {
    /// Start a table file with the marker for `order`.
    pub fn new(order: ByteOrder) -> Self {
        TableWriter {
            buf: order.marker().to_vec(),
            order,
        }
    }

    pub fn put_u16(&mut self, v: u16) {
        let bytes = match self.order {
            ByteOrder::Big => v.to_be_bytes(),
            ByteOrder::Little => v.to_le_bytes(),
        };
        self.buf.extend_from_slice(&bytes);
    }

    pub fn put_i16(&mut self, v: i16) {
        self.put_u16(v as u16);
    }

    pub fn put_u32(&mut self, v: u32) {
        let bytes = match self.order {
            ByteOrder::Big => v.to_be_bytes(),
            ByteOrder::Little => v.to_le_bytes(),
        };
        self.buf.extend_from_slice(&bytes);
    }

    pub fn put_i32(&mut self, v: i32) {
        self.put_u32(v as u32);
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}

fn count_u16(table: Tables, count: usize) -> Result<u16, UcError> {
    u16::try_from(count).map_err(|_| UcError::Capacity { table, count })
}

fn count_u32(table: Tables, count: usize) -> Result<u32, UcError> {
    u32::try_from(count).map_err(|_| UcError::Capacity { table, count })
}

// === Per-table Encoders ===

/// Encode a property table. `categories[i]` lists the ranges of physical
/// category `i`; the list length sets the category count.
pub fn write_ctype(
    order: ByteOrder,
    categories: &[Vec<(Codepoint, Codepoint)>],
) -> Result<Vec<u8>, UcError> {
    let count = count_u16(Tables::CTYPE, categories.len())?;
    if count == 0 {
        return Err(UcError::malformed(Tables::CTYPE, "no categories"));
    }

    let mut offsets = Vec::with_capacity(categories.len() + 1);
    let mut ranges: Vec<[Codepoint; 2]> = Vec::new();
    for list in categories {
        if list.is_empty() {
            offsets.push(NO_RANGES);
            continue;
        }
        let mut sorted: Vec<[Codepoint; 2]> = list.iter().map(|&(s, e)| [s, e]).collect();
        sorted.sort_unstable();
        if !is_sorted_ranges(&sorted) {
            return Err(UcError::malformed(Tables::CTYPE, "overlapping ranges"));
        }
        offsets.push(count_u16(Tables::CTYPE, ranges.len() * 2)?);
        ranges.extend(sorted);
    }
    let total = count_u16(Tables::CTYPE, ranges.len() * 2)?;
    if total == NO_RANGES {
        return Err(UcError::Capacity {
            table: Tables::CTYPE,
            count: ranges.len(),
        });
    }
    offsets.push(total);

    let mut pad = offsets.len() * 2;
    pad = if pad & 3 != 0 { 4 - (pad & 3) } else { 0 };
    let size = offsets.len() * 2 + pad + ranges.len() * 8;

    let mut w = TableWriter::new(order);
    w.put_u16(count);
    w.put_u32(count_u32(Tables::CTYPE, size)?);
    for off in offsets {
        w.put_u16(off);
    }
    for _ in 0..pad / 2 {
        w.put_u16(0);
    }
    for [start, end] in ranges {
        w.put_i32(start);
        w.put_i32(end);
    }
    Ok(w.into_bytes())
}

/// Encode a case table from its three segments. Upper entries are
/// `(upper, lower, title)`, lower entries `(lower, upper, title)` and title
/// entries `(title, upper, lower)`.
pub fn write_case(
    order: ByteOrder,
    upper: &[[Codepoint; 3]],
    lower: &[[Codepoint; 3]],
    title: &[[Codepoint; 3]],
) -> Result<Vec<u8>, UcError> {
    let total = count_u16(Tables::CASE, upper.len() + lower.len() + title.len())?;
    let mut w = TableWriter::new(order);
    w.put_u16(total);
    w.put_u16(upper.len() as u16);
    w.put_u16(lower.len() as u16);
    for segment in [upper, lower, title] {
        let mut sorted = segment.to_vec();
        sorted.sort_unstable();
        if !is_sorted_by_key(&sorted) {
            return Err(UcError::malformed(Tables::CASE, "duplicate key"));
        }
        for rec in sorted {
            rec.iter().for_each(|&v| w.put_i32(v));
        }
    }
    Ok(w.into_bytes())
}

/// Encode a decomposition table from `(code, decomposition)` entries.
pub fn write_decomp(
    order: ByteOrder,
    entries: &[(Codepoint, Vec<Codepoint>)],
) -> Result<Vec<u8>, UcError> {
    let mut sorted: Vec<&(Codepoint, Vec<Codepoint>)> = entries.iter().collect();
    sorted.sort_unstable_by_key(|(code, _)| *code);
    if sorted.windows(2).any(|w| w[0].0 == w[1].0) {
        return Err(UcError::malformed(Tables::DECOMP, "duplicate key"));
    }

    let count = count_u16(Tables::DECOMP, sorted.len())?;
    let pool_len: usize = sorted.iter().map(|(_, seq)| seq.len()).sum();
    let size = count_u32(Tables::DECOMP, (sorted.len() * 2 + 1 + pool_len) * 4)?;

    let mut w = TableWriter::new(order);
    w.put_u16(count);
    w.put_u32(size);
    let mut offset = 0;
    for (code, seq) in &sorted {
        w.put_i32(*code);
        w.put_i32(offset as i32);
        offset += seq.len();
    }
    w.put_i32(offset as i32);
    for (_, seq) in &sorted {
        seq.iter().for_each(|&c| w.put_i32(c));
    }
    Ok(w.into_bytes())
}

/// Encode a combining class table from `(start, end, class)` ranges.
pub fn write_cmbcl(
    order: ByteOrder,
    entries: &[(Codepoint, Codepoint, i32)],
) -> Result<Vec<u8>, UcError> {
    let mut nodes: Vec<[Codepoint; 3]> = entries.iter().map(|&(s, e, c)| [s, e, c]).collect();
    nodes.sort_unstable();
    if !is_sorted_ranges(&nodes) {
        return Err(UcError::malformed(Tables::CMBCL, "overlapping ranges"));
    }
    if nodes.iter().any(|rec| u8::try_from(rec[2]).is_err()) {
        return Err(UcError::malformed(Tables::CMBCL, "class out of range"));
    }
    let count = count_u16(Tables::CMBCL, nodes.len())?;

    let mut w = TableWriter::new(order);
    w.put_u16(count);
    w.put_u32(count_u32(Tables::CMBCL, nodes.len() * 12)?);
    for rec in nodes {
        rec.iter().for_each(|&v| w.put_i32(v));
    }
    Ok(w.into_bytes())
}

/// Encode a numeric table from `(code, numerator, denominator)` entries.
/// Integers are given with numerator equal to denominator. Equal values
/// share one slot in the value pool.
pub fn write_num(
    order: ByteOrder,
    entries: &[(Codepoint, i16, i16)],
) -> Result<Vec<u8>, UcError> {
    let mut sorted = entries.to_vec();
    sorted.sort_unstable_by_key(|&(code, _, _)| code);
    if sorted.windows(2).any(|w| w[0].0 == w[1].0) {
        return Err(UcError::malformed(Tables::NUM, "duplicate key"));
    }

    let mut values: Vec<i16> = Vec::new();
    let mut slots: HashMap<(i16, i16), i32> = HashMap::new();
    let mut nodes = Vec::with_capacity(sorted.len());
    for &(code, num, den) in &sorted {
        let idx = *slots.entry((num, den)).or_insert_with(|| {
            values.push(num);
            values.push(den);
            (values.len() - 2) as i32
        });
        nodes.push([code, idx]);
    }

    let fields = count_u16(Tables::NUM, nodes.len() * 2)?;
    let size = count_u32(Tables::NUM, nodes.len() * 8 + values.len() * 2)?;

    let mut w = TableWriter::new(order);
    w.put_u16(fields);
    w.put_u32(size);
    for [code, idx] in nodes {
        w.put_i32(code);
        w.put_i32(idx);
    }
    for v in values {
        w.put_i16(v);
    }
    Ok(w.into_bytes())
}
