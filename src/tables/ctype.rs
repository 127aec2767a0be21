// tables/ctype.rs - Character property table (ctype.dat)
// Per-category sorted range lists flattened into one array.
//
// Layout after the marker:
//   u16 count                 number of categories
//   u32 byte size             unused
//   u16 offsets[count + 1]    start of each category's ranges, 0xffff = none;
//                             the last entry is the total range field count
//   padding to a 4-byte boundary
//   i32 ranges[]              (start, end) pairs, inclusive

use std::ops::Range;

use crate::category::Category;
use crate::decoder::ByteReader;
use crate::error::UcError;
use crate::search::{find, is_sorted_ranges, Probe};
use crate::tables::{Table, Tables};
use crate::Codepoint;

/// Offset value marking a category without ranges.
pub const NO_RANGES: u16 = 0xffff;

/// Bytes before the offsets array: marker, count, byte size.
const HEADER_LEN: usize = 8;

/// Range lookup table for the 64 character categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyTable {
    // Record range of each category inside `ranges`, computed once at load.
    spans: Vec<Range<usize>>,
    ranges: Vec<[Codepoint; 2]>,
}

impl Table for PropertyTable {
    const KIND: Tables = Tables::CTYPE;

    fn decode(r: &mut ByteReader<'_>) -> Result<Self, UcError> {
        let count = r.read_u16()? as usize;
        if count == 0 {
            return Err(UcError::malformed(Tables::CTYPE, "no categories"));
        }
        r.skip(4);

        let offsets = (0..=count)
            .map(|_| r.read_u16())
            .collect::<Result<Vec<_>, _>>()?;

        let mut size = (count + 1) * 2;
        if size & 3 != 0 {
            size += 4 - (size & 3);
        }
        r.seek(HEADER_LEN + size);

        let total = offsets[count];
        if total == NO_RANGES || total & 1 != 0 {
            return Err(UcError::malformed(Tables::CTYPE, "bad range count"));
        }
        let ranges = r.read_records::<2>(total as usize / 2)?;
        let spans = category_spans(&offsets)?;

        if !spans.iter().all(|s| is_sorted_ranges(&ranges[s.clone()])) {
            return Err(UcError::malformed(Tables::CTYPE, "ranges not sorted"));
        }

        log::debug!(
            "decoded ctype table: {} categories, {} ranges",
            count,
            ranges.len()
        );
        Ok(PropertyTable { spans, ranges })
    }
}

/// Resolve each category's slice of the range array. A category ends where
/// the next category that owns ranges begins; the final offset terminates
/// the last one.
fn category_spans(offsets: &[u16]) -> Result<Vec<Range<usize>>, UcError> {
    let count = offsets.len() - 1;
    let mut spans = Vec::with_capacity(count);
    for i in 0..count {
        let start = offsets[i];
        if start == NO_RANGES {
            spans.push(0..0);
            continue;
        }
        // The terminator is never NO_RANGES, so this always finds one.
        let end = offsets[i + 1..]
            .iter()
            .copied()
            .find(|&o| o != NO_RANGES)
            .unwrap_or(offsets[count]);
        if start > end || start & 1 != 0 || end & 1 != 0 {
            return Err(UcError::malformed(Tables::CTYPE, "bad category offset"));
        }
        spans.push(start as usize / 2..end as usize / 2);
    }
    Ok(spans)
}

impl PropertyTable {
    /// Number of categories stored in the table.
    pub fn category_count(&self) -> usize {
        self.spans.len()
    }

    /// Total number of ranges over all categories.
    pub fn range_count(&self) -> usize {
        self.ranges.len()
    }

    /// Ranges owned by physical category `index`, empty if it has none.
    pub fn ranges(&self, index: usize) -> &[[Codepoint; 2]] {
        match self.spans.get(index) {
            Some(span) => &self.ranges[span.clone()],
            None => &[],
        }
    }

    #[inline]
    fn lookup(&self, code: Codepoint, index: usize) -> bool {
        find(self.ranges(index), Probe::Within(code)).is_some()
    }

    /// True if `code` belongs to at least one category in `set`.
    pub fn is_category(&self, code: Codepoint, set: Category) -> bool {
        set.indices().any(|i| self.lookup(code, i))
    }

    /// Two-word form of [`is_category`](Self::is_category): `mask1` covers
    /// categories 0-31, bit `i` of `mask2` covers category `i + 32`.
    pub fn is_category_masks(&self, code: Codepoint, mask1: u32, mask2: u32) -> bool {
        if mask1 == 0 && mask2 == 0 {
            return false;
        }
        self.is_category(code, Category::from_masks(mask1, mask2))
    }

    /// Every category `code` belongs to.
    pub fn categories(&self, code: Codepoint) -> Category {
        (0..self.spans.len().min(Category::CAPACITY))
            .filter(|&i| self.lookup(code, i))
            .filter_map(Category::from_index)
            .fold(Category::empty(), |acc, c| acc | c)
    }

    // === Character Classes ===

    pub fn is_alpha(&self, code: Codepoint) -> bool {
        self.is_category(code, Category::ALPHA)
    }

    pub fn is_digit(&self, code: Codepoint) -> bool {
        self.is_category(code, Category::DIGIT)
    }

    pub fn is_alnum(&self, code: Codepoint) -> bool {
        self.is_category(code, Category::ALNUM)
    }

    pub fn is_cntrl(&self, code: Codepoint) -> bool {
        self.is_category(code, Category::CNTRL)
    }

    pub fn is_space(&self, code: Codepoint) -> bool {
        self.is_category(code, Category::SPACE)
    }

    pub fn is_blank(&self, code: Codepoint) -> bool {
        self.is_category(code, Category::BLANK)
    }

    pub fn is_punct(&self, code: Codepoint) -> bool {
        self.is_category(code, Category::PUNCT)
    }

    pub fn is_graph(&self, code: Codepoint) -> bool {
        self.is_category(code, Category::GRAPH)
    }

    pub fn is_print(&self, code: Codepoint) -> bool {
        self.is_category(code, Category::PRINT)
    }

    pub fn is_upper(&self, code: Codepoint) -> bool {
        self.is_category(code, Category::LU)
    }

    pub fn is_lower(&self, code: Codepoint) -> bool {
        self.is_category(code, Category::LL)
    }

    pub fn is_title(&self, code: Codepoint) -> bool {
        self.is_category(code, Category::LT)
    }

    pub fn is_xdigit(&self, code: Codepoint) -> bool {
        self.is_category(code, Category::HD)
    }

    pub fn is_iso_control(&self, code: Codepoint) -> bool {
        self.is_category(code, Category::CC)
    }

    pub fn is_format_control(&self, code: Codepoint) -> bool {
        self.is_category(code, Category::CF)
    }

    pub fn is_symbol(&self, code: Codepoint) -> bool {
        self.is_category(code, Category::SYMBOL)
    }

    pub fn is_number(&self, code: Codepoint) -> bool {
        self.is_category(code, Category::NUMBER)
    }

    pub fn is_nonspacing(&self, code: Codepoint) -> bool {
        self.is_category(code, Category::MN)
    }

    pub fn is_open_punct(&self, code: Codepoint) -> bool {
        self.is_category(code, Category::PS)
    }

    pub fn is_close_punct(&self, code: Codepoint) -> bool {
        self.is_category(code, Category::PE)
    }

    pub fn is_initial_punct(&self, code: Codepoint) -> bool {
        self.is_category(code, Category::PI)
    }

    pub fn is_final_punct(&self, code: Codepoint) -> bool {
        self.is_category(code, Category::PF)
    }

    /// Has a canonical decomposition.
    pub fn is_composite(&self, code: Codepoint) -> bool {
        self.is_category(code, Category::CM)
    }

    pub fn is_hex(&self, code: Codepoint) -> bool {
        self.is_category(code, Category::HD)
    }

    pub fn is_quote(&self, code: Codepoint) -> bool {
        self.is_category(code, Category::QM)
    }

    pub fn is_symmetric(&self, code: Codepoint) -> bool {
        self.is_category(code, Category::SY)
    }

    pub fn is_mirroring(&self, code: Codepoint) -> bool {
        self.is_category(code, Category::MR)
    }

    pub fn is_nonbreaking(&self, code: Codepoint) -> bool {
        self.is_category(code, Category::NB)
    }

    // === Bidirectional Classes ===

    pub fn is_rtl(&self, code: Codepoint) -> bool {
        self.is_category(code, Category::R)
    }

    pub fn is_ltr(&self, code: Codepoint) -> bool {
        self.is_category(code, Category::L)
    }

    pub fn is_strong(&self, code: Codepoint) -> bool {
        self.is_category(code, Category::STRONG)
    }

    pub fn is_weak(&self, code: Codepoint) -> bool {
        self.is_category(code, Category::WEAK)
    }

    pub fn is_neutral(&self, code: Codepoint) -> bool {
        self.is_category(code, Category::NEUTRAL)
    }

    pub fn is_separator(&self, code: Codepoint) -> bool {
        self.is_category(code, Category::SEPARATOR)
    }

    // === General Category Groups ===

    pub fn is_mark(&self, code: Codepoint) -> bool {
        self.is_category(code, Category::MARK)
    }

    pub fn is_modifier(&self, code: Codepoint) -> bool {
        self.is_category(code, Category::LM)
    }

    pub fn is_letter_number(&self, code: Codepoint) -> bool {
        self.is_category(code, Category::NL)
    }

    pub fn is_connector(&self, code: Codepoint) -> bool {
        self.is_category(code, Category::PC)
    }

    pub fn is_dash(&self, code: Codepoint) -> bool {
        self.is_category(code, Category::PD)
    }

    pub fn is_math(&self, code: Codepoint) -> bool {
        self.is_category(code, Category::SM)
    }

    pub fn is_currency(&self, code: Codepoint) -> bool {
        self.is_category(code, Category::SC)
    }

    pub fn is_modifier_symbol(&self, code: Codepoint) -> bool {
        self.is_category(code, Category::SK)
    }

    pub fn is_nonspacing_mark(&self, code: Codepoint) -> bool {
        self.is_category(code, Category::MN)
    }

    pub fn is_spacing_mark(&self, code: Codepoint) -> bool {
        self.is_category(code, Category::MC)
    }

    pub fn is_enclosing(&self, code: Codepoint) -> bool {
        self.is_category(code, Category::ME)
    }

    pub fn is_private_use(&self, code: Codepoint) -> bool {
        self.is_category(code, Category::CO)
    }

    pub fn is_surrogate(&self, code: Codepoint) -> bool {
        self.is_category(code, Category::OS)
    }

    pub fn is_line_separator(&self, code: Codepoint) -> bool {
        self.is_category(code, Category::ZL)
    }

    pub fn is_paragraph_separator(&self, code: Codepoint) -> bool {
        self.is_category(code, Category::ZP)
    }

    // === Identifiers ===

    pub fn is_ident_start(&self, code: Codepoint) -> bool {
        self.is_category(code, Category::IDENT_START)
    }

    pub fn is_ident_part(&self, code: Codepoint) -> bool {
        self.is_category(code, Category::IDENT_PART)
    }

    pub fn is_defined(&self, code: Codepoint) -> bool {
        self.is_category(code, Category::CP)
    }

    pub fn is_undefined(&self, code: Codepoint) -> bool {
        !self.is_defined(code)
    }
}

// === Block Predicates ===
// These need no table.

/// CJK Unified Ideographs or CJK Compatibility Ideographs block.
pub fn is_han(code: Codepoint) -> bool {
    (0x4e00..=0x9fff).contains(&code) || (0xf900..=0xfaff).contains(&code)
}

/// Hangul Syllables block plus the Jamo Extended-B block that follows it.
/// Only 0xAC00..=0xD7A3 decomposes algorithmically.
pub fn is_hangul(code: Codepoint) -> bool {
    (0xac00..=0xd7ff).contains(&code)
}
