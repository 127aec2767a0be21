// category.rs - Character categories as a single 64-bit set.
//
// Bit `i` of the set addresses physical category `i` of the property table.
// Bits 0-31 are the general categories plus the strong/number bidi classes,
// bits 32-48 are the remaining bidi classes and derived properties.

use bitflags::bitflags;

bitflags! {
    /// Set of property-table categories, one bit per physical category index.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Category: u64 {
        /// Mark, non-spacing.
        const MN = 1 << 0;
        /// Mark, spacing combining.
        const MC = 1 << 1;
        /// Mark, enclosing.
        const ME = 1 << 2;
        /// Number, decimal digit.
        const ND = 1 << 3;
        /// Number, letter.
        const NL = 1 << 4;
        /// Number, other.
        const NO = 1 << 5;
        /// Separator, space.
        const ZS = 1 << 6;
        /// Separator, line.
        const ZL = 1 << 7;
        /// Separator, paragraph.
        const ZP = 1 << 8;
        /// Other, control.
        const CC = 1 << 9;
        /// Other, format.
        const CF = 1 << 10;
        /// Other, surrogate.
        const OS = 1 << 11;
        /// Other, private use.
        const CO = 1 << 12;
        /// Other, not assigned.
        const CN = 1 << 13;
        /// Letter, uppercase.
        const LU = 1 << 14;
        /// Letter, lowercase.
        const LL = 1 << 15;
        /// Letter, titlecase.
        const LT = 1 << 16;
        /// Letter, modifier.
        const LM = 1 << 17;
        /// Letter, other.
        const LO = 1 << 18;
        /// Punctuation, connector.
        const PC = 1 << 19;
        /// Punctuation, dash.
        const PD = 1 << 20;
        /// Punctuation, open.
        const PS = 1 << 21;
        /// Punctuation, close.
        const PE = 1 << 22;
        /// Punctuation, other.
        const PO = 1 << 23;
        /// Symbol, math.
        const SM = 1 << 24;
        /// Symbol, currency.
        const SC = 1 << 25;
        /// Symbol, modifier.
        const SK = 1 << 26;
        /// Symbol, other.
        const SO = 1 << 27;
        /// Bidi: left-to-right.
        const L = 1 << 28;
        /// Bidi: right-to-left.
        const R = 1 << 29;
        /// Bidi: European number.
        const EN = 1 << 30;
        /// Bidi: European number separator.
        const ES = 1 << 31;
        /// Bidi: European number terminator.
        const ET = 1 << 32;
        /// Bidi: Arabic number.
        const AN = 1 << 33;
        /// Bidi: common number separator.
        const CS = 1 << 34;
        /// Bidi: block separator.
        const B = 1 << 35;
        /// Bidi: segment separator.
        const S = 1 << 36;
        /// Bidi: whitespace.
        const WS = 1 << 37;
        /// Bidi: other neutral.
        const ON = 1 << 38;
        /// Composite (has a canonical decomposition).
        const CM = 1 << 39;
        /// Non-breaking.
        const NB = 1 << 40;
        /// Symmetric.
        const SY = 1 << 41;
        /// Hex digit.
        const HD = 1 << 42;
        /// Quote mark.
        const QM = 1 << 43;
        /// Mirroring.
        const MR = 1 << 44;
        /// Space.
        const SS = 1 << 45;
        /// Defined (assigned codepoint).
        const CP = 1 << 46;
        /// Punctuation, initial quote.
        const PI = 1 << 47;
        /// Punctuation, final quote.
        const PF = 1 << 48;

        // Indices 49-63 are addressable but unnamed.
        const _ = !0;
    }
}

const fn union(parts: &[Category]) -> Category {
    let mut bits = 0;
    let mut i = 0;
    while i < parts.len() {
        bits |= parts[i].bits();
        i += 1;
    }
    Category::from_bits_retain(bits)
}

// === Derived Unions ===

impl Category {
    pub const ALPHA: Category = union(&[Self::LU, Self::LL, Self::LM, Self::LO, Self::LT]);
    pub const DIGIT: Category = Self::ND;
    pub const ALNUM: Category = union(&[Self::ALPHA, Self::ND]);
    pub const CNTRL: Category = union(&[Self::CC, Self::CF]);
    pub const SPACE: Category = union(&[Self::ZS, Self::SS]);
    pub const BLANK: Category = Self::ZS;
    pub const PUNCT: Category = union(&[
        Self::PD,
        Self::PS,
        Self::PE,
        Self::PO,
        Self::PI,
        Self::PF,
    ]);
    pub const GRAPH: Category = union(&[
        Self::MN, Self::MC, Self::ME, Self::ND, Self::NL, Self::NO,
        Self::LU, Self::LL, Self::LT, Self::LM, Self::LO, Self::PC,
        Self::PD, Self::PS, Self::PE, Self::PO, Self::SM, Self::SC,
        Self::SK, Self::SO, Self::PI, Self::PF,
    ]);
    pub const PRINT: Category = union(&[Self::GRAPH, Self::ZS]);
    pub const SYMBOL: Category = union(&[Self::SM, Self::SC, Self::SO, Self::SK]);
    pub const NUMBER: Category = union(&[Self::ND, Self::NO, Self::NL]);
    pub const MARK: Category = union(&[Self::MN, Self::MC, Self::ME]);
    pub const STRONG: Category = union(&[Self::L, Self::R]);
    pub const WEAK: Category = union(&[Self::EN, Self::ES, Self::ET, Self::AN, Self::CS]);
    pub const NEUTRAL: Category = union(&[Self::B, Self::S, Self::WS, Self::ON]);
    pub const SEPARATOR: Category = union(&[Self::B, Self::S]);
    pub const IDENT_START: Category = union(&[Self::LU, Self::LL, Self::LT, Self::LO, Self::NL]);
    pub const IDENT_PART: Category = union(&[
        Self::IDENT_START, Self::MN, Self::MC, Self::ND, Self::PC, Self::CF,
    ]);

    /// Number of addressable categories.
    pub const CAPACITY: usize = 64;

    /// Combine the two 32-bit masks of the classic two-word interface.
    /// Bit `i` of `mask2` addresses physical category `i + 32`.
    pub const fn from_masks(mask1: u32, mask2: u32) -> Category {
        Category::from_bits_retain(mask1 as u64 | (mask2 as u64) << 32)
    }

    /// Split back into the two-word form.
    pub const fn masks(self) -> (u32, u32) {
        (self.bits() as u32, (self.bits() >> 32) as u32)
    }

    /// The set holding only physical category `index`.
    pub const fn from_index(index: usize) -> Option<Category> {
        if index < Self::CAPACITY {
            Some(Category::from_bits_retain(1 << index))
        } else {
            None
        }
    }

    /// Physical category indices in ascending order.
    pub fn indices(self) -> impl Iterator<Item = usize> {
        let mut bits = self.bits();
        std::iter::from_fn(move || {
            if bits == 0 {
                return None;
            }
            let idx = bits.trailing_zeros() as usize;
            bits &= bits - 1;
            Some(idx)
        })
    }
}
