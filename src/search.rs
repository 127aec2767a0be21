// search.rs - Binary search over fixed-stride table records.
//
// All tables store flat runs of 32-bit fields grouped into records of
// `N` fields. Range tables match when the code falls inside
// `[rec[0], rec[1]]`, node tables match when `rec[0]` equals the code.

use std::cmp::Ordering;

use crate::Codepoint;

/// How a record is compared against the code being looked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Probe {
    /// Match when the record key (field 0) equals the code.
    Exact(Codepoint),
    /// Match when the code lies in the inclusive range `[field 0, field 1]`.
    Within(Codepoint),
}

impl Probe {
    /// Ordering of `rec` relative to the probed code.
    #[inline]
    fn order<const N: usize>(self, rec: &[Codepoint; N]) -> Ordering {
        match self {
            Probe::Exact(code) => rec[0].cmp(&code),
            Probe::Within(code) => {
                if rec[1] < code {
                    Ordering::Less
                } else if rec[0] > code {
                    Ordering::Greater
                } else {
                    Ordering::Equal
                }
            }
        }
    }
}

/// Index of the record matching `probe` in a slice sorted by field 0.
///
/// Range probes need at least two fields per record.
#[inline]
pub fn position<const N: usize>(records: &[[Codepoint; N]], probe: Probe) -> Option<usize> {
    debug_assert!(N >= 2 || matches!(probe, Probe::Exact(_)));
    records.binary_search_by(|rec| probe.order(rec)).ok()
}

/// The record matching `probe`, see [`position`].
#[inline]
pub fn find<const N: usize>(records: &[[Codepoint; N]], probe: Probe) -> Option<&[Codepoint; N]> {
    position(records, probe).map(|idx| &records[idx])
}

/// Check that records are strictly ascending by key.
pub(crate) fn is_sorted_by_key<const N: usize>(records: &[[Codepoint; N]]) -> bool {
    records.windows(2).all(|w| w[0][0] < w[1][0])
}

/// Check that range records are well formed and do not overlap.
pub(crate) fn is_sorted_ranges<const N: usize>(records: &[[Codepoint; N]]) -> bool {
    records.iter().all(|r| r[0] <= r[1]) && records.windows(2).all(|w| w[0][1] < w[1][0])
}

#[cfg(test)]
mod tests {
    use super::*;

    const RANGES: [[i32; 2]; 4] = [[0x41, 0x5a], [0x61, 0x7a], [0xc0, 0xc0], [0x100, 0x17f]];

    #[test]
    fn within_hits_range_bounds() {
        assert_eq!(find(&RANGES, Probe::Within(0x41)), Some(&[0x41, 0x5a]));
        assert_eq!(find(&RANGES, Probe::Within(0x5a)), Some(&[0x41, 0x5a]));
        assert_eq!(find(&RANGES, Probe::Within(0xc0)), Some(&[0xc0, 0xc0]));
        assert_eq!(find(&RANGES, Probe::Within(0x17f)), Some(&[0x100, 0x17f]));
    }

    #[test]
    fn within_misses_gaps() {
        assert_eq!(find(&RANGES, Probe::Within(0x40)), None);
        assert_eq!(find(&RANGES, Probe::Within(0x5b)), None);
        assert_eq!(find(&RANGES, Probe::Within(0xbf)), None);
        assert_eq!(find(&RANGES, Probe::Within(0x180)), None);
        assert_eq!(find(&RANGES, Probe::Within(-1)), None);
    }

    #[test]
    fn exact_on_triplets() {
        let map = [[0x41, 0x61, 0x41], [0x1f1, 0x1f3, 0x1f2], [0xff21, 0xff41, 0xff21]];
        assert_eq!(find(&map, Probe::Exact(0x1f1)).map(|r| r[2]), Some(0x1f2));
        assert_eq!(find(&map, Probe::Exact(0x1f2)), None);
    }

    #[test]
    fn position_of_record() {
        assert_eq!(position(&RANGES, Probe::Within(0x150)), Some(3));
        assert_eq!(position(&RANGES, Probe::Exact(0x61)), Some(1));
        assert_eq!(position(&RANGES, Probe::Exact(0x62)), None);
    }

    #[test]
    fn empty_slice() {
        let none: [[i32; 3]; 0] = [];
        assert_eq!(find(&none, Probe::Within(0)), None);
        assert_eq!(find(&none, Probe::Exact(0)), None);
    }

    #[test]
    fn sortedness_checks() {
        assert!(is_sorted_ranges(&RANGES));
        assert!(!is_sorted_ranges(&[[1, 5], [5, 6]]));
        assert!(!is_sorted_ranges(&[[6, 5]]));
        assert!(is_sorted_by_key(&[[1, 0], [2, 0]]));
        assert!(!is_sorted_by_key(&[[2, 0], [2, 0]]));
    }
}
