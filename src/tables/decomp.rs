// tables/decomp.rs - Canonical decomposition table (decomp.dat)
//
// Layout after the marker:
//   u16 nodes        number of (code, offset) nodes
//   u32 byte size    size of the data section in bytes
//   i32 data[]       nodes, then a sentinel offset equal to the pool
//                    length, then the pool of decomposed codepoints
//
// Node `i` decomposes to `pool[offset(i)..offset(i + 1)]`, the sentinel
// standing in for the offset after the last node. Hangul syllables are
// decomposed arithmetically and never looked up.

use smallvec::SmallVec;

use crate::decoder::ByteReader;
use crate::error::UcError;
use crate::search::{find, is_sorted_by_key, position, Probe};
use crate::tables::{Table, Tables};
use crate::Codepoint;

// === Hangul ===

pub const HANGUL_FIRST: Codepoint = 0xac00;
pub const HANGUL_LAST: Codepoint = 0xd7a3;

const L_BASE: Codepoint = 0x1100;
const V_BASE: Codepoint = 0x1161;
const T_BASE: Codepoint = 0x11a7;
const T_COUNT: Codepoint = 28;
const N_COUNT: Codepoint = 21 * T_COUNT;

/// Decomposed codepoints. Canonical decompositions rarely exceed four.
pub type Decomposition = SmallVec<[Codepoint; 4]>;

/// Decompose a precomposed Hangul syllable into two or three jamo.
pub fn decompose_hangul(code: Codepoint) -> Option<Decomposition> {
    if !(HANGUL_FIRST..=HANGUL_LAST).contains(&code) {
        return None;
    }
    let s = code - HANGUL_FIRST;
    let mut out = Decomposition::new();
    out.push(L_BASE + s / N_COUNT);
    out.push(V_BASE + (s % N_COUNT) / T_COUNT);
    let t = s % T_COUNT;
    if t != 0 {
        out.push(T_BASE + t);
    }
    Some(out)
}

/// Highest valid codepoint.
const MAX_CODEPOINT: Codepoint = 0x10ffff;

/// Delta-encoded decomposition table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecompositionTable {
    nodes: Vec<[Codepoint; 2]>,
    end: usize,
    pool: Vec<Codepoint>,
}

impl Table for DecompositionTable {
    const KIND: Tables = Tables::DECOMP;

    fn decode(r: &mut ByteReader<'_>) -> Result<Self, UcError> {
        let count = r.read_u16()? as usize;
        let size = r.read_u32()? as usize / 4;
        if size < count * 2 + 1 {
            return Err(UcError::malformed(Tables::DECOMP, "sentinel missing"));
        }
        let nodes = r.read_records::<2>(count)?;
        let end = r.read_i32()?;
        let pool = r.read_i32_vec(size - count * 2 - 1)?;

        if end < 0 || end as usize > pool.len() {
            return Err(UcError::malformed(Tables::DECOMP, "sentinel out of range"));
        }
        if !is_sorted_by_key(&nodes) {
            return Err(UcError::malformed(Tables::DECOMP, "nodes not sorted"));
        }
        let offsets_ok = nodes.iter().map(|n| n[1]).chain([end]).try_fold(0, |prev, off| {
            (off >= prev).then_some(off)
        });
        if offsets_ok.is_none() {
            return Err(UcError::malformed(Tables::DECOMP, "offsets not ascending"));
        }
        if pool.iter().any(|&c| !(0..=MAX_CODEPOINT).contains(&c)) {
            return Err(UcError::malformed(Tables::DECOMP, "invalid codepoint in pool"));
        }

        log::debug!(
            "decoded decomp table: {} nodes, {} pooled codepoints",
            nodes.len(),
            end
        );
        Ok(DecompositionTable {
            nodes,
            end: end as usize,
            pool,
        })
    }
}

impl DecompositionTable {
    /// Number of table entries, excluding the sentinel.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Table-only lookup; Hangul syllables are not consulted here.
    pub fn lookup(&self, code: Codepoint) -> Option<&[Codepoint]> {
        let idx = position(&self.nodes, Probe::Exact(code))?;
        let start = self.nodes[idx][1] as usize;
        let stop = self
            .nodes
            .get(idx + 1)
            .map_or(self.end, |next| next[1] as usize);
        Some(&self.pool[start..stop])
    }

    /// Canonical decomposition of `code`, `None` if it has none.
    pub fn decompose(&self, code: Codepoint) -> Option<Decomposition> {
        if let Some(jamo) = decompose_hangul(code) {
            return Some(jamo);
        }
        self.lookup(code)
            .filter(|seq| !seq.is_empty())
            .map(Decomposition::from_slice)
    }

    /// True if the table has an entry for `code`.
    pub fn contains(&self, code: Codepoint) -> bool {
        find(&self.nodes, Probe::Exact(code)).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::ByteOrder;
    use crate::writer::write_decomp;

    fn table(order: ByteOrder) -> DecompositionTable {
        let entries = vec![
            (0xc0, vec![0x41, 0x300]),
            (0xc5, vec![0x41, 0x30a]),
            (0x1d5, vec![0xdc, 0x304]),
            (0x212b, vec![0xc5]),
            (0xac00, vec![0x41]),
        ];
        DecompositionTable::from_bytes(&write_decomp(order, &entries).unwrap()).unwrap()
    }

    #[test]
    fn both_orders_agree() {
        assert_eq!(table(ByteOrder::Big), table(ByteOrder::Little));
        assert_eq!(table(ByteOrder::Big).len(), 5);
    }

    #[test]
    fn lengths_come_from_offset_deltas() {
        let t = table(ByteOrder::Big);
        assert_eq!(t.lookup(0xc0), Some(&[0x41, 0x300][..]));
        assert_eq!(t.lookup(0x1d5), Some(&[0xdc, 0x304][..]));
        assert_eq!(t.lookup(0x212b), Some(&[0xc5][..]));
        // Last node is bounded by the sentinel.
        assert_eq!(t.lookup(0xac00), Some(&[0x41][..]));
        assert_eq!(t.lookup(0x41), None);
    }

    #[test]
    fn hangul_takes_precedence() {
        let t = table(ByteOrder::Big);
        assert_eq!(t.decompose(0xac00).unwrap().as_slice(), &[0x1100, 0x1161]);
        assert_eq!(
            t.decompose(0xac01).unwrap().as_slice(),
            &[0x1100, 0x1161, 0x11a8]
        );
        assert_eq!(
            t.decompose(0xd7a3).unwrap().as_slice(),
            &[0x1112, 0x1175, 0x11c2]
        );
    }

    #[test]
    fn hangul_bounds() {
        assert!(decompose_hangul(0xabff).is_none());
        assert!(decompose_hangul(0xd7a4).is_none());
        assert_eq!(decompose_hangul(0xac1c).unwrap().as_slice(), &[0x1100, 0x1162]);
    }

    #[test]
    fn decompose_from_table() {
        let t = table(ByteOrder::Little);
        assert_eq!(t.decompose(0xc5).unwrap().as_slice(), &[0x41, 0x30a]);
        assert!(t.decompose(0x41).is_none());
        assert!(t.contains(0x212b));
        assert!(!t.contains(0x212a));
    }

    #[test]
    fn empty_table() {
        let bytes = write_decomp(ByteOrder::Big, &[]).unwrap();
        let t = DecompositionTable::from_bytes(&bytes).unwrap();
        assert!(t.is_empty());
        assert!(t.decompose(0xc0).is_none());
        assert!(t.decompose(0xac00).is_some());
    }

    #[test]
    fn missing_sentinel() {
        // One node, byte size covers only the node itself.
        let data = [0xfe, 0xff, 0, 1, 0, 0, 0, 8, 0, 0, 0, 0xc0, 0, 0, 0, 0];
        assert!(matches!(
            DecompositionTable::from_bytes(&data),
            Err(UcError::Malformed { .. })
        ));
    }

    #[test]
    fn sentinel_beyond_pool() {
        // One node at offset 0, sentinel 3, pool of 2.
        let data = [
            0xfe, 0xff, 0, 1, 0, 0, 0, 20, 0, 0, 0, 0xc0, 0, 0, 0, 0, 0, 0, 0, 3, 0, 0, 0, 0x41, 0,
            0, 0x03, 0x00,
        ];
        assert!(matches!(
            DecompositionTable::from_bytes(&data),
            Err(UcError::Malformed { .. })
        ));
    }
}
