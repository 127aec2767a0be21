// decoder.rs - Binary container decoder.
//
// Every table file starts with a two-byte order marker. `FE FE` means the
// multi-byte fields that follow are little-endian; anything else means they
// are already big-endian. The marker is never read back as data.

use std::io::Read;

use crate::error::UcError;
use crate::Codepoint;

// === Byte Order ===

/// Byte order of the multi-byte fields in a table file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    Big,
    Little,
}

impl ByteOrder {
    /// Marker written in the first two bytes of a little-endian file.
    pub const LITTLE_MARKER: [u8; 2] = [0xfe, 0xfe];
    /// Marker written in the first two bytes of a big-endian file.
    pub const BIG_MARKER: [u8; 2] = [0xfe, 0xff];

    /// Detect the byte order from the leading marker bytes.
    pub fn detect(data: &[u8]) -> ByteOrder {
        if data.len() >= 2 && data[..2] == Self::LITTLE_MARKER {
            ByteOrder::Little
        } else {
            ByteOrder::Big
        }
    }

    pub fn marker(self) -> [u8; 2] {
        match self {
            ByteOrder::Big => Self::BIG_MARKER,
            ByteOrder::Little => Self::LITTLE_MARKER,
        }
    }
}

/// Size of the order marker that precedes every table header.
pub const MARKER_LEN: usize = 2;

/// Read a table source until it is exhausted.
///
/// A source that yields no bytes at all is an error; the caller leaves the
/// table unpopulated.
pub fn read_source<R: Read>(mut reader: R) -> Result<Vec<u8>, UcError> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    if data.is_empty() {
        return Err(UcError::EmptySource);
    }
    Ok(data)
}

// === ByteReader ===

/// Cursor over a table buffer that normalizes multi-byte fields to native
/// integers according to the detected byte order.
#[derive(Debug, Clone)]
pub struct ByteReader<'a> {
    data: &'a [u8],
    pos: usize,
    order: ByteOrder,
}

impl<'a> ByteReader<'a> {
    /// Open a buffer, detect its byte order and position the cursor just
    /// past the marker.
    pub fn open(data: &'a [u8]) -> Result<Self, UcError> {
        if data.is_empty() {
            return Err(UcError::EmptySource);
        }
        Ok(ByteReader {
            data,
            pos: MARKER_LEN,
            order: ByteOrder::detect(data),
        })
    }

    pub fn order(&self) -> ByteOrder {
        self.order
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    /// Total buffer length, marker included.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Bytes left after the cursor.
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    /// Move the cursor to an absolute offset. Seeking past the end is
    /// allowed; the next read reports the truncation.
    pub fn seek(&mut self, offset: usize) {
        self.pos = offset;
    }

    pub fn skip(&mut self, n: usize) {
        self.pos = self.pos.saturating_add(n);
    }

    fn take<const N: usize>(&mut self) -> Result<[u8; N], UcError> {
        let end = self.pos.checked_add(N).filter(|&end| end <= self.data.len());
        let Some(end) = end else {
            return Err(UcError::Truncated {
                offset: self.pos,
                needed: N,
                len: self.data.len(),
            });
        };
        let mut bytes = [0u8; N];
        bytes.copy_from_slice(&self.data[self.pos..end]);
        self.pos = end;
        Ok(bytes)
    }

    pub fn read_u16(&mut self) -> Result<u16, UcError> {
        let bytes = self.take::<2>()?;
        Ok(match self.order {
            ByteOrder::Big => u16::from_be_bytes(bytes),
            ByteOrder::Little => u16::from_le_bytes(bytes),
        })
    }

    pub fn read_i16(&mut self) -> Result<i16, UcError> {
        self.read_u16().map(|v| v as i16)
    }

    pub fn read_u32(&mut self) -> Result<u32, UcError> {
        let bytes = self.take::<4>()?;
        Ok(match self.order {
            ByteOrder::Big => u32::from_be_bytes(bytes),
            ByteOrder::Little => u32::from_le_bytes(bytes),
        })
    }

    pub fn read_i32(&mut self) -> Result<i32, UcError> {
        self.read_u32().map(|v| v as i32)
    }

    pub fn read_u16_at(&mut self, offset: usize) -> Result<u16, UcError> {
        self.seek(offset);
        self.read_u16()
    }

    pub fn read_i16_at(&mut self, offset: usize) -> Result<i16, UcError> {
        self.seek(offset);
        self.read_i16()
    }

    pub fn read_i32_at(&mut self, offset: usize) -> Result<i32, UcError> {
        self.seek(offset);
        self.read_i32()
    }

    /// Read `count` fixed-width records of `N` 32-bit fields each.
    pub fn read_records<const N: usize>(
        &mut self,
        count: usize,
    ) -> Result<Vec<[Codepoint; N]>, UcError> {
        self.ensure(count.saturating_mul(N * 4))?;
        let mut out = Vec::with_capacity(count);
        for _ in 0..count {
            let mut rec = [0; N];
            for field in rec.iter_mut() {
                *field = self.read_i32()?;
            }
            out.push(rec);
        }
        Ok(out)
    }

    pub fn read_i32_vec(&mut self, count: usize) -> Result<Vec<i32>, UcError> {
        self.ensure(count.saturating_mul(4))?;
        (0..count).map(|_| self.read_i32()).collect()
    }

    pub fn read_i16_vec(&mut self, count: usize) -> Result<Vec<i16>, UcError> {
        self.ensure(count.saturating_mul(2))?;
        (0..count).map(|_| self.read_i16()).collect()
    }

    // Checked up front so a bogus header count cannot trigger a huge
    // allocation before the first short read.
    fn ensure(&self, needed: usize) -> Result<(), UcError> {
        if needed > self.remaining() {
            return Err(UcError::Truncated {
                offset: self.pos,
                needed,
                len: self.data.len(),
            });
        }
        Ok(())
    }
}
