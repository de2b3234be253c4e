use crate::error::{WireError, WireResult};
use crate::shortvec;

/// Forward-only cursor over a borrowed buffer.
///
/// Message and transaction decoding report short reads as
/// [`WireError::TruncatedInput`]; a reader created with [`WireReader::for_record`]
/// reports them as [`WireError::BufferTooSmall`] naming the record instead.
pub struct WireReader<'a> {
    buf: &'a [u8],
    pos: usize,
    record: Option<&'static str>,
}

impl<'a> WireReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self {
            buf,
            pos: 0,
            record: None,
        }
    }

    pub fn for_record(buf: &'a [u8], record: &'static str) -> Self {
        Self {
            buf,
            pos: 0,
            record: Some(record),
        }
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    #[inline]
    fn short_read(&self, needed: usize) -> WireError {
        match self.record {
            Some(record) => WireError::BufferTooSmall {
                record,
                offset: self.pos,
                needed,
                len: self.buf.len(),
            },
            None => WireError::TruncatedInput {
                offset: self.pos,
                needed,
                remaining: self.remaining(),
            },
        }
    }

    #[inline]
    pub fn read_bytes(&mut self, n: usize) -> WireResult<&'a [u8]> {
        if n > self.remaining() {
            return Err(self.short_read(n));
        }
        let out = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(out)
    }

    #[inline]
    pub fn skip(&mut self, n: usize) -> WireResult<()> {
        self.read_bytes(n).map(|_| ())
    }

    #[inline]
    pub fn read_array<const N: usize>(&mut self) -> WireResult<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_bytes(N)?);
        Ok(out)
    }

    #[inline]
    pub fn read_u8(&mut self) -> WireResult<u8> {
        Ok(self.read_array::<1>()?[0])
    }

    #[inline]
    pub fn read_u32_le(&mut self) -> WireResult<u32> {
        Ok(u32::from_le_bytes(self.read_array()?))
    }

    #[inline]
    pub fn read_u64_le(&mut self) -> WireResult<u64> {
        Ok(u64::from_le_bytes(self.read_array()?))
    }

    #[inline]
    pub fn read_i64_le(&mut self) -> WireResult<i64> {
        Ok(i64::from_le_bytes(self.read_array()?))
    }

    #[inline]
    pub fn read_f64_le(&mut self) -> WireResult<f64> {
        Ok(f64::from_le_bytes(self.read_array()?))
    }

    /// Compact (shortvec) length prefix.
    #[inline]
    pub fn read_compact_len(&mut self) -> WireResult<usize> {
        shortvec::decode_len(self.buf, &mut self.pos)
    }

    /// Fixed-width u64 element count that must fit `elem_size * count` in the
    /// rest of the buffer. Checked before any element is read so a corrupt
    /// count fails fast instead of allocating.
    pub fn read_u64_count(&mut self, elem_size: usize) -> WireResult<usize> {
        let count = usize::try_from(self.read_u64_le()?).unwrap_or(usize::MAX);
        match count.checked_mul(elem_size) {
            Some(total) if total <= self.remaining() => Ok(count),
            total => Err(self.short_read(total.unwrap_or(usize::MAX))),
        }
    }

    /// Fails unless the whole buffer has been consumed.
    pub fn finish(&self) -> WireResult<()> {
        if self.remaining() != 0 {
            return Err(WireError::TrailingBytes {
                offset: self.pos,
                remaining: self.remaining(),
            });
        }
        Ok(())
    }
}
