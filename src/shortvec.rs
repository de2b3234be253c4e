//! Compact length prefixes ("shortvec").
//!
//! Every variable-length array on the wire is preceded by its element count,
//! written as 7-bit groups, least significant first, with bit 7 set on every
//! byte but the last. Three groups are the most the format allows.

use crate::error::{WireError, WireResult};

pub const MAX_ENCODED_BYTES: usize = 3;

/// Largest length representable in three 7-bit groups.
pub const MAX_LEN: usize = (1 << (7 * MAX_ENCODED_BYTES)) - 1;

#[inline]
pub fn encoded_len(len: usize) -> usize {
    match len {
        0..=0x7f => 1,
        0x80..=0x3fff => 2,
        _ => 3,
    }
}

#[inline]
pub fn encode_len(len: usize, out: &mut Vec<u8>) -> WireResult<()> {
    if len > MAX_LEN {
        return Err(WireError::EncodingRange {
            value: len,
            max: MAX_LEN,
        });
    }
    let mut x = len;
    while x >= 0x80 {
        out.push((x as u8) | 0x80);
        x >>= 7;
    }
    out.push(x as u8);
    Ok(())
}

/// Reads a length prefix at `*pos`, advancing `pos` past it.
#[inline]
pub fn decode_len(buf: &[u8], pos: &mut usize) -> WireResult<usize> {
    let start = *pos;
    let mut len = 0usize;
    for i in 0..MAX_ENCODED_BYTES {
        let at = start + i;
        let Some(&b) = buf.get(at) else {
            return Err(WireError::TruncatedInput {
                offset: at,
                needed: 1,
                remaining: 0,
            });
        };
        len |= ((b & 0x7f) as usize) << (7 * i);
        if b & 0x80 == 0 {
            *pos = at + 1;
            return Ok(len);
        }
    }
    // third group still asks for more
    Err(WireError::EncodingRange {
        value: len,
        max: MAX_LEN,
    })
}
