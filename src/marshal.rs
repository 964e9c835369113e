//! Byte serialization of the plain data types (ssmarshal + serde).
//!
//! Only the value bytes are produced; framing and checksums belong to the
//! transport.
//!
//! ssmarshal asserts on running out of buffer in debug builds, so both
//! directions check lengths before handing the bytes over.

use core::mem::size_of;

use serde::{de::DeserializeOwned, Serialize};

use crate::Error;

/// Largest value [`deserialize`] can rebuild from truncated input.
const SCRATCH_LEN: usize = 32;

/// Serializes `value` into `out_buf`, returning the written bytes.
///
/// `out_buf` must hold at least `size_of::<T>()` bytes, the upper bound of
/// the encoded length.
pub fn serialize<'a, T: Serialize>(value: &T, out_buf: &'a mut [u8]) -> Result<&'a [u8], Error> {
    let needed = size_of::<T>();
    if out_buf.len() < needed {
        return Err(Error::BufferTooSmall {
            needed,
            available: out_buf.len(),
        });
    }
    let n = ssmarshal::serialize(out_buf, value)?;
    Ok(&out_buf[0..n])
}

/// Deserializes a `T` from the start of `in_buf`, returning it with the
/// number of bytes consumed.
pub fn deserialize<T: DeserializeOwned>(in_buf: &[u8]) -> Result<(T, usize), Error> {
    let needed = size_of::<T>();
    let available = in_buf.len();
    if available >= needed {
        return ssmarshal::deserialize::<T>(in_buf).map_err(Error::from);
    }
    // encoded values are often shorter than `T`, decode from a zero-padded copy
    let mut scratch = [0u8; SCRATCH_LEN];
    let padded = scratch
        .get_mut(..needed)
        .ok_or(Error::BufferTooSmall { needed, available })?;
    padded[..available].copy_from_slice(in_buf);
    let (value, used) = ssmarshal::deserialize::<T>(padded)?;
    if used > available {
        return Err(Error::BufferTooSmall {
            needed: used,
            available,
        });
    }
    Ok((value, used))
}
