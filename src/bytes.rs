//! Fixed width primitives used by every dataset.
//!
//! All values on the wire are little-endian and 4 bytes wide.
use crate::error::{Error, Result};

/// Number of bytes in an encoded `f32`.
pub const BYTES_IN_FLOAT: usize = 4;
/// Number of bytes in an encoded `i32`.
pub const BYTES_IN_INT32: usize = 4;

fn take4(buf: &[u8], offset: usize) -> Result<[u8; 4]> {
    offset
        .checked_add(4)
        .and_then(|end| buf.get(offset..end))
        .and_then(|b| <[u8; 4]>::try_from(b).ok())
        .ok_or(Error::TruncatedBuffer {
            offset,
            needed: 4,
            actual: buf.len(),
        })
}

/// Read a little-endian `f32` at `offset`.
///
/// # Errors
/// [Error::TruncatedBuffer] if fewer than 4 bytes remain at `offset`.
pub fn read_f32(buf: &[u8], offset: usize) -> Result<f32> {
    Ok(f32::from_le_bytes(take4(buf, offset)?))
}

/// Read a little-endian `i32` at `offset`.
///
/// # Errors
/// [Error::TruncatedBuffer] if fewer than 4 bytes remain at `offset`.
pub fn read_i32(buf: &[u8], offset: usize) -> Result<i32> {
    Ok(i32::from_le_bytes(take4(buf, offset)?))
}

#[must_use]
pub fn write_f32(value: f32) -> [u8; 4] {
    value.to_le_bytes()
}

#[must_use]
pub fn write_i32(value: i32) -> [u8; 4] {
    value.to_le_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_f32() {
        let dat = hex::decode("0000803f0000c0bf").unwrap();
        assert_eq!(read_f32(&dat, 0).unwrap(), 1.0);
        assert_eq!(read_f32(&dat, 4).unwrap(), -1.5);
    }

    #[test]
    fn test_read_i32() {
        let dat = hex::decode("ff0a000000800000").unwrap();
        assert_eq!(read_i32(&dat, 0).unwrap(), 0x0aff);
        assert_eq!(read_i32(&dat, 4).unwrap(), 0x8000);
    }

    #[test]
    fn read_past_end_is_truncated() {
        let dat = [0u8; 7];
        assert_eq!(
            read_i32(&dat, 4),
            Err(Error::TruncatedBuffer {
                offset: 4,
                needed: 4,
                actual: 7
            })
        );
        assert!(read_f32(&dat, usize::MAX - 1).is_err());
        assert!(read_f32(&[], 0).is_err());
    }

    #[test]
    fn float_roundtrip_is_bit_exact() {
        let values = [
            0.0,
            -0.0,
            88.888,
            f32::MIN_POSITIVE,
            f32::MAX,
            f32::INFINITY,
            f32::NEG_INFINITY,
            f32::from_bits(0x7fc0_0001),
            f32::from_bits(0xffa0_0000),
        ];
        for v in values {
            let got = read_f32(&write_f32(v), 0).unwrap();
            assert_eq!(got.to_bits(), v.to_bits(), "value {v:?}");
        }
    }

    #[test]
    fn int_roundtrip() {
        for v in [0, 1, -1, i32::MIN, i32::MAX, -32768] {
            assert_eq!(read_i32(&write_i32(v), 0).unwrap(), v);
        }
    }
}
