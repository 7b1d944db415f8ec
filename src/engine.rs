//! Byte-order and bit-order aware field access on raw byte buffers.
//!
//! These functions own no storage: they compute the absolute bit range of a
//! [`Field`] inside a caller's buffer and extract or splice it there, honoring
//! the bit-numbering convention `B` within the field's byte window and the
//! byte order `O` for assembling multi-byte fields.
//!
//! # Addressing model
//!
//! A field `lo..=hi` occupies the byte window `lo/8 ..= hi/8` past the byte
//! offset. Under [`MsbIsBitZero`](crate::MsbIsBitZero), numbered positions run
//! continuously from the most-significant bit of the first byte, so the
//! field's value MSB sits at position `lo`; under
//! [`LsbIsBitZero`](crate::LsbIsBitZero), position `lo` is the value's own
//! LSB. Byte order decides window traversal only: big-endian makes the first
//! window byte most significant, little-endian mirrors the window. Intra-byte
//! numbering is never affected by byte order.

use zerocopy::byteorder::{U16, U32, U64, U128};

use crate::error::{Error, Result};
use crate::field::Field;
use crate::order::{BitOrder, ByteOrder};
use crate::util::cold_path;

/// Reads a field out of `buf` starting at `byte_offset`.
///
/// Fails with [`Error::OutOfRange`] when the field's byte window does not fit
/// the buffer. The buffer is never touched on failure.
pub fn read_bits<O: ByteOrder, B: BitOrder>(
    buf: &[u8],
    byte_offset: usize,
    field: &Field,
) -> Result<u128> {
    let lo = field.lo() as usize;
    let hi = field.hi() as usize;
    byte_offset
        .checked_add(hi / 8)
        .filter(|last| *last < buf.len())
        .ok_or_else(|| {
            cold_path();
            Error::OutOfRange
        })?;

    if lo % 8 == 0 {
        let start = byte_offset + lo / 8;
        match field.width() {
            8 => return Ok(buf[start] as u128),
            16 => {
                let mut w = [0u8; 2];
                w.copy_from_slice(&buf[start..start + 2]);
                return Ok(U16::<O>::from_bytes(w).get() as u128);
            }
            32 => {
                let mut w = [0u8; 4];
                w.copy_from_slice(&buf[start..start + 4]);
                return Ok(U32::<O>::from_bytes(w).get() as u128);
            }
            64 => {
                let mut w = [0u8; 8];
                w.copy_from_slice(&buf[start..start + 8]);
                return Ok(U64::<O>::from_bytes(w).get() as u128);
            }
            128 => {
                let mut w = [0u8; 16];
                w.copy_from_slice(&buf[start..start + 16]);
                return Ok(U128::<O>::from_bytes(w).get());
            }
            _ => {}
        }
    }

    let first = lo / 8;
    let last_rel = hi / 8;
    let mirrored = O::LITTLE == B::MSB_FIRST;
    let mut value = 0u128;
    for j in 0..field.width() as usize {
        let (byte, bit) = locate::<B>(byte_offset, lo, hi, first, last_rel, mirrored, j);
        value |= (((buf[byte] >> bit) & 1) as u128) << j;
    }
    Ok(value)
}

/// Splices a field into `buf` starting at `byte_offset`.
///
/// `value` is masked to the field width; every bit outside the field keeps
/// its previous value. Fails with [`Error::OutOfRange`] when the field's byte
/// window does not fit the buffer, leaving the buffer untouched.
pub fn write_bits<O: ByteOrder, B: BitOrder>(
    buf: &mut [u8],
    byte_offset: usize,
    field: &Field,
    value: u128,
) -> Result<()> {
    let lo = field.lo() as usize;
    let hi = field.hi() as usize;
    byte_offset
        .checked_add(hi / 8)
        .filter(|last| *last < buf.len())
        .ok_or_else(|| {
            cold_path();
            Error::OutOfRange
        })?;

    let value = value & field.mask();

    if lo % 8 == 0 {
        let start = byte_offset + lo / 8;
        match field.width() {
            8 => {
                buf[start] = value as u8;
                return Ok(());
            }
            16 => {
                buf[start..start + 2].copy_from_slice(&U16::<O>::new(value as u16).to_bytes());
                return Ok(());
            }
            32 => {
                buf[start..start + 4].copy_from_slice(&U32::<O>::new(value as u32).to_bytes());
                return Ok(());
            }
            64 => {
                buf[start..start + 8].copy_from_slice(&U64::<O>::new(value as u64).to_bytes());
                return Ok(());
            }
            128 => {
                buf[start..start + 16].copy_from_slice(&U128::<O>::new(value).to_bytes());
                return Ok(());
            }
            _ => {}
        }
    }

    let first = lo / 8;
    let last_rel = hi / 8;
    let mirrored = O::LITTLE == B::MSB_FIRST;
    for j in 0..field.width() as usize {
        let (byte, bit) = locate::<B>(byte_offset, lo, hi, first, last_rel, mirrored, j);
        if (value >> j) & 1 == 1 {
            buf[byte] |= 1 << bit;
        } else {
            buf[byte] &= !(1 << bit);
        }
    }
    Ok(())
}

/// Buffer location of value bit `j` (0 = value LSB) of the field `lo..=hi`.
#[inline]
fn locate<B: BitOrder>(
    byte_offset: usize,
    lo: usize,
    hi: usize,
    first: usize,
    last: usize,
    mirrored: bool,
    j: usize,
) -> (usize, u32) {
    let p = if B::MSB_FIRST { hi - j } else { lo + j };
    let byte = if mirrored {
        byte_offset + first + (last - p / 8)
    } else {
        byte_offset + p / 8
    };
    let bit = if B::MSB_FIRST {
        7 - (p % 8) as u32
    } else {
        (p % 8) as u32
    };
    (byte, bit)
}
