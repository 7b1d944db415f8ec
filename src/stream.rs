//! An owned, growable, bit-addressable stream.

use std::fmt;
use std::io::SeekFrom;

use crate::error::{Error, Result};
use crate::order::{BitOrder, ByteOrder};
use crate::util::{bits_to_bytes, cold_path};
use crate::view::{BitView, BitViewMut};

/// Which end of the stream [`BitStream::truncate`] removes bits from.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum TruncateFrom {
    /// Remove from the front; every retained bit shifts down to close the
    /// gap (an O(length) operation).
    Begin,
    /// Remove from the back; retained bits stay in place.
    End,
}

/// A growable byte buffer exposing bit-granular position, read/write, seek,
/// truncate, and capacity management.
///
/// Bit `i` of the stream lives at byte `i / 8`, most-significant bit first,
/// so a big-endian [`BitView`] over [`Self::as_bytes`] sees bits in stream
/// order. The position names the current bit: `-1` exactly while the stream
/// is empty, otherwise between 0 and `len_bits() - 1`.
///
/// ```
/// use na_bits::BitStream;
/// use std::io::SeekFrom;
///
/// let mut stream = BitStream::new();
/// stream.write_byte(0b1010_0000);
/// stream.seek(SeekFrom::Start(0)).unwrap();
/// assert!(stream.read().unwrap());
/// assert!(!stream.read().unwrap());
/// ```
#[derive(Clone)]
pub struct BitStream {
    buf: Vec<u8>,
    /// Capacity in bits; `buf.len() == ceil(cap / 8)` always.
    cap: u64,
    /// Length in bits; never exceeds `cap`.
    len: u64,
    /// Current bit; `-1` exactly while the stream is empty.
    pos: i64,
    /// The current bit was already consumed by `read`.
    exhausted: bool,
}

impl BitStream {
    /// Default initial capacity in bits.
    pub const DEFAULT_CAPACITY: u64 = 2048;

    /// An empty stream with the default capacity.
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// An empty stream with room for `bits` bits before the first growth.
    pub fn with_capacity(bits: u64) -> Self {
        Self {
            buf: vec![0; bits_to_bytes(bits)],
            cap: bits,
            len: 0,
            pos: -1,
            exhausted: false,
        }
    }

    /// Takes ownership of existing bytes as a stream of `8 * bytes.len()`
    /// bits, positioned at the last bit.
    #[inline]
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        let len = bytes.len() as u64 * 8;
        Self::from_content(bytes, len)
    }

    pub(crate) fn from_content(mut bytes: Vec<u8>, len: u64) -> Self {
        bytes.resize(bits_to_bytes(len), 0);
        let cap = bytes.len() as u64 * 8;
        Self {
            buf: bytes,
            cap,
            len,
            pos: if len == 0 { -1 } else { (len - 1) as i64 },
            exhausted: false,
        }
    }

    /// Length in bits.
    #[inline]
    pub fn len_bits(&self) -> u64 {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Capacity in bits. Never below [`Self::len_bits`].
    #[inline]
    pub fn capacity(&self) -> u64 {
        self.cap
    }

    /// The current bit, or `-1` while the stream is empty.
    #[inline]
    pub fn position(&self) -> i64 {
        self.pos
    }

    /// Reads the bit at the current position and advances by one.
    ///
    /// Fails with [`Error::EndOfStream`] when no bit remains.
    pub fn read(&mut self) -> Result<bool> {
        if self.len == 0 || self.exhausted {
            cold_path();
            return Err(Error::EndOfStream);
        }
        let bit = self.get_bit(self.pos as u64);
        if (self.pos as u64) + 1 < self.len {
            self.pos += 1;
        } else {
            self.exhausted = true;
        }
        Ok(bit)
    }

    /// Reads eight bits, most significant first.
    pub fn read_byte(&mut self) -> Result<u8> {
        let mut byte = 0u8;
        for _ in 0..8 {
            byte = (byte << 1) | self.read()? as u8;
        }
        Ok(byte)
    }

    /// Writes a bit at the position after the current one and advances.
    ///
    /// Writing at or past the end grows the stream (and, geometrically, its
    /// capacity); writing before the end overwrites in place without
    /// shifting later bits.
    pub fn write(&mut self, bit: bool) {
        let target = (self.pos + 1) as u64;
        if target >= self.len {
            if self.len == self.cap {
                self.grow();
            }
            self.len += 1;
        }
        self.set_bit(target, bit);
        self.pos = target as i64;
        self.exhausted = false;
    }

    /// Writes eight bits, most significant first.
    pub fn write_byte(&mut self, byte: u8) {
        for i in (0..8).rev() {
            self.write(byte >> i & 1 == 1);
        }
    }

    fn grow(&mut self) {
        let new_cap = self
            .cap
            .saturating_mul(2)
            .max(Self::DEFAULT_CAPACITY);
        self.buf.resize(bits_to_bytes(new_cap), 0);
        self.cap = new_cap;
    }

    /// Moves the position.
    ///
    /// The candidate is computed from `Start(0)`, `Current(position)`, or
    /// `End(len_bits() - 1)` and must land between 0 and `len_bits() - 1`,
    /// or at exactly `-1` while the stream is empty. An out-of-range result
    /// fails with [`Error::OutOfRange`] and moves nothing.
    pub fn seek(&mut self, from: SeekFrom) -> Result<i64> {
        let candidate: i128 = match from {
            SeekFrom::Start(offset) => offset as i128,
            SeekFrom::Current(delta) => self.pos as i128 + delta as i128,
            SeekFrom::End(delta) => self.len as i128 - 1 + delta as i128,
        };
        let valid = if self.len == 0 {
            candidate == -1
        } else {
            candidate >= 0 && candidate < self.len as i128
        };
        if !valid {
            cold_path();
            return Err(Error::OutOfRange);
        }
        self.pos = candidate as i64;
        self.exhausted = false;
        Ok(self.pos)
    }

    /// Sets the capacity, reallocating the backing buffer.
    ///
    /// Shrinking below the current length truncates stored bits and clamps
    /// the position into the new bound, or to `-1` when the capacity reaches
    /// zero. Capacity never shrinks implicitly; this is the only way down.
    pub fn set_capacity(&mut self, bits: u64) {
        self.buf.resize(bits_to_bytes(bits), 0);
        self.buf.shrink_to_fit();
        self.cap = bits;
        if self.len > bits {
            self.len = bits;
        }
        self.clamp_position();
    }

    /// Sets the length.
    ///
    /// Growing past the capacity grows the capacity to match; bits exposed by
    /// growth read as zero. Shrinking truncates stored bits. The position is
    /// clamped into the new range.
    pub fn set_len(&mut self, bits: u64) {
        if bits > self.cap {
            self.buf.resize(bits_to_bytes(bits), 0);
            self.cap = bits;
        }
        if bits > self.len {
            self.zero_bits(self.len, bits);
        }
        self.len = bits;
        self.clamp_position();
    }

    /// Empties the stream. Capacity is unchanged.
    #[inline]
    pub fn clear(&mut self) {
        self.set_len(0);
    }

    /// Removes `count` bits from the chosen end.
    ///
    /// Removing from [`TruncateFrom::Begin`] shifts every retained bit down,
    /// an O(length) operation; removing from [`TruncateFrom::End`] drops the
    /// tail in place. The position keeps addressing the same retained bit
    /// when it survives, and clamps to the nearest valid bit otherwise.
    ///
    /// Fails with [`Error::OutOfRange`] when `count` exceeds the length,
    /// changing nothing.
    pub fn truncate(&mut self, count: u64, from: TruncateFrom) -> Result<()> {
        if count > self.len {
            cold_path();
            return Err(Error::OutOfRange);
        }
        let new_len = self.len - count;
        match from {
            TruncateFrom::End => {
                self.len = new_len;
                if self.len == 0 {
                    self.pos = -1;
                    self.exhausted = false;
                } else if self.pos as u64 > self.len - 1 {
                    self.pos = (self.len - 1) as i64;
                    self.exhausted = false;
                }
            }
            TruncateFrom::Begin => {
                if count % 8 == 0 {
                    let shift = (count / 8) as usize;
                    let bytes = bits_to_bytes(self.len);
                    self.buf.copy_within(shift..bytes, 0);
                } else {
                    for i in 0..new_len {
                        let bit = self.get_bit(i + count);
                        self.set_bit(i, bit);
                    }
                }
                self.len = new_len;
                if self.len == 0 {
                    self.pos = -1;
                    self.exhausted = false;
                } else if self.pos < count as i64 {
                    self.pos = 0;
                    self.exhausted = false;
                } else {
                    self.pos -= count as i64;
                }
            }
        }
        Ok(())
    }

    /// The live backing bytes holding the stream's content.
    ///
    /// Bits are packed most-significant first; the final byte's unused low
    /// bits are not meaningful.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..bits_to_bytes(self.len)]
    }

    /// Mutable access to the live backing bytes.
    ///
    /// This is the zero-copy escape hatch: writes made here bypass the
    /// stream's length and position bookkeeping entirely.
    #[inline]
    pub fn as_mut_bytes(&mut self) -> &mut [u8] {
        let bytes = bits_to_bytes(self.len);
        &mut self.buf[..bytes]
    }

    /// A read-only bit-field view over the stream's content bytes.
    #[inline]
    pub fn view<O: ByteOrder, B: BitOrder>(&self) -> BitView<'_, O, B> {
        BitView::over(self.as_bytes())
    }

    /// An exclusive bit-field view over the stream's content bytes.
    #[inline]
    pub fn view_mut<O: ByteOrder, B: BitOrder>(&mut self) -> BitViewMut<'_, O, B> {
        BitViewMut::over(self.as_mut_bytes())
    }

    /// Freezes the content bytes into a reference-counted [`bytes::Bytes`]
    /// without copying.
    #[cfg(feature = "shared")]
    pub fn into_shared(mut self) -> bytes::Bytes {
        self.buf.truncate(bits_to_bytes(self.len));
        bytes::Bytes::from(self.buf)
    }

    fn clamp_position(&mut self) {
        if self.len == 0 {
            self.pos = -1;
            self.exhausted = false;
        } else if self.pos < 0 {
            self.pos = 0;
            self.exhausted = false;
        } else if self.pos as u64 > self.len - 1 {
            self.pos = (self.len - 1) as i64;
            self.exhausted = false;
        }
    }

    fn zero_bits(&mut self, from: u64, to: u64) {
        let mut i = from;
        while i < to && i % 8 != 0 {
            self.set_bit(i, false);
            i += 1;
        }
        while i + 8 <= to {
            self.buf[(i / 8) as usize] = 0;
            i += 8;
        }
        while i < to {
            self.set_bit(i, false);
            i += 1;
        }
    }

    #[inline]
    fn get_bit(&self, i: u64) -> bool {
        self.buf[(i / 8) as usize] >> (7 - (i % 8) as u32) & 1 == 1
    }

    #[inline]
    fn set_bit(&mut self, i: u64, on: bool) {
        let mask = 1u8 << (7 - (i % 8) as u32);
        let byte = &mut self.buf[(i / 8) as usize];
        if on {
            *byte |= mask;
        } else {
            *byte &= !mask;
        }
    }
}

impl Default for BitStream {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for BitStream {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("BitStream")
            .field("len", &self.len)
            .field("pos", &self.pos)
            .field("cap", &self.cap)
            .finish()
    }
}
