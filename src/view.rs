//! Zero-copy projections of named bit-fields onto caller-owned buffers.

use std::fmt;
use std::marker::PhantomData;

use zerocopy::BigEndian;

use crate::engine;
use crate::error::Result;
use crate::field::Field;
use crate::order::{BitOrder, ByteOrder, MsbIsBitZero};

/// A read-only view: a buffer reference, a byte offset, and the byte/bit
/// order carried in the type.
///
/// The view owns no storage; every access reads the referenced buffer
/// directly. Handles are cheap values: copy them freely, hand out as many as
/// needed. A field whose payload is itself structured can be opened with
/// [`Self::subview`], which yields a new handle at the field's byte offset
/// carrying its own independent byte and bit order, to any depth.
///
/// ```
/// use na_bits::{BitView, Field, LittleEndian, LsbIsBitZero};
///
/// const OPCODE: Field = Field::new("opcode", 0, 3);
/// const LENGTH: Field = Field::new("length", 8, 23);
///
/// let buf = [0x07, 0x10, 0x27, 0x00];
/// let view = BitView::<LittleEndian, LsbIsBitZero>::over(&buf);
/// assert_eq!(view.bits_u64(&OPCODE).unwrap(), 7);
/// assert_eq!(view.bits_u64(&LENGTH).unwrap(), 10_000);
/// ```
pub struct BitView<'a, O: ByteOrder = BigEndian, B: BitOrder = MsbIsBitZero> {
    data: &'a [u8],
    offset: usize,
    _marker: PhantomData<(O, B)>,
}

impl<'a, O: ByteOrder, B: BitOrder> BitView<'a, O, B> {
    /// A view over the whole buffer.
    #[inline]
    pub fn over(data: &'a [u8]) -> Self {
        Self::over_at(data, 0)
    }

    /// A view positioned `byte_offset` bytes into the buffer.
    #[inline]
    pub fn over_at(data: &'a [u8], byte_offset: usize) -> Self {
        Self {
            data,
            offset: byte_offset,
            _marker: PhantomData,
        }
    }

    /// The view's byte offset within the underlying buffer.
    #[inline]
    pub fn byte_offset(&self) -> usize {
        self.offset
    }

    /// Reads a field under this view's byte and bit order.
    #[inline]
    pub fn bits(&self, field: &Field) -> Result<u128> {
        engine::read_bits::<O, B>(self.data, self.offset, field)
    }

    /// Reads a field of at most 64 bits.
    ///
    /// # Panics
    ///
    /// When the field is wider than 64 bits.
    #[inline]
    pub fn bits_u64(&self, field: &Field) -> Result<u64> {
        assert!(field.width() <= 64, "field `{}` is wider than 64 bits", field.name());
        Ok(self.bits(field)? as u64)
    }

    /// Reads a width-1 field as a boolean.
    ///
    /// # Panics
    ///
    /// When the field is wider than one bit.
    #[inline]
    pub fn flag(&self, field: &Field) -> Result<bool> {
        assert!(field.is_flag(), "field `{}` is not a flag", field.name());
        Ok(self.bits(field)? & 1 == 1)
    }

    /// Reads a field forcing the byte order `O2`, keeping this view's bit
    /// order.
    #[inline]
    pub fn bits_as<O2: ByteOrder>(&self, field: &Field) -> Result<u128> {
        engine::read_bits::<O2, B>(self.data, self.offset, field)
    }

    /// Opens a nested view at the field's byte offset.
    ///
    /// The nested handle addresses the same buffer and carries its own byte
    /// and bit order, independent of this view's.
    #[inline]
    pub fn subview<O2: ByteOrder, B2: BitOrder>(&self, field: &Field) -> BitView<'a, O2, B2> {
        BitView::over_at(self.data, self.offset + field.lo() as usize / 8)
    }
}

impl<O: ByteOrder, B: BitOrder> Clone for BitView<'_, O, B> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<O: ByteOrder, B: BitOrder> Copy for BitView<'_, O, B> {}

impl<O: ByteOrder, B: BitOrder> fmt::Debug for BitView<'_, O, B> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("BitView")
            .field("offset", &self.offset)
            .field("len", &self.data.len())
            .finish()
    }
}

/// An exclusive view: like [`BitView`], plus write-through mutation.
///
/// Writes splice only the targeted field's bits and are immediately visible
/// through every other view subsequently taken over the same buffer.
pub struct BitViewMut<'a, O: ByteOrder = BigEndian, B: BitOrder = MsbIsBitZero> {
    data: &'a mut [u8],
    offset: usize,
    _marker: PhantomData<(O, B)>,
}

impl<'a, O: ByteOrder, B: BitOrder> BitViewMut<'a, O, B> {
    /// An exclusive view over the whole buffer.
    #[inline]
    pub fn over(data: &'a mut [u8]) -> Self {
        Self::over_at(data, 0)
    }

    /// An exclusive view positioned `byte_offset` bytes into the buffer.
    #[inline]
    pub fn over_at(data: &'a mut [u8], byte_offset: usize) -> Self {
        Self {
            data,
            offset: byte_offset,
            _marker: PhantomData,
        }
    }

    /// The view's byte offset within the underlying buffer.
    #[inline]
    pub fn byte_offset(&self) -> usize {
        self.offset
    }

    /// Reads a field under this view's byte and bit order.
    #[inline]
    pub fn bits(&self, field: &Field) -> Result<u128> {
        engine::read_bits::<O, B>(self.data, self.offset, field)
    }

    /// Reads a field of at most 64 bits.
    ///
    /// # Panics
    ///
    /// When the field is wider than 64 bits.
    #[inline]
    pub fn bits_u64(&self, field: &Field) -> Result<u64> {
        assert!(field.width() <= 64, "field `{}` is wider than 64 bits", field.name());
        Ok(self.bits(field)? as u64)
    }

    /// Reads a width-1 field as a boolean.
    ///
    /// # Panics
    ///
    /// When the field is wider than one bit.
    #[inline]
    pub fn flag(&self, field: &Field) -> Result<bool> {
        assert!(field.is_flag(), "field `{}` is not a flag", field.name());
        Ok(self.bits(field)? & 1 == 1)
    }

    /// Writes a field under this view's byte and bit order.
    ///
    /// The value is masked to the field width; bits outside the field keep
    /// their previous values.
    #[inline]
    pub fn set_bits(&mut self, field: &Field, value: u128) -> Result<()> {
        engine::write_bits::<O, B>(self.data, self.offset, field, value)
    }

    /// Writes a width-1 field from a boolean.
    ///
    /// # Panics
    ///
    /// When the field is wider than one bit.
    #[inline]
    pub fn set_flag(&mut self, field: &Field, on: bool) -> Result<()> {
        assert!(field.is_flag(), "field `{}` is not a flag", field.name());
        self.set_bits(field, on as u128)
    }

    /// Reads a field forcing the byte order `O2`, keeping this view's bit
    /// order.
    #[inline]
    pub fn bits_as<O2: ByteOrder>(&self, field: &Field) -> Result<u128> {
        engine::read_bits::<O2, B>(self.data, self.offset, field)
    }

    /// Writes a field forcing the byte order `O2`, keeping this view's bit
    /// order.
    #[inline]
    pub fn set_bits_as<O2: ByteOrder>(&mut self, field: &Field, value: u128) -> Result<()> {
        engine::write_bits::<O2, B>(self.data, self.offset, field, value)
    }

    /// A shared view of the same bytes at the same offset.
    #[inline]
    pub fn as_view(&self) -> BitView<'_, O, B> {
        BitView::over_at(self.data, self.offset)
    }

    /// Opens a nested read-only view at the field's byte offset.
    #[inline]
    pub fn subview<O2: ByteOrder, B2: BitOrder>(&self, field: &Field) -> BitView<'_, O2, B2> {
        BitView::over_at(self.data, self.offset + field.lo() as usize / 8)
    }

    /// Opens a nested exclusive view at the field's byte offset.
    ///
    /// The nested handle addresses the same buffer and carries its own byte
    /// and bit order; writes through it are visible through this view as soon
    /// as the nested borrow ends.
    #[inline]
    pub fn subview_mut<O2: ByteOrder, B2: BitOrder>(
        &mut self,
        field: &Field,
    ) -> BitViewMut<'_, O2, B2> {
        let offset = self.offset + field.lo() as usize / 8;
        BitViewMut::over_at(self.data, offset)
    }
}

impl<O: ByteOrder, B: BitOrder> fmt::Debug for BitViewMut<'_, O, B> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("BitViewMut")
            .field("offset", &self.offset)
            .field("len", &self.data.len())
            .finish()
    }
}
