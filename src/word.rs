//! Storage-word abstraction over the native fixed-width integers.

use std::fmt::{Binary, Debug, Display, LowerHex, Octal, UpperHex};
use std::hash::Hash;

mod private {
    pub trait Sealed {}
}

/// A native fixed-width integer usable as bit-field storage.
///
/// Implemented for `u8`/`u16`/`u32`/`u64`/`u128` and their signed
/// counterparts. All arithmetic exposed here is the wrapping two's-complement
/// arithmetic of the underlying machine type; the raw-image methods move the
/// bit pattern in and out of a `u128` working image without reinterpreting it.
/// Sealed.
pub trait Word:
    private::Sealed
    + Copy
    + Default
    + Eq
    + Ord
    + Hash
    + Debug
    + Display
    + LowerHex
    + UpperHex
    + Binary
    + Octal
    + Send
    + Sync
    + 'static
{
    /// Storage width in bits.
    const BITS: u32;

    /// Whether ordering and decimal formatting interpret the word as signed.
    const SIGNED: bool;

    const ZERO: Self;
    const ONE: Self;
    const MIN: Self;
    const MAX: Self;

    /// The raw bit pattern, zero-extended into a `u128` image.
    ///
    /// Signed words contribute their two's-complement pattern; no sign
    /// extension happens beyond [`Self::BITS`].
    fn to_raw(self) -> u128;

    /// Truncates the low [`Self::BITS`] bits of an image back into the word.
    fn from_raw(raw: u128) -> Self;

    fn is_zero(self) -> bool;

    fn wrapping_add(self, rhs: Self) -> Self;
    fn wrapping_sub(self, rhs: Self) -> Self;
    fn wrapping_mul(self, rhs: Self) -> Self;
    fn wrapping_neg(self) -> Self;

    /// Division. `None` exactly when `rhs` is zero; `MIN / -1` wraps.
    fn div(self, rhs: Self) -> Option<Self>;

    /// Remainder. `None` exactly when `rhs` is zero; `MIN % -1` wraps to zero.
    fn rem(self, rhs: Self) -> Option<Self>;
}

macro_rules! impl_word {
    ($($ty:ty => $un:ty, $signed:expr;)*) => {$(
        impl private::Sealed for $ty {}

        impl Word for $ty {
            const BITS: u32 = <$ty>::BITS;
            const SIGNED: bool = $signed;
            const ZERO: Self = 0;
            const ONE: Self = 1;
            const MIN: Self = <$ty>::MIN;
            const MAX: Self = <$ty>::MAX;

            #[inline]
            fn to_raw(self) -> u128 {
                self as $un as u128
            }

            #[inline]
            fn from_raw(raw: u128) -> Self {
                raw as $ty
            }

            #[inline]
            fn is_zero(self) -> bool {
                self == 0
            }

            #[inline]
            fn wrapping_add(self, rhs: Self) -> Self {
                <$ty>::wrapping_add(self, rhs)
            }

            #[inline]
            fn wrapping_sub(self, rhs: Self) -> Self {
                <$ty>::wrapping_sub(self, rhs)
            }

            #[inline]
            fn wrapping_mul(self, rhs: Self) -> Self {
                <$ty>::wrapping_mul(self, rhs)
            }

            #[inline]
            fn wrapping_neg(self) -> Self {
                <$ty>::wrapping_neg(self)
            }

            #[inline]
            fn div(self, rhs: Self) -> Option<Self> {
                if rhs == 0 { None } else { Some(<$ty>::wrapping_div(self, rhs)) }
            }

            #[inline]
            fn rem(self, rhs: Self) -> Option<Self> {
                if rhs == 0 { None } else { Some(<$ty>::wrapping_rem(self, rhs)) }
            }
        }
    )*};
}

impl_word! {
    u8 => u8, false;
    u16 => u16, false;
    u32 => u32, false;
    u64 => u64, false;
    u128 => u128, false;
    i8 => u8, true;
    i16 => u16, true;
    i32 => u32, true;
    i64 => u64, true;
    i128 => u128, true;
}
