//! Deserialize impls mirroring the `ser` module.

use std::fmt;

use serde::de::{self, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer};

use crate::float::{DecimalBits, DoubleBits, HalfBits, SingleBits};
use crate::schema::Schema;
use crate::stream::BitStream;
use crate::util::bits_to_bytes;
use crate::value::BitField;

impl<'de, L: Schema> Deserialize<'de> for BitField<L>
where
    L::Word: Deserialize<'de>,
{
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Self::from_native(L::Word::deserialize(deserializer)?))
    }
}

macro_rules! deserialize_from_bits {
    ($($ty:ty => $word:ty),*) => {$(
        impl<'de> Deserialize<'de> for $ty {
            #[inline]
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                Ok(Self::from_bits(<$word>::deserialize(deserializer)?))
            }
        }
    )*};
}

deserialize_from_bits!(
    HalfBits => u16,
    SingleBits => u32,
    DoubleBits => u64,
    DecimalBits => u128
);

struct BitStreamVisitor;

impl<'de> Visitor<'de> for BitStreamVisitor {
    type Value = BitStream;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a bit length followed by content bytes")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let len: u64 = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(0, &self))?;
        let bytes: Vec<u8> = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(1, &self))?;
        if bytes.len() < bits_to_bytes(len) {
            return Err(de::Error::custom(
                "content shorter than the declared bit length",
            ));
        }
        Ok(BitStream::from_content(bytes, len))
    }
}

impl<'de> Deserialize<'de> for BitStream {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_tuple(2, BitStreamVisitor)
    }
}
