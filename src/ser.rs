//! Serialize impls: packed values travel as their native word, float bit
//! types as their raw pattern, and streams as a bit length plus content
//! bytes.

use serde::ser::SerializeTuple;
use serde::{Serialize, Serializer};

use crate::float::{DecimalBits, DoubleBits, HalfBits, SingleBits};
use crate::schema::Schema;
use crate::stream::BitStream;
use crate::value::BitField;

impl<L: Schema> Serialize for BitField<L>
where
    L::Word: Serialize,
{
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.into_native().serialize(serializer)
    }
}

macro_rules! serialize_as_bits {
    ($($ty:ty),*) => {$(
        impl Serialize for $ty {
            #[inline]
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                self.to_bits().serialize(serializer)
            }
        }
    )*};
}

serialize_as_bits!(HalfBits, SingleBits, DoubleBits, DecimalBits);

impl Serialize for BitStream {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut tup = serializer.serialize_tuple(2)?;
        tup.serialize_element(&self.len_bits())?;
        tup.serialize_element(self.as_bytes())?;
        tup.end()
    }
}
