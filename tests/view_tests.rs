use na_bits::{
    BigEndian, BitView, BitViewMut, Error, Field, LittleEndian, LsbIsBitZero, MsbIsBitZero,
    NetworkEndian,
};

const WORD: Field = Field::new("word", 0, 31);

#[test]
fn big_endian_writes_most_significant_byte_first() {
    let mut buf = [0u8; 4];
    let mut view = BitViewMut::<BigEndian, MsbIsBitZero>::over(&mut buf);
    view.set_bits(&WORD, 0x1234_5678).unwrap();
    assert_eq!(buf, [0x12, 0x34, 0x56, 0x78]);
}

#[test]
fn little_endian_writes_least_significant_byte_first() {
    let mut buf = [0u8; 4];
    let mut view = BitViewMut::<LittleEndian, MsbIsBitZero>::over(&mut buf);
    view.set_bits(&WORD, 0x1234_5678).unwrap();
    assert_eq!(buf, [0x78, 0x56, 0x34, 0x12]);
}

#[test]
fn byte_aligned_layout_is_identical_under_both_bit_orders() {
    for value in [0x1234_5678u128, 0xDEAD_BEEF, 1, u32::MAX as u128] {
        let mut a = [0u8; 4];
        let mut b = [0u8; 4];
        BitViewMut::<BigEndian, MsbIsBitZero>::over(&mut a)
            .set_bits(&WORD, value)
            .unwrap();
        BitViewMut::<BigEndian, LsbIsBitZero>::over(&mut b)
            .set_bits(&WORD, value)
            .unwrap();
        assert_eq!(a, b);

        BitViewMut::<LittleEndian, MsbIsBitZero>::over(&mut a)
            .set_bits(&WORD, value)
            .unwrap();
        BitViewMut::<LittleEndian, LsbIsBitZero>::over(&mut b)
            .set_bits(&WORD, value)
            .unwrap();
        assert_eq!(a, b);
    }
}

#[test]
fn network_order_is_big_endian() {
    let mut buf = [0u8; 4];
    BitViewMut::<NetworkEndian, MsbIsBitZero>::over(&mut buf)
        .set_bits(&WORD, 0x1234_5678)
        .unwrap();
    assert_eq!(buf, [0x12, 0x34, 0x56, 0x78]);
}

#[test]
fn round_trip_across_the_order_cross_product() {
    const MID: Field = Field::new("mid", 5, 27);

    macro_rules! case {
        ($o:ty, $b:ty) => {
            let mut buf = [0u8; 4];
            let mut view = BitViewMut::<$o, $b>::over(&mut buf);
            view.set_bits(&MID, 0x55_AA55).unwrap();
            assert_eq!(view.bits(&MID).unwrap(), 0x55_AA55);
            // Bits outside the field were never touched.
            view.set_bits(&MID, 0).unwrap();
            assert_eq!(buf, [0u8; 4]);
        };
    }

    case!(BigEndian, MsbIsBitZero);
    case!(BigEndian, LsbIsBitZero);
    case!(LittleEndian, MsbIsBitZero);
    case!(LittleEndian, LsbIsBitZero);
}

#[test]
fn misaligned_byte_crossing_field() {
    const MID: Field = Field::new("mid", 4, 11);

    let mut buf = [0u8; 2];
    BitViewMut::<BigEndian, MsbIsBitZero>::over(&mut buf)
        .set_bits(&MID, 0xAB)
        .unwrap();
    assert_eq!(buf, [0x0A, 0xB0]);

    let mut buf = [0u8; 2];
    BitViewMut::<LittleEndian, LsbIsBitZero>::over(&mut buf)
        .set_bits(&MID, 0xAB)
        .unwrap();
    assert_eq!(buf, [0xB0, 0x0A]);

    let mut buf = [0u8; 2];
    BitViewMut::<LittleEndian, MsbIsBitZero>::over(&mut buf)
        .set_bits(&MID, 0xAB)
        .unwrap();
    assert_eq!(buf, [0xB0, 0x0A]);

    let mut buf = [0u8; 2];
    BitViewMut::<BigEndian, LsbIsBitZero>::over(&mut buf)
        .set_bits(&MID, 0xAB)
        .unwrap();
    assert_eq!(buf, [0x0A, 0xB0]);
}

#[test]
fn writes_splice_without_touching_neighbors() {
    const MID: Field = Field::new("mid", 4, 11);
    let mut buf = [0xFFu8; 2];
    BitViewMut::<BigEndian, MsbIsBitZero>::over(&mut buf)
        .set_bits(&MID, 0)
        .unwrap();
    assert_eq!(buf, [0xF0, 0x0F]);
}

#[test]
fn flags_and_offsets() {
    const READY: Field = Field::flag("ready", 0);
    const ABORT: Field = Field::flag("abort", 7);

    let mut buf = [0u8; 3];
    let mut view = BitViewMut::<BigEndian, MsbIsBitZero>::over_at(&mut buf, 1);
    view.set_flag(&READY, true).unwrap();
    assert_eq!(view.byte_offset(), 1);
    assert!(view.flag(&READY).unwrap());
    assert!(!view.flag(&ABORT).unwrap());
    // MSB-is-bit-zero: flag 0 is the high bit of the addressed byte.
    assert_eq!(buf, [0, 0x80, 0]);

    let mut buf = [0u8; 1];
    let mut view = BitViewMut::<BigEndian, LsbIsBitZero>::over(&mut buf);
    view.set_flag(&READY, true).unwrap();
    assert_eq!(buf, [0x01]);
}

#[test]
fn per_field_byte_order_override() {
    let mut buf = [0u8; 4];
    let mut view = BitViewMut::<BigEndian, MsbIsBitZero>::over(&mut buf);
    view.set_bits(&WORD, 0x1234_5678).unwrap();
    assert_eq!(view.bits_as::<LittleEndian>(&WORD).unwrap(), 0x7856_3412);

    view.set_bits_as::<LittleEndian>(&WORD, 0x1234_5678).unwrap();
    assert_eq!(buf, [0x78, 0x56, 0x34, 0x12]);
}

#[test]
fn nested_views_carry_independent_orders() {
    // Outer record, big-endian: a header word, an embedded little-endian
    // sub-record, a trailer word.
    const HEADER: Field = Field::new("header", 0, 15);
    const SUB: Field = Field::new("sub", 16, 47);
    const TAIL: Field = Field::new("tail", 48, 63);
    // Inside the sub-record (bytes 2..=5 of the buffer).
    const SUB_ID: Field = Field::new("id", 0, 15);

    let mut buf = [0u8; 8];
    let mut outer = BitViewMut::<BigEndian, MsbIsBitZero>::over(&mut buf);
    outer.set_bits(&HEADER, 0x0102).unwrap();
    outer.set_bits(&TAIL, 0x0708).unwrap();
    let mut sub = outer.subview_mut::<LittleEndian, LsbIsBitZero>(&SUB);
    assert_eq!(sub.byte_offset(), 2);
    sub.set_bits(&SUB_ID, 0xCAFE).unwrap();

    // Little-endian inside, big-endian outside, same bytes.
    assert_eq!(buf, [0x01, 0x02, 0xFE, 0xCA, 0, 0, 0x07, 0x08]);
}

#[test]
fn doubly_nested_write_through() {
    const SUB: Field = Field::new("sub", 16, 47);
    const INNER: Field = Field::new("inner", 8, 23);
    const LEAF: Field = Field::new("leaf", 0, 15);

    let mut buf = [0u8; 8];
    let mut outer = BitViewMut::<BigEndian, MsbIsBitZero>::over(&mut buf);
    let mut sub = outer.subview_mut::<LittleEndian, LsbIsBitZero>(&SUB);
    let mut leaf = sub.subview_mut::<BigEndian, MsbIsBitZero>(&INNER);
    assert_eq!(leaf.byte_offset(), 3);
    leaf.set_bits(&LEAF, 0xBEEF).unwrap();

    // A fresh view over the same buffer sees the write at the absolute
    // position; sibling bytes are untouched.
    const ABSOLUTE: Field = Field::new("absolute", 24, 39);
    let fresh = BitView::<BigEndian, MsbIsBitZero>::over(&buf);
    assert_eq!(fresh.bits_u64(&ABSOLUTE).unwrap(), 0xBEEF);
    assert_eq!(buf, [0, 0, 0, 0xBE, 0xEF, 0, 0, 0]);
}

#[test]
fn shared_views_are_cheap_copies() {
    let buf = [0xAB, 0xCD];
    const HALF: Field = Field::new("half", 0, 7);
    let view = BitView::<BigEndian, MsbIsBitZero>::over(&buf);
    let copy = view;
    assert_eq!(view.bits_u64(&HALF).unwrap(), 0xAB);
    assert_eq!(copy.bits_u64(&HALF).unwrap(), 0xAB);
    let second = copy.subview::<BigEndian, MsbIsBitZero>(&Field::new("rest", 8, 15));
    assert_eq!(second.bits_u64(&HALF).unwrap(), 0xCD);
}

#[test]
fn out_of_range_access_fails_cleanly() {
    const WIDE: Field = Field::new("wide", 0, 23);
    let mut buf = [0x11u8, 0x22];
    let mut view = BitViewMut::<BigEndian, MsbIsBitZero>::over(&mut buf);
    assert_eq!(view.bits(&WIDE).unwrap_err(), Error::OutOfRange);
    assert_eq!(view.set_bits(&WIDE, 0).unwrap_err(), Error::OutOfRange);
    assert_eq!(buf, [0x11, 0x22]);
}

#[test]
fn wide_fields_use_the_full_image() {
    const WIDE: Field = Field::new("wide", 0, 127);
    let mut buf = [0u8; 16];
    let mut view = BitViewMut::<BigEndian, MsbIsBitZero>::over(&mut buf);
    let value = (0x0123_4567_89AB_CDEFu128 << 64) | 0xFEDC_BA98_7654_3210;
    view.set_bits(&WIDE, value).unwrap();
    assert_eq!(view.bits(&WIDE).unwrap(), value);
    assert_eq!(buf[0], 0x01);
    assert_eq!(buf[15], 0x10);
}
