use packed_bools::{BitArrayError, PackedBitArray};

#[test]
fn set_and_get() -> Result<(), BitArrayError> {
    let mut flags = PackedBitArray::new(16)?;
    flags.set(0, true);
    flags.set(1, false);
    flags.set(2, true);

    assert!(flags.get(0));
    assert!(!flags.get(1));
    assert!(flags.get(2));
    Ok(())
}

#[test]
fn zero_size_fails() {
    assert!(matches!(
        PackedBitArray::new(0),
        Err(BitArrayError::InvalidSize(0))
    ));
}

#[test]
fn string_roundtrip() -> Result<(), BitArrayError> {
    assert_eq!(PackedBitArray::from_string("1010")?.to_string(), "1010");
    Ok(())
}

#[test]
fn resize_preserves_data() -> Result<(), BitArrayError> {
    let mut flags = PackedBitArray::new(8)?;
    flags.set(0, true);
    flags.set(7, true);

    flags.resize(16)?;
    assert!(flags.get(0));
    assert!(flags.get(7));
    assert!(!flags.get(15));

    flags.resize(4)?;
    assert!(flags.get(0));
    assert!(!flags.get(5));
    assert!(matches!(
        flags.get_safe(7),
        Err(BitArrayError::IndexOutOfBounds(7, 4))
    ));
    Ok(())
}

#[test]
fn alternating_bits_at_scale() -> Result<(), BitArrayError> {
    let mut flags = PackedBitArray::new(200_000)?;
    for i in 0..flags.len() {
        flags.set(i, i % 2 == 1);
    }
    for i in 0..flags.len() {
        assert_eq!(flags.get(i), i % 2 == 1);
    }
    assert_eq!(flags.as_raw_bytes().len(), 25_000);
    assert!(flags.as_raw_bytes().iter().all(|&b| b == 0b1010_1010));
    Ok(())
}

#[test]
fn safe_accessors_reject_len() -> Result<(), BitArrayError> {
    let mut flags = PackedBitArray::new(16)?;
    assert_eq!(
        flags.set_safe(16, true),
        Err(BitArrayError::IndexOutOfBounds(16, 16))
    );
    assert_eq!(
        flags.get_safe(16),
        Err(BitArrayError::IndexOutOfBounds(16, 16))
    );
    Ok(())
}

#[test]
fn equality() -> Result<(), BitArrayError> {
    let mut a = PackedBitArray::new(8)?;
    let mut b = PackedBitArray::new(8)?;
    a.set(0, true);
    b.set(0, true);
    assert!(a.equals(&b));

    b.set(1, true);
    assert!(!a.equals(&b));
    assert_ne!(a, b);
    Ok(())
}

#[test]
fn factories_agree() -> Result<(), BitArrayError> {
    let from_str = PackedBitArray::from_source("1101")?;
    let from_bools = PackedBitArray::from_source([true, true, false, true])?;
    let from_nums = PackedBitArray::from_source(vec![1u8, 1, 0, 1])?;
    assert_eq!(from_str, from_bools);
    assert_eq!(from_bools, from_nums);
    assert_eq!(from_nums.to_vec(), vec![true, true, false, true]);
    Ok(())
}

#[test]
fn index_view() -> Result<(), BitArrayError> {
    let mut flags = PackedBitArray::new(4)?;
    let mut view = flags.access_like_array_mut();
    view.set_at(1, true);
    assert!(view[1]);
    assert!(!view[0]);
    assert_eq!(
        view.set_len(8),
        Err(BitArrayError::UnsupportedMutation { requested: 8, len: 4 })
    );
    assert_eq!(flags.to_string(), "0100");
    Ok(())
}

#[test]
fn for_loop_over_reference() -> Result<(), BitArrayError> {
    let flags = PackedBitArray::from_string("011")?;
    let mut ones = 0;
    for bit in &flags {
        ones += bit as u32;
    }
    assert_eq!(ones, 2);
    Ok(())
}
