use crate::{bytemap::ByteMap, config::DEFAULT_SEED, error::LxrError};

fn seed_int() -> u64 {
    u64::from_be_bytes(DEFAULT_SEED)
}

#[test]
fn generation_is_deterministic() {
    let a = ByteMap::generate(seed_int(), 3, 10, false);
    let b = ByteMap::generate(seed_int(), 3, 10, false);
    assert_eq!(a.as_bytes(), b.as_bytes());
}

#[test]
fn different_seeds_produce_different_tables() {
    let a = ByteMap::generate(seed_int(), 3, 10, false);
    let b = ByteMap::generate(seed_int() ^ 1, 3, 10, false);
    assert_ne!(a.as_bytes(), b.as_bytes());
}

#[test]
fn byte_ratio_invariant_holds_after_generation() {
    let bits = 10u8; // M = 1024, so each byte value appears exactly 4 times
    let map = ByteMap::generate(seed_int(), 5, bits, false);
    let mut counts = [0u32; 256];
    for &byte in map.as_bytes() {
        counts[byte as usize] += 1;
    }
    let expected = map.len() / 256;
    for (value, &count) in counts.iter().enumerate() {
        assert_eq!(
            count as u64, expected,
            "byte value {value} appeared {count} times, expected {expected}"
        );
    }
}

#[test]
fn len_and_mask_agree_with_bits() {
    let map = ByteMap::generate(seed_int(), 1, 12, false);
    assert_eq!(map.len(), 1 << 12);
    assert_eq!(map.bits(), 12);
    // Indexing wraps via the mask rather than panicking.
    assert_eq!(map.get(map.len()), map.get(0));
}

#[test]
fn from_bytes_round_trips_through_as_bytes() {
    let generated = ByteMap::generate(seed_int(), 2, 9, false);
    let reloaded = ByteMap::from_bytes(9, generated.as_bytes().to_vec()).unwrap();
    assert_eq!(generated.as_bytes(), reloaded.as_bytes());
}

#[test]
fn from_bytes_rejects_a_mismatched_length() {
    let err = ByteMap::from_bytes(10, vec![0u8; 100]).unwrap_err();
    assert!(matches!(
        err,
        LxrError::MapSizeMismatch { expected: 1024, actual: 100 }
    ));
}
