use crate::{
    cache::{CacheKey, TableCache},
    config::LxrConfig,
};

fn key(bits: u8) -> CacheKey {
    CacheKey::from(&LxrConfig { map_size_bits: bits, passes: 5, ..LxrConfig::default() })
}

#[test]
fn filename_matches_the_documented_format() {
    assert_eq!(
        key(30).filename(),
        "lxrhash-seed-fafaececfafaecec-passes-5-size-30.dat"
    );
}

#[test]
fn expected_len_is_two_to_the_k() {
    assert_eq!(key(8).expected_len(), 256);
    assert_eq!(key(12).expected_len(), 4096);
}

#[test]
fn miss_when_nothing_stored() {
    let dir = tempfile::tempdir().unwrap();
    let cache = TableCache::with_root(dir.path().to_path_buf());
    assert!(cache.try_load(&key(8)).is_none());
}

#[test]
fn store_then_try_load_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let cache = TableCache::with_root(dir.path().to_path_buf());
    let k = key(8);
    let bytes: Vec<u8> = (0..=255u8).collect();

    cache.store(&k, &bytes);
    let loaded = cache.try_load(&k).expect("just-stored blob should be found");
    assert_eq!(loaded, bytes);
}

#[test]
fn a_blob_of_the_wrong_length_is_treated_as_a_miss() {
    let dir = tempfile::tempdir().unwrap();
    let cache = TableCache::with_root(dir.path().to_path_buf());
    let k = key(8); // expects 256 bytes

    std::fs::write(dir.path().join(k.filename()), vec![0u8; 10]).unwrap();
    assert!(cache.try_load(&k).is_none());
}

#[test]
fn distinct_keys_do_not_collide() {
    let dir = tempfile::tempdir().unwrap();
    let cache = TableCache::with_root(dir.path().to_path_buf());
    let a = key(8);
    let b = CacheKey::from(&LxrConfig { map_size_bits: 9, passes: 5, ..LxrConfig::default() });

    cache.store(&a, &vec![1u8; a.expected_len() as usize]);
    cache.store(&b, &vec![2u8; b.expected_len() as usize]);

    assert_eq!(cache.try_load(&a).unwrap(), vec![1u8; a.expected_len() as usize]);
    assert_eq!(cache.try_load(&b).unwrap(), vec![2u8; b.expected_len() as usize]);
}
