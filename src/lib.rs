//! LXRHash: a deterministic, seeded, table-driven mixing hash used by the
//! PegNet mining protocol.
//!
//! The defining feature is the [`ByteMap`](bytemap::ByteMap): a precomputed
//! byte-permutation table of `2^K` entries (typically one gibibyte at the
//! default `K = 30`) whose size forces every lookup to miss the CPU cache.
//! That memory-boundedness is deliberate — it is what gives the hash its
//! ASIC resistance.
//!
//! Building the default-sized table is too heavy for a doctest, so this
//! example configures a much smaller one instead:
//!
//! ```
//! use lxrhash::{Lxr, LxrConfig};
//!
//! let lxr = Lxr::new(LxrConfig { map_size_bits: 16, ..LxrConfig::default() })?;
//! let digest = lxr.h(b"pegnet");
//! assert_eq!(digest.len(), lxr.digest_len());
//! # Ok::<(), lxrhash::LxrError>(())
//! ```


mod arith;
mod bytemap;
mod cache;
mod config;
mod error;
mod hasher;

use {
    bytemap::ByteMap,
    cache::{CacheKey, TableCache},
    std::sync::Arc,
};

pub use {config::LxrConfig, error::LxrError};

/// The LXRHash facade: owns the configuration and the (possibly gibibyte-sized)
/// ByteMap, and exposes [`h`](Lxr::h).
///
/// Cloning an `Lxr` is cheap — the ByteMap is shared via `Arc`, never
/// copied, so clones (and the hashes they compute) can be handed to other
/// threads freely.
#[derive(Clone)]
pub struct Lxr {
    config: LxrConfig,
    map: Arc<ByteMap>,
}

impl Lxr {
    /// Builds an `Lxr` from `config`, loading the ByteMap from the on-disk
    /// cache if a matching one exists, generating (and then caching) it
    /// otherwise.
    ///
    /// The only failure mode is an invalid `config`; cache I/O trouble is
    /// logged and tolerated, never returned here (see [`LxrError`]).
    pub fn new(config: LxrConfig) -> Result<Self, LxrError> {
        config.validate()?;

        let cache = TableCache::new();
        let key = CacheKey::from(&config);
        let map = match cache.try_load(&key) {
            Some(bytes) => ByteMap::from_bytes(config.map_size_bits, bytes)?,
            None => {
                let map = ByteMap::generate(
                    config.seed_int(),
                    config.passes,
                    config.map_size_bits,
                    config.verbose,
                );
                cache.store(&key, map.as_bytes());
                map
            }
        };

        Ok(Self { config, map: Arc::new(map) })
    }

    /// Hashes `src`, returning a digest of [`digest_len`](Lxr::digest_len) bytes.
    pub fn h(&self, src: &[u8]) -> Vec<u8> {
        hasher::hash(&self.map, self.config.seed_int(), self.config.digest_len(), src)
    }

    /// The configured digest length, in bytes.
    pub fn digest_len(&self) -> usize {
        self.config.digest_len()
    }

    /// `M`, the number of entries in the underlying ByteMap.
    pub fn map_size(&self) -> u64 {
        self.map.len()
    }

    /// The configuration this instance was built from.
    pub fn config(&self) -> &LxrConfig {
        &self.config
    }
}

impl Default for Lxr {
    /// Builds an `Lxr` from [`LxrConfig::default`]. The default configuration
    /// is always within the valid `map_size_bits` range, so this cannot fail.
    fn default() -> Self {
        Self::new(LxrConfig::default()).expect("LxrConfig::default() is always a valid configuration")
    }
}
