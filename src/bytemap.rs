//! The ByteMap: a deterministic byte-permutation table of `2^K` entries.
//!
//! Every [`Hasher`](crate::hasher) lookup indexes into this table; its size
//! (typically one gibibyte at the default `K = 30`) is what forces each
//! lookup to miss the CPU cache, which is the whole point of the design.

use {
    crate::{
        arith::{shl, shr},
        error::LxrError,
    },
    std::time::Instant,
};

/// Mixing register seeds for the shuffle phase, taken verbatim from the reference.
const FIRST_RAND: u64 = 2458719153079158768;
const FIRST_B: u64 = 4631534797403582785;
const FIRST_V: u64 = 3523455478921636871;

/// The precomputed, deterministic byte-permutation table.
///
/// Stored packed (one byte per entry, `Vec<u8>`) rather than widened to
/// `u64`, so the in-memory footprint is `M` bytes, not `8 * M`. [`get`](ByteMap::get)
/// widens on read, which is the only place the distinction is visible.
#[derive(Clone)]
pub struct ByteMap {
    bits: u8,
    mask: u64,
    entries: Vec<u8>,
}

impl ByteMap {
    /// Generates a fresh ByteMap for `(seed_int, passes, bits)`.
    ///
    /// `bits` is trusted to already be in `[8, 34]` — callers validate that
    /// through [`LxrConfig::validate`](crate::config::LxrConfig::validate)
    /// before reaching here.
    pub fn generate(seed_int: u64, passes: u32, bits: u8, verbose: bool) -> Self {
        let size = 1usize << bits;
        let mask = size as u64 - 1;

        // Tiled 0..=255 in ascending order, since every entry is a `u8`.
        let mut entries = vec![0u8; size];
        for (i, e) in entries.iter_mut().enumerate() {
            *e = (i % 256) as u8;
        }

        let mut offset = seed_int ^ FIRST_RAND;
        let mut b = seed_int ^ FIRST_B;
        let mut v = FIRST_V;

        for pass in 0..passes {
            let start = Instant::now();
            for i in 0..size {
                offset = shl(offset, 9) ^ shr(offset, 1) ^ shr(offset, 7) ^ b;
                let looked_up = entries[((offset ^ b) & mask) as usize] as u64;
                v = looked_up ^ shl(v, 8) ^ shr(v, 1);
                b = shl(v, 7) ^ shl(v, 13) ^ shl(v, 33) ^ shl(v, 52) ^ shl(b, 9) ^ shr(b, 1);
                let j = (offset & mask) as usize;
                entries.swap(i, j);
            }
            if verbose {
                tracing::info!(pass, elapsed = ?start.elapsed(), "lxrhash: ByteMap shuffle pass complete");
            } else {
                tracing::debug!(pass, elapsed = ?start.elapsed(), "lxrhash: ByteMap shuffle pass complete");
            }
        }

        Self { bits, mask, entries }
    }

    /// Rebuilds a ByteMap from a raw byte blob (e.g. loaded from
    /// [`TableCache`](crate::cache::TableCache)), one byte per entry.
    pub fn from_bytes(bits: u8, entries: Vec<u8>) -> Result<Self, LxrError> {
        let expected = 1u64 << bits;
        if entries.len() as u64 != expected {
            return Err(LxrError::MapSizeMismatch { expected, actual: entries.len() });
        }
        Ok(Self { bits, mask: expected - 1, entries })
    }

    /// `B(x) = map[x AND mask]`, widened to `u64`.
    #[inline]
    pub fn get(&self, x: u64) -> u64 {
        self.entries[(x & self.mask) as usize] as u64
    }

    /// `K`, the map-size exponent this ByteMap was generated/loaded for.
    pub fn bits(&self) -> u8 {
        self.bits
    }

    /// `M = 2^K`, the number of entries.
    pub fn len(&self) -> u64 {
        self.mask + 1
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// The packed, one-byte-per-entry representation used by [`TableCache`](crate::cache::TableCache).
    pub fn as_bytes(&self) -> &[u8] {
        &self.entries
    }
}

impl std::fmt::Debug for ByteMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ByteMap")
            .field("bits", &self.bits)
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}
