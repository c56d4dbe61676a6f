/// Errors that can prevent an [`Lxr`](crate::Lxr) instance from being built.
///
/// Cache I/O trouble (missing `$HOME`, an uncreatable cache directory, an
/// unwritable cache file) is deliberately **not** a variant here: per the
/// error handling design, those conditions degrade to an in-memory-only
/// table and are only logged, never propagated. The only way construction
/// fails is a bad [`LxrConfig`](crate::LxrConfig) or a hand-built cache blob
/// of the wrong length.
#[derive(Debug, thiserror::Error)]
pub enum LxrError {
    /// `map_size_bits` was outside the supported `[8, 34]` range.
    #[error("map size must be between 8 and 34 bits, got {0}")]
    InvalidMapSize(u8),

    /// A ByteMap blob's length didn't match the configured map size.
    ///
    /// [`TableCache::try_load`](crate::cache::TableCache::try_load) filters
    /// mismatched lengths out as a cache miss before they ever reach
    /// [`ByteMap::from_bytes`](crate::bytemap::ByteMap::from_bytes), so in
    /// practice this only fires against a hand-built blob.
    #[error("expected a ByteMap blob of {expected} bytes, got {actual}")]
    MapSizeMismatch { expected: u64, actual: usize },
}
