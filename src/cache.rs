//! On-disk ByteMap cache: a key -> blob store rooted at `$HOME/.lxrhash/`.
//!
//! ByteMap generation for the default `K = 30` can take minutes; the cache
//! turns that into a one-time cost. Per the error handling design, trouble
//! here (no home directory, an uncreatable cache directory, an unwritable
//! file) is never fatal to [`Lxr::new`](crate::Lxr::new) — it degrades to an
//! in-memory-only table and is only logged.

use {crate::config::LxrConfig, std::path::PathBuf};

const CACHE_DIR_NAME: &str = ".lxrhash";

/// Identifies a ByteMap blob: `(seed, passes, K)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CacheKey {
    seed: [u8; 8],
    passes: u32,
    map_size_bits: u8,
}

impl CacheKey {
    pub(crate) fn filename(&self) -> String {
        format!(
            "lxrhash-seed-{}-passes-{}-size-{}.dat",
            hex::encode(self.seed),
            self.passes,
            self.map_size_bits
        )
    }

    pub(crate) fn expected_len(&self) -> u64 {
        1u64 << self.map_size_bits
    }
}

impl From<&LxrConfig> for CacheKey {
    fn from(config: &LxrConfig) -> Self {
        Self {
            seed: config.seed,
            passes: config.passes,
            map_size_bits: config.map_size_bits,
        }
    }
}

/// A simple key -> blob store for ByteMap tables.
///
/// Construction is infallible: if the cache directory can't be resolved or
/// created, `TableCache` silently becomes disk-less (every `try_load`
/// returns `None`, every `store` is a no-op) after logging a warning.
pub(crate) struct TableCache {
    dir: Option<PathBuf>,
}

impl TableCache {
    pub(crate) fn new() -> Self {
        let home = match dirs::home_dir() {
            Some(home) => home,
            None => {
                tracing::warn!("lxrhash: could not determine home directory; continuing without a disk cache");
                return Self { dir: None };
            }
        };
        Self::with_root(home.join(CACHE_DIR_NAME))
    }

    /// Builds a cache rooted at `dir` directly, bypassing `$HOME` resolution.
    ///
    /// Used by tests to exercise the on-disk behavior against a temporary
    /// directory instead of the real `$HOME/.lxrhash`.
    pub(crate) fn with_root(dir: PathBuf) -> Self {
        if let Err(error) = std::fs::create_dir_all(&dir) {
            tracing::warn!(path = %dir.display(), %error, "lxrhash: could not create cache directory; continuing without a disk cache");
            return Self { dir: None };
        }
        Self { dir: Some(dir) }
    }

    pub(crate) fn try_load(&self, key: &CacheKey) -> Option<Vec<u8>> {
        let path = self.dir.as_ref()?.join(key.filename());
        let data = std::fs::read(&path).ok()?;
        if data.len() as u64 == key.expected_len() {
            Some(data)
        } else {
            None
        }
    }

    pub(crate) fn store(&self, key: &CacheKey, bytes: &[u8]) {
        let Some(dir) = self.dir.as_ref() else {
            return;
        };
        let path = dir.join(key.filename());
        let tmp_path = dir.join(format!("{}.tmp", key.filename()));
        let result = std::fs::write(&tmp_path, bytes).and_then(|()| std::fs::rename(&tmp_path, &path));
        if let Err(error) = result {
            tracing::warn!(path = %path.display(), %error, "lxrhash: could not persist ByteMap cache; continuing with the in-memory table only");
        }
    }
}
