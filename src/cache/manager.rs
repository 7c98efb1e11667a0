//! Cache manager for persisting feed datasets to disk
//!
//! Provides a `CacheManager` that stores serializable payloads as JSON files
//! with expiry timestamps. Reads fail soft: a missing entry is `None`, and an
//! entry that no longer deserializes is deleted and treated as missing.

use chrono::{DateTime, Duration, Utc};
use directories::ProjectDirs;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Wrapper struct for cached data stored on disk
#[derive(Debug, Serialize, Deserialize)]
struct CacheEntry<T> {
    /// The cached payload
    data: T,
    /// When the payload was cached
    cached_at: DateTime<Utc>,
    /// When the entry stops being fresh
    expires_at: DateTime<Utc>,
}

/// Result of reading from cache, including metadata about cache freshness
#[derive(Debug)]
pub struct CachedData<T> {
    /// The cached payload
    pub data: T,
    /// When the payload was originally cached
    #[allow(dead_code)]
    pub cached_at: DateTime<Utc>,
    /// Whether the entry's TTL has elapsed
    pub is_expired: bool,
}

/// Manages reading and writing cached datasets on disk
///
/// One JSON file per cache key, stored in an XDG-compliant cache directory
/// (`~/.cache/peaksquare/` on Linux). Freshness is decided by the caller from
/// the `is_expired` flag; the manager never refuses to return an expired
/// entry, but it does delete entries it can no longer parse.
#[derive(Debug, Clone)]
pub struct CacheManager {
    /// Directory where cache files are stored
    cache_dir: PathBuf,
}

impl CacheManager {
    /// Creates a new CacheManager using an XDG-compliant cache directory
    ///
    /// Returns `None` if the cache directory cannot be determined (e.g. no
    /// home directory); callers then run without caching.
    pub fn new() -> Option<Self> {
        let project_dirs = ProjectDirs::from("", "", "peaksquare")?;
        let cache_dir = project_dirs.cache_dir().to_path_buf();
        Some(Self { cache_dir })
    }

    /// Creates a new CacheManager rooted at a specific directory
    ///
    /// Used by tests and by anything that needs a non-default location.
    #[allow(dead_code)]
    pub fn with_dir(cache_dir: PathBuf) -> Self {
        Self { cache_dir }
    }

    /// Returns the path to the cache file for the given key
    fn cache_path(&self, key: &str) -> PathBuf {
        self.cache_dir.join(format!("{}.json", key))
    }

    /// Ensures the cache directory exists
    fn ensure_dir(&self) -> std::io::Result<()> {
        fs::create_dir_all(&self.cache_dir)
    }

    /// Writes a payload to the cache with the given TTL in hours
    ///
    /// Stamps the entry with the current time; a pre-existing entry under the
    /// same key is overwritten.
    pub fn write<T: Serialize>(&self, key: &str, data: &T, ttl_hours: u64) -> std::io::Result<()> {
        self.ensure_dir()?;

        let now = Utc::now();
        let entry = CacheEntry {
            data,
            cached_at: now,
            expires_at: now + Duration::hours(ttl_hours as i64),
        };

        let json = serde_json::to_string_pretty(&entry)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

        fs::write(self.cache_path(key), json)
    }

    /// Reads a payload from the cache
    ///
    /// Returns `None` if the entry doesn't exist. If the entry exists but
    /// cannot be parsed (a corrupted or stale-format file), the file is
    /// removed and `None` is returned, so the next write starts clean.
    /// An expired entry is still returned, with `is_expired = true`.
    pub fn read<T: DeserializeOwned>(&self, key: &str) -> Option<CachedData<T>> {
        let path = self.cache_path(key);
        let content = fs::read_to_string(&path).ok()?;

        let entry: CacheEntry<T> = match serde_json::from_str(&content) {
            Ok(entry) => entry,
            Err(_) => {
                let _ = fs::remove_file(&path);
                return None;
            }
        };

        let now = Utc::now();
        let is_expired = now > entry.expires_at;

        Some(CachedData {
            data: entry.data,
            cached_at: entry.cached_at,
            is_expired,
        })
    }

    /// Removes the entry for the given key
    ///
    /// Backs the forced-refresh path (`--refresh` flag, `r` key). A missing
    /// entry is not an error.
    pub fn invalidate(&self, key: &str) -> std::io::Result<()> {
        match fs::remove_file(self.cache_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}
