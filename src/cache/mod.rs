//! Cache module for persisting feed datasets to disk
//!
//! Stores each dataset (property listings, blog posts) as a timestamped JSON
//! file under a per-user cache directory. Entries carry an expiry timestamp
//! derived from a fixed TTL, and the data layer treats expired entries as
//! cache misses. Corrupt entries are removed on read. Clearing the cache is
//! an explicit operation, never something `read` or `write` does implicitly.

mod manager;

pub use manager::{CacheManager, CachedData};
