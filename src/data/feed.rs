//! Feed client for the listings endpoint
//!
//! Loads property and blog-post datasets from the spreadsheet-backed Apps
//! Script endpoint, with a disk cache in front of the network. The endpoint's
//! response shape has drifted across deployments (sometimes a bare array,
//! sometimes wrapped in a `data` field), so every response goes through a
//! normalization step before it is trusted.
//!
//! Failure semantics are deliberately blunt: transport errors, bad statuses,
//! and malformed bodies all collapse to an empty dataset. Diagnostics go to
//! `tracing`; nothing propagates to the UI beyond an empty card list.

use reqwest::Client;
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::cache::CacheManager;
use crate::config::FeedConfig;

use super::{BlogPost, Property};

/// Query string for the blog-list dataset; properties use the bare endpoint
const BLOG_LIST_QUERY: &str = "?action=getBlogList";

/// Errors that can occur while fetching from the feed endpoint
///
/// These never cross the `load` boundary; they exist so the internal fetch
/// path can use `?` and so log lines carry a typed cause.
#[derive(Debug, Error)]
pub enum FeedError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Endpoint answered with a non-success status
    #[error("unexpected response status: {0}")]
    Status(reqwest::StatusCode),
}

/// Client for loading listing datasets, cache-first
#[derive(Debug, Clone)]
pub struct FeedClient {
    /// HTTP client for endpoint requests
    http_client: Client,
    /// Disk cache; `None` runs every load against the network
    cache: Option<CacheManager>,
    /// Endpoint and cache parameters
    config: FeedConfig,
}

impl FeedClient {
    /// Creates a feed client with the default on-disk cache location
    pub fn new(config: FeedConfig) -> Self {
        Self {
            http_client: Client::new(),
            cache: CacheManager::new(),
            config,
        }
    }

    /// Creates a feed client with an explicit cache (or none)
    #[allow(dead_code)]
    pub fn with_cache(config: FeedConfig, cache: Option<CacheManager>) -> Self {
        Self {
            http_client: Client::new(),
            cache,
            config,
        }
    }

    /// Loads the property dataset
    pub async fn load_properties(&self) -> Vec<Property> {
        let key = self.config.properties_cache_key.clone();
        self.load(&key, "").await
    }

    /// Loads the blog-post dataset
    pub async fn load_blog_posts(&self) -> Vec<BlogPost> {
        let key = self.config.blog_cache_key.clone();
        self.load(&key, BLOG_LIST_QUERY).await
    }

    /// Loads one dataset, consulting the cache before the network
    ///
    /// A fresh cache entry is returned as-is with no network call. On a miss
    /// (or an expired entry) the endpoint is queried once; a non-empty
    /// normalized result is written through to the cache, an empty one leaves
    /// the cache untouched. All failures yield an empty vector.
    pub async fn load<T>(&self, key: &str, query: &str) -> Vec<T>
    where
        T: DeserializeOwned + Serialize,
    {
        if let Some(ref cache) = self.cache {
            if let Some(cached) = cache.read::<Vec<T>>(key) {
                if !cached.is_expired {
                    debug!(key, "serving dataset from cache");
                    return cached.data;
                }
            }
        }

        let body = match self.fetch_body(query).await {
            Ok(body) => body,
            Err(e) => {
                warn!(key, error = %e, "dataset fetch failed");
                return Vec::new();
            }
        };

        let items: Vec<T> = normalize_payload(&body);

        if items.is_empty() {
            warn!(key, "dataset response was empty or unrecognized");
        } else if let Some(ref cache) = self.cache {
            if let Err(e) = cache.write(key, &items, self.config.cache_ttl_hours) {
                warn!(key, error = %e, "failed to write dataset cache");
            }
        }

        items
    }

    /// Fetches a single blog post by stable id
    ///
    /// Single posts are not cached; the detail view is expected to re-fetch.
    /// A post without a title is treated as "not found", matching the
    /// endpoint's habit of answering `{}` for unknown ids.
    pub async fn fetch_blog_post(&self, id: &str) -> Option<BlogPost> {
        let query = format!("?action=getBlogPost&id={}", id);
        let body = match self.fetch_body(&query).await {
            Ok(body) => body,
            Err(e) => {
                warn!(id, error = %e, "blog post fetch failed");
                return None;
            }
        };

        match serde_json::from_str::<BlogPost>(&body) {
            Ok(post) if post.title.is_some() => Some(post),
            Ok(_) => {
                debug!(id, "blog post response had no title, treating as not found");
                None
            }
            Err(e) => {
                warn!(id, error = %e, "blog post response was not a post object");
                None
            }
        }
    }

    /// Clears both cached datasets
    ///
    /// The explicit forced-refresh operation; `load` itself never clears.
    pub fn clear_cache(&self) {
        if let Some(ref cache) = self.cache {
            for key in [&self.config.properties_cache_key, &self.config.blog_cache_key] {
                if let Err(e) = cache.invalidate(key) {
                    warn!(key = key.as_str(), error = %e, "failed to clear dataset cache");
                }
            }
        }
    }

    /// Issues one GET against the endpoint and returns the raw body
    async fn fetch_body(&self, query: &str) -> Result<String, FeedError> {
        let url = format!("{}{}", self.config.api_url, query);
        let response = self.http_client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status(status));
        }

        Ok(response.text().await?)
    }
}

/// Normalizes a response body into a dataset
///
/// Accepts the two shapes the endpoint has been observed to produce: a bare
/// JSON array, or an object whose `data` field holds the array. Anything
/// else, including a body that is not JSON at all, normalizes to empty.
pub fn normalize_payload<T: DeserializeOwned>(body: &str) -> Vec<T> {
    let value: serde_json::Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(_) => return Vec::new(),
    };

    let items = match value {
        serde_json::Value::Array(_) => value,
        serde_json::Value::Object(mut map) => match map.remove("data") {
            Some(data @ serde_json::Value::Array(_)) => data,
            _ => return Vec::new(),
        },
        _ => return Vec::new(),
    };

    serde_json::from_value(items).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Property;
    use tempfile::TempDir;

    /// Endpoint that refuses connections immediately, for miss-path tests
    const DEAD_ENDPOINT: &str = "http://127.0.0.1:1/exec";

    fn dead_client_with_cache() -> (FeedClient, CacheManager, TempDir) {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let cache = CacheManager::with_dir(temp_dir.path().to_path_buf());
        let client = FeedClient::with_cache(
            FeedConfig::with_api_url(DEAD_ENDPOINT),
            Some(cache.clone()),
        );
        (client, cache, temp_dir)
    }

    fn sample_properties() -> Vec<Property> {
        vec![
            Property {
                title: Some("Skyline Towers".to_string()),
                location: Some("Baner".to_string()),
                property_type: Some("3 BHK Apartment".to_string()),
                price: Some("₹1.2 Cr".to_string()),
                possession: Some("Ready to Move".to_string()),
                image_url: None,
            },
            Property {
                title: Some("Orchid Residency".to_string()),
                location: Some("Kharadi".to_string()),
                property_type: Some("2 BHK Apartment".to_string()),
                price: None,
                possession: None,
                image_url: None,
            },
        ]
    }

    #[test]
    fn test_normalize_bare_array() {
        let body = r#"[{"Title": "A"}, {"Title": "B"}]"#;
        let items: Vec<Property> = normalize_payload(body);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title.as_deref(), Some("A"));
        assert_eq!(items[1].title.as_deref(), Some("B"));
    }

    #[test]
    fn test_normalize_data_wrapper() {
        let body = r#"{"data": [{"Title": "A"}, {"Title": "B"}]}"#;
        let items: Vec<Property> = normalize_payload(body);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title.as_deref(), Some("A"));
    }

    #[test]
    fn test_normalize_preserves_order() {
        let body = r#"[{"Title": "Z"}, {"Title": "M"}, {"Title": "A"}]"#;
        let items: Vec<Property> = normalize_payload(body);
        let titles: Vec<_> = items.iter().map(|p| p.title.as_deref().unwrap()).collect();
        assert_eq!(titles, vec!["Z", "M", "A"]);
    }

    #[test]
    fn test_normalize_rejects_other_shapes() {
        assert!(normalize_payload::<Property>("{}").is_empty());
        assert!(normalize_payload::<Property>(r#"{"data": "not an array"}"#).is_empty());
        assert!(normalize_payload::<Property>(r#""just a string""#).is_empty());
        assert!(normalize_payload::<Property>("42").is_empty());
        assert!(normalize_payload::<Property>("not json at all").is_empty());
        assert!(normalize_payload::<Property>("").is_empty());
    }

    #[tokio::test]
    async fn test_fresh_cache_is_served_without_network() {
        let (client, cache, _temp_dir) = dead_client_with_cache();
        let payload = sample_properties();
        cache
            .write("peaksquare_data", &payload, 1)
            .expect("Seed write should succeed");

        // The endpoint is unreachable, so anything returned came from cache
        let loaded: Vec<Property> = client.load("peaksquare_data", "").await;

        assert_eq!(loaded, payload, "Cached payload should be returned in order");
    }

    #[tokio::test]
    async fn test_expired_cache_is_not_served_as_result() {
        let (client, cache, _temp_dir) = dead_client_with_cache();
        let payload = sample_properties();
        // Zero-hour TTL expires immediately
        cache
            .write("peaksquare_data", &payload, 0)
            .expect("Seed write should succeed");
        std::thread::sleep(std::time::Duration::from_millis(10));

        let loaded: Vec<Property> = client.load("peaksquare_data", "").await;

        assert!(
            loaded.is_empty(),
            "Expired entry plus failed fetch should yield an empty dataset"
        );
    }

    #[tokio::test]
    async fn test_failed_fetch_leaves_cache_untouched() {
        let (client, cache, _temp_dir) = dead_client_with_cache();
        let payload = sample_properties();
        cache
            .write("peaksquare_data", &payload, 0)
            .expect("Seed write should succeed");
        std::thread::sleep(std::time::Duration::from_millis(10));

        let _: Vec<Property> = client.load("peaksquare_data", "").await;

        // The stale entry must not be overwritten with empty data
        let still_there = cache
            .read::<Vec<Property>>("peaksquare_data")
            .expect("Stale entry should still exist");
        assert_eq!(still_there.data, payload);
    }

    #[tokio::test]
    async fn test_failed_fetch_writes_nothing_on_cold_cache() {
        let (client, cache, temp_dir) = dead_client_with_cache();

        let loaded: Vec<Property> = client.load("peaksquare_data", "").await;

        assert!(loaded.is_empty());
        assert!(
            cache.read::<Vec<Property>>("peaksquare_data").is_none(),
            "No cache entry should be created on failure"
        );
        assert!(!temp_dir.path().join("peaksquare_data.json").exists());
    }

    #[tokio::test]
    async fn test_load_without_cache_still_degrades_to_empty() {
        let client = FeedClient::with_cache(FeedConfig::with_api_url(DEAD_ENDPOINT), None);
        let loaded: Vec<Property> = client.load("peaksquare_data", "").await;
        assert!(loaded.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_blog_post_failure_is_none() {
        let client = FeedClient::with_cache(FeedConfig::with_api_url(DEAD_ENDPOINT), None);
        assert!(client.fetch_blog_post("abc").await.is_none());
    }

    #[tokio::test]
    async fn test_clear_cache_removes_both_datasets() {
        let (client, cache, temp_dir) = dead_client_with_cache();
        cache
            .write("peaksquare_data", &sample_properties(), 1)
            .expect("Seed write should succeed");
        cache
            .write("peaksquare_blog_data", &Vec::<crate::data::BlogPost>::new(), 1)
            .expect("Seed write should succeed");

        client.clear_cache();

        assert!(!temp_dir.path().join("peaksquare_data.json").exists());
        assert!(!temp_dir.path().join("peaksquare_blog_data.json").exists());
    }
}
