//! Feed configuration for the PeakSquare data layer
//!
//! All endpoint and cache parameters live in an explicit `FeedConfig` that is
//! passed into `FeedClient` at construction time, rather than in module-level
//! globals. The defaults mirror the production deployment: a Google Apps
//! Script endpoint backed by the listings spreadsheet, cached for one hour.

/// Default remote endpoint serving both datasets
pub const DEFAULT_API_URL: &str =
    "https://script.google.com/macros/s/AKfycbzdsftNssnmWHAO5ioiyKTGhJkgJ8ubf1rmEYr56xOk7X-gtIfn_4HTAowBq3id_lL3/exec";

/// Cache key for the property dataset
pub const PROPERTIES_CACHE_KEY: &str = "peaksquare_data";

/// Cache key for the blog-post dataset
pub const BLOG_CACHE_KEY: &str = "peaksquare_blog_data";

/// Cache TTL in hours for both datasets
pub const CACHE_TTL_HOURS: u64 = 1;

/// Configuration for the listing feed
///
/// Bundles the endpoint URL, per-dataset cache keys, and the cache TTL so the
/// whole data layer can be re-pointed (or disabled) from one place, e.g. for
/// tests or the `--api-url` CLI override.
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// Base URL of the remote endpoint; dataset queries are appended verbatim
    pub api_url: String,
    /// Cache key for property listings
    pub properties_cache_key: String,
    /// Cache key for blog posts
    pub blog_cache_key: String,
    /// How long a cached dataset stays fresh, in hours
    pub cache_ttl_hours: u64,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            properties_cache_key: PROPERTIES_CACHE_KEY.to_string(),
            blog_cache_key: BLOG_CACHE_KEY.to_string(),
            cache_ttl_hours: CACHE_TTL_HOURS,
        }
    }
}

impl FeedConfig {
    /// Returns a config pointing at a different endpoint, keeping the
    /// default cache keys and TTL
    pub fn with_api_url(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_uses_production_endpoint() {
        let config = FeedConfig::default();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.properties_cache_key, "peaksquare_data");
        assert_eq!(config.blog_cache_key, "peaksquare_blog_data");
        assert_eq!(config.cache_ttl_hours, 1);
    }

    #[test]
    fn test_with_api_url_overrides_endpoint_only() {
        let config = FeedConfig::with_api_url("http://localhost:8080/feed");
        assert_eq!(config.api_url, "http://localhost:8080/feed");
        assert_eq!(config.properties_cache_key, PROPERTIES_CACHE_KEY);
        assert_eq!(config.cache_ttl_hours, CACHE_TTL_HOURS);
    }
}
