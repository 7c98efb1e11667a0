//! Search across the loaded listing datasets
//!
//! Case-insensitive substring search over both datasets at once: property
//! title, locality, and type, plus blog title and summary. Queries shorter
//! than two characters return nothing, matching the site's search overlay.

use crate::data::{BlogPost, ListingRef, Property};
use crate::render::image::{optimize_drive_image, CARD_IMAGE_WIDTH};
use crate::render::NavTarget;

/// Minimum query length before search runs
pub const MIN_QUERY_LEN: usize = 2;

/// Which dataset a hit came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitKind {
    Property,
    Insight,
}

impl HitKind {
    /// Badge text shown next to a hit
    pub fn label(&self) -> &'static str {
        match self {
            HitKind::Property => "PROPERTY",
            HitKind::Insight => "INSIGHT",
        }
    }
}

/// A single search result
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    pub kind: HitKind,
    pub title: String,
    /// Locality for properties, a fixed tag for insights
    pub subtitle: String,
    /// Normalized image URL
    pub image: String,
    /// Detail view the hit navigates to
    pub target: NavTarget,
}

/// Searches both datasets, properties first, in dataset order
pub fn search_listings(
    query: &str,
    properties: &[Property],
    posts: &[BlogPost],
) -> Vec<SearchHit> {
    let q = query.trim().to_lowercase();
    if q.len() < MIN_QUERY_LEN {
        return Vec::new();
    }

    let mut hits = Vec::new();

    for (idx, p) in properties.iter().enumerate() {
        let haystack = format!(
            "{}{}{}",
            p.title.as_deref().unwrap_or(""),
            p.location.as_deref().unwrap_or(""),
            p.property_type.as_deref().unwrap_or("")
        )
        .to_lowercase();

        if haystack.contains(&q) {
            hits.push(SearchHit {
                kind: HitKind::Property,
                title: p.title.clone().unwrap_or_else(|| "Luxury Property".to_string()),
                subtitle: p.location.clone().unwrap_or_else(|| "Pune".to_string()),
                image: optimize_drive_image(p.image_url.as_deref(), CARD_IMAGE_WIDTH),
                target: NavTarget::Property(ListingRef::Index(idx)),
            });
        }
    }

    for (idx, b) in posts.iter().enumerate() {
        let haystack = format!(
            "{}{}",
            b.title.as_deref().unwrap_or(""),
            b.summary.as_deref().unwrap_or("")
        )
        .to_lowercase();

        if haystack.contains(&q) {
            let listing_ref = match &b.id {
                Some(id) => ListingRef::Id(id.clone()),
                None => ListingRef::Index(idx),
            };
            hits.push(SearchHit {
                kind: HitKind::Insight,
                title: b.title.clone().unwrap_or_else(|| "Market Insight".to_string()),
                subtitle: "Market Trend".to_string(),
                image: optimize_drive_image(b.image.as_deref(), CARD_IMAGE_WIDTH),
                target: NavTarget::BlogPost(listing_ref),
            });
        }
    }

    hits
}

#[cfg(test)]
mod tests {
    use super::*;

    fn property(title: &str, location: &str, property_type: &str) -> Property {
        Property {
            title: Some(title.to_string()),
            location: Some(location.to_string()),
            property_type: Some(property_type.to_string()),
            price: None,
            possession: None,
            image_url: None,
        }
    }

    fn post(id: Option<&str>, title: &str, summary: &str) -> BlogPost {
        BlogPost {
            id: id.map(String::from),
            title: Some(title.to_string()),
            summary: Some(summary.to_string()),
            date: None,
            image: None,
            content: None,
            featured: false,
        }
    }

    fn sample_data() -> (Vec<Property>, Vec<BlogPost>) {
        (
            vec![
                property("Skyline Towers", "Baner", "3 BHK Apartment"),
                property("Orchid Residency", "Kharadi", "Villa"),
            ],
            vec![
                post(Some("rates-2026"), "Home Loan Rates in 2026", "Where rates are heading"),
                post(None, "Baner Infrastructure Update", "Metro line progress"),
            ],
        )
    }

    #[test]
    fn test_short_query_returns_nothing() {
        let (props, posts) = sample_data();
        assert!(search_listings("", &props, &posts).is_empty());
        assert!(search_listings("b", &props, &posts).is_empty());
        assert!(search_listings(" b ", &props, &posts).is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let (props, posts) = sample_data();
        let hits = search_listings("SKYLINE", &props, &posts);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Skyline Towers");
        assert_eq!(hits[0].kind, HitKind::Property);
    }

    #[test]
    fn test_search_spans_both_datasets() {
        let (props, posts) = sample_data();
        // "baner" appears in a property's locality and a post's title
        let hits = search_listings("baner", &props, &posts);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].kind, HitKind::Property);
        assert_eq!(hits[1].kind, HitKind::Insight);
        assert_eq!(hits[1].subtitle, "Market Trend");
    }

    #[test]
    fn test_search_matches_type_and_summary_fields() {
        let (props, posts) = sample_data();
        let hits = search_listings("villa", &props, &posts);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Orchid Residency");

        let hits = search_listings("metro", &props, &posts);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Baner Infrastructure Update");
    }

    #[test]
    fn test_hit_targets_use_stable_id_when_present() {
        let (props, posts) = sample_data();
        let hits = search_listings("rates", &props, &posts);
        assert_eq!(
            hits[0].target,
            NavTarget::BlogPost(ListingRef::Id("rates-2026".to_string()))
        );

        let hits = search_listings("infrastructure", &props, &posts);
        assert_eq!(hits[0].target, NavTarget::BlogPost(ListingRef::Index(1)));
    }

    #[test]
    fn test_no_match_returns_empty() {
        let (props, posts) = sample_data();
        assert!(search_listings("zzzz", &props, &posts).is_empty());
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(HitKind::Property.label(), "PROPERTY");
        assert_eq!(HitKind::Insight.label(), "INSIGHT");
    }
}
