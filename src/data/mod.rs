//! Core data models for the PeakSquare listing browser
//!
//! Contains the two listing variants served by the remote feed (properties
//! and blog posts), the navigation identity used to address a single listing,
//! and the feed client that loads both datasets.

pub mod feed;

pub use feed::{FeedClient, FeedError};

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A property listing from the listings sheet
///
/// Field names mirror the spreadsheet's header row, which the Apps Script
/// endpoint passes through verbatim. Every field is optional: the sheet is
/// hand-maintained and rows are routinely incomplete, so display fallbacks
/// are applied at render time rather than here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    /// Listing headline
    #[serde(rename = "Title", default)]
    pub title: Option<String>,
    /// Locality, e.g. "Baner" or "Koregaon Park"
    #[serde(rename = "Location", default)]
    pub location: Option<String>,
    /// Category label, e.g. "3 BHK Apartment"
    #[serde(rename = "Type", default)]
    pub property_type: Option<String>,
    /// Display price, kept as entered in the sheet
    #[serde(rename = "Price", default, deserialize_with = "de_lenient_string")]
    pub price: Option<String>,
    /// Possession status, e.g. "Ready to Move"
    #[serde(rename = "Possession", default)]
    pub possession: Option<String>,
    /// Raw image reference; may be a Google Drive share link
    #[serde(rename = "ImageURL", default)]
    pub image_url: Option<String>,
}

/// A blog post (market insight) from the blog sheet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    /// Stable post id when the sheet assigns one
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub id: Option<String>,
    /// Post headline
    #[serde(default)]
    pub title: Option<String>,
    /// One-paragraph teaser shown on cards
    #[serde(default)]
    pub summary: Option<String>,
    /// Publication date as entered in the sheet
    #[serde(default)]
    pub date: Option<String>,
    /// Raw image reference; may be a Google Drive share link
    #[serde(default)]
    pub image: Option<String>,
    /// Full article body; present only in single-post responses
    #[serde(default)]
    pub content: Option<String>,
    /// Featured flag; the sheet stores both booleans and "true"/"false" text
    #[serde(default, deserialize_with = "de_truthy")]
    pub featured: bool,
}

impl BlogPost {
    /// Parses the sheet's date field
    ///
    /// The sheet holds a mix of ISO timestamps (from Apps Script `Date`
    /// serialization) and plain `YYYY-MM-DD` strings.
    pub fn parsed_date(&self) -> Option<chrono::NaiveDate> {
        let raw = self.date.as_deref()?;
        if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
            return Some(dt.date_naive());
        }
        chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
    }

    /// Formats the date for display, falling back to the raw sheet value
    pub fn display_date(&self) -> String {
        match self.parsed_date() {
            Some(date) => date.format("%B %-d, %Y").to_string(),
            None => self.date.clone().unwrap_or_default(),
        }
    }
}

/// Navigation identity of a single listing
///
/// A stable id is preferred whenever the record carries one; the positional
/// index into the fetched sequence is a compatibility fallback only, since it
/// breaks if the dataset is reordered between list and detail loads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingRef {
    /// Stable identifier assigned by the data source
    Id(String),
    /// Position in the last-fetched sequence
    Index(usize),
}

impl fmt::Display for ListingRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListingRef::Id(id) => write!(f, "{}", id),
            ListingRef::Index(idx) => write!(f, "{}", idx),
        }
    }
}

/// Looks up a property by navigation identity
///
/// Properties carry no id field in the sheet, so only index addressing
/// applies; an `Id` ref that parses as a number is treated as an index for
/// compatibility with links minted by older revisions.
pub fn find_property<'a>(properties: &'a [Property], listing_ref: &ListingRef) -> Option<&'a Property> {
    let index = match listing_ref {
        ListingRef::Index(idx) => *idx,
        ListingRef::Id(id) => id.parse::<usize>().ok()?,
    };
    properties.get(index)
}

/// Looks up a blog post by navigation identity
///
/// Tries a stable-id match first, then falls back to index addressing.
pub fn find_blog_post<'a>(posts: &'a [BlogPost], listing_ref: &ListingRef) -> Option<&'a BlogPost> {
    match listing_ref {
        ListingRef::Id(id) => posts
            .iter()
            .find(|p| p.id.as_deref() == Some(id.as_str()))
            .or_else(|| id.parse::<usize>().ok().and_then(|idx| posts.get(idx))),
        ListingRef::Index(idx) => posts.get(*idx),
    }
}

/// Deserializes a field that the sheet may store as a string or a number
fn de_lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        Some(other) => Some(other.to_string()),
    })
}

/// Deserializes a flag the sheet stores as a boolean or "true"/"false" text
fn de_truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Bool(b)) => b,
        Some(serde_json::Value::String(s)) => s.eq_ignore_ascii_case("true"),
        _ => false,
    })
}
