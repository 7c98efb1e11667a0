//! Typed fragment descriptors for listing views
//!
//! Each builder maps listing records to plain-data descriptors in received
//! order, applying the site's display fallbacks for incomplete sheet rows.
//! An empty input produces an empty descriptor list; the UI layer renders
//! the dataset's "no results" placeholder in that case.

use crate::data::{BlogPost, ListingRef, Property};
use crate::render::image::{optimize_drive_image, CARD_IMAGE_WIDTH, DETAIL_IMAGE_WIDTH};

/// Number of featured insights surfaced on the front page
const FEATURED_LIMIT: usize = 5;

/// Where activating a card navigates to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavTarget {
    /// Property detail view
    Property(ListingRef),
    /// Blog post detail view
    BlogPost(ListingRef),
}

/// A single listing card, ready to materialize
#[derive(Debug, Clone, PartialEq)]
pub struct ListingCard {
    /// Normalized image URL
    pub image: String,
    /// Listing headline
    pub title: String,
    /// Lead line: locality for properties, publication date for posts
    pub heading: String,
    /// Category label: property type, or "Market Insight" for posts
    pub label: String,
    /// Teaser paragraph; blog posts only
    pub summary: Option<String>,
    /// Whether the source post is flagged featured; always false for properties
    pub featured: bool,
    /// Detail view this card navigates to
    pub target: NavTarget,
}

/// Property detail view content
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyDetail {
    pub title: String,
    pub location: String,
    pub price: String,
    pub property_type: String,
    pub possession: String,
    /// Normalized image URL at detail resolution
    pub image: String,
    /// Generated overview paragraph
    pub description: String,
}

/// Blog post detail view content
#[derive(Debug, Clone, PartialEq)]
pub struct BlogDetail {
    pub title: String,
    pub date: String,
    /// Normalized image URL at detail resolution
    pub image: String,
    /// Article body, falling back to the card teaser when the list payload
    /// is all we have
    pub body: String,
}

/// Builds cards for the property list, in received order
pub fn property_cards(properties: &[Property]) -> Vec<ListingCard> {
    properties
        .iter()
        .enumerate()
        .map(|(idx, p)| ListingCard {
            image: optimize_drive_image(p.image_url.as_deref(), CARD_IMAGE_WIDTH),
            title: p.title.clone().unwrap_or_else(|| "Luxury Property".to_string()),
            heading: p.location.clone().unwrap_or_else(|| "Pune".to_string()),
            label: p
                .property_type
                .clone()
                .unwrap_or_else(|| "Premium Residence".to_string()),
            summary: None,
            featured: false,
            target: NavTarget::Property(ListingRef::Index(idx)),
        })
        .collect()
}

/// Builds cards for the full blog list, in received order
pub fn blog_cards(posts: &[BlogPost]) -> Vec<ListingCard> {
    posts
        .iter()
        .enumerate()
        .map(|(idx, post)| blog_card(post, idx))
        .collect()
}

/// Builds cards for the featured-insight rail
///
/// Featured posts only, newest first, capped at five. Navigation targets are
/// resolved against the post's position in the full dataset, not its position
/// after filtering, so index fallbacks stay valid.
pub fn featured_blog_cards(posts: &[BlogPost]) -> Vec<ListingCard> {
    let mut featured: Vec<(usize, &BlogPost)> = posts
        .iter()
        .enumerate()
        .filter(|(_, post)| post.featured)
        .collect();

    featured.sort_by(|(_, a), (_, b)| b.parsed_date().cmp(&a.parsed_date()));

    featured
        .into_iter()
        .take(FEATURED_LIMIT)
        .map(|(idx, post)| blog_card(post, idx))
        .collect()
}

/// Builds one blog card, preferring the post's stable id for navigation
fn blog_card(post: &BlogPost, index: usize) -> ListingCard {
    let listing_ref = match &post.id {
        Some(id) => ListingRef::Id(id.clone()),
        None => ListingRef::Index(index),
    };

    ListingCard {
        image: optimize_drive_image(post.image.as_deref(), CARD_IMAGE_WIDTH),
        title: post.title.clone().unwrap_or_else(|| "Market Insight".to_string()),
        heading: post.display_date(),
        label: "Market Insight".to_string(),
        summary: Some(
            post.summary
                .clone()
                .unwrap_or_else(|| "Read the latest trends.".to_string()),
        ),
        featured: post.featured,
        target: NavTarget::BlogPost(listing_ref),
    }
}

/// Builds the property detail view content
pub fn property_detail(property: &Property) -> PropertyDetail {
    let title = property
        .title
        .clone()
        .unwrap_or_else(|| "Luxury Residence".to_string());
    let location = property.location.clone().unwrap_or_else(|| "Pune".to_string());
    let price = property
        .price
        .clone()
        .unwrap_or_else(|| "Price on Request".to_string());
    let property_type = property
        .property_type
        .clone()
        .unwrap_or_else(|| "Premium Property".to_string());
    let possession = property
        .possession
        .clone()
        .unwrap_or_else(|| "Ready to Move".to_string());

    let description = format!(
        "Discover this exclusive {} located in the prime area of {}. \
         This premium property is listed at {} with a possession status of {}. \
         Verified by PeakSquare Estates.",
        property_type, location, price, possession
    );

    PropertyDetail {
        image: optimize_drive_image(property.image_url.as_deref(), DETAIL_IMAGE_WIDTH),
        title,
        location,
        price,
        property_type,
        possession,
        description,
    }
}

/// Builds the blog detail view content
pub fn blog_detail(post: &BlogPost) -> BlogDetail {
    BlogDetail {
        title: post.title.clone().unwrap_or_else(|| "Market Insight".to_string()),
        date: post.display_date(),
        image: optimize_drive_image(post.image.as_deref(), DETAIL_IMAGE_WIDTH),
        body: post
            .content
            .clone()
            .or_else(|| post.summary.clone())
            .unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn property(title: &str, image: Option<&str>) -> Property {
        Property {
            title: Some(title.to_string()),
            location: Some("Baner".to_string()),
            property_type: Some("3 BHK Apartment".to_string()),
            price: Some("₹1.2 Cr".to_string()),
            possession: Some("Dec 2026".to_string()),
            image_url: image.map(String::from),
        }
    }

    fn post(id: Option<&str>, title: &str, date: Option<&str>, featured: bool) -> BlogPost {
        BlogPost {
            id: id.map(String::from),
            title: Some(title.to_string()),
            summary: Some(format!("{} teaser", title)),
            date: date.map(String::from),
            image: None,
            content: None,
            featured,
        }
    }

    #[test]
    fn test_empty_datasets_produce_no_cards() {
        assert!(property_cards(&[]).is_empty());
        assert!(blog_cards(&[]).is_empty());
        assert!(featured_blog_cards(&[]).is_empty());
    }

    #[test]
    fn test_property_card_carries_title_and_rewritten_image() {
        let cards = property_cards(&[property(
            "X",
            Some("https://drive.google.com/open?id=ABC123"),
        )]);

        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].title, "X");
        assert_eq!(
            cards[0].image,
            format!(
                "https://lh3.googleusercontent.com/u/0/d/ABC123=s{}",
                CARD_IMAGE_WIDTH
            )
        );
        assert_eq!(cards[0].target, NavTarget::Property(ListingRef::Index(0)));
    }

    #[test]
    fn test_property_cards_keep_received_order() {
        let cards = property_cards(&[property("First", None), property("Second", None)]);
        assert_eq!(cards[0].title, "First");
        assert_eq!(cards[1].title, "Second");
        assert_eq!(cards[1].target, NavTarget::Property(ListingRef::Index(1)));
    }

    #[test]
    fn test_property_card_fallbacks_for_bare_row() {
        let bare = Property {
            title: None,
            location: None,
            property_type: None,
            price: None,
            possession: None,
            image_url: None,
        };
        let cards = property_cards(&[bare]);
        assert_eq!(cards[0].title, "Luxury Property");
        assert_eq!(cards[0].heading, "Pune");
        assert_eq!(cards[0].label, "Premium Residence");
        assert_eq!(cards[0].image, crate::render::image::PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_blog_card_prefers_stable_id() {
        let cards = blog_cards(&[
            post(Some("alpha"), "With Id", None, false),
            post(None, "Without Id", None, false),
        ]);

        assert_eq!(
            cards[0].target,
            NavTarget::BlogPost(ListingRef::Id("alpha".to_string()))
        );
        assert_eq!(cards[1].target, NavTarget::BlogPost(ListingRef::Index(1)));
    }

    #[test]
    fn test_blog_cards_carry_featured_flag() {
        let cards = blog_cards(&[
            post(Some("a"), "Starred", None, true),
            post(Some("b"), "Plain", None, false),
        ]);

        assert!(cards[0].featured);
        assert!(!cards[1].featured);
    }

    #[test]
    fn test_featured_cards_filter_sort_and_cap() {
        let posts = vec![
            post(Some("a"), "Old", Some("2025-01-01"), true),
            post(Some("b"), "Skipped", Some("2026-01-01"), false),
            post(Some("c"), "New", Some("2026-06-01"), true),
            post(Some("d"), "Mid", Some("2025-06-01"), true),
            post(Some("e"), "Newer", Some("2026-07-01"), true),
            post(Some("f"), "Newest", Some("2026-08-01"), true),
            post(Some("g"), "Oldest", Some("2024-01-01"), true),
        ];

        let cards = featured_blog_cards(&posts);

        assert_eq!(cards.len(), 5, "Featured rail caps at five");
        let titles: Vec<_> = cards.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["Newest", "Newer", "New", "Mid", "Old"]);
        assert!(
            !titles.contains(&"Skipped"),
            "Non-featured posts are excluded"
        );
    }

    #[test]
    fn test_featured_index_fallback_uses_dataset_position() {
        let posts = vec![
            post(Some("a"), "Not Featured", None, false),
            post(None, "Featured No Id", None, true),
        ];

        let cards = featured_blog_cards(&posts);

        assert_eq!(cards.len(), 1);
        // Index 1 in the full dataset, not index 0 of the filtered set
        assert_eq!(cards[0].target, NavTarget::BlogPost(ListingRef::Index(1)));
    }

    #[test]
    fn test_property_detail_fallbacks_and_description() {
        let bare = Property {
            title: None,
            location: None,
            property_type: None,
            price: None,
            possession: None,
            image_url: None,
        };
        let detail = property_detail(&bare);

        assert_eq!(detail.title, "Luxury Residence");
        assert_eq!(detail.price, "Price on Request");
        assert_eq!(detail.possession, "Ready to Move");
        assert!(detail.description.contains("Premium Property"));
        assert!(detail.description.contains("Price on Request"));
    }

    #[test]
    fn test_blog_detail_prefers_content_over_summary() {
        let mut p = post(Some("a"), "Article", Some("2026-03-14"), false);
        p.content = Some("Full body".to_string());
        let detail = blog_detail(&p);
        assert_eq!(detail.body, "Full body");
        assert_eq!(detail.date, "March 14, 2026");

        p.content = None;
        let detail = blog_detail(&p);
        assert_eq!(detail.body, "Article teaser");
    }
}
