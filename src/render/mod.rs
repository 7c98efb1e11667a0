//! Listing render pipeline
//!
//! Turns fetched listing records into typed fragment descriptors that the UI
//! layer materializes into widgets. Keeping the descriptors as plain data
//! (rather than building markup or widgets directly from records) makes the
//! mapping unit-testable and keeps display fallbacks in one place.

pub mod fragments;
pub mod image;

pub use fragments::{
    blog_cards, blog_detail, featured_blog_cards, property_cards, property_detail, BlogDetail,
    ListingCard, NavTarget, PropertyDetail,
};
pub use image::optimize_drive_image;
