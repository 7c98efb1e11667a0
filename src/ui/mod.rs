//! UI rendering module for the PeakSquare listing browser
//!
//! Materializes the render layer's fragment descriptors into ratatui widgets.
//! Each view fully replaces the frame content; there is no incremental
//! diffing beyond what ratatui does internally.

pub mod blog;
pub mod help_overlay;
pub mod property_detail;
pub mod property_list;
pub mod search_overlay;

pub use blog::{render_detail as render_blog_detail, render_list as render_blog_list};
pub use help_overlay::render as render_help_overlay;
pub use property_detail::render as render_property_detail;
pub use property_list::render as render_property_list;
pub use search_overlay::render as render_search_overlay;
