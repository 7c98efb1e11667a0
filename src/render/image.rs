//! Image reference normalization
//!
//! The listings sheet stores whatever link the editor pasted in, which is
//! usually a Google Drive share link rather than a direct image URL. Drive
//! share links are rewritten to the `lh3.googleusercontent.com` direct form,
//! which also lets Drive resize the image server-side via the `=s{width}`
//! suffix. Anything else passes through unchanged, and a missing reference
//! becomes the placeholder asset.

/// Fallback asset shown when a listing has no usable image reference
pub const PLACEHOLDER_IMAGE: &str = "assets/logo.svg";

/// Server-side resize width used for list cards
pub const CARD_IMAGE_WIDTH: u32 = 800;

/// Server-side resize width used for detail views
pub const DETAIL_IMAGE_WIDTH: u32 = 1600;

/// Normalizes a raw image reference into a directly renderable URL
///
/// Drive share links (any `drive.google.com` URL carrying an `id=` query
/// parameter) become `https://lh3.googleusercontent.com/u/0/d/{id}=s{width}`.
/// Non-Drive URLs pass through untouched; empty or absent references yield
/// the placeholder asset.
pub fn optimize_drive_image(url: Option<&str>, width: u32) -> String {
    let url = match url {
        Some(u) if !u.trim().is_empty() => u,
        _ => return PLACEHOLDER_IMAGE.to_string(),
    };

    if url.contains("drive.google.com") {
        if let Some(id) = extract_drive_id(url) {
            return format!("https://lh3.googleusercontent.com/u/0/d/{}=s{}", id, width);
        }
    }

    url.to_string()
}

/// Extracts the file id from a Drive share link's `id=` parameter
///
/// The id runs from `id=` to the next `&` or the end of the string; an empty
/// id counts as no id.
fn extract_drive_id(url: &str) -> Option<&str> {
    let (_, rest) = url.split_once("id=")?;
    let id = rest.split('&').next().unwrap_or(rest);
    if id.is_empty() {
        None
    } else {
        Some(id)
    }
}
