//! URL helpers for images shown on the detail page.

/// Absolute URLs pass through; anything else is a path under `origin`.
pub fn resolve_image(image: Option<&str>, origin: &str) -> Option<String> {
    let image = image.filter(|i| !i.is_empty())?;
    if image.starts_with("http") {
        Some(image.to_string())
    } else {
        Some(format!("{origin}{image}"))
    }
}

/// Generated avatar for a comment author. The name is interpolated as-is.
pub fn avatar_url(service: &str, author: &str) -> String {
    format!("{service}?name={author}")
}
