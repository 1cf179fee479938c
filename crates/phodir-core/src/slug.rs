/// Generate a URL-safe slug from a display name.
///
/// ASCII letters are lower-cased, every run of characters outside `[a-z0-9]`
/// collapses to a single `-`, and no leading or trailing `-` is kept. Any
/// input, including the empty string, yields a (possibly empty) slug.
#[must_use]
pub fn generate_slug(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_separator = false;

    for c in name.chars().map(|c| c.to_ascii_lowercase()) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(c);
        } else {
            pending_separator = true;
        }
    }

    slug
}
