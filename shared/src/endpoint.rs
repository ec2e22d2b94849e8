//! Backend URL construction.

/// Origin used when none is injected at build time.
pub const DEFAULT_API_ORIGIN: &str = "http://localhost:5000";

/// URL of the single-post endpoint for `slug`.
///
/// The slug is percent-encoded as one path segment so a stray `/` or `?`
/// cannot change the route.
pub fn post_url(origin: &str, slug: &str) -> String {
    format!("{}/api/blogs/{}", origin.trim_end_matches('/'), urlencoding::encode(slug))
}
