/// Configuration for the frontend application

/// Site name used in the document title and social tags.
pub const SITE_NAME: &str = "Postview";

/// Base URL the app is served from
/// - For local development: "/"
/// - For static hosting of the mock build: "/postview/"
#[cfg(not(feature = "mock"))]
pub const BASE_URL: &str = "/";

#[cfg(feature = "mock")]
pub const BASE_URL: &str = "/postview/";

/// Helper function to construct asset paths
pub fn asset_path(path: &str) -> String {
    // Remove leading slash if present
    let path = path.strip_prefix('/').unwrap_or(path);
    format!("{}{}", BASE_URL, path)
}
