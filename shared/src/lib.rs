//! Host-side core of the postview blog reader: the post shape served by
//! `/api/blogs/{slug}`, the fetch error taxonomy, the view state machine and
//! the helpers that turn a post into render-ready pieces.

use serde::{Deserialize, Serialize};

pub mod endpoint;
pub mod error;
pub mod presentation;
pub mod state;

pub use error::{FetchError, FETCH_FAILED_MESSAGE};
pub use presentation::PostView;
pub use state::{PostState, RequestTicket, RequestTracker, SlugState};

/// A blog post as returned by the backend.
///
/// The backend owns the authoritative copy; the view only keeps a transient
/// one, replaced wholesale on every successful fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    /// Headline shown as the page title.
    pub title: String,
    /// Plain text body, one paragraph per line.
    pub content: String,
    /// Cover image.
    pub image: PostImage,
    /// Displayed verbatim in the byline.
    pub author: String,
    /// Displayed verbatim next to the date.
    pub category: String,
    /// Ordered tag names, possibly empty.
    pub tags: Vec<String>,
    /// ISO 8601 creation timestamp, e.g. `2024-01-15T00:00:00Z`.
    pub created_at: String,
}

/// Cover image reference nested under `image` in the JSON body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostImage {
    /// Absolute or site-relative image URL.
    pub url: String,
}

/// Parse a response body into a [`BlogPost`].
///
/// Extra fields the backend sends (`_id`, `slug`, `updatedAt`, ...) are
/// ignored; a missing required field is a [`FetchError::Parse`].
pub fn parse_post_body(body: &str) -> Result<BlogPost, FetchError> {
    serde_json::from_str(body).map_err(|e| FetchError::Parse(e.to_string()))
}
