#[cfg(not(feature = "mock"))]
use gloo_net::http::Request;
#[cfg(not(feature = "mock"))]
use postview_shared::{endpoint, parse_post_body};
use postview_shared::{BlogPost, FetchError};

#[cfg(feature = "mock")]
use crate::models;

// Backend origin, injected at build time; defaults to the local dev server.
#[cfg(not(feature = "mock"))]
pub const API_ORIGIN: &str = match option_env!("POSTVIEW_API_ORIGIN") {
    Some(origin) => origin,
    None => endpoint::DEFAULT_API_ORIGIN,
};

/// Fetch one blog post by slug.
pub async fn fetch_blog_post(slug: &str) -> Result<BlogPost, FetchError> {
    #[cfg(feature = "mock")]
    {
        return models::get_mock_post(slug).ok_or(FetchError::Status {
            status: 404,
        });
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = endpoint::post_url(API_ORIGIN, slug);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Network(format!("{:?}", e)))?;

        if let Some(err) = FetchError::from_status(response.status()) {
            return Err(err);
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(format!("{:?}", e)))?;

        parse_post_body(&body)
    }
}
