// Mock posts served by the `mock` feature instead of the backend.
#[cfg(feature = "mock")]
use postview_shared::{BlogPost, PostImage};

/// Look up a mock post by slug.
#[cfg(feature = "mock")]
pub fn get_mock_post(slug: &str) -> Option<BlogPost> {
    mock_posts()
        .into_iter()
        .find(|(candidate, _)| *candidate == slug)
        .map(|(_, post)| post)
}

#[cfg(feature = "mock")]
fn mock_posts() -> Vec<(&'static str, BlogPost)> {
    vec![
        (
            "hello-world",
            BlogPost {
                title: "Hello World".to_string(),
                content: "Welcome to the blog.\nEvery line of a post becomes its own \
                          paragraph.\nTags are listed at the bottom."
                    .to_string(),
                image: PostImage {
                    url: crate::config::asset_path("static/hero-1.jpg"),
                },
                author: "Alice".to_string(),
                category: "Announcements".to_string(),
                tags: vec!["welcome".to_string(), "meta".to_string()],
                created_at: "2024-01-15T00:00:00Z".to_string(),
            },
        ),
        (
            "rust-in-the-browser",
            BlogPost {
                title: "Rust in the Browser".to_string(),
                content: "Yew compiles to WebAssembly.\n\ngloo-net wraps fetch for async \
                          Rust."
                    .to_string(),
                image: PostImage {
                    url: crate::config::asset_path("static/hero-2.jpg"),
                },
                author: "Bob".to_string(),
                category: "Engineering".to_string(),
                tags: vec!["rust".to_string(), "wasm".to_string(), "yew".to_string()],
                created_at: "2024-03-02T10:30:00.000Z".to_string(),
            },
        ),
        (
            "untagged",
            BlogPost {
                title: "A Post Without Tags".to_string(),
                content: "Nothing to tag here.".to_string(),
                image: PostImage {
                    url: crate::config::asset_path("static/hero-3.jpg"),
                },
                author: "Carol".to_string(),
                category: "Notes".to_string(),
                tags: vec![],
                created_at: "2024-05-20T08:00:00Z".to_string(),
            },
        ),
    ]
}
