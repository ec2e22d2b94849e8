use postview_shared::{presentation, BlogPost};
use serde_json::json;
use web_sys::{window, Document, Element};

use crate::config;

const DESCRIPTION_MAX_CHARS: usize = 160;
const JSON_LD_ID: &str = "blog-post";

/// How a `<meta>` tag is addressed in the head.
#[derive(Clone, Copy)]
enum MetaKey<'a> {
    Name(&'a str),
    Property(&'a str),
}

impl<'a> MetaKey<'a> {
    fn parts(self) -> (&'static str, &'a str) {
        match self {
            MetaKey::Name(value) => ("name", value),
            MetaKey::Property(value) => ("property", value),
        }
    }
}

fn document() -> Option<Document> {
    window()?.document()
}

/// Find the head element matching `selector`, appending a fresh `tag` when
/// there is none yet.
fn head_element(doc: &Document, selector: &str, tag: &str) -> Option<Element> {
    if let Some(found) = doc.query_selector(selector).ok().flatten() {
        return Some(found);
    }
    let created = doc.create_element(tag).ok()?;
    doc.head()?.append_child(&created).ok()?;
    Some(created)
}

fn set_meta(doc: &Document, key: MetaKey<'_>, content: &str) {
    let (attr, value) = key.parts();
    let selector = format!("meta[{}=\"{}\"]", attr, value);
    if let Some(meta) = head_element(doc, &selector, "meta") {
        let _ = meta.set_attribute(attr, value);
        let _ = meta.set_attribute("content", content);
    }
}

fn json_ld_selector() -> String {
    format!("script[type=\"application/ld+json\"][data-jsonld-id=\"{}\"]", JSON_LD_ID)
}

fn set_json_ld(doc: &Document, payload: &serde_json::Value) {
    let Some(script) = head_element(doc, &json_ld_selector(), "script") else {
        return;
    };
    let _ = script.set_attribute("type", "application/ld+json");
    let _ = script.set_attribute("data-jsonld-id", JSON_LD_ID);
    let serialized = serde_json::to_string(payload).unwrap_or_else(|_| "{}".to_string());
    script.set_text_content(Some(&serialized));
}

/// Reset head metadata while a post is loading or failed.
pub fn apply_fallback_seo() {
    let Some(doc) = document() else {
        return;
    };
    doc.set_title(config::SITE_NAME);
    set_meta(&doc, MetaKey::Property("og:title"), config::SITE_NAME);
    set_meta(&doc, MetaKey::Property("og:type"), "website");
    set_meta(&doc, MetaKey::Property("og:image"), &config::asset_path("static/og-default.png"));
    if let Some(script) = doc.query_selector(&json_ld_selector()).ok().flatten() {
        script.remove();
    }
}

/// Describe a loaded post in the document head.
pub fn apply_post_seo(post: &BlogPost) {
    let Some(doc) = document() else {
        return;
    };
    let description = presentation::excerpt(&post.content, DESCRIPTION_MAX_CHARS);

    doc.set_title(&format!("{} | {}", post.title, config::SITE_NAME));
    set_meta(&doc, MetaKey::Name("description"), &description);
    set_meta(&doc, MetaKey::Property("og:title"), &post.title);
    set_meta(&doc, MetaKey::Property("og:description"), &description);
    set_meta(&doc, MetaKey::Property("og:type"), "article");
    set_meta(&doc, MetaKey::Property("og:image"), &post.image.url);

    set_json_ld(
        &doc,
        &json!({
            "@context": "https://schema.org",
            "@type": "BlogPosting",
            "headline": post.title,
            "description": description,
            "image": post.image.url,
            "author": { "@type": "Person", "name": post.author },
            "articleSection": post.category,
            "keywords": post.tags.join(", "),
            "datePublished": post.created_at,
        }),
    );
}
