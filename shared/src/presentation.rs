//! Shaping a [`BlogPost`] into the pieces the view renders.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::BlogPost;

/// Shown when `createdAt` cannot be parsed, matching what a browser prints.
pub const INVALID_DATE: &str = "Invalid Date";

/// Split post content into paragraphs, one per `'\n'`-separated line.
///
/// Blank lines are kept as empty paragraphs.
pub fn paragraphs(content: &str) -> Vec<&str> {
    content.split('\n').collect()
}

// Timestamp shapes with an explicit numeric offset.
const OFFSET_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M%z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M%z",
];

// Zone-less shapes, also tried after stripping a trailing `Z`.
const NAIVE_FORMATS: [&str; 4] =
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d %H:%M"];

/// Parse a post timestamp on the host. Zone-less values are taken as UTC.
///
/// The browser parses with `Date` instead; this covers the ISO shapes it
/// accepts: RFC 3339, minute precision, `+hhmm` offsets and a space in
/// place of `T`.
pub fn parse_created_at(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Some(parsed) =
        OFFSET_FORMATS.iter().find_map(|fmt| DateTime::parse_from_str(raw, fmt).ok())
    {
        return Some(parsed.with_timezone(&Utc));
    }

    let naive = raw.strip_suffix(['Z', 'z']).unwrap_or(raw);
    if let Some(parsed) =
        NAIVE_FORMATS.iter().find_map(|fmt| NaiveDateTime::parse_from_str(naive, fmt).ok())
    {
        return Some(parsed.and_utc());
    }
    NaiveDate::parse_from_str(naive, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// `M/D/YYYY` rendering in UTC, used when no locale formatter is available.
pub fn fallback_date(raw: &str) -> String {
    match parse_created_at(raw) {
        Some(date) => date.format("%-m/%-d/%Y").to_string(),
        None => INVALID_DATE.to_string(),
    }
}

/// First non-empty paragraph with whitespace collapsed, cut to `max_chars`.
pub fn excerpt(content: &str, max_chars: usize) -> String {
    let first = paragraphs(content)
        .into_iter()
        .map(|p| p.split_whitespace().collect::<Vec<_>>().join(" "))
        .find(|p| !p.is_empty())
        .unwrap_or_default();

    if first.chars().count() <= max_chars {
        return first;
    }
    let mut out: String = first.chars().take(max_chars).collect();
    out.push_str("...");
    out
}

/// Render-ready projection of a post.
#[derive(Debug, Clone, PartialEq)]
pub struct PostView {
    /// `<h1>` text.
    pub title: String,
    /// Formatted creation date.
    pub date: String,
    /// Category, verbatim.
    pub category: String,
    /// `By {author}`.
    pub byline: String,
    /// Cover image source.
    pub image_src: String,
    /// Cover image alt text, the title.
    pub image_alt: String,
    /// One entry per rendered `<p>`.
    pub paragraphs: Vec<String>,
    /// One entry per rendered tag.
    pub tags: Vec<String>,
}

impl PostView {
    /// Build the view with an already formatted date.
    pub fn with_date(post: &BlogPost, date: String) -> Self {
        PostView {
            title: post.title.clone(),
            date,
            category: post.category.clone(),
            byline: format!("By {}", post.author),
            image_src: post.image.url.clone(),
            image_alt: post.title.clone(),
            paragraphs: paragraphs(&post.content).into_iter().map(str::to_string).collect(),
            tags: post.tags.clone(),
        }
    }

    /// The `{date} • {category}` line above the title.
    pub fn meta_line(&self) -> String {
        format!("{} • {}", self.date, self.category)
    }
}

impl From<&BlogPost> for PostView {
    fn from(post: &BlogPost) -> Self {
        PostView::with_date(post, fallback_date(&post.created_at))
    }
}
