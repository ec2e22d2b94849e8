//! View state for one slug and the guard that keeps stale responses out.

use crate::{BlogPost, FetchError};

/// What the post view is currently showing.
///
/// `Loaded` and `Errored` are terminal for a slug; switching to another slug
/// starts over at `Loading`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PostState {
    /// A fetch is in flight.
    #[default]
    Loading,
    /// The post was fetched and parsed.
    Loaded(BlogPost),
    /// The fetch failed; holds the user-facing message.
    Errored(String),
}

impl PostState {
    /// Settle a finished fetch into its terminal state.
    ///
    /// Failure detail goes to the log; the state only keeps the generic
    /// message.
    pub fn settle(result: Result<BlogPost, FetchError>) -> Self {
        match result {
            Ok(post) => {
                tracing::debug!(title = %post.title, "blog post loaded");
                PostState::Loaded(post)
            },
            Err(err) => {
                tracing::warn!(error = %err, "blog post fetch failed");
                PostState::Errored(err.user_message().to_string())
            },
        }
    }

    /// Whether a fetch is still pending.
    pub fn is_loading(&self) -> bool {
        matches!(self, PostState::Loading)
    }

    /// The loaded post, if any.
    pub fn post(&self) -> Option<&BlogPost> {
        match self {
            PostState::Loaded(post) => Some(post),
            _ => None,
        }
    }

    /// The user-facing error message, if the fetch failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            PostState::Errored(message) => Some(message),
            _ => None,
        }
    }
}

/// A settled [`PostState`] together with the slug it was fetched for.
///
/// Reading it through [`SlugState::view_for`] keeps a previous slug's post
/// off screen while the next slug is still loading.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SlugState {
    slug: Option<String>,
    state: PostState,
}

impl SlugState {
    /// Record `state` as the outcome for `slug`.
    pub fn new(slug: &str, state: PostState) -> Self {
        SlugState {
            slug: Some(slug.to_string()),
            state,
        }
    }

    /// State to render for `slug`: the stored outcome if it belongs to that
    /// slug, `Loading` otherwise.
    pub fn view_for(&self, slug: &str) -> PostState {
        match self.slug.as_deref() {
            Some(committed) if committed == slug => self.state.clone(),
            _ => PostState::Loading,
        }
    }
}

/// Issued when a fetch starts; only the current ticket may commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTicket {
    generation: u64,
    slug: String,
}

impl RequestTicket {
    /// Slug the ticket was issued for.
    pub fn slug(&self) -> &str {
        &self.slug
    }
}

/// Tracks which fetch is allowed to write the view state.
///
/// Every [`RequestTracker::begin`] supersedes all earlier tickets, so a slow
/// response for an old slug can never overwrite the state of a newer one.
#[derive(Debug, Default)]
pub struct RequestTracker {
    generation: u64,
    current: Option<String>,
}

impl RequestTracker {
    /// Create a tracker with no request in flight.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fetch for `slug`, superseding any earlier ticket.
    pub fn begin(&mut self, slug: &str) -> RequestTicket {
        self.generation = self.generation.wrapping_add(1);
        self.current = Some(slug.to_string());
        tracing::debug!(slug, generation = self.generation, "blog post fetch started");
        RequestTicket {
            generation: self.generation,
            slug: slug.to_string(),
        }
    }

    /// Whether `ticket` still belongs to the latest request.
    pub fn is_current(&self, ticket: &RequestTicket) -> bool {
        ticket.generation == self.generation && self.current.as_deref() == Some(ticket.slug())
    }

    /// Drop every outstanding ticket, e.g. when the view unmounts.
    pub fn invalidate(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.current = None;
    }

    /// Turn a finished fetch into the next state, or `None` if the ticket was
    /// superseded and the result must be discarded.
    pub fn complete(
        &self,
        ticket: &RequestTicket,
        result: Result<BlogPost, FetchError>,
    ) -> Option<SlugState> {
        if !self.is_current(ticket) {
            tracing::debug!(slug = ticket.slug(), "discarding stale blog post response");
            return None;
        }
        Some(SlugState::new(ticket.slug(), PostState::settle(result)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PostImage, FETCH_FAILED_MESSAGE};

    fn post(title: &str) -> BlogPost {
        BlogPost {
            title: title.to_string(),
            content: "Body".to_string(),
            image: PostImage {
                url: "https://cdn.example.com/a.jpg".to_string(),
            },
            author: "Jane Doe".to_string(),
            category: "Engineering".to_string(),
            tags: vec![],
            created_at: "2024-01-15T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn starts_loading() {
        let state = PostState::default();
        assert!(state.is_loading());
        assert!(state.post().is_none());
        assert!(state.error().is_none());
    }

    #[test]
    fn success_settles_to_loaded() {
        let state = PostState::settle(Ok(post("Hello")));
        assert!(!state.is_loading());
        assert_eq!(state.post().map(|p| p.title.as_str()), Some("Hello"));
        assert!(state.error().is_none());
    }

    #[test]
    fn failure_settles_to_generic_message() {
        let state = PostState::settle(Err(FetchError::Status {
            status: 404,
        }));
        assert_eq!(state, PostState::Errored(FETCH_FAILED_MESSAGE.to_string()));
        assert_eq!(state.error(), Some("Failed to fetch blog post"));
        assert!(state.post().is_none());
    }

    #[test]
    fn current_ticket_commits() {
        let mut tracker = RequestTracker::new();
        let ticket = tracker.begin("hello-world");
        assert!(tracker.is_current(&ticket));
        let next = tracker.complete(&ticket, Ok(post("Hello")));
        assert_eq!(next, Some(SlugState::new("hello-world", PostState::Loaded(post("Hello")))));
    }

    #[test]
    fn newer_slug_wins_over_late_older_response() {
        let mut tracker = RequestTracker::new();
        let first = tracker.begin("first");
        let second = tracker.begin("second");

        // Second completes first, then the stale first response arrives.
        let committed = tracker.complete(&second, Ok(post("Second")));
        assert_eq!(committed, Some(SlugState::new("second", PostState::Loaded(post("Second")))));
        assert_eq!(tracker.complete(&first, Ok(post("First"))), None);
    }

    #[test]
    fn refetching_same_slug_supersedes_earlier_ticket() {
        let mut tracker = RequestTracker::new();
        let old = tracker.begin("same");
        let new = tracker.begin("same");
        assert!(!tracker.is_current(&old));
        assert!(tracker.is_current(&new));
    }

    #[test]
    fn nothing_committed_reads_as_loading() {
        assert_eq!(SlugState::default().view_for("hello-world"), PostState::Loading);
    }

    #[test]
    fn previous_slug_outcome_reads_as_loading_for_new_slug() {
        let loaded = SlugState::new("first", PostState::Loaded(post("First")));
        assert_eq!(loaded.view_for("first"), PostState::Loaded(post("First")));
        assert_eq!(loaded.view_for("second"), PostState::Loading);

        let errored = SlugState::new("first", PostState::settle(Err(FetchError::Status {
            status: 500,
        })));
        assert_eq!(errored.view_for("second"), PostState::Loading);
        assert_eq!(errored.view_for("first").error(), Some(FETCH_FAILED_MESSAGE));
    }

    #[test]
    fn invalidate_drops_outstanding_ticket() {
        let mut tracker = RequestTracker::new();
        let ticket = tracker.begin("hello-world");
        tracker.invalidate();
        assert!(!tracker.is_current(&ticket));
        assert_eq!(
            tracker.complete(&ticket, Err(FetchError::Network("aborted".to_string()))),
            None
        );
    }
}
