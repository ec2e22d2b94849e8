//! Failure taxonomy for a post fetch.

/// The only failure text the view ever shows.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch blog post";

/// Why a post fetch failed.
///
/// The `Display` text carries the detail for logs; users only ever see
/// [`FetchError::user_message`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The backend answered with a non-success status.
    #[error("{}", status_detail(.status))]
    Status {
        /// HTTP status code of the response.
        status: u16,
    },
    /// The request never produced a response.
    #[error("Network error: {0}")]
    Network(String),
    /// The body was not a valid post.
    #[error("Parse error: {0}")]
    Parse(String),
}

fn status_detail(status: &u16) -> String {
    if *status == 404 {
        "Blog post not found (HTTP 404)".to_string()
    } else {
        format!("HTTP error: {}", status)
    }
}

impl FetchError {
    /// Map a response status to an error, `None` for the 2xx range.
    pub fn from_status(status: u16) -> Option<Self> {
        if (200..300).contains(&status) {
            None
        } else {
            Some(FetchError::Status {
                status,
            })
        }
    }

    /// Generic text rendered in the error view, whatever the cause.
    pub fn user_message(&self) -> &'static str {
        FETCH_FAILED_MESSAGE
    }

    /// Whether the backend reported that the slug does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::Status { status: 404 })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_range_is_not_an_error() {
        assert_eq!(FetchError::from_status(200), None);
        assert_eq!(FetchError::from_status(204), None);
        assert_eq!(FetchError::from_status(299), None);
    }

    #[test]
    fn other_statuses_are_errors() {
        for status in [199, 301, 404, 500, 503] {
            assert_eq!(
                FetchError::from_status(status),
                Some(FetchError::Status {
                    status
                })
            );
        }
    }

    #[test]
    fn detail_is_kept_for_logs() {
        let not_found = FetchError::from_status(404).unwrap();
        assert!(not_found.is_not_found());
        assert_eq!(not_found.to_string(), "Blog post not found (HTTP 404)");

        let server = FetchError::from_status(500).unwrap();
        assert!(!server.is_not_found());
        assert_eq!(server.to_string(), "HTTP error: 500");

        let network = FetchError::Network("connection refused".to_string());
        assert_eq!(network.to_string(), "Network error: connection refused");
    }

    #[test]
    fn every_variant_shows_the_same_message() {
        let errors = [
            FetchError::Status {
                status: 404,
            },
            FetchError::Status {
                status: 500,
            },
            FetchError::Network("offline".to_string()),
            FetchError::Parse("expected value at line 1".to_string()),
        ];
        for err in errors {
            assert_eq!(err.user_message(), "Failed to fetch blog post");
        }
    }
}
