//! Error types for retry operations.

use std::fmt;

/// Error returned when all retry attempts are exhausted.
///
/// Carries a descriptive message and an optional contextual reference (a
/// URL, resource name, or similar). The retry combinators never populate the
/// reference; it exists for callers that reuse the error shape for their own
/// reporting, e.g. when retrying fetches of a known endpoint.
///
/// # Examples
///
/// ```rust
/// use robustify::{attempt, MaxTriesReached, Outcome};
///
/// let outcome = attempt(|| 5).retry_if(|n| *n >= 0, || {}, 2);
///
/// match outcome {
///     Outcome::Err(exhausted) => {
///         assert_eq!(exhausted.message(), "Max tries (2) reached for retryif()");
///     }
///     Outcome::Ok(_) => panic!("expected exhaustion"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaxTriesReached {
    message: String,
    url: Option<String>,
}

impl MaxTriesReached {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            url: None,
        }
    }

    /// Attach a contextual reference to the error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use robustify::MaxTriesReached;
    ///
    /// let err = MaxTriesReached::new("gave up").with_url("https://example.com/feed");
    /// assert_eq!(format!("{}", err), "gave up || https://example.com/feed ||");
    /// ```
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// The descriptive message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The contextual reference, if one was attached.
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }
}

impl fmt::Display for MaxTriesReached {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.url {
            Some(url) => write!(f, "{} || {} ||", self.message, url),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for MaxTriesReached {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_without_url_is_just_the_message() {
        let err = MaxTriesReached::new("Max tries (3) reached for retryif()");
        assert_eq!(format!("{}", err), "Max tries (3) reached for retryif()");
        assert_eq!(err.url(), None);
    }

    #[test]
    fn display_with_url_appends_reference() {
        let err = MaxTriesReached::new("gave up").with_url("https://example.com");
        assert_eq!(format!("{}", err), "gave up || https://example.com ||");
        assert_eq!(err.url(), Some("https://example.com"));
    }

    #[test]
    fn usable_as_boxed_error() {
        let err: Box<dyn std::error::Error> = Box::new(MaxTriesReached::new("oops"));
        assert_eq!(err.to_string(), "oops");
    }
}
