//! CircleCI API error types.

use std::fmt;

/// Broad classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Unsupported HTTP verb.
    BadVerb,
    /// Unsupported checkout key type.
    BadKey,
    /// Unsupported build status filter.
    InvalidFilter,
    /// The request reached (or failed to reach) the remote service.
    Transport,
}

/// CircleCI API errors.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// HTTP verb outside the supported set. No request was sent.
    #[error("{verb} is invalid, verb must be one of {allowed}")]
    BadVerb {
        /// The verb that was tried.
        verb: String,
        /// Human readable list of supported verbs.
        allowed: String,
    },

    /// Checkout key type outside the supported set. No request was sent.
    #[error("{argument} is invalid, key type must be one of {allowed}")]
    BadKey {
        /// The key type that was tried.
        argument: String,
        /// Human readable list of supported key types.
        allowed: String,
    },

    /// Build status filter outside the supported set. No request was sent.
    #[error("{argument} is invalid, status filter must be one of {allowed}")]
    InvalidFilter {
        /// The filter that was tried.
        argument: String,
        /// Human readable list of supported filters.
        allowed: String,
    },

    /// The remote service answered with a non-success status.
    #[error("{url} returned HTTP {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Requested URL, without credentials.
        url: String,
        /// Raw response body.
        body: String,
    },

    /// The base or artifact URL could not be parsed.
    #[error("invalid url {0}")]
    InvalidUrl(String),

    /// Network level failure.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// I/O operation failed.
    #[error(transparent)]
    IO(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn bad_verb(verb: impl Into<String>, allowed: &[impl fmt::Display]) -> Self {
        Self::BadVerb {
            verb: verb.into(),
            allowed: join(allowed),
        }
    }

    pub(crate) fn bad_key(argument: impl Into<String>, allowed: &[impl fmt::Display]) -> Self {
        Self::BadKey {
            argument: argument.into(),
            allowed: join(allowed),
        }
    }

    pub(crate) fn invalid_filter(argument: impl Into<String>, allowed: &[impl fmt::Display]) -> Self {
        Self::InvalidFilter {
            argument: argument.into(),
            allowed: format!("None, {}", join(allowed)),
        }
    }

    /// Classifies this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::BadVerb { .. } => ErrorKind::BadVerb,
            Error::BadKey { .. } => ErrorKind::BadKey,
            Error::InvalidFilter { .. } => ErrorKind::InvalidFilter,
            Error::Status { .. }
            | Error::InvalidUrl(_)
            | Error::Http(_)
            | Error::Json(_)
            | Error::IO(_) => ErrorKind::Transport,
        }
    }

    /// The offending argument of a validation error.
    pub fn argument(&self) -> Option<&str> {
        match self {
            Error::BadVerb { verb, .. } => Some(verb),
            Error::BadKey { argument, .. } | Error::InvalidFilter { argument, .. } => {
                Some(argument)
            }
            _ => None,
        }
    }

    /// HTTP status code returned by the remote service, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Status { status, .. } => Some(*status),
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// True when the remote service answered 404.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

fn join(values: &[impl fmt::Display]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verb_message_lists_every_verb() {
        let err = Error::bad_verb("BAD", &["GET", "POST", "DELETE"]);
        assert_eq!(err.kind(), ErrorKind::BadVerb);
        assert_eq!(err.argument(), Some("BAD"));
        assert_eq!(
            err.to_string(),
            "BAD is invalid, verb must be one of GET, POST, DELETE"
        );
    }

    #[test]
    fn filter_message_mentions_unset() {
        let err = Error::invalid_filter("dummy", &["running"]);
        assert_eq!(err.kind(), ErrorKind::InvalidFilter);
        assert!(err.to_string().contains("None, running"));
    }

    #[test]
    fn status_errors_are_transport() {
        let err = Error::Status {
            status: 404,
            url: "https://circleci.com/api/v1.1/me".to_string(),
            body: "Not Found".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::Transport);
        assert!(err.is_not_found());
        assert_eq!(err.argument(), None);
    }
}
