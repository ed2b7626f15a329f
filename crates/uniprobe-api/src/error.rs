use thiserror::Error;

/// Top-level error type for the `uniprobe-api` crate.
///
/// Covers the failure modes of the probe's HTTP surface: login, transport,
/// and envelope parsing. `uniprobe-core` maps these into the check-level
/// error taxonomy.
#[derive(Debug, Error)]
pub enum Error {
    /// Login rejected or session cookie no longer accepted.
    #[error("authentication failed: {message}")]
    Authentication { message: String },

    /// HTTP transport error (connection refused, DNS failure, timeout, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Error reported by the controller API (non-2xx status or an error
    /// envelope with `meta.rc != "ok"`).
    #[error("API error: {message}")]
    Api { message: String },

    /// JSON deserialization failed, with the raw body for debugging.
    #[error("deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Returns `true` when the controller could not be reached at all
    /// (connect failure or timeout) as opposed to rejecting the request.
    pub fn is_unreachable(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_connect() || e.is_timeout())
    }

    /// Human-readable reason for operator-facing messages.
    ///
    /// Prefers the underlying error's message; falls back to a category
    /// name for errors that render empty.
    pub fn reason(&self) -> String {
        let message = self.to_string();
        if message.is_empty() {
            "transport error".into()
        } else {
            message
        }
    }
}
