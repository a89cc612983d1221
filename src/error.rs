//! Typed errors for Spotify API interactions.
//!
//! Both the accounts service (token endpoint) and the Web API (search
//! endpoint) signal failures through HTTP status codes. This module maps
//! each documented status onto its own error variant and carries the raw
//! response body along as context, so callers can match on the failure
//! kind without re-parsing anything.

use thiserror::Error;

/// Classified failures from the Spotify accounts and search services.
///
/// The status-code variants correspond one-to-one to the responses the
/// upstream services produce: 400, 401, 403 and 429. Every other non-2xx
/// status fails closed as [`ApiError::UnexpectedStatus`] rather than being
/// passed through as a success.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP 400: malformed credentials or request.
    #[error("invalid client credentials or request: {body}")]
    InvalidClient { body: String },

    /// HTTP 401: access token invalid or expired.
    #[error("access token invalid or expired: {body}")]
    TokenExpired { body: String },

    /// HTTP 403: authorization rejected.
    #[error("authorization rejected by Spotify: {body}")]
    BadOAuth { body: String },

    /// HTTP 429: caller exceeded the rate limit.
    #[error("rate limit exceeded: {body}")]
    RateLimitExceeded { body: String },

    /// Any other non-success status.
    #[error("unexpected status {status} from Spotify: {body}")]
    UnexpectedStatus { status: u16, body: String },

    /// A 2xx body missing the structure the endpoint documents.
    #[error("malformed response from Spotify: {0}")]
    MalformedResponse(String),

    /// Transport-level failure (connect, TLS, body read, JSON decode).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}
