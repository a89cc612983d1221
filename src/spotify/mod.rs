//! # Spotify Integration Module
//!
//! This module is the raw HTTP layer between the client and Spotify's
//! services. It implements the two endpoints the application talks to and
//! the shared response validation that classifies upstream failures.
//!
//! ## Core Modules
//!
//! - [`auth`] - Client-credentials token requests against the accounts
//!   service (`POST /api/token`)
//! - [`search`] - Catalog search against the Web API (`GET /search`)
//!
//! ## Error Handling Philosophy
//!
//! Neither endpoint call retries or backs off. A non-success status is
//! classified exactly once through [`validate_response`] and surfaced to the
//! caller as a typed [`ApiError`] carrying the raw response body; recovery
//! decisions belong to the caller.
//!
//! ## Thread Safety
//!
//! All operations use async/await for non-blocking I/O, but each call is
//! logically sequential: one request, one response, no client-side
//! concurrency.

pub mod auth;
pub mod search;

use reqwest::{Response, StatusCode};

use crate::error::ApiError;

/// Classifies an HTTP response by status code.
///
/// Success statuses pass the response through untouched. The four statuses
/// the Spotify services document (400, 401, 403, 429) map onto their own
/// [`ApiError`] variants; any other non-success status fails closed as
/// [`ApiError::UnexpectedStatus`]. The raw response body is captured as
/// context in every error case.
pub async fn validate_response(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(match status {
        StatusCode::BAD_REQUEST => ApiError::InvalidClient { body },
        StatusCode::UNAUTHORIZED => ApiError::TokenExpired { body },
        StatusCode::FORBIDDEN => ApiError::BadOAuth { body },
        StatusCode::TOO_MANY_REQUESTS => ApiError::RateLimitExceeded { body },
        other => ApiError::UnexpectedStatus {
            status: other.as_u16(),
            body,
        },
    })
}
