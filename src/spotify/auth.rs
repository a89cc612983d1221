use reqwest::Client;

use crate::{
    error::ApiError,
    spotify::validate_response,
    types::{Credentials, TokenResponse},
};

/// Requests an access token through the OAuth2 client-credentials grant.
///
/// Sends a form-encoded POST to the accounts service token endpoint with
/// `grant_type=client_credentials` and the application credentials. This is
/// the server-to-server flow: no user interaction, no refresh token, just a
/// short-lived bearer token for catalog requests.
///
/// # Arguments
///
/// * `client` - Shared HTTP client to issue the request with
/// * `token_url` - Token endpoint URL of the accounts service
/// * `credentials` - Application client ID and secret
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(TokenResponse)` - Access token, token type and lifetime in seconds
/// - `Err(ApiError)` - Classified upstream failure or transport error
///
/// # Error Conditions
///
/// A 400 from the accounts service means the credentials or request were
/// malformed and maps to [`ApiError::InvalidClient`]; the remaining statuses
/// follow the taxonomy in [`validate_response`]. No retry is attempted.
pub async fn request_client_credentials_token(
    client: &Client,
    token_url: &str,
    credentials: &Credentials,
) -> Result<TokenResponse, ApiError> {
    let response = client
        .post(token_url)
        .form(&[
            ("grant_type", "client_credentials"),
            ("client_id", &credentials.client_id),
            ("client_secret", &credentials.client_secret),
        ])
        .send()
        .await?;

    let response = validate_response(response).await?;
    Ok(response.json::<TokenResponse>().await?)
}
