use reqwest::Client;
use serde_json::Value;

use crate::{
    error::ApiError,
    spotify::validate_response,
    types::{SearchCategory, SearchQuery},
};

/// Performs one catalog search against the Spotify Web API.
///
/// Issues a bearer-authenticated GET to `<api_url>/search` with the query
/// text, the category's `type` string and the effective result limit.
/// `market` is forwarded only when supplied and non-empty, `offset` only
/// when supplied; unset parameters are left off the request entirely so the
/// upstream defaults apply.
///
/// # Arguments
///
/// * `client` - Shared HTTP client to issue the request with
/// * `api_url` - Web API base URL (no trailing slash)
/// * `access_token` - Valid bearer token for authentication
/// * `category` - Catalog category to search, selects the `type` parameter
/// * `query` - Query text and paging parameters
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Value)` - The parsed JSON response body, passed through opaquely
/// - `Err(ApiError)` - Classified upstream failure or transport error
///
/// # Response Shape
///
/// A successful body nests results under the category's plural key:
///
/// ```text
/// { "tracks": { "items": [ ... ] } }
/// ```
///
/// No schema validation happens here; unwrapping the `items` array is the
/// caller's concern.
pub async fn search(
    client: &Client,
    api_url: &str,
    access_token: &str,
    category: SearchCategory,
    query: &SearchQuery,
) -> Result<Value, ApiError> {
    let mut params: Vec<(&str, String)> = vec![
        ("q", query.text.clone()),
        ("type", category.type_param().to_string()),
        ("limit", query.effective_limit().to_string()),
    ];
    if let Some(market) = &query.market {
        if !market.is_empty() {
            params.push(("market", market.clone()));
        }
    }
    if let Some(offset) = query.offset {
        params.push(("offset", offset.to_string()));
    }

    let response = client
        .get(format!("{}/search", api_url))
        .query(&params)
        .bearer_auth(access_token)
        .send()
        .await?;

    let response = validate_response(response).await?;
    Ok(response.json::<Value>().await?)
}
