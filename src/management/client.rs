use chrono::Utc;
use reqwest::Client;
use serde_json::Value;

use crate::{
    config,
    error::ApiError,
    spotify,
    types::{Credentials, SearchCategory, SearchQuery, TokenState},
};

/// Seconds of safety padding subtracted from the token expiry. A token this
/// close to expiring is refreshed before use so it cannot lapse mid-request.
pub const TOKEN_PADDING: i64 = 5;

/// Stateful client for the Spotify search endpoint.
///
/// Holds the application credentials and the current access token, and
/// refreshes the token transparently through the client-credentials grant
/// whenever it is missing or about to expire. All token state lives in this
/// instance for the process lifetime; nothing is persisted or shared.
///
/// Operations that may refresh the token take `&mut self`, so a single
/// instance cannot be used for interleaved refreshes.
///
/// # Example
///
/// ```
/// let mut client = SearchApiClient::new("client-id", "client-secret");
/// let tracks = client.search_tracks("Mr. Brightside", None, None, None).await?;
/// ```
pub struct SearchApiClient {
    http: Client,
    credentials: Credentials,
    token: Option<TokenState>,
    token_url: String,
    api_url: String,
}

impl SearchApiClient {
    /// Creates a client against the configured (or default) Spotify
    /// endpoints.
    pub fn new(client_id: &str, client_secret: &str) -> Self {
        Self::with_endpoints(
            client_id,
            client_secret,
            &config::spotify_apitoken_url(),
            &config::spotify_apiurl(),
        )
    }

    /// Creates a client against explicit endpoint URLs.
    ///
    /// Used by tests to point the client at a mock server; `api_url` is the
    /// Web API base without a trailing slash.
    pub fn with_endpoints(
        client_id: &str,
        client_secret: &str,
        token_url: &str,
        api_url: &str,
    ) -> Self {
        SearchApiClient {
            http: Client::new(),
            credentials: Credentials {
                client_id: client_id.to_string(),
                client_secret: client_secret.to_string(),
            },
            token: None,
            token_url: token_url.to_string(),
            api_url: api_url.to_string(),
        }
    }

    /// Returns a usable access token, refreshing it first when necessary.
    ///
    /// A refresh happens when no token has been obtained yet or when the
    /// current one expires within [`TOKEN_PADDING`] seconds. A token well
    /// inside its validity window is returned as-is with no network traffic.
    async fn ensure_fresh_token(&mut self) -> Result<String, ApiError> {
        if let Some(state) = &self.token {
            if !state.is_expiring(TOKEN_PADDING) {
                return Ok(state.access_token.clone());
            }
        }

        let state = self.refresh_token().await?;
        Ok(state.access_token)
    }

    /// Obtains a new access token through the client-credentials grant.
    ///
    /// On success the stored token state is replaced with the new token and
    /// its absolute expiry (`now + expires_in`). Failures propagate as typed
    /// errors and leave the previous token state in place.
    async fn refresh_token(&mut self) -> Result<TokenState, ApiError> {
        let response = spotify::auth::request_client_credentials_token(
            &self.http,
            &self.token_url,
            &self.credentials,
        )
        .await?;

        let state = TokenState {
            access_token: response.access_token,
            token_type: response.token_type,
            expires_at: Utc::now().timestamp() + response.expires_in as i64,
        };
        self.token = Some(state.clone());
        Ok(state)
    }

    /// Runs one search and returns the full JSON response body.
    ///
    /// Ensures a fresh token first, then delegates to the raw search call.
    /// The body is passed through opaquely; use [`Self::search_items`] to
    /// unwrap the category's `items` array.
    pub async fn search(
        &mut self,
        category: SearchCategory,
        query: &SearchQuery,
    ) -> Result<Value, ApiError> {
        let access_token = self.ensure_fresh_token().await?;
        spotify::search::search(&self.http, &self.api_url, &access_token, category, query).await
    }

    /// Runs one search and unwraps the category's `items` array.
    ///
    /// The seven typed search methods all delegate here; the category picks
    /// both the `type` parameter sent upstream and the plural key the items
    /// are nested under in the response. A 2xx body missing that structure
    /// is a [`ApiError::MalformedResponse`].
    pub async fn search_items(
        &mut self,
        category: SearchCategory,
        query: &SearchQuery,
    ) -> Result<Vec<Value>, ApiError> {
        let body = self.search(category, query).await?;
        let items = body
            .get(category.plural_key())
            .and_then(|container| container.get("items"))
            .and_then(Value::as_array)
            .ok_or_else(|| {
                ApiError::MalformedResponse(format!(
                    "missing '{}.items' in search response",
                    category.plural_key()
                ))
            })?;
        Ok(items.clone())
    }

    /// Searches the catalog for artists.
    pub async fn search_artists(
        &mut self,
        text: &str,
        limit: Option<u32>,
        market: Option<&str>,
        offset: Option<u32>,
    ) -> Result<Vec<Value>, ApiError> {
        let query = build_query(text, limit, market, offset);
        self.search_items(SearchCategory::Artist, &query).await
    }

    /// Searches the catalog for albums.
    pub async fn search_albums(
        &mut self,
        text: &str,
        limit: Option<u32>,
        market: Option<&str>,
        offset: Option<u32>,
    ) -> Result<Vec<Value>, ApiError> {
        let query = build_query(text, limit, market, offset);
        self.search_items(SearchCategory::Album, &query).await
    }

    /// Searches the catalog for playlists.
    pub async fn search_playlists(
        &mut self,
        text: &str,
        limit: Option<u32>,
        market: Option<&str>,
        offset: Option<u32>,
    ) -> Result<Vec<Value>, ApiError> {
        let query = build_query(text, limit, market, offset);
        self.search_items(SearchCategory::Playlist, &query).await
    }

    /// Searches the catalog for tracks.
    pub async fn search_tracks(
        &mut self,
        text: &str,
        limit: Option<u32>,
        market: Option<&str>,
        offset: Option<u32>,
    ) -> Result<Vec<Value>, ApiError> {
        let query = build_query(text, limit, market, offset);
        self.search_items(SearchCategory::Track, &query).await
    }

    /// Searches the catalog for shows.
    pub async fn search_shows(
        &mut self,
        text: &str,
        limit: Option<u32>,
        market: Option<&str>,
        offset: Option<u32>,
    ) -> Result<Vec<Value>, ApiError> {
        let query = build_query(text, limit, market, offset);
        self.search_items(SearchCategory::Show, &query).await
    }

    /// Searches the catalog for episodes.
    pub async fn search_episodes(
        &mut self,
        text: &str,
        limit: Option<u32>,
        market: Option<&str>,
        offset: Option<u32>,
    ) -> Result<Vec<Value>, ApiError> {
        let query = build_query(text, limit, market, offset);
        self.search_items(SearchCategory::Episode, &query).await
    }

    /// Searches the catalog for audiobooks.
    pub async fn search_audiobooks(
        &mut self,
        text: &str,
        limit: Option<u32>,
        market: Option<&str>,
        offset: Option<u32>,
    ) -> Result<Vec<Value>, ApiError> {
        let query = build_query(text, limit, market, offset);
        self.search_items(SearchCategory::Audiobook, &query).await
    }

    /// The current token state, if a token has been obtained.
    pub fn current_token(&self) -> Option<&TokenState> {
        self.token.as_ref()
    }
}

fn build_query(
    text: &str,
    limit: Option<u32>,
    market: Option<&str>,
    offset: Option<u32>,
) -> SearchQuery {
    SearchQuery {
        text: text.to_string(),
        limit,
        market: market.map(str::to_string),
        offset,
    }
}
