use chrono::Utc;
use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// Default number of results requested when a caller does not pass a limit.
pub const DEFAULT_LIMIT: u32 = 5;

/// Application credentials for the client-credentials grant.
///
/// Supplied once at client construction and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

/// Body of a successful token-endpoint response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
}

/// The in-memory access token together with its absolute expiry time.
///
/// `expires_at` is unix seconds, computed as `now + expires_in` when the
/// token is obtained. Nothing is ever persisted.
#[derive(Debug, Clone)]
pub struct TokenState {
    pub access_token: String,
    pub token_type: String,
    pub expires_at: i64,
}

impl TokenState {
    /// Whether the token has expired or will expire within `padding` seconds.
    pub fn is_expiring(&self, padding: i64) -> bool {
        self.is_expiring_at(Utc::now().timestamp(), padding)
    }

    /// Expiry check against an explicit clock value.
    pub fn is_expiring_at(&self, now: i64, padding: i64) -> bool {
        now >= self.expires_at - padding
    }
}

/// The catalog categories the search endpoint accepts.
///
/// Each category selects both the `type` query parameter sent upstream and
/// the plural key under which the response nests its `items` array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum SearchCategory {
    Artist,
    Album,
    Playlist,
    Track,
    Show,
    Episode,
    Audiobook,
}

impl SearchCategory {
    pub const ALL: [SearchCategory; 7] = [
        SearchCategory::Artist,
        SearchCategory::Album,
        SearchCategory::Playlist,
        SearchCategory::Track,
        SearchCategory::Show,
        SearchCategory::Episode,
        SearchCategory::Audiobook,
    ];

    /// Value of the `type` query parameter for this category.
    pub fn type_param(&self) -> &'static str {
        match self {
            SearchCategory::Artist => "artist",
            SearchCategory::Album => "album",
            SearchCategory::Playlist => "playlist",
            SearchCategory::Track => "track",
            SearchCategory::Show => "show",
            SearchCategory::Episode => "episode",
            SearchCategory::Audiobook => "audiobook",
        }
    }

    /// Key under which the search response nests this category's items.
    pub fn plural_key(&self) -> &'static str {
        match self {
            SearchCategory::Artist => "artists",
            SearchCategory::Album => "albums",
            SearchCategory::Playlist => "playlists",
            SearchCategory::Track => "tracks",
            SearchCategory::Show => "shows",
            SearchCategory::Episode => "episodes",
            SearchCategory::Audiobook => "audiobooks",
        }
    }
}

/// Parameters of one search call, minus the category.
///
/// `limit` falls back to [`DEFAULT_LIMIT`] when unset. `market` and `offset`
/// are only forwarded upstream when actually supplied.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    pub text: String,
    pub limit: Option<u32>,
    pub market: Option<String>,
    pub offset: Option<u32>,
}

impl SearchQuery {
    pub fn new(text: &str) -> Self {
        SearchQuery {
            text: text.to_string(),
            limit: None,
            market: None,
            offset: None,
        }
    }

    pub fn effective_limit(&self) -> u32 {
        self.limit.unwrap_or(DEFAULT_LIMIT)
    }
}

#[derive(Tabled)]
pub struct SearchResultTableRow {
    pub name: String,
    pub detail: String,
    pub id: String,
}
