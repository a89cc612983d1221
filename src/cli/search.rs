use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use serde_json::Value;
use tabled::Table;

use crate::{
    config, error,
    management::SearchApiClient,
    types::{SearchCategory, SearchQuery, SearchResultTableRow},
    warning,
};

/// Runs a catalog search and prints the results as a table.
///
/// Builds a [`SearchApiClient`] from the configured credentials, performs
/// one search for the given category and renders name, a category-dependent
/// detail column and the Spotify ID of every result. A search with no hits
/// prints a warning instead of an empty table.
///
/// # Authentication
///
/// Credentials come from the environment (`SPOTIFY_API_AUTH_CLIENT_ID` and
/// `SPOTIFY_API_AUTH_CLIENT_SECRET`); missing credentials terminate the
/// program with an error message. The access token is obtained on the first
/// request, no prior auth step is needed.
///
/// # Progress Indication
///
/// Displays a spinner while the request is in flight. The spinner is cleared
/// on all exit paths.
pub async fn search(
    category: SearchCategory,
    query_text: String,
    limit: Option<u32>,
    market: Option<String>,
    offset: Option<u32>,
) {
    let mut client = SearchApiClient::new(
        &config::spotify_client_id(),
        &config::spotify_client_secret(),
    );

    let query = SearchQuery {
        text: query_text.clone(),
        limit,
        market,
        offset,
    };

    let pb = ProgressBar::new_spinner();
    pb.set_message(format!("Searching {}...", category.plural_key()));
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let result = client.search_items(category, &query).await;
    pb.finish_and_clear();

    match result {
        Ok(items) => {
            if items.is_empty() {
                warning!("No {} found for '{}'", category.plural_key(), query_text);
                return;
            }

            let rows: Vec<SearchResultTableRow> = items
                .iter()
                .map(|item| SearchResultTableRow {
                    name: string_field(item, "name"),
                    detail: detail_for(category, item),
                    id: string_field(item, "id"),
                })
                .collect();

            let table = Table::new(rows);
            println!("{}", table);
        }
        Err(e) => error!("Search failed. Err: {}", e),
    }
}

fn string_field(item: &Value, key: &str) -> String {
    item.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Picks a human-useful secondary column per category from the opaque item.
fn detail_for(category: SearchCategory, item: &Value) -> String {
    match category {
        SearchCategory::Artist => item
            .get("genres")
            .and_then(Value::as_array)
            .map(|genres| {
                genres
                    .iter()
                    .filter_map(Value::as_str)
                    .take(3)
                    .collect::<Vec<_>>()
                    .join(",")
            })
            .unwrap_or_default(),
        SearchCategory::Album | SearchCategory::Track => joined_names(item.get("artists")),
        SearchCategory::Playlist => item
            .get("owner")
            .map(|owner| string_field(owner, "display_name"))
            .unwrap_or_default(),
        SearchCategory::Show => string_field(item, "publisher"),
        SearchCategory::Episode => string_field(item, "release_date"),
        SearchCategory::Audiobook => joined_names(item.get("authors")),
    }
}

fn joined_names(list: Option<&Value>) -> String {
    list.and_then(Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .map(|entry| string_field(entry, "name"))
                .collect::<Vec<_>>()
                .join(",")
        })
        .unwrap_or_default()
}
