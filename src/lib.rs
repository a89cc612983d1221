//! Spotify Catalog Search CLI Library
//!
//! This library provides a small client for the Spotify Web API search
//! endpoint. It authenticates through the OAuth2 client-credentials grant,
//! keeps a single access token fresh in memory, and exposes typed search
//! helpers for every catalog category Spotify supports (artists, albums,
//! playlists, tracks, shows, episodes, audiobooks).
//!
//! # Modules
//!
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `error` - Typed error taxonomy for API failures
//! - `management` - The stateful search client and token lifecycle
//! - `spotify` - Raw Spotify Web API calls
//! - `types` - Data structures and type definitions
//!
//! # Example
//!
//! ```
//! use sposecli::management::SearchApiClient;
//!
//! #[tokio::main]
//! async fn main() -> sposecli::Res<()> {
//!     let mut client = SearchApiClient::new("client-id", "client-secret");
//!     let tracks = client.search_tracks("Mr. Brightside", None, None, None).await?;
//!     println!("{} results", tracks.len());
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod management;
pub mod spotify;
pub mod types;

/// A convenient Result type alias for operations against the Spotify API.
///
/// Every fallible operation in this crate surfaces an [`error::ApiError`],
/// which classifies upstream HTTP failures into the taxonomy the Spotify
/// accounts and search services actually produce.
///
/// # Example
///
/// ```
/// use sposecli::Res;
///
/// async fn fetch_data() -> Res<String> {
///     Ok("data".to_string())
/// }
/// ```
pub type Res<T> = std::result::Result<T, crate::error::ApiError>;

/// Prints an informational message with a blue bullet point.
///
/// Creates a formatted output line with a distinctive blue "o" indicator
/// followed by the provided message. Used for general information and
/// status updates throughout the application.
///
/// # Example
///
/// ```
/// info!("Searching for '{}'...", query);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// Creates a formatted output line with a green "✓" indicator to signify
/// successful completion of operations.
///
/// # Example
///
/// ```
/// success!("Found {} tracks", count);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Creates a formatted error output with a red "!" indicator and immediately
/// terminates the program with exit code 1. Used for unrecoverable errors
/// that require immediate program termination.
///
/// # Example
///
/// ```
/// error!("Missing required environment variable: {}", var_name);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Creates a formatted output line with a yellow "!" indicator to highlight
/// potential issues or important notices that don't require program
/// termination.
///
/// # Example
///
/// ```
/// warning!("No results for '{}'", query);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
