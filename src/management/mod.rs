mod client;

pub use client::SearchApiClient;
pub use client::TOKEN_PADDING;
