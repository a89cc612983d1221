//! # CLI Module
//!
//! This module provides the command-line interface layer for Sposecli. It
//! implements the user-facing search command, coordinating between the
//! configuration, the search client and terminal presentation.
//!
//! ## Command Categories
//!
//! ### Search Operations
//!
//! - [`search`] - Runs a catalog search for one category and renders the
//!   results as a table
//!
//! ## Architecture Design
//!
//! The CLI module follows a layered architecture approach:
//!
//! ```text
//! CLI Layer (User Interface)
//!     ↓
//! Management Layer (Client, Token Lifecycle)
//!     ↓
//! API Layer (Spotify Integration)
//!     ↓
//! Network Layer (HTTP Requests)
//! ```
//!
//! The CLI command delegates to the management layer while handling user
//! interaction, progress feedback and error presentation.

mod search;

pub use search::search;
