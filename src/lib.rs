//! Client library for a handful of Nextcloud app APIs: bookmarks, deck,
//! notes and the core OCS endpoints, plus the anonymous "login flow v2".
//!
//! Everything starts from [NextcloudClient] (one client per app family,
//! sharing credentials and a connection pool) or from [AuthClient] when an
//! app password still has to be obtained.

pub mod auth;
mod client;
mod constants;
pub mod errors;
pub mod models;
pub mod types;

pub use auth::AuthClient;
pub use client::bookmark::BookmarkClient;
pub use client::deck::DeckClient;
pub use client::general::GeneralClient;
pub use client::nextcloud::{NextcloudClient, NextcloudClientBuilder};
pub use client::notes::NotesClient;
pub use errors::{ErrorDetails, NextcloudError};
