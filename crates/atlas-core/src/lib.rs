// crates/atlas-core/src/lib.rs

//! # atlas-core
//!
//! Country directory with search/filter and per-user favorites.
//!
//! The directory data comes from the public REST Countries API (see
//! [`client::DirectoryClient`], feature `client`); filtering runs
//! in-memory over the materialized [`Directory`]; favorites are keyed
//! snapshots persisted through a pluggable [`favorites::DocumentStore`].
//! Identity is a single nullable user id (see [`session::Session`]):
//! sign-up and sign-in themselves belong to an external provider.

pub mod client;
pub mod debounce;
pub mod error;
pub mod favorites;
pub mod filter;
pub mod model;
pub mod session;
pub mod text;

// Re-exports
pub use crate::error::{AtlasError, Result};
pub use crate::favorites::{DocumentStore, FavoriteEntry, FavoritesStore, JsonFileStore, MemoryStore};
pub use crate::filter::ListingFilter;
pub use crate::model::{Country, Currency, Directory, Flags, REGIONS};
pub use crate::session::{Session, SessionReader};
#[cfg(feature = "client")]
pub use crate::client::{DirectoryClient, DEFAULT_BASE_URL, LISTING_FIELDS};
pub use crate::debounce::{Debouncer, DEFAULT_DEBOUNCE};
