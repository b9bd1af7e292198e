// crates/atlas-core/src/favorites/mod.rs

//! # Favorites Store
//!
//! Per-user bookmarks, persisted as one document per user in a pluggable
//! [`DocumentStore`]. The document holds a map keyed by country code, so
//! uniqueness per code is structural: `add` is an idempotent keyed upsert
//! and `remove` is an idempotent delete-by-key. Backends that can do
//! per-key operations atomically override [`DocumentStore::upsert_key`]
//! and [`DocumentStore::delete_key`]; the defaults are a whole-document
//! read-modify-write.

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use crate::error::{AtlasError, Result};
use crate::model::Country;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One user's stored document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserDocument {
    /// country code -> snapshot taken when the country was favorited.
    #[serde(default)]
    pub favorites: BTreeMap<String, Country>,
}

/// A saved bookmark: the country's code plus the denormalized snapshot
/// captured at favorite time (not a live reference).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FavoriteEntry {
    pub code: String,
    pub data: Country,
}

/// The remote document store seam: whole-document read/write plus
/// optionally-atomic per-key operations.
pub trait DocumentStore {
    /// Fetch a user's document. `Ok(None)` when it does not exist;
    /// absence is normal state, not an error.
    fn read(&self, user_id: &str) -> Result<Option<UserDocument>>;

    /// Replace a user's document, creating it if absent.
    fn write(&self, user_id: &str, doc: &UserDocument) -> Result<()>;

    /// Insert or replace one favorite. The default is read-modify-write;
    /// backends holding a lock can make this a single atomic step.
    fn upsert_key(&self, user_id: &str, code: &str, data: &Country) -> Result<()> {
        let mut doc = self.read(user_id)?.unwrap_or_default();
        doc.favorites.insert(code.to_string(), data.clone());
        self.write(user_id, &doc)
    }

    /// Delete one favorite by key. Missing document or missing key is a
    /// no-op. Default is read-modify-write, same caveat as above.
    fn delete_key(&self, user_id: &str, code: &str) -> Result<()> {
        if let Some(mut doc) = self.read(user_id)? {
            if doc.favorites.remove(code).is_some() {
                self.write(user_id, &doc)?;
            }
        }
        Ok(())
    }
}

/// The read-modify-write layer over per-user favorite documents.
///
/// All operations are keyed by (user id, country code). Write paths
/// require a non-empty user id; the read path treats a missing user as
/// "no favorites" rather than an error.
pub struct FavoritesStore<S: DocumentStore> {
    store: S,
}

impl<S: DocumentStore> FavoritesStore<S> {
    pub fn new(store: S) -> Self {
        FavoritesStore { store }
    }

    /// Bookmark a country for a user, snapshotting `data`. Upsert-merge:
    /// the user document is created if absent, and re-favoriting the same
    /// code replaces the snapshot instead of duplicating the entry.
    pub fn add(&self, user_id: &str, code: &str, data: &Country) -> Result<()> {
        let user_id = non_empty(user_id, "user_id")?;
        let code = non_empty(code, "country_code")?;
        self.store.upsert_key(user_id, code, data)
    }

    /// Remove a user's bookmark for `code`. Idempotent: a missing
    /// document or a code never favorited is a silent no-op.
    pub fn remove(&self, user_id: &str, code: &str) -> Result<()> {
        let user_id = non_empty(user_id, "user_id")?;
        let code = non_empty(code, "country_code")?;
        self.store.delete_key(user_id, code)
    }

    /// A user's favorites, in key order. Empty for a signed-out caller
    /// (`None`), for a user with no document, and for a document with no
    /// favorites; none of those are errors.
    pub fn list(&self, user_id: Option<&str>) -> Result<Vec<FavoriteEntry>> {
        let Some(user_id) = user_id.map(str::trim).filter(|u| !u.is_empty()) else {
            return Ok(Vec::new());
        };
        let Some(doc) = self.store.read(user_id)? else {
            return Ok(Vec::new());
        };
        Ok(doc
            .favorites
            .into_iter()
            .map(|(code, data)| FavoriteEntry { code, data })
            .collect())
    }

    /// Is `code` currently favorited by `user_id`? Drives the toggle
    /// button state.
    pub fn contains(&self, user_id: &str, code: &str) -> Result<bool> {
        let user_id = non_empty(user_id, "user_id")?;
        let code = non_empty(code, "country_code")?;
        Ok(self
            .store
            .read(user_id)?
            .is_some_and(|doc| doc.favorites.contains_key(code)))
    }
}

fn non_empty<'a>(value: &'a str, name: &'static str) -> Result<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AtlasError::InvalidArgument(name));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::country;

    fn store() -> FavoritesStore<MemoryStore> {
        FavoritesStore::new(MemoryStore::new())
    }

    #[test]
    fn list_is_empty_for_absent_user_document_or_field() {
        let favs = store();
        // Signed out.
        assert!(favs.list(None).unwrap().is_empty());
        // No document for this user.
        assert!(favs.list(Some("uid-1")).unwrap().is_empty());
        // Document exists but holds no favorites.
        favs.store.write("uid-1", &UserDocument::default()).unwrap();
        assert!(favs.list(Some("uid-1")).unwrap().is_empty());
    }

    #[test]
    fn add_then_list_roundtrips_the_snapshot() {
        let favs = store();
        let france = country("FRA", "France", "Europe", &[("fra", "French")]);
        favs.add("uid-1", "FRA", &france).unwrap();

        let listed = favs.list(Some("uid-1")).unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].code, "FRA");
        assert_eq!(listed[0].data, france);
        assert!(favs.contains("uid-1", "FRA").unwrap());
    }

    #[test]
    fn double_add_is_an_upsert_not_a_duplicate() {
        let favs = store();
        let stale = country("FRA", "France", "Europe", &[]);
        let fresh = country("FRA", "France", "Europe", &[("fra", "French")]);
        favs.add("uid-1", "FRA", &stale).unwrap();
        favs.add("uid-1", "FRA", &fresh).unwrap();

        let listed = favs.list(Some("uid-1")).unwrap();
        assert_eq!(listed.len(), 1);
        // The later snapshot wins.
        assert_eq!(listed[0].data, fresh);
    }

    #[test]
    fn add_then_remove_then_list_is_empty_for_that_code() {
        let favs = store();
        favs.add("uid-1", "FRA", &country("FRA", "France", "Europe", &[]))
            .unwrap();
        favs.add("uid-1", "JPN", &country("JPN", "Japan", "Asia", &[]))
            .unwrap();
        favs.remove("uid-1", "FRA").unwrap();

        let listed = favs.list(Some("uid-1")).unwrap();
        let codes: Vec<&str> = listed.iter().map(|e| e.code.as_str()).collect();
        assert_eq!(codes, ["JPN"]);
        assert!(!favs.contains("uid-1", "FRA").unwrap());
    }

    #[test]
    fn remove_of_never_added_code_is_a_no_op() {
        let favs = store();
        favs.add("uid-1", "JPN", &country("JPN", "Japan", "Asia", &[]))
            .unwrap();
        // Neither a missing key nor a missing document errors.
        favs.remove("uid-1", "FRA").unwrap();
        favs.remove("uid-2", "FRA").unwrap();
        assert_eq!(favs.list(Some("uid-1")).unwrap().len(), 1);
    }

    #[test]
    fn empty_identifiers_are_rejected_on_write_paths() {
        let favs = store();
        let japan = country("JPN", "Japan", "Asia", &[]);
        assert!(matches!(
            favs.add("", "JPN", &japan),
            Err(AtlasError::InvalidArgument("user_id"))
        ));
        assert!(matches!(
            favs.add("uid-1", "  ", &japan),
            Err(AtlasError::InvalidArgument("country_code"))
        ));
        assert!(matches!(
            favs.remove("", "JPN"),
            Err(AtlasError::InvalidArgument("user_id"))
        ));
    }

    #[test]
    fn users_do_not_share_favorites() {
        let favs = store();
        favs.add("alice", "FRA", &country("FRA", "France", "Europe", &[]))
            .unwrap();
        favs.add("bob", "JPN", &country("JPN", "Japan", "Asia", &[]))
            .unwrap();
        assert_eq!(favs.list(Some("alice")).unwrap()[0].code, "FRA");
        assert_eq!(favs.list(Some("bob")).unwrap()[0].code, "JPN");
        favs.remove("alice", "FRA").unwrap();
        assert_eq!(favs.list(Some("bob")).unwrap().len(), 1);
    }
}
