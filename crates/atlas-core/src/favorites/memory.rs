// crates/atlas-core/src/favorites/memory.rs

use super::{DocumentStore, UserDocument};
use crate::error::{AtlasError, Result};
use crate::model::Country;
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory document store. Used by tests and demos, and as the model
/// for what a per-key-atomic backend looks like: the per-key operations
/// run under the store lock, so there is no read-then-write window.
#[derive(Default)]
pub struct MemoryStore {
    docs: Mutex<HashMap<String, UserDocument>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, UserDocument>>> {
        self.docs
            .lock()
            .map_err(|_| AtlasError::Storage("favorites store lock poisoned".to_string()))
    }
}

impl DocumentStore for MemoryStore {
    fn read(&self, user_id: &str) -> Result<Option<UserDocument>> {
        Ok(self.lock()?.get(user_id).cloned())
    }

    fn write(&self, user_id: &str, doc: &UserDocument) -> Result<()> {
        self.lock()?.insert(user_id.to_string(), doc.clone());
        Ok(())
    }

    fn upsert_key(&self, user_id: &str, code: &str, data: &Country) -> Result<()> {
        self.lock()?
            .entry(user_id.to_string())
            .or_default()
            .favorites
            .insert(code.to_string(), data.clone());
        Ok(())
    }

    fn delete_key(&self, user_id: &str, code: &str) -> Result<()> {
        if let Some(doc) = self.lock()?.get_mut(user_id) {
            doc.favorites.remove(code);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::country;

    #[test]
    fn per_key_ops_do_not_require_an_existing_document() {
        let store = MemoryStore::new();
        store
            .upsert_key("uid-1", "FRA", &country("FRA", "France", "Europe", &[]))
            .unwrap();
        let doc = store.read("uid-1").unwrap().unwrap();
        assert!(doc.favorites.contains_key("FRA"));

        // Deleting from a user with no document is fine.
        store.delete_key("uid-2", "FRA").unwrap();
        assert!(store.read("uid-2").unwrap().is_none());
    }
}
