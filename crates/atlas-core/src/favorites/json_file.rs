// crates/atlas-core/src/favorites/json_file.rs

use super::{DocumentStore, UserDocument};
use crate::error::{AtlasError, Result};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

/// File-backed document store: one `<user_id>.json` per user under a
/// data directory.
///
/// The per-key operations use the default whole-document
/// read-modify-write, so concurrent writers for the same user can lose
/// updates in the window between read and write. Fine for a
/// single-user-single-session tool; a multi-writer deployment wants a
/// backend with atomic per-key operations instead.
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(JsonFileStore { dir })
    }

    fn doc_path(&self, user_id: &str) -> Result<PathBuf> {
        // User ids become file names; refuse anything that could escape
        // the data directory.
        let safe = user_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '@'));
        if !safe || user_id.starts_with('.') {
            return Err(AtlasError::Storage(format!(
                "user id {user_id:?} is not usable as a document name"
            )));
        }
        Ok(self.dir.join(format!("{user_id}.json")))
    }
}

impl DocumentStore for JsonFileStore {
    fn read(&self, user_id: &str) -> Result<Option<UserDocument>> {
        let path = self.doc_path(user_id)?;
        let file = match File::open(&path) {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let doc = serde_json::from_reader(BufReader::new(file))?;
        Ok(Some(doc))
    }

    fn write(&self, user_id: &str, doc: &UserDocument) -> Result<()> {
        let path = self.doc_path(user_id)?;
        let file = File::create(&path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, doc)?;
        writer.flush()?;
        Ok(())
    }
}
