use crate::models::Note;
use crate::storage::NoteStore;
use crate::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// JSON-file-backed store. The file holds a single pretty-printed array of
/// notes and is rewritten whole on every save. There is no locking and no
/// temp-file rename; callers that run concurrently must serialize access
/// themselves.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl NoteStore for FileStore {
    fn load(&self) -> Result<Vec<Note>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let data = fs::read_to_string(&self.path)?;
        let notes = serde_json::from_str(&data)?;
        Ok(notes)
    }

    fn save(&self, notes: &[Note]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let data = serde_json::to_string_pretty(notes)?;
        fs::write(&self.path, data)?;
        Ok(())
    }
}
