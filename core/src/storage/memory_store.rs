use crate::models::Note;
use crate::storage::NoteStore;
use crate::Result;
use std::sync::Mutex;

/// In-memory store, mainly for tests that should not touch the filesystem.
#[derive(Default)]
pub struct MemoryStore {
    notes: Mutex<Vec<Note>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_notes(notes: Vec<Note>) -> Self {
        Self {
            notes: Mutex::new(notes),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Note>> {
        match self.notes.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl NoteStore for MemoryStore {
    fn load(&self) -> Result<Vec<Note>> {
        Ok(self.lock().clone())
    }

    fn save(&self, notes: &[Note]) -> Result<()> {
        *self.lock() = notes.to_vec();
        Ok(())
    }
}
