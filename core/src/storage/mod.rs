mod file_store;
mod memory_store;
mod note_repository;

pub use file_store::FileStore;
pub use memory_store::MemoryStore;
pub use note_repository::NoteRepository;

use crate::models::Note;
use crate::Result;

/// Storage contract for the note collection. The whole collection is the
/// unit of persistence: `load` returns every note and `save` replaces the
/// stored set with exactly the slice it is given.
pub trait NoteStore {
    fn load(&self) -> Result<Vec<Note>>;
    fn save(&self, notes: &[Note]) -> Result<()>;
}

impl<S: NoteStore + ?Sized> NoteStore for Box<S> {
    fn load(&self) -> Result<Vec<Note>> {
        (**self).load()
    }

    fn save(&self, notes: &[Note]) -> Result<()> {
        (**self).save(notes)
    }
}
