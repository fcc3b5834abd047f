use jotfile_core::{NoteRepository, NoteStore};
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};

pub type DynStore = Box<dyn NoteStore + Send + Sync>;
pub type SharedState = Arc<AppState>;

/// Shared handler state. The repository sits behind a single mutex so the
/// load-mutate-save cycle of each request cannot interleave with another
/// request and silently drop writes.
pub struct AppState {
    repo: Mutex<NoteRepository<DynStore>>,
}

impl AppState {
    pub fn new<S>(store: S) -> SharedState
    where
        S: NoteStore + Send + Sync + 'static,
    {
        Arc::new(Self {
            repo: Mutex::new(NoteRepository::new(Box::new(store))),
        })
    }

    pub async fn repo(&self) -> MutexGuard<'_, NoteRepository<DynStore>> {
        self.repo.lock().await
    }
}
