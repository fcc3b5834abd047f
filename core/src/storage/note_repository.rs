use crate::models::Note;
use crate::storage::NoteStore;
use crate::{Error, Result};

/// Domain operations over a [`NoteStore`]. Every operation loads the whole
/// collection, works on it in memory, and writes it back whole on mutation.
pub struct NoteRepository<S> {
    store: S,
}

impl<S: NoteStore> NoteRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Get all notes, starred first, newest first within each group
    pub fn list(&self) -> Result<Vec<Note>> {
        let mut notes = self.store.load()?;
        notes.sort_by(|a, b| {
            b.starred
                .cmp(&a.starred)
                .then(b.created_at.cmp(&a.created_at))
        });
        Ok(notes)
    }

    /// Filter notes whose title or body contains the query, in stored order.
    /// An empty query matches every note.
    pub fn search(&self, query: &str) -> Result<Vec<Note>> {
        let notes = self.store.load()?;
        Ok(notes.into_iter().filter(|n| n.matches(query)).collect())
    }

    /// Get a single note by id
    pub fn get(&self, id: u64) -> Result<Note> {
        let notes = self.store.load()?;
        notes
            .into_iter()
            .find(|n| n.id == id)
            .ok_or_else(|| Error::NotFound(format!("Note not found: {}", id)))
    }

    /// Create a new note and persist the collection
    pub fn create(&self, title: &str, body: &str, color: Option<String>) -> Result<Note> {
        validate_content(title, body)?;

        let mut notes = self.store.load()?;
        let id = next_id(&notes);
        let note = Note::new(id, title.to_string(), body.to_string(), color);

        notes.push(note.clone());
        self.store.save(&notes)?;
        Ok(note)
    }

    /// Overwrite a note's title, body, and color, refreshing its updated
    /// timestamp but never its creation timestamp
    pub fn update(&self, id: u64, title: &str, body: &str, color: Option<String>) -> Result<Note> {
        validate_content(title, body)?;

        let mut notes = self.store.load()?;
        let note = notes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| Error::NotFound(format!("Note not found: {}", id)))?;

        note.title = title.to_string();
        note.body = body.to_string();
        note.color = color
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| crate::models::DEFAULT_COLOR.to_string());
        note.touch();
        let updated = note.clone();

        self.store.save(&notes)?;
        Ok(updated)
    }

    /// Remove a note by id. Deleting an unknown id is a silent no-op.
    pub fn delete(&self, id: u64) -> Result<()> {
        let mut notes = self.store.load()?;
        notes.retain(|n| n.id != id);
        self.store.save(&notes)
    }

    /// Flip a note's starred flag
    pub fn toggle_star(&self, id: u64) -> Result<Note> {
        let mut notes = self.store.load()?;
        let note = notes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| Error::NotFound(format!("Note not found: {}", id)))?;

        note.starred = !note.starred;
        note.touch();
        let updated = note.clone();

        self.store.save(&notes)?;
        Ok(updated)
    }
}

fn validate_content(title: &str, body: &str) -> Result<()> {
    if title.is_empty() || body.is_empty() {
        return Err(Error::InvalidInput(
            "Title and body are required!".to_string(),
        ));
    }
    Ok(())
}

/// One past the highest id in use, so ids never collide with a live note
/// even after deletions
fn next_id(notes: &[Note]) -> u64 {
    notes.iter().map(|n| n.id).max().unwrap_or(0) + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use chrono::{Duration, Utc};

    fn repo() -> NoteRepository<MemoryStore> {
        NoteRepository::new(MemoryStore::new())
    }

    fn seeded_repo(notes: Vec<Note>) -> NoteRepository<MemoryStore> {
        NoteRepository::new(MemoryStore::with_notes(notes))
    }

    fn note(id: u64, title: &str, body: &str) -> Note {
        Note::new(id, title.to_string(), body.to_string(), None)
    }

    #[test]
    fn test_create_appends_one_note_with_defaults() {
        let repo = repo();

        let note = repo.create("Groceries", "milk, eggs", None).unwrap();

        assert_eq!(note.id, 1);
        assert_eq!(note.color, "white");
        assert!(!note.starred);
        assert_eq!(note.created_at, note.updated_at);

        let stored = repo.search("").unwrap();
        assert_eq!(stored, vec![note]);
    }

    #[test]
    fn test_create_rejects_empty_title_or_body() {
        let repo = repo();

        assert!(matches!(
            repo.create("", "body", None),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            repo.create("title", "", None),
            Err(Error::InvalidInput(_))
        ));
        assert!(repo.search("").unwrap().is_empty());
    }

    #[test]
    fn test_ids_stay_unique_after_deletion() {
        let repo = repo();

        repo.create("One", "a", None).unwrap();
        repo.create("Two", "b", None).unwrap();
        repo.delete(1).unwrap();

        let third = repo.create("Three", "c", None).unwrap();
        assert_eq!(third.id, 3);
    }

    #[test]
    fn test_list_sorts_starred_first_then_newest() {
        let now = Utc::now();
        let mut old_plain = note(1, "old plain", "x");
        old_plain.created_at = now - Duration::hours(3);
        let mut new_plain = note(2, "new plain", "x");
        new_plain.created_at = now - Duration::hours(1);
        let mut old_starred = note(3, "old starred", "x");
        old_starred.created_at = now - Duration::hours(4);
        old_starred.starred = true;
        let mut new_starred = note(4, "new starred", "x");
        new_starred.created_at = now - Duration::hours(2);
        new_starred.starred = true;

        let repo = seeded_repo(vec![old_plain, new_plain, old_starred, new_starred]);

        let ids: Vec<u64> = repo.list().unwrap().iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![4, 3, 2, 1]);
    }

    #[test]
    fn test_search_matches_title_or_body_case_insensitively() {
        let repo = seeded_repo(vec![
            note(1, "Shopping List", "bread and butter"),
            note(2, "Meeting", "discuss the BUDGET"),
            note(3, "Ideas", "a shopping app"),
        ]);

        let ids: Vec<u64> = repo.search("SHOPPING").unwrap().iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![1, 3]);

        let ids: Vec<u64> = repo.search("budget").unwrap().iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn test_search_empty_query_returns_all_in_stored_order() {
        let repo = seeded_repo(vec![note(1, "A", "x"), note(2, "B", "y")]);

        let ids: Vec<u64> = repo.search("").unwrap().iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_get_unknown_id_is_not_found() {
        let repo = repo();
        assert!(matches!(repo.get(42), Err(Error::NotFound(_))));
    }

    #[test]
    fn test_update_overwrites_fields_and_touches() {
        let repo = repo();
        let created = repo.create("Draft", "first pass", None).unwrap();

        std::thread::sleep(std::time::Duration::from_millis(10));
        let updated = repo
            .update(created.id, "Final", "second pass", Some("green".to_string()))
            .unwrap();

        assert_eq!(updated.title, "Final");
        assert_eq!(updated.body, "second pass");
        assert_eq!(updated.color, "green");
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at > created.updated_at);
    }

    #[test]
    fn test_update_without_color_resets_to_default() {
        let repo = repo();
        let created = repo
            .create("Draft", "text", Some("yellow".to_string()))
            .unwrap();

        let updated = repo.update(created.id, "Draft", "text", None).unwrap();
        assert_eq!(updated.color, "white");
    }

    #[test]
    fn test_update_rejects_empty_title_or_body() {
        let repo = seeded_repo(vec![note(1, "Keep", "me")]);

        assert!(matches!(
            repo.update(1, "", "body", None),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            repo.update(1, "title", "", None),
            Err(Error::InvalidInput(_))
        ));

        let unchanged = repo.get(1).unwrap();
        assert_eq!(unchanged.title, "Keep");
        assert_eq!(unchanged.body, "me");
    }

    #[test]
    fn test_update_unknown_id_leaves_store_unchanged() {
        let repo = seeded_repo(vec![note(1, "Keep", "me")]);

        assert!(matches!(
            repo.update(99, "New", "body", None),
            Err(Error::NotFound(_))
        ));
        assert_eq!(repo.get(1).unwrap().title, "Keep");
    }

    #[test]
    fn test_delete_removes_exactly_the_matching_note() {
        let repo = seeded_repo(vec![note(1, "A", "x"), note(2, "B", "y")]);

        repo.delete(1).unwrap();

        let remaining = repo.search("").unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, 2);
    }

    #[test]
    fn test_delete_unknown_id_is_a_no_op() {
        let repo = seeded_repo(vec![note(1, "A", "x")]);

        repo.delete(99).unwrap();

        assert_eq!(repo.search("").unwrap().len(), 1);
    }

    #[test]
    fn test_double_toggle_restores_starred_flag() {
        let repo = repo();
        let created = repo.create("A", "x", None).unwrap();

        let starred = repo.toggle_star(created.id).unwrap();
        assert!(starred.starred);

        let unstarred = repo.toggle_star(created.id).unwrap();
        assert!(!unstarred.starred);
    }

    #[test]
    fn test_toggle_star_touches_updated_at() {
        let repo = repo();
        let created = repo.create("A", "x", None).unwrap();

        std::thread::sleep(std::time::Duration::from_millis(10));
        let starred = repo.toggle_star(created.id).unwrap();

        assert!(starred.updated_at > created.updated_at);
        assert_eq!(starred.created_at, created.created_at);
    }

    #[test]
    fn test_toggle_star_unknown_id_is_not_found() {
        let repo = repo();
        assert!(matches!(repo.toggle_star(1), Err(Error::NotFound(_))));
    }
}
