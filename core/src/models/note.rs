use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Color assigned to notes created without an explicit color choice.
pub const DEFAULT_COLOR: &str = "white";

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

/// A single note. Field names serialize in camelCase so the backing file
/// stays compatible with data written by earlier versions of the app.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: u64,
    pub title: String,
    pub body: String,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default)]
    pub starred: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Note {
    /// Create a new note with both timestamps set to now
    pub fn new(id: u64, title: String, body: String, color: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id,
            title,
            body,
            color: color.filter(|c| !c.is_empty()).unwrap_or_else(default_color),
            starred: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Refresh the updated timestamp
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Case-insensitive substring match over title or body
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.title.to_lowercase().contains(&query) || self.body.to_lowercase().contains(&query)
    }
}
