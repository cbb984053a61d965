use serde::{Deserialize, Serialize};

use crate::TileAttributes;

/// Maximum number of entries shown in the shortlist
pub const SHORTLIST_LIMIT: usize = 30;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortlistEntry {
    pub id: i64,
    #[serde(default)]
    pub attr_hash: String,
    #[serde(default)]
    pub attributes: TileAttributes,
}

/// Recently used and custom tiles, newest first.
#[derive(Clone, Debug, Default)]
pub struct Shortlist {
    entries: Vec<ShortlistEntry>,
}

impl Shortlist {
    pub fn new(entries: Vec<ShortlistEntry>) -> Self {
        let mut list = Self { entries: Vec::new() };
        for entry in entries.into_iter().rev() {
            list.push_front(entry);
        }
        list
    }

    /// Puts `entry` on top. Older entries with the same attribute hash are
    /// dropped and the list is trimmed to [`SHORTLIST_LIMIT`].
    pub fn push_front(&mut self, entry: ShortlistEntry) {
        if !entry.attr_hash.is_empty() {
            self.entries.retain(|e| e.attr_hash != entry.attr_hash);
        }
        self.entries.retain(|e| e.id != entry.id);
        self.entries.insert(0, entry);
        self.entries.truncate(SHORTLIST_LIMIT);
    }

    pub fn remove(&mut self, id: i64) -> Option<ShortlistEntry> {
        let idx = self.entries.iter().position(|e| e.id == id)?;
        Some(self.entries.remove(idx))
    }

    pub fn get(&self, id: i64) -> Option<&ShortlistEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn entries(&self) -> &[ShortlistEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
