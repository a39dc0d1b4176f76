//! The entry store: single source of truth for journal entries and
//! categories.
//!
//! All reads and writes of persisted entry data go through this store. The
//! in-memory state is mutated synchronously and is immediately visible to
//! subsequent reads; the matching storage write is awaited before the
//! operation returns, so the writes a store issues are applied in order.
//! Storage failures are logged and contained: no operation here returns an
//! error, and a failed write leaves the in-memory state untouched and
//! authoritative.

use crate::constants;
use crate::model::{Entry, EntryDraft};
use crate::storage::{load_json, save_json, KeyValueStore};
use chrono::Local;
use std::sync::Arc;
use tracing::{debug, warn};

/// Owns the entries array and the categories array for the process lifetime.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use glimpse_core::storage::MemoryStore;
/// use glimpse_core::store::EntryStore;
/// use glimpse_core::model::EntryDraft;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let mut store = EntryStore::new(Arc::new(MemoryStore::new()));
/// store.load().await;
///
/// store
///     .add_entry(EntryDraft {
///         title: "First day".to_string(),
///         content: "Started the journal.".to_string(),
///         ..Default::default()
///     })
///     .await;
///
/// assert_eq!(store.entries().len(), 1);
/// assert_eq!(store.categories(), ["Personal", "Travel", "Food", "Work"]);
/// # }
/// ```
pub struct EntryStore {
    storage: Arc<dyn KeyValueStore>,
    entries: Vec<Entry>,
    categories: Vec<String>,
    is_loading: bool,
    last_id: i64,
}

impl EntryStore {
    /// Creates a store over the given storage capability.
    ///
    /// The store starts empty and loading; call [`load`](Self::load) once at
    /// startup to adopt the persisted state.
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        EntryStore {
            storage,
            entries: Vec::new(),
            categories: Vec::new(),
            is_loading: true,
            last_id: 0,
        }
    }

    /// The entries, newest first.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// The category names, in insertion order.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// True until the initial [`load`](Self::load) has completed.
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Loads the persisted entries and categories.
    ///
    /// An absent entries key leaves the entries empty; an absent categories
    /// key seeds the four defaults and persists them immediately. Read and
    /// parse failures are logged and fall back to the same empty/default
    /// state. Loading always completes: `is_loading` is cleared even when
    /// every read fails.
    pub async fn load(&mut self) {
        match load_json::<Vec<Entry>>(self.storage.as_ref(), constants::ENTRIES_STORAGE_KEY).await {
            Ok(Some(entries)) => self.entries = entries,
            Ok(None) => debug!("no stored entries; starting with an empty journal"),
            Err(e) => warn!(error = %e, "failed to load entries; starting with an empty journal"),
        }

        match load_json::<Vec<String>>(self.storage.as_ref(), constants::CATEGORIES_STORAGE_KEY)
            .await
        {
            Ok(Some(categories)) => self.categories = categories,
            Ok(None) => {
                debug!("no stored categories; seeding defaults");
                self.reset_categories_to_defaults();
                self.persist_categories().await;
            }
            Err(e) => {
                warn!(error = %e, "failed to load categories; falling back to defaults");
                self.reset_categories_to_defaults();
            }
        }

        self.is_loading = false;
    }

    /// Creates an entry from the draft and prepends it to the journal.
    ///
    /// The store derives everything the draft does not carry: a unique id
    /// from the creation time, the local date and clock time, the fallback
    /// title and category, and the icon pair for the final category. The
    /// draft's category is adopted as-is without checking membership in the
    /// category set; registering the name is the caller's responsibility.
    ///
    /// Returns the created entry, or `None` for a draft with no content at
    /// all (a silent no-op, matching the invalid-input policy).
    pub async fn add_entry(&mut self, draft: EntryDraft) -> Option<Entry> {
        if draft.is_empty() {
            debug!("ignoring add_entry with an empty draft");
            return None;
        }

        let now = Local::now();
        let entry = Entry::from_draft(
            self.next_id(now.timestamp_millis()),
            now.format(constants::DATE_FORMAT_ISO).to_string(),
            now.format(constants::ENTRY_TIME_FORMAT).to_string(),
            draft,
        );

        self.entries.insert(0, entry.clone());
        self.persist_entries().await;
        Some(entry)
    }

    /// Removes the entry with the given id, if present.
    ///
    /// An unknown id leaves the entries unchanged; the resulting array is
    /// persisted either way.
    pub async fn delete_entry(&mut self, id: &str) {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        if self.entries.len() == before {
            debug!(id, "delete_entry for an id not in the journal");
        }
        self.persist_entries().await;
    }

    /// Empties the journal and restores the default categories.
    ///
    /// The entries key is removed from storage entirely rather than written
    /// as an empty array, and the category reset is persisted.
    pub async fn clear_all_entries(&mut self) {
        self.entries.clear();
        if let Err(e) = self.storage.remove(constants::ENTRIES_STORAGE_KEY).await {
            warn!(error = %e, "failed to remove stored entries; in-memory journal is cleared");
        }

        self.reset_categories_to_defaults();
        self.persist_categories().await;
    }

    /// Appends a category name, trimmed, if it is non-empty and not already
    /// present under case-insensitive comparison.
    pub async fn add_category(&mut self, name: &str) {
        let name = name.trim();
        if name.is_empty() {
            return;
        }

        let lowered = name.to_lowercase();
        if self
            .categories
            .iter()
            .any(|existing| existing.to_lowercase() == lowered)
        {
            return;
        }

        self.categories.push(name.to_string());
        self.persist_categories().await;
    }

    /// Returns an id for a new entry: the creation time in milliseconds,
    /// bumped past the previous id so rapid creation stays unique.
    fn next_id(&mut self, now_millis: i64) -> String {
        self.last_id = now_millis.max(self.last_id + 1);
        self.last_id.to_string()
    }

    fn reset_categories_to_defaults(&mut self) {
        self.categories = constants::DEFAULT_CATEGORIES
            .iter()
            .map(|name| name.to_string())
            .collect();
    }

    async fn persist_entries(&self) {
        if let Err(e) = save_json(
            self.storage.as_ref(),
            constants::ENTRIES_STORAGE_KEY,
            &self.entries,
        )
        .await
        {
            warn!(error = %e, "failed to persist entries; in-memory state remains authoritative");
        }
    }

    async fn persist_categories(&self) {
        if let Err(e) = save_json(
            self.storage.as_ref(),
            constants::CATEGORIES_STORAGE_KEY,
            &self.categories,
        )
        .await
        {
            warn!(error = %e, "failed to persist categories; in-memory state remains authoritative");
        }
    }
}
