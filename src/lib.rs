/*!
# Glimpse Core

Glimpse Core is the persistence layer of the Glimpse journaling app: the
state stores that load, mutate, and save the journal data, and the pure
functions that derive statistics from it. Users record dated, categorized
entries (title, text, optional photo reference, optional location) and the
surrounding UI browses them through a feed, timeline, search, and profile
statistics; that UI lives outside this crate and talks to it through the
stores' read/write contract.

## Core Features

- Journal entries and user-extensible categories, owned by a single
  `EntryStore` with write-through persistence
- The user profile singleton (name, avatar reference, onboarding flag),
  owned by a `ProfileStore`
- Derived statistics: grouping by date, streak counting, most-active-weekday
- Pure entry search
- A pluggable async key-value storage capability with in-memory and
  file-backed adapters

## Architecture

The codebase follows a modular architecture with clear separation of
concerns:

- `model`: the persisted record types and creation-time derivations
- `storage`: the key-value capability, JSON helpers, and adapters
- `store`: the entry and profile stores
- `stats` / `search`: pure functions over the in-memory entries
- `errors`: error handling infrastructure
- `logging`: optional tracing-subscriber setup for hosts

## Usage Example

```rust
use std::sync::Arc;
use glimpse_core::model::EntryDraft;
use glimpse_core::storage::MemoryStore;
use glimpse_core::store::EntryStore;

# #[tokio::main(flavor = "current_thread")]
# async fn main() {
let storage = Arc::new(MemoryStore::new());
let mut entries = EntryStore::new(storage);
entries.load().await;

entries
    .add_entry(EntryDraft {
        title: "First day".to_string(),
        content: "Started the journal.".to_string(),
        ..Default::default()
    })
    .await;

assert_eq!(entries.entries().len(), 1);
# }
```
*/

/// Constants used across the crate
pub mod constants;
/// Error types and utilities for error handling
pub mod errors;
/// Logging initialization helpers for host applications
pub mod logging;
/// Persisted record types and creation-time derivations
pub mod model;
/// Pure entry search
pub mod search;
/// Derived statistics over entry collections
pub mod stats;
/// The key-value storage capability and its adapters
pub mod storage;
/// The entry and profile state stores
pub mod store;

// Re-export important types for convenience
pub use errors::{StorageError, StorageResult};
pub use model::{DayEntries, Entry, EntryDraft, Profile, ProfileUpdate, SearchResult};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
pub use store::{EntryStore, ProfileStore};
