//! The mutable state stores owning the persisted journal data.
//!
//! Each concern gets exactly one store: [`entries::EntryStore`] for journal
//! entries and categories, [`profile::ProfileStore`] for the profile
//! singleton. A store is constructed once at startup with the storage
//! capability, loaded explicitly via `load()`, and then owns its in-memory
//! state for the life of the process. Consumers read through the accessor
//! methods and mutate only through the operations; the in-memory state is
//! authoritative and every mutation writes through to storage on a
//! best-effort basis.

pub mod entries;
pub mod profile;

pub use entries::EntryStore;
pub use profile::ProfileStore;
