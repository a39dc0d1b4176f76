//! The profile store: single source of truth for the user profile singleton.
//!
//! Mirrors the entry store's contract: synchronous in-memory mutation,
//! write-through persistence awaited within each operation, storage failures
//! logged and contained.

use crate::constants;
use crate::model::{Profile, ProfileUpdate};
use crate::storage::{load_json, save_json, KeyValueStore};
use std::sync::Arc;
use tracing::{debug, warn};

/// Owns the profile record for the process lifetime.
pub struct ProfileStore {
    storage: Arc<dyn KeyValueStore>,
    profile: Option<Profile>,
    is_loading: bool,
}

impl ProfileStore {
    /// Creates a store over the given storage capability.
    ///
    /// No profile is present until [`load`](Self::load) runs.
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        ProfileStore {
            storage,
            profile: None,
            is_loading: true,
        }
    }

    /// The loaded profile, or `None` before the first load completes.
    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    /// True until the initial [`load`](Self::load) has completed.
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Loads the persisted profile.
    ///
    /// A stored record is adopted as-is. An absent key is first-run: the
    /// default profile is adopted and persisted so the next launch finds it.
    /// A read or parse failure falls back to the default profile in memory
    /// without persisting it, so a transient failure cannot clobber a stored
    /// record. Loading always completes: `is_loading` is cleared on every
    /// path.
    pub async fn load(&mut self) {
        match load_json::<Profile>(self.storage.as_ref(), constants::PROFILE_STORAGE_KEY).await {
            Ok(Some(profile)) => self.profile = Some(profile),
            Ok(None) => {
                debug!("no stored profile; seeding the default");
                let default = Profile::default();
                self.profile = Some(default.clone());
                self.persist(&default).await;
            }
            Err(e) => {
                warn!(error = %e, "failed to load profile; falling back to the default");
                self.profile = Some(Profile::default());
            }
        }

        self.is_loading = false;
    }

    /// Merges the update into the current profile and persists the result.
    ///
    /// Before the first load completes there is no profile to merge into; in
    /// that window the update is dropped unless it carries `has_onboarded`,
    /// in which case it is merged into the default profile (this is the
    /// onboarding flow completing before a slow first load).
    pub async fn update_profile(&mut self, update: ProfileUpdate) {
        let base = match &self.profile {
            Some(profile) => profile.clone(),
            None => {
                if update.has_onboarded.is_none() {
                    debug!("ignoring profile update before load completed");
                    return;
                }
                Profile::default()
            }
        };

        let merged = base.merged(&update);
        self.profile = Some(merged.clone());
        self.persist(&merged).await;
    }

    /// Resets the profile to the default record and persists it.
    ///
    /// The reset clears `has_onboarded`, so an onboarding gate observing the
    /// profile re-triggers. This is the logout/reset path.
    pub async fn clear_profile_data(&mut self) {
        let default = Profile::default();
        self.profile = Some(default.clone());
        self.persist(&default).await;
    }

    async fn persist(&self, profile: &Profile) {
        if let Err(e) = save_json(
            self.storage.as_ref(),
            constants::PROFILE_STORAGE_KEY,
            profile,
        )
        .await
        {
            warn!(error = %e, "failed to persist profile; in-memory state remains authoritative");
        }
    }
}
