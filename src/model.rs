//! Data model for the Glimpse core.
//!
//! This module defines the records the persistence layer owns: journal
//! entries, the profile singleton, and the derived row/group shapes consumed
//! by downstream views. Serialized field names are camelCase so the JSON
//! written to storage matches the persisted record layout (`imageUri`,
//! `iconColor`, `avatarUri`, `hasOnboarded`).

use crate::constants;
use serde::{Deserialize, Serialize};

/// One journal record.
///
/// Entries are immutable once created: the store constructs them in
/// [`add_entry`](crate::store::entries::EntryStore::add_entry) and they are
/// only ever removed, never edited.
///
/// # Examples
///
/// ```
/// use glimpse_core::model::{Entry, EntryDraft};
///
/// let entry = Entry::from_draft(
///     "1704067200000".to_string(),
///     "2024-01-01".to_string(),
///     "12:00 AM".to_string(),
///     EntryDraft {
///         title: "First entry".to_string(),
///         content: "Hello".to_string(),
///         ..Default::default()
///     },
/// );
/// assert_eq!(entry.category, "Personal");
/// assert_eq!(entry.icon, "book-outline");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    /// Unique identifier assigned at creation (creation time in milliseconds).
    pub id: String,
    /// Calendar date of creation, `YYYY-MM-DD` in the local timezone.
    /// Records persisted before the field existed deserialize as empty.
    #[serde(default)]
    pub date: String,
    /// Clock time of creation, 12-hour format.
    #[serde(default)]
    pub time: String,
    /// Entry title; never blank ("Untitled Entry" is substituted at creation).
    pub title: String,
    /// Free-text body; may be empty when another field carries the content.
    pub content: String,
    /// Display icon derived from the category at creation.
    pub icon: String,
    /// Display color for the icon.
    pub icon_color: String,
    /// Opaque reference to a locally picked image, if any.
    #[serde(default)]
    pub image_uri: Option<String>,
    /// Free-text place description, if any.
    #[serde(default)]
    pub location: Option<String>,
    /// Name of the category the entry belongs to.
    #[serde(default = "default_category")]
    pub category: String,
}

fn default_category() -> String {
    constants::DEFAULT_CATEGORY.to_string()
}

/// User-supplied fields for a new entry.
///
/// Everything the store derives itself (id, date, time, icon) is absent here;
/// see [`Entry::from_draft`] for the derivation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryDraft {
    /// Title; blank falls back to "Untitled Entry".
    pub title: String,
    /// Free-text body.
    pub content: String,
    /// Opaque reference to a locally picked image.
    pub image_uri: Option<String>,
    /// Free-text place description.
    pub location: Option<String>,
    /// Category name; `None` falls back to "Personal".
    pub category: Option<String>,
}

impl EntryDraft {
    /// Returns true when every field is empty, in which case the store
    /// treats the draft as a silent no-op.
    pub fn is_empty(&self) -> bool {
        self.title.trim().is_empty()
            && self.content.trim().is_empty()
            && self.image_uri.is_none()
            && self.location.is_none()
    }
}

impl Entry {
    /// Builds an entry from a draft plus the store-assigned id and timestamps.
    ///
    /// Applies the creation-time defaults: blank title becomes
    /// "Untitled Entry", missing category becomes "Personal", and the icon
    /// pair is derived from the final category via [`icon_for_category`].
    pub fn from_draft(id: String, date: String, time: String, draft: EntryDraft) -> Self {
        let title = if draft.title.trim().is_empty() {
            constants::UNTITLED_ENTRY_TITLE.to_string()
        } else {
            draft.title
        };
        let category = draft
            .category
            .unwrap_or_else(|| constants::DEFAULT_CATEGORY.to_string());
        let (icon, icon_color) = icon_for_category(&category);

        Entry {
            id,
            date,
            time,
            title,
            content: draft.content,
            icon: icon.to_string(),
            icon_color: icon_color.to_string(),
            image_uri: draft.image_uri,
            location: draft.location,
            category,
        }
    }
}

/// Returns the `(icon, color)` display pair for a category name.
///
/// The mapping is a fixed table keyed by exact name: `Travel`, `Food` and
/// `Work` have dedicated markers and every other category, including
/// user-added ones, falls through to the notebook marker. The color is
/// always the primary theme color.
pub fn icon_for_category(category: &str) -> (&'static str, &'static str) {
    let icon = match category {
        "Travel" => constants::ICON_TRAVEL,
        "Food" => constants::ICON_FOOD,
        "Work" => constants::ICON_WORK,
        _ => constants::ICON_DEFAULT,
    };
    (icon, constants::PRIMARY_COLOR)
}

/// The single local user's profile record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Display name.
    pub name: String,
    /// Opaque reference to a locally picked avatar image, if any.
    #[serde(default)]
    pub avatar_uri: Option<String>,
    /// Whether the user has completed the first-run flow.
    #[serde(default)]
    pub has_onboarded: bool,
}

impl Default for Profile {
    fn default() -> Self {
        Profile {
            name: constants::DEFAULT_PROFILE_NAME.to_string(),
            avatar_uri: None,
            has_onboarded: false,
        }
    }
}

/// A partial profile change, merged field-wise by
/// [`update_profile`](crate::store::profile::ProfileStore::update_profile).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileUpdate {
    /// New display name, if changing.
    pub name: Option<String>,
    /// New avatar reference, if changing.
    pub avatar_uri: Option<String>,
    /// New onboarding flag, if changing.
    pub has_onboarded: Option<bool>,
}

impl Profile {
    /// Returns a copy of the profile with the update's present fields applied.
    pub fn merged(&self, update: &ProfileUpdate) -> Profile {
        Profile {
            name: update.name.clone().unwrap_or_else(|| self.name.clone()),
            avatar_uri: update.avatar_uri.clone().or_else(|| self.avatar_uri.clone()),
            has_onboarded: update.has_onboarded.unwrap_or(self.has_onboarded),
        }
    }
}

/// One date group produced by [`group_by_date`](crate::stats::group_by_date):
/// a display label plus the entries sharing that date.
#[derive(Debug, Clone, PartialEq)]
pub struct DayEntries {
    /// Display label: "Today", "Yesterday", the raw date, or "Unknown".
    pub title: String,
    /// The group's entries, in their stored (newest-first) order.
    pub data: Vec<Entry>,
}

/// A search hit: the subset of entry fields a result row displays.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// Id of the matching entry.
    pub id: String,
    /// Title of the matching entry.
    pub title: String,
    /// Date of the matching entry.
    pub date: String,
    /// Display icon of the matching entry.
    pub icon: String,
    /// Display color of the matching entry's icon.
    pub icon_color: String,
}

impl From<&Entry> for SearchResult {
    fn from(entry: &Entry) -> Self {
        SearchResult {
            id: entry.id.clone(),
            title: entry.title.clone(),
            date: entry.date.clone(),
            icon: entry.icon.clone(),
            icon_color: entry.icon_color.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str, content: &str) -> EntryDraft {
        EntryDraft {
            title: title.to_string(),
            content: content.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_from_draft_applies_defaults() {
        let entry = Entry::from_draft(
            "1".to_string(),
            "2024-01-05".to_string(),
            "09:30 AM".to_string(),
            draft("   ", "some text"),
        );
        assert_eq!(entry.title, "Untitled Entry");
        assert_eq!(entry.category, "Personal");
        assert_eq!(entry.icon, "book-outline");
        assert_eq!(entry.icon_color, "#007AFF");
    }

    #[test]
    fn test_from_draft_keeps_explicit_fields() {
        let entry = Entry::from_draft(
            "2".to_string(),
            "2024-01-05".to_string(),
            "09:30 AM".to_string(),
            EntryDraft {
                title: "Lunch".to_string(),
                content: "Ramen".to_string(),
                location: Some("Downtown".to_string()),
                category: Some("Food".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(entry.title, "Lunch");
        assert_eq!(entry.category, "Food");
        assert_eq!(entry.icon, "restaurant-outline");
        assert_eq!(entry.location.as_deref(), Some("Downtown"));
    }

    #[test]
    fn test_icon_table_fallback() {
        assert_eq!(icon_for_category("Travel").0, "airplane-outline");
        assert_eq!(icon_for_category("Food").0, "restaurant-outline");
        assert_eq!(icon_for_category("Work").0, "briefcase-outline");
        // User-added categories always fall through to the default marker.
        assert_eq!(icon_for_category("Hiking").0, "book-outline");
        assert_eq!(icon_for_category("travel").0, "book-outline");
    }

    #[test]
    fn test_empty_draft_detection() {
        assert!(EntryDraft::default().is_empty());
        assert!(!draft("", "note").is_empty());
        assert!(!EntryDraft {
            image_uri: Some("file:///photo.jpg".to_string()),
            ..Default::default()
        }
        .is_empty());
    }

    #[test]
    fn test_entry_serializes_with_camel_case_keys() {
        let entry = Entry::from_draft(
            "3".to_string(),
            "2024-01-05".to_string(),
            "09:30 AM".to_string(),
            draft("Trip", "Packing day"),
        );
        let json = serde_json::to_value(&entry).unwrap();
        assert!(json.get("iconColor").is_some());
        assert!(json.get("imageUri").is_some());
        assert!(json.get("icon_color").is_none());
    }

    #[test]
    fn test_entry_deserializes_legacy_record_without_date() {
        let json = r##"{"id":"9","title":"Old","content":"","icon":"book-outline","iconColor":"#007AFF"}"##;
        let entry: Entry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.date, "");
        assert_eq!(entry.category, "Personal");
        assert!(entry.image_uri.is_none());
    }

    #[test]
    fn test_profile_merge() {
        let profile = Profile::default();
        let merged = profile.merged(&ProfileUpdate {
            name: Some("Ada".to_string()),
            ..Default::default()
        });
        assert_eq!(merged.name, "Ada");
        assert_eq!(merged.avatar_uri, None);
        assert!(!merged.has_onboarded);
    }

    #[test]
    fn test_profile_round_trip_uses_camel_case() {
        let profile = Profile {
            name: "Ada".to_string(),
            avatar_uri: Some("file:///avatar.png".to_string()),
            has_onboarded: true,
        };
        let json = serde_json::to_string(&profile).unwrap();
        assert!(json.contains("avatarUri"));
        assert!(json.contains("hasOnboarded"));
        let back: Profile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, profile);
    }
}
