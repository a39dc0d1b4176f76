//! Constants used throughout the crate.
//!
//! This module contains all constants used by the Glimpse core, organized
//! into logical groups. Having constants centralized makes them easier to
//! find, modify, and reference consistently.

// Application Metadata
/// The name of the application the core belongs to.
pub const APP_NAME: &str = "glimpse";

// Storage Keys
/// Key under which the entries array is persisted.
pub const ENTRIES_STORAGE_KEY: &str = "@glimpse_entries";
/// Key under which the categories array is persisted.
pub const CATEGORIES_STORAGE_KEY: &str = "@glimpse_categories";
/// Key under which the profile record is persisted.
pub const PROFILE_STORAGE_KEY: &str = "@glimpse_profile";

// Seed Data
/// Categories seeded the first time the categories key is found absent.
pub const DEFAULT_CATEGORIES: [&str; 4] = ["Personal", "Travel", "Food", "Work"];
/// Category assigned to an entry when the draft leaves it unspecified.
pub const DEFAULT_CATEGORY: &str = "Personal";
/// Title assigned to an entry when the draft title is blank.
pub const UNTITLED_ENTRY_TITLE: &str = "Untitled Entry";
/// Display name of the default profile used until a profile is loaded.
pub const DEFAULT_PROFILE_NAME: &str = "Glimpse User";

// Date/Time Logic
/// Date format string for ISO date format (YYYY-MM-DD).
pub const DATE_FORMAT_ISO: &str = "%Y-%m-%d";
/// Clock format stamped on entries at creation (12-hour, e.g. "03:45 PM").
pub const ENTRY_TIME_FORMAT: &str = "%I:%M %p";
/// Label for the group holding today's entries.
pub const TODAY_GROUP_LABEL: &str = "Today";
/// Label for the group holding yesterday's entries.
pub const YESTERDAY_GROUP_LABEL: &str = "Yesterday";
/// Label for the group holding entries whose date is missing or malformed.
pub const UNKNOWN_GROUP_LABEL: &str = "Unknown";
/// Sentinel returned by weekday statistics when there is no data.
pub const NO_ACTIVITY_SENTINEL: &str = "N/A";
/// Weekday names indexed by days-from-Sunday (0 = Sunday .. 6 = Saturday).
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

// Presentation Hints
/// Primary theme color applied to every derived entry icon.
pub const PRIMARY_COLOR: &str = "#007AFF";
/// Icon marker for entries in the Travel category.
pub const ICON_TRAVEL: &str = "airplane-outline";
/// Icon marker for entries in the Food category.
pub const ICON_FOOD: &str = "restaurant-outline";
/// Icon marker for entries in the Work category.
pub const ICON_WORK: &str = "briefcase-outline";
/// Icon marker for entries in any other category.
pub const ICON_DEFAULT: &str = "book-outline";

// Logging Configuration
/// Log format identifier for plain text.
pub const LOG_FORMAT_TEXT: &str = "text";
/// Log format identifier for JSON.
pub const LOG_FORMAT_JSON: &str = "json";
/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";
