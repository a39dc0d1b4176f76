//! Derived statistics over entry collections.
//!
//! Pure functions only: no I/O, no mutation of inputs, recomputed on every
//! call. Each function takes the reference date ("today") explicitly so the
//! logic stays deterministic and testable; hosts pass
//! `Local::now().date_naive()`.

use crate::constants;
use crate::model::{DayEntries, Entry};
use chrono::{Datelike, Duration, NaiveDate};
use std::collections::BTreeMap;

/// Partitions entries into per-date groups, most recent date first.
///
/// The group for `today` is labeled "Today" and the one for the day before
/// "Yesterday"; every other group uses the date itself as its label. Entries
/// whose date is missing or malformed collect in a trailing "Unknown" group.
/// Within a group the entries keep their stored (newest-first) order.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use glimpse_core::stats::group_by_date;
///
/// let today = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
/// let groups = group_by_date(&[], today);
/// assert!(groups.is_empty());
/// ```
pub fn group_by_date(entries: &[Entry], today: NaiveDate) -> Vec<DayEntries> {
    let mut by_date: BTreeMap<NaiveDate, Vec<Entry>> = BTreeMap::new();
    let mut unknown: Vec<Entry> = Vec::new();

    for entry in entries {
        match parse_date(&entry.date) {
            Some(date) => by_date.entry(date).or_default().push(entry.clone()),
            None => unknown.push(entry.clone()),
        }
    }

    let yesterday = today - Duration::days(1);
    let mut groups: Vec<DayEntries> = by_date
        .into_iter()
        .rev()
        .map(|(date, data)| {
            let title = if date == today {
                constants::TODAY_GROUP_LABEL.to_string()
            } else if date == yesterday {
                constants::YESTERDAY_GROUP_LABEL.to_string()
            } else {
                date.format(constants::DATE_FORMAT_ISO).to_string()
            };
            DayEntries { title, data }
        })
        .collect();

    if !unknown.is_empty() {
        groups.push(DayEntries {
            title: constants::UNKNOWN_GROUP_LABEL.to_string(),
            data: unknown,
        });
    }

    groups
}

/// Counts the consecutive calendar days with at least one entry, walking
/// backward from the most recent date.
///
/// The streak is anchored at the present: it is 0 unless the most recent
/// date is `today` or yesterday. Duplicate dates collapse, malformed dates
/// are ignored, and the walk stops at the first gap wider than one day.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use glimpse_core::stats::compute_streak;
///
/// let today = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
/// let dates = ["2024-01-05", "2024-01-04", "2024-01-03"];
/// assert_eq!(compute_streak(&dates, today), 3);
/// ```
pub fn compute_streak<S: AsRef<str>>(dates: &[S], today: NaiveDate) -> u32 {
    let mut unique: Vec<NaiveDate> = dates
        .iter()
        .filter_map(|raw| parse_date(raw.as_ref()))
        .collect();
    unique.sort_unstable();
    unique.dedup();
    unique.reverse();

    let most_recent = match unique.first() {
        Some(date) => *date,
        None => return 0,
    };

    // A streak that ended before yesterday is over.
    if today - most_recent > Duration::days(1) {
        return 0;
    }

    let mut streak = 1;
    for pair in unique.windows(2) {
        if pair[0] - pair[1] == Duration::days(1) {
            streak += 1;
        } else {
            break;
        }
    }
    streak
}

/// Returns the name of the weekday with the most entries.
///
/// Dates are bucketed by day-of-week (Sunday = 0 through Saturday = 6); ties
/// resolve to the lowest weekday index. Returns "N/A" when no date is
/// usable.
pub fn most_active_weekday<S: AsRef<str>>(dates: &[S]) -> String {
    let mut counts = [0u32; 7];
    for raw in dates {
        if let Some(date) = parse_date(raw.as_ref()) {
            counts[date.weekday().num_days_from_sunday() as usize] += 1;
        }
    }

    if counts.iter().all(|&count| count == 0) {
        return constants::NO_ACTIVITY_SENTINEL.to_string();
    }

    let mut best = 0;
    for (index, &count) in counts.iter().enumerate() {
        if count > counts[best] {
            best = index;
        }
    }
    constants::WEEKDAY_NAMES[best].to_string()
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, constants::DATE_FORMAT_ISO).ok()
}
