//! Calendar event types.
//!
//! A [`CalendarEvent`] is the unit the whole subsystem operates on, whether
//! it was materialized from a crop template or authored by the user.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// What kind of entry a calendar event is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EventKind {
    /// Materialized from a crop's activity template
    CropActivity,
    /// User-authored
    Custom,
    Reminder,
    Weather,
}

/// A dated calendar entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub kind: EventKind,
    /// Whether this event participates in the reminder lifecycle
    pub is_reminder: bool,
    /// Originating crop, set only on materialized events
    pub crop_name: Option<String>,
}

impl CalendarEvent {
    /// Deterministic id for a materialized activity. The same crop, activity
    /// and year always map to the same id, so re-materializing within a
    /// session cannot introduce duplicates.
    pub fn activity_id(crop_name: &str, activity: &str, year: i32) -> String {
        format!("{}_{}_{}", crop_name, activity, year)
    }

    /// A user-authored event with a fresh store-assigned id.
    pub fn custom(title: &str, description: &str, date: NaiveDate, is_reminder: bool) -> Self {
        CalendarEvent {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            description: description.to_string(),
            date,
            kind: EventKind::Custom,
            is_reminder,
            crop_name: None,
        }
    }

    /// The instant a reminder for this event fires: the event's date at the
    /// configured wall-clock time.
    pub fn notify_at(&self, reminder_time: NaiveTime) -> NaiveDateTime {
        self.date.and_time(reminder_time)
    }
}

/// Key the external notifier is addressed by.
///
/// Derived deterministically from the event id so a later cancellation can
/// find the original request without any stored mapping.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NotificationKey(String);

impl NotificationKey {
    pub fn for_event(event_id: &str) -> Self {
        NotificationKey(format!("cropcal-{}", event_id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NotificationKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
