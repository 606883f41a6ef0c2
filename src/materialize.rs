//! Expansion of crop templates into dated calendar events.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};
use tracing::{debug, warn};

use crate::config::CalendarConfig;
use crate::event::{CalendarEvent, EventKind};
use crate::schedule::CropSchedule;

/// Expand every activity template into concrete events around `now`.
///
/// Pure and deterministic: the same templates, instant and config always
/// produce the same event ids, so repeated materialization within a session
/// is safe (the store deduplicates by id).
///
/// The recency window keeps activities up to `recency_window_days` in the
/// past visible; everything older is dropped for the session. With
/// `year_rollover` enabled (the default), candidates are generated for the
/// current and the next year and a rolling one-year window selects, so a
/// December session already shows January's tasks and each activity appears
/// exactly once. With it disabled, only current-year candidates on or after
/// the window start are kept.
pub fn materialize(
    schedules: &[CropSchedule],
    now: NaiveDateTime,
    config: &CalendarConfig,
) -> Vec<CalendarEvent> {
    let today = now.date();
    let window_start = today - Duration::days(config.recency_window_days);
    let window_end = window_start + Duration::days(365);

    let mut years = vec![today.year()];
    if config.year_rollover {
        years.push(today.year() + 1);
    }

    let mut events = Vec::new();

    for crop in schedules {
        for activity in &crop.activities {
            for &year in &years {
                let Some(date) = NaiveDate::from_ymd_opt(year, activity.month, activity.day)
                else {
                    // e.g. June 31, or Feb 29 outside leap years
                    warn!(
                        crop = %crop.crop_name,
                        activity = %activity.activity,
                        month = activity.month,
                        day = activity.day,
                        year,
                        "skipping activity date that does not exist"
                    );
                    continue;
                };

                if date < window_start {
                    continue;
                }
                if config.year_rollover && date >= window_end {
                    continue;
                }

                events.push(CalendarEvent {
                    id: CalendarEvent::activity_id(&crop.crop_name, &activity.activity, year),
                    title: activity.activity.clone(),
                    description: activity.description.clone(),
                    date,
                    kind: EventKind::CropActivity,
                    is_reminder: true,
                    crop_name: Some(crop.crop_name.clone()),
                });
            }
        }
    }

    debug!(count = events.len(), "materialized crop activities");

    events
}
