//! Per-crop yearly activity templates.
//!
//! Templates are year-agnostic: they name a month and day, and the
//! materializer binds them to concrete years each session.

use serde::{Deserialize, Serialize};

use crate::error::{CalendarError, CalendarResult};

/// A single recurring farming task, e.g. "fertilize on day 15 of month 3".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivitySchedule {
    pub activity: String,
    pub description: String,
    /// Month of year, 1-12
    pub month: u32,
    /// Day of month, 1-31. Whether the day exists in a given month and year
    /// is only decidable at materialization time.
    pub day: u32,
}

impl ActivitySchedule {
    pub fn new(activity: &str, description: &str, month: u32, day: u32) -> CalendarResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidSchedule(format!(
                "month {} out of range for '{}'",
                month, activity
            )));
        }
        if !(1..=31).contains(&day) {
            return Err(CalendarError::InvalidSchedule(format!(
                "day {} out of range for '{}'",
                day, activity
            )));
        }

        Ok(ActivitySchedule {
            activity: activity.to_string(),
            description: description.to_string(),
            month,
            day,
        })
    }
}

/// A crop's full yearly care calendar: the crop name plus its activities in
/// season order. Never mutated at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropSchedule {
    pub crop_name: String,
    pub activities: Vec<ActivitySchedule>,
}

impl CropSchedule {
    pub fn new(crop_name: &str, activities: Vec<ActivitySchedule>) -> Self {
        CropSchedule {
            crop_name: crop_name.to_string(),
            activities,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_row_is_accepted() {
        let row = ActivitySchedule::new("Sowing", "Sow seeds", 11, 15).unwrap();
        assert_eq!(row.month, 11);
        assert_eq!(row.day, 15);
    }

    #[test]
    fn month_out_of_range_is_rejected() {
        assert!(ActivitySchedule::new("Sowing", "", 0, 15).is_err());
        assert!(ActivitySchedule::new("Sowing", "", 13, 15).is_err());
    }

    #[test]
    fn day_out_of_range_is_rejected() {
        assert!(ActivitySchedule::new("Sowing", "", 11, 0).is_err());
        assert!(ActivitySchedule::new("Sowing", "", 11, 32).is_err());
    }

    #[test]
    fn day_31_is_representable_in_any_month() {
        // June 31 does not exist, but the template row is still valid;
        // the materializer decides what to do with it per target year.
        assert!(ActivitySchedule::new("Weeding", "", 6, 31).is_ok());
    }
}
