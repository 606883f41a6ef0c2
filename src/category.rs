//! Display metadata for calendar events.

use crate::event::{CalendarEvent, EventKind};

/// Icon shown next to an event in the calendar screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryIcon {
    Sowing,
    Watering,
    Fertilizing,
    Harvesting,
    Pruning,
    PestControl,
    Tilling,
    Weeding,
    Weather,
    Bell,
    Task,
}

/// Display metadata for one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventCategory {
    pub icon: CategoryIcon,
    /// Hex RGB color for the event marker
    pub color: &'static str,
}

/// Map an event to its display category.
///
/// Pure and stateless: the icon comes from keyword matching over the
/// lower-cased title, with a generic task icon as fallback; the color is
/// keyed by event kind.
pub fn category_for(event: &CalendarEvent) -> EventCategory {
    let color = match event.kind {
        EventKind::CropActivity => "#2e7d32",
        EventKind::Custom => "#1565c0",
        EventKind::Reminder => "#ef6c00",
        EventKind::Weather => "#0288d1",
    };

    EventCategory {
        icon: icon_for(&event.title, event.kind),
        color,
    }
}

fn icon_for(title: &str, kind: EventKind) -> CategoryIcon {
    if kind == EventKind::Weather {
        return CategoryIcon::Weather;
    }

    let name = title.to_lowercase();

    if name.contains("sow") || name.contains("plant") || name.contains("transplant") {
        CategoryIcon::Sowing
    } else if name.contains("water") || name.contains("irrigat") {
        CategoryIcon::Watering
    } else if name.contains("fertili") || name.contains("manure") || name.contains("compost") {
        CategoryIcon::Fertilizing
    } else if name.contains("harvest") || name.contains("pick") {
        CategoryIcon::Harvesting
    } else if name.contains("prun") || name.contains("trim") {
        CategoryIcon::Pruning
    } else if name.contains("pest") || name.contains("spray") || name.contains("insect") {
        CategoryIcon::PestControl
    } else if name.contains("plough") || name.contains("plow") || name.contains("till") {
        CategoryIcon::Tilling
    } else if name.contains("weed") {
        CategoryIcon::Weeding
    } else if kind == EventKind::Reminder {
        CategoryIcon::Bell
    } else {
        CategoryIcon::Task
    }
}
