//! Crop activity calendar core.
//!
//! Turns static, yearly-recurring crop-care templates into dated calendar
//! events, merges them with user-authored events, and keeps reminder
//! notifications matched to the event lifecycle. Presentation code consumes
//! the [`CropCalendar`] facade; template storage, durable persistence and
//! notification delivery are injected collaborators (see [`TemplateCatalog`],
//! [`EventPersistence`] and [`ReminderNotifier`]).

pub mod calendar;
pub mod catalog;
pub mod category;
pub mod config;
pub mod error;
pub mod event;
pub mod materialize;
pub mod notify;
pub mod persistence;
pub mod schedule;
pub mod store;

#[cfg(test)]
pub(crate) mod testing;

pub use calendar::CropCalendar;
pub use catalog::{StaticCatalog, TemplateCatalog};
pub use category::{CategoryIcon, EventCategory, category_for};
pub use config::CalendarConfig;
pub use error::{CalendarError, CalendarResult};
pub use event::{CalendarEvent, EventKind, NotificationKey};
pub use materialize::materialize;
pub use notify::{ReminderCoordinator, ReminderNotifier};
pub use persistence::EventPersistence;
pub use schedule::{ActivitySchedule, CropSchedule};
pub use store::EventStore;
