//! The calendar surface consumed by presentation code.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use chrono::{Local, NaiveDate, NaiveDateTime};
use tracing::{debug, warn};

use crate::catalog::TemplateCatalog;
use crate::category::{EventCategory, category_for};
use crate::config::CalendarConfig;
use crate::error::{CalendarError, CalendarResult};
use crate::event::CalendarEvent;
use crate::materialize::materialize;
use crate::notify::{ReminderCoordinator, ReminderNotifier};
use crate::persistence::EventPersistence;
use crate::store::EventStore;

/// The crop activity calendar.
///
/// Wires the template catalog, event store and reminder coordinator behind
/// the operations the calendar screen consumes. [`CropCalendar::load`] must
/// run before any other operation; everything else fails fast with
/// [`CalendarError::NotLoaded`] until it has.
///
/// Notification failures inside these operations are downgraded to warnings
/// (reminder delivery is best-effort); catalog and persistence failures are
/// returned, with in-memory state left authoritative for the session.
pub struct CropCalendar {
    catalog: Arc<dyn TemplateCatalog>,
    store: EventStore,
    reminders: ReminderCoordinator,
    config: CalendarConfig,
    loaded: AtomicBool,
}

impl CropCalendar {
    pub fn new(
        catalog: Arc<dyn TemplateCatalog>,
        persistence: Arc<dyn EventPersistence>,
        notifier: Arc<dyn ReminderNotifier>,
        config: CalendarConfig,
    ) -> Self {
        let reminders = ReminderCoordinator::new(notifier, config.reminder_time);

        CropCalendar {
            catalog,
            store: EventStore::new(persistence),
            reminders,
            config,
            loaded: AtomicBool::new(false),
        }
    }

    /// Materialize this season's crop activities and load persisted events.
    ///
    /// The only transition out of the unloaded state. Safe to call again to
    /// refresh: materialized ids are deterministic, the store deduplicates,
    /// and reminder scheduling is keyed. Returns the number of events in
    /// the store.
    pub async fn load(&self) -> CalendarResult<usize> {
        self.load_at(Local::now().naive_local()).await
    }

    /// [`CropCalendar::load`] with an explicit reference instant.
    pub async fn load_at(&self, now: NaiveDateTime) -> CalendarResult<usize> {
        let schedules = match self.catalog.crop_schedules().await {
            Ok(schedules) => schedules,
            Err(err) => {
                // The calendar still opens with the persisted user events;
                // the caller gets the catalog error for a retry affordance
                warn!(error = %err, "crop schedule catalog failed to load");
                if let Err(persist_err) = self.store.load(Vec::new()).await {
                    warn!(error = %persist_err, "persisted events also unavailable");
                }
                self.loaded.store(true, Ordering::Release);
                return Err(err);
            }
        };

        let materialized = materialize(&schedules, now, &self.config);
        let to_schedule = materialized.clone();

        let load_result = self.store.load(materialized).await;
        self.loaded.store(true, Ordering::Release);

        for event in &to_schedule {
            self.schedule_reminder(event).await;
        }

        let count = load_result?;
        debug!(count, "calendar loaded");

        Ok(count)
    }

    /// All events on the given calendar day, in stable insertion order.
    pub async fn events_for_day(&self, date: NaiveDate) -> CalendarResult<Vec<CalendarEvent>> {
        self.ensure_loaded()?;
        Ok(self.store.events_for_day(date).await)
    }

    /// Every event currently known to the calendar.
    pub async fn all_events(&self) -> CalendarResult<Vec<CalendarEvent>> {
        self.ensure_loaded()?;
        Ok(self.store.snapshot().await)
    }

    /// Create a user-authored event with a store-assigned id and return it.
    pub async fn add_event(
        &self,
        title: &str,
        description: &str,
        date: NaiveDate,
        is_reminder: bool,
    ) -> CalendarResult<CalendarEvent> {
        self.ensure_loaded()?;
        self.insert(CalendarEvent::custom(title, description, date, is_reminder))
            .await
    }

    /// Insert an event the caller built. The id is validated for uniqueness;
    /// prefer [`CropCalendar::add_event`] unless the id must round-trip from
    /// elsewhere.
    pub async fn add_event_with_id(&self, event: CalendarEvent) -> CalendarResult<CalendarEvent> {
        self.ensure_loaded()?;
        self.insert(event).await
    }

    /// Delete a user-authored event and cancel its notification.
    ///
    /// A missing id is a successful no-op; the cancel request is issued
    /// either way, since cancelling an unknown key is free. Materialized
    /// crop activities cannot be deleted.
    pub async fn remove_event(&self, event_id: &str) -> CalendarResult<()> {
        self.ensure_loaded()?;

        let removed = match self.store.remove(event_id).await {
            Ok(removed) => removed,
            Err(err @ CalendarError::Persistence(_)) => {
                // The event is already gone from the session's view, so its
                // notification must not survive it
                self.cancel_reminder(event_id).await;
                return Err(err);
            }
            Err(err) => return Err(err),
        };

        self.cancel_reminder(event_id).await;

        if !removed {
            debug!(event = event_id, "remove requested for unknown event id");
        }

        Ok(())
    }

    /// Display metadata for an event. Pure; usable before `load`.
    pub fn category_for(&self, event: &CalendarEvent) -> EventCategory {
        category_for(event)
    }

    async fn insert(&self, event: CalendarEvent) -> CalendarResult<CalendarEvent> {
        match self.store.add(event.clone()).await {
            Ok(()) => {}
            Err(err @ CalendarError::Persistence(_)) => {
                // The insert stood in memory, so the reminder is still
                // scheduled; the caller sees the persistence warning
                self.schedule_reminder(&event).await;
                return Err(err);
            }
            Err(err) => return Err(err),
        }

        self.schedule_reminder(&event).await;

        Ok(event)
    }

    async fn schedule_reminder(&self, event: &CalendarEvent) {
        if let Err(err) = self.reminders.event_added(event).await {
            warn!(event = %event.id, error = %err, "reminder scheduling failed");
        }
    }

    async fn cancel_reminder(&self, event_id: &str) {
        if let Err(err) = self.reminders.event_removed(event_id).await {
            warn!(event = event_id, error = %err, "reminder cancellation failed");
        }
    }

    fn ensure_loaded(&self) -> CalendarResult<()> {
        if self.loaded.load(Ordering::Acquire) {
            Ok(())
        } else {
            Err(CalendarError::NotLoaded)
        }
    }
}
