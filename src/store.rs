//! In-memory event store with persistence write-through.

use std::sync::Arc;

use chrono::NaiveDate;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::error::{CalendarError, CalendarResult};
use crate::event::{CalendarEvent, EventKind};
use crate::persistence::EventPersistence;

/// Single source of truth for all events known to the calendar.
///
/// The collection is guarded by one mutex held for the whole of each
/// mutating operation, including the persistence write, so read-modify-write
/// cycles never interleave and operations on the same event id are observed
/// in issue order.
pub struct EventStore {
    persistence: Arc<dyn EventPersistence>,
    events: Mutex<Vec<CalendarEvent>>,
}

impl EventStore {
    pub fn new(persistence: Arc<dyn EventPersistence>) -> Self {
        EventStore {
            persistence,
            events: Mutex::new(Vec::new()),
        }
    }

    /// Populate the store from materialized events plus the persisted set.
    ///
    /// Deduplicates by id; the freshly materialized copy wins over a stale
    /// persisted one. Rebuilds from scratch, so calling it again (refresh)
    /// cannot accumulate duplicates. If the persistence read fails the store
    /// keeps the materialized set and the error is returned so the caller
    /// can warn.
    pub async fn load(&self, materialized: Vec<CalendarEvent>) -> CalendarResult<usize> {
        let mut events = self.events.lock().await;
        events.clear();

        for event in materialized {
            push_unique(&mut events, event);
        }

        let persisted = match self.persistence.load_events().await {
            Ok(persisted) => persisted,
            Err(err) => {
                warn!(error = %err, "persisted events unavailable, continuing with materialized set");
                return Err(err);
            }
        };

        for event in persisted {
            push_unique(&mut events, event);
        }

        debug!(count = events.len(), "event store loaded");

        Ok(events.len())
    }

    /// Insert a new event and persist the updated set.
    ///
    /// Duplicate ids are rejected before any state changes. A failed persist
    /// keeps the insert (the in-memory set stays authoritative for the
    /// session) and surfaces the error.
    pub async fn add(&self, event: CalendarEvent) -> CalendarResult<()> {
        let mut events = self.events.lock().await;

        if events.iter().any(|e| e.id == event.id) {
            return Err(CalendarError::DuplicateId(event.id));
        }

        debug!(event = %event.id, "adding event");
        events.push(event);

        self.persist(&events).await
    }

    /// Remove an event by id and persist the updated set.
    ///
    /// Materialized crop activities regenerate every session and cannot be
    /// removed. A missing id is a successful no-op; returns whether an
    /// event was actually removed.
    pub async fn remove(&self, event_id: &str) -> CalendarResult<bool> {
        let mut events = self.events.lock().await;

        let Some(pos) = events.iter().position(|e| e.id == event_id) else {
            return Ok(false);
        };

        if events[pos].kind == EventKind::CropActivity {
            return Err(CalendarError::TemplateEvent(event_id.to_string()));
        }

        debug!(event = event_id, "removing event");
        events.remove(pos);

        self.persist(&events).await?;

        Ok(true)
    }

    /// All events on the given calendar day, in insertion order.
    pub async fn events_for_day(&self, date: NaiveDate) -> Vec<CalendarEvent> {
        let events = self.events.lock().await;
        events.iter().filter(|e| e.date == date).cloned().collect()
    }

    /// Ordered copy of every event in the store.
    pub async fn snapshot(&self) -> Vec<CalendarEvent> {
        self.events.lock().await.clone()
    }

    async fn persist(&self, events: &[CalendarEvent]) -> CalendarResult<()> {
        if let Err(err) = self.persistence.save_events(events).await {
            warn!(error = %err, "persisting events failed, in-memory state kept");
            return Err(err);
        }

        Ok(())
    }
}

fn push_unique(events: &mut Vec<CalendarEvent>, event: CalendarEvent) {
    if events.iter().any(|e| e.id == event.id) {
        return;
    }
    events.push(event);
}
