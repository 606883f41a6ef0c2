//! Durable event storage collaborator.

use async_trait::async_trait;

use crate::error::CalendarResult;
use crate::event::CalendarEvent;

/// Durable storage for calendar events.
///
/// Whole-collection semantics: `save_events` replaces the stored set, and a
/// later `load_events` returns the latest saved set. Implementations may
/// write incrementally as long as that read-after-write property holds.
///
/// The event store treats its in-memory collection as authoritative for the
/// session; a failed write here is surfaced as a warning, not a rollback.
#[async_trait]
pub trait EventPersistence: Send + Sync {
    async fn load_events(&self) -> CalendarResult<Vec<CalendarEvent>>;

    async fn save_events(&self, events: &[CalendarEvent]) -> CalendarResult<()>;
}
