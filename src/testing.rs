//! In-memory collaborator fakes shared across the test modules.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use tokio::sync::Mutex;

use crate::catalog::TemplateCatalog;
use crate::error::{CalendarError, CalendarResult};
use crate::event::{CalendarEvent, EventKind, NotificationKey};
use crate::notify::ReminderNotifier;
use crate::persistence::EventPersistence;
use crate::schedule::CropSchedule;

pub fn make_custom_event(id: &str, title: &str, date: NaiveDate) -> CalendarEvent {
    CalendarEvent {
        id: id.to_string(),
        title: title.to_string(),
        description: String::new(),
        date,
        kind: EventKind::Custom,
        is_reminder: true,
        crop_name: None,
    }
}

pub fn make_activity_event(crop: &str, activity: &str, year: i32, date: NaiveDate) -> CalendarEvent {
    CalendarEvent {
        id: CalendarEvent::activity_id(crop, activity, year),
        title: activity.to_string(),
        description: String::new(),
        date,
        kind: EventKind::CropActivity,
        is_reminder: true,
        crop_name: Some(crop.to_string()),
    }
}

/// Catalog returning a fixed set of schedules, or failing on demand.
#[derive(Default)]
pub struct FakeCatalog {
    pub schedules: Vec<CropSchedule>,
    pub fail: bool,
}

#[async_trait]
impl TemplateCatalog for FakeCatalog {
    async fn crop_schedules(&self) -> CalendarResult<Vec<CropSchedule>> {
        if self.fail {
            return Err(CalendarError::CatalogLoad("catalog offline".into()));
        }
        Ok(self.schedules.clone())
    }
}

/// Persistence backed by a vec, with failure switches for resilience tests.
#[derive(Default)]
pub struct MemoryPersistence {
    pub stored: Mutex<Vec<CalendarEvent>>,
    pub fail_loads: AtomicBool,
    pub fail_saves: AtomicBool,
}

#[async_trait]
impl EventPersistence for MemoryPersistence {
    async fn load_events(&self) -> CalendarResult<Vec<CalendarEvent>> {
        if self.fail_loads.load(Ordering::Relaxed) {
            return Err(CalendarError::Persistence("read failed".into()));
        }
        Ok(self.stored.lock().await.clone())
    }

    async fn save_events(&self, events: &[CalendarEvent]) -> CalendarResult<()> {
        if self.fail_saves.load(Ordering::Relaxed) {
            return Err(CalendarError::Persistence("write failed".into()));
        }
        *self.stored.lock().await = events.to_vec();
        Ok(())
    }
}

/// Notifier that logs every schedule and cancel call.
#[derive(Default)]
pub struct RecordingNotifier {
    pub schedule_calls: Mutex<Vec<(NotificationKey, String, NaiveDateTime)>>,
    pub cancel_calls: Mutex<Vec<NotificationKey>>,
    pub fail_schedules: AtomicBool,
}

#[async_trait]
impl ReminderNotifier for RecordingNotifier {
    async fn schedule(
        &self,
        key: &NotificationKey,
        title: &str,
        _body: &str,
        at: NaiveDateTime,
    ) -> CalendarResult<()> {
        if self.fail_schedules.load(Ordering::Relaxed) {
            return Err(CalendarError::Notification("scheduling failed".into()));
        }
        self.schedule_calls
            .lock()
            .await
            .push((key.clone(), title.to_string(), at));
        Ok(())
    }

    async fn cancel(&self, key: &NotificationKey) -> CalendarResult<()> {
        self.cancel_calls.lock().await.push(key.clone());
        Ok(())
    }
}
