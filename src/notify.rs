//! Reminder notification scheduling.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{NaiveDateTime, NaiveTime};
use tracing::debug;

use crate::error::CalendarResult;
use crate::event::{CalendarEvent, NotificationKey};

/// External notification service.
///
/// Requests are keyed: scheduling the same key twice replaces the earlier
/// request rather than adding a second one, and `cancel` must be an
/// error-free no-op for unknown keys. Whether a past-dated `schedule`
/// request fires immediately or is dropped is the notifier's policy; the
/// coordinator does not pre-filter.
#[async_trait]
pub trait ReminderNotifier: Send + Sync {
    async fn schedule(
        &self,
        key: &NotificationKey,
        title: &str,
        body: &str,
        at: NaiveDateTime,
    ) -> CalendarResult<()>;

    async fn cancel(&self, key: &NotificationKey) -> CalendarResult<()>;
}

/// Keeps at most one scheduled notification per reminder-flagged event,
/// matched to the event's lifecycle.
pub struct ReminderCoordinator {
    notifier: Arc<dyn ReminderNotifier>,
    reminder_time: NaiveTime,
}

impl ReminderCoordinator {
    pub fn new(notifier: Arc<dyn ReminderNotifier>, reminder_time: NaiveTime) -> Self {
        ReminderCoordinator {
            notifier,
            reminder_time,
        }
    }

    /// Request a notification for a newly added event, if it is a reminder.
    pub async fn event_added(&self, event: &CalendarEvent) -> CalendarResult<()> {
        if !event.is_reminder {
            return Ok(());
        }

        let key = NotificationKey::for_event(&event.id);
        debug!(event = %event.id, key = %key, "scheduling reminder");

        self.notifier
            .schedule(
                &key,
                &event.title,
                &event.description,
                event.notify_at(self.reminder_time),
            )
            .await
    }

    /// Cancel the notification for a removed event.
    ///
    /// Issued for every removal, reminder or not: cancelling an unknown key
    /// is a no-op at the notifier, which keeps removal to a single pass.
    pub async fn event_removed(&self, event_id: &str) -> CalendarResult<()> {
        let key = NotificationKey::for_event(event_id);
        debug!(event = event_id, key = %key, "cancelling reminder");

        self.notifier.cancel(&key).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{RecordingNotifier, make_custom_event};
    use chrono::NaiveDate;

    fn coordinator(notifier: &Arc<RecordingNotifier>) -> ReminderCoordinator {
        ReminderCoordinator::new(
            Arc::clone(notifier) as Arc<dyn ReminderNotifier>,
            NaiveTime::from_hms_opt(7, 0, 0).unwrap(),
        )
    }

    #[test_log::test(tokio::test)]
    async fn only_reminder_events_are_scheduled() {
        let notifier = Arc::new(RecordingNotifier::default());
        let coordinator = coordinator(&notifier);
        let date = NaiveDate::from_ymd_opt(2025, 7, 4).unwrap();

        let mut event = make_custom_event("plain", "Market day", date);
        event.is_reminder = false;
        coordinator.event_added(&event).await.unwrap();
        assert!(notifier.schedule_calls.lock().await.is_empty());

        event.is_reminder = true;
        coordinator.event_added(&event).await.unwrap();
        let calls = notifier.schedule_calls.lock().await;
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, NotificationKey::for_event("plain"));
        assert_eq!(calls[0].2, date.and_hms_opt(7, 0, 0).unwrap());
    }

    #[test_log::test(tokio::test)]
    async fn removal_always_issues_a_cancel() {
        let notifier = Arc::new(RecordingNotifier::default());
        let coordinator = coordinator(&notifier);

        coordinator.event_removed("never-scheduled").await.unwrap();

        let cancels = notifier.cancel_calls.lock().await;
        assert_eq!(cancels.len(), 1);
        assert_eq!(cancels[0], NotificationKey::for_event("never-scheduled"));
    }
}
