//! Error types for the cropcal ecosystem.

use thiserror::Error;

/// Errors that can occur in calendar operations.
///
/// None of these are fatal: collaborator failures are recovered at the
/// component boundary and surfaced so presentation code can show a
/// non-blocking message.
#[derive(Error, Debug)]
pub enum CalendarError {
    #[error("Calendar not loaded: call load() first")]
    NotLoaded,

    #[error("Template catalog failed to load: {0}")]
    CatalogLoad(String),

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("Notification error: {0}")]
    Notification(String),

    #[error("An event with id '{0}' already exists")]
    DuplicateId(String),

    #[error("Event '{0}' is a generated crop activity and cannot be deleted")]
    TemplateEvent(String),

    #[error("Invalid activity schedule: {0}")]
    InvalidSchedule(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for calendar operations.
pub type CalendarResult<T> = Result<T, CalendarError>;
