use thiserror::Error;

/// Engine faults. Deliberately small: unknown modules, scenarios, and chat
/// categories are silent no-ops (the view-target-missing policy), never
/// errors. Only genuine faults surface here.
#[derive(Error, Debug)]
pub enum CourseError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type CourseResult<T> = Result<T, CourseError>;
