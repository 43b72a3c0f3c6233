use thiserror::Error;

/// Structural validation failures raised when a model is constructed from
/// form input or fetched configuration. Business-rule failures (durations,
/// capacity, date ordering) are not errors; the evaluator reports those as
/// `Violation` values so the caller can surface all of them at once.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid recurrence rule: {0}")]
    InvalidRule(String),
    #[error("Invalid booking window: {0}")]
    InvalidWindow(String),
    #[error("Invalid space constraints: {0}")]
    InvalidConstraints(String),
    #[error("Invalid pricing tier: {0}")]
    InvalidTier(String),
}
