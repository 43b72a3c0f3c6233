use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

pub const MAX_BUFFER_MINUTES: u32 = 120;

/// The requested time window of the anchor booking, in the space's local
/// wall-clock time as entered on the form. Setup and cleanup buffers are
/// billed but do not shift the window itself.
///
/// `anchor_end > anchor_start` is deliberately not enforced here: a
/// reversed window is a business-rule violation the evaluator reports as
/// `InvalidWindow`, so the live preview can still render while the user is
/// mid-edit.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct BookingWindow {
    pub anchor_start: NaiveDateTime,
    pub anchor_end: NaiveDateTime,
    pub setup_minutes: u32,
    pub cleanup_minutes: u32,
}

impl BookingWindow {
    pub fn new(
        anchor_start: NaiveDateTime,
        anchor_end: NaiveDateTime,
        setup_minutes: u32,
        cleanup_minutes: u32,
    ) -> Result<Self, DomainError> {
        if setup_minutes > MAX_BUFFER_MINUTES {
            return Err(DomainError::InvalidWindow(format!(
                "setup buffer must be at most {} minutes, got {}",
                MAX_BUFFER_MINUTES, setup_minutes
            )));
        }
        if cleanup_minutes > MAX_BUFFER_MINUTES {
            return Err(DomainError::InvalidWindow(format!(
                "cleanup buffer must be at most {} minutes, got {}",
                MAX_BUFFER_MINUTES, cleanup_minutes
            )));
        }

        Ok(Self {
            anchor_start,
            anchor_end,
            setup_minutes,
            cleanup_minutes,
        })
    }

    /// Signed duration in minutes; negative when the window is reversed.
    pub fn duration_minutes(&self) -> i64 {
        (self.anchor_end - self.anchor_start).num_minutes()
    }

    /// Billable minutes: the window itself plus both buffers.
    pub fn billable_minutes(&self) -> i64 {
        self.duration_minutes() + self.setup_minutes as i64 + self.cleanup_minutes as i64
    }
}
