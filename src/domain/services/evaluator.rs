use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::models::booking::BookingWindow;
use crate::domain::models::space::SpaceConstraints;

/// A business rule the requested booking failed to satisfy.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Violation {
    InvalidWindow,
    BelowMinimumDuration { limit: u32 },
    AboveMaximumDuration { limit: u32 },
    OverCapacity { limit: u32 },
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct BookingEvaluation {
    pub duration_minutes: i64,
    pub total_cost: Decimal,
    pub violations: Vec<Violation>,
}

impl BookingEvaluation {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Checks the requested window and party size against the space's rules and
/// computes the billable cost. Every rule is checked independently so the
/// form can surface all problems at once; duration and cost are returned
/// even when the input is invalid, since the live preview keeps rendering
/// while the user edits.
pub fn evaluate(
    window: &BookingWindow,
    constraints: &SpaceConstraints,
    attendee_count: u32,
) -> BookingEvaluation {
    let duration_minutes = window.duration_minutes();
    let mut violations = Vec::new();

    if duration_minutes <= 0 {
        violations.push(Violation::InvalidWindow);
    }
    if duration_minutes < i64::from(constraints.min_booking_minutes) {
        violations.push(Violation::BelowMinimumDuration {
            limit: constraints.min_booking_minutes,
        });
    }
    if let Some(max) = constraints.max_booking_minutes {
        if duration_minutes > i64::from(max) {
            violations.push(Violation::AboveMaximumDuration { limit: max });
        }
    }
    if attendee_count > constraints.capacity {
        violations.push(Violation::OverCapacity {
            limit: constraints.capacity,
        });
    }

    // Setup and cleanup buffers are billed on top of the booked window.
    // No rounding here; display formatting is the caller's concern.
    let total_cost = match constraints.hourly_rate {
        Some(rate) => rate * Decimal::from(window.billable_minutes()) / Decimal::from(60),
        None => Decimal::ZERO,
    };

    BookingEvaluation {
        duration_minutes,
        total_cost,
        violations,
    }
}
