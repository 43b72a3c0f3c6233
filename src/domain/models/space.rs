use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Booking rules configured per space: duration bounds, room capacity and
/// an optional hourly rate (spaces included in a membership have none).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SpaceConstraints {
    pub min_booking_minutes: u32,
    pub max_booking_minutes: Option<u32>,
    pub capacity: u32,
    pub hourly_rate: Option<Decimal>,
}

impl SpaceConstraints {
    pub fn new(
        min_booking_minutes: u32,
        max_booking_minutes: Option<u32>,
        capacity: u32,
        hourly_rate: Option<Decimal>,
    ) -> Result<Self, DomainError> {
        if capacity == 0 {
            return Err(DomainError::InvalidConstraints(
                "capacity must be positive".to_string(),
            ));
        }
        if let Some(max) = max_booking_minutes {
            if max < min_booking_minutes {
                return Err(DomainError::InvalidConstraints(format!(
                    "max booking duration {} is below the minimum {}",
                    max, min_booking_minutes
                )));
            }
        }
        if let Some(rate) = hourly_rate {
            if rate < Decimal::ZERO {
                return Err(DomainError::InvalidConstraints(
                    "hourly rate must not be negative".to_string(),
                ));
            }
        }

        Ok(Self {
            min_booking_minutes,
            max_booking_minutes,
            capacity,
            hourly_rate,
        })
    }
}

/// A bookable space as fetched from tenant configuration.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Space {
    pub id: String,
    pub tenant_id: String,
    pub slug: String,
    pub name: String,
    pub location: Option<String>,
    pub timezone: String,
    pub constraints: SpaceConstraints,
    pub created_at: DateTime<Utc>,
}

pub struct NewSpaceParams {
    pub tenant_id: String,
    pub slug: String,
    pub name: String,
    pub location: Option<String>,
    pub timezone: String,
    pub constraints: SpaceConstraints,
}

impl Space {
    pub fn new(params: NewSpaceParams) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            tenant_id: params.tenant_id,
            slug: params.slug,
            name: params.name,
            location: params.location,
            timezone: params.timezone,
            constraints: params.constraints,
            created_at: Utc::now(),
        }
    }
}
