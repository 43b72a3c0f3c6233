use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::error::DomainError;

pub const MAX_INTERVAL: u32 = 52;
pub const MAX_OCCURRENCE_COUNT: u32 = 365;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EndCondition {
    Never,
    ByDate,
    ByCount,
}

/// Repeat rule captured from the booking form. Weekdays use the form
/// convention 0 = Sunday .. 6 = Saturday. An empty weekday set on a WEEKLY
/// rule means "same weekday as the anchor".
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct RecurrenceRule {
    pub enabled: bool,
    pub frequency: Frequency,
    pub interval: u32,
    pub days_of_week: BTreeSet<u8>,
    pub end_condition: EndCondition,
    pub end_date: Option<chrono::NaiveDate>,
    pub occurrence_count: Option<u32>,
}

pub struct NewRuleParams {
    pub frequency: Frequency,
    pub interval: u32,
    pub days_of_week: BTreeSet<u8>,
    pub end_condition: EndCondition,
    pub end_date: Option<chrono::NaiveDate>,
    pub occurrence_count: Option<u32>,
}

impl RecurrenceRule {
    /// A rule for a one-off booking; expansion yields nothing.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            frequency: Frequency::Weekly,
            interval: 1,
            days_of_week: BTreeSet::new(),
            end_condition: EndCondition::Never,
            end_date: None,
            occurrence_count: None,
        }
    }

    /// Validates the conditional-presence invariants before the rule ever
    /// reaches the expander: exactly one of `end_date` / `occurrence_count`
    /// is meaningful, picked by `end_condition`.
    pub fn new(params: NewRuleParams) -> Result<Self, DomainError> {
        if params.interval == 0 || params.interval > MAX_INTERVAL {
            return Err(DomainError::InvalidRule(format!(
                "interval must be between 1 and {}, got {}",
                MAX_INTERVAL, params.interval
            )));
        }

        if let Some(&day) = params.days_of_week.iter().find(|&&d| d > 6) {
            return Err(DomainError::InvalidRule(format!(
                "weekday {} is out of range 0-6",
                day
            )));
        }

        match params.end_condition {
            EndCondition::ByDate => {
                if params.end_date.is_none() {
                    return Err(DomainError::InvalidRule(
                        "end_date is required when ending by date".to_string(),
                    ));
                }
            }
            EndCondition::ByCount => match params.occurrence_count {
                None => {
                    return Err(DomainError::InvalidRule(
                        "occurrence_count is required when ending by count".to_string(),
                    ));
                }
                Some(n) if n == 0 || n > MAX_OCCURRENCE_COUNT => {
                    return Err(DomainError::InvalidRule(format!(
                        "occurrence_count must be between 1 and {}, got {}",
                        MAX_OCCURRENCE_COUNT, n
                    )));
                }
                Some(_) => {}
            },
            EndCondition::Never => {}
        }

        Ok(Self {
            enabled: true,
            frequency: params.frequency,
            interval: params.interval,
            // The weekday filter only applies to weekly rules; drop it
            // otherwise so equality and serialization stay predictable.
            days_of_week: if params.frequency == Frequency::Weekly {
                params.days_of_week
            } else {
                BTreeSet::new()
            },
            end_condition: params.end_condition,
            end_date: if params.end_condition == EndCondition::ByDate {
                params.end_date
            } else {
                None
            },
            occurrence_count: if params.end_condition == EndCondition::ByCount {
                params.occurrence_count
            } else {
                None
            },
        })
    }
}
