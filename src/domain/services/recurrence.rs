use chrono::{Datelike, Duration, Months, NaiveDateTime};
use tracing::warn;

use crate::domain::models::booking::BookingWindow;
use crate::domain::models::recurrence::{EndCondition, Frequency, RecurrenceRule};

/// Hard bound on examined candidates per expansion. A NEVER-terminated
/// weekly rule whose interval stride never lands on a filtered weekday
/// would otherwise loop forever. Matches the occurrence-count ceiling.
pub const SCAN_LIMIT: usize = 366;

/// Expands a repeat rule from the anchor booking into the concrete dates of
/// the follow-up occurrences, capped at `max_preview`. The anchor itself is
/// never part of the output.
///
/// Weekly rules with a weekday filter advance first and filter second: a
/// rejected candidate consumes no preview or count budget, but the cursor
/// keeps stepping by whole intervals from it. With interval=1 this can skip
/// matching weekdays that fall inside the stride, which is the behavior the
/// booking form has always shown.
///
/// Monthly steps clamp the day of month to the last valid day, and the
/// clamp carries forward: Jan 31 -> Feb 28 -> Mar 28.
pub fn expand(
    rule: &RecurrenceRule,
    window: &BookingWindow,
    max_preview: usize,
) -> Vec<NaiveDateTime> {
    if !rule.enabled {
        return Vec::new();
    }

    let mut occurrences = Vec::new();
    // The anchor booking counts toward BY_COUNT.
    let mut accepted: u32 = 1;
    let mut current = window.anchor_start;
    let mut scanned = 0usize;

    loop {
        if rule.end_condition == EndCondition::ByCount
            && accepted >= rule.occurrence_count.unwrap_or(1)
        {
            break;
        }
        if occurrences.len() >= max_preview {
            break;
        }
        if scanned >= SCAN_LIMIT {
            warn!(
                interval = rule.interval,
                "recurrence scan limit reached before the rule terminated"
            );
            break;
        }
        scanned += 1;

        let Some(candidate) = advance(current, rule.frequency, rule.interval) else {
            break;
        };
        current = candidate;

        if rule.end_condition == EndCondition::ByDate {
            match rule.end_date {
                Some(end) if candidate.date() > end => break,
                _ => {}
            }
        }

        if rule.frequency == Frequency::Weekly && !rule.days_of_week.is_empty() {
            let weekday = candidate.weekday().num_days_from_sunday() as u8;
            if !rule.days_of_week.contains(&weekday) {
                continue;
            }
        }

        occurrences.push(candidate);
        accepted += 1;
    }

    occurrences
}

fn advance(from: NaiveDateTime, frequency: Frequency, interval: u32) -> Option<NaiveDateTime> {
    match frequency {
        Frequency::Daily => from.checked_add_signed(Duration::days(i64::from(interval))),
        Frequency::Weekly => from.checked_add_signed(Duration::weeks(i64::from(interval))),
        Frequency::Monthly => from.checked_add_months(Months::new(interval)),
    }
}
