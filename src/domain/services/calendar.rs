use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use icalendar::{Calendar, Component, Event as IcalEvent, EventLike};

use crate::domain::models::booking::BookingWindow;
use crate::domain::models::space::Space;

/// Generates an iCalendar (.ics) string for the anchor booking and its
/// expanded occurrences, localized through the space's timezone.
pub fn generate_ics(space: &Space, window: &BookingWindow, occurrences: &[NaiveDateTime]) -> String {
    let tz: Tz = space.timezone.parse().unwrap_or(chrono_tz::UTC);
    let duration = window.anchor_end - window.anchor_start;

    let mut calendar = Calendar::new();
    for (idx, start) in std::iter::once(&window.anchor_start)
        .chain(occurrences.iter())
        .enumerate()
    {
        let mut ical_event = IcalEvent::new();
        ical_event
            .summary(&space.name)
            .starts(to_utc(tz, *start))
            .ends(to_utc(tz, *start + duration))
            .uid(&format!("{}-{}", space.id, idx));
        if let Some(location) = &space.location {
            ical_event.location(location);
        }
        calendar.push(ical_event.done());
    }

    calendar.to_string()
}

fn to_utc(tz: Tz, local: NaiveDateTime) -> DateTime<Utc> {
    // DST fold picks the earlier instant; a nonexistent local time (spring
    // forward gap) falls back to reading the wall clock as UTC.
    tz.from_local_datetime(&local)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|| Utc.from_utc_datetime(&local))
}
