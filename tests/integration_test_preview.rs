mod common;

use std::collections::BTreeSet;

use common::{dt, meeting_room, window};
use coworking_core::domain::models::pricing::ServiceItem;
use coworking_core::domain::models::recurrence::{
    EndCondition, Frequency, NewRuleParams, RecurrenceRule,
};
use coworking_core::domain::models::space::SpaceConstraints;
use coworking_core::domain::services::calendar::generate_ics;
use coworking_core::domain::services::preview::{preview_booking, preview_quote};
use coworking_core::domain::services::recurrence::expand;
use rust_decimal_macros::dec;

fn weekly_rule(end_condition: EndCondition, occurrence_count: Option<u32>) -> RecurrenceRule {
    RecurrenceRule::new(NewRuleParams {
        frequency: Frequency::Weekly,
        interval: 1,
        days_of_week: BTreeSet::new(),
        end_condition,
        end_date: None,
        occurrence_count,
    })
    .unwrap()
}

#[test]
fn test_preview_flags_truncation_on_an_endless_rule() {
    let space = meeting_room(SpaceConstraints::new(30, None, 10, Some(dec!(60))).unwrap());
    let w = window(dt(2026, 1, 5, 9, 0), dt(2026, 1, 5, 10, 0));
    let rule = weekly_rule(EndCondition::Never, None);

    let preview = preview_booking(&space, &w, &rule, 4, 5);
    assert_eq!(preview.occurrences.len(), 5);
    assert!(preview.truncated);
    assert!(preview.evaluation.is_valid());
    assert_eq!(preview.evaluation.total_cost, dec!(60));
}

#[test]
fn test_preview_is_not_truncated_when_the_rule_fits() {
    let space = meeting_room(SpaceConstraints::new(30, None, 10, None).unwrap());
    let w = window(dt(2026, 1, 5, 9, 0), dt(2026, 1, 5, 10, 0));
    // 6 total including the anchor, so exactly 5 previewed dates.
    let rule = weekly_rule(EndCondition::ByCount, Some(6));

    let preview = preview_booking(&space, &w, &rule, 4, 5);
    assert_eq!(preview.occurrences.len(), 5);
    assert!(!preview.truncated);
}

#[test]
fn test_preview_carries_violations_alongside_occurrences() {
    let space = meeting_room(SpaceConstraints::new(120, None, 2, None).unwrap());
    let w = window(dt(2026, 1, 5, 9, 0), dt(2026, 1, 5, 10, 0));
    let rule = weekly_rule(EndCondition::ByCount, Some(3));

    let preview = preview_booking(&space, &w, &rule, 6, 10);
    assert_eq!(preview.evaluation.violations.len(), 2);
    assert_eq!(preview.occurrences.len(), 2);
}

#[test]
fn test_quote_preview_totals_tiered_lines() {
    let catering = ServiceItem::new(
        "tenant-1".to_string(),
        "Catering".to_string(),
        dec!(100),
        r#"[{"min_quantity":10,"discount_type":"PERCENTAGE","discount":20}]"#.to_string(),
    );
    let passes = ServiceItem::new(
        "tenant-1".to_string(),
        "Day pass".to_string(),
        dec!(25),
        "[]".to_string(),
    );

    let quote = preview_quote(&[(&catering, 10), (&passes, 4)]);
    assert_eq!(quote.lines.len(), 2);
    assert_eq!(quote.lines[0].unit_price, dec!(80));
    assert_eq!(quote.lines[0].line_total, dec!(800));
    assert_eq!(quote.lines[1].line_total, dec!(100));
    assert_eq!(quote.total, dec!(900));
}

#[test]
fn test_ics_export_contains_anchor_and_occurrences() {
    let space = meeting_room(SpaceConstraints::new(30, None, 10, None).unwrap());
    let w = window(dt(2026, 1, 5, 9, 0), dt(2026, 1, 5, 10, 0));
    let rule = weekly_rule(EndCondition::ByCount, Some(4));

    let occurrences = expand(&rule, &w, 10);
    assert_eq!(occurrences.len(), 3);

    let ics = generate_ics(&space, &w, &occurrences);
    assert_eq!(ics.matches("BEGIN:VEVENT").count(), 4);
    assert!(ics.contains("SUMMARY:Focus Room"));
    assert!(ics.contains("LOCATION:2nd floor"));
}

#[test]
fn test_ics_export_survives_an_unknown_timezone() {
    let mut space = meeting_room(SpaceConstraints::new(30, None, 10, None).unwrap());
    space.timezone = "Not/AZone".to_string();
    let w = window(dt(2026, 1, 5, 9, 0), dt(2026, 1, 5, 10, 0));

    let ics = generate_ics(&space, &w, &[]);
    assert_eq!(ics.matches("BEGIN:VEVENT").count(), 1);
}
