use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use crate::domain::models::booking::BookingWindow;
use crate::domain::models::pricing::ServiceItem;
use crate::domain::models::recurrence::RecurrenceRule;
use crate::domain::models::space::Space;
use crate::domain::services::evaluator::{evaluate, BookingEvaluation};
use crate::domain::services::pricing::resolve_price;
use crate::domain::services::recurrence::expand;

/// Everything the booking form renders on a field change: validation state,
/// computed cost and the capped list of upcoming occurrence dates.
#[derive(Debug, Serialize, Clone)]
pub struct BookingPreview {
    pub evaluation: BookingEvaluation,
    pub occurrences: Vec<NaiveDateTime>,
    /// True when the rule generates more dates than the preview shows.
    pub truncated: bool,
}

/// Recomputes the form preview. Called by the view layer on every field
/// change; stateless, so the latest call always reflects the latest input.
pub fn preview_booking(
    space: &Space,
    window: &BookingWindow,
    rule: &RecurrenceRule,
    attendee_count: u32,
    preview_limit: usize,
) -> BookingPreview {
    let evaluation = evaluate(window, &space.constraints, attendee_count);

    // Probe one past the display cap to learn whether the full set is
    // larger; the cap limits the preview, not the generated series.
    let mut occurrences = expand(rule, window, preview_limit + 1);
    let truncated = occurrences.len() > preview_limit;
    if truncated {
        occurrences.truncate(preview_limit);
    }

    debug!(
        space = %space.slug,
        violations = evaluation.violations.len(),
        occurrences = occurrences.len(),
        truncated,
        "booking preview recomputed"
    );

    BookingPreview {
        evaluation,
        occurrences,
        truncated,
    }
}

#[derive(Debug, Serialize, Clone)]
pub struct QuoteLine {
    pub service_id: String,
    pub name: String,
    pub quantity: u32,
    pub unit_price: Decimal,
    pub line_total: Decimal,
}

#[derive(Debug, Serialize, Clone)]
pub struct QuotePreview {
    pub lines: Vec<QuoteLine>,
    pub total: Decimal,
}

/// Prices a quotation draft: one line per requested service, unit price
/// resolved against the service's quantity tiers.
pub fn preview_quote(items: &[(&ServiceItem, u32)]) -> QuotePreview {
    let mut lines = Vec::with_capacity(items.len());
    let mut total = Decimal::ZERO;

    for (service, quantity) in items {
        let unit_price = resolve_price(service.unit_price, &service.tiers(), *quantity);
        let line_total = unit_price * Decimal::from(*quantity);
        total += line_total;
        lines.push(QuoteLine {
            service_id: service.id.clone(),
            name: service.name.clone(),
            quantity: *quantity,
            unit_price,
            line_total,
        });
    }

    QuotePreview { lines, total }
}
