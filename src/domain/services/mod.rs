pub mod calendar;
pub mod evaluator;
pub mod preview;
pub mod pricing;
pub mod recurrence;
