pub mod booking;
pub mod pricing;
pub mod recurrence;
pub mod space;
