//! Calendar clock capability.

use chrono::NaiveDate;

/// Source of "today" for release-date validation.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// UTC wall clock (the production choice).
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Utc::now().date_naive()
    }
}

/// Fixed date for tests/dev.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
