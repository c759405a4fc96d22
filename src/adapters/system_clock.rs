use crate::ports::clock::Clock;
use chrono::{NaiveDate, Utc};

/// システム時計（UTCの暦日）
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}
