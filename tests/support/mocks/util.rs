// tests/support/mocks/util.rs
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Duration, Utc};

use super::time::fixed_now;

#[derive(Clone)]
pub struct DummyClock;

impl shelf_core::application::ports::time::Clock for DummyClock {
    fn now(&self) -> DateTime<Utc> {
        fixed_now()
    }
}

/// Advances one day on every reading, starting at [`fixed_now`].
#[derive(Default)]
pub struct SteppingClock {
    days: AtomicI64,
}

impl shelf_core::application::ports::time::Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        let days = self.days.fetch_add(1, Ordering::SeqCst);
        fixed_now() + Duration::days(days)
    }
}
