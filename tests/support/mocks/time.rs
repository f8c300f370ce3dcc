// tests/support/mocks/time.rs
use article_portal::application::ports::time::Clock;
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

static FIXED_NOW: Lazy<DateTime<Utc>> = Lazy::new(|| {
    DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
        .expect("invalid RFC3339 in tests/support/mocks/time.rs")
        .with_timezone(&Utc)
});

pub fn fixed_now() -> DateTime<Utc> {
    *FIXED_NOW
}

#[derive(Clone, Debug, Default)]
pub struct FixedClock;

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        fixed_now()
    }
}
