use crate::application::ports::time::Clock;
use chrono::{DateTime, SubsecRound, Utc};

#[derive(Default, Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    // PostgreSQL keeps microseconds; trimming here keeps values read back
    // equal to the ones written.
    fn now(&self) -> DateTime<Utc> {
        Utc::now().trunc_subsecs(6)
    }
}
