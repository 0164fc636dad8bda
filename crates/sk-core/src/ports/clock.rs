use chrono::{DateTime, Utc};

/// Source of the timestamps stamped onto records.
pub trait ClockPort: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
