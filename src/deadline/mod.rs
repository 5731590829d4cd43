use chrono::{Local, NaiveDate, NaiveDateTime};
use std::fmt;
use std::time::Duration;

/// The submission cutoff. Purely advisory: the store accepts writes
/// regardless, the gate is enforced at the CLI boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadline(NaiveDateTime);

impl Deadline {
    /// The configured cutoff for this round, local time.
    // Adjust the submission deadline here
    pub fn submission_deadline() -> Self {
        Deadline(
            NaiveDate::from_ymd_opt(2026, 3, 12)
                .expect("valid deadline date")
                .and_hms_opt(18, 0, 0)
                .expect("valid deadline time"),
        )
    }

    pub fn at(timestamp: NaiveDateTime) -> Self {
        Deadline(timestamp)
    }

    /// Locked once the deadline has been reached, inclusive
    pub fn is_locked(&self, now: NaiveDateTime) -> bool {
        now >= self.0
    }

    /// Time left until the cutoff, truncated to whole seconds.
    /// None once locked.
    pub fn remaining(&self, now: NaiveDateTime) -> Option<Duration> {
        if self.is_locked(now) {
            return None;
        }
        let secs = (self.0 - now).num_seconds().max(0) as u64;
        Some(Duration::from_secs(secs))
    }

    /// "3days 4h left" while open, "closed" afterwards
    pub fn format_remaining(&self, now: NaiveDateTime) -> String {
        match self.remaining(now) {
            Some(left) => format!("{} left", humantime::format_duration(left)),
            None => "closed".to_string(),
        }
    }
}

impl fmt::Display for Deadline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%d.%m.%Y %H:%M"))
    }
}

/// Current local wall-clock time, the only clock the gate compares against
pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}
