//! Export timestamps.

use chrono::{DateTime, SecondsFormat, Utc};

/// Source of the current time.
pub trait Clock {
    /// Now, in UTC.
    fn now(&self) -> DateTime<Utc>;
}

/// The system wall clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// One instant, taken once per export so every file of a compound export
/// shares it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExportStamp {
    at: DateTime<Utc>,
}

impl ExportStamp {
    /// Read `clock`.
    pub fn now(clock: &dyn Clock) -> Self {
        Self { at: clock.now() }
    }

    /// Wrap an instant.
    pub fn at(at: DateTime<Utc>) -> Self {
        Self { at }
    }

    /// `YYYYMMDDTHHMMSS`, for filenames.
    pub fn compact(&self) -> String {
        self.at.format("%Y%m%dT%H%M%S").to_string()
    }

    /// RFC 3339 with milliseconds and a `Z` suffix.
    pub fn iso(&self) -> String {
        self.at.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// Milliseconds since the Unix epoch.
    pub fn epoch_millis(&self) -> i64 {
        self.at.timestamp_millis()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn formats() {
        let at = Utc.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).single().unwrap();
        let s = ExportStamp::at(at);
        assert_eq!(s.compact(), "20240309T070501");
        assert_eq!(s.iso(), "2024-03-09T07:05:01.000Z");
        assert_eq!(s.epoch_millis(), at.timestamp() * 1000);
    }
}
