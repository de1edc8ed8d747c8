use std::{fmt, ops};

use time::OffsetDateTime;

/// UTC timestamp with seconds precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn now() -> Self {
        OffsetDateTime::now_utc().into()
    }

    pub const fn from_secs(secs: i64) -> Self {
        Self(secs)
    }

    pub const fn as_secs(self) -> i64 {
        self.0
    }

    /// Start of the UTC day that contains this timestamp.
    pub fn start_of_day(self) -> Self {
        const SECS_PER_DAY: i64 = 24 * 60 * 60;
        Self(self.0.div_euclid(SECS_PER_DAY) * SECS_PER_DAY)
    }
}

impl From<OffsetDateTime> for Timestamp {
    fn from(from: OffsetDateTime) -> Self {
        Self(from.unix_timestamp())
    }
}

impl From<Timestamp> for OffsetDateTime {
    fn from(from: Timestamp) -> Self {
        // Safe for any timestamp this system can produce.
        OffsetDateTime::from_unix_timestamp(from.0)
            .unwrap_or(OffsetDateTime::UNIX_EPOCH)
    }
}

impl ops::Add<Duration> for Timestamp {
    type Output = Self;
    fn add(self, rhs: Duration) -> Self {
        Self(self.0 + rhs.as_secs())
    }
}

impl ops::Sub<Duration> for Timestamp {
    type Output = Self;
    fn sub(self, rhs: Duration) -> Self {
        Self(self.0 - rhs.as_secs())
    }
}

impl ops::Sub for Timestamp {
    type Output = Duration;
    fn sub(self, rhs: Self) -> Duration {
        Duration::from_secs(self.0 - rhs.0)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", OffsetDateTime::from(*self))
    }
}

/// Signed duration with seconds precision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Duration(i64);

impl Duration {
    pub const fn from_secs(secs: i64) -> Self {
        Self(secs)
    }

    pub const fn from_mins(mins: i64) -> Self {
        Self(mins * 60)
    }

    pub const fn from_hours(hours: i64) -> Self {
        Self(hours * 60 * 60)
    }

    pub const fn as_secs(self) -> i64 {
        self.0
    }

    pub const fn whole_minutes(self) -> i64 {
        self.0 / 60
    }

    pub const fn whole_hours(self) -> i64 {
        self.0 / (60 * 60)
    }
}
