//! Elapsed wall-clock time with adaptive units
//!
//! Durations above an hour are shown in hours, above a minute in minutes,
//! everything else in seconds. Two decimals, trailing period:
//!
//! ```text
//! 42.00 seconds.
//! 1.50 minutes.
//! 2.25 hours.
//! ```

use serde::Serialize;
use std::fmt;
use std::time::{Duration, Instant};

const SECONDS_PER_MINUTE: f64 = 60.0;
const SECONDS_PER_HOUR: f64 = 3600.0;

/// Display unit chosen for an elapsed time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Seconds,
    Minutes,
    Hours,
}

impl TimeUnit {
    fn label(self) -> &'static str {
        match self {
            TimeUnit::Seconds => "seconds",
            TimeUnit::Minutes => "minutes",
            TimeUnit::Hours => "hours",
        }
    }
}

/// Measured elapsed time
///
/// # Example
/// ```
/// use pi_estimator_core::{ElapsedTime, TimeUnit};
///
/// let elapsed = ElapsedTime::from_secs_f64(90.0);
/// assert_eq!(elapsed.unit(), TimeUnit::Minutes);
/// assert_eq!(elapsed.to_string(), "1.50 minutes.");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ElapsedTime {
    /// Total elapsed seconds
    seconds: f64,
}

impl ElapsedTime {
    /// Elapsed time since `start`
    pub fn since(start: Instant) -> Self {
        Self::from_duration(start.elapsed())
    }

    pub fn from_duration(duration: Duration) -> Self {
        Self::from_secs_f64(duration.as_secs_f64())
    }

    pub fn from_secs_f64(seconds: f64) -> Self {
        Self { seconds }
    }

    /// Total elapsed seconds
    pub fn seconds(&self) -> f64 {
        self.seconds
    }

    /// Unit used when displaying this time
    pub fn unit(&self) -> TimeUnit {
        if self.seconds > SECONDS_PER_HOUR {
            TimeUnit::Hours
        } else if self.seconds > SECONDS_PER_MINUTE {
            TimeUnit::Minutes
        } else {
            TimeUnit::Seconds
        }
    }

    /// Elapsed time expressed in [`Self::unit`]
    pub fn value_in_unit(&self) -> f64 {
        match self.unit() {
            TimeUnit::Hours => self.seconds / SECONDS_PER_HOUR,
            TimeUnit::Minutes => self.seconds / SECONDS_PER_MINUTE,
            TimeUnit::Seconds => self.seconds,
        }
    }
}

impl fmt::Display for ElapsedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} {}.", self.value_in_unit(), self.unit().label())
    }
}
