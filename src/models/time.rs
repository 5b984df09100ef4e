//! Wall-clock codec and the day-minute timeline.
//!
//! # Time Model
//! All interval arithmetic uses [`DayMinute`]: whole minutes since midnight
//! of the scheduling day. A sleep time at or before the wake time belongs to
//! the next calendar day and is normalized past minute 1440, so placement
//! walks a strictly monotonic line. Only rendering wraps back with `% 1440`.

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{PlanError, Result};

/// Minutes since midnight of the scheduling day.
///
/// Lies in `[0, 1440)` after final wrapping; may exceed 1440 before it.
pub type DayMinute = u32;

/// Length of one day in minutes.
pub const MINUTES_PER_DAY: DayMinute = 1440;

/// Parses an `HH:MM` wall-clock string into a [`DayMinute`].
///
/// Uses the 24-hour `%H:%M` format. Surrounding whitespace is ignored.
/// `field` names the input for error reporting.
///
/// # Examples
///
/// ```
/// use study_schedule::models::parse_clock;
///
/// assert_eq!(parse_clock("wake_time", "06:30").unwrap(), 390);
/// assert_eq!(parse_clock("wake_time", "7:05").unwrap(), 425);
/// assert!(parse_clock("wake_time", "24:00").is_err());
/// ```
pub fn parse_clock(field: &str, hhmm: &str) -> Result<DayMinute> {
    let time = NaiveTime::parse_from_str(hhmm.trim(), "%H:%M")
        .map_err(|_| PlanError::invalid_time(field, hhmm))?;
    Ok(time.hour() * 60 + time.minute())
}

/// Places the sleep time on the monotonic line after the wake time.
///
/// If `sleep <= wake` the sleep time belongs to the next day and is shifted
/// by 1440; otherwise both values are returned unchanged.
#[inline]
pub fn normalize_overnight(wake: DayMinute, sleep: DayMinute) -> (DayMinute, DayMinute) {
    if sleep <= wake {
        (wake, sleep + MINUTES_PER_DAY)
    } else {
        (wake, sleep)
    }
}

/// Renders a minute offset as a 12-hour label, e.g. `"11:00 PM"`.
///
/// Offsets past midnight wrap around.
///
/// # Examples
///
/// ```
/// use study_schedule::models::format_clock;
///
/// assert_eq!(format_clock(0), "12:00 AM");
/// assert_eq!(format_clock(750), "12:30 PM");
/// assert_eq!(format_clock(1380), "11:00 PM");
/// assert_eq!(format_clock(1800), "6:00 AM");
/// ```
pub fn format_clock(minute: DayMinute) -> String {
    let seconds = (minute % MINUTES_PER_DAY) * 60;
    NaiveTime::from_num_seconds_from_midnight_opt(seconds, 0)
        .map(|t| t.format("%-I:%M %p").to_string())
        .unwrap_or_default()
}

/// The awake window of one scheduling day: `[wake, sleep_absolute)`.
///
/// `sleep_absolute` is the normalized sleep time and may exceed 1440.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayFrame {
    /// Wake time.
    pub wake: DayMinute,
    /// Sleep time on the monotonic line (after `wake`).
    pub sleep_absolute: DayMinute,
}

impl DayFrame {
    /// Parses and normalizes a wake/sleep pair.
    pub fn parse(wake_time: &str, sleep_time: &str) -> Result<Self> {
        let wake = parse_clock("wake_time", wake_time)?;
        let sleep = parse_clock("sleep_time", sleep_time)?;
        let (wake, sleep_absolute) = normalize_overnight(wake, sleep);
        Ok(Self {
            wake,
            sleep_absolute,
        })
    }

    /// Minutes between waking and going to sleep.
    #[inline]
    pub fn awake_minutes(&self) -> DayMinute {
        self.sleep_absolute - self.wake
    }

    /// Whether `[start, end)` lies within the awake window.
    #[inline]
    pub fn contains_span(&self, start: DayMinute, end: DayMinute) -> bool {
        start >= self.wake && end <= self.sleep_absolute
    }

    /// Whether the sleep time falls after midnight.
    #[inline]
    pub fn sleeps_after_midnight(&self) -> bool {
        self.sleep_absolute > MINUTES_PER_DAY
    }
}
