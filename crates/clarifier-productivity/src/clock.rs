use jiff::civil::Time;
use jiff::{SignedDuration, Zoned};
use serde::Serialize;

use crate::error::ProductivityError;

/// Shown in place of a clock-out time when no work time is set.
pub const NO_CLOCK_OUT: &str = "--:--";

/// Parse a clock-in time as entered in a time field: `HH:MM`, optionally
/// with seconds.
pub fn parse_clock_in(raw: &str) -> Result<Time, ProductivityError> {
    let raw = raw.trim();
    Time::strptime("%H:%M", raw)
        .or_else(|_| Time::strptime("%H:%M:%S", raw))
        .map_err(|_| ProductivityError::InvalidClockIn(raw.to_string()))
}

/// Time to clock out after working `work_hours`h `work_minutes`m plus an
/// unpaid lunch. Wraps past midnight. `None` when no work time is set.
/// Non-finite inputs count as zero.
pub fn clock_out(
    clock_in: Time,
    work_hours: f64,
    work_minutes: f64,
    lunch_minutes: f64,
) -> Option<Time> {
    let work_hours = finite_or_zero(work_hours);
    let work_minutes = finite_or_zero(work_minutes);
    let lunch_minutes = finite_or_zero(lunch_minutes);
    if work_hours == 0.0 && work_minutes == 0.0 {
        return None;
    }
    let total_minutes = work_hours * 60.0 + work_minutes + lunch_minutes;
    let seconds = (total_minutes * 60.0).round() as i64;
    Some(clock_in.wrapping_add(SignedDuration::from_secs(seconds)))
}

/// `5:30 PM`
pub fn format_time(time: Time) -> String {
    time.strftime("%-I:%M %p").to_string()
}

pub fn format_clock_out(time: Option<Time>) -> String {
    time.map(format_time).unwrap_or_else(|| NO_CLOCK_OUT.to_string())
}

/// Wall-clock header: `9:05 AM` and `Friday, October 16, 2026`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClockDisplay {
    pub time: String,
    pub date: String,
}

pub fn clock_display(now: &Zoned) -> ClockDisplay {
    ClockDisplay {
        time: format_time(now.time()),
        date: now.strftime("%A, %B %-d, %Y").to_string(),
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}
