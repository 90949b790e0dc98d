use std::fmt;

use serde::Serialize;

use crate::sheet::ProductivitySheet;

/// Minutes typed into a cell. Blank or non-numeric text counts as zero.
pub fn parse_minutes(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|m| m.is_finite())
        .unwrap_or(0.0)
}

/// Sum of every row's minutes. Starts from positive zero so an empty sheet
/// never reports `-0`.
pub fn total_treatment_minutes(sheet: &ProductivitySheet) -> f64 {
    sheet
        .rows
        .iter()
        .map(|r| parse_minutes(&r.minutes))
        .fold(0.0, |total, m| total + m)
}

/// Treated time split into whole hours and the remaining minutes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TreatmentTime {
    pub hours: u64,
    pub minutes: f64,
}

impl TreatmentTime {
    pub fn from_minutes(total: f64) -> Self {
        Self {
            hours: (total / 60.0).floor() as u64,
            minutes: total % 60.0,
        }
    }
}

impl fmt::Display for TreatmentTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} hrs {} minutes", self.hours, self.minutes)
    }
}

/// Treated minutes as a percentage of scheduled minutes; zero when nothing
/// is scheduled.
pub fn productivity_percentage(treatment_minutes: f64, scheduled_minutes: f64) -> f64 {
    if scheduled_minutes > 0.0 {
        treatment_minutes / scheduled_minutes * 100.0
    } else {
        0.0
    }
}

pub fn format_percentage(percentage: f64) -> String {
    format!("{percentage:.2}%")
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProductivitySummary {
    pub treatment_minutes: f64,
    pub treatment: TreatmentTime,
    pub scheduled_minutes: f64,
    pub percentage: f64,
}

pub fn summarize(sheet: &ProductivitySheet) -> ProductivitySummary {
    let treatment_minutes = total_treatment_minutes(sheet);
    let scheduled_minutes = sheet.scheduled_minutes();
    ProductivitySummary {
        treatment_minutes,
        treatment: TreatmentTime::from_minutes(treatment_minutes),
        scheduled_minutes,
        percentage: productivity_percentage(treatment_minutes, scheduled_minutes),
    }
}
