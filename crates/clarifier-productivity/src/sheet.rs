use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ProductivityError;

/// Rows shown on the productivity grid.
pub const ROW_COUNT: usize = 12;

pub const DEFAULT_WORK_HOURS: u32 = 8;

/// Key the sheet is persisted under. Shared with the browser build, which
/// keeps the same JSON in `localStorage`.
pub const STORAGE_KEY: &str = "slp-productivity-data";

/// One grid row. Both cells hold the raw text typed by the clinician.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct PatientRow {
    pub patient: String,
    pub minutes: String,
}

impl PatientRow {
    pub fn is_blank(&self) -> bool {
        self.patient.trim().is_empty() && self.minutes.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct ProductivitySheet {
    /// Sparse: rows past the end are blank.
    pub rows: Vec<PatientRow>,
    pub work_hours: u32,
    pub work_minutes: u32,
}

impl Default for ProductivitySheet {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            work_hours: DEFAULT_WORK_HOURS,
            work_minutes: 0,
        }
    }
}

impl ProductivitySheet {
    /// Row by 1-based number; `None` past the grid.
    pub fn row(&self, row: usize) -> Option<PatientRow> {
        let index = row_index(row).ok()?;
        Some(self.rows.get(index).cloned().unwrap_or_default())
    }

    /// All grid rows, blanks included.
    pub fn grid(&self) -> Vec<PatientRow> {
        (1..=ROW_COUNT).filter_map(|row| self.row(row)).collect()
    }

    /// Record minutes for a row. The patient cell is only overwritten when a
    /// name is given.
    pub fn log(
        &mut self,
        row: usize,
        minutes: impl Into<String>,
        patient: Option<String>,
    ) -> Result<(), ProductivityError> {
        let index = row_index(row)?;
        self.ensure_len(index + 1);
        let entry = &mut self.rows[index];
        entry.minutes = minutes.into();
        if let Some(patient) = patient {
            entry.patient = patient;
        }
        Ok(())
    }

    /// Blank the given 1-based rows. Validates every row before touching any.
    pub fn clear_rows(&mut self, rows: &[usize]) -> Result<(), ProductivityError> {
        let indices = rows
            .iter()
            .map(|r| row_index(*r))
            .collect::<Result<Vec<_>, _>>()?;
        for index in indices {
            if let Some(entry) = self.rows.get_mut(index) {
                *entry = PatientRow::default();
            }
        }
        Ok(())
    }

    /// Blank every row. Work hours are kept.
    pub fn clear_all(&mut self) {
        self.rows.clear();
    }

    pub fn set_work_time(&mut self, hours: u32, minutes: u32) {
        self.work_hours = hours;
        self.work_minutes = minutes;
    }

    pub fn scheduled_minutes(&self) -> f64 {
        f64::from(self.work_hours) * 60.0 + f64::from(self.work_minutes)
    }

    fn ensure_len(&mut self, len: usize) {
        if self.rows.len() < len {
            self.rows.resize(len, PatientRow::default());
        }
    }
}

fn row_index(row: usize) -> Result<usize, ProductivityError> {
    if (1..=ROW_COUNT).contains(&row) {
        Ok(row - 1)
    } else {
        Err(ProductivityError::RowOutOfRange {
            row,
            rows: ROW_COUNT,
        })
    }
}
