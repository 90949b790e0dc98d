use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProductivityError {
    #[error("invalid clock-in time '{0}', expected HH:MM")]
    InvalidClockIn(String),

    #[error("row {row} is outside the sheet (1-{rows})")]
    RowOutOfRange { row: usize, rows: usize },
}
