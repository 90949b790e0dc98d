//! Static diagnosis-code tables.
//!
//! Pure data. Membership here is the static configuration; the one
//! per-order adjustment (R49.8 moving from dysphonia to aphonia) is applied
//! by the classifier and never written back.

pub const DYSPHAGIA: &[&str] = &[
    "R13.12", "R13.11", "R13.10", "I69.391", "I69.091", "I69.191", "I69.291", "I69.891",
    "R13.13", "R13.14",
];

pub const COGNITIVE: &[&str] = &[
    "R41.841", "I69.311", "I69.319", "I69.310", "I69.312", "I69.314", "I69.315", "I69.019",
    "I69.119", "I69.219", "I69.919",
];

pub const APHASIA: &[&str] = &["R47.01", "I69.320", "I69.020", "I69.120", "I69.220", "I69.820"];

pub const DYSARTHRIA: &[&str] = &["R47.1", "I69.322", "I69.122", "I69.222", "I69.822"];

pub const APRAXIA: &[&str] = &["I69.390", "I69.090", "I69.190", "I69.290", "I69.890"];

pub const OTHER_SPEECH: &[&str] = &["I68.328"];

pub const DYSPHONIA: &[&str] = &["R49.0", "R49.8", "R49.9"];

pub const APHONIA: &[&str] = &["R49.1"];

pub const OTHER_SPEECH_DISTURBANCE: &[&str] = &["R47.89"];

/// Aphonia-exclusive code. Its presence alongside [`OVERFLOW_CODE`] moves the
/// overflow code into the aphonia group.
pub const APHONIA_MARKER: &str = "R49.1";

/// Shared voice code, grouped under dysphonia unless [`APHONIA_MARKER`] is
/// also selected.
pub const OVERFLOW_CODE: &str = "R49.8";
