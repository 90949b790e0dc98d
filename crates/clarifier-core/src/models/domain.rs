use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Functional domain named in "patient to improve ... function".
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DomainTag {
    Cognition,
    Language,
    MotorSpeech,
    Voice,
}

impl DomainTag {
    pub const ALL: [DomainTag; 4] = [
        DomainTag::Cognition,
        DomainTag::Language,
        DomainTag::MotorSpeech,
        DomainTag::Voice,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DomainTag::Cognition => "cognition",
            DomainTag::Language => "language",
            DomainTag::MotorSpeech => "motor speech",
            DomainTag::Voice => "voice",
        }
    }
}

impl fmt::Display for DomainTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
