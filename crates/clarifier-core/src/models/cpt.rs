use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Billing procedure code appended to the order text.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum CptCode {
    /// 92526: treatment of swallowing dysfunction and/or oral function for feeding.
    Swallowing,
    /// 92507: treatment of speech, language, voice, communication and/or auditory processing.
    SpeechLanguage,
}

impl CptCode {
    pub const ALL: [CptCode; 2] = [CptCode::Swallowing, CptCode::SpeechLanguage];

    pub fn code(self) -> &'static str {
        match self {
            CptCode::Swallowing => "92526",
            CptCode::SpeechLanguage => "92507",
        }
    }
}

impl fmt::Display for CptCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CPT {}", self.code())
    }
}
