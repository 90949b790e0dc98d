use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::cpt::CptCode;
use super::domain::DomainTag;
use crate::error::CoreError;
use crate::tables;

/// A diagnosis condition group.
///
/// Declaration order is the order conditions are listed in the order header.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum CodeGroup {
    Dysphagia,
    Cognitive,
    Aphasia,
    Dysarthria,
    Apraxia,
    OtherSpeech,
    Dysphonia,
    Aphonia,
    OtherSpeechDisturbance,
}

impl CodeGroup {
    pub const ALL: [CodeGroup; 9] = [
        CodeGroup::Dysphagia,
        CodeGroup::Cognitive,
        CodeGroup::Aphasia,
        CodeGroup::Dysarthria,
        CodeGroup::Apraxia,
        CodeGroup::OtherSpeech,
        CodeGroup::Dysphonia,
        CodeGroup::Aphonia,
        CodeGroup::OtherSpeechDisturbance,
    ];

    pub fn id(self) -> &'static str {
        match self {
            CodeGroup::Dysphagia => "dysphagia",
            CodeGroup::Cognitive => "cognitive",
            CodeGroup::Aphasia => "aphasia",
            CodeGroup::Dysarthria => "dysarthria",
            CodeGroup::Apraxia => "apraxia",
            CodeGroup::OtherSpeech => "other_speech",
            CodeGroup::Dysphonia => "dysphonia",
            CodeGroup::Aphonia => "aphonia",
            CodeGroup::OtherSpeechDisturbance => "other_speech_disturbance",
        }
    }

    /// Static membership, before any per-order regrouping.
    pub fn codes(self) -> &'static [&'static str] {
        match self {
            CodeGroup::Dysphagia => tables::DYSPHAGIA,
            CodeGroup::Cognitive => tables::COGNITIVE,
            CodeGroup::Aphasia => tables::APHASIA,
            CodeGroup::Dysarthria => tables::DYSARTHRIA,
            CodeGroup::Apraxia => tables::APRAXIA,
            CodeGroup::OtherSpeech => tables::OTHER_SPEECH,
            CodeGroup::Dysphonia => tables::DYSPHONIA,
            CodeGroup::Aphonia => tables::APHONIA,
            CodeGroup::OtherSpeechDisturbance => tables::OTHER_SPEECH_DISTURBANCE,
        }
    }

    /// Condition name as written in the order header.
    pub fn condition_name(self) -> &'static str {
        match self {
            CodeGroup::Dysphagia => "dysphagia",
            CodeGroup::Cognitive => "cognitive deficit",
            CodeGroup::Aphasia => "aphasia",
            CodeGroup::Dysarthria => "dysarthria",
            CodeGroup::Apraxia => "apraxia",
            CodeGroup::OtherSpeech => "other speech & lang deficits following stroke",
            CodeGroup::Dysphonia => "dysphonia",
            CodeGroup::Aphonia => "aphonia",
            CodeGroup::OtherSpeechDisturbance => "other speech disturbances",
        }
    }

    pub fn intervention(self) -> Intervention {
        match self {
            CodeGroup::Dysphagia => Intervention::Feeding,
            CodeGroup::Cognitive => Intervention::CognitiveLinguistic,
            CodeGroup::Aphasia => Intervention::Language,
            CodeGroup::Dysarthria | CodeGroup::Apraxia | CodeGroup::OtherSpeechDisturbance => {
                Intervention::MotorSpeech
            }
            CodeGroup::OtherSpeech => Intervention::SpeechLanguage,
            CodeGroup::Dysphonia | CodeGroup::Aphonia => Intervention::Voice,
        }
    }

    /// Functional domain named in the LTG clause. Dysphagia is covered by the
    /// diet targets instead.
    pub fn domain(self) -> Option<DomainTag> {
        match self {
            CodeGroup::Cognitive => Some(DomainTag::Cognition),
            CodeGroup::Aphasia => Some(DomainTag::Language),
            CodeGroup::Dysarthria | CodeGroup::Apraxia | CodeGroup::OtherSpeech => {
                Some(DomainTag::MotorSpeech)
            }
            CodeGroup::Dysphonia | CodeGroup::Aphonia => Some(DomainTag::Voice),
            CodeGroup::Dysphagia | CodeGroup::OtherSpeechDisturbance => None,
        }
    }

    pub fn cpt(self) -> Option<CptCode> {
        match self {
            CodeGroup::Dysphagia => Some(CptCode::Swallowing),
            CodeGroup::Cognitive
            | CodeGroup::Aphasia
            | CodeGroup::Dysarthria
            | CodeGroup::Apraxia
            | CodeGroup::OtherSpeech
            | CodeGroup::Dysphonia
            | CodeGroup::Aphonia => Some(CptCode::SpeechLanguage),
            CodeGroup::OtherSpeechDisturbance => None,
        }
    }
}

impl fmt::Display for CodeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for CodeGroup {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        CodeGroup::ALL
            .into_iter()
            .find(|g| g.id() == wanted)
            .ok_or_else(|| CoreError::UnknownCodeGroup(s.to_string()))
    }
}

/// Intervention phrase listed after "which may include".
///
/// Declaration order is the order phrases appear in the order text, which is
/// not the header order: motor speech precedes the generic speech/lang phrase.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Intervention {
    Feeding,
    CognitiveLinguistic,
    Language,
    MotorSpeech,
    SpeechLanguage,
    Voice,
}

impl Intervention {
    pub const ALL: [Intervention; 6] = [
        Intervention::Feeding,
        Intervention::CognitiveLinguistic,
        Intervention::Language,
        Intervention::MotorSpeech,
        Intervention::SpeechLanguage,
        Intervention::Voice,
    ];

    pub fn phrase(self) -> &'static str {
        match self {
            Intervention::Feeding => "oropharyngeal retraining, dysphagia management, PO trials",
            Intervention::CognitiveLinguistic => "cognitive-linguistic tx, compensatory strategies",
            Intervention::Language => "rec/exp language training, word finding strategies",
            Intervention::MotorSpeech => "motor speech training, intelligibility strategies",
            Intervention::SpeechLanguage => "speech/lang tx",
            Intervention::Voice => "voice tx, vocal strategies",
        }
    }
}
