use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DietTexture {
    Solid,
    Liquid,
}

impl DietTexture {
    /// Texture of an LTG diet-target selection, by substring tag match.
    /// Solid tags are checked first.
    pub fn of(target: &str) -> Option<DietTexture> {
        DietTarget::ALL
            .into_iter()
            .find(|t| target.contains(t.tag()))
            .map(DietTarget::texture)
    }
}

/// IDDSI diet levels offered as long-term-goal targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DietTarget {
    Regular,
    SoftBiteSized,
    MincedMoist,
    Pureed,
    ThinLiquids,
    MildlyThick,
    ModeratelyThick,
    ExtremelyThick,
}

impl DietTarget {
    /// Solids first, then liquids, each in descending IDDSI level.
    pub const ALL: [DietTarget; 8] = [
        DietTarget::Regular,
        DietTarget::SoftBiteSized,
        DietTarget::MincedMoist,
        DietTarget::Pureed,
        DietTarget::ThinLiquids,
        DietTarget::MildlyThick,
        DietTarget::ModeratelyThick,
        DietTarget::ExtremelyThick,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            DietTarget::Regular => "reg7",
            DietTarget::SoftBiteSized => "sb6",
            DietTarget::MincedMoist => "mm5",
            DietTarget::Pureed => "pu4",
            DietTarget::ThinLiquids => "thins0",
            DietTarget::MildlyThick => "mt2",
            DietTarget::ModeratelyThick => "mo3",
            DietTarget::ExtremelyThick => "ex4",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            DietTarget::Regular => "regular solids (IDDSI 7)",
            DietTarget::SoftBiteSized => "soft & bite-sized solids (IDDSI 6)",
            DietTarget::MincedMoist => "minced & moist solids (IDDSI 5)",
            DietTarget::Pureed => "pureed solids (IDDSI 4)",
            DietTarget::ThinLiquids => "thin liquids (IDDSI 0)",
            DietTarget::MildlyThick => "mildly thick liquids (IDDSI 2)",
            DietTarget::ModeratelyThick => "moderately thick liquids (IDDSI 3)",
            DietTarget::ExtremelyThick => "extremely thick liquids (IDDSI 4)",
        }
    }

    pub fn texture(self) -> DietTexture {
        match self {
            DietTarget::Regular
            | DietTarget::SoftBiteSized
            | DietTarget::MincedMoist
            | DietTarget::Pureed => DietTexture::Solid,
            DietTarget::ThinLiquids
            | DietTarget::MildlyThick
            | DietTarget::ModeratelyThick
            | DietTarget::ExtremelyThick => DietTexture::Liquid,
        }
    }
}
