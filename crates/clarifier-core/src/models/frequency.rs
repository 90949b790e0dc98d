use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Treatment frequency directive. At most one appears in an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Frequency {
    FiveWeeklyFourWeeks,
    ThreeWeeklyFourWeeks,
    FiveWeeklyTwoWeeks,
    SixVisitsTwoWeeks,
}

impl Frequency {
    /// Resolution order when several markers are selected.
    pub const PRIORITY: [Frequency; 4] = [
        Frequency::FiveWeeklyFourWeeks,
        Frequency::ThreeWeeklyFourWeeks,
        Frequency::FiveWeeklyTwoWeeks,
        Frequency::SixVisitsTwoWeeks,
    ];

    /// Marker carried by the frequency checkbox's selection token. Lowercase.
    pub fn marker(self) -> &'static str {
        match self {
            Frequency::FiveWeeklyFourWeeks => "5x4",
            Frequency::ThreeWeeklyFourWeeks => "3x4",
            Frequency::FiveWeeklyTwoWeeks => "5x2",
            Frequency::SixVisitsTwoWeeks => "6visits",
        }
    }

    pub fn phrase(self) -> &'static str {
        match self {
            Frequency::FiveWeeklyFourWeeks => "5x/wk x 4wks",
            Frequency::ThreeWeeklyFourWeeks => "3x/wk x 4wks",
            Frequency::FiveWeeklyTwoWeeks => "5x/wk x 2wks",
            Frequency::SixVisitsTwoWeeks => "6 visits in 2 wks",
        }
    }

    pub fn matches(self, selection: &str) -> bool {
        selection.to_ascii_lowercase().contains(self.marker())
    }

    /// Highest-priority directive present anywhere in `selections`.
    pub fn detect<S: AsRef<str>>(selections: &[S]) -> Option<Frequency> {
        Self::PRIORITY
            .into_iter()
            .find(|f| selections.iter().any(|s| f.matches(s.as_ref())))
    }
}
