use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::selection::Selection;
use crate::error::CoreError;

/// Everything a front end sends to generate one order.
///
/// Both lists accept `null` or may be omitted; either reads as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderRequest {
    #[serde(default)]
    pub selections: Option<Vec<String>>,
    #[serde(default)]
    pub diet_targets: Option<Vec<String>>,
}

impl OrderRequest {
    pub fn new(selections: Vec<String>, diet_targets: Vec<String>) -> Self {
        Self {
            selections: Some(selections),
            diet_targets: Some(diet_targets),
        }
    }

    pub fn from_selections(selections: &[Selection], diet_targets: Vec<String>) -> Self {
        Self::new(selections.iter().map(Selection::token).collect(), diet_targets)
    }

    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn selections(&self) -> &[String] {
        self.selections.as_deref().unwrap_or_default()
    }

    pub fn diet_targets(&self) -> &[String] {
        self.diet_targets.as_deref().unwrap_or_default()
    }
}
