use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One checked item as the UI reports it: an optional diagnosis code plus
/// the visible label text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Selection {
    #[serde(default)]
    pub code: Option<String>,
    pub label: String,
}

impl Selection {
    pub fn new(code: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            label: label.into(),
        }
    }

    pub fn label_only(label: impl Into<String>) -> Self {
        Self {
            code: None,
            label: label.into(),
        }
    }

    /// The `"<code> <label>"` token handed to the synthesizer.
    pub fn token(&self) -> String {
        let code = self.code.as_deref().unwrap_or_default().trim();
        format!("{code} {}", self.label.trim()).trim().to_string()
    }
}

/// Leading token of a selection, i.e. its code. A selection that starts with
/// whitespace has no leading token.
pub fn leading_token(selection: &str) -> Option<&str> {
    selection
        .split(char::is_whitespace)
        .next()
        .filter(|t| !t.is_empty())
}
