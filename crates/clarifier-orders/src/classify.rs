use clarifier_core::models::code_group::{CodeGroup, Intervention};
use clarifier_core::models::cpt::CptCode;
use clarifier_core::models::domain::DomainTag;
use clarifier_core::models::selection::leading_token;
use clarifier_core::tables::{APHONIA_MARKER, OVERFLOW_CODE};

/// A condition group present in the selections, with the distinct codes that
/// matched it in first-occurrence order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupMatch {
    pub group: CodeGroup,
    pub codes: Vec<String>,
}

/// Result of classifying one order's selections. Matches are kept in header
/// order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    matches: Vec<GroupMatch>,
}

impl Classification {
    pub fn classify<S: AsRef<str>>(selections: &[S]) -> Self {
        let overflow_to_aphonia = overflow_to_aphonia(selections);

        let matches = CodeGroup::ALL
            .into_iter()
            .filter_map(|group| {
                let codes = effective_codes(group, overflow_to_aphonia);
                let matching: Vec<&str> = selections
                    .iter()
                    .map(|s| s.as_ref())
                    .filter(|s| matches_any(s, &codes))
                    .collect();
                if matching.is_empty() {
                    return None;
                }
                Some(GroupMatch {
                    group,
                    codes: distinct_leading_tokens(&matching),
                })
            })
            .collect();

        Self { matches }
    }

    pub fn matches(&self) -> &[GroupMatch] {
        &self.matches
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn has(&self, group: CodeGroup) -> bool {
        self.matches.iter().any(|m| m.group == group)
    }

    /// Matched codes for `group`; empty when the group is absent.
    pub fn codes_for(&self, group: CodeGroup) -> &[String] {
        self.matches
            .iter()
            .find(|m| m.group == group)
            .map(|m| m.codes.as_slice())
            .unwrap_or_default()
    }

    pub fn interventions(&self) -> Vec<Intervention> {
        Intervention::ALL
            .into_iter()
            .filter(|i| self.matches.iter().any(|m| m.group.intervention() == *i))
            .collect()
    }

    pub fn domains(&self) -> Vec<DomainTag> {
        DomainTag::ALL
            .into_iter()
            .filter(|d| self.matches.iter().any(|m| m.group.domain() == Some(*d)))
            .collect()
    }

    pub fn cpt_codes(&self) -> Vec<CptCode> {
        CptCode::ALL
            .into_iter()
            .filter(|c| self.matches.iter().any(|m| m.group.cpt() == Some(*c)))
            .collect()
    }
}

/// Loose code match: exact, or the code appears anywhere in the selection.
/// Case-sensitive.
pub fn matches_code(selection: &str, code: &str) -> bool {
    selection == code || selection.contains(code)
}

pub fn matches_any(selection: &str, codes: &[&str]) -> bool {
    codes.iter().any(|c| matches_code(selection, c))
}

/// R49.8 counts as aphonia only when R49.1 is selected in the same order.
pub fn overflow_to_aphonia<S: AsRef<str>>(selections: &[S]) -> bool {
    let starts_with = |prefix: &str| selections.iter().any(|s| s.as_ref().starts_with(prefix));
    starts_with(APHONIA_MARKER) && starts_with(OVERFLOW_CODE)
}

/// Group membership for one order, after applying the R49.8 rule.
pub fn effective_codes(group: CodeGroup, overflow_to_aphonia: bool) -> Vec<&'static str> {
    let codes = group.codes().iter().copied();
    match group {
        CodeGroup::Dysphonia if overflow_to_aphonia => {
            codes.filter(|c| *c != OVERFLOW_CODE).collect()
        }
        CodeGroup::Aphonia if overflow_to_aphonia => codes.chain([OVERFLOW_CODE]).collect(),
        _ => codes.collect(),
    }
}

fn distinct_leading_tokens(selections: &[&str]) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::new();
    for token in selections.iter().filter_map(|s| leading_token(s)) {
        if !tokens.iter().any(|t| t == token) {
            tokens.push(token.to_string());
        }
    }
    tokens
}
