//! Clause assembly.
//!
//! Each clause is built independently from the classification and then
//! concatenated in a fixed order into a single line:
//! header + inclusions + ". " + CPT + LTG + closing.

use clarifier_core::models::diet::DietTexture;
use clarifier_core::models::domain::DomainTag;
use clarifier_core::models::frequency::Frequency;

use crate::classify::Classification;

pub const HEADER_PREAMBLE: &str = "ST Clarification: ST Tx up to";
pub const NO_CONDITIONS: &str = "communication / feeding concerns";
pub const INCLUSION_LEAD: &str = " which may include ";
pub const PMV_PHRASE: &str = "PMV trials";
pub const AAC_PHRASE: &str = "AAC training";
pub const CLOSING: &str = "THE THERAPY CLARIFICATION ORDER SERVES AS THE PHYSICIAN CERTIFICATION FOR THE THERAPY PLAN OF CARE.";

const PMV_MARKER: &str = "pmv";
const AAC_MARKER: &str = "aac";

/// Build the full, ungoverned order text.
pub fn assemble<S: AsRef<str>, T: AsRef<str>>(
    selections: &[S],
    classification: &Classification,
    frequency: Option<Frequency>,
    diet_targets: &[T],
) -> String {
    let domains = classification.domains();
    let diet = ordered_diet_targets(diet_targets);

    let text = format!(
        "{}{}. {}{}{CLOSING}",
        header(classification, frequency),
        inclusion_clause(selections, classification),
        cpt_clause(classification),
        ltg_clause(&diet, &domains),
    );
    replace_semicolons(&text)
}

pub fn header(classification: &Classification, frequency: Option<Frequency>) -> String {
    let mut header = HEADER_PREAMBLE.to_string();
    if let Some(frequency) = frequency {
        header.push(' ');
        header.push_str(frequency.phrase());
    }
    header.push_str(" for ");

    if classification.is_empty() {
        header.push_str(NO_CONDITIONS);
    } else {
        let conditions: Vec<String> = classification
            .matches()
            .iter()
            .map(|m| format!("{} ({})", m.group.condition_name(), m.codes.join(", ")))
            .collect();
        header.push_str(&conditions.join(", "));
    }
    header
}

/// `" which may include ..."`, or empty when no phrase applies.
pub fn inclusion_clause<S: AsRef<str>>(
    selections: &[S],
    classification: &Classification,
) -> String {
    let mut phrases: Vec<&str> = classification
        .interventions()
        .into_iter()
        .map(|i| i.phrase())
        .collect();

    if any_contains_ignore_case(selections, PMV_MARKER) {
        phrases.push(PMV_PHRASE);
    }
    if any_contains_ignore_case(selections, AAC_MARKER) {
        phrases.push(AAC_PHRASE);
    }

    if phrases.is_empty() {
        return String::new();
    }
    format!("{INCLUSION_LEAD}{}", phrases.join(", "))
}

/// `"CPT 92526, CPT 92507. "`, or empty when nothing is billable.
pub fn cpt_clause(classification: &Classification) -> String {
    let codes: Vec<String> = classification
        .cpt_codes()
        .iter()
        .map(ToString::to_string)
        .collect();
    if codes.is_empty() {
        return String::new();
    }
    format!("{}. ", codes.join(", "))
}

/// Long-term-goal clause, ending in `". "`, or empty when there are neither
/// diet targets nor domains.
pub fn ltg_clause(diet: &[&str], domains: &[DomainTag]) -> String {
    let improve = || {
        let labels: Vec<&str> = domains.iter().map(|d| d.label()).collect();
        format!("improve {} function to least impairment level", join_with_and(&labels))
    };

    let goal = match (diet.is_empty(), domains.is_empty()) {
        (false, false) => format!(
            "LTG: patient to safely tolerate {}, patient to {}",
            diet.join(" & "),
            improve()
        ),
        (false, true) => format!("LTG: patient to safely tolerate {}", diet.join(" & ")),
        (true, false) => format!("LTG: patient to {}", improve()),
        (true, true) => return String::new(),
    };
    format!("{}. ", goal.trim().trim_end_matches('.'))
}

/// Diet-target selections with solids first, then liquids. Order within each
/// texture follows the selections; unrecognised entries are dropped.
pub fn ordered_diet_targets<T: AsRef<str>>(diet_targets: &[T]) -> Vec<&str> {
    let targets: Vec<&str> = diet_targets
        .iter()
        .map(|t| t.as_ref().trim())
        .filter(|t| !t.is_empty())
        .collect();

    [DietTexture::Solid, DietTexture::Liquid]
        .into_iter()
        .flat_map(|texture| {
            targets
                .iter()
                .copied()
                .filter(move |t| DietTexture::of(t) == Some(texture))
        })
        .collect()
}

/// `a`, `a & b`, `a, b & c`.
pub fn join_with_and(items: &[&str]) -> String {
    match items {
        [] => String::new(),
        [only] => (*only).to_string(),
        [init @ .., last] => format!("{} & {last}", init.join(", ")),
    }
}

/// Collapse every run of semicolons into a single comma.
pub fn replace_semicolons(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_run = false;
    for ch in text.chars() {
        if ch == ';' {
            if !in_run {
                out.push(',');
            }
            in_run = true;
        } else {
            out.push(ch);
            in_run = false;
        }
    }
    out
}

fn any_contains_ignore_case<S: AsRef<str>>(selections: &[S], marker: &str) -> bool {
    selections
        .iter()
        .any(|s| s.as_ref().to_lowercase().contains(marker))
}
