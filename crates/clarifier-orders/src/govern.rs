//! Length governor.
//!
//! Orders longer than [`MAX_ORDER_LEN`] characters are shortened by walking
//! [`SHORTENING_RULES`] in order. The table is order-dependent: several rules
//! only match text produced by an earlier rule (e.g. `cog tx, compensatory
//! strategies` exists only after `cognitive-linguistic tx` became `cog tx`).
//! If every rule has been tried and the text is still too long it is
//! returned as-is; nothing is truncated.

use tracing::debug;

pub const MAX_ORDER_LEN: usize = 500;

/// Replace every occurrence of `pattern` with `replacement`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShorteningRule {
    pub pattern: &'static str,
    pub replacement: &'static str,
}

const fn rule(pattern: &'static str, replacement: &'static str) -> ShorteningRule {
    ShorteningRule {
        pattern,
        replacement,
    }
}

pub const SHORTENING_RULES: &[ShorteningRule] = &[
    rule(
        "oropharyngeal retraining, dysphagia management, PO trials",
        "dysphagia tx",
    ),
    rule("motor speech training", "motor speech tx"),
    rule(
        "motor speech tx, intelligibility strategies",
        "motor speech tx, intelligibility strats",
    ),
    rule("motor speech tx, intelligibility strats", "motor speech tx"),
    rule(
        "rec/exp language training, word finding strategies",
        "language tx, word finding strats",
    ),
    rule("language tx, word finding strats", "language tx"),
    rule("cognitive-linguistic tx", "cog tx"),
    rule("cog tx, compensatory strategies", "cog tx, compensatory strats"),
    rule("cog tx, compensatory strats", "cog tx"),
    rule("language, motor speech", "communication"),
    rule("cognition, communication & voice", "cognition & communication"),
    rule("other speech disturbances", "speech deficit"),
    rule(
        "other speech & lang deficits following stroke",
        "speech/lang deficits from cva",
    ),
    rule("language tx, motor speech tx, voice tx", "communication tx"),
    rule("language tx, motor speech tx", "communication tx"),
    rule("safely ", ""),
];

/// Length in characters, not bytes.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Apply `rule` only if `text` is over `limit`.
pub fn shorten_if_too_long(text: String, rule: &ShorteningRule, limit: usize) -> String {
    if char_len(&text) <= limit || !text.contains(rule.pattern) {
        return text;
    }
    let shortened = text.replace(rule.pattern, rule.replacement);
    debug!(
        pattern = rule.pattern,
        before = char_len(&text),
        after = char_len(&shortened),
        "shortened order text"
    );
    shortened
}

pub fn govern(text: String) -> String {
    govern_with(text, SHORTENING_RULES, MAX_ORDER_LEN)
}

/// Walk `rules` in order, stopping as soon as `text` fits in `limit`.
pub fn govern_with(text: String, rules: &[ShorteningRule], limit: usize) -> String {
    let mut text = text;
    for rule in rules {
        if char_len(&text) <= limit {
            break;
        }
        text = shorten_if_too_long(text, rule, limit);
    }
    text
}
