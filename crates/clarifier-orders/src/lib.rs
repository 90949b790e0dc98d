//! clarifier-orders
//!
//! Therapy clarification order synthesis. Pure and synchronous: selections
//! in, one line of order text out. No state is kept between calls.
//!
//! The pipeline runs strictly forward:
//! [`classify`] → [`clauses`] → [`govern`].

pub mod classify;
pub mod clauses;
pub mod govern;

use clarifier_core::models::frequency::Frequency;
use clarifier_core::models::request::OrderRequest;

use classify::Classification;

/// Returned verbatim when nothing was selected.
pub const NO_DIAGNOSES_SELECTED: &str = "No diagnoses selected.";

/// Synthesize an order from diagnosis/frequency selections alone.
pub fn synthesize<S: AsRef<str>>(selections: &[S]) -> String {
    synthesize_order::<S, &str>(selections, &[])
}

/// Synthesize an order from diagnosis/frequency selections plus the
/// long-term-goal diet targets checked in the LTG section.
pub fn synthesize_order<S: AsRef<str>, T: AsRef<str>>(
    selections: &[S],
    diet_targets: &[T],
) -> String {
    if selections.is_empty() {
        return NO_DIAGNOSES_SELECTED.to_string();
    }

    let classification = Classification::classify(selections);
    let frequency = Frequency::detect(selections);
    let draft = clauses::assemble(selections, &classification, frequency, diet_targets);
    govern::govern(draft)
}

pub fn synthesize_request(request: &OrderRequest) -> String {
    synthesize_order(request.selections(), request.diet_targets())
}
