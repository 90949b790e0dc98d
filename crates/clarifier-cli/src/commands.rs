use std::io::Write;
use std::path::Path;

use clarifier_core::models::code_group::CodeGroup;
use clarifier_core::models::diet::DietTarget;
use clarifier_core::models::request::OrderRequest;
use clarifier_productivity::clock::{clock_display, clock_out, format_clock_out, parse_clock_in};
use clarifier_productivity::metrics::{format_percentage, summarize};
use clarifier_productivity::sheet::{ProductivitySheet, STORAGE_KEY};
use clarifier_storage::state::{load_state, save_state};
use clarifier_storage::store::LocalStore;
use serde::Serialize;

use crate::config::ClarifierConfig;

/// A generated order and its length in characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderReport {
    pub text: String,
    pub length: usize,
}

/// Combine an optional request file with selections and diet targets given
/// on the command line. File entries come first.
pub fn build_request(
    request_file: Option<&Path>,
    selections: Vec<String>,
    diet_targets: Vec<String>,
) -> eyre::Result<OrderRequest> {
    let mut request = match request_file {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .map_err(|e| eyre::eyre!("failed to read request at {}: {e}", path.display()))?;
            OrderRequest::from_json(&json)?
        }
        None => OrderRequest::default(),
    };

    if !selections.is_empty() {
        request
            .selections
            .get_or_insert_with(Vec::new)
            .extend(selections);
    }
    if !diet_targets.is_empty() {
        request
            .diet_targets
            .get_or_insert_with(Vec::new)
            .extend(diet_targets);
    }
    Ok(request)
}

pub fn order_report(request: &OrderRequest) -> OrderReport {
    let text = clarifier_orders::synthesize_request(request);
    let length = text.chars().count();
    OrderReport { text, length }
}

/// Order text on `out`. The character count goes to `err` so piping the
/// order elsewhere copies only the text; `json` puts both on `out`.
pub fn write_order(
    out: &mut impl Write,
    err: &mut impl Write,
    report: &OrderReport,
    json: bool,
) -> eyre::Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(report)?)?;
    } else {
        writeln!(out, "{}", report.text)?;
        writeln!(err, "{} characters", report.length)?;
    }
    Ok(())
}

/// Code tables for every group followed by the LTG diet targets, or just the
/// `only` group.
pub fn write_codes(out: &mut impl Write, only: Option<CodeGroup>) -> eyre::Result<()> {
    let groups = CodeGroup::ALL
        .into_iter()
        .filter(|g| only.is_none_or(|only| only == *g));
    for group in groups {
        let billing = group
            .cpt()
            .map(|cpt| cpt.to_string())
            .unwrap_or_else(|| "not billed".to_string());
        writeln!(out, "{}: {} ({billing})", group.id(), group.condition_name())?;
        writeln!(out, "  {}", group.codes().join(" "))?;
    }
    if only.is_none() {
        writeln!(out, "ltg diet targets:")?;
        for target in DietTarget::ALL {
            writeln!(out, "  {:<7} {}", target.tag(), target.description())?;
        }
    }
    Ok(())
}

/// Edits to the persisted productivity sheet.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductivityAction {
    Show,
    Log {
        row: usize,
        minutes: String,
        patient: Option<String>,
    },
    Hours {
        hours: u32,
        minutes: u32,
    },
    /// Clear the given rows, or every row when empty.
    Clear { rows: Vec<usize> },
}

/// Apply `action` to the sheet in `store`, persist it if it changed, and
/// print the resulting sheet.
pub fn run_productivity(
    out: &mut impl Write,
    store: &mut LocalStore,
    action: ProductivityAction,
) -> eyre::Result<()> {
    let mut sheet: ProductivitySheet = load_state(store, STORAGE_KEY);

    let changed = match action {
        ProductivityAction::Show => false,
        ProductivityAction::Log {
            row,
            minutes,
            patient,
        } => {
            sheet.log(row, minutes, patient)?;
            true
        }
        ProductivityAction::Hours { hours, minutes } => {
            sheet.set_work_time(hours, minutes);
            true
        }
        ProductivityAction::Clear { rows } => {
            if rows.is_empty() {
                sheet.clear_all();
            } else {
                sheet.clear_rows(&rows)?;
            }
            true
        }
    };

    if changed {
        save_state(store, STORAGE_KEY, &sheet)?;
    }
    write_sheet(out, &sheet)
}

pub fn write_sheet(out: &mut impl Write, sheet: &ProductivitySheet) -> eyre::Result<()> {
    writeln!(out, "{:>3}  {:<24} Minutes", "Row", "Patient")?;
    for (i, row) in sheet.grid().iter().enumerate() {
        writeln!(out, "{:>3}  {:<24} {}", i + 1, row.patient, row.minutes)?;
    }

    let summary = summarize(sheet);
    writeln!(out)?;
    writeln!(
        out,
        "Work time: {} hrs {} minutes",
        sheet.work_hours, sheet.work_minutes
    )?;
    writeln!(out, "Treatment time: {}", summary.treatment)?;
    writeln!(out, "Productivity: {}", format_percentage(summary.percentage))?;
    Ok(())
}

/// Clock-out time for `clock_in`. Work time defaults to the sheet's, lunch
/// to the configured break.
pub fn write_clock_out(
    out: &mut impl Write,
    clock_in: &str,
    hours: Option<f64>,
    minutes: Option<f64>,
    lunch: Option<f64>,
    sheet: &ProductivitySheet,
    config: &ClarifierConfig,
) -> eyre::Result<()> {
    let clock_in = parse_clock_in(clock_in)?;
    let hours = hours.unwrap_or(f64::from(sheet.work_hours));
    let minutes = minutes.unwrap_or(f64::from(sheet.work_minutes));
    let lunch = lunch.unwrap_or(f64::from(config.lunch_break_minutes));

    let time = clock_out(clock_in, hours, minutes, lunch);
    tracing::debug!(%clock_in, hours, minutes, lunch, "computed clock-out");
    writeln!(out, "{}", format_clock_out(time))?;
    Ok(())
}

pub fn write_now(out: &mut impl Write, now: &jiff::Zoned) -> eyre::Result<()> {
    let display = clock_display(now);
    writeln!(out, "{}", display.time)?;
    writeln!(out, "{}", display.date)?;
    Ok(())
}

pub fn write_config(
    out: &mut impl Write,
    path: &Path,
    config: &ClarifierConfig,
) -> eyre::Result<()> {
    writeln!(out, "# {}", path.display())?;
    writeln!(out, "{}", serde_json::to_string_pretty(config)?)?;
    Ok(())
}
