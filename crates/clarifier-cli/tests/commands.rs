use clarifier_cli::commands::{
    build_request, order_report, run_productivity, write_clock_out, write_codes, write_now,
    write_order, ProductivityAction,
};
use clarifier_cli::config::ClarifierConfig;
use clarifier_core::models::code_group::CodeGroup;
use clarifier_productivity::sheet::{ProductivitySheet, STORAGE_KEY};
use clarifier_storage::state::load_state;
use clarifier_storage::store::LocalStore;

const DYSPHAGIA_ORDER: &str = "ST Clarification: ST Tx up to 5x/wk x 4wks for dysphagia (R13.12) \
    which may include oropharyngeal retraining, dysphagia management, PO trials. CPT 92526. THE \
    THERAPY CLARIFICATION ORDER SERVES AS THE PHYSICIAN CERTIFICATION FOR THE THERAPY PLAN OF CARE.";

fn output(f: impl FnOnce(&mut Vec<u8>) -> eyre::Result<()>) -> String {
    let mut buf = Vec::new();
    f(&mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn order_from_arguments() {
    let request = build_request(
        None,
        vec![
            "R13.12 Dysphagia, oropharyngeal phase".to_string(),
            "5x4 5x/wk x 4 wks".to_string(),
        ],
        Vec::new(),
    )
    .unwrap();
    let report = order_report(&request);
    assert_eq!(report.text, DYSPHAGIA_ORDER);
    assert_eq!(report.length, 253);

    let mut out = Vec::new();
    let mut err = Vec::new();
    write_order(&mut out, &mut err, &report, false).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), format!("{DYSPHAGIA_ORDER}\n"));
    assert_eq!(String::from_utf8(err).unwrap(), "253 characters\n");
}

#[test]
fn order_as_json() {
    let request = build_request(None, vec!["R13.12 Dysphagia".to_string()], Vec::new()).unwrap();
    let report = order_report(&request);

    let mut out = Vec::new();
    let mut err = Vec::new();
    write_order(&mut out, &mut err, &report, true).unwrap();
    assert!(err.is_empty());

    let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(json["text"], report.text.as_str());
    assert_eq!(json["length"], report.length);
}

#[test]
fn request_file_is_merged_with_arguments() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("request.json");
    std::fs::write(
        &path,
        r#"{"selections": ["R13.12 Dysphagia, oropharyngeal phase"], "diet_targets": ["thins0 thin liquids"]}"#,
    )
    .unwrap();

    let request = build_request(
        Some(path.as_path()),
        vec!["3x4 3x/wk x 4 wks".to_string()],
        vec!["reg7 regular".to_string()],
    )
    .unwrap();
    assert_eq!(request.selections().len(), 2);
    assert_eq!(request.diet_targets().len(), 2);

    assert_eq!(
        order_report(&request).text,
        "ST Clarification: ST Tx up to 3x/wk x 4wks for dysphagia (R13.12) which may include \
         oropharyngeal retraining, dysphagia management, PO trials. CPT 92526. LTG: patient to \
         safely tolerate reg7 regular & thins0 thin liquids. THE THERAPY CLARIFICATION ORDER \
         SERVES AS THE PHYSICIAN CERTIFICATION FOR THE THERAPY PLAN OF CARE."
    );
}

#[test]
fn empty_order_is_the_sentinel() {
    let request = build_request(None, Vec::new(), vec!["reg7".to_string()]).unwrap();
    let report = order_report(&request);
    assert_eq!(report.text, "No diagnoses selected.");
    assert_eq!(report.length, 22);
}

#[test]
fn unreadable_request_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.json");
    assert!(build_request(Some(missing.as_path()), Vec::new(), Vec::new()).is_err());

    let path = dir.path().join("bad.json");
    std::fs::write(&path, "[1, 2").unwrap();
    assert!(build_request(Some(path.as_path()), Vec::new(), Vec::new()).is_err());
}

#[test]
fn codes_listing_covers_every_group() {
    let text = output(|out| write_codes(out, None));
    assert!(text.contains("dysphagia: dysphagia (CPT 92526)"));
    assert!(text.contains("aphonia: aphonia (CPT 92507)"));
    assert!(text.contains("(not billed)"));
    assert!(text.contains("  R49.0 R49.8 R49.9"));
    assert!(text.contains("ltg diet targets:\n  reg7    regular solids (IDDSI 7)\n"));
    assert!(text.contains("  thins0  thin liquids (IDDSI 0)\n"));
    assert_eq!(text.lines().count(), 27);
}

#[test]
fn codes_listing_for_one_group() {
    let group: CodeGroup = "other-speech".parse().unwrap();
    let text = output(|out| write_codes(out, Some(group)));
    assert_eq!(
        text,
        "other_speech: other speech & lang deficits following stroke (CPT 92507)\n  I68.328\n"
    );
}

#[test]
fn productivity_edits_persist() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = LocalStore::open_in(dir.path()).unwrap();

    let log = |row: usize, minutes: &str| ProductivityAction::Log {
        row,
        minutes: minutes.to_string(),
        patient: Some(format!("P{row}")),
    };
    output(|out| run_productivity(out, &mut store, log(1, "30")));
    output(|out| run_productivity(out, &mut store, log(2, "45")));
    let text = output(|out| {
        run_productivity(
            out,
            &mut store,
            ProductivityAction::Hours {
                hours: 7,
                minutes: 30,
            },
        )
    });
    assert!(text.contains("Work time: 7 hrs 30 minutes"));
    assert!(text.contains("Treatment time: 1 hrs 15 minutes"));
    assert!(text.contains("Productivity: 16.67%"));

    let reopened = LocalStore::open_in(dir.path()).unwrap();
    let sheet: ProductivitySheet = load_state(&reopened, STORAGE_KEY);
    assert_eq!(sheet.row(2).unwrap().patient, "P2");
    assert_eq!(sheet.work_minutes, 30);

    let mut store = reopened;
    output(|out| run_productivity(out, &mut store, ProductivityAction::Clear { rows: vec![1] }));
    let sheet: ProductivitySheet = load_state(&store, STORAGE_KEY);
    assert!(sheet.row(1).unwrap().is_blank());
    assert_eq!(sheet.row(2).unwrap().minutes, "45");

    output(|out| run_productivity(out, &mut store, ProductivityAction::Clear { rows: Vec::new() }));
    let sheet: ProductivitySheet = load_state(&store, STORAGE_KEY);
    assert!(sheet.grid().iter().all(|r| r.is_blank()));
    assert_eq!(sheet.work_hours, 7);
}

#[test]
fn showing_an_empty_sheet_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = LocalStore::open_in(dir.path()).unwrap();

    let text = output(|out| run_productivity(out, &mut store, ProductivityAction::Show));
    assert!(text.contains("Productivity: 0.00%"));
    assert!(text.contains("Treatment time: 0 hrs 0 minutes"));
    assert!(text.contains("Work time: 8 hrs 0 minutes"));
    assert!(!text.contains("-0"));
    assert!(!store.path().exists());
}

#[test]
fn bad_row_is_rejected_without_saving() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = LocalStore::open_in(dir.path()).unwrap();

    let mut out = Vec::new();
    let result = run_productivity(
        &mut out,
        &mut store,
        ProductivityAction::Log {
            row: 13,
            minutes: "10".to_string(),
            patient: None,
        },
    );
    assert!(result.is_err());
    assert!(store.get(STORAGE_KEY).is_none());
}

#[test]
fn clock_out_defaults_come_from_sheet_and_config() {
    let mut sheet = ProductivitySheet::default();
    sheet.set_work_time(7, 45);
    let config = ClarifierConfig {
        lunch_break_minutes: 45,
        ..ClarifierConfig::default()
    };

    let text = output(|out| write_clock_out(out, "08:00", None, None, None, &sheet, &config));
    assert_eq!(text, "4:30 PM\n");

    let text = output(|out| {
        write_clock_out(out, "08:00", Some(8.0), Some(0.0), Some(30.0), &sheet, &config)
    });
    assert_eq!(text, "4:30 PM\n");

    let text = output(|out| {
        write_clock_out(out, "08:00", Some(0.0), Some(0.0), None, &sheet, &config)
    });
    assert_eq!(text, "--:--\n");

    let text = output(|out| {
        write_clock_out(out, "08:00", Some(f64::NAN), Some(0.0), None, &sheet, &config)
    });
    assert_eq!(text, "--:--\n");

    let mut out = Vec::new();
    assert!(write_clock_out(&mut out, "8am", None, None, None, &sheet, &config).is_err());
}

#[test]
fn now_prints_time_then_date() {
    let now: jiff::Zoned = "2026-10-16T09:05:00-04:00[-04:00]".parse().unwrap();
    let text = output(|out| write_now(out, &now));
    assert_eq!(text, "9:05 AM\nFriday, October 16, 2026\n");
}
