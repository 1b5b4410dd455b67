//! End-to-end tests of the calculator front end.
//!
//! Each test parses a command line, feeds `run` an in-memory stdin and checks
//! both the returned report and what was written.

use approx::assert_relative_eq;
use clap::Parser;
use footprint::cli::Args;
use footprint::errors::ShellError;
use footprint::run;
use footprint_core::{AnnualEmissionReport, Category, FootprintError};
use std::fs;
use std::io::Cursor;
use std::path::PathBuf;
use std::sync::Mutex;

fn run_with(argv: &[&str], stdin: &str) -> (Result<AnnualEmissionReport, ShellError>, String) {
    let args = Args::try_parse_from(argv).expect("invalid test arguments");
    let mut input = Cursor::new(stdin.to_string());
    let mut output = Vec::new();
    let result = run(&args, &mut input, &mut output);
    (result, String::from_utf8(output).unwrap())
}

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("footprint-tests-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_flags_text_output() {
    let (result, text) = run_with(&["footprint", "--gasoline", "50", "--diesel", "20"], "");
    let report = result.unwrap();

    assert_relative_eq!(report.total_tonnes(), 1.9524, epsilon = 1e-12);
    assert!(text.contains("Your annual carbon footprint is **1.95 tonnes of CO₂e**."));
    assert!(text.contains("Largest source: Gasoline"));
    assert!(text.contains("Emissions Breakdown"));
    assert!(text.contains("Emissions Distribution"));
    assert!(text.contains("Tips to Reduce Your Carbon Footprint"));
}

#[test]
fn test_no_input_is_zero_footprint() {
    let (result, text) = run_with(&["footprint", "--no-chart", "--no-tips"], "");
    let report = result.unwrap();

    assert_eq!(report.total_tonnes(), 0.0);
    assert!(text.contains("**0.00 tonnes of CO₂e**"));
    assert!(!text.contains("Emissions Distribution"));
}

#[test]
fn test_json_output() {
    let (result, text) = run_with(&["footprint", "--electricity", "100", "--format", "json"], "");
    result.unwrap();

    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["readings"]["electricity"], 100.0);
    assert_relative_eq!(
        value["total_tonnes"].as_f64().unwrap(),
        0.1104,
        epsilon = 1e-12
    );
}

#[test]
fn test_input_file_with_flag_override() {
    let path = temp_file(
        "household.toml",
        "[readings]\nelectricity = 100.0\nwater = 10.0\n",
    );
    let path_str = path.to_str().unwrap();
    let (result, _) = run_with(&["footprint", "--input", path_str, "--water", "0"], "");
    let report = result.unwrap();

    assert_relative_eq!(report.emission(Category::Electricity), 110.4, epsilon = 1e-9);
    assert_eq!(report.emission(Category::Water), 0.0);
}

#[test]
fn test_json_input_file_with_factors() {
    let path = temp_file(
        "household.json",
        r#"{"readings": {"electricity": 10}, "factors": {"electricity": 0.5}}"#,
    );
    let (result, _) = run_with(&["footprint", "-i", path.to_str().unwrap()], "");
    let report = result.unwrap();
    assert_relative_eq!(report.emission(Category::Electricity), 60.0, epsilon = 1e-12);
}

#[test]
fn test_negative_file_reading_is_rejected() {
    let path = temp_file("negative.toml", "[readings]\nlpg = -3.0\n");
    let (result, text) = run_with(&["footprint", "--input", path.to_str().unwrap()], "");

    match result {
        Err(ShellError::Model(FootprintError::InvalidReading { category, .. })) => {
            assert_eq!(category, Category::Lpg)
        }
        other => panic!("Unexpected result: {other:?}"),
    }
    assert!(text.is_empty());
}

#[test]
fn test_interactive_form() {
    let (result, text) = run_with(
        &["footprint", "--interactive", "--no-tips"],
        "100\n\n\n50\n20\n\n\n",
    );
    let report = result.unwrap();

    assert_relative_eq!(
        report.total_tonnes(),
        (110.4 + 1314.0 + 638.4) / 1000.0,
        epsilon = 1e-9
    );
    assert!(text.starts_with("Enter your monthly data"));
    assert!(text.contains("Household Carbon Footprint Calculator"));
}

#[test]
fn test_flag_overrides_form_answer() {
    let (result, _) = run_with(
        &["footprint", "--interactive", "--water", "3"],
        "\n\n\n\n\n\n6\n",
    );
    let report = result.unwrap();

    assert_relative_eq!(report.emission(Category::Water), 3.0 * 12.0 * 0.29, epsilon = 1e-9);
    assert_relative_eq!(report.total_tonnes(), 3.0 * 12.0 * 0.29 / 1000.0, epsilon = 1e-12);
}

#[test]
fn test_input_file_seeds_form() {
    let path = temp_file("seeded.toml", "[readings]\nelectricity = 100.0\nlpg = 13.0\n");
    let (result, text) = run_with(
        &["footprint", "--interactive", "--input", path.to_str().unwrap()],
        "\n\n2\n",
    );
    let report = result.unwrap();

    assert!(text.contains("Electricity (kWh/month) [100]: "));
    assert!(text.contains("LPG (kg/month) [13]: "));
    assert_relative_eq!(report.emission(Category::Electricity), 110.4, epsilon = 1e-9);
    assert_relative_eq!(report.emission(Category::Lpg), 2.0 * 12.0 * 2.98, epsilon = 1e-9);
}

struct CapturingLogger {
    records: Mutex<Vec<(log::Level, String)>>,
}

impl log::Log for CapturingLogger {
    fn enabled(&self, _metadata: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        self.records
            .lock()
            .unwrap()
            .push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

static LOGGER: CapturingLogger = CapturingLogger {
    records: Mutex::new(Vec::new()),
};

#[test]
fn test_zero_readings_are_not_a_warning() {
    // set_logger only succeeds once per process; the level is set either way
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(log::LevelFilter::Trace);

    let (result, _) = run_with(&["footprint"], "");
    assert_eq!(result.unwrap().total_tonnes(), 0.0);

    let records = LOGGER.records.lock().unwrap();
    let zero_records: Vec<_> = records
        .iter()
        .filter(|(_, message)| message.starts_with("All readings are zero"))
        .collect();
    assert!(!zero_records.is_empty());
    assert!(zero_records
        .iter()
        .all(|(level, _)| *level == log::Level::Info));
}
