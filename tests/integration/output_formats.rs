// tests/integration/output_formats.rs
use kanon_core::OutputFormat;

#[path = "../common/mod.rs"]
mod common;
use common::{FOUR_AGES, TempDir, base_options, run_to_string};

#[test]
fn csv_quotes_fields_holding_the_delimiter() {
    let dir = TempDir::new("csv_quoting");
    let input = dir.write_file("table.csv", "city,income\n\"a, b\",x\n\"a, b\",y\n");
    let output = dir.path().join("out.csv");

    let mut options = base_options(&input, &output);
    options.quasi = vec!["city".to_string()];
    options.numeric = vec![];
    let (summary, written) = run_to_string(options);

    assert_eq!(summary.groups, 1);
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines, ["city,income,count", "\"a, b\",x,1", "\"a, b\",y,1"]);
}

#[test]
fn tsv_separates_fields_with_tabs() {
    let dir = TempDir::new("tsv");
    let input = dir.write_file("table.csv", FOUR_AGES);
    let output = dir.path().join("out.tsv");

    let mut options = base_options(&input, &output);
    options.format = OutputFormat::Tsv;
    let (_, written) = run_to_string(options);

    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines[0], "age\tincome\tcount");
    assert_eq!(lines[1], "10\ta\t2");
}

#[test]
fn json_document_keys_records_by_column_name() {
    let dir = TempDir::new("json");
    let input = dir.write_file("table.csv", FOUR_AGES);
    let output = dir.path().join("out.json");

    let mut options = base_options(&input, &output);
    options.format = OutputFormat::Json;
    let (_, written) = run_to_string(options);

    let parsed: serde_json::Value = serde_json::from_str(&written).unwrap();
    let records = parsed["records"].as_array().unwrap();
    assert_eq!(records.len(), 4);
    assert_eq!(records[0]["age"], 10.0);
    assert_eq!(records[0]["income"], "a");
    assert_eq!(records[0]["count"], 2);
    assert_eq!(records[3]["age"], "50~60");
    assert_eq!(parsed["summary"]["k"], 2);
    assert_eq!(parsed["summary"]["metric"], 8);
}

#[test]
fn jsonl_streams_records_then_a_total_line() {
    let dir = TempDir::new("jsonl");
    let input = dir.write_file("table.csv", FOUR_AGES);
    let output = dir.path().join("out.jsonl");

    let mut options = base_options(&input, &output);
    options.format = OutputFormat::Jsonl;
    let (_, written) = run_to_string(options);

    let lines: Vec<serde_json::Value> = written
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(lines.len(), 5);
    assert!(lines[..4].iter().all(|line| line["type"] == "record"));
    assert_eq!(lines[4]["type"], "total");
    assert_eq!(lines[4]["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(lines[4]["metric"], 8);
}

#[test]
fn yaml_document_holds_records_and_summary() {
    let dir = TempDir::new("yaml");
    let input = dir.write_file("table.csv", FOUR_AGES);
    let output = dir.path().join("out.yaml");

    let mut options = base_options(&input, &output);
    options.format = OutputFormat::Yaml;
    let (_, written) = run_to_string(options);

    assert!(written.contains("records:"));
    assert!(written.contains("summary:"));
    assert!(written.contains("metric: 8"));
}

#[test]
fn metric_only_suppresses_the_records() {
    let dir = TempDir::new("metric_only");
    let input = dir.write_file("table.csv", FOUR_AGES);
    let output = dir.path().join("metric.txt");

    let mut options = base_options(&input, &output);
    options.metric_only = true;
    let (_, written) = run_to_string(options);

    assert_eq!(written, "8\n");
}
