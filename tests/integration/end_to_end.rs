// tests/integration/end_to_end.rs
use kanon_core::{ConfigService, OutputFormat, run_with_config};

#[path = "../common/mod.rs"]
mod common;
use common::{FOUR_AGES, TempDir, WORKCLASS_SAMPLE, base_options, run_to_string};

#[test]
fn four_ages_split_into_two_published_pairs() {
    let dir = TempDir::new("four_ages");
    let input = dir.write_file("table.csv", FOUR_AGES);
    let output = dir.path().join("out.csv");

    let (summary, written) = run_to_string(base_options(&input, &output));

    assert_eq!(summary.k, 2);
    assert_eq!(summary.input_rows, 4);
    assert_eq!(summary.suppressed_rows, 0);
    assert_eq!(summary.published_rows, 4);
    assert_eq!(summary.groups, 2);
    assert_eq!(summary.metric, 8);

    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(
        lines,
        ["age,income,count", "10,a,2", "10,a,2", "50~60,b,2", "50~60,b,2"]
    );
}

#[test]
fn k_larger_than_the_table_publishes_one_group() {
    let dir = TempDir::new("oversized_k");
    let input = dir.write_file("table.csv", FOUR_AGES);
    let output = dir.path().join("out.csv");

    let mut options = base_options(&input, &output);
    options.k = 10;
    let (summary, written) = run_to_string(options);

    assert_eq!(summary.groups, 1);
    assert_eq!(summary.metric, 16);

    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(
        lines,
        [
            "age,income,count",
            "10~60,a,2",
            "10~60,a,2",
            "10~60,b,2",
            "10~60,b,2"
        ]
    );
}

#[test]
fn placeholder_rows_are_suppressed_and_counted() {
    let dir = TempDir::new("na_rows");
    let input = dir.write_file(
        "table.csv",
        "age,income\n10,a\n10,a\n?,a\n50,b\n60,b\n30,?\n",
    );
    let output = dir.path().join("out.csv");

    let (summary, written) = run_to_string(base_options(&input, &output));

    assert_eq!(summary.input_rows, 6);
    assert_eq!(summary.suppressed_rows, 2);
    assert_eq!(summary.published_rows, 4);
    assert_eq!(summary.metric, 8);
    assert!(written.contains("50~60,b,2"));
}

#[test]
fn headerless_input_uses_declared_columns() {
    let dir = TempDir::new("headerless");
    let input = dir.write_file("adult.data", "10,a\n10,a\n50,b\n60,b\n");
    let output = dir.path().join("out.csv");

    let mut options = base_options(&input, &output);
    options.columns = vec!["age".to_string(), "income".to_string()];
    let (summary, written) = run_to_string(options);

    assert_eq!(summary.input_rows, 4);
    assert_eq!(summary.metric, 8);
    assert!(written.starts_with("age,income,count\n"));
}

#[test]
fn semicolon_delimited_input_is_supported() {
    let dir = TempDir::new("semicolon");
    let input = dir.write_file("table.csv", "age;income\n10;a\n10;a\n50;b\n60;b\n");
    let output = dir.path().join("out.csv");

    let mut options = base_options(&input, &output);
    options.delimiter = Some(';');
    let (summary, written) = run_to_string(options);

    assert_eq!(summary.metric, 8);
    assert!(written.contains("10,a,2"));
}

#[test]
fn census_sample_keeps_every_group_at_k() {
    let dir = TempDir::new("census");
    let input = dir.write_file("table.csv", WORKCLASS_SAMPLE);
    let output = dir.path().join("out.csv");

    let mut options = base_options(&input, &output);
    options.quasi = vec!["age".to_string(), "workclass".to_string()];
    let (summary, written) = run_to_string(options);

    assert_eq!(summary.input_rows, 8);
    assert_eq!(summary.published_rows, 8);
    assert_eq!(summary.groups, 4);
    assert_eq!(summary.metric, 16);

    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(
        lines,
        [
            "age,workclass,income,count",
            "28~37,Private,>50K,2",
            "28~37,Private,>50K,2",
            "38~39,Private~State-gov,<=50K,2",
            "38~39,Private~State-gov,<=50K,2",
            "49~53,Private,<=50K,2",
            "49~53,Private,<=50K,2",
            "50~52,Self-emp,<=50K,1",
            "50~52,Self-emp,>50K,1"
        ]
    );
}

#[test]
fn unknown_quasi_column_fails_with_its_name() {
    let dir = TempDir::new("unknown_column");
    let input = dir.write_file("table.csv", FOUR_AGES);
    let output = dir.path().join("out.csv");

    let mut options = base_options(&input, &output);
    options.quasi = vec!["height".to_string()];
    options.numeric = vec![];
    let config = ConfigService::build(options).unwrap();

    let err = run_with_config(&config).unwrap_err();
    assert!(err.to_string().contains("height"));
}

#[test]
fn malformed_row_reports_its_line_number() {
    let dir = TempDir::new("malformed");
    let input = dir.write_file("table.csv", "age,income\n10,a\n50\n60,b\n");
    let output = dir.path().join("out.csv");

    let config = ConfigService::build(base_options(&input, &output)).unwrap();

    let err = run_with_config(&config).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("line 3"));
    assert!(message.contains("expected 2"));
}

#[test]
fn structured_formats_share_the_same_summary() {
    let dir = TempDir::new("summary_parity");
    let input = dir.write_file("table.csv", FOUR_AGES);

    let mut json_options = base_options(&input, &dir.path().join("out.json"));
    json_options.format = OutputFormat::Json;
    let (json_summary, _) = run_to_string(json_options);

    let mut csv_options = base_options(&input, &dir.path().join("out.csv"));
    csv_options.format = OutputFormat::Csv;
    let (csv_summary, _) = run_to_string(csv_options);

    assert_eq!(json_summary.metric, csv_summary.metric);
    assert_eq!(json_summary.groups, csv_summary.groups);
    assert_eq!(json_summary.published_rows, csv_summary.published_rows);
}
