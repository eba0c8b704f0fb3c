// crates/infra/src/output/json.rs
use std::io::Write;

use kanon_domain::analytics::Merger;
use kanon_shared_kernel::Result;

use super::{PublishedTable, RunSummary, record_object};

/// Writes one pretty-printed document holding the expanded records
/// and the run summary.
pub fn output_json(
    table: &PublishedTable<'_>,
    summary: &RunSummary,
    out: &mut impl Write,
) -> Result<()> {
    let records = expanded_objects(table)?;
    let document = serde_json::json!({
        "records": records,
        "summary": summary,
    });
    writeln!(out, "{}", serde_json::to_string_pretty(&document)?)?;
    Ok(())
}

/// Writes one object per published row, then a trailing total object.
/// Every line is tagged with a `type` field so consumers can stream
/// the output without buffering.
pub fn output_jsonl(
    table: &PublishedTable<'_>,
    summary: &RunSummary,
    out: &mut impl Write,
) -> Result<()> {
    for record in Merger::expanded(table.records) {
        let mut object = record_object(table, record)?;
        object.insert("type".to_string(), serde_json::Value::from("record"));
        writeln!(out, "{}", serde_json::Value::Object(object))?;
    }

    let mut total = match serde_json::to_value(summary)? {
        serde_json::Value::Object(map) => map,
        _ => serde_json::Map::new(),
    };
    total.insert("type".to_string(), serde_json::Value::from("total"));
    total.insert(
        "version".to_string(),
        serde_json::Value::from(env!("CARGO_PKG_VERSION")),
    );
    writeln!(out, "{}", serde_json::Value::Object(total))?;
    Ok(())
}

fn expanded_objects(table: &PublishedTable<'_>) -> Result<Vec<serde_json::Value>> {
    Merger::expanded(table.records)
        .map(|record| Ok(serde_json::Value::Object(record_object(table, record)?)))
        .collect()
}
