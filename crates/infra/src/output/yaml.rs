// crates/infra/src/output/yaml.rs
use std::io::Write;

use kanon_domain::analytics::Merger;
use kanon_shared_kernel::Result;

use super::{PublishedTable, RunSummary, record_object};

/// Writes the expanded records and summary as one YAML document.
pub fn output_yaml(
    table: &PublishedTable<'_>,
    summary: &RunSummary,
    out: &mut impl Write,
) -> Result<()> {
    let records: Result<Vec<serde_json::Value>> = Merger::expanded(table.records)
        .map(|record| Ok(serde_json::Value::Object(record_object(table, record)?)))
        .collect();
    let document = serde_json::json!({
        "records": records?,
        "summary": summary,
    });
    write!(out, "{}", serde_yaml::to_string(&document)?)?;
    Ok(())
}
