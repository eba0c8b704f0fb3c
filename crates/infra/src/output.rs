// crates/infra/src/output.rs
pub mod delimited;
pub mod json;
#[cfg(feature = "yaml")]
pub mod yaml;

use kanon_domain::analytics::MergedRecord;
use kanon_shared_kernel::Result;
use serde::Serialize;

/// Borrowed view of one run's published table, shared by every
/// formatter. Column order is quasi-identifiers first, then the
/// sensitive column, then the count.
pub struct PublishedTable<'a> {
    pub quasi_columns: &'a [String],
    pub sensitive_column: &'a str,
    pub records: &'a [MergedRecord],
}

/// Run accounting attached to structured output.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RunSummary {
    pub k: usize,
    pub input_rows: usize,
    pub suppressed_rows: usize,
    pub published_rows: usize,
    pub groups: usize,
    pub metric: u64,
}

/// One expanded record as a JSON object keyed by column name.
pub(crate) fn record_object(
    table: &PublishedTable<'_>,
    record: &MergedRecord,
) -> Result<serde_json::Map<String, serde_json::Value>> {
    let mut object = serde_json::Map::with_capacity(table.quasi_columns.len() + 2);
    for (name, value) in table.quasi_columns.iter().zip(&record.quasi) {
        object.insert(name.clone(), serde_json::to_value(value)?);
    }
    object.insert(table.sensitive_column.to_string(), serde_json::to_value(&record.sensitive)?);
    object.insert("count".to_string(), serde_json::Value::from(record.count));
    Ok(object)
}
