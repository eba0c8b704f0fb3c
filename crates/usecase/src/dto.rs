// crates/usecase/src/dto.rs
use kanon_domain::analytics::MergedRecord;
use kanon_shared_kernel::value_objects::RowCount;

/// Typing and cleaning directives applied between the raw table and
/// the typed dataset.
#[derive(Debug, Clone, Default)]
pub struct TableShaping {
    /// Columns whose fields parse as numbers; everything else stays
    /// categorical.
    pub numeric_columns: Vec<String>,
    /// Placeholder marking a missing value. Rows carrying it in a
    /// quasi-identifier or the sensitive column are suppressed before
    /// partitioning. `None` disables suppression.
    pub na_token: Option<String>,
}

/// Everything one pipeline run produces.
#[derive(Debug, Clone)]
pub struct AnonymizeOutput {
    /// Published records in finished-group order, one per
    /// (group, sensitive value), each carrying its replication count.
    pub records: Vec<MergedRecord>,
    /// Quasi-identifier column names in declared order.
    pub quasi_columns: Vec<String>,
    pub sensitive_column: String,
    /// Sizes of the finished groups, in retirement order.
    pub group_sizes: Vec<usize>,
    /// Discernability penalty of the partitioning.
    pub metric: u64,
    pub input_rows: RowCount,
    pub suppressed_rows: RowCount,
    pub published_rows: RowCount,
}
