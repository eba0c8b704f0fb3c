// crates/domain/src/analytics/merge.rs
use kanon_shared_kernel::{DomainError, DomainResult};
use serde::Serialize;

use super::aggregate::AggregateRecord;
use crate::model::{ColumnType, Value};

/// A published record after the lower and upper aggregation runs are
/// combined. `count` is the replication factor that restores the
/// original row multiplicity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MergedRecord {
    pub quasi: Vec<Value>,
    pub sensitive: Value,
    pub count: usize,
}

/// Zips the two policy runs into published records.
pub struct Merger;

impl Merger {
    /// Both runs visit groups and sensitive values in the same order,
    /// so records pair positionally. The pairing is still verified;
    /// disagreement means the runs diverged and is reported rather
    /// than published.
    pub fn merge(
        kinds: &[ColumnType],
        lower: &[AggregateRecord],
        upper: &[AggregateRecord],
    ) -> DomainResult<Vec<MergedRecord>> {
        if lower.len() != upper.len() {
            return Err(DomainError::AggregateMismatch {
                reason: format!("record counts differ: {} lower vs {} upper", lower.len(), upper.len()),
            });
        }
        lower
            .iter()
            .zip(upper)
            .map(|(lo, up)| Self::merge_pair(kinds, lo, up))
            .collect()
    }

    /// Replicates every record `count` times, in order.
    pub fn expanded(records: &[MergedRecord]) -> impl Iterator<Item = &MergedRecord> {
        records.iter().flat_map(|record| std::iter::repeat_n(record, record.count))
    }

    fn merge_pair(
        kinds: &[ColumnType],
        lo: &AggregateRecord,
        up: &AggregateRecord,
    ) -> DomainResult<MergedRecord> {
        if lo.group != up.group || lo.sensitive != up.sensitive || lo.count != up.count {
            return Err(DomainError::AggregateMismatch {
                reason: format!("records for group {} are out of step", lo.group),
            });
        }
        let quasi = kinds
            .iter()
            .zip(lo.quasi.iter().zip(&up.quasi))
            .map(|(kind, (lower, upper))| Self::merge_value(*kind, lower, upper))
            .collect();
        Ok(MergedRecord { quasi, sensitive: lo.sensitive.clone(), count: lo.count })
    }

    /// Categorical representatives are identical in both runs and pass
    /// through. Numeric representatives collapse to the single value
    /// when the runs agree and to a "lower~upper" token when they
    /// differ.
    fn merge_value(kind: ColumnType, lower: &Value, upper: &Value) -> Value {
        match kind {
            ColumnType::Categorical => lower.clone(),
            ColumnType::Numeric => {
                if lower == upper {
                    lower.clone()
                } else {
                    Value::text(format!("{lower}~{upper}"))
                }
            }
        }
    }
}
