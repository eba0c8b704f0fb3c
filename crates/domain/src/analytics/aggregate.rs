// crates/domain/src/analytics/aggregate.rs
use hashbrown::{HashMap, HashSet};
use kanon_shared_kernel::DomainResult;

use crate::config::AnonymizationSpec;
use crate::model::{ColumnData, Dataset, Group, Value};

/// Which representative a numeric quasi-identifier publishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregatePolicy {
    Lower,
    Upper,
}

/// One synthesized record: a finished group's representative
/// quasi-identifier values, restricted to the rows sharing one
/// sensitive value.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateRecord {
    /// Position of the originating group in the finished list; the
    /// merge step keys on it.
    pub group: usize,
    /// Representative values aligned with the quasi-identifier order.
    pub quasi: Vec<Value>,
    pub sensitive: Value,
    /// Rows of the group carrying this sensitive value. Expanding the
    /// merged record this many times restores the group's size.
    pub count: usize,
}

/// Synthesizes representative records from finished groups.
pub struct Aggregator;

impl Aggregator {
    /// One record per (finished group, distinct sensitive value) under
    /// `policy`. Records follow finished-group order; within a group,
    /// ascending sensitive value.
    pub fn aggregate(
        dataset: &Dataset,
        spec: &AnonymizationSpec,
        groups: &[Group],
        policy: AggregatePolicy,
    ) -> DomainResult<Vec<AggregateRecord>> {
        let quasi_columns: Vec<&ColumnData> = spec
            .quasi()
            .columns()
            .iter()
            .map(|name| dataset.column(name))
            .collect::<DomainResult<_>>()?;
        let sensitive = dataset.column(spec.sensitive().name())?;

        let per_group = Self::map_groups(groups, |(index, group)| {
            Self::group_records(&quasi_columns, sensitive, index, group, policy)
        });

        Ok(per_group.into_iter().flatten().collect())
    }

    #[cfg(feature = "parallel")]
    fn map_groups<F>(groups: &[Group], f: F) -> Vec<Vec<AggregateRecord>>
    where
        F: Fn((usize, &Group)) -> Vec<AggregateRecord> + Sync + Send,
    {
        use rayon::prelude::*;
        groups.par_iter().enumerate().map(f).collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn map_groups<F>(groups: &[Group], f: F) -> Vec<Vec<AggregateRecord>>
    where
        F: Fn((usize, &Group)) -> Vec<AggregateRecord> + Sync + Send,
    {
        groups.iter().enumerate().map(f).collect()
    }

    fn group_records(
        quasi_columns: &[&ColumnData],
        sensitive: &ColumnData,
        index: usize,
        group: &Group,
        policy: AggregatePolicy,
    ) -> Vec<AggregateRecord> {
        let mut buckets: HashMap<Value, usize> = HashMap::new();
        for row in group.iter() {
            *buckets.entry(sensitive.value_at(row)).or_insert(0) += 1;
        }
        if buckets.is_empty() {
            return Vec::new();
        }
        let mut sub_counts: Vec<(Value, usize)> = buckets.into_iter().collect();
        sub_counts.sort_by(|a, b| a.0.cmp(&b.0));

        // The representatives are group-wide; every record of the
        // group shares them.
        let quasi: Vec<Value> = quasi_columns
            .iter()
            .map(|column| Self::representative(column, group, policy))
            .collect();

        sub_counts
            .into_iter()
            .map(|(value, count)| AggregateRecord {
                group: index,
                quasi: quasi.clone(),
                sensitive: value,
                count,
            })
            .collect()
    }

    /// Group-wide representative for one column. Categorical columns
    /// publish the sorted distinct values joined with '~' under either
    /// policy; numeric columns publish the minimum under Lower and the
    /// maximum under Upper.
    fn representative(column: &ColumnData, group: &Group, policy: AggregatePolicy) -> Value {
        match column {
            ColumnData::Categorical(values) => {
                let mut distinct: Vec<&str> = group
                    .iter()
                    .map(|row| values[row].as_str())
                    .collect::<HashSet<_>>()
                    .into_iter()
                    .collect();
                distinct.sort_unstable();
                Value::text(distinct.join("~"))
            }
            ColumnData::Numeric(values) => {
                let rows = group.iter().map(|row| values[row]);
                let representative = match policy {
                    AggregatePolicy::Lower => rows.fold(f64::INFINITY, f64::min),
                    AggregatePolicy::Upper => rows.fold(f64::NEG_INFINITY, f64::max),
                };
                Value::number(representative)
            }
        }
    }
}
