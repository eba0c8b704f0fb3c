// crates/domain/src/analytics/span.rs
use hashbrown::HashSet;
use kanon_shared_kernel::DomainResult;

use crate::model::{ColumnData, Dataset, Group};

/// Measures how spread out column values are within a group of rows.
pub struct SpanCalculator;

impl SpanCalculator {
    /// Raw spans of `columns` restricted to `group`, aligned with the
    /// requested column order. Categorical spans count distinct
    /// values; numeric spans are max minus min. Degenerate groups
    /// yield 0 instead of failing.
    pub fn spans(dataset: &Dataset, columns: &[String], group: &Group) -> DomainResult<Vec<f64>> {
        columns
            .iter()
            .map(|name| Ok(Self::column_span(dataset.column(name)?, group)))
            .collect()
    }

    /// Spans divided by a fixed per-column scale, usually the
    /// whole-dataset spans computed once per run. A zero scale entry
    /// normalizes to 0: a column with no spread anywhere has no
    /// splitting power.
    pub fn normalized(
        dataset: &Dataset,
        columns: &[String],
        group: &Group,
        scale: &[f64],
    ) -> DomainResult<Vec<f64>> {
        let spans = Self::spans(dataset, columns, group)?;
        Ok(spans
            .iter()
            .zip(scale)
            .map(|(span, scale)| if *scale == 0.0 { 0.0 } else { span / scale })
            .collect())
    }

    fn column_span(column: &ColumnData, group: &Group) -> f64 {
        match column {
            ColumnData::Categorical(values) => {
                let distinct: HashSet<&str> = group.iter().map(|row| values[row].as_str()).collect();
                distinct.len() as f64
            }
            ColumnData::Numeric(values) => {
                let mut rows = group.iter().map(|row| values[row]);
                let Some(first) = rows.next() else { return 0.0 };
                let (min, max) = rows.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));
                max - min
            }
        }
    }
}
