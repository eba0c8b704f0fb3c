use kanon_domain::analytics::{
    AggregatePolicy, Aggregator, GroupValidator, Merger, Partitioner, discernability_metric,
};
use kanon_domain::config::AnonymizationSpec;
use kanon_domain::model::{ColumnData, ColumnType, Dataset};
use kanon_ports::source::{RawTable, TablePlan, TableSource};
use kanon_shared_kernel::{DomainError, Result, value_objects::RowCount};
use log::{debug, info};

use crate::dto::{AnonymizeOutput, TableShaping};

pub struct AnonymizeTable<'a> {
    source: &'a dyn TableSource,
}

impl<'a> AnonymizeTable<'a> {
    pub fn new(source: &'a dyn TableSource) -> Self {
        Self { source }
    }

    pub fn run(
        &self,
        plan: &TablePlan,
        spec: &AnonymizationSpec,
        shaping: &TableShaping,
    ) -> Result<AnonymizeOutput> {
        let mut raw = self.source.load(plan)?;
        let input_rows = raw.rows.len();
        info!("loaded {} rows, {} columns", input_rows, raw.columns.len());

        let suppressed = match shaping.na_token.as_deref() {
            Some(token) if !token.is_empty() => suppress_missing(&mut raw, spec, token)?,
            _ => 0,
        };
        if suppressed > 0 {
            info!("suppressed {suppressed} rows carrying missing values");
        }

        let dataset = build_dataset(raw, &shaping.numeric_columns)?;

        let validator = GroupValidator::new(spec.k());
        let partitioner = Partitioner::new(&dataset, spec.quasi(), validator)?;
        let finished = partitioner.partition()?;
        debug!("partitioning finished with {} groups", finished.len());

        let lower = Aggregator::aggregate(&dataset, spec, &finished, AggregatePolicy::Lower)?;
        let upper = Aggregator::aggregate(&dataset, spec, &finished, AggregatePolicy::Upper)?;

        let kinds: Vec<ColumnType> = spec
            .quasi()
            .columns()
            .iter()
            .map(|name| dataset.column_type(name))
            .collect::<std::result::Result<_, _>>()?;
        let records = Merger::merge(&kinds, &lower, &upper)?;

        let metric = discernability_metric(&finished);
        info!("discernability metric: {metric}");

        let published_rows: usize = records.iter().map(|record| record.count).sum();

        Ok(AnonymizeOutput {
            records,
            quasi_columns: spec.quasi().columns().to_vec(),
            sensitive_column: spec.sensitive().name().to_string(),
            group_sizes: finished.iter().map(kanon_domain::model::Group::len).collect(),
            metric,
            input_rows: RowCount::new(input_rows),
            suppressed_rows: RowCount::new(suppressed),
            published_rows: RowCount::new(published_rows),
        })
    }
}

/// Drops rows whose quasi-identifier or sensitive fields hold the
/// placeholder token. Returns how many rows went away.
fn suppress_missing(raw: &mut RawTable, spec: &AnonymizationSpec, token: &str) -> Result<usize> {
    let mut protected: Vec<usize> = spec
        .quasi()
        .columns()
        .iter()
        .map(|name| column_position(raw, name))
        .collect::<Result<_>>()?;
    protected.push(column_position(raw, spec.sensitive().name())?);

    let before = raw.rows.len();
    raw.rows.retain(|row| !protected.iter().any(|&position| row[position] == token));
    Ok(before - raw.rows.len())
}

fn column_position(raw: &RawTable, name: &str) -> Result<usize> {
    raw.columns
        .iter()
        .position(|column| column == name)
        .ok_or_else(|| DomainError::UnknownColumn { column: name.to_string() }.into())
}

/// Turns the cleaned raw table into typed columnar storage. Declared
/// numeric columns must exist and must parse.
fn build_dataset(raw: RawTable, numeric_columns: &[String]) -> Result<Dataset> {
    for declared in numeric_columns {
        if !raw.columns.contains(declared) {
            return Err(DomainError::UnknownColumn { column: declared.clone() }.into());
        }
    }

    let mut columns: Vec<(String, ColumnData)> = Vec::with_capacity(raw.columns.len());
    for (position, name) in raw.columns.iter().enumerate() {
        let data = if numeric_columns.contains(name) {
            let mut values = Vec::with_capacity(raw.rows.len());
            for row in &raw.rows {
                let field = &row[position];
                let parsed = field.parse::<f64>().map_err(|_| DomainError::NumericParse {
                    column: name.clone(),
                    value: field.clone(),
                })?;
                values.push(parsed);
            }
            ColumnData::Numeric(values)
        } else {
            ColumnData::Categorical(raw.rows.iter().map(|row| row[position].clone()).collect())
        };
        columns.push((name.clone(), data));
    }

    Ok(Dataset::from_columns(columns)?)
}
