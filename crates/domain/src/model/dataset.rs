// crates/domain/src/model/dataset.rs
use hashbrown::HashMap;
use kanon_shared_kernel::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};

use super::value::Value;

/// How a column behaves during partitioning and aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    /// Finite unordered value domain. Split by halving the sorted
    /// distinct values; aggregated as a joined value set.
    Categorical,
    /// Ordered values supporting min, max and median. Split at the
    /// median; aggregated as min or max.
    Numeric,
}

/// Typed column storage. Values live in column-major vectors so group
/// operations touch one allocation per column.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnData {
    Categorical(Vec<String>),
    Numeric(Vec<f64>),
}

impl ColumnData {
    pub fn len(&self) -> usize {
        match self {
            Self::Categorical(values) => values.len(),
            Self::Numeric(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub const fn kind(&self) -> ColumnType {
        match self {
            Self::Categorical(_) => ColumnType::Categorical,
            Self::Numeric(_) => ColumnType::Numeric,
        }
    }

    pub fn value_at(&self, row: usize) -> Value {
        match self {
            Self::Categorical(values) => Value::text(values[row].clone()),
            Self::Numeric(values) => Value::number(values[row]),
        }
    }
}

/// Immutable columnar table. Column order is the declaration order and
/// is preserved through ranking tie-breaks and published output.
#[derive(Debug, Clone)]
pub struct Dataset {
    names: Vec<String>,
    columns: Vec<ColumnData>,
    index: HashMap<String, usize>,
    rows: usize,
}

impl Dataset {
    /// Builds a dataset from named columns. All columns must share one
    /// length and names must be unique.
    pub fn from_columns(columns: Vec<(String, ColumnData)>) -> DomainResult<Self> {
        let rows = columns.first().map_or(0, |(_, data)| data.len());
        let mut names = Vec::with_capacity(columns.len());
        let mut data = Vec::with_capacity(columns.len());
        let mut index = HashMap::with_capacity(columns.len());

        for (position, (name, column)) in columns.into_iter().enumerate() {
            if column.len() != rows {
                return Err(DomainError::InvalidConfiguration {
                    reason: format!(
                        "column '{name}' has {} rows, expected {rows}",
                        column.len()
                    ),
                });
            }
            if index.insert(name.clone(), position).is_some() {
                return Err(DomainError::InvalidConfiguration {
                    reason: format!("duplicate column '{name}'"),
                });
            }
            names.push(name);
            data.push(column);
        }

        Ok(Self { names, columns: data, index, rows })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn column_names(&self) -> &[String] {
        &self.names
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn column(&self, name: &str) -> DomainResult<&ColumnData> {
        self.index
            .get(name)
            .map(|&position| &self.columns[position])
            .ok_or_else(|| DomainError::UnknownColumn { column: name.to_string() })
    }

    pub fn column_type(&self, name: &str) -> DomainResult<ColumnType> {
        Ok(self.column(name)?.kind())
    }

    pub fn value(&self, name: &str, row: usize) -> DomainResult<Value> {
        Ok(self.column(name)?.value_at(row))
    }
}
