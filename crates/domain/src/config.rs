// crates/domain/src/config.rs
use hashbrown::HashSet;
use kanon_shared_kernel::{DomainError, DomainResult, KThreshold};

use crate::model::Dataset;

/// Ordered, duplicate-free list of partitioning columns. The declared
/// order doubles as the tie-break order when spans are equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuasiIdentifierSet {
    columns: Vec<String>,
}

impl QuasiIdentifierSet {
    pub fn new(columns: Vec<String>) -> DomainResult<Self> {
        if columns.is_empty() {
            return Err(DomainError::InvalidConfiguration {
                reason: "at least one quasi-identifier column is required".to_string(),
            });
        }
        let mut seen: HashSet<&str> = HashSet::with_capacity(columns.len());
        for column in &columns {
            if !seen.insert(column.as_str()) {
                return Err(DomainError::InvalidConfiguration {
                    reason: format!("duplicate quasi-identifier column '{column}'"),
                });
            }
        }
        drop(seen);
        Ok(Self { columns })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn contains(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }
}

/// The one column whose in-group distribution must stay ambiguous.
/// Never used for splitting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SensitiveAttribute {
    name: String,
}

impl SensitiveAttribute {
    pub fn new(name: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(DomainError::InvalidConfiguration {
                reason: "sensitive column name must not be empty".to_string(),
            });
        }
        Ok(Self { name })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Everything the engine needs for one run: what to split on, what to
/// protect, and how large groups must be.
#[derive(Debug, Clone)]
pub struct AnonymizationSpec {
    quasi: QuasiIdentifierSet,
    sensitive: SensitiveAttribute,
    k: KThreshold,
}

impl AnonymizationSpec {
    pub fn new(
        quasi: QuasiIdentifierSet,
        sensitive: SensitiveAttribute,
        k: KThreshold,
    ) -> DomainResult<Self> {
        if quasi.contains(sensitive.name()) {
            return Err(DomainError::InvalidConfiguration {
                reason: format!(
                    "sensitive column '{}' cannot also be a quasi-identifier",
                    sensitive.name()
                ),
            });
        }
        Ok(Self { quasi, sensitive, k })
    }

    pub fn quasi(&self) -> &QuasiIdentifierSet {
        &self.quasi
    }

    pub fn sensitive(&self) -> &SensitiveAttribute {
        &self.sensitive
    }

    pub const fn k(&self) -> KThreshold {
        self.k
    }

    /// Checks every declared column against the actual table schema.
    pub fn bind(&self, dataset: &Dataset) -> DomainResult<()> {
        for column in self.quasi.columns() {
            if !dataset.has_column(column) {
                return Err(DomainError::UnknownColumn { column: column.clone() });
            }
        }
        if !dataset.has_column(self.sensitive.name()) {
            return Err(DomainError::UnknownColumn { column: self.sensitive.name().to_string() });
        }
        Ok(())
    }
}
