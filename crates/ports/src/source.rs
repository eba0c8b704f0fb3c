// crates/ports/src/source.rs
use std::path::PathBuf;

use kanon_shared_kernel::Result;
use serde::{Deserialize, Serialize};

/// Input parameters controlling how a raw table is read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TablePlan {
    pub path: PathBuf,
    /// Single-byte field delimiter.
    pub delimiter: u8,
    /// Column names for headerless files. When empty, the first row
    /// names the columns.
    pub declared_columns: Vec<String>,
}

impl TablePlan {
    pub fn with_header(path: PathBuf, delimiter: u8) -> Self {
        Self { path, delimiter, declared_columns: Vec::new() }
    }

    pub fn headerless(path: PathBuf, delimiter: u8, columns: Vec<String>) -> Self {
        Self { path, delimiter, declared_columns: columns }
    }

    pub fn has_header(&self) -> bool {
        self.declared_columns.is_empty()
    }
}

/// DTO carrying an untyped table: column names plus rows of trimmed
/// string fields, each row exactly as wide as the header.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Port for reading raw tabular input.
pub trait TableSource: Send + Sync {
    fn load(&self, plan: &TablePlan) -> Result<RawTable>;
}
