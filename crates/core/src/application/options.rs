// crates/core/src/application/options.rs
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Output format for published tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Csv,
    Tsv,
    Json,
    Jsonl,
    #[cfg(feature = "yaml")]
    Yaml,
}

impl OutputFormat {
    /// Field separator for delimited formats, `None` for structured ones.
    pub const fn separator(self) -> Option<char> {
        match self {
            Self::Csv => Some(','),
            Self::Tsv => Some('\t'),
            _ => None,
        }
    }
}

mod display {
    use super::OutputFormat;
    use std::fmt;

    impl fmt::Display for OutputFormat {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            let name = match self {
                OutputFormat::Csv => "csv",
                OutputFormat::Tsv => "tsv",
                OutputFormat::Json => "json",
                OutputFormat::Jsonl => "jsonl",
                #[cfg(feature = "yaml")]
                OutputFormat::Yaml => "yaml",
            };
            write!(f, "{name}")
        }
    }
}

/// Raw, unvalidated options as collected from the command line.
#[derive(Debug, Clone, Default)]
pub struct ConfigOptions {
    pub input: PathBuf,
    pub k: usize,
    /// Quasi-identifier columns in declared order.
    pub quasi: Vec<String>,
    pub sensitive: String,
    /// Columns whose fields parse as numbers.
    pub numeric: Vec<String>,
    /// Column names for headerless input. Empty means the first row
    /// is a header.
    pub columns: Vec<String>,
    pub delimiter: Option<char>,
    /// Missing-value token. `None` keeps the default, an empty string
    /// disables suppression.
    pub na_token: Option<String>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub metric_only: bool,
}
