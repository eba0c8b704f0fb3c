// crates/core/src/application/config_service.rs
use std::collections::HashSet;
use std::path::PathBuf;

use kanon_domain::config::{AnonymizationSpec, QuasiIdentifierSet, SensitiveAttribute};
use kanon_ports::source::TablePlan;
use kanon_shared_kernel::{DomainError, KThreshold, Result};
use kanon_usecase::TableShaping;

use super::options::{ConfigOptions, OutputFormat};

/// Default missing-value token, matching the `adult.data` convention.
const DEFAULT_NA_TOKEN: &str = "?";

/// Fully validated run configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub plan: TablePlan,
    pub spec: AnonymizationSpec,
    pub shaping: TableShaping,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub metric_only: bool,
}

/// Turns raw command-line options into a [`Config`], rejecting
/// inconsistent input before any file is touched. Column existence is
/// checked later against the actual table.
pub struct ConfigService;

impl ConfigService {
    pub fn build(options: ConfigOptions) -> Result<Config> {
        let ConfigOptions {
            input,
            k,
            quasi,
            sensitive,
            numeric,
            columns,
            delimiter,
            na_token,
            format,
            output,
            metric_only,
        } = options;

        let k = KThreshold::new(k)?;
        let quasi = QuasiIdentifierSet::new(quasi)?;
        let sensitive = SensitiveAttribute::new(sensitive)?;
        let spec = AnonymizationSpec::new(quasi, sensitive, k)?;
        let numeric = validated_numeric(numeric)?;
        let delimiter = resolve_delimiter(delimiter)?;

        let plan = if columns.is_empty() {
            TablePlan::with_header(input, delimiter)
        } else {
            TablePlan::headerless(input, delimiter, columns)
        };
        let shaping = TableShaping {
            numeric_columns: numeric,
            na_token: resolve_na_token(na_token),
        };

        Ok(Config { plan, spec, shaping, format, output, metric_only })
    }
}

fn resolve_delimiter(delimiter: Option<char>) -> Result<u8> {
    let delimiter = delimiter.unwrap_or(',');
    u8::try_from(delimiter).map_err(|_| {
        DomainError::InvalidConfiguration {
            reason: format!("delimiter '{delimiter}' must be a single-byte character"),
        }
        .into()
    })
}

fn validated_numeric(numeric: Vec<String>) -> Result<Vec<String>> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(numeric.len());
    for column in &numeric {
        if !seen.insert(column.as_str()) {
            return Err(DomainError::InvalidConfiguration {
                reason: format!("duplicate numeric column '{column}'"),
            }
            .into());
        }
    }
    Ok(numeric)
}

fn resolve_na_token(token: Option<String>) -> Option<String> {
    match token {
        None => Some(DEFAULT_NA_TOKEN.to_string()),
        Some(token) if token.is_empty() => None,
        Some(token) => Some(token),
    }
}
