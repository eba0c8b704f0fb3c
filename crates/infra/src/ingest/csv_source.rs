// crates/infra/src/ingest/csv_source.rs
use std::fs::File;
use std::io::{BufRead, BufReader};

use kanon_ports::source::{RawTable, TablePlan, TableSource};
use kanon_shared_kernel::{InfrastructureError, Result};
use log::debug;

/// Reads delimited text files into raw tables. Fields are split on the
/// plan's delimiter with double-quote escaping and trimmed of padding,
/// so census-style ", "-separated files parse cleanly.
#[derive(Debug, Default)]
pub struct CsvTableSource;

impl CsvTableSource {
    pub const fn new() -> Self {
        Self
    }

    fn read<R: BufRead>(reader: R, plan: &TablePlan) -> Result<RawTable> {
        let mut columns = plan.declared_columns.clone();
        let mut rows: Vec<Vec<String>> = Vec::new();

        for (number, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| InfrastructureError::FileRead {
                path: plan.path.clone(),
                source,
            })?;
            if line.is_empty() {
                continue;
            }

            let fields = split_fields(&line, plan.delimiter as char);
            if columns.is_empty() {
                columns = fields;
                continue;
            }
            if fields.len() != columns.len() {
                return Err(InfrastructureError::MalformedRow {
                    line: number + 1,
                    expected: columns.len(),
                    found: fields.len(),
                }
                .into());
            }
            rows.push(fields);
        }

        debug!("read {} rows from {}", rows.len(), plan.path.display());
        Ok(RawTable { columns, rows })
    }
}

impl TableSource for CsvTableSource {
    fn load(&self, plan: &TablePlan) -> Result<RawTable> {
        let file = File::open(&plan.path).map_err(|source| InfrastructureError::FileRead {
            path: plan.path.clone(),
            source,
        })?;
        Self::read(BufReader::new(file), plan)
    }
}

/// Splits one line into fields. Quoted fields keep their content
/// verbatim (doubled quotes collapse to one); unquoted fields lose
/// surrounding whitespace.
fn split_fields(line: &str, delimiter: char) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut quoted = false;
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    field.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(c);
            }
        } else if c == '"' && field.trim().is_empty() {
            field.clear();
            quoted = true;
            in_quotes = true;
        } else if c == delimiter {
            fields.push(close_field(field, quoted));
            field = String::new();
            quoted = false;
        } else {
            field.push(c);
        }
    }
    fields.push(close_field(field, quoted));
    fields
}

fn close_field(field: String, quoted: bool) -> String {
    if quoted { field } else { field.trim().to_string() }
}
