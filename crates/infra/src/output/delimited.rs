// crates/infra/src/output/delimited.rs
use std::io::Write;

use kanon_domain::analytics::Merger;
use kanon_shared_kernel::Result;

use super::PublishedTable;

/// Writes the published table as separator-delimited text, one line
/// per original row. Records with `count` N appear N times.
pub fn output_delimited(
    table: &PublishedTable<'_>,
    sep: char,
    out: &mut impl Write,
) -> Result<()> {
    let separator = sep.to_string();

    let mut header: Vec<String> = table
        .quasi_columns
        .iter()
        .map(|name| escape_field(name, sep))
        .collect();
    header.push(escape_field(table.sensitive_column, sep));
    header.push("count".to_string());
    writeln!(out, "{}", header.join(&separator))?;

    for record in Merger::expanded(table.records) {
        let mut fields: Vec<String> = record
            .quasi
            .iter()
            .map(|value| escape_field(&value.to_string(), sep))
            .collect();
        fields.push(escape_field(&record.sensitive.to_string(), sep));
        fields.push(record.count.to_string());
        writeln!(out, "{}", fields.join(&separator))?;
    }
    Ok(())
}

/// CSV needs quoting; other separators are written verbatim.
fn escape_field(field: &str, sep: char) -> String {
    if sep == ',' && (field.contains(',') || field.contains('"') || field.contains('\n')) {
        let escaped = field.replace('"', "\"\"");
        format!("\"{escaped}\"")
    } else {
        field.to_string()
    }
}
