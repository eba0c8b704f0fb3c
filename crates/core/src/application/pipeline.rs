// crates/core/src/application/pipeline.rs
use std::io::Write;

use kanon_infra::ingest::CsvTableSource;
use kanon_infra::output::delimited::output_delimited;
use kanon_infra::output::json::{output_json, output_jsonl};
#[cfg(feature = "yaml")]
use kanon_infra::output::yaml::output_yaml;
use kanon_infra::output::{PublishedTable, RunSummary};
use kanon_infra::persistence::FileWriter;
use kanon_shared_kernel::{ApplicationError, Result};
use kanon_usecase::{AnonymizeOutput, AnonymizeTable};
use log::info;

use super::config_service::Config;
use super::options::OutputFormat;

/// Runs the pipeline described by `config`: ingestion, cleaning,
/// partitioning, aggregation, and rendering to the configured
/// destination. Returns the run accounting for the caller's status
/// line.
pub fn run_with_config(config: &Config) -> Result<RunSummary> {
    let source = CsvTableSource::new();
    let output = AnonymizeTable::new(&source).run(&config.plan, &config.spec, &config.shaping)?;

    let summary = RunSummary {
        k: config.spec.k().get(),
        input_rows: output.input_rows.value(),
        suppressed_rows: output.suppressed_rows.value(),
        published_rows: output.published_rows.value(),
        groups: output.group_sizes.len(),
        metric: output.metric,
    };

    match &config.output {
        Some(path) => {
            let mut writer = FileWriter::create(path)?;
            render(config, &output, &summary, &mut writer)?;
            writer.flush()?;
            info!("wrote {} output to {}", config.format, path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut writer = stdout.lock();
            render(config, &output, &summary, &mut writer)?;
            writer.flush()?;
        }
    }

    Ok(summary)
}

fn render(
    config: &Config,
    output: &AnonymizeOutput,
    summary: &RunSummary,
    out: &mut impl Write,
) -> Result<()> {
    if config.metric_only {
        writeln!(out, "{}", summary.metric)?;
        return Ok(());
    }

    let table = PublishedTable {
        quasi_columns: &output.quasi_columns,
        sensitive_column: &output.sensitive_column,
        records: &output.records,
    };
    let rendered = match config.format {
        OutputFormat::Csv => output_delimited(&table, ',', out),
        OutputFormat::Tsv => output_delimited(&table, '\t', out),
        OutputFormat::Json => output_json(&table, summary, out),
        OutputFormat::Jsonl => output_jsonl(&table, summary, out),
        #[cfg(feature = "yaml")]
        OutputFormat::Yaml => output_yaml(&table, summary, out),
    };
    rendered.map_err(|source| {
        ApplicationError::PresentationFailed {
            reason: format!("{} rendering failed", config.format),
            source: Some(Box::new(source)),
        }
        .into()
    })
}
