// crates/infra/src/ingest.rs
pub mod csv_source;

pub use csv_source::CsvTableSource;
