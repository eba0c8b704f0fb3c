// crates/core/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

//! # Core
//!
//! Pipeline facade tying the workspace crates together:
//! - [`application::options`]: raw command-line options and the output
//!   format enum.
//! - [`application::config_service`]: validation of raw options into a
//!   runnable [`Config`].
//! - [`application::pipeline`]: the anonymization run itself, from
//!   table ingestion to rendered output.

pub mod application;

pub use application::config_service::{Config, ConfigService};
pub use application::options::{ConfigOptions, OutputFormat};
pub use application::pipeline::run_with_config;
pub use kanon_infra::output::RunSummary;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
