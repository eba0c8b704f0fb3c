// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod ingest;
pub mod output;
pub mod persistence;
