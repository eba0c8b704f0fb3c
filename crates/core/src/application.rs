// crates/core/src/application.rs
pub mod config_service;
pub mod options;
pub mod pipeline;
