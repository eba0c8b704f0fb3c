// crates/shared-kernel/src/value_objects/mod.rs
pub mod counts;
pub mod k_threshold;

pub use counts::RowCount;
pub use k_threshold::KThreshold;
