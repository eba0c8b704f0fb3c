// crates/domain/src/analytics.rs
pub mod aggregate;
pub mod merge;
pub mod metric;
pub mod partition;
pub mod span;
pub mod split;
pub mod validate;

pub use aggregate::{AggregatePolicy, AggregateRecord, Aggregator};
pub use merge::{MergedRecord, Merger};
pub use metric::discernability_metric;
pub use partition::Partitioner;
pub use span::SpanCalculator;
pub use split::Splitter;
pub use validate::GroupValidator;
