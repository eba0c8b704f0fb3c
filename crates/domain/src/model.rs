// crates/domain/src/model.rs
pub mod dataset;
pub mod group;
pub mod value;

pub use dataset::{ColumnData, ColumnType, Dataset};
pub use group::Group;
pub use value::Value;
