// tests/common/mod.rs
//! 共通テストユーティリティ

pub mod temp;

#[allow(unused_imports)]
pub use datasets::*;
#[allow(unused_imports)]
pub use temp::TempDir;
