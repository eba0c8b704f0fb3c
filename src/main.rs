// src/main.rs
#![allow(clippy::multiple_crate_versions)]

mod app;
mod args;

use anyhow::Result;

fn main() -> Result<()> {
    app::run()
}
