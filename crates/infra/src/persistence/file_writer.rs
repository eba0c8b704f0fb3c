// crates/infra/src/persistence/file_writer.rs
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use kanon_shared_kernel::{InfrastructureError, Result};

/// Helper utilities for writing output files.
pub struct FileWriter;

impl FileWriter {
    /// Creates a buffered writer targeting `path`.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<BufWriter<File>> {
        let path = path.as_ref();
        File::create(path).map(BufWriter::new).map_err(|source| {
            InfrastructureError::FileWrite {
                path: path.to_path_buf(),
                source,
            }
            .into()
        })
    }
}
