use crate::core::Storage;
use crate::utils::error::{Result, StubError};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }
}

impl Storage for LocalStorage {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).map_err(|source| StubError::SourceReadError {
            path: path.to_path_buf(),
            source,
        })
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        fs::create_dir_all(path).map_err(|source| StubError::OutputWriteError {
            path: path.to_path_buf(),
            source,
        })
    }

    fn write_new(&self, path: &Path, contents: &str) -> Result<()> {
        let to_write_error = |source| StubError::OutputWriteError {
            path: path.to_path_buf(),
            source,
        };

        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .map_err(to_write_error)?;
        file.write_all(contents.as_bytes()).map_err(to_write_error)?;
        Ok(())
    }
}
