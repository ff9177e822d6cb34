use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::ChartResult;

/// Raw persistence boundary for the chart aggregate.
///
/// Load and save are atomic with respect to each other; any key-value or
/// file mechanism satisfies the store's contract through this trait.
pub trait StorageBackend {
    /// Returns the persisted payload, or `None` when nothing was saved yet.
    fn load_raw(&self) -> ChartResult<Option<String>>;

    fn save_raw(&mut self, payload: &str) -> ChartResult<()>;
}

/// In-process backend for tests and ephemeral hosts.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    payload: Option<String>,
}

impl MemoryBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn load_raw(&self) -> ChartResult<Option<String>> {
        Ok(self.payload.clone())
    }

    fn save_raw(&mut self, payload: &str) -> ChartResult<()> {
        self.payload = Some(payload.to_owned());
        Ok(())
    }
}

/// Single-file JSON backend.
#[derive(Debug)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageBackend for FileBackend {
    fn load_raw(&self) -> ChartResult<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(payload) => Ok(Some(payload)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn save_raw(&mut self, payload: &str) -> ChartResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, payload)?;
        Ok(())
    }
}
