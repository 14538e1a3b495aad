//! In-memory doubles for the ports, shared by the use case tests.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use courier_domain::{CollectionDocument, EnvironmentDocument};

use crate::ports::{DocumentLoader, FileSystem, FileSystemError, LoadError};

#[derive(Debug, Default)]
struct State {
    files: BTreeMap<PathBuf, Vec<u8>>,
    dirs: BTreeSet<PathBuf>,
    denied: Vec<PathBuf>,
}

impl State {
    fn add_dir_all(&mut self, path: &Path) {
        for ancestor in path.ancestors() {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            self.dirs.insert(ancestor.to_path_buf());
        }
    }

    fn is_denied(&self, path: &Path) -> bool {
        self.denied.iter().any(|prefix| path.starts_with(prefix))
    }
}

/// File system kept in memory. Clones share the same state.
#[derive(Debug, Clone, Default)]
pub struct MemoryFileSystem {
    state: Arc<Mutex<State>>,
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, path: impl AsRef<Path>, contents: &str) -> Self {
        self.with_bytes(path, contents.as_bytes())
    }

    /// Adds a file with arbitrary, possibly non-UTF-8, contents.
    pub fn with_bytes(self, path: impl AsRef<Path>, contents: &[u8]) -> Self {
        {
            let mut state = self.state();
            let path = path.as_ref();
            if let Some(parent) = path.parent() {
                state.add_dir_all(parent);
            }
            state.files.insert(path.to_path_buf(), contents.to_vec());
        }
        self
    }

    pub fn with_dir(self, path: impl AsRef<Path>) -> Self {
        self.state().add_dir_all(path.as_ref());
        self
    }

    /// Makes every write or directory creation at or below `path` fail.
    pub fn deny_writes(self, path: impl AsRef<Path>) -> Self {
        self.state().denied.push(path.as_ref().to_path_buf());
        self
    }

    pub fn read(&self, path: impl AsRef<Path>) -> Option<String> {
        self.state()
            .files
            .get(path.as_ref())
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }

    pub fn has_dir(&self, path: impl AsRef<Path>) -> bool {
        self.state().dirs.contains(path.as_ref())
    }

    /// All file paths, sorted.
    pub fn files(&self) -> Vec<PathBuf> {
        self.state().files.keys().cloned().collect()
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl FileSystem for MemoryFileSystem {
    async fn read_file_string(&self, path: &Path) -> Result<String, FileSystemError> {
        let state = self.state();
        let bytes = state
            .files
            .get(path)
            .ok_or_else(|| FileSystemError::NotFound(path.to_path_buf()))?;
        String::from_utf8(bytes.clone()).map_err(|e| {
            FileSystemError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
        })
    }

    async fn write_file(&self, path: &Path, contents: &[u8]) -> Result<(), FileSystemError> {
        let mut state = self.state();
        if state.is_denied(path) {
            return Err(FileSystemError::PermissionDenied(path.to_path_buf()));
        }
        if let Some(parent) = path.parent() {
            state.add_dir_all(parent);
        }
        state.files.insert(path.to_path_buf(), contents.to_vec());
        Ok(())
    }

    async fn create_dir_all(&self, path: &Path) -> Result<(), FileSystemError> {
        let mut state = self.state();
        if state.is_denied(path) {
            return Err(FileSystemError::PermissionDenied(path.to_path_buf()));
        }
        state.add_dir_all(path);
        Ok(())
    }

    async fn is_dir(&self, path: &Path) -> bool {
        self.state().dirs.contains(path)
    }

    async fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>, FileSystemError> {
        let state = self.state();
        if !state.dirs.contains(path) {
            return Err(FileSystemError::NotFound(path.to_path_buf()));
        }
        let entries: BTreeSet<PathBuf> = state
            .files
            .keys()
            .chain(state.dirs.iter())
            .filter(|entry| entry.parent() == Some(path))
            .cloned()
            .collect();
        Ok(entries.into_iter().collect())
    }
}

/// Loader decoding JSON files from a [`FileSystem`].
#[derive(Debug, Clone)]
pub struct JsonLoader<F> {
    fs: F,
}

impl<F> JsonLoader<F> {
    pub const fn new(fs: F) -> Self {
        Self { fs }
    }
}

impl<F: FileSystem> DocumentLoader for JsonLoader<F> {
    async fn load_collection(&self, path: &Path) -> Result<CollectionDocument, LoadError> {
        let content = self.fs.read_file_string(path).await?;
        serde_json::from_str(&content).map_err(|e| LoadError::InvalidJson(e.to_string()))
    }

    async fn load_environment(&self, path: &Path) -> Result<EnvironmentDocument, LoadError> {
        let content = self.fs.read_file_string(path).await?;
        serde_json::from_str(&content).map_err(|e| LoadError::InvalidJson(e.to_string()))
    }
}
