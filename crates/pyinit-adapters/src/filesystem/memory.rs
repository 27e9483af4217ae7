//! A filesystem that lives in a map, for workflow tests.

use std::{
    collections::{BTreeMap, BTreeSet, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use pyinit_core::{
    application::{ApplicationError, ports::Filesystem},
    error::PyinitResult,
};

/// Clones share state, so a test can keep a handle after boxing one into a
/// service.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, Vec<u8>>,
    directories: BTreeSet<PathBuf>,
    failing: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make any create/write on `path` fail with a filesystem error.
    pub fn fail_on(&self, path: impl Into<PathBuf>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.failing.insert(path.into());
        }
    }

    /// Bytes written to `path`, if any.
    pub fn read_file(&self, path: &Path) -> Option<Vec<u8>> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// Read a file as UTF-8 (testing helper).
    pub fn read_to_string(&self, path: &Path) -> Option<String> {
        self.read_file(path)
            .and_then(|bytes| String::from_utf8(bytes).ok())
    }

    /// All files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    pub fn is_dir(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.directories.contains(path))
            .unwrap_or(false)
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> PyinitResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        check_failing(&inner, path)?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> PyinitResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        check_failing(&inner, path)?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::Filesystem {
                    path: path.to_path_buf(),
                    reason: "parent directory was never created".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_vec());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }
}

fn check_failing(inner: &MemoryFilesystemInner, path: &Path) -> PyinitResult<()> {
    if inner.failing.contains(path) {
        return Err(ApplicationError::Filesystem {
            path: path.to_path_buf(),
            reason: "injected failure".into(),
        }
        .into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_dir_all_registers_every_ancestor() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("root/a/b")).unwrap();

        assert!(fs.exists(Path::new("root")));
        assert!(fs.is_dir(Path::new("root/a")));
        assert!(fs.is_dir(Path::new("root/a/b")));
    }

    #[test]
    fn write_requires_parent() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_file(Path::new("root/f"), b"x").is_err());

        fs.create_dir_all(Path::new("root")).unwrap();
        fs.write_file(Path::new("root/f"), b"x").unwrap();
        assert_eq!(fs.read_to_string(Path::new("root/f")).as_deref(), Some("x"));
    }

    #[test]
    fn injected_failures_surface() {
        let fs = MemoryFilesystem::new();
        fs.fail_on("root/bad");
        fs.create_dir_all(Path::new("root")).unwrap();

        assert!(fs.write_file(Path::new("root/bad"), b"x").is_err());
        assert!(fs.create_dir_all(Path::new("root/bad")).is_err());
        assert!(fs.list_files().is_empty());
    }

    #[test]
    fn clones_share_state() {
        let fs = MemoryFilesystem::new();
        let handle = fs.clone();
        fs.create_dir_all(Path::new("root")).unwrap();
        assert!(handle.exists(Path::new("root")));
    }
}
