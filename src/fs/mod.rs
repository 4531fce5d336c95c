//! # Scoped File Handle
//!
//! A context-managed file resource: acquire on scope entry, release on scope
//! exit — every scope exit, including unwinding.
//!
//! [`FileManager`] owns the path/mode pair and (at most) one open file.
//! [`FileManager::enter`] opens the file and yields a [`FileGuard`] that
//! derefs to [`File`]; dropping the guard closes the file exactly once,
//! whether the scope ended normally or by panic. If opening fails, nothing
//! was acquired and there is nothing to release.
//!
//! ```rust,no_run
//! use std::io::Write;
//! use cart_recipe::fs::{FileManager, FileMode};
//!
//! # fn demo() -> Result<(), cart_recipe::fs::FileError> {
//! let mut manager = FileManager::new("example.txt", FileMode::Write);
//! {
//!     let mut file = manager.enter()?;
//!     writeln!(file, "Hello from Rust!")?;
//! } // guard dropped here, file closed
//! assert!(!manager.is_open());
//! # Ok(())
//! # }
//! ```

pub mod error;

pub use error::FileError;

use std::fmt::Display;
use std::fs::{File, OpenOptions};
use std::io;
use std::ops::{Deref, DerefMut};
use std::path::{Path, PathBuf};

use tracing::debug;

/// How the underlying file is opened.
///
/// `Write` creates the file if needed and truncates any existing content;
/// `Append` creates if needed and writes at the end.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FileMode {
    #[default]
    Read,
    Write,
    Append,
}

impl FileMode {
    fn open(self, path: &Path) -> io::Result<File> {
        match self {
            FileMode::Read => OpenOptions::new().read(true).open(path),
            FileMode::Write => OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(path),
            FileMode::Append => OpenOptions::new().append(true).create(true).open(path),
        }
    }
}

impl Display for FileMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileMode::Read => write!(f, "read"),
            FileMode::Write => write!(f, "write"),
            FileMode::Append => write!(f, "append"),
        }
    }
}

/// A file resource with scoped acquisition.
///
/// Holds at most one open file at a time; the exclusive borrow taken by
/// [`FileManager::enter`] makes a second acquisition while a guard is live
/// impossible to express.
#[derive(Debug)]
pub struct FileManager {
    path: PathBuf,
    mode: FileMode,
    file: Option<File>,
}

impl FileManager {
    /// Creates a manager for `path`. Does not touch the filesystem.
    pub fn new(path: impl Into<PathBuf>, mode: FileMode) -> Self {
        Self {
            path: path.into(),
            mode,
            file: None,
        }
    }

    /// Opens the file and yields a guard that closes it on drop.
    ///
    /// On failure the manager stays closed and there is nothing to release.
    pub fn enter(&mut self) -> Result<FileGuard<'_>, FileError> {
        let file = self.mode.open(&self.path).map_err(|source| FileError::Open {
            path: self.path.clone(),
            mode: self.mode,
            source,
        })?;
        debug!(path = %self.path.display(), mode = %self.mode, "Opened file");
        self.file = Some(file);
        Ok(FileGuard { manager: self })
    }

    /// Runs `f` against the opened file, releasing it afterwards.
    pub fn with<T>(&mut self, f: impl FnOnce(&mut File) -> io::Result<T>) -> Result<T, FileError> {
        let mut guard = self.enter()?;
        Ok(f(&mut guard)?)
    }

    /// Whether this manager currently holds an open file.
    pub fn is_open(&self) -> bool {
        self.file.is_some()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Exclusive access to the manager's open file for the duration of a scope.
///
/// Dropping the guard closes the file. Exactly one close happens per
/// successful [`FileManager::enter`], on normal exit and during unwinding
/// alike.
#[derive(Debug)]
pub struct FileGuard<'a> {
    manager: &'a mut FileManager,
}

impl Deref for FileGuard<'_> {
    type Target = File;

    fn deref(&self) -> &File {
        match &self.manager.file {
            Some(file) => file,
            // A guard only exists while the manager holds an open file.
            None => unreachable!("FileGuard outlived its file"),
        }
    }
}

impl DerefMut for FileGuard<'_> {
    fn deref_mut(&mut self) -> &mut File {
        match &mut self.manager.file {
            Some(file) => file,
            None => unreachable!("FileGuard outlived its file"),
        }
    }
}

impl Drop for FileGuard<'_> {
    fn drop(&mut self) {
        // Dropping the File releases the OS handle.
        self.manager.file = None;
        debug!(path = %self.manager.path.display(), "Closed file");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::panic::{catch_unwind, AssertUnwindSafe};

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("cart_recipe_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_write_then_read_back() {
        let path = temp_path("roundtrip.txt");

        let mut writer = FileManager::new(&path, FileMode::Write);
        {
            let mut file = writer.enter().expect("open for write");
            file.write_all(b"Hello from Rust!").expect("write");
        }
        assert!(!writer.is_open());

        let mut reader = FileManager::new(&path, FileMode::Read);
        let mut contents = String::new();
        {
            let mut file = reader.enter().expect("open for read");
            file.read_to_string(&mut contents).expect("read");
        }
        assert!(!reader.is_open());
        assert_eq!(contents, "Hello from Rust!");

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_open_missing_file_in_read_mode_fails() {
        let mut manager = FileManager::new(temp_path("does_not_exist.txt"), FileMode::Read);

        let result = manager.enter();

        assert!(matches!(result, Err(FileError::Open { .. })));
        drop(result);
        // A failed acquisition leaves nothing to release.
        assert!(!manager.is_open());
    }

    #[test]
    fn test_guard_closes_on_panic() {
        let path = temp_path("panic.txt");
        let mut manager = FileManager::new(&path, FileMode::Write);

        let outcome = catch_unwind(AssertUnwindSafe(|| {
            let _file = manager.enter().expect("open for write");
            panic!("boom");
        }));

        assert!(outcome.is_err());
        // The guard's Drop ran during unwinding.
        assert!(!manager.is_open());

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_with_runs_closure_and_releases() {
        let path = temp_path("with.txt");
        let mut manager = FileManager::new(&path, FileMode::Write);

        let written = manager
            .with(|file| file.write(b"scoped"))
            .expect("scoped write");

        assert_eq!(written, 6);
        assert!(!manager.is_open());

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_manager_is_reusable_after_release() {
        let path = temp_path("reuse.txt");
        let mut manager = FileManager::new(&path, FileMode::Write);

        manager.with(|file| file.write_all(b"first")).expect("first");
        manager.with(|file| file.write_all(b"second")).expect("second");

        let contents = std::fs::read_to_string(&path).expect("read back");
        // Write mode truncates, so only the second pass remains.
        assert_eq!(contents, "second");

        std::fs::remove_file(&path).ok();
    }
}
