//! File persistence shared by the account and record stores.
//!
//! Both stores persist by rewriting their whole file. Writes go to a
//! temporary file in the target's directory which is then renamed over the
//! target, so a crash mid-write leaves either the old or the new contents.

mod errors;

use std::{
    fs,
    io::{ErrorKind, Write},
    path::Path,
};

use tempfile::NamedTempFile;

pub use errors::StorageError;

use crate::Result;

/// Reads a whole file, treating a missing file as absent state.
///
/// # Returns
/// `Ok(None)` if the file does not exist, otherwise its contents.
pub fn read_optional(path: impl AsRef<Path>) -> Result<Option<Vec<u8>>> {
    let path = path.as_ref();
    match fs::read(path) {
        Ok(bytes) => Ok(Some(bytes)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(source) => Err(StorageError::FileIo {
            path: path.to_path_buf(),
            source,
        }
        .into()),
    }
}

/// Replaces the contents of `path` with `contents`.
///
/// Missing parent directories are created. The data is flushed to disk
/// before the rename.
pub fn write_atomic(path: impl AsRef<Path>, contents: &[u8]) -> Result<()> {
    let path = path.as_ref();
    let io_err = |source: std::io::Error| -> crate::Error {
        StorageError::FileIo {
            path: path.to_path_buf(),
            source,
        }
        .into()
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(io_err)?;

    let mut tmp = NamedTempFile::new_in(dir).map_err(io_err)?;
    tmp.write_all(contents).map_err(io_err)?;
    tmp.as_file().sync_all().map_err(io_err)?;
    tmp.persist(path).map_err(|e| io_err(e.error))?;

    tracing::trace!(path = %path.display(), bytes = contents.len(), "file replaced");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_missing_file_is_none() {
        let dir = TempDir::new().unwrap();
        let result = read_optional(dir.path().join("absent.csv")).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_write_then_read() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("file.txt");

        write_atomic(&path, b"first").unwrap();
        write_atomic(&path, b"second").unwrap();

        assert_eq!(read_optional(&path).unwrap().unwrap(), b"second");
    }

    #[test]
    fn test_write_leaves_no_temporary_files() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("file.txt");

        write_atomic(&path, b"contents").unwrap();

        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("file.txt")]);
    }

    #[test]
    fn test_read_directory_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = read_optional(dir.path()).unwrap_err();
        assert!(err.is_storage_error());
    }
}
