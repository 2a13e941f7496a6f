// SPDX-FileCopyrightText: © 2025 Projkit contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use thiserror::Error;

use std::{
    io,
    path::{Path, PathBuf},
};

pub trait ToPathBuf {
    fn to_path_buf(&self) -> PathBuf;
}

impl<P> ToPathBuf for P
where
    P: AsRef<Path>,
{
    fn to_path_buf(&self) -> PathBuf {
        self.as_ref().into()
    }
}

/// The errors arising from filesystem I/O.
/// The variants defined here include relevant context where possible.
#[derive(Error, Debug)]
pub enum FsIoError {
    #[error("failed to create directory\n  '{0}':\n  {1}")]
    MkDir(PathBuf, io::Error),
    #[error("failed to open file\n  '{0}':\n  {1}")]
    OpenFile(PathBuf, io::Error),
    #[error("failed to get metadata for\n  '{0}':\n  {1}")]
    Metadata(PathBuf, io::Error),
    #[error("failed to create a temporary file in\n  '{0}':\n  {1}")]
    CreateTempFile(PathBuf, io::Error),
    #[error("failed to write file\n  '{0}':\n  {1}")]
    WriteFile(PathBuf, io::Error),
    #[error("failed to read file\n  '{0}':\n  {1}")]
    ReadFile(PathBuf, io::Error),
    #[error("failed to move\n  '{0}' to\n  '{1}':\n  {2}")]
    Move(PathBuf, PathBuf, io::Error),
    #[error("failed to get current directory: {0}")]
    CurrentDir(io::Error),
}

/// Wrappers for filesystem I/O functions to return `FsIoError`.
/// Mirrors the `std` interface, except for the error type.
pub mod wrapfs {
    use std::fs;
    use std::io;
    use std::path::Path;

    use camino::Utf8PathBuf;

    use super::FsIoError;
    use super::ToPathBuf;

    #[allow(non_snake_case)]
    pub mod File {
        use std::fs;
        use std::path::Path;

        use super::FsIoError;
        use super::ToPathBuf;

        pub fn open<P: AsRef<Path>>(path: P) -> Result<fs::File, FsIoError> {
            fs::File::open(&path).map_err(|e| FsIoError::OpenFile(path.to_path_buf(), e))
        }
    }

    pub fn create_dir_all<P: AsRef<Path>>(path: P) -> Result<(), FsIoError> {
        fs::create_dir_all(&path).map_err(|e| FsIoError::MkDir(path.to_path_buf(), e))
    }

    pub fn write<P: AsRef<Path>, C: AsRef<[u8]>>(path: P, contents: C) -> Result<(), FsIoError> {
        fs::write(&path, contents).map_err(|e| FsIoError::WriteFile(path.to_path_buf(), e))
    }

    pub fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String, FsIoError> {
        fs::read_to_string(&path).map_err(|e| FsIoError::ReadFile(path.to_path_buf(), e))
    }

    /// `true` if `path` is an existing directory (following symlinks).
    /// A missing path, one whose parent is not a directory, or a symlink
    /// loop is `false`; any other failure is reported.
    pub fn is_dir<P: AsRef<Path>>(path: P) -> Result<bool, FsIoError> {
        match fs::metadata(&path) {
            Ok(metadata) => Ok(metadata.is_dir()),
            Err(e) if is_absent(&e) => Ok(false),
            Err(e) => Err(FsIoError::Metadata(path.to_path_buf(), e)),
        }
    }

    pub fn is_file<P: AsRef<Path>>(path: P) -> Result<bool, FsIoError> {
        match fs::metadata(&path) {
            Ok(metadata) => Ok(metadata.is_file()),
            Err(e) if is_absent(&e) => Ok(false),
            Err(e) => Err(FsIoError::Metadata(path.to_path_buf(), e)),
        }
    }

    fn is_absent(e: &io::Error) -> bool {
        matches!(
            e.kind(),
            io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
        ) || is_symlink_loop(e)
    }

    // `io::ErrorKind::FilesystemLoop` is not stable
    #[cfg(unix)]
    fn is_symlink_loop(e: &io::Error) -> bool {
        e.raw_os_error() == Some(libc::ELOOP)
    }

    #[cfg(not(unix))]
    fn is_symlink_loop(_e: &io::Error) -> bool {
        false
    }

    pub fn current_dir() -> Result<Utf8PathBuf, FsIoError> {
        let dir = std::env::current_dir().map_err(FsIoError::CurrentDir)?;
        Utf8PathBuf::from_path_buf(dir).map_err(|dir| {
            FsIoError::CurrentDir(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("path `{}` is not valid Unicode", dir.display()),
            ))
        })
    }
}
