// SPDX-FileCopyrightText: © 2025 Projkit contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Saving and loading serde values.
//!
//! Writes go to a temporary file next to the destination which is then
//! renamed over it, so a failed save leaves any previous file untouched.

use std::io::{BufReader, BufWriter, Read, Write};

use camino::{Utf8Path, Utf8PathBuf};
use camino_tempfile::NamedUtf8TempFile;
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

use crate::utils::{FsIoError, wrapfs};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Pretty-printed JSON.
    Json,
    /// Compact `bincode` encoding.
    #[default]
    Binary,
}

#[derive(Error, Debug)]
pub enum CodecError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Binary(#[from] bincode::Error),
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to save object to `{path}`")]
    Save {
        path: Utf8PathBuf,
        #[source]
        source: CodecError,
    },
    #[error("failed to load object from `{path}`")]
    Load {
        path: Utf8PathBuf,
        #[source]
        source: CodecError,
    },
    #[error(transparent)]
    Io(#[from] Box<FsIoError>),
}

impl From<FsIoError> for StoreError {
    fn from(v: FsIoError) -> Self {
        Self::Io(Box::new(v))
    }
}

impl Format {
    fn encode<W: Write, T: Serialize + ?Sized>(
        &self,
        writer: &mut W,
        value: &T,
    ) -> Result<(), CodecError> {
        match self {
            Format::Json => {
                serde_json::to_writer_pretty(&mut *writer, value)?;
                writer.write_all(b"\n").map_err(serde_json::Error::io)?;
            }
            Format::Binary => bincode::serialize_into(writer, value)?,
        }
        Ok(())
    }

    fn decode<R: Read, T: DeserializeOwned>(&self, reader: R) -> Result<T, CodecError> {
        Ok(match self {
            Format::Json => serde_json::from_reader(reader)?,
            Format::Binary => bincode::deserialize_from(reader)?,
        })
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ObjectStore {
    pub format: Format,
    /// Log every successful save and load.
    pub verbose: bool,
}

impl ObjectStore {
    pub fn new(format: Format) -> Self {
        Self {
            format,
            verbose: false,
        }
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn save<T, P>(&self, value: &T, path: P) -> Result<(), StoreError>
    where
        T: Serialize + ?Sized,
        P: AsRef<Utf8Path>,
    {
        let path = path.as_ref();
        self.try_save(value, path).inspect_err(|e| {
            log::debug!("saving `{path}` failed: {}", error_chain(e));
        })?;

        if self.verbose {
            log::info!("object saved to `{path}`");
        }
        Ok(())
    }

    fn try_save<T: Serialize + ?Sized>(
        &self,
        value: &T,
        path: &Utf8Path,
    ) -> Result<(), StoreError> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_str().is_empty() => parent,
            _ => Utf8Path::new("."),
        };

        let mut temp = NamedUtf8TempFile::new_in(dir)
            .map_err(|e| FsIoError::CreateTempFile(dir.as_std_path().to_path_buf(), e))?;
        {
            let mut writer = BufWriter::new(temp.as_file_mut());
            self.format
                .encode(&mut writer, value)
                .map_err(|source| StoreError::Save {
                    path: path.to_path_buf(),
                    source,
                })?;
            writer
                .flush()
                .map_err(|e| FsIoError::WriteFile(path.as_std_path().to_path_buf(), e))?;
        }

        temp.persist(path).map_err(|e| {
            let temp_path = e.file.path().as_std_path().to_path_buf();
            FsIoError::Move(temp_path, path.as_std_path().to_path_buf(), e.error)
        })?;

        Ok(())
    }

    pub fn load<T, P>(&self, path: P) -> Result<T, StoreError>
    where
        T: DeserializeOwned,
        P: AsRef<Utf8Path>,
    {
        let path = path.as_ref();
        let value = self.try_load(path).inspect_err(|e| {
            log::debug!("loading `{path}` failed: {}", error_chain(e));
        })?;

        if self.verbose {
            log::info!("object loaded from `{path}`");
        }
        Ok(value)
    }

    fn try_load<T: DeserializeOwned>(&self, path: &Utf8Path) -> Result<T, StoreError> {
        let reader = BufReader::new(wrapfs::File::open(path)?);
        self.format
            .decode(reader)
            .map_err(|source| StoreError::Load {
                path: path.to_path_buf(),
                source,
            })
    }
}

/// Save `value` to `path` with the default binary format.
pub fn save<T, P>(value: &T, path: P) -> Result<(), StoreError>
where
    T: Serialize + ?Sized,
    P: AsRef<Utf8Path>,
{
    ObjectStore::default().save(value, path)
}

/// Load a value previously written by [`save`].
pub fn load<T, P>(path: P) -> Result<T, StoreError>
where
    T: DeserializeOwned,
    P: AsRef<Utf8Path>,
{
    ObjectStore::default().load(path)
}

fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
