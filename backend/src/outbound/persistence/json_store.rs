//! Whole-collection JSON file store.
//!
//! Each collection lives in one pretty-printed JSON array file. Reads parse
//! the entire file; writes serialize and overwrite the entire file. There is
//! **no cross-request or cross-process locking**: two concurrent
//! load → mutate → save sequences on the same collection race, and the later
//! save wins, silently discarding the earlier writer's change (a classic
//! lost update). Callers structurally rely on these load-whole/save-whole
//! semantics; do not layer a lock in here transparently.

use std::fs;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::domain::ports::{
    AssignmentRecords, ClassRecords, EnrollmentRecords, SubmissionRecords, UserRecords,
};
use crate::domain::{Assignment, Class, Enrollment, Error, Submission, User};

/// Failures surfaced by the file store. Read-side problems are not here:
/// missing or malformed files read as an empty collection instead.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to create data directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize records for {path}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl From<StoreError> for Error {
    fn from(err: StoreError) -> Self {
        Error::internal(err.to_string())
    }
}

/// The directory holding every collection file.
pub struct DataDir {
    root: PathBuf,
}

impl DataDir {
    /// Create the directory if needed and return a handle to it.
    pub fn init(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|source| StoreError::CreateDir {
            path: root.clone(),
            source,
        })?;
        Ok(Self { root })
    }

    /// Open a collection file, seeding it with an empty array on first use.
    pub fn collection<T>(&self, file_name: &str) -> Result<JsonCollection<T>, StoreError>
    where
        T: Serialize + DeserializeOwned,
    {
        JsonCollection::open(self.root.join(file_name))
    }
}

/// One record collection backed by a single JSON array file.
pub struct JsonCollection<T> {
    path: PathBuf,
    _records: PhantomData<fn() -> T>,
}

impl<T> JsonCollection<T>
where
    T: Serialize + DeserializeOwned,
{
    fn open(path: PathBuf) -> Result<Self, StoreError> {
        if !path.exists() {
            fs::write(&path, "[]").map_err(|source| StoreError::Write {
                path: path.clone(),
                source,
            })?;
        }
        Ok(Self {
            path,
            _records: PhantomData,
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole collection in file order. A missing, unreadable, or
    /// malformed file reads as an empty collection.
    pub fn read_all(&self) -> Vec<T> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(error) => {
                warn!(path = %self.path.display(), %error, "collection unreadable, treating as empty");
                return Vec::new();
            }
        };
        match serde_json::from_str(&text) {
            Ok(records) => records,
            Err(error) => {
                warn!(path = %self.path.display(), %error, "collection malformed, treating as empty");
                Vec::new()
            }
        }
    }

    /// Serialize the full ordered sequence and overwrite the backing file.
    pub fn write_all(&self, records: &[T]) -> Result<(), StoreError> {
        let json =
            serde_json::to_string_pretty(records).map_err(|source| StoreError::Serialize {
                path: self.path.clone(),
                source,
            })?;
        fs::write(&self.path, json).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

macro_rules! impl_json_records {
    ($port:ident, $record:ty) => {
        #[async_trait]
        impl $port for JsonCollection<$record> {
            async fn load(&self) -> Result<Vec<$record>, Error> {
                Ok(self.read_all())
            }

            async fn save(&self, records: &[$record]) -> Result<(), Error> {
                Ok(self.write_all(records)?)
            }
        }
    };
}

impl_json_records!(UserRecords, User);
impl_json_records!(ClassRecords, Class);
impl_json_records!(AssignmentRecords, Assignment);
impl_json_records!(EnrollmentRecords, Enrollment);
impl_json_records!(SubmissionRecords, Submission);
