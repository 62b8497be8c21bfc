//! JSON file adapter for the complaint collection.
//!
//! The collection is kept as a pretty-printed JSON array in `<key>.json`
//! inside a data directory. Writes go through [`super::atomic_io`] so a
//! failed save never leaves a torn record behind.

use std::fmt;
use std::io;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs::Dir;
use tracing::debug;

use crate::domain::Complaint;
use crate::domain::ports::{ComplaintRepository, ComplaintRepositoryError};

use super::atomic_io::replace_file;

/// Key the collection is stored under unless configured otherwise.
pub const DEFAULT_STORE_KEY: &str = "grievance_complaints";

/// Validation errors for [`StoreKey`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreKeyError {
    /// The key was empty.
    Empty,
    /// The key contained characters outside `[A-Za-z0-9_-]`.
    InvalidCharacters {
        /// Rejected input.
        input: String,
    },
}

impl fmt::Display for StoreKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "store key must not be empty"),
            Self::InvalidCharacters { input } => write!(
                f,
                "store key may only contain ASCII letters, digits, '_' or '-': {input}"
            ),
        }
    }
}

impl std::error::Error for StoreKeyError {}

/// Name of the single record holding the collection.
///
/// Restricted to a safe file-name alphabet so the key can never escape the
/// data directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StoreKey(String);

impl StoreKey {
    /// Validate and construct a [`StoreKey`].
    pub fn new(key: impl Into<String>) -> Result<Self, StoreKeyError> {
        let key = key.into();
        if key.is_empty() {
            return Err(StoreKeyError::Empty);
        }
        if !key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(StoreKeyError::InvalidCharacters { input: key });
        }
        Ok(Self(key))
    }

    /// File name backing this key.
    pub fn file_name(&self) -> Utf8PathBuf {
        Utf8PathBuf::from(format!("{}.json", self.0))
    }
}

impl Default for StoreKey {
    fn default() -> Self {
        Self(DEFAULT_STORE_KEY.to_owned())
    }
}

impl AsRef<str> for StoreKey {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

/// Stores the complaint collection as a JSON file.
#[derive(Debug)]
pub struct JsonFileComplaintRepository {
    dir: Dir,
    file_name: Utf8PathBuf,
}

impl JsonFileComplaintRepository {
    /// Open (creating if needed) `data_dir` and bind the repository to `key`.
    pub fn open(data_dir: &Utf8Path, key: &StoreKey) -> Result<Self, ComplaintRepositoryError> {
        Dir::create_ambient_dir_all(data_dir, ambient_authority()).map_err(|err| {
            ComplaintRepositoryError::write(format!("creating {data_dir}: {err}"))
        })?;
        let dir = Dir::open_ambient_dir(data_dir, ambient_authority()).map_err(|err| {
            ComplaintRepositoryError::read(format!("opening {data_dir}: {err}"))
        })?;
        Ok(Self::from_dir(dir, key))
    }

    /// Bind the repository to an already opened directory.
    pub fn from_dir(dir: Dir, key: &StoreKey) -> Self {
        Self {
            dir,
            file_name: key.file_name(),
        }
    }

    /// File name of the record inside the data directory.
    pub fn file_name(&self) -> &Utf8Path {
        self.file_name.as_path()
    }
}

impl ComplaintRepository for JsonFileComplaintRepository {
    fn load(&self) -> Result<Vec<Complaint>, ComplaintRepositoryError> {
        let text = match self.dir.read_to_string(&self.file_name) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(file = %self.file_name, "no complaint record; starting empty");
                return Ok(Vec::new());
            }
            Err(err) => {
                return Err(ComplaintRepositoryError::read(format!(
                    "{}: {err}",
                    self.file_name
                )));
            }
        };
        let complaints = decode(&text)?;
        debug!(file = %self.file_name, count = complaints.len(), "complaint record loaded");
        Ok(complaints)
    }

    fn save(&self, complaints: &[Complaint]) -> Result<(), ComplaintRepositoryError> {
        let text = encode(complaints)?;
        replace_file(&self.dir, &self.file_name, &text)?;
        debug!(file = %self.file_name, count = complaints.len(), "complaint record written");
        Ok(())
    }
}

/// Parse a serialized collection. Blank text is an empty collection.
pub(crate) fn decode(text: &str) -> Result<Vec<Complaint>, ComplaintRepositoryError> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(text).map_err(|err| ComplaintRepositoryError::corrupt(err.to_string()))
}

/// Serialize a collection as a pretty-printed JSON array.
pub(crate) fn encode(complaints: &[Complaint]) -> Result<String, ComplaintRepositoryError> {
    serde_json::to_string_pretty(complaints)
        .map_err(|err| ComplaintRepositoryError::write(err.to_string()))
}
