//! Decoded record files.
//!
//! A [`Record`] is the string-keyed content of exactly one source file. Both
//! decoders produce the same JSON value model, so graph models read TOML and
//! JSON records through one set of accessors.

use std::fmt;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::error::{RecordDecodeError, StepError};

/// The closed set of record formats the walker can decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    /// TOML documents (`*.toml`).
    Toml,
    /// JSON documents (`*.json`).
    Json,
}

impl FileFormat {
    /// Resolves a descriptor `file_extension`, with or without a leading dot.
    #[must_use]
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.trim().trim_start_matches('.') {
            "toml" => Some(FileFormat::Toml),
            "json" => Some(FileFormat::Json),
            _ => None,
        }
    }

    /// The file extension matched during traversal, without the dot.
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            FileFormat::Toml => "toml",
            FileFormat::Json => "json",
        }
    }

    /// Returns whether `path` carries this format's extension.
    #[must_use]
    pub fn matches(self, path: &Path) -> bool {
        path.extension().is_some_and(|ext| ext == self.extension())
    }

    /// Decodes `text` into a record.
    ///
    /// # Errors
    ///
    /// Returns [`RecordDecodeError`] if `text` is not valid in this format or
    /// its top level is not a table/object.
    pub fn decode(self, path: &Path, text: &str) -> Result<Record, RecordDecodeError> {
        let fields: Map<String, Value> = match self {
            FileFormat::Toml => toml::from_str(text).map_err(RecordDecodeError::new)?,
            FileFormat::Json => serde_json::from_str(text).map_err(RecordDecodeError::new)?,
        };
        Ok(Record {
            path: path.to_path_buf(),
            fields,
        })
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// The decoded content of one source file.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    path: PathBuf,
    fields: Map<String, Value>,
}

impl Record {
    /// Builds a record from an already-decoded field map.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, fields: Map<String, Value>) -> Self {
        Self {
            path: path.into(),
            fields,
        }
    }

    /// The file this record was decoded from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw access to a field.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Returns a string field; `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns [`StepError::FieldType`] if the field is present but not a string.
    pub fn str_field(&self, field: &str) -> Result<Option<&str>, StepError> {
        match self.fields.get(field) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.as_str())),
            Some(_) => Err(type_error(field, "a string")),
        }
    }

    /// Returns a string field that must be present.
    ///
    /// # Errors
    ///
    /// Returns [`StepError::MissingField`] if the field is absent, or
    /// [`StepError::FieldType`] if it is not a string.
    pub fn require_str(&self, field: &str) -> Result<&str, StepError> {
        self.str_field(field)?
            .ok_or_else(|| StepError::MissingField(field.to_owned()))
    }

    /// Returns a list-of-strings field; `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns [`StepError::FieldType`] if the field is not an array of strings.
    pub fn str_list(&self, field: &str) -> Result<Option<Vec<&str>>, StepError> {
        let Some(items) = self.list(field, "an array of strings")? else {
            return Ok(None);
        };
        items
            .iter()
            .map(|item| item.as_str().ok_or_else(|| type_error(field, "an array of strings")))
            .collect::<Result<Vec<_>, _>>()
            .map(Some)
    }

    /// Returns a list-of-tables field (e.g. TOML `[[repo]]`); `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns [`StepError::FieldType`] if the field is not an array of tables.
    pub fn table_list(&self, field: &str) -> Result<Option<Vec<&Map<String, Value>>>, StepError> {
        let Some(items) = self.list(field, "an array of tables")? else {
            return Ok(None);
        };
        items
            .iter()
            .map(|item| item.as_object().ok_or_else(|| type_error(field, "an array of tables")))
            .collect::<Result<Vec<_>, _>>()
            .map(Some)
    }

    fn list(&self, field: &str, expected: &'static str) -> Result<Option<&Vec<Value>>, StepError> {
        match self.fields.get(field) {
            None => Ok(None),
            Some(Value::Array(items)) => Ok(Some(items)),
            Some(_) => Err(type_error(field, expected)),
        }
    }
}

fn type_error(field: &str, expected: &'static str) -> StepError {
    StepError::FieldType {
        field: field.to_owned(),
        expected,
    }
}
