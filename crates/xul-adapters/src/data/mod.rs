//! Data context loaders.
//!
//! A data file is a JSON or TOML document whose root is a table/object:
//!
//! ```toml
//! [user]
//! name  = "Ada"
//! admin = true
//!
//! [[orders]]
//! id = 1
//! ```
//!
//! TOML is converted to JSON values, so bindings see the same shape either way.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde_json::Value;
use thiserror::Error;
use tracing::{debug, instrument};
use xul_core::domain::{DataContext, DomainError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    Json,
    Toml,
}

impl DataFormat {
    /// Pick a format from the file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum DataError {
    #[error("Failed to read data file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported data file extension: {path} (expected .json or .toml)")]
    UnsupportedFormat { path: PathBuf },

    #[error("Invalid JSON data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid TOML data: {0}")]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Read and parse a data file, choosing the format by extension.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn load_data(path: &Path) -> Result<DataContext, DataError> {
    let format = DataFormat::from_path(path).ok_or_else(|| DataError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;

    let text = fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let context = parse_data(&text, format)?;
    debug!(keys = context.len(), "Data context loaded");
    Ok(context)
}

/// Parse data text in the given format.
pub fn parse_data(text: &str, format: DataFormat) -> Result<DataContext, DataError> {
    let value: Value = match format {
        DataFormat::Json => serde_json::from_str(text)?,
        DataFormat::Toml => toml::from_str(text)?,
    };
    Ok(DataContext::from_value(value)?)
}
