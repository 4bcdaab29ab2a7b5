#![allow(non_shorthand_field_patterns)]
#![doc = "Error handling primitives shared across the deckroute crate."]
// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! The derive emitted by [`masterror::Error`] expands pattern matches that
//! trigger the `non_shorthand_field_patterns` lint. The lint is disabled for
//! the module to keep the generated implementations warning-free while still
//! exposing a thoroughly documented error surface for library consumers.

use std::path::{Path, PathBuf};

/// Unified error type returned by the configuration loaders and CLI.
///
/// The parameter-normalization and rendering paths are infallible by design;
/// errors only arise at the edges where files, environment variables, or
/// serialized documents enter the picture. Instances are typically constructed
/// through the [`io_error`] helper or by converting from serde error types via
/// the provided `From` implementations.
#[derive(Debug, masterror::Error)]
pub enum Error {
    /// Wraps I/O errors that occur while reading configuration or snapshots.
    #[error("failed to read {path:?}: {source}")]
    Io {
        /// Location of the file being read.
        path:   PathBuf,
        /// Underlying I/O error.
        source: std::io::Error
    },
    /// Wraps YAML decoding errors from the server configuration file.
    #[error("failed to parse configuration: {source}")]
    Parse {
        /// Source decoding error from serde_yaml.
        source: serde_yaml::Error
    },
    /// Wraps JSON decoding errors from repository snapshot documents.
    #[error("failed to decode repository snapshot: {source}")]
    Snapshot {
        /// Source decoding error from serde_json.
        source: serde_json::Error
    },
    /// Wraps serialization errors when writing derived link documents.
    #[error("failed to serialize output: {source}")]
    Serialize {
        /// Underlying serialization error.
        source: serde_json::Error
    },
    /// Returned when a deployment configuration value is missing or invalid.
    ///
    /// Absolute link construction cannot proceed without a hostname and
    /// transport flag; this is a deployment defect, not a recoverable state.
    #[error("missing or invalid configuration value '{key}'")]
    Config {
        /// Name of the configuration key that failed to resolve.
        key: String
    },
    /// Returned when CLI input violates invariants.
    #[error("invalid input: {message}")]
    Validation {
        /// Human readable message describing the validation problem.
        message: String
    }
}

impl Error {
    /// Constructs a configuration error for the named key.
    ///
    /// # Parameters
    ///
    /// * `key` - Configuration key that was missing or unparsable.
    pub fn config<K>(key: K) -> Self
    where
        K: Into<String>
    {
        Self::Config {
            key: key.into()
        }
    }

    /// Constructs a validation error from the provided displayable value.
    ///
    /// # Parameters
    ///
    /// * `message` - Human-readable description of the validation failure.
    pub fn validation<M>(message: M) -> Self
    where
        M: Into<String>
    {
        Self::Validation {
            message: message.into()
        }
    }

    /// Formats the error for diagnostics without the variant name.
    ///
    /// This method is primarily intended for CLI contexts where the variant
    /// name does not add value to end users. The returned string matches the
    /// [`std::fmt::Display`] implementation.
    pub fn to_display_string(&self) -> String {
        format!("{self}")
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(source: serde_yaml::Error) -> Self {
        Self::Parse {
            source
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Self::Serialize {
            source
        }
    }
}

/// Creates an [`Error::Io`] variant capturing the failing path and source.
///
/// # Parameters
///
/// * `path` - Location of the file that triggered the error.
/// * `source` - I/O error reported by the operating system.
pub fn io_error(path: &Path, source: std::io::Error) -> Error {
    Error::Io {
        path: path.to_path_buf(),
        source
    }
}

/// Creates an [`Error::Snapshot`] variant wrapping the decoding failure.
///
/// # Parameters
///
/// * `source` - JSON error reported while decoding a snapshot document.
pub fn snapshot_error(source: serde_json::Error) -> Error {
    Error::Snapshot {
        source
    }
}
