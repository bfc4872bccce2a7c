// qdef - Questionnaire Definition Format
//
// Copyright (c) 2025 qdef contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Structured error types for the qdef CLI.
//!
//! All commands return `Result<(), CliError>`; `main` prints the error and
//! exits non-zero.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for qdef CLI operations.
#[derive(Error, Debug, Clone)]
pub enum CliError {
    /// I/O operation failed (file read, write, or metadata access).
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// File size exceeds the configured limit.
    #[error("File '{path}' is too large ({actual} bytes). Maximum allowed: {max} bytes ({max_mb} MB)")]
    FileTooLarge {
        path: PathBuf,
        actual: u64,
        max: u64,
        max_mb: u64,
    },

    /// Definition file failed to parse.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Survey could not be written back as a definition file.
    #[error("Canonicalization error: {0}")]
    Canonicalization(String),

    /// Survey could not be converted to JSON.
    #[error("JSON conversion error: {0}")]
    JsonConversion(String),

    /// Returned by `format --check`.
    #[error("File is not in canonical form")]
    NotCanonical,

    /// `find-box` hit nothing.
    #[error("No box on page {page} at ({x}, {y})")]
    NoBox { page: u32, x: f64, y: f64 },

    /// Invalid input provided by the user.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CliError {
    /// Create an I/O error with file path context.
    ///
    /// ```rust,no_run
    /// use qdef_cli::error::CliError;
    ///
    /// let result = std::fs::read_to_string("survey.qdef")
    ///     .map_err(|e| CliError::io_error("survey.qdef", e));
    /// ```
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    pub fn file_too_large(path: impl Into<PathBuf>, actual: u64, max: u64) -> Self {
        Self::FileTooLarge {
            path: path.into(),
            actual,
            max,
            max_mb: max / (1024 * 1024),
        }
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    pub fn canonicalization(msg: impl Into<String>) -> Self {
        Self::Canonicalization(msg.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

impl From<qdef_core::QdefError> for CliError {
    fn from(source: qdef_core::QdefError) -> Self {
        Self::Parse(source.to_string())
    }
}
