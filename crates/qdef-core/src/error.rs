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

//! Error types for questionnaire definition parsing.

use std::fmt;
use thiserror::Error;

/// The kind of error that occurred during parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QdefErrorKind {
    /// Structurally invalid line (no `=`, bad encoding, control characters).
    Syntax,
    /// `QObject` record naming a question type that does not exist.
    UnknownKind,
    /// Record that needs an open qobject (or a specific kind of one).
    Context,
    /// `Range` record with a suffix other than `Lower`/`Upper`.
    RangeField,
    /// `Box` record with a wrong field count or box kind.
    BoxRecord,
    /// Unrecognized `CheckMode` or `Style` value.
    Config,
    /// Number that does not parse.
    Value,
    /// Resource limit exceeded.
    Security,
    /// Error while serializing a survey to another representation.
    Conversion,
}

impl fmt::Display for QdefErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Syntax => write!(f, "SyntaxError"),
            Self::UnknownKind => write!(f, "UnknownKindError"),
            Self::Context => write!(f, "ContextError"),
            Self::RangeField => write!(f, "RangeFieldError"),
            Self::BoxRecord => write!(f, "BoxRecordError"),
            Self::Config => write!(f, "ConfigError"),
            Self::Value => write!(f, "ValueError"),
            Self::Security => write!(f, "SecurityError"),
            Self::Conversion => write!(f, "ConversionError"),
        }
    }
}

/// An error that occurred while parsing a questionnaire definition.
#[derive(Debug, Clone, Error)]
#[error("{kind} at line {line}: {message}")]
pub struct QdefError {
    /// The kind of error.
    pub kind: QdefErrorKind,
    /// Human-readable error message.
    pub message: String,
    /// Line number (1-based, 0 when no source line applies).
    pub line: usize,
    /// The offending source line, when known.
    pub context: Option<String>,
}

impl QdefError {
    /// Create a new error.
    pub fn new(kind: QdefErrorKind, message: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            message: message.into(),
            line,
            context: None,
        }
    }

    /// Attach the offending source line.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn syntax(message: impl Into<String>, line: usize) -> Self {
        Self::new(QdefErrorKind::Syntax, message, line)
    }

    pub fn unknown_kind(message: impl Into<String>, line: usize) -> Self {
        Self::new(QdefErrorKind::UnknownKind, message, line)
    }

    pub fn context(message: impl Into<String>, line: usize) -> Self {
        Self::new(QdefErrorKind::Context, message, line)
    }

    pub fn range_field(message: impl Into<String>, line: usize) -> Self {
        Self::new(QdefErrorKind::RangeField, message, line)
    }

    pub fn box_record(message: impl Into<String>, line: usize) -> Self {
        Self::new(QdefErrorKind::BoxRecord, message, line)
    }

    pub fn config(message: impl Into<String>, line: usize) -> Self {
        Self::new(QdefErrorKind::Config, message, line)
    }

    pub fn value(message: impl Into<String>, line: usize) -> Self {
        Self::new(QdefErrorKind::Value, message, line)
    }

    pub fn security(message: impl Into<String>, line: usize) -> Self {
        Self::new(QdefErrorKind::Security, message, line)
    }

    pub fn conversion(message: impl Into<String>) -> Self {
        Self::new(QdefErrorKind::Conversion, message, 0)
    }

    /// Set the line number if the error was raised without one.
    pub(crate) fn at_line(mut self, line: usize) -> Self {
        if self.line == 0 {
            self.line = line;
        }
        self
    }
}

/// Result type for qdef operations.
pub type QdefResult<T> = Result<T, QdefError>;
