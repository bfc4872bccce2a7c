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

//! CLI command implementations

mod convert;
mod find_box;
mod format;
mod inspect;
mod validate;

pub use convert::to_json;
pub use find_box::find_box;
pub use format::format;
pub use inspect::inspect;
pub use validate::validate;

use crate::error::CliError;
use qdef_core::{traverse, StatsCollector, Survey};
use std::fs;
use std::io::{self, Write};
use tracing::debug;

/// Default maximum file size (64 MB), matching the parser's own limit.
/// Can be overridden via the QDEF_MAX_FILE_SIZE environment variable.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 64 * 1024 * 1024;

fn get_max_file_size() -> u64 {
    std::env::var("QDEF_MAX_FILE_SIZE")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_FILE_SIZE)
}

/// Read a file from disk with size validation.
///
/// The size is checked against the file metadata before anything is read.
/// Decoding is left to the parser so that encoding errors carry a line number.
///
/// ```no_run
/// use qdef_cli::commands::read_file;
///
/// # fn main() -> Result<(), qdef_cli::error::CliError> {
/// let bytes = read_file("survey.qdef")?;
/// assert!(!bytes.is_empty());
/// # Ok(())
/// # }
/// ```
pub fn read_file(path: &str) -> Result<Vec<u8>, CliError> {
    let metadata = fs::metadata(path).map_err(|e| CliError::io_error(path, e))?;

    let max_file_size = get_max_file_size();
    if metadata.len() > max_file_size {
        return Err(CliError::file_too_large(path, metadata.len(), max_file_size));
    }

    debug!(path, bytes = metadata.len(), "reading definition file");
    fs::read(path).map_err(|e| CliError::io_error(path, e))
}

/// Read and parse a definition file.
pub fn parse_file(path: &str) -> Result<Survey, CliError> {
    let content = read_file(path)?;
    Ok(qdef_core::parse(&content)?)
}

/// Write content to a file or stdout.
pub fn write_output(content: &str, path: Option<&str>) -> Result<(), CliError> {
    match path {
        Some(p) => {
            debug!(path = p, bytes = content.len(), "writing output");
            fs::write(p, content).map_err(|e| CliError::io_error(p, e))
        }
        None => io::stdout()
            .write_all(content.as_bytes())
            .map_err(|e| CliError::io_error("<stdout>", e)),
    }
}

/// Count qobjects, answers and boxes of a survey.
pub fn collect_stats(survey: &Survey) -> StatsCollector {
    let mut stats = StatsCollector::default();
    if let Err(never) = traverse(survey, &mut stats) {
        match never {}
    }
    stats
}
